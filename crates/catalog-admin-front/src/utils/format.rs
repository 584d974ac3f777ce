use crate::config::{CURRENCY_PREFIX, DESCRIPTION_PREVIEW_CHARS, PLACEHOLDER_IMAGE};

pub fn format_price(price: f64) -> String {
    format!("{} {:.2}", CURRENCY_PREFIX, price)
}

/// Short description for table rows. Counts characters, not bytes.
pub fn description_preview(description: Option<&str>) -> String {
    match description {
        Some(text) if text.chars().count() > DESCRIPTION_PREVIEW_CHARS => {
            let head: String = text.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
            format!("{}...", head)
        }
        Some(text) => text.to_string(),
        None => String::new(),
    }
}

pub fn category_initial(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

pub fn product_image(image_url: Option<&str>) -> &str {
    image_url.unwrap_or(PLACEHOLDER_IMAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(12.5), "R$ 12.50");
        assert_eq!(format_price(0.0), "R$ 0.00");
        assert_eq!(format_price(1999.999), "R$ 2000.00");
    }

    #[test]
    fn test_description_preview() {
        assert_eq!(description_preview(None), "");
        assert_eq!(description_preview(Some("Colar artesanal")), "Colar artesanal");

        let long = "ç".repeat(60);
        let preview = description_preview(Some(&long));
        assert_eq!(preview, format!("{}...", "ç".repeat(50)));
    }

    #[test]
    fn test_category_initial() {
        assert_eq!(category_initial("joias"), "J");
        assert_eq!(category_initial("éter"), "É");
        assert_eq!(category_initial(""), "");
    }

    #[test]
    fn test_product_image_placeholder() {
        assert_eq!(product_image(None), PLACEHOLDER_IMAGE);
        assert_eq!(product_image(Some("https://cdn.example.com/a.png")), "https://cdn.example.com/a.png");
    }
}
