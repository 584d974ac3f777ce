use common::{Product, ProductPayload};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductField {
    Name,
    Description,
    Price,
    Category,
    ImageUrl,
}

/// Values of the product modal, kept as the raw input text.
///
/// `id` is set when an existing product is being edited.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
    pub price: String,
    pub category: String,
    pub image_url: String,
}

impl ProductForm {
    pub fn blank(default_category: Option<&str>) -> Self {
        Self {
            category: default_category.unwrap_or_default().to_string(),
            ..Self::default()
        }
    }

    pub fn from_product(product: &Product) -> Self {
        Self {
            id: Some(product.id),
            name: product.name.clone(),
            description: product.description.clone().unwrap_or_default(),
            price: product.price.to_string(),
            category: product.category.clone(),
            image_url: product.image_url.clone().unwrap_or_default(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.id.is_some()
    }

    pub fn title(&self) -> &'static str {
        if self.is_editing() {
            "Edit Product"
        } else {
            "Add Product"
        }
    }

    pub fn set(&mut self, field: ProductField, value: String) {
        match field {
            ProductField::Name => self.name = value,
            ProductField::Description => self.description = value,
            ProductField::Price => self.price = value,
            ProductField::Category => self.category = value,
            ProductField::ImageUrl => self.image_url = value,
        }
    }

    pub fn to_payload(&self) -> ProductPayload {
        ProductPayload {
            name: self.name.clone(),
            description: self.description.clone(),
            price: self
                .price
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|price| price.is_finite()),
            category: self.category.clone(),
            image_url: self.image_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> Product {
        Product {
            id: 4,
            name: "Brinco de resina".to_string(),
            description: None,
            price: 35.5,
            category: "Joias".to_string(),
            image_url: Some("https://cdn.example.com/brinco.png".to_string()),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_blank_form_is_create() {
        let form = ProductForm::blank(Some("Joias"));
        assert!(!form.is_editing());
        assert_eq!(form.title(), "Add Product");
        assert_eq!(form.category, "Joias");
        assert!(form.name.is_empty());

        assert_eq!(ProductForm::blank(None).category, "");
    }

    #[test]
    fn test_form_from_product() {
        let form = ProductForm::from_product(&product());
        assert_eq!(form.id, Some(4));
        assert_eq!(form.title(), "Edit Product");
        assert_eq!(form.price, "35.5");
        assert_eq!(form.description, "");
        assert_eq!(form.image_url, "https://cdn.example.com/brinco.png");
    }

    #[test]
    fn test_payload_parses_price() {
        let mut form = ProductForm::blank(Some("Joias"));
        form.set(ProductField::Name, "Colar".to_string());
        form.set(ProductField::Price, " 12.50 ".to_string());

        let payload = form.to_payload();
        assert_eq!(payload.name, "Colar");
        assert_eq!(payload.price, Some(12.5));
        assert_eq!(payload.category, "Joias");
    }

    #[test]
    fn test_payload_unreadable_price() {
        let mut form = ProductForm::default();
        form.set(ProductField::Price, "doze".to_string());
        assert_eq!(form.to_payload().price, None);

        form.set(ProductField::Price, String::new());
        assert_eq!(form.to_payload().price, None);

        form.set(ProductField::Price, "NaN".to_string());
        assert_eq!(form.to_payload().price, None);
    }
}
