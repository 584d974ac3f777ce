use serde::{Deserialize, Serialize};

use super::null_as_default;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    /// Name of the category; not checked against the category list.
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Product {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref().filter(|u| !u.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_product() {
        let product: Product = serde_json::from_str(
            r#"{
                "id": 7,
                "name": "Colar de resina",
                "description": "Colar artesanal",
                "price": 89.9,
                "category": "Joias",
                "image_url": "https://cdn.example.com/colar.png",
                "created_at": "2024-05-01T10:00:00",
                "updated_at": "2024-05-02T11:30:00"
            }"#,
        )
        .unwrap();

        assert_eq!(product.id, 7);
        assert_eq!(product.category, "Joias");
        assert_eq!(product.description(), Some("Colar artesanal"));
        assert_eq!(product.image_url(), Some("https://cdn.example.com/colar.png"));
        assert_eq!(product.updated_at.as_deref(), Some("2024-05-02T11:30:00"));
    }

    #[test]
    fn test_deserialize_minimal_product() {
        let product: Product =
            serde_json::from_str(r#"{"id": 1, "name": "Chaveiro", "price": 15}"#).unwrap();

        assert_eq!(product.price, 15.0);
        assert_eq!(product.category, "");
        assert_eq!(product.description(), None);
        assert_eq!(product.image_url(), None);
    }

    #[test]
    fn test_empty_strings_read_as_absent() {
        let product: Product = serde_json::from_str(
            r#"{"id": 2, "name": "Vaso", "description": "", "price": 40.0, "category": "Decoração", "image_url": ""}"#,
        )
        .unwrap();

        assert_eq!(product.description(), None);
        assert_eq!(product.image_url(), None);
    }

    #[test]
    fn test_null_category_reads_as_empty() {
        let products: Vec<Product> = serde_json::from_str(
            r#"[
                {"id": 1, "name": "Colar", "price": 89.9, "category": "Joias"},
                {"id": 2, "name": "Sem categoria", "description": null, "price": 10, "category": null, "image_url": null}
            ]"#,
        )
        .unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].category, "Joias");
        assert_eq!(products[1].category, "");
        assert_eq!(products[1].description(), None);
    }
}
