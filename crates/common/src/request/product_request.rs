use serde::{Deserialize, Serialize};

/// Body of `POST /products` and `PUT /products/{id}`.
///
/// Every field is always sent. `price` is `None` when the form input could not
/// be read as a number, which goes over the wire as `null` and lets the server
/// reject it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPayload {
    pub name: String,
    pub description: String,
    pub price: Option<f64>,
    pub category: String,
    pub image_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_sends_every_field() {
        let payload = ProductPayload {
            name: "Coffee".to_string(),
            description: String::new(),
            price: Some(12.5),
            category: "Beverages".to_string(),
            image_url: String::new(),
        };

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "name": "Coffee",
                "description": "",
                "price": 12.5,
                "category": "Beverages",
                "image_url": ""
            })
        );
    }

    #[test]
    fn test_unreadable_price_is_null() {
        let payload = ProductPayload {
            name: "Colar".to_string(),
            description: String::new(),
            price: None,
            category: "Joias".to_string(),
            image_url: String::new(),
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert!(value["price"].is_null());
    }
}
