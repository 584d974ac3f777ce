use serde::{Deserialize, Serialize};

/// Body of `POST /categories` and `PUT /categories/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryPayload {
    pub name: String,
    pub description: String,
    pub color: String,
}
