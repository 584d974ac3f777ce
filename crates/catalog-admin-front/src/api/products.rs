use common::{Product, ProductPayload};

use super::client::{Method, Transport};
use super::{APICaller, ApiError};

impl<T: Transport> APICaller<T> {
    pub async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        self.get_json("/products").await
    }

    pub async fn get_product(&self, id: i64) -> Result<Product, ApiError> {
        self.get_json(&format!("/products/{}", id)).await
    }

    pub async fn create_product(&self, payload: &ProductPayload) -> Result<(), ApiError> {
        self.send_json(Method::Post, "/products", payload).await
    }

    pub async fn update_product(&self, id: i64, payload: &ProductPayload) -> Result<(), ApiError> {
        self.send_json(Method::Put, &format!("/products/{}", id), payload)
            .await
    }

    pub async fn delete_product(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/products/{}", id)).await
    }
}
