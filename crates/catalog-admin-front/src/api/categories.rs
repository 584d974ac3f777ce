use common::{Category, CategoryPayload};

use super::client::{Method, Transport};
use super::{APICaller, ApiError};

impl<T: Transport> APICaller<T> {
    pub async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get_json("/categories").await
    }

    pub async fn create_category(&self, payload: &CategoryPayload) -> Result<(), ApiError> {
        self.send_json(Method::Post, "/categories", payload).await
    }

    pub async fn update_category(&self, id: i64, payload: &CategoryPayload) -> Result<(), ApiError> {
        self.send_json(Method::Put, &format!("/categories/{}", id), payload)
            .await
    }

    pub async fn delete_category(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/categories/{}", id)).await
    }
}
