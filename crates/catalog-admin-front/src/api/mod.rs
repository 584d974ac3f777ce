pub mod categories;
pub mod client;
pub mod error;
#[cfg(target_arch = "wasm32")]
pub mod fetch;
pub mod products;

pub use client::{ApiRequest, ApiResponse, Method, Transport};
pub use error::ApiError;

/// Calls the catalog REST API through a [`Transport`].
#[derive(Clone)]
pub struct APICaller<T> {
    base_url: String,
    transport: T,
}

impl<T: Transport> APICaller<T> {
    pub fn new(base_url: impl Into<String>, transport: T) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
