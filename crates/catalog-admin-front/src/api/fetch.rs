use gloo_net::http::Request;

use super::client::{ApiRequest, ApiResponse, Method, Transport};
use super::ApiError;

/// [`Transport`] backed by the browser `fetch` API.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FetchTransport;

impl Transport for FetchTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
            Method::Delete => Request::delete(&request.url),
        };

        let response = match request.body {
            Some(body) => {
                builder
                    .header("Content-Type", "application/json")
                    .body(body)
                    .map_err(|e| ApiError::Network(format!("Body error: {}", e)))?
                    .send()
                    .await
            }
            None => builder.send().await,
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(format!("Response read error: {}", e)))?;

        Ok(ApiResponse { status, body })
    }
}
