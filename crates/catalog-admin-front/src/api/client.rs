use std::fmt;

use common::Failure;
use serde::{de::DeserializeOwned, Serialize};

use super::{APICaller, ApiError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One outgoing HTTP request. `body` is JSON text when present.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a single request and hands back whatever the server answered.
///
/// Implementations only fail for transport problems; HTTP error statuses are
/// returned as a normal [`ApiResponse`].
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

impl<T: Transport> APICaller<T> {
    pub(crate) async fn get_json<R>(&self, path: &str) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
    {
        let response = self.call(Method::Get, path, None).await?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub(crate) async fn send_json<B>(&self, method: Method, path: &str, body: &B) -> Result<(), ApiError>
    where
        B: Serialize,
    {
        let body = serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.call(method, path, Some(body)).await?;
        Ok(())
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.call(Method::Delete, path, None).await?;
        Ok(())
    }

    async fn call(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest {
            method,
            url: self.url(path),
            body,
        };
        log::debug!("{} {}", request.method, request.url);

        let response = self.transport.send(request).await?;

        if !response.ok() {
            return Err(ApiError::Status {
                status: response.status,
                message: Failure::message_from_body(&response.body),
            });
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_covers_2xx_only() {
        let response = |status| ApiResponse {
            status,
            body: String::new(),
        };
        assert!(response(200).ok());
        assert!(response(201).ok());
        assert!(response(204).ok());
        assert!(!response(199).ok());
        assert!(!response(302).ok());
        assert!(!response(400).ok());
        assert!(!response(500).ok());
    }

    #[test]
    fn test_method_names() {
        assert_eq!(Method::Get.to_string(), "GET");
        assert_eq!(Method::Put.as_str(), "PUT");
    }
}
