//! In-process HTTP client
//!
//! Drives an axum `Router` through tower's oneshot call, for embedders that
//! host the Food API in the same process. Zero network overhead.

use async_trait::async_trait;
use axum::Router;
use axum::body::{Body, Bytes};
use http::{Method, Request, StatusCode};
use serde::de::DeserializeOwned;
use tower::ServiceExt;

use super::http::HttpClient;
use crate::error::{ClientError, ClientResult};

/// Oneshot HTTP client (in-memory calls)
#[derive(Debug, Clone)]
pub struct OneshotHttpClient {
    router: Router,
}

impl OneshotHttpClient {
    /// Create a client over an already-initialized router (`with_state` applied)
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    fn build_request(method: Method, path: &str) -> ClientResult<Request<Body>> {
        Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::empty())
            .map_err(|e| ClientError::Internal(format!("failed to build request: {e}")))
    }

    fn build_request_with_body<B: serde::Serialize>(
        method: Method,
        path: &str,
        body: &B,
    ) -> ClientResult<Request<Body>> {
        let bytes = serde_json::to_vec(body)?;
        Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(bytes))
            .map_err(|e| ClientError::Internal(format!("failed to build request: {e}")))
    }

    async fn send(&self, request: Request<Body>) -> ClientResult<(StatusCode, Bytes)> {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .map_err(|e| ClientError::Internal(format!("oneshot call failed: {e}")))?;

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|e| ClientError::Internal(format!("failed to read body: {e}")))?;

        if !status.is_success() {
            let text = String::from_utf8_lossy(&bytes).into_owned();
            return Err(ClientError::from_status(status, text));
        }
        Ok((status, bytes))
    }

    async fn execute<T: DeserializeOwned>(&self, request: Request<Body>) -> ClientResult<T> {
        let (_status, bytes) = self.send(request).await?;
        serde_json::from_slice(&bytes)
            .map_err(|e| ClientError::InvalidResponse(format!("JSON parse error: {e}")))
    }
}

#[async_trait]
impl HttpClient for OneshotHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = Self::build_request(Method::GET, path)?;
        self.execute(request).await
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = Self::build_request_with_body(Method::POST, path, body)?;
        self.execute(request).await
    }

    async fn put<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = Self::build_request_with_body(Method::PUT, path, body)?;
        self.execute(request).await
    }

    async fn delete(&self, path: &str) -> ClientResult<()> {
        let request = Self::build_request(Method::DELETE, path)?;
        self.send(request).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oneshot_client_wraps_an_empty_router() {
        let router: Router = Router::new();
        let _client = OneshotHttpClient::new(router);
    }
}
