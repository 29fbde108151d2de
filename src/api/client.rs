use reqwest::{Client, Response};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::config::AppConfig;
use crate::models::ErrorBody;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Server error ({status}): {}", .message.as_deref().unwrap_or("no details"))]
    Server { status: u16, message: Option<String> },
}

impl ApiError {
    /// The `error` text the server sent back, if it sent one
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Server { message, .. } => message.as_deref(),
            ApiError::Network(_) => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    base_url: String,
    client: Client,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        // On wasm, we can't use timeout
        #[cfg(target_arch = "wasm32")]
        let client = {
            let _ = timeout;
            Client::new()
        };

        #[cfg(not(target_arch = "wasm32"))]
        let client = Client::builder().timeout(timeout).build()?;

        Ok(ApiClient {
            inner: Arc::new(ApiClientInner {
                base_url: base_url.trim_end_matches('/').to_string(),
                client,
            }),
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, ApiError> {
        Self::new(&config.api_url, config.request_timeout)
    }

    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// POSTs a JSON body to an endpoint whose success response carries no contract.
    pub async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let url = format!("{}{}", self.inner.base_url, path);
        tracing::debug!("POST {}", url);

        let response = self.inner.client.post(&url).json(body).send().await?;
        self.handle_empty_response(response).await
    }

    async fn handle_empty_response(&self, response: Response) -> Result<(), ApiError> {
        let status = response.status();

        if status.is_success() {
            return Ok(());
        }

        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&text)
            .ok()
            .and_then(|body| body.error)
            .filter(|m| !m.trim().is_empty());

        Err(ApiError::Server { status: status.as_u16(), message })
    }
}

// Global API client instance
static API_CLIENT: std::sync::OnceLock<ApiClient> = std::sync::OnceLock::new();

pub fn init_api_client(config: &AppConfig) -> Result<(), ApiError> {
    let client = ApiClient::from_config(config)?;
    let _ = API_CLIENT.set(client);
    Ok(())
}

pub fn api_client() -> &'static ApiClient {
    API_CLIENT.get().expect("API client not initialized. Call init_api_client first.")
}
