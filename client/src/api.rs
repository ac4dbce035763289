use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::types::{CreateUser, ErrorBody, Greeting, Health, User};

/// Thin wrapper over the userboard HTTP API.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        if base_url.is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        let base_url = base_url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .user_agent(format!("userboard/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET /api/hello
    pub async fn hello(&self) -> Result<Greeting> {
        self.get("/api/hello").await
    }

    /// GET /api/users
    pub async fn list_users(&self) -> Result<Vec<User>> {
        self.get("/api/users").await
    }

    /// POST /api/users
    pub async fn create_user(&self, user: &CreateUser) -> Result<User> {
        let url = self.url("/api/users");
        debug!(url = %url, "POST");

        let response = self.http.post(&url).json(user).send().await?;
        decode(response).await
    }

    /// GET /api/health
    pub async fn health(&self) -> Result<Health> {
        self.get("/api/health").await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        debug!(url = %url, "GET");

        let response = self.http.get(&url).send().await?;
        decode(response).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }

    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&text)
        .map(|body| body.error)
        .unwrap_or(text);

    Err(ClientError::Server {
        status: status.as_u16(),
        message,
    })
}
