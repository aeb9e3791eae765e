use std::sync::Arc;

use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::core::config::BackendConfig;
use crate::core::error::{AppError, Result};
use crate::core::session::Session;

/// Query string pairs; keys may repeat (`groupIds[]=1&groupIds[]=2`)
pub type QueryPairs = Vec<(String, String)>;

/// Shared HTTP client for the intranet backend.
///
/// Attaches the session token to every request and turns non-2xx replies
/// into [`AppError`]. A 401 expires the shared [`Session`] before the error
/// is returned.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    auth_header: String,
    http_client: reqwest::Client,
    session: Arc<Session>,
}

impl ApiClient {
    pub fn new(config: &BackendConfig, session: Arc<Session>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auth_header: config.auth_header.clone(),
            http_client,
            session,
        })
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        tracing::debug!("{} {}", method, url);

        let builder = self.http_client.request(method, &url);
        match self.session.token().await {
            Some(token) => builder.header(self.auth_header.as_str(), format!("Bearer {}", token)),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response> {
        let response = builder.send().await.map_err(|e| {
            tracing::error!("Backend request failed: {}", e);
            AppError::Http(e)
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::error!("Backend error: HTTP {} - {}", status, body);

        let error = AppError::from_status(status, error_message(&body));
        if error.is_unauthorized() {
            self.session.expire().await;
        }
        Err(error)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse backend response: {}", e);
            AppError::Decode(e)
        })
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &QueryPairs) -> Result<T> {
        let builder = self.request(Method::GET, path).await.query(query);
        let response = self.send(builder).await?;
        Self::decode(response).await
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(Method::POST, path).await.json(body);
        let response = self.send(builder).await?;
        Self::decode(response).await
    }

    pub async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(Method::PUT, path).await.json(body);
        let response = self.send(builder).await?;
        Self::decode(response).await
    }

    /// Send a body and ignore whatever the backend answers on success
    pub async fn send_json<B>(&self, method: Method, path: &str, body: &B) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        let builder = self.request(method, path).await.json(body);
        self.send(builder).await?;
        Ok(())
    }
}

/// Extract the backend's `message` field; validation replies carry a list
fn error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("message")? {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Array(items) => {
            let parts: Vec<String> = items
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect();
            (!parts.is_empty()).then(|| parts.join("; "))
        }
        _ => None,
    }
}
