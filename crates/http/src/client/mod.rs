//! Portal API client
//!
//! All responses are JSON. A 401 on any request triggers one serialized
//! token renewal (see [`refresh`]) after which the original request is
//! replayed exactly once with the new bearer credential.

pub mod auth;
pub mod letters;
pub mod organizations;
pub mod refresh;
pub mod staff;
pub mod statistics;

use crate::error::ClientError;
use certportal_core::credentials::{CredentialStore, MemoryCredentialStore};
use refresh::RefreshGate;
use reqwest::{Client, ClientBuilder, Request, RequestBuilder, StatusCode, header};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Default backend endpoint
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Portal API client
///
/// Cheap to clone; clones share the credential store and the renewal gate,
/// so at most one renewal is in flight across all of them.
#[derive(Clone)]
pub struct PortalClient {
    http: Client,
    base_url: String,
    credentials: Arc<dyn CredentialStore>,
    refresh: Arc<RefreshGate>,
}

impl PortalClient {
    /// Create a new client with default configuration
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::builder().base_url(base_url).build()
    }

    /// Create a new client builder
    pub fn builder() -> PortalClientBuilder {
        PortalClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The credential store backing this client
    pub fn credentials(&self) -> &Arc<dyn CredentialStore> {
        &self.credentials
    }

    /// Create a request builder for a path under the base URL
    ///
    /// The bearer credential is attached at send time, not here, so the
    /// builder stays token-agnostic and replays pick up renewed tokens.
    pub fn request(&self, method: reqwest::Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.http.request(method, url)
    }

    /// Execute a request and deserialize the JSON response
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = self.send(request).await?;
        Ok(response.json().await?)
    }

    /// Execute a request, discarding the response body
    pub async fn execute_empty(&self, request: RequestBuilder) -> Result<(), ClientError> {
        self.send(request).await.map(drop)
    }

    /// Send a request with bearer attachment and one-shot session renewal
    ///
    /// Returns the response only for success statuses; every error status is
    /// mapped through [`ClientError::from_status`].
    async fn send(&self, request: RequestBuilder) -> Result<reqwest::Response, ClientError> {
        let mut request = request.build()?;
        if let Some(token) = self.credentials.access_token()? {
            set_bearer(&mut request, &token)?;
        }

        // Streaming bodies cannot be cloned; those requests get no replay.
        let replay = request.try_clone();

        let response = self.http.execute(request).await?;
        if response.status() != StatusCode::UNAUTHORIZED {
            return check_status(response).await;
        }

        let original = error_from(response).await;
        let Some(mut replay) = replay else {
            return Err(original);
        };
        if self.credentials.refresh_token()?.is_none() {
            return Err(original);
        }

        match self.refresh.renew(&self.http, &self.base_url, &*self.credentials).await {
            Some(token) => {
                debug!(path = %replay.url().path(), "replaying request with renewed token");
                set_bearer(&mut replay, &token)?;
                let response = self.http.execute(replay).await?;
                // A second 401 propagates; the replay never renews again.
                check_status(response).await
            }
            None => Err(original),
        }
    }
}

fn set_bearer(request: &mut Request, token: &str) -> Result<(), ClientError> {
    let value = header::HeaderValue::from_str(&format!("Bearer {token}")).map_err(|_| {
        ClientError::Configuration("access token contains invalid header characters".into())
    })?;
    request.headers_mut().insert(header::AUTHORIZATION, value);
    Ok(())
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(error_from(response).await)
    }
}

async fn error_from(response: reqwest::Response) -> ClientError {
    let status = response.status();
    let message = response.text().await.unwrap_or_else(|_| status.to_string());
    ClientError::from_status(status, message)
}

/// Builder for [`PortalClient`]
#[derive(Default)]
pub struct PortalClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    credentials: Option<Arc<dyn CredentialStore>>,
}

impl PortalClientBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Set the credential store (defaults to an in-memory store)
    pub fn credentials(mut self, store: Arc<dyn CredentialStore>) -> Self {
        self.credentials = Some(store);
        self
    }

    /// Build the client
    pub fn build(self) -> Result<PortalClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        // Ensure base_url ends without a trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();

        let mut client_builder = ClientBuilder::new();

        #[cfg(not(target_arch = "wasm32"))]
        if let Some(timeout) = self.timeout {
            client_builder = client_builder.timeout(timeout);
        }
        #[cfg(target_arch = "wasm32")]
        let _ = self.timeout; // Timeouts not supported on WASM

        if let Some(user_agent) = self.user_agent {
            client_builder = client_builder.user_agent(user_agent);
        } else {
            client_builder = client_builder.user_agent("certportal-client/0.1.0");
        }

        let client = client_builder.build()?;

        Ok(PortalClient {
            http: client,
            base_url,
            credentials: self
                .credentials
                .unwrap_or_else(|| Arc::new(MemoryCredentialStore::new())),
            refresh: Arc::new(RefreshGate::new()),
        })
    }
}
