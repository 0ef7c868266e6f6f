//! Session lifecycle over the shared credential store

use certportal_core::credentials::CredentialStore;
use certportal_http::client::PortalClient;
use certportal_http::error::ClientError;
use certportal_http::types::TokenPair;
use std::sync::Arc;
use tracing::info;

/// Login state of the running application
///
/// Thin wrapper over the client and its credential store; cloning shares
/// both.
#[derive(Clone)]
pub struct Session {
    client: PortalClient,
}

impl Session {
    pub fn new(client: PortalClient) -> Self {
        Self { client }
    }

    /// The API client bound to this session
    pub fn client(&self) -> &PortalClient {
        &self.client
    }

    fn credentials(&self) -> &Arc<dyn CredentialStore> {
        self.client.credentials()
    }

    /// Authenticate against the backend and persist the issued pair
    pub async fn login(&self, username: &str, password: &str) -> Result<TokenPair, ClientError> {
        let pair = self.client.login(username, password).await?;
        info!(user = username, "session established");
        Ok(pair)
    }

    /// Drop the persisted credential pair
    pub fn logout(&self) -> Result<(), ClientError> {
        self.client.logout()?;
        info!("session cleared");
        Ok(())
    }

    /// Whether an access token is currently stored
    pub fn is_authenticated(&self) -> bool {
        self.credentials().access_token().ok().flatten().is_some()
    }

    /// Pick up credentials persisted by an earlier run, reporting whether
    /// a session was found
    pub fn restore(&self) -> bool {
        let restored = self.is_authenticated();
        if restored {
            info!("restored session from stored credentials");
        }
        restored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use certportal_core::credentials::MemoryCredentialStore;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn session_with(base_url: &str, store: Arc<MemoryCredentialStore>) -> Session {
        let client = PortalClient::builder()
            .base_url(base_url)
            .credentials(store)
            .build()
            .unwrap();
        Session::new(client)
    }

    #[tokio::test]
    async fn login_then_logout_round_trip() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/token/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"access": "a-1", "refresh": "r-1"})),
            )
            .mount(&server)
            .await;

        let store = Arc::new(MemoryCredentialStore::new());
        let session = session_with(&server.uri(), store);
        assert!(!session.is_authenticated());

        session.login("akarimov", "s3cret").await.unwrap();
        assert!(session.is_authenticated());

        session.logout().unwrap();
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn restore_reports_persisted_credentials() {
        let store = Arc::new(MemoryCredentialStore::with_pair("a-1", "r-1"));
        let session = session_with("http://127.0.0.1:8000", store);
        assert!(session.restore());

        let empty = Arc::new(MemoryCredentialStore::new());
        let session = session_with("http://127.0.0.1:8000", empty);
        assert!(!session.restore());
    }
}
