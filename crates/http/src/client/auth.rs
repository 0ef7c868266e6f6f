//! Session endpoints

use super::PortalClient;
use crate::error::ClientError;
use crate::types::{LoginRequest, TokenPair};
use reqwest::Method;

/// Path of the token obtain endpoint
pub const LOGIN_PATH: &str = "/api/token/";

impl PortalClient {
    /// Obtain a token pair for the given account and persist it
    pub async fn login(&self, username: &str, password: &str) -> Result<TokenPair, ClientError> {
        let request = self.request(Method::POST, LOGIN_PATH).json(&LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        });
        let pair: TokenPair = self.execute(request).await?;
        self.credentials().store_pair(&pair.access, &pair.refresh)?;
        Ok(pair)
    }

    /// Drop the stored credential pair
    pub fn logout(&self) -> Result<(), ClientError> {
        Ok(self.credentials().clear()?)
    }
}
