//! Account view service

use crate::session::Session;
use certportal_http::error::ClientError;
use certportal_http::types::StaffProfile;

/// Backing service for the account view
#[derive(Clone)]
pub struct AccountService {
    session: Session,
}

impl AccountService {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// Profile of the signed-in account
    pub async fn profile(&self) -> Result<StaffProfile, ClientError> {
        self.session.client().me().await
    }

    /// End the session
    pub fn sign_out(&self) -> Result<(), ClientError> {
        self.session.logout()
    }
}
