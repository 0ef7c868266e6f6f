//! Staff directory service

use certportal_http::client::PortalClient;
use certportal_http::error::ClientError;
use certportal_http::types::{Page, StaffProfile};

/// Backing service for the staff directory view
#[derive(Clone)]
pub struct UserService {
    client: PortalClient,
}

impl UserService {
    pub fn new(client: PortalClient) -> Self {
        Self { client }
    }

    /// One page of the staff directory
    pub async fn list(&self, page: Option<u32>) -> Result<Page<StaffProfile>, ClientError> {
        self.client.list_staff(page).await
    }
}
