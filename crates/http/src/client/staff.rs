//! Staff profile endpoints

use super::PortalClient;
use crate::error::ClientError;
use crate::types::{Page, StaffProfile};
use reqwest::Method;

impl PortalClient {
    /// List staff profiles
    pub async fn list_staff(&self, page: Option<u32>) -> Result<Page<StaffProfile>, ClientError> {
        let mut request = self.request(Method::GET, "/api/staff/users/");
        if let Some(page) = page {
            request = request.query(&[("page", page)]);
        }
        self.execute(request).await
    }

    /// Profile of the authenticated account
    pub async fn me(&self) -> Result<StaffProfile, ClientError> {
        let request = self.request(Method::GET, "/api/staff/users/me/");
        self.execute(request).await
    }
}
