//! Letter registry endpoints

use super::PortalClient;
use crate::error::ClientError;
use crate::types::{Letter, LetterQuery, Page};
use reqwest::Method;

impl PortalClient {
    /// Search the letter registry
    pub async fn search_letters(&self, query: &LetterQuery) -> Result<Page<Letter>, ClientError> {
        let request = self
            .request(Method::GET, "/api/documents/letters/")
            .query(query);
        self.execute(request).await
    }

    /// Fetch a single letter with its files and replies
    pub async fn get_letter(&self, id: i64) -> Result<Letter, ClientError> {
        let request = self.request(Method::GET, &format!("/api/documents/letters/{id}/"));
        self.execute(request).await
    }
}
