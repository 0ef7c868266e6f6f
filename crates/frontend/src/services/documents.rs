//! Letter registry search service

use certportal_http::client::PortalClient;
use certportal_http::error::ClientError;
use certportal_http::types::{Letter, LetterQuery, Page};

/// Backing service for the document search view
#[derive(Clone)]
pub struct DocumentSearchService {
    client: PortalClient,
}

impl DocumentSearchService {
    pub fn new(client: PortalClient) -> Self {
        Self { client }
    }

    /// Search the registry with the view's filter set
    pub async fn search(&self, query: &LetterQuery) -> Result<Page<Letter>, ClientError> {
        self.client.search_letters(query).await
    }

    /// One letter with its files and replies
    pub async fn detail(&self, id: i64) -> Result<Letter, ClientError> {
        self.client.get_letter(id).await
    }
}
