//! Organization browsing service

use certportal_http::client::PortalClient;
use certportal_http::error::ClientError;
use certportal_http::types::{Category, Organization, OrganizationQuery, Page};

/// Backing service for the organization views
#[derive(Clone)]
pub struct OrganizationService {
    client: PortalClient,
}

impl OrganizationService {
    pub fn new(client: PortalClient) -> Self {
        Self { client }
    }

    /// Categories with their organization counters, for the landing view
    pub async fn categories(&self) -> Result<Page<Category>, ClientError> {
        self.client.list_categories().await
    }

    /// Organizations of one category, newest first
    pub async fn by_category(
        &self,
        slug: &str,
        page: Option<u32>,
    ) -> Result<Page<Organization>, ClientError> {
        let query = OrganizationQuery {
            category_slug: Some(slug.to_string()),
            page,
            ..OrganizationQuery::default()
        };
        self.client.list_organizations(&query).await
    }

    /// Free-text search across the organization registry
    pub async fn search(&self, term: &str) -> Result<Page<Organization>, ClientError> {
        let query = OrganizationQuery {
            search: Some(term.to_string()),
            ..OrganizationQuery::default()
        };
        self.client.list_organizations(&query).await
    }

    /// Full record of one organization
    pub async fn detail(&self, slug: &str) -> Result<Organization, ClientError> {
        self.client.get_organization(slug).await
    }
}
