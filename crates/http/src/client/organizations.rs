//! Category and organization endpoints

use super::PortalClient;
use crate::error::ClientError;
use crate::types::{Category, Organization, OrganizationPayload, OrganizationQuery, Page};
use reqwest::Method;

impl PortalClient {
    /// List categories with their organization counters
    pub async fn list_categories(&self) -> Result<Page<Category>, ClientError> {
        let request = self.request(Method::GET, "/api/categories/list/");
        self.execute(request).await
    }

    /// Fetch a single category by slug
    pub async fn get_category(&self, slug: &str) -> Result<Category, ClientError> {
        let request = self.request(Method::GET, &format!("/api/categories/{slug}/"));
        self.execute(request).await
    }

    /// List organizations, optionally filtered and ordered
    pub async fn list_organizations(
        &self,
        query: &OrganizationQuery,
    ) -> Result<Page<Organization>, ClientError> {
        let request = self
            .request(Method::GET, "/api/organizations/list/")
            .query(query);
        self.execute(request).await
    }

    /// Fetch a single organization by slug
    pub async fn get_organization(&self, slug: &str) -> Result<Organization, ClientError> {
        let request = self.request(Method::GET, &format!("/api/organizations/{slug}/"));
        self.execute(request).await
    }

    /// Create an organization
    pub async fn create_organization(
        &self,
        payload: &OrganizationPayload,
    ) -> Result<Organization, ClientError> {
        let request = self
            .request(Method::POST, "/api/organizations/create/")
            .json(payload);
        self.execute(request).await
    }

    /// Update an organization by slug
    pub async fn update_organization(
        &self,
        slug: &str,
        payload: &OrganizationPayload,
    ) -> Result<Organization, ClientError> {
        let request = self
            .request(Method::PUT, &format!("/api/organizations/{slug}/"))
            .json(payload);
        self.execute(request).await
    }

    /// Delete an organization by slug
    pub async fn delete_organization(&self, slug: &str) -> Result<(), ClientError> {
        let request = self.request(Method::DELETE, &format!("/api/organizations/{slug}/"));
        self.execute_empty(request).await
    }
}
