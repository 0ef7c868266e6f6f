//! Statistics dashboard service

use certportal_http::client::PortalClient;
use certportal_http::client::statistics::PeriodQuery;
use certportal_http::error::ClientError;
use certportal_http::types::{EmployeesCount, LettersByMonth, OrgReplyStats};

/// Backing service for the statistics view
#[derive(Clone)]
pub struct StatisticsService {
    client: PortalClient,
}

impl StatisticsService {
    pub fn new(client: PortalClient) -> Self {
        Self { client }
    }

    /// Monthly letter volume for the selected period
    pub async fn letters_by_month(
        &self,
        period: &PeriodQuery,
    ) -> Result<LettersByMonth, ClientError> {
        self.client.letters_by_month(period).await
    }

    /// Current active headcount
    pub async fn employees_count(&self) -> Result<EmployeesCount, ClientError> {
        self.client.employees_count().await
    }

    /// Per-organization reply discipline for the selected period
    pub async fn org_reply_stats(
        &self,
        period: &PeriodQuery,
    ) -> Result<OrgReplyStats, ClientError> {
        self.client.org_reply_stats(period).await
    }
}
