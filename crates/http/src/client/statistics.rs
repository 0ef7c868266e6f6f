//! Statistics endpoints

use super::PortalClient;
use crate::error::ClientError;
use crate::types::{EmployeesCount, LettersByMonth, OrgReplyStats};
use chrono::NaiveDate;
use reqwest::Method;
use serde::Serialize;

/// Optional period bounds shared by the statistics calls
#[derive(Debug, Clone, Default, Serialize)]
pub struct PeriodQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<NaiveDate>,
}

impl PortalClient {
    /// Letter volume per calendar month
    pub async fn letters_by_month(
        &self,
        period: &PeriodQuery,
    ) -> Result<LettersByMonth, ClientError> {
        let request = self
            .request(Method::GET, "/api/statistics/cert/letters-by-month/")
            .query(period);
        self.execute(request).await
    }

    /// Active employee headcount
    pub async fn employees_count(&self) -> Result<EmployeesCount, ClientError> {
        let request = self.request(Method::GET, "/api/statistics/cert/employees-count/");
        self.execute(request).await
    }

    /// Reply discipline per organization over the selected period
    pub async fn org_reply_stats(
        &self,
        period: &PeriodQuery,
    ) -> Result<OrgReplyStats, ClientError> {
        let request = self
            .request(Method::GET, "/api/statistics/cert/org-replies/")
            .query(period);
        self.execute(request).await
    }
}
