//! Wire types for the portal API
//!
//! Shapes mirror the backend's JSON: list endpoints are wrapped in a
//! page-number envelope, detail endpoints return the bare object.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Page-number pagination envelope used by every list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

/// Organization category with per-day counters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub badge: String,
    pub time_create: DateTime<Utc>,
    /// Number of organizations in the category
    #[serde(default)]
    pub objects_count: i64,
    /// Organizations added today
    #[serde(default)]
    pub today_count: i64,
}

/// Organization record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    pub id: i64,
    pub slug: String,
    pub name: String,
    pub description: String,
    pub address: String,
    pub lotus: String,
    pub phone: String,
    pub email: String,
    /// Category id
    pub category: i64,
    pub category_name: String,
    pub category_slug: String,
    #[serde(default)]
    pub logo: Option<String>,
    pub time_create: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

/// Payload for creating or updating an organization
#[derive(Debug, Clone, Default, Serialize)]
pub struct OrganizationPayload {
    pub name: String,
    pub description: String,
    pub address: String,
    pub lotus: String,
    pub phone: String,
    pub email: String,
    /// Category selected by slug; the server resolves it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_slug_in: Option<String>,
}

/// Query parameters for the organization list
#[derive(Debug, Clone, Default, Serialize)]
pub struct OrganizationQuery {
    #[serde(rename = "category__slug", skip_serializing_if = "Option::is_none")]
    pub category_slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordering: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

/// Staff member profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffProfile {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub fio: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub second_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub lotus: String,
    #[serde(default)]
    pub work_email: String,
    #[serde(default)]
    pub work_phone: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub curated_orgs_count: Option<i64>,
    #[serde(default)]
    pub curated_cats_count: Option<i64>,
}

/// Attachment on a registered letter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LetterFile {
    pub id: i64,
    pub file: String,
    #[serde(default)]
    pub original_name: Option<String>,
    pub uploaded_at: DateTime<Utc>,
}

/// Reply received from an organization for a letter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LetterReply {
    pub id: i64,
    pub letter: i64,
    #[serde(default)]
    pub organization: Option<i64>,
    #[serde(default)]
    pub organization_name: Option<String>,
    #[serde(default)]
    pub reply_number: Option<String>,
    #[serde(default)]
    pub internal_number: Option<String>,
    #[serde(default)]
    pub received_date: Option<NaiveDate>,
    #[serde(default)]
    pub added_by_name: Option<String>,
}

/// Registered letter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Letter {
    pub id: i64,
    pub number: String,
    pub subject: String,
    pub date: NaiveDate,
    pub system: String,
    #[serde(default)]
    pub has_deadline: bool,
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
    #[serde(default)]
    pub need_replies: bool,
    #[serde(default)]
    pub performer: Option<i64>,
    #[serde(default)]
    pub performer_name: Option<String>,
    #[serde(default)]
    pub dest_organizations: Vec<i64>,
    #[serde(default)]
    pub files: Vec<LetterFile>,
    #[serde(default)]
    pub replies: Vec<LetterReply>,
}

/// Search filters for the letter registry
#[derive(Debug, Clone, Default, Serialize)]
pub struct LetterQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performer: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_deadline: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline_to: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

/// Letter volume for one calendar month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyLetterCount {
    /// `YYYY-MM`
    pub month: String,
    pub year: i32,
    pub month_num: u32,
    pub count: u64,
}

/// Response wrapper for the letters-by-month statistic
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LettersByMonth {
    pub results: Vec<MonthlyLetterCount>,
}

/// Active employee headcount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeesCount {
    pub total_employees: u64,
}

/// Reply discipline of one organization over the selected period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrgReplyStat {
    pub organization_id: i64,
    pub organization_name: String,
    pub on_time: u64,
    pub late: u64,
    pub no_reply: u64,
    pub total_required: u64,
    #[serde(default)]
    pub on_time_ratio: f64,
}

/// Response wrapper for the per-organization reply statistic
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrgReplyStats {
    pub results: Vec<OrgReplyStat>,
}

/// Credentials for obtaining a token pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Access/refresh pair issued at login
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Body of the renewal call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenRefreshRequest {
    pub refresh: String,
}

/// Renewed access token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenRefreshResponse {
    pub access: String,
}
