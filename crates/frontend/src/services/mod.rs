//! Per-view API services
//!
//! One thin service per routed view, shaping parameters for the typed
//! client and nothing more.

pub mod account;
pub mod documents;
pub mod organizations;
pub mod statistics;
pub mod users;

pub use account::AccountService;
pub use documents::DocumentSearchService;
pub use organizations::OrganizationService;
pub use statistics::StatisticsService;
pub use users::UserService;
