//! Portal frontend shell
//!
//! The non-rendering half of the single-page client: the route table and
//! its auth guard, session management over the shared credential store,
//! per-view API services and application configuration. A UI layer renders
//! whatever view the router resolves; none of that lives here.

pub mod config;
pub mod guard;
pub mod routes;
pub mod services;
pub mod session;
pub mod telemetry;

pub use config::AppConfig;
pub use guard::{NavigationDecision, check_navigation};
pub use routes::{Route, RouteMatch, RouteMeta, Router, View};
pub use session::Session;
