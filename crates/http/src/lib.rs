//! Portal HTTP client
//!
//! Wraps the backend's REST/JWT API: every request carries the stored access
//! token as a bearer credential, and a 401 response triggers a single,
//! serialized token renewal before the request is replayed once.

pub mod client;
pub mod error;
pub mod types;

pub use client::{PortalClient, PortalClientBuilder};
pub use error::ClientError;
