//! Portal core types and utilities

pub mod credentials;
pub mod error;

pub use credentials::{
    ACCESS_TOKEN_KEY, CredentialStore, FileCredentialStore, MemoryCredentialStore,
    REFRESH_TOKEN_KEY,
};
pub use error::{CoreError, CoreResult, ErrorContext};
