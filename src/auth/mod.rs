//! Mock authentication provider.

pub mod error;
pub mod service;

pub use error::*;
pub use service::*;

/// Email that the mock provider treats as the administrator.
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@foodfrenzy.com";
