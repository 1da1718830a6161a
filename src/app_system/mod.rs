//! System orchestration, configuration, startup, and shutdown.

pub mod config;
pub mod notice;
pub mod storefront_system;
pub mod telemetry;

pub use config::*;
pub use notice::*;
pub use storefront_system::*;
pub use telemetry::*;
