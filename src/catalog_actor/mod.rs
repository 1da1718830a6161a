//! Catalog of orderable dishes. Read-only once seeded.

pub mod entity;
pub mod error;
pub mod seed;

pub use error::*;
pub use seed::demo_menu;
