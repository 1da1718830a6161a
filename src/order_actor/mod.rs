//! Order-specific domain logic: creation from a submission and the status workflow.

mod actions;
pub mod entity;
pub mod error;
pub mod seed;

pub use actions::*;
pub use error::*;
