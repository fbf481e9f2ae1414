//! Core abstractions for diagram generation
//!
//! Shared vocabulary types, the symbol provider seam, error types and
//! logging setup used by the rest of the crate.

mod error;
pub mod logging;
mod provider;
mod types;

pub use error::*;
pub use logging::*;
pub use provider::*;
pub use types::*;
