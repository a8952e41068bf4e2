//! Domain types: corners, configuration, errors

pub mod config;
pub mod corner;
pub mod error;

pub use config::SnapConfig;
pub use corner::{Corner, CORNER_COUNT};
pub use error::{ConfigIssue, SnapError, SnapResult};
