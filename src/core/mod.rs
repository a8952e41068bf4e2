//! Core functionality: geometry and logging plumbing

pub mod logging;
pub mod math;
