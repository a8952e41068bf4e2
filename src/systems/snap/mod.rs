//! Sticky corners: pick a corner, pull the item onto it
//!
//! `resolver` is pure math; `SnapBehavior` keeps the per-item state and
//! drives a `DynamicItem` each step.

mod behavior;
pub mod resolver;
pub mod spring;

pub use behavior::SnapBehavior;
pub use resolver::{position_for_corner, resolve_target_corner, Projection};
