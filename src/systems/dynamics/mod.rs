//! Dynamics - a small host engine for snapping items
//!
//! Bodies are axis-aligned rectangles integrated with semi-implicit Euler.
//! Behaviors run before integration each step, then bodies are kept
//! inside the container with per-axis collision.
//!
//! Other engines plug in by implementing `DynamicItem` for their bodies.

mod animator;
mod body;
mod collision;
mod item;

pub use animator::{BehaviorId, DynamicAnimator, UpdateReport};
pub use body::SnapBody;
pub use item::{DynamicItem, ItemId};
