use serde::{Deserialize, Serialize};

use crate::core::math::{Point, Vec2};

/// Non-owning handle to an item living inside an engine
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub u32);

/// Capability a host engine exposes for each movable item.
///
/// Snap behaviors only read the centre and velocity and nudge the velocity;
/// integrating position stays the engine's job.
pub trait DynamicItem {
    fn center(&self) -> Point;

    /// Points per second
    fn linear_velocity(&self) -> Vec2;

    fn add_linear_velocity(&mut self, velocity: Vec2);
}
