//! Geometry primitives shared by the resolver and the engine

mod bounds;
mod vec2;

pub use bounds::Bounds;
pub use vec2::{Point, Vec2};
