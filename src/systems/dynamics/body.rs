use crate::core::math::{Bounds, Point, Vec2};

use super::item::{DynamicItem, ItemId};

/// Rectangular item simulated by `DynamicAnimator`
#[derive(Clone, Debug)]
pub struct SnapBody {
    // === Physics State ===
    /// World position (centre of the rectangle)
    pub pos: Vec2,
    /// Velocity vector (points per second)
    pub velocity: Vec2,
    /// Resistance rate per second (0.0 = none)
    pub linear_damping: f32,
    /// Is body active (simulated)?
    pub active: bool,
    /// Unique ID, assigned by the animator
    pub id: ItemId,

    // === Bounding Box (AABB) ===
    pub half_width: f32,
    pub half_height: f32,

    // === Previous frame position ===
    pub prev_pos: Vec2,

    // === Material properties ===
    /// Bounciness (0.0 = no bounce, 1.0 = full elastic)
    pub restitution: f32,
}

impl SnapBody {
    /// Create a rectangular body centred on (x, y)
    pub fn new_rect(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            velocity: Vec2::zero(),
            linear_damping: 0.0,
            active: true,
            id: ItemId(0),
            half_width: w * 0.5,
            half_height: h * 0.5,
            prev_pos: Vec2::new(x, y),
            restitution: 0.0,
        }
    }

    pub fn width(&self) -> f32 {
        self.half_width * 2.0
    }

    pub fn height(&self) -> f32 {
        self.half_height * 2.0
    }

    /// Rectangle the body currently covers
    pub fn frame(&self) -> Bounds {
        Bounds::new(
            self.pos.x - self.half_width,
            self.pos.y - self.half_height,
            self.width(),
            self.height(),
        )
    }

    /// Save current position as previous (call before physics update)
    pub fn save_prev_state(&mut self) {
        self.prev_pos = self.pos;
    }

    /// Set restitution (bounciness)
    pub fn set_restitution(&mut self, r: f32) {
        self.restitution = r.clamp(0.0, 1.0);
    }

    /// Set resistance; negative or non-finite values disable it
    pub fn set_linear_damping(&mut self, d: f32) {
        self.linear_damping = if d.is_finite() { d.max(0.0) } else { 0.0 };
    }

    /// Advance position by one step (semi-implicit Euler)
    pub(super) fn integrate(&mut self, dt: f32) {
        if self.linear_damping > 0.0 {
            self.velocity = self.velocity * (1.0 / (1.0 + self.linear_damping * dt));
        }
        self.pos = self.pos + self.velocity * dt;
    }
}

impl DynamicItem for SnapBody {
    fn center(&self) -> Point {
        self.pos
    }

    fn linear_velocity(&self) -> Vec2 {
        self.velocity
    }

    fn add_linear_velocity(&mut self, velocity: Vec2) {
        self.velocity += velocity;
    }
}
