//! Critically damped spring solved with backward Euler.
//!
//! With stiffness `k = omega^2` and damping `c = 2 * omega` the implicit
//! update is unconditionally stable, and its only mode is `v = -omega * x`.
//! Capping the approach speed at `omega * |x|` keeps every trajectory on the
//! non-crossing side of that mode, so the item never passes its target.
//!
//! The result is a velocity; the engine then moves the item with
//! `pos += v * dt` (semi-implicit Euler), which completes the implicit step.

use crate::core::math::Vec2;

/// Velocity the item should have after this step
pub fn spring_velocity(displacement: Vec2, velocity: Vec2, omega: f32, dt: f32) -> Vec2 {
    Vec2::new(
        axis_velocity(displacement.x, velocity.x, omega, dt),
        axis_velocity(displacement.y, velocity.y, omega, dt),
    )
}

/// Clamp the speed toward the target so the spring cannot overshoot
#[inline]
pub fn cap_approach(x: f32, v: f32, omega: f32) -> f32 {
    let max_approach = omega * x.abs();
    if x * v < 0.0 && v.abs() > max_approach {
        -max_approach * x.signum()
    } else {
        v
    }
}

#[inline]
fn axis_velocity(x: f32, v: f32, omega: f32, dt: f32) -> f32 {
    let k = omega * omega;
    let c = 2.0 * omega;
    let v = cap_approach(x, v, omega);
    (v - dt * k * x) / (1.0 + dt * c + dt * dt * k)
}
