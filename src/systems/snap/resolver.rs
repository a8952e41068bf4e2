//! CornerResolver - pure corner math
//!
//! Distances are Euclidean. For a rectangle of corner points sharing the
//! container's centre, "nearest corner" is the same as "quadrant of the
//! point", so the inset does not change which corner wins.
//!
//! Quadrants are half-open: a point on a centre line counts as left/top.
//! An item resting at the exact centre therefore resolves to `TopLeft`.

use crate::core::math::{Bounds, Point, Vec2};
use crate::domain::config::{DEFAULT_MIN_PROJECTION_SPEED, DEFAULT_PROJECTION_HORIZON};
use crate::domain::{Corner, CORNER_COUNT};

/// Relative slack when deciding two squared distances are tied
const TIE_EPSILON: f32 = 1e-4;

/// Prediction knobs for `resolve_target_corner_with`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    /// Seconds of travel assumed when projecting the velocity
    pub horizon: f32,
    /// Speeds below this are treated as zero
    pub min_speed: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            horizon: DEFAULT_PROJECTION_HORIZON,
            min_speed: DEFAULT_MIN_PROJECTION_SPEED,
        }
    }
}

/// Absolute resting point for `corner`, moved inward by `inset` on both axes
pub fn position_for_corner(corner: Corner, bounds: &Bounds, inset: f32) -> Point {
    let x = if corner.is_left() {
        bounds.min_x() + inset
    } else {
        bounds.max_x() - inset
    };
    let y = if corner.is_top() {
        bounds.min_y() + inset
    } else {
        bounds.max_y() - inset
    };
    Vec2::new(x, y)
}

/// All four resting points, indexed by `Corner::index()`
pub fn corner_points(bounds: &Bounds, inset: f32) -> [Point; CORNER_COUNT] {
    Corner::ALL.map(|c| position_for_corner(c, bounds, inset))
}

/// Corner whose quadrant of `bounds` contains `p`
pub fn quadrant_of(p: Point, bounds: &Bounds) -> Corner {
    let c = bounds.center();
    Corner::from_sides(p.x <= c.x, p.y <= c.y)
}

/// Where the item is expected to be after `horizon` seconds at its current velocity
pub fn projected_position(position: Point, velocity: Vec2, projection: &Projection) -> Point {
    if velocity.length() < projection.min_speed {
        position
    } else {
        position + velocity * projection.horizon
    }
}

/// Target corner using the default projection
pub fn resolve_target_corner(position: Point, velocity: Vec2, bounds: &Bounds) -> Corner {
    resolve_target_corner_with(position, velocity, bounds, &Projection::default())
}

/// Corner closest to the projected position.
///
/// Ties prefer the quadrant holding the current position, then the lowest ordinal.
pub fn resolve_target_corner_with(
    position: Point,
    velocity: Vec2,
    bounds: &Bounds,
    projection: &Projection,
) -> Corner {
    let target = projected_position(position, velocity, projection);
    // Literal bounds corners; nearest-corner ranking is the same for any inset.
    let points = corner_points(bounds, 0.0);

    let distances = points.map(|p| p.distance_squared(target));
    let best = distances.iter().copied().fold(f32::INFINITY, f32::min);
    let slack = best.abs().max(1.0) * TIE_EPSILON;

    let home = quadrant_of(position, bounds);
    if distances[home.index()] - best <= slack {
        return home;
    }

    Corner::ALL
        .into_iter()
        .find(|c| distances[c.index()] - best <= slack)
        .unwrap_or(home)
}
