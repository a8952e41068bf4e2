use crate::core::math::Bounds;

use super::body::SnapBody;

/// Keep the body's rectangle inside `bounds`, resolving each axis separately.
///
/// Returns true if the body touched an edge this step.
pub(super) fn keep_inside(body: &mut SnapBody, bounds: &Bounds) -> bool {
    let mut hit = false;

    let (min_x, max_x) = axis_limits(bounds.min_x(), bounds.max_x(), body.half_width);
    if body.pos.x < min_x {
        body.pos.x = min_x;
        body.velocity.x = bounce(body.velocity.x, body.restitution, true);
        hit = true;
    } else if body.pos.x > max_x {
        body.pos.x = max_x;
        body.velocity.x = bounce(body.velocity.x, body.restitution, false);
        hit = true;
    }

    let (min_y, max_y) = axis_limits(bounds.min_y(), bounds.max_y(), body.half_height);
    if body.pos.y < min_y {
        body.pos.y = min_y;
        body.velocity.y = bounce(body.velocity.y, body.restitution, true);
        hit = true;
    } else if body.pos.y > max_y {
        body.pos.y = max_y;
        body.velocity.y = bounce(body.velocity.y, body.restitution, false);
        hit = true;
    }

    hit
}

/// Allowed centre range on one axis; a body wider than the container is pinned to the middle
fn axis_limits(lo: f32, hi: f32, half: f32) -> (f32, f32) {
    let min = lo + half;
    let max = hi - half;
    if min <= max {
        (min, max)
    } else {
        let mid = (lo + hi) * 0.5;
        (mid, mid)
    }
}

/// Reflect only velocity heading into the wall
#[inline]
fn bounce(v: f32, restitution: f32, hit_min_side: bool) -> f32 {
    let into_wall = if hit_min_side { v < 0.0 } else { v > 0.0 };
    if into_wall {
        -v * restitution
    } else {
        v
    }
}
