use crate::core::math::{Bounds, Point, Vec2};
use crate::domain::{ConfigIssue, Corner, SnapConfig, SnapResult, CORNER_COUNT};
use crate::systems::dynamics::{DynamicItem, ItemId};

use super::resolver::{self, Projection};
use super::spring::spring_velocity;

/// Cached container snapshot plus the four resting points derived from it
#[derive(Clone, Copy, Debug, PartialEq)]
struct Fields {
    bounds: Bounds,
    points: [Point; CORNER_COUNT],
}

/// Sticky-corner behavior for a single item.
///
/// Two states, toggled by `is_enabled`: Disabled (step is a no-op) and
/// Tracking (the target corner is re-resolved every step and the item is
/// steered toward it on a critically damped spring).
#[derive(Clone, Debug)]
pub struct SnapBehavior {
    item: ItemId,
    corner_inset: f32,
    is_enabled: bool,
    current_corner: Corner,
    fields: Option<Fields>,
    /// Impulse waiting to be handed to the item on the next enabled step
    pending_velocity: Vec2,
    projection: Projection,
    omega: f32,
}

impl SnapBehavior {
    /// Bind to `item` with a fixed inset. The target stays `TopLeft`
    /// until bounds arrive and the first step resolves it.
    pub fn new(item: ItemId, corner_inset: f32) -> SnapResult<Self> {
        Self::with_config(item, corner_inset, &SnapConfig::default())
    }

    pub fn with_config(item: ItemId, corner_inset: f32, config: &SnapConfig) -> SnapResult<Self> {
        if !corner_inset.is_finite() || corner_inset < 0.0 {
            log::warn!("rejecting snap behavior for {item:?}: inset {corner_inset}");
            return Err(ConfigIssue::NegativeInset(corner_inset).into());
        }
        config.validate()?;

        Ok(Self {
            item,
            corner_inset,
            is_enabled: true,
            current_corner: Corner::TopLeft,
            fields: None,
            pending_velocity: Vec2::zero(),
            projection: Projection {
                horizon: config.projection_horizon,
                min_speed: config.min_projection_speed,
            },
            omega: config.spring_omega,
        })
    }

    /// Bind with bounds known up front; the initial corner is the one
    /// nearest the item's current position.
    pub fn for_item<I: DynamicItem + ?Sized>(
        id: ItemId,
        item: &I,
        corner_inset: f32,
        bounds: Bounds,
        config: &SnapConfig,
    ) -> SnapResult<Self> {
        let mut behavior = Self::with_config(id, corner_inset, config)?;
        behavior.update_fields_in_bounds(bounds)?;
        behavior.current_corner =
            resolver::resolve_target_corner_with(item.center(), Vec2::zero(), &bounds, &behavior.projection);
        Ok(behavior)
    }

    pub fn item(&self) -> ItemId {
        self.item
    }

    pub fn corner_inset(&self) -> f32 {
        self.corner_inset
    }

    pub fn current_corner(&self) -> Corner {
        self.current_corner
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.fields.map(|f| f.bounds)
    }

    pub fn pending_velocity(&self) -> Vec2 {
        self.pending_velocity
    }

    pub fn is_enabled(&self) -> bool {
        self.is_enabled
    }

    /// Pause/resume snapping without dropping the behavior
    pub fn set_enabled(&mut self, enabled: bool) {
        self.is_enabled = enabled;
    }

    /// Swap projection and spring tuning; the inset is fixed for life
    pub fn set_tuning(&mut self, config: &SnapConfig) {
        self.projection = Projection {
            horizon: config.projection_horizon,
            min_speed: config.min_projection_speed,
        };
        self.omega = config.spring_omega;
    }

    /// Replace the bounds snapshot and recompute the corner points.
    /// The item is not moved; on error nothing changes.
    pub fn update_fields_in_bounds(&mut self, bounds: Bounds) -> SnapResult<()> {
        check_fits(&bounds, self.corner_inset)?;
        self.fields = Some(Fields {
            bounds,
            points: resolver::corner_points(&bounds, self.corner_inset),
        });
        Ok(())
    }

    /// Queue a velocity (e.g. a fling on gesture release) for the next step
    pub fn add_linear_velocity(&mut self, velocity: Vec2) {
        if velocity.is_finite() {
            self.pending_velocity += velocity;
        }
    }

    /// Resting point for `corner`, or `None` before any bounds were set
    pub fn position_for_corner(&self, corner: Corner) -> Option<Point> {
        self.fields.map(|f| f.points[corner.index()])
    }

    pub fn target_position(&self) -> Option<Point> {
        self.position_for_corner(self.current_corner)
    }

    /// True once the item rests on its corner
    pub fn is_settled<I: DynamicItem + ?Sized>(&self, item: &I, rest_distance: f32, rest_speed: f32) -> bool {
        match self.target_position() {
            Some(target) => {
                item.center().distance(target) <= rest_distance
                    && item.linear_velocity().length() <= rest_speed
            }
            None => false,
        }
    }

    /// Per-step action, called by the engine before it integrates positions
    pub fn step<I: DynamicItem + ?Sized>(&mut self, item: &mut I, dt: f32) {
        if !self.is_enabled {
            return;
        }
        let Some(fields) = self.fields else {
            return;
        };

        if self.pending_velocity != Vec2::zero() {
            item.add_linear_velocity(self.pending_velocity);
            self.pending_velocity = Vec2::zero();
        }

        let position = item.center();
        let velocity = item.linear_velocity();

        let corner = resolver::resolve_target_corner_with(position, velocity, &fields.bounds, &self.projection);
        if corner != self.current_corner {
            log::debug!("{:?}: target {} -> {}", self.item, self.current_corner, corner);
            self.current_corner = corner;
        }

        let target = fields.points[corner.index()];
        let next = spring_velocity(position - target, velocity, self.omega, dt);
        item.add_linear_velocity(next - velocity);
    }
}

fn check_fits(bounds: &Bounds, inset: f32) -> SnapResult<()> {
    if bounds.is_degenerate() {
        log::warn!("rejecting degenerate bounds {bounds:?}");
        return Err(ConfigIssue::DegenerateBounds {
            width: bounds.width,
            height: bounds.height,
        }
        .into());
    }
    if inset * 2.0 > bounds.width || inset * 2.0 > bounds.height {
        log::warn!("rejecting bounds {bounds:?}: inset {inset} does not fit");
        return Err(ConfigIssue::InsetTooLarge {
            inset,
            width: bounds.width,
            height: bounds.height,
        }
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SnapError;
    use approx::assert_relative_eq;

    /// Minimal host body: the test plays the engine
    #[derive(Debug, Default)]
    struct Puck {
        pos: Vec2,
        vel: Vec2,
    }

    impl DynamicItem for Puck {
        fn center(&self) -> Point {
            self.pos
        }
        fn linear_velocity(&self) -> Vec2 {
            self.vel
        }
        fn add_linear_velocity(&mut self, velocity: Vec2) {
            self.vel += velocity;
        }
    }

    fn tick(behavior: &mut SnapBehavior, puck: &mut Puck, dt: f32) {
        behavior.step(puck, dt);
        puck.pos += puck.vel * dt;
    }

    fn tracking(inset: f32) -> SnapBehavior {
        let mut b = SnapBehavior::new(ItemId(1), inset).unwrap();
        b.update_fields_in_bounds(Bounds::from_size(100.0, 100.0)).unwrap();
        b
    }

    #[test]
    fn negative_inset_is_rejected() {
        let err = SnapBehavior::new(ItemId(1), -1.0).unwrap_err();
        assert_eq!(err, SnapError::InvalidConfiguration(ConfigIssue::NegativeInset(-1.0)));
        assert!(SnapBehavior::new(ItemId(1), f32::NAN).is_err());
    }

    #[test]
    fn construction_defaults() {
        let b = SnapBehavior::new(ItemId(7), 10.0).unwrap();
        assert!(b.is_enabled());
        assert_eq!(b.current_corner(), Corner::TopLeft);
        assert_eq!(b.position_for_corner(Corner::TopLeft), None);
    }

    #[test]
    fn for_item_resolves_nearest_corner() {
        let puck = Puck { pos: Vec2::new(85.0, 70.0), ..Default::default() };
        let b = SnapBehavior::for_item(ItemId(1), &puck, 10.0, Bounds::from_size(100.0, 100.0), &SnapConfig::default())
            .unwrap();
        assert_eq!(b.current_corner(), Corner::BottomRight);
    }

    #[test]
    fn corner_points_follow_bounds_and_inset() {
        let b = tracking(10.0);
        assert_eq!(b.position_for_corner(Corner::TopLeft), Some(Vec2::new(10.0, 10.0)));
        assert_eq!(b.position_for_corner(Corner::BottomRight), Some(Vec2::new(90.0, 90.0)));
        assert_eq!(b.position_for_corner(Corner::TopRight), Some(Vec2::new(90.0, 10.0)));
        assert_eq!(b.position_for_corner(Corner::BottomLeft), Some(Vec2::new(10.0, 90.0)));
    }

    #[test]
    fn corner_points_are_stable_between_bounds_updates() {
        let mut b = tracking(10.0);
        let mut puck = Puck { pos: Vec2::new(80.0, 20.0), vel: Vec2::new(-300.0, 400.0) };
        for corner in Corner::ALL {
            let first = b.position_for_corner(corner);
            tick(&mut b, &mut puck, 1.0 / 60.0);
            assert_eq!(b.position_for_corner(corner), first);
            assert_eq!(b.position_for_corner(corner), first);
        }
    }

    #[test]
    fn degenerate_bounds_keep_previous_snapshot() {
        let mut b = tracking(10.0);
        let before = b.bounds();
        let err = b.update_fields_in_bounds(Bounds::new(0.0, 0.0, 0.0, 100.0)).unwrap_err();
        assert!(matches!(err, SnapError::InvalidConfiguration(ConfigIssue::DegenerateBounds { .. })));
        assert_eq!(b.bounds(), before);
        assert_eq!(b.position_for_corner(Corner::BottomRight), Some(Vec2::new(90.0, 90.0)));
    }

    #[test]
    fn inset_larger_than_half_bounds_is_rejected() {
        let mut b = SnapBehavior::new(ItemId(1), 30.0).unwrap();
        assert!(matches!(
            b.update_fields_in_bounds(Bounds::from_size(200.0, 50.0)),
            Err(SnapError::InvalidConfiguration(ConfigIssue::InsetTooLarge { .. }))
        ));
        assert_eq!(b.bounds(), None);
    }

    #[test]
    fn resize_does_not_move_item() {
        let mut b = tracking(10.0);
        let puck = Puck { pos: Vec2::new(33.0, 44.0), vel: Vec2::new(1.0, 2.0) };
        b.update_fields_in_bounds(Bounds::from_size(300.0, 200.0)).unwrap();
        assert_eq!(puck.pos, Vec2::new(33.0, 44.0));
        assert_eq!(b.position_for_corner(Corner::BottomRight), Some(Vec2::new(290.0, 190.0)));
    }

    #[test]
    fn disabled_step_leaves_item_untouched() {
        let mut b = tracking(10.0);
        b.set_enabled(false);
        b.add_linear_velocity(Vec2::new(500.0, 0.0));
        let mut puck = Puck { pos: Vec2::new(40.0, 60.0), vel: Vec2::new(3.0, -4.0) };
        b.step(&mut puck, 1.0 / 60.0);
        assert_eq!(puck.pos, Vec2::new(40.0, 60.0));
        assert_eq!(puck.vel, Vec2::new(3.0, -4.0));
        assert_eq!(b.pending_velocity(), Vec2::new(500.0, 0.0));
    }

    #[test]
    fn settles_on_nearest_corner_without_overshoot() {
        let mut b = tracking(10.0);
        let mut puck = Puck { pos: Vec2::new(70.0, 30.0), ..Default::default() };
        let dt = 1.0 / 60.0;
        for _ in 0..240 {
            tick(&mut b, &mut puck, dt);
            assert!(puck.pos.x <= 90.0 + 1e-3);
            assert!(puck.pos.y >= 10.0 - 1e-3);
        }
        assert_eq!(b.current_corner(), Corner::TopRight);
        assert_relative_eq!(puck.pos.x, 90.0, epsilon = 0.01);
        assert_relative_eq!(puck.pos.y, 10.0, epsilon = 0.01);
        assert!(b.is_settled(&puck, 0.5, 2.0));
    }

    #[test]
    fn fling_handoff_reaches_far_corner() {
        let mut b = tracking(10.0);
        let mut puck = Puck { pos: Vec2::new(20.0, 20.0), ..Default::default() };
        b.add_linear_velocity(Vec2::new(1200.0, 1200.0));
        let dt = 1.0 / 60.0;
        tick(&mut b, &mut puck, dt);
        assert_eq!(b.current_corner(), Corner::BottomRight);
        assert_eq!(b.pending_velocity(), Vec2::zero());
        for _ in 0..300 {
            tick(&mut b, &mut puck, dt);
            assert!(puck.pos.x <= 90.0 + 1e-3 && puck.pos.y <= 90.0 + 1e-3);
        }
        assert_eq!(b.current_corner(), Corner::BottomRight);
        assert_relative_eq!(puck.pos.x, 90.0, epsilon = 0.01);
        assert_relative_eq!(puck.pos.y, 90.0, epsilon = 0.01);
    }

    #[test]
    fn step_without_bounds_is_noop() {
        let mut b = SnapBehavior::new(ItemId(1), 5.0).unwrap();
        let mut puck = Puck { pos: Vec2::new(1.0, 1.0), vel: Vec2::new(2.0, 2.0) };
        b.step(&mut puck, 0.1);
        assert_eq!(puck.vel, Vec2::new(2.0, 2.0));
    }
}
