#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::core::math::Bounds;
use crate::domain::SnapResult;
use crate::systems::snap::SnapBehavior;

use super::body::SnapBody;
use super::collision::keep_inside;
use super::item::ItemId;

/// Handle to a behavior registered with the animator
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BehaviorId(pub u32);

/// Below this many bodies the rayon fan-out costs more than it saves
#[cfg(feature = "parallel")]
const PARALLEL_MIN_BODIES: usize = 64;

/// Owns items and the snap behaviors steering them
pub struct DynamicAnimator {
    bodies: Vec<SnapBody>,
    behaviors: Vec<(BehaviorId, SnapBehavior)>,
    reference_bounds: Option<Bounds>,
    next_item: u32,
    next_behavior: u32,
}

/// Counts from one `update` call
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UpdateReport {
    pub behaviors_stepped: u32,
    pub bodies_integrated: u32,
    pub boundary_hits: u32,
}

impl DynamicAnimator {
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            behaviors: Vec::new(),
            reference_bounds: None,
            next_item: 1,
            next_behavior: 1,
        }
    }

    /// Add a new body.
    ///
    /// Returns `None` if the body has no area or a non-finite position.
    pub fn add_body(&mut self, mut body: SnapBody) -> Option<ItemId> {
        if !(body.half_width > 0.0 && body.half_height > 0.0) || !body.pos.is_finite() {
            return None;
        }

        let id = ItemId(self.next_item);
        self.next_item = self.next_item.saturating_add(1);
        body.id = id;
        body.active = true;
        body.save_prev_state();

        self.bodies.push(body);
        Some(id)
    }

    /// Remove a body and every behavior bound to it.
    pub fn remove_body(&mut self, id: ItemId) -> bool {
        let Some(idx) = self.bodies.iter().position(|b| b.id == id) else {
            return false;
        };
        self.bodies.swap_remove(idx);
        self.behaviors.retain(|(_, b)| b.item() != id);
        true
    }

    /// Remove all bodies and behaviors
    pub fn clear(&mut self) {
        self.bodies.clear();
        self.behaviors.clear();
        self.next_item = 1;
        self.next_behavior = 1;
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn behavior_count(&self) -> usize {
        self.behaviors.len()
    }

    pub fn bodies(&self) -> &[SnapBody] {
        &self.bodies
    }

    pub fn bodies_mut(&mut self) -> impl Iterator<Item = &mut SnapBody> {
        self.bodies.iter_mut()
    }

    pub fn body(&self, id: ItemId) -> Option<&SnapBody> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn body_mut(&mut self, id: ItemId) -> Option<&mut SnapBody> {
        self.bodies.iter_mut().find(|b| b.id == id)
    }

    /// Register a behavior. Its item must already exist; current reference
    /// bounds are pushed into it before it is stored.
    pub fn add_behavior(&mut self, mut behavior: SnapBehavior) -> SnapResult<Option<BehaviorId>> {
        if self.body(behavior.item()).is_none() {
            return Ok(None);
        }
        if let Some(bounds) = self.reference_bounds {
            behavior.update_fields_in_bounds(bounds)?;
        }

        let id = BehaviorId(self.next_behavior);
        self.next_behavior = self.next_behavior.saturating_add(1);
        self.behaviors.push((id, behavior));
        Ok(Some(id))
    }

    pub fn remove_behavior(&mut self, id: BehaviorId) -> Option<SnapBehavior> {
        let idx = self.behaviors.iter().position(|(bid, _)| *bid == id)?;
        Some(self.behaviors.swap_remove(idx).1)
    }

    pub fn behaviors(&self) -> impl Iterator<Item = &SnapBehavior> {
        self.behaviors.iter().map(|(_, b)| b)
    }

    pub fn behaviors_mut(&mut self) -> impl Iterator<Item = &mut SnapBehavior> {
        self.behaviors.iter_mut().map(|(_, b)| b)
    }

    pub fn behavior(&self, id: BehaviorId) -> Option<&SnapBehavior> {
        self.behaviors.iter().find(|(bid, _)| *bid == id).map(|(_, b)| b)
    }

    pub fn behavior_mut(&mut self, id: BehaviorId) -> Option<&mut SnapBehavior> {
        self.behaviors.iter_mut().find(|(bid, _)| *bid == id).map(|(_, b)| b)
    }

    /// First behavior bound to `item`
    pub fn behavior_for_item(&self, item: ItemId) -> Option<&SnapBehavior> {
        self.behaviors.iter().find(|(_, b)| b.item() == item).map(|(_, b)| b)
    }

    pub fn behavior_for_item_mut(&mut self, item: ItemId) -> Option<&mut SnapBehavior> {
        self.behaviors.iter_mut().find(|(_, b)| b.item() == item).map(|(_, b)| b)
    }

    pub fn reference_bounds(&self) -> Option<Bounds> {
        self.reference_bounds
    }

    /// Container resize: validate against every behavior first, then apply to all.
    pub fn set_reference_bounds(&mut self, bounds: Bounds) -> SnapResult<()> {
        let mut staged = Vec::with_capacity(self.behaviors.len());
        for (_, behavior) in self.behaviors.iter() {
            let mut next = behavior.clone();
            next.update_fields_in_bounds(bounds)?;
            staged.push(next);
        }
        for ((_, behavior), next) in self.behaviors.iter_mut().zip(staged) {
            *behavior = next;
        }
        self.reference_bounds = Some(bounds);
        Ok(())
    }

    /// Main update loop: behaviors first, then integration and boundary collision.
    pub fn update(&mut self, dt: f32) -> UpdateReport {
        let mut report = UpdateReport::default();
        if !valid_dt(dt) {
            return report;
        }
        report.behaviors_stepped = self.step_behaviors(dt);
        let (integrated, hits) = self.integrate(dt);
        report.bodies_integrated = integrated;
        report.boundary_hits = hits;
        report
    }

    /// Run every enabled behavior against its item. Returns how many ran.
    pub fn step_behaviors(&mut self, dt: f32) -> u32 {
        if !valid_dt(dt) {
            return 0;
        }
        let mut stepped = 0;
        for (_, behavior) in self.behaviors.iter_mut() {
            if !behavior.is_enabled() {
                continue;
            }
            let Some(body) = self.bodies.iter_mut().find(|b| b.id == behavior.item()) else {
                continue;
            };
            if !body.active {
                continue;
            }
            behavior.step(body, dt);
            stepped += 1;
        }
        stepped
    }

    /// Move every active body and keep it inside the reference bounds.
    /// Returns (bodies integrated, boundary hits).
    pub fn integrate(&mut self, dt: f32) -> (u32, u32) {
        if !valid_dt(dt) {
            return (0, 0);
        }
        let bounds = self.reference_bounds;
        let integrate = |body: &mut SnapBody| -> Option<bool> {
            if !body.active {
                return None;
            }
            body.save_prev_state();
            body.integrate(dt);
            Some(bounds.map(|b| keep_inside(body, &b)).unwrap_or(false))
        };

        #[cfg(feature = "parallel")]
        let results: Vec<Option<bool>> = if self.bodies.len() >= PARALLEL_MIN_BODIES {
            self.bodies.par_iter_mut().map(integrate).collect()
        } else {
            self.bodies.iter_mut().map(integrate).collect()
        };
        #[cfg(not(feature = "parallel"))]
        let results: Vec<Option<bool>> = self.bodies.iter_mut().map(integrate).collect();

        let mut integrated = 0;
        let mut hits = 0;
        for hit in results.into_iter().flatten() {
            integrated += 1;
            if hit {
                hits += 1;
            }
        }
        (integrated, hits)
    }
}

#[inline]
fn valid_dt(dt: f32) -> bool {
    dt.is_finite() && dt > 0.0
}

impl Default for DynamicAnimator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::Vec2;
    use crate::domain::{Corner, SnapError};
    use approx::assert_relative_eq;

    fn animator_with_item(x: f32, y: f32) -> (DynamicAnimator, ItemId, BehaviorId) {
        let mut animator = DynamicAnimator::new();
        animator.set_reference_bounds(Bounds::from_size(400.0, 300.0)).unwrap();
        let item = animator.add_body(SnapBody::new_rect(x, y, 40.0, 40.0)).unwrap();
        let behavior = SnapBehavior::new(item, 36.0).unwrap();
        let bid = animator.add_behavior(behavior).unwrap().unwrap();
        (animator, item, bid)
    }

    #[test]
    fn add_body_rejects_empty_rect() {
        let mut animator = DynamicAnimator::new();
        assert!(animator.add_body(SnapBody::new_rect(0.0, 0.0, 0.0, 10.0)).is_none());
        assert_eq!(animator.add_body(SnapBody::new_rect(0.0, 0.0, 4.0, 4.0)), Some(ItemId(1)));
        assert_eq!(animator.add_body(SnapBody::new_rect(0.0, 0.0, 4.0, 4.0)), Some(ItemId(2)));
    }

    #[test]
    fn behavior_needs_existing_item() {
        let mut animator = DynamicAnimator::new();
        let orphan = SnapBehavior::new(ItemId(99), 4.0).unwrap();
        assert_eq!(animator.add_behavior(orphan), Ok(None));
    }

    #[test]
    fn removing_body_drops_its_behaviors() {
        let (mut animator, item, bid) = animator_with_item(100.0, 100.0);
        assert!(animator.remove_body(item));
        assert!(animator.behavior(bid).is_none());
        assert!(!animator.remove_body(item));
    }

    #[test]
    fn update_snaps_item_into_nearest_corner() {
        let (mut animator, item, bid) = animator_with_item(300.0, 220.0);
        for _ in 0..300 {
            animator.update(1.0 / 60.0);
        }
        let body = animator.body(item).unwrap();
        let behavior = animator.behavior(bid).unwrap();
        assert_eq!(behavior.current_corner(), Corner::BottomRight);
        assert!(body.pos.distance(Vec2::new(364.0, 264.0)) < 0.05);
    }

    #[test]
    fn resize_is_all_or_nothing() {
        let (mut animator, _, bid) = animator_with_item(100.0, 100.0);
        let before = animator.behavior(bid).unwrap().bounds();
        let err = animator.set_reference_bounds(Bounds::from_size(60.0, 300.0)).unwrap_err();
        assert!(matches!(err, SnapError::InvalidConfiguration(_)));
        assert_eq!(animator.behavior(bid).unwrap().bounds(), before);
        assert_eq!(animator.reference_bounds(), Some(Bounds::from_size(400.0, 300.0)));
    }

    #[test]
    fn disabled_behavior_lets_body_coast() {
        let (mut animator, item, bid) = animator_with_item(200.0, 150.0);
        animator.behavior_mut(bid).unwrap().set_enabled(false);
        animator.body_mut(item).unwrap().velocity = Vec2::new(60.0, 0.0);
        let report = animator.update(0.5);
        assert_eq!(report.behaviors_stepped, 0);
        assert_eq!(report.bodies_integrated, 1);
        let body = animator.body(item).unwrap();
        assert_eq!(body.pos, Vec2::new(230.0, 150.0));
        assert_eq!(body.velocity, Vec2::new(60.0, 0.0));
    }

    #[test]
    fn damped_body_coasts_shorter() {
        let (mut animator, item, bid) = animator_with_item(200.0, 150.0);
        animator.behavior_mut(bid).unwrap().set_enabled(false);
        let body = animator.body_mut(item).unwrap();
        body.set_linear_damping(1.0);
        body.velocity = Vec2::new(60.0, 0.0);
        animator.update(0.5);
        // 60 / (1 + 0.5) = 40 pt/s for half a second
        let body = animator.body(item).unwrap();
        assert_relative_eq!(body.velocity.x, 40.0, epsilon = 1e-4);
        assert_relative_eq!(body.pos.x, 220.0, epsilon = 1e-4);
        assert_eq!(body.pos.y, 150.0);
    }

    #[test]
    fn removed_behavior_stops_steering() {
        let (mut animator, item, bid) = animator_with_item(300.0, 220.0);
        let removed = animator.remove_behavior(bid).unwrap();
        assert_eq!(removed.item(), item);
        assert!(animator.remove_behavior(bid).is_none());
        assert!(animator.behavior_for_item(item).is_none());
        assert_eq!(animator.body_count(), 1);

        let report = animator.update(1.0 / 60.0);
        assert_eq!(report.behaviors_stepped, 0);
        assert_eq!(animator.body(item).unwrap().pos, Vec2::new(300.0, 220.0));
    }

    #[test]
    fn bad_dt_is_ignored() {
        let (mut animator, item, _) = animator_with_item(200.0, 150.0);
        assert_eq!(animator.update(0.0), UpdateReport::default());
        assert_eq!(animator.update(f32::NAN), UpdateReport::default());
        assert_eq!(animator.body(item).unwrap().pos, Vec2::new(200.0, 150.0));
    }
}
