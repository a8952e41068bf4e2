use corner_snap_engine::systems::snap::resolver::{position_for_corner, resolve_target_corner};
use corner_snap_engine::{
    Bounds, ConfigIssue, Corner, DynamicAnimator, SnapBehavior, SnapBody, SnapConfig, SnapError, Vec2,
};

#[test]
fn resolver_scenarios() {
    let bounds = Bounds::new(0.0, 0.0, 100.0, 100.0);
    assert_eq!(position_for_corner(Corner::TopLeft, &bounds, 10.0), Vec2::new(10.0, 10.0));
    assert_eq!(position_for_corner(Corner::BottomRight, &bounds, 10.0), Vec2::new(90.0, 90.0));

    let centre = Vec2::new(50.0, 50.0);
    assert_eq!(resolve_target_corner(centre, Vec2::zero(), &bounds), Corner::TopLeft);
    assert_eq!(
        resolve_target_corner(Vec2::new(12.0, 12.0), Vec2::new(2000.0, 2000.0), &bounds),
        Corner::BottomRight
    );
}

#[test]
fn behavior_drives_host_engine_to_corner() {
    let mut animator = DynamicAnimator::new();
    animator.set_reference_bounds(Bounds::from_size(320.0, 480.0)).unwrap();

    let item = animator.add_body(SnapBody::new_rect(200.0, 100.0, 60.0, 60.0)).unwrap();
    let behavior = SnapBehavior::with_config(item, 40.0, &SnapConfig::default()).unwrap();
    let id = animator.add_behavior(behavior).unwrap().unwrap();

    for _ in 0..360 {
        animator.update(1.0 / 60.0);
    }

    let behavior = animator.behavior(id).unwrap();
    assert_eq!(behavior.current_corner(), Corner::TopRight);
    let target = behavior.position_for_corner(Corner::TopRight).unwrap();
    assert_eq!(target, Vec2::new(280.0, 40.0));
    let body = animator.body(item).unwrap();
    assert!(body.pos.distance(target) < 0.05);
    assert!(behavior.is_settled(body, 0.5, 2.0));
}

#[test]
fn configuration_errors_surface_synchronously() {
    let mut animator = DynamicAnimator::new();
    let item = animator.add_body(SnapBody::new_rect(10.0, 10.0, 4.0, 4.0)).unwrap();

    assert_eq!(
        SnapBehavior::new(item, -0.5).unwrap_err(),
        SnapError::InvalidConfiguration(ConfigIssue::NegativeInset(-0.5))
    );

    let mut behavior = SnapBehavior::new(item, 8.0).unwrap();
    behavior.update_fields_in_bounds(Bounds::from_size(64.0, 64.0)).unwrap();
    assert!(behavior.update_fields_in_bounds(Bounds::from_size(64.0, -1.0)).is_err());
    assert_eq!(behavior.bounds(), Some(Bounds::from_size(64.0, 64.0)));
}
