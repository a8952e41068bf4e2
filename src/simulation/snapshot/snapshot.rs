use serde::Serialize;

use crate::core::math::Vec2;
use crate::domain::Corner;
use crate::systems::dynamics::ItemId;

use super::SnapWorld;

/// Per-item state handed to the UI layer
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ItemSnapshot {
    pub id: u32,
    pub position: Vec2,
    pub velocity: Vec2,
    pub corner: Option<Corner>,
    pub snapping: bool,
    pub settled: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WorldSnapshot {
    pub frame: u64,
    pub width: f32,
    pub height: f32,
    pub items: Vec<ItemSnapshot>,
}

pub(super) fn is_settled(world: &SnapWorld, id: ItemId) -> bool {
    let (Some(body), Some(behavior)) = (world.animator.body(id), world.animator.behavior_for_item(id)) else {
        return false;
    };
    behavior.is_settled(body, world.config.rest_distance, world.config.rest_speed)
}

pub(super) fn snapshot(world: &SnapWorld) -> WorldSnapshot {
    let mut items: Vec<ItemSnapshot> = world
        .animator
        .bodies()
        .iter()
        .map(|body| {
            let behavior = world.animator.behavior_for_item(body.id);
            ItemSnapshot {
                id: body.id.0,
                position: body.pos,
                velocity: body.velocity,
                corner: behavior.map(|b| b.current_corner()),
                snapping: behavior.map(|b| b.is_enabled()).unwrap_or(false),
                settled: is_settled(world, body.id),
            }
        })
        .collect();
    // swap_remove scrambles storage order; keep output stable for the UI
    items.sort_by_key(|i| i.id);

    WorldSnapshot {
        frame: world.frame,
        width: world.width,
        height: world.height,
        items,
    }
}

pub(super) fn snapshot_json(world: &SnapWorld) -> String {
    serde_json::to_string(&snapshot(world)).unwrap_or_else(|e| {
        log::error!("snapshot serialisation failed: {e}");
        String::from("{}")
    })
}
