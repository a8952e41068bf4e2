//! Corner Snap Engine - sticky-corner snapping for draggable items in WASM
//!
//! A floating item (picture-in-picture window, chat head, toolbar) is
//! dragged around a container and, when released, glides to one of the four
//! corners. The release velocity is taken into account: a flick toward a far
//! corner lands there instead of falling back to the nearest one.
//!
//! Architecture:
//! - core/        - Geometry and logging plumbing
//! - domain/      - Corners, configuration, errors
//! - systems/     - Corner resolver, snap behavior, dynamics engine
//! - simulation/  - World orchestration and the JS facade

pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    crate::core::logging::init_logger(log::Level::Info);
    log::info!("corner snap engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::math::{Bounds, Point, Vec2};
pub use domain::{ConfigIssue, Corner, SnapConfig, SnapError, SnapResult};
pub use systems::dynamics::{DynamicAnimator, DynamicItem, ItemId, SnapBody};
pub use simulation::{SnapWorld, World};
pub use systems::snap::SnapBehavior;

// Export corner ordinals for JS
#[wasm_bindgen]
pub fn corner_top_left() -> u8 { Corner::TopLeft as u8 }
#[wasm_bindgen]
pub fn corner_bottom_left() -> u8 { Corner::BottomLeft as u8 }
#[wasm_bindgen]
pub fn corner_bottom_right() -> u8 { Corner::BottomRight as u8 }
#[wasm_bindgen]
pub fn corner_top_right() -> u8 { Corner::TopRight as u8 }
