//! Logging setup - `log` records go to the browser console via `console_log`
//!
//! Native hosts (tests, benches) bring their own logger; until they do,
//! records are dropped.

use log::Level;

/// Install the console logger. Safe to call more than once.
#[cfg(target_arch = "wasm32")]
pub fn init_logger(level: Level) {
    // A second call (or a host-installed logger) just keeps the existing one.
    if console_log::init_with_level(level).is_err() {
        log::debug!("logger already installed");
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn init_logger(level: Level) {
    log::set_max_level(level.to_level_filter());
}
