//! Systems: snapping behavior and the dynamics engine it drives

pub mod dynamics;
pub mod snap;
