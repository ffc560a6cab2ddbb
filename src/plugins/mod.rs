pub mod audio;
pub mod banner;
pub mod camera;
pub mod hud;
pub mod render;
pub mod simulation;
pub mod telemetry;

use bevy::prelude::*;

/// Ordering of per-frame work: input is latched before anything presents
/// the session.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameSet {
    Input,
    Presentation,
}
