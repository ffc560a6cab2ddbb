//! Physics and world tuning shared by the simulation and the driver.
//!
//! Defaults reproduce the classic feel (800x600 world, 60 ticks per second).
//! A JSON file can override any subset of the fields.

use micromegas_tracing::prelude::{info, warn};
use serde::{Deserialize, Serialize};

/// Environment variable naming the JSON tuning file.
pub const CONFIG_ENV: &str = "PLATFORMER_CONFIG";
/// Tuning file used when `PLATFORMER_CONFIG` is unset.
pub const DEFAULT_CONFIG_PATH: &str = "config/physics.json";

pub const WORLD_WIDTH: f32 = 800.0;
pub const WORLD_HEIGHT: f32 = 600.0;
/// Added to the player's vertical velocity every tick.
pub const GRAVITY: f32 = 0.5;
/// Vertical velocity set by a jump. Negative is up.
pub const JUMP_IMPULSE: f32 = -12.0;
pub const MOVE_SPEED: f32 = 5.0;
pub const ENEMY_SPEED: f32 = 2.0;
pub const MAX_HEALTH: u32 = 3;
pub const TICK_RATE_HZ: f64 = 60.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub world_width: f32,
    pub world_height: f32,
    pub gravity: f32,
    pub jump_impulse: f32,
    pub move_speed: f32,
    pub enemy_speed: f32,
    pub max_health: u32,
    pub tick_rate_hz: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            move_speed: MOVE_SPEED,
            enemy_speed: ENEMY_SPEED,
            max_health: MAX_HEALTH,
            tick_rate_hz: TICK_RATE_HZ,
        }
    }
}

impl PhysicsConfig {
    /// Parse a JSON tuning document. Missing fields keep their defaults.
    pub fn from_json(text: &str) -> Result<Self, String> {
        let config: PhysicsConfig =
            serde_json::from_str(text).map_err(|e| format!("Invalid physics config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Load the tuning file named by `PLATFORMER_CONFIG`, falling back to
    /// defaults when it is missing or unusable.
    pub fn load() -> Self {
        let path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let Ok(text) = std::fs::read_to_string(&path) else {
            return Self::default();
        };
        match Self::from_json(&text) {
            Ok(config) => {
                info!("physics config loaded from {}", path);
                config
            }
            Err(e) => {
                warn!("{}: {}, using defaults", path, e);
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<(), String> {
        if self.world_width <= 0.0 || self.world_height <= 0.0 {
            return Err(format!(
                "world size must be positive, got {}x{}",
                self.world_width, self.world_height
            ));
        }
        if self.gravity <= 0.0 {
            return Err(format!("gravity must pull down (positive), got {}", self.gravity));
        }
        if self.jump_impulse >= 0.0 {
            return Err(format!(
                "jump_impulse must point up (negative), got {}",
                self.jump_impulse
            ));
        }
        if self.move_speed < 0.0 || self.enemy_speed < 0.0 {
            return Err(format!(
                "speeds must not be negative, got move_speed={} enemy_speed={}",
                self.move_speed, self.enemy_speed
            ));
        }
        if self.max_health == 0 {
            return Err("max_health must be at least 1".to_string());
        }
        if self.tick_rate_hz <= 0.0 {
            return Err(format!("tick_rate_hz must be positive, got {}", self.tick_rate_hz));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = PhysicsConfig::from_json(r#"{ "gravity": 0.8 }"#).unwrap();
        assert!((cfg.gravity - 0.8).abs() < f32::EPSILON);
        assert_eq!(cfg.max_health, MAX_HEALTH);
        assert_eq!(cfg.world_width, WORLD_WIDTH);
    }

    #[test]
    fn rejects_zero_health() {
        let err = PhysicsConfig::from_json(r#"{ "max_health": 0 }"#).unwrap_err();
        assert!(err.contains("max_health"));
    }

    #[test]
    fn rejects_reversed_physics() {
        let err = PhysicsConfig::from_json(r#"{ "gravity": 0.0 }"#).unwrap_err();
        assert!(err.contains("gravity"));
        let err = PhysicsConfig::from_json(r#"{ "gravity": -0.5 }"#).unwrap_err();
        assert!(err.contains("gravity"));
        let err = PhysicsConfig::from_json(r#"{ "jump_impulse": 12.0 }"#).unwrap_err();
        assert!(err.contains("jump_impulse"));
        let err = PhysicsConfig::from_json(r#"{ "move_speed": -5.0 }"#).unwrap_err();
        assert!(err.contains("move_speed"));
        let err = PhysicsConfig::from_json(r#"{ "enemy_speed": -2.0 }"#).unwrap_err();
        assert!(err.contains("enemy_speed"));
    }

    #[test]
    fn accepts_standing_enemies() {
        let cfg = PhysicsConfig::from_json(r#"{ "enemy_speed": 0.0 }"#).unwrap();
        assert_eq!(cfg.enemy_speed, 0.0);
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(PhysicsConfig::from_json("{ gravity: ").is_err());
    }
}
