//! Level layouts and the completion predicate.
//!
//! Layouts are code-defined and pure: building the same index twice yields
//! the same level. Platform 0 is always the ground strip along the bottom of
//! the world.

use bevy::math::Vec2;

use super::collectible::Collectible;
use super::enemy::{Enemy, PatrolContext};
use super::event::SimEvent;
use super::platform::{Platform, PlatformId};
use super::player::PlayerContext;
use super::tick::Tick;
use crate::config::PhysicsConfig;

pub const GROUND_HEIGHT: f32 = 40.0;

/// Platform rectangles `(x, y, width, height)` above the ground.
type PlatformLayout = &'static [(f32, f32, f32, f32)];
/// Enemies as `(x, platform)`; the enemy stands on that platform.
type EnemyLayout = &'static [(f32, usize)];
/// Coin centres.
type CoinLayout = &'static [(f32, f32)];

struct Layout {
    platforms: PlatformLayout,
    enemies: EnemyLayout,
    coins: CoinLayout,
}

const LAYOUTS: [Layout; 2] = [
    // Level 1: a staircase of wide ledges.
    Layout {
        platforms: &[
            (200.0, 400.0, 150.0, 20.0),
            (400.0, 300.0, 150.0, 20.0),
            (200.0, 200.0, 150.0, 20.0),
            (500.0, 150.0, 150.0, 20.0),
        ],
        enemies: &[(250.0, 1), (450.0, 2)],
        coins: &[(250.0, 350.0), (450.0, 250.0), (250.0, 150.0), (550.0, 100.0)],
    },
    // Level 2: narrow ledges, one more guard.
    Layout {
        platforms: &[
            (100.0, 450.0, 100.0, 20.0),
            (300.0, 400.0, 100.0, 20.0),
            (500.0, 350.0, 100.0, 20.0),
            (300.0, 250.0, 100.0, 20.0),
            (100.0, 200.0, 100.0, 20.0),
            (600.0, 200.0, 100.0, 20.0),
        ],
        enemies: &[(350.0, 2), (150.0, 5), (650.0, 6)],
        coins: &[
            (150.0, 420.0),
            (350.0, 370.0),
            (550.0, 320.0),
            (350.0, 220.0),
            (150.0, 170.0),
            (650.0, 170.0),
        ],
    },
];

#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    pub index: usize,
    pub platforms: Vec<Platform>,
    pub enemies: Vec<Enemy>,
    pub collectibles: Vec<Collectible>,
    pub respawn: Vec2,
}

impl Level {
    /// Number of shipped levels.
    pub fn count() -> usize {
        LAYOUTS.len()
    }

    /// Build level `index` (0-based) for the configured world.
    ///
    /// Panics if `index` is not a shipped level.
    pub fn build(index: usize, config: &PhysicsConfig) -> Self {
        assert!(
            index < LAYOUTS.len(),
            "level index {} out of range (0..{})",
            index,
            LAYOUTS.len()
        );
        let layout = &LAYOUTS[index];

        let mut platforms = Vec::with_capacity(layout.platforms.len() + 1);
        platforms.push(Platform::new(
            0.0,
            config.world_height - GROUND_HEIGHT,
            config.world_width,
            GROUND_HEIGHT,
        ));
        platforms.extend(
            layout
                .platforms
                .iter()
                .map(|&(x, y, w, h)| Platform::new(x, y, w, h)),
        );

        let enemies = layout
            .enemies
            .iter()
            .map(|&(x, platform)| {
                Enemy::on_platform(
                    x,
                    PlatformId(platform),
                    &platforms[platform],
                    config.enemy_speed,
                )
            })
            .collect();

        let collectibles = layout
            .coins
            .iter()
            .map(|&(x, y)| Collectible::coin(x, y))
            .collect();

        Self {
            index,
            platforms,
            enemies,
            collectibles,
            respawn: Self::spawn_point(config),
        }
    }

    /// Where the player starts and respawns.
    pub fn spawn_point(config: &PhysicsConfig) -> Vec2 {
        Vec2::new(100.0, config.world_height - 100.0)
    }

    pub fn is_complete(&self) -> bool {
        self.collectibles.is_empty()
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 >= LAYOUTS.len()
    }

    /// Split the level into the context a player tick needs.
    pub fn player_context<'a>(
        &'a mut self,
        config: &'a PhysicsConfig,
        events: &'a mut Vec<SimEvent>,
    ) -> PlayerContext<'a> {
        PlayerContext {
            config,
            platforms: &self.platforms,
            enemies: &mut self.enemies,
            collectibles: &mut self.collectibles,
            respawn: self.respawn,
            events,
        }
    }
}

/// A level tick moves its enemies along their patrols.
impl Tick for Level {
    type Context<'a> = &'a PhysicsConfig;

    fn tick(&mut self, config: &PhysicsConfig) {
        for enemy in &mut self.enemies {
            enemy.tick(PatrolContext {
                platforms: &self.platforms,
                world_width: config.world_width,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_is_deterministic() {
        let config = PhysicsConfig::default();
        for index in 0..Level::count() {
            assert_eq!(Level::build(index, &config), Level::build(index, &config));
        }
    }

    #[test]
    fn ground_spans_world() {
        let config = PhysicsConfig::default();
        let level = Level::build(0, &config);
        let ground = level.platforms[0].body();
        assert_eq!(ground.left(), 0.0);
        assert_eq!(ground.right(), 800.0);
        assert_eq!(ground.top(), 560.0);
        assert_eq!(ground.bottom(), 600.0);
    }

    #[test]
    fn shipped_layouts() {
        let config = PhysicsConfig::default();
        let first = Level::build(0, &config);
        assert_eq!(first.platforms.len(), 5);
        assert_eq!(first.enemies.len(), 2);
        assert_eq!(first.collectibles.len(), 4);
        assert!(!first.is_last());

        let second = Level::build(1, &config);
        assert_eq!(second.platforms.len(), 7);
        assert_eq!(second.enemies.len(), 3);
        assert_eq!(second.collectibles.len(), 6);
        assert!(second.is_last());
    }

    #[test]
    fn enemies_stand_on_their_platform() {
        let config = PhysicsConfig::default();
        for index in 0..Level::count() {
            let level = Level::build(index, &config);
            for enemy in &level.enemies {
                let bound = enemy.bound.expect("shipped enemies are platform-bound");
                let platform = level.platforms[bound.0].body();
                assert_eq!(enemy.body.bottom(), platform.top());
                assert!(enemy.body.left() >= platform.left());
                assert!(enemy.body.right() <= platform.right());
            }
        }
    }

    #[test]
    fn complete_when_no_coins_left() {
        let config = PhysicsConfig::default();
        let mut level = Level::build(0, &config);
        assert!(!level.is_complete());
        level.collectibles.clear();
        assert!(level.is_complete());
    }

    #[test]
    fn level_tick_patrols_enemies() {
        let config = PhysicsConfig::default();
        let mut level = Level::build(0, &config);
        let before = level.enemies[0].body.left();
        level.tick(&config);
        assert_eq!(level.enemies[0].body.left(), before + config.enemy_speed);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn unknown_level_panics() {
        Level::build(Level::count(), &PhysicsConfig::default());
    }
}
