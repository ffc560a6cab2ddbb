//! Player movement, axis-separated collision resolution, pickups, enemy
//! contact and damage.
//!
//! Order inside a tick is fixed: gravity, horizontal move and push-out,
//! vertical move and push-out, coins, enemies, world bounds. The horizontal
//! pass must run before the vertical pass or corner contacts resolve onto
//! the wrong axis.

use bevy::math::Vec2;
use micromegas_tracing::prelude::info;

use super::body::Body;
use super::collectible::Collectible;
use super::enemy::Enemy;
use super::event::SimEvent;
use super::platform::Platform;
use super::tick::Tick;
use crate::config::PhysicsConfig;

pub const PLAYER_SIZE: f32 = 32.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// Horizontal input for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalIntent {
    Left,
    #[default]
    Idle,
    Right,
}

impl HorizontalIntent {
    pub fn sign(self) -> f32 {
        match self {
            HorizontalIntent::Left => -1.0,
            HorizontalIntent::Idle => 0.0,
            HorizontalIntent::Right => 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub body: Body,
    pub vx: f32,
    pub vy: f32,
    pub on_ground: bool,
    pub facing: Facing,
    pub health: u32,
    pub max_health: u32,
    pub coins_collected: u32,
}

/// Everything a player tick reads or mutates in the active level.
pub struct PlayerContext<'a> {
    pub config: &'a PhysicsConfig,
    pub platforms: &'a [Platform],
    pub enemies: &'a mut Vec<Enemy>,
    pub collectibles: &'a mut Vec<Collectible>,
    pub respawn: Vec2,
    pub events: &'a mut Vec<SimEvent>,
}

impl Player {
    pub fn new(spawn: Vec2, max_health: u32) -> Self {
        assert!(max_health > 0, "max_health must be positive");
        Self {
            body: Body::new(spawn.x, spawn.y, PLAYER_SIZE, PLAYER_SIZE),
            vx: 0.0,
            vy: 0.0,
            on_ground: false,
            facing: Facing::Right,
            health: max_health,
            max_health,
            coins_collected: 0,
        }
    }

    /// Set horizontal velocity from input. Facing only changes on actual
    /// input.
    pub fn apply_intent(&mut self, intent: HorizontalIntent, speed: f32) {
        self.vx = intent.sign() * speed;
        match intent {
            HorizontalIntent::Left => self.facing = Facing::Left,
            HorizontalIntent::Right => self.facing = Facing::Right,
            HorizontalIntent::Idle => {}
        }
    }

    /// Jump if standing on something. Returns whether the jump happened.
    pub fn jump(&mut self, impulse: f32, events: &mut Vec<SimEvent>) -> bool {
        if !self.on_ground {
            return false;
        }
        self.vy = impulse;
        self.on_ground = false;
        events.push(SimEvent::Jump);
        true
    }

    /// Move to `spawn` at rest.
    pub fn place_at(&mut self, spawn: Vec2) {
        self.body.pos = spawn;
        self.vx = 0.0;
        self.vy = 0.0;
        self.on_ground = false;
    }

    /// Lose one health point. Respawns only while health remains; at zero the
    /// session ends the game.
    pub fn take_damage(&mut self, respawn: Vec2, events: &mut Vec<SimEvent>) {
        self.health = self.health.saturating_sub(1);
        events.push(SimEvent::Damage);
        info!("player damaged: health={}", self.health);
        if self.health > 0 {
            self.place_at(respawn);
        }
    }

    /// First platform the player currently overlaps, in level order.
    fn first_overlap<'a>(&self, platforms: &'a [Platform]) -> Option<&'a Body> {
        platforms
            .iter()
            .map(Platform::body)
            .find(|body| self.body.overlaps(body))
    }

    // Push-outs below move the player one way only, so a platform it was
    // pushed clear of can never overlap again and `platforms.len()` passes
    // are enough to clear every overlap.

    fn resolve_horizontal(&mut self, platforms: &[Platform]) {
        if self.vx == 0.0 {
            return;
        }
        let moving_right = self.vx > 0.0;
        for _ in 0..platforms.len() {
            let Some(wall) = self.first_overlap(platforms) else {
                break;
            };
            if moving_right {
                self.body.set_right(wall.left());
            } else {
                self.body.set_left(wall.right());
            }
        }
    }

    fn resolve_vertical(&mut self, platforms: &[Platform]) {
        let falling = self.vy > 0.0;
        let rising = self.vy < 0.0;
        if !falling && !rising {
            return;
        }

        let mut blocked = false;
        for _ in 0..platforms.len() {
            let Some(surface) = self.first_overlap(platforms) else {
                break;
            };
            if falling {
                self.body.set_bottom(surface.top());
            } else {
                self.body.set_top(surface.bottom());
            }
            blocked = true;
        }

        if blocked {
            self.vy = 0.0;
            self.on_ground = falling;
        }
    }

    fn collect_coins(&mut self, collectibles: &mut Vec<Collectible>, events: &mut Vec<SimEvent>) {
        collectibles.retain_mut(|coin| {
            if !self.body.overlaps(&coin.body) {
                return true;
            }
            if coin.collect() {
                self.coins_collected += 1;
                events.push(SimEvent::CoinCollected);
            }
            false
        });
    }

    /// Stomp or get hit by every overlapping enemy. Classification uses the
    /// velocity on entry so the bounce from one stomp does not turn the next
    /// overlap into a hit.
    fn touch_enemies(
        &mut self,
        enemies: &mut Vec<Enemy>,
        config: &PhysicsConfig,
        respawn: Vec2,
        events: &mut Vec<SimEvent>,
    ) {
        let falling = self.vy > 0.0;
        let bottom = self.body.bottom();
        let mut stomped = false;
        let mut hit = false;

        enemies.retain(|enemy| {
            if !self.body.overlaps(&enemy.body) {
                return true;
            }
            if falling && bottom < enemy.body.center().y {
                stomped = true;
                events.push(SimEvent::Stomp);
                false
            } else {
                hit = true;
                true
            }
        });

        if stomped {
            self.vy = config.jump_impulse / 2.0;
        } else if hit {
            self.take_damage(respawn, events);
        }
    }

    fn clamp_to_world(&mut self, config: &PhysicsConfig, respawn: Vec2, events: &mut Vec<SimEvent>) {
        if self.body.left() < 0.0 {
            self.body.set_left(0.0);
        }
        if self.body.right() > config.world_width {
            self.body.set_right(config.world_width);
        }
        if self.body.top() < 0.0 {
            self.body.set_top(0.0);
        }
        if self.body.bottom() > config.world_height {
            self.body.set_bottom(config.world_height);
            self.vy = 0.0;
            self.take_damage(respawn, events);
        }
    }
}

impl Tick for Player {
    type Context<'a> = PlayerContext<'a>;

    fn tick(&mut self, ctx: PlayerContext<'_>) {
        let PlayerContext {
            config,
            platforms,
            enemies,
            collectibles,
            respawn,
            events,
        } = ctx;

        self.vy += config.gravity;

        self.body.pos.x += self.vx;
        self.resolve_horizontal(platforms);

        self.body.pos.y += self.vy;
        self.on_ground = false;
        self.resolve_vertical(platforms);

        self.collect_coins(collectibles, events);
        self.touch_enemies(enemies, config, respawn, events);
        self.clamp_to_world(config, respawn, events);
    }
}
