//! Game session state machine: owns the player and the active level,
//! advances through levels and decides win, loss and restart.

use micromegas_tracing::prelude::{info, span_scope};

use super::event::SimEvent;
use super::level::Level;
use super::player::{HorizontalIntent, Player};
use super::tick::Tick;
use crate::config::PhysicsConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionStatus {
    #[default]
    Playing,
    GameOver,
    Won,
}

/// Input sampled once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickInput {
    pub horizontal: HorizontalIntent,
    pub jump: bool,
    pub restart: bool,
    pub quit: bool,
}

/// Running totals for the HUD and end-of-game banner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub ticks: u64,
    pub stomps: u32,
    pub damage_taken: u32,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    config: PhysicsConfig,
    player: Player,
    level: Level,
    status: SessionStatus,
    stats: SessionStats,
}

impl GameSession {
    pub fn new(config: PhysicsConfig) -> Self {
        let level = Level::build(0, &config);
        let player = Player::new(level.respawn, config.max_health);
        info!("session started: {} levels", Level::count());
        Self {
            config,
            player,
            level,
            status: SessionStatus::Playing,
            stats: SessionStats::default(),
        }
    }

    /// Start from a hand-built level instead of a shipped one. Scenario
    /// setup only; normal play goes through `new`.
    #[doc(hidden)]
    pub fn with_level(config: PhysicsConfig, level: Level) -> Self {
        let player = Player::new(level.respawn, config.max_health);
        Self {
            config,
            player,
            level,
            status: SessionStatus::Playing,
            stats: SessionStats::default(),
        }
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Direct access for scenario setup. Bypasses the session's rules.
    #[doc(hidden)]
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    #[doc(hidden)]
    pub fn level_mut(&mut self) -> &mut Level {
        &mut self.level
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Run one simulation step and return the events it produced, in order.
    ///
    /// Outside `Playing` the only thing a tick does is honour a restart
    /// request.
    pub fn tick(&mut self, input: &TickInput) -> Vec<SimEvent> {
        let mut events = Vec::new();

        if self.status != SessionStatus::Playing {
            if input.restart {
                self.restart();
            }
            return events;
        }

        span_scope!("session_tick");
        self.stats.ticks += 1;

        self.player.apply_intent(input.horizontal, self.config.move_speed);
        if input.jump {
            self.player.jump(self.config.jump_impulse, &mut events);
        }

        self.player
            .tick(self.level.player_context(&self.config, &mut events));
        self.level.tick(&self.config);

        for event in &events {
            match event {
                SimEvent::Stomp => self.stats.stomps += 1,
                SimEvent::Damage => self.stats.damage_taken += 1,
                SimEvent::Jump | SimEvent::CoinCollected => {}
            }
        }

        self.settle();
        events
    }

    /// Apply end-of-tick transitions. Losing wins over completing a level in
    /// the same tick.
    fn settle(&mut self) {
        if self.player.health == 0 {
            self.status = SessionStatus::GameOver;
            info!(
                "game over: level={} coins={}",
                self.level.index + 1,
                self.player.coins_collected
            );
            return;
        }

        if !self.level.is_complete() {
            return;
        }

        if self.level.is_last() {
            self.status = SessionStatus::Won;
            info!(
                "game won: coins={} health={}",
                self.player.coins_collected, self.player.health
            );
        } else {
            self.advance_level();
        }
    }

    fn advance_level(&mut self) {
        let next = self.level.index + 1;
        self.level = Level::build(next, &self.config);
        self.player.place_at(self.level.respawn);
        info!("level advanced: level={}", next + 1);
    }

    /// Back to the first level with a fresh player.
    pub fn restart(&mut self) {
        self.level = Level::build(0, &self.config);
        self.player = Player::new(self.level.respawn, self.config.max_health);
        self.status = SessionStatus::Playing;
        self.stats = SessionStats::default();
        info!("session restarted");
    }
}
