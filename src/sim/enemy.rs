//! Enemy patrol: constant horizontal speed, reversing at the ends of a bound.

use super::body::Body;
use super::platform::{Platform, PlatformId};
use super::tick::Tick;

pub const ENEMY_SIZE: f32 = 32.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub body: Body,
    /// Signed horizontal speed, units per tick.
    pub vx: f32,
    /// Platform whose horizontal span bounds the patrol. `None` patrols the
    /// full world width.
    pub bound: Option<PlatformId>,
}

/// Read-only view of the level an enemy patrols in.
pub struct PatrolContext<'a> {
    pub platforms: &'a [Platform],
    pub world_width: f32,
}

impl Enemy {
    pub fn new(x: f32, y: f32, vx: f32, bound: Option<PlatformId>) -> Self {
        Self {
            body: Body::new(x, y, ENEMY_SIZE, ENEMY_SIZE),
            vx,
            bound,
        }
    }

    /// Enemy standing on top of `platform`, at horizontal offset `x`.
    pub fn on_platform(x: f32, id: PlatformId, platform: &Platform, vx: f32) -> Self {
        Self::new(x, platform.body().top() - ENEMY_SIZE, vx, Some(id))
    }

    /// Horizontal extent the enemy must stay within.
    fn patrol_span(&self, ctx: &PatrolContext<'_>) -> (f32, f32) {
        match self.bound.and_then(|id| ctx.platforms.get(id.0)) {
            Some(platform) => (platform.body().left(), platform.body().right()),
            None => (0.0, ctx.world_width),
        }
    }
}

impl Tick for Enemy {
    type Context<'a> = PatrolContext<'a>;

    fn tick(&mut self, ctx: PatrolContext<'_>) {
        self.body.pos.x += self.vx;

        let (min_x, max_x) = self.patrol_span(&ctx);
        if self.body.right() >= max_x && self.vx > 0.0 {
            self.body.set_right(max_x);
            self.vx = -self.vx;
        } else if self.body.left() <= min_x && self.vx < 0.0 {
            self.body.set_left(min_x);
            self.vx = -self.vx;
        }

        // Overshoot while already heading back in (e.g. spawned outside the
        // span) only clamps.
        if self.body.right() > max_x {
            self.body.set_right(max_x);
        } else if self.body.left() < min_x {
            self.body.set_left(min_x);
        }
    }
}
