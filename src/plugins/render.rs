//! Draws the session as flat rectangles.
//!
//! The simulation works in screen space (origin top-left, y down); Bevy's
//! world has its origin at the centre with y up. Every frame the draw list
//! is rebuilt from the session and matched onto a pool of sprite entities by
//! slot.

use bevy::prelude::*;
use micromegas_tracing::prelude::span_fn;

use crate::app_state::AppState;
use crate::components::{SceneSprite, ShapeKind};
use crate::events::PlayerDamaged;
use crate::plugins::GameSet;
use crate::resources::ActiveSession;
use crate::sim::GameSession;
use crate::sim::body::Body;

pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(SKY_COLOR));
        app.init_resource::<DamageFlash>();
        app.add_observer(start_damage_flash);
        app.add_systems(
            Update,
            sync_scene_sprites
                .in_set(GameSet::Presentation)
                .run_if(not(in_state(AppState::Loading))),
        );
    }
}

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

const SKY_COLOR: Color = Color::srgb(0.53, 0.81, 0.92);
const PLATFORM_COLOR: Color = Color::srgb(0.0, 1.0, 0.0);
const COIN_COLOR: Color = Color::srgb(1.0, 1.0, 0.0);
const ENEMY_COLOR: Color = Color::srgb(1.0, 0.0, 0.0);
const PLAYER_COLOR: Color = Color::srgb(0.0, 0.0, 1.0);
const PLAYER_HURT_COLOR: Color = Color::srgb(1.0, 0.45, 0.45);

/// Frames the player stays tinted after taking damage.
const DAMAGE_FLASH_FRAMES: u32 = 6;

// ---------------------------------------------------------------------------
// Resources
// ---------------------------------------------------------------------------

/// Remaining frames of the damage tint. The simulation never waits on it.
#[derive(Resource, Debug, Default)]
pub struct DamageFlash {
    pub frames_left: u32,
}

/// One rectangle to draw, already in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shape {
    pub kind: ShapeKind,
    pub size: Vec2,
    pub translation: Vec3,
}

impl ShapeKind {
    fn depth(self) -> f32 {
        match self {
            ShapeKind::Platform => 0.0,
            ShapeKind::Coin => 1.0,
            ShapeKind::Enemy => 2.0,
            ShapeKind::Player => 3.0,
        }
    }

    fn color(self, hurt: bool) -> Color {
        match self {
            ShapeKind::Platform => PLATFORM_COLOR,
            ShapeKind::Coin => COIN_COLOR,
            ShapeKind::Enemy => ENEMY_COLOR,
            ShapeKind::Player if hurt => PLAYER_HURT_COLOR,
            ShapeKind::Player => PLAYER_COLOR,
        }
    }
}

/// Convert a screen-space box into a world-space sprite centre.
pub fn screen_to_world(body: &Body, world_size: Vec2, depth: f32) -> Vec3 {
    let center = body.center();
    Vec3::new(
        center.x - world_size.x / 2.0,
        world_size.y / 2.0 - center.y,
        depth,
    )
}

/// Everything to draw for the current session, back to front.
pub fn scene_shapes(session: &GameSession) -> Vec<Shape> {
    let config = session.config();
    let world_size = Vec2::new(config.world_width, config.world_height);
    let level = session.level();

    let platforms = level.platforms.iter().map(|p| (ShapeKind::Platform, *p.body()));
    let coins = level.collectibles.iter().map(|c| (ShapeKind::Coin, c.body));
    let enemies = level.enemies.iter().map(|e| (ShapeKind::Enemy, e.body));
    let player = std::iter::once((ShapeKind::Player, session.player().body));

    platforms
        .chain(coins)
        .chain(enemies)
        .chain(player)
        .map(|(kind, body)| Shape {
            kind,
            size: body.size(),
            translation: screen_to_world(&body, world_size, kind.depth()),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Systems
// ---------------------------------------------------------------------------

fn start_damage_flash(_trigger: On<PlayerDamaged>, mut flash: ResMut<DamageFlash>) {
    flash.frames_left = DAMAGE_FLASH_FRAMES;
}

#[span_fn]
fn sync_scene_sprites(
    mut commands: Commands,
    session: Res<ActiveSession>,
    mut flash: ResMut<DamageFlash>,
    mut sprites: Query<(Entity, &SceneSprite, &mut Sprite, &mut Transform)>,
) {
    let hurt = flash.frames_left > 0;
    flash.frames_left = flash.frames_left.saturating_sub(1);

    let shapes = scene_shapes(&session);
    let mut drawn = vec![false; shapes.len()];

    for (entity, slot, mut sprite, mut transform) in &mut sprites {
        match shapes.get(slot.0) {
            Some(shape) if !drawn[slot.0] => {
                sprite.color = shape.kind.color(hurt);
                sprite.custom_size = Some(shape.size);
                transform.translation = shape.translation;
                drawn[slot.0] = true;
            }
            _ => commands.entity(entity).despawn(),
        }
    }

    for (slot, shape) in shapes.iter().enumerate() {
        if drawn[slot] {
            continue;
        }
        commands.spawn((
            SceneSprite(slot),
            Sprite::from_color(shape.kind.color(hurt), shape.size),
            Transform::from_translation(shape.translation),
        ));
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
