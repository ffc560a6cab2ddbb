//! Audio: one SFX channel fed by simulation event observers.
//!
//! Sounds are fire-and-forget. When the sound files failed to load there is
//! no `AudioAssets` resource and the observers stay silent.

use bevy::prelude::*;
use bevy_kira_audio::prelude::*;
use micromegas_tracing::prelude::span_fn;

use crate::events::{CoinCollected, EnemyStomped, Jumped, PlayerDamaged};
use crate::resources::AudioAssets;

#[derive(Resource)]
pub struct SfxChannel;

pub struct GameAudioPlugin;

impl Plugin for GameAudioPlugin {
    fn build(&self, app: &mut App) {
        app.add_audio_channel::<SfxChannel>();

        app.add_observer(on_jumped);
        app.add_observer(on_coin_collected);
        app.add_observer(on_enemy_stomped);
        app.add_observer(on_player_damaged);
    }
}

fn play(sfx: &AudioChannel<SfxChannel>, sound: &Handle<AudioSource>) {
    sfx.play(sound.clone());
}

#[span_fn]
fn on_jumped(
    _trigger: On<Jumped>,
    sfx: Res<AudioChannel<SfxChannel>>,
    assets: Option<Res<AudioAssets>>,
) {
    if let Some(assets) = assets {
        play(&sfx, &assets.jump);
    }
}

#[span_fn]
fn on_coin_collected(
    _trigger: On<CoinCollected>,
    sfx: Res<AudioChannel<SfxChannel>>,
    assets: Option<Res<AudioAssets>>,
) {
    if let Some(assets) = assets {
        play(&sfx, &assets.coin);
    }
}

#[span_fn]
fn on_enemy_stomped(
    _trigger: On<EnemyStomped>,
    sfx: Res<AudioChannel<SfxChannel>>,
    assets: Option<Res<AudioAssets>>,
) {
    if let Some(assets) = assets {
        play(&sfx, &assets.stomp);
    }
}

#[span_fn]
fn on_player_damaged(
    _trigger: On<PlayerDamaged>,
    sfx: Res<AudioChannel<SfxChannel>>,
    assets: Option<Res<AudioAssets>>,
) {
    if let Some(assets) = assets {
        play(&sfx, &assets.damage);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
