//! Fixed-rate driver for the simulation core.
//!
//! Keyboard input is sampled every frame into `PendingInput`; the session
//! ticks in `FixedUpdate` at the configured rate, its events are triggered
//! for observers, and `AppState` follows the session status.

use bevy::prelude::*;
use micromegas_tracing::prelude::{info, span_fn};

use crate::app_state::AppState;
use crate::config::PhysicsConfig;
use crate::events::trigger_sim_event;
use crate::plugins::GameSet;
use crate::resources::{ActiveSession, PendingInput};
use crate::sim::{GameSession, HorizontalIntent};

pub struct SimulationPlugin {
    pub config: PhysicsConfig,
}

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_hz(self.config.tick_rate_hz));
        app.insert_resource(ActiveSession(GameSession::new(self.config.clone())));
        app.init_resource::<PendingInput>();

        app.add_systems(
            Update,
            (sample_input, request_quit.after(sample_input)).in_set(GameSet::Input),
        );
        app.add_systems(
            FixedUpdate,
            (run_tick, sync_app_state.after(run_tick))
                .run_if(not(in_state(AppState::Loading))),
        );
    }
}

/// Latch keyboard state. Holding a direction is level-triggered; jump,
/// restart and quit are edge-triggered and stay latched until consumed.
#[span_fn]
fn sample_input(keyboard: Res<ButtonInput<KeyCode>>, mut pending: ResMut<PendingInput>) {
    let left = keyboard.any_pressed([KeyCode::ArrowLeft, KeyCode::KeyA]);
    let right = keyboard.any_pressed([KeyCode::ArrowRight, KeyCode::KeyD]);
    pending.0.horizontal = match (left, right) {
        (true, false) => HorizontalIntent::Left,
        (false, true) => HorizontalIntent::Right,
        _ => HorizontalIntent::Idle,
    };

    if keyboard.any_just_pressed([KeyCode::Space, KeyCode::ArrowUp, KeyCode::KeyW]) {
        pending.0.jump = true;
    }
    if keyboard.just_pressed(KeyCode::KeyR) {
        pending.0.restart = true;
    }
    if keyboard.just_pressed(KeyCode::Escape) {
        pending.0.quit = true;
    }
}

/// Quit is honoured between ticks, never inside one.
fn request_quit(pending: Res<PendingInput>, mut exit: MessageWriter<AppExit>) {
    if pending.0.quit {
        info!("quit requested");
        exit.write(AppExit::Success);
    }
}

#[span_fn]
fn run_tick(
    mut commands: Commands,
    mut session: ResMut<ActiveSession>,
    mut pending: ResMut<PendingInput>,
) {
    let input = pending.take_tick_input();
    for event in session.tick(&input) {
        trigger_sim_event(&mut commands, event);
    }
}

fn sync_app_state(
    session: Res<ActiveSession>,
    state: Res<State<AppState>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let target = AppState::from(session.status());
    if *state.get() != target {
        next_state.set(target);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
