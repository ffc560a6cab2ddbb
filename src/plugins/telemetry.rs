//! Frame-level telemetry: frame time plus session gauges, reported through
//! Micromegas metrics.

use bevy::prelude::*;
use micromegas_tracing::prelude::{fmetric, imetric, span_scope};

use crate::resources::ActiveSession;

pub struct TelemetryPlugin;

impl Plugin for TelemetryPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Last, (frame_telemetry, session_telemetry));
    }
}

fn frame_telemetry(time: Res<Time>) {
    span_scope!("frame");
    let dt_ms = time.delta_secs_f64() * 1000.0;
    fmetric!("frame_time_ms", "ms", dt_ms);
}

fn session_telemetry(session: Option<Res<ActiveSession>>) {
    let Some(session) = session else { return };
    if !session.is_changed() {
        return;
    }
    let player = session.player();
    imetric!("health", "count", player.health as u64);
    imetric!("coins", "count", player.coins_collected as u64);
    imetric!("level", "count", (session.level().index + 1) as u64);
    imetric!("ticks", "count", session.stats().ticks);
}
