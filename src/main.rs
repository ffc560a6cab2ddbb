use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::window::WindowResolution;
use micromegas_telemetry_sink::TelemetryGuardBuilder;
use micromegas_telemetry_sink::tracing_interop::TracingCaptureLayer;
use micromegas_tracing::levels::LevelFilter;
use micromegas_tracing::prelude::info;
use platformer::config::PhysicsConfig;
use tracing_subscriber::Registry;
use tracing_subscriber::layer::SubscriberExt;

fn main() {
    // 1. Initialize telemetry (creates LocalEventSink for stdout).
    let _telemetry_guard = TelemetryGuardBuilder::default()
        .with_install_tracing_capture(false)
        .build()
        .expect("failed to initialize telemetry");

    info!("Platformer starting");

    // 2. Route Bevy's `tracing` logs into Micromegas. Must be set before
    //    Bevy starts; Bevy's own LogPlugin is disabled below.
    let log_layer = TracingCaptureLayer {
        max_level: LevelFilter::Info,
    };
    let subscriber = Registry::default().with(log_layer);
    tracing::subscriber::set_global_default(subscriber).expect("failed to set tracing subscriber");

    let config = PhysicsConfig::load();
    let resolution = WindowResolution::new(config.world_width as u32, config.world_height as u32);

    // 3. Run Bevy app
    App::new()
        .add_plugins(
            DefaultPlugins
                .build()
                .disable::<LogPlugin>()
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Platformer Adventure".to_string(),
                        resolution,
                        ..default()
                    }),
                    ..default()
                }),
        )
        .add_plugins(platformer::PlatformerPlugin { config })
        .run();
}
