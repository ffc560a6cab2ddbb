pub mod app_state;
pub mod components;
pub mod config;
pub mod events;
pub mod plugins;
pub mod resources;
pub mod sim;

use bevy::prelude::*;
use bevy_asset_loader::prelude::*;
use bevy_kira_audio::AudioPlugin;

use app_state::AppState;
use config::PhysicsConfig;
use plugins::GameSet;
use plugins::audio::GameAudioPlugin;
use plugins::banner::BannerPlugin;
use plugins::camera::CameraPlugin;
use plugins::hud::HudPlugin;
use plugins::render::RenderPlugin;
use plugins::simulation::SimulationPlugin;
use plugins::telemetry::TelemetryPlugin;
use resources::AudioAssets;

pub struct PlatformerPlugin {
    pub config: PhysicsConfig,
}

impl Plugin for PlatformerPlugin {
    fn build(&self, app: &mut App) {
        // State machine (StatesPlugin comes from DefaultPlugins)
        app.init_state::<AppState>();
        app.configure_sets(Update, GameSet::Presentation.after(GameSet::Input));

        // Audio
        app.add_plugins(AudioPlugin);

        // Game plugins
        app.add_plugins(SimulationPlugin {
            config: self.config.clone(),
        });
        app.add_plugins(CameraPlugin);
        app.add_plugins(RenderPlugin);
        app.add_plugins(HudPlugin);
        app.add_plugins(BannerPlugin);
        app.add_plugins(GameAudioPlugin);
        app.add_plugins(TelemetryPlugin);

        // Sound effects are optional: a failed load still starts the game,
        // just silently.
        app.add_loading_state(
            LoadingState::new(AppState::Loading)
                .continue_to_state(AppState::Playing)
                .on_failure_continue_to_state(AppState::Playing)
                .load_collection::<AudioAssets>(),
        );
    }
}
