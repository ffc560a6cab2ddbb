//! Headless app tests: the driver plugins together, without a window or an
//! audio device.

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use platformer::app_state::AppState;
use platformer::config::PhysicsConfig;
use platformer::plugins::GameSet;
use platformer::plugins::banner::{BannerPlugin, BannerRoot};
use platformer::plugins::hud::HudPlugin;
use platformer::plugins::render::RenderPlugin;
use platformer::plugins::simulation::SimulationPlugin;
use platformer::resources::{ActiveSession, PendingInput};
use platformer::sim::SessionStatus;

fn setup_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins(StatesPlugin);
    app.init_state::<AppState>();
    app.init_resource::<ButtonInput<KeyCode>>();
    app.configure_sets(Update, GameSet::Presentation.after(GameSet::Input));
    app.add_plugins(SimulationPlugin {
        config: PhysicsConfig::default(),
    });
    app.add_plugins(RenderPlugin);
    app.add_plugins(HudPlugin);
    app.add_plugins(BannerPlugin);
    app.finish();
    app.cleanup();
    app
}

fn wait_for_state(app: &mut App, target: AppState, max_updates: usize) {
    for i in 0..max_updates {
        app.update();
        if *app.world().resource::<State<AppState>>().get() == target {
            return;
        }
        assert!(
            i < max_updates - 1,
            "State never reached {:?} after {max_updates} updates",
            target,
        );
    }
}

fn tick(app: &mut App, n: usize) {
    for _ in 0..n {
        app.world_mut().run_schedule(FixedUpdate);
    }
}

fn banner_count(app: &mut App) -> usize {
    app.world_mut()
        .query::<&BannerRoot>()
        .iter(app.world())
        .count()
}

#[test]
fn game_over_shows_banner_and_restart_clears_it() {
    let mut app = setup_app();
    app.world_mut()
        .resource_mut::<NextState<AppState>>()
        .set(AppState::Playing);
    wait_for_state(&mut app, AppState::Playing, 10);

    app.world_mut()
        .resource_mut::<ActiveSession>()
        .player_mut()
        .health = 0;
    tick(&mut app, 1);
    wait_for_state(&mut app, AppState::GameOver, 10);
    assert_eq!(banner_count(&mut app), 1);

    app.world_mut().resource_mut::<PendingInput>().0.restart = true;
    tick(&mut app, 1);
    wait_for_state(&mut app, AppState::Playing, 10);
    assert_eq!(banner_count(&mut app), 0);
    assert_eq!(
        app.world().resource::<ActiveSession>().status(),
        SessionStatus::Playing
    );
}

#[test]
fn clearing_all_coins_reaches_victory() {
    let mut app = setup_app();
    app.world_mut()
        .resource_mut::<NextState<AppState>>()
        .set(AppState::Playing);
    wait_for_state(&mut app, AppState::Playing, 10);

    // First level: empty it and let one tick advance.
    app.world_mut()
        .resource_mut::<ActiveSession>()
        .level_mut()
        .collectibles
        .clear();
    tick(&mut app, 1);
    assert_eq!(app.world().resource::<ActiveSession>().level().index, 1);

    // Last level: same again wins.
    app.world_mut()
        .resource_mut::<ActiveSession>()
        .level_mut()
        .collectibles
        .clear();
    tick(&mut app, 1);
    wait_for_state(&mut app, AppState::Won, 10);
    assert_eq!(banner_count(&mut app), 1);
}
