//! End-of-game banner: shown on game over and on victory, removed on
//! restart.

use bevy::prelude::*;

use crate::app_state::AppState;
use crate::resources::ActiveSession;
use crate::sim::GameSession;

pub struct BannerPlugin;

impl Plugin for BannerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::GameOver), spawn_game_over_banner);
        app.add_systems(OnEnter(AppState::Won), spawn_victory_banner);
        app.add_systems(OnExit(AppState::GameOver), despawn_banner);
        app.add_systems(OnExit(AppState::Won), despawn_banner);
    }
}

// ---------------------------------------------------------------------------
// Components
// ---------------------------------------------------------------------------

#[derive(Component)]
pub struct BannerRoot;

// ---------------------------------------------------------------------------
// Systems
// ---------------------------------------------------------------------------

const GAME_OVER_COLOR: Color = Color::srgb(1.0, 0.0, 0.0);
const VICTORY_COLOR: Color = Color::srgb(0.0, 1.0, 0.0);

fn spawn_game_over_banner(commands: Commands, session: Res<ActiveSession>) {
    spawn_banner(
        commands,
        "Game Over! Press R to restart",
        GAME_OVER_COLOR,
        &session,
    );
}

fn spawn_victory_banner(commands: Commands, session: Res<ActiveSession>) {
    spawn_banner(
        commands,
        "You Win! Press R to play again",
        VICTORY_COLOR,
        &session,
    );
}

/// Summary lines shown under the headline.
pub fn summary_lines(session: &GameSession) -> Vec<String> {
    let stats = session.stats();
    vec![
        format!("Level Reached: {}", session.level().index + 1),
        format!("Coins: {}", session.player().coins_collected),
        format!("Enemies Stomped: {}", stats.stomps),
        format!("Hits Taken: {}", stats.damage_taken),
    ]
}

fn spawn_banner(mut commands: Commands, headline: &str, color: Color, session: &GameSession) {
    let lines = summary_lines(session);

    commands
        .spawn((
            BannerRoot,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(12.0),
                position_type: PositionType::Absolute,
                ..default()
            },
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(headline),
                TextColor(color),
                TextFont {
                    font_size: 36.0,
                    ..default()
                },
            ));

            for line in &lines {
                parent.spawn((
                    Text::new(line.clone()),
                    TextColor(Color::WHITE),
                    TextFont {
                        font_size: 20.0,
                        ..default()
                    },
                ));
            }
        });
}

fn despawn_banner(mut commands: Commands, query: Query<Entity, With<BannerRoot>>) {
    for entity in &query {
        commands.entity(entity).despawn();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PhysicsConfig;
    use bevy::state::app::StatesPlugin;

    fn setup_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(StatesPlugin);
        app.init_state::<AppState>();
        app.insert_resource(ActiveSession(GameSession::new(PhysicsConfig::default())));
        app.add_plugins(BannerPlugin);
        app
    }

    fn transition_to(app: &mut App, state: AppState) {
        app.world_mut()
            .resource_mut::<NextState<AppState>>()
            .set(state);
        for _ in 0..5 {
            app.update();
        }
    }

    fn banner_count(app: &mut App) -> usize {
        app.world_mut()
            .query::<&BannerRoot>()
            .iter(app.world())
            .count()
    }

    #[test]
    fn banner_spawns_on_game_over() {
        let mut app = setup_app();
        transition_to(&mut app, AppState::GameOver);
        assert_eq!(banner_count(&mut app), 1);
    }

    #[test]
    fn banner_spawns_on_victory() {
        let mut app = setup_app();
        transition_to(&mut app, AppState::Won);
        assert_eq!(banner_count(&mut app), 1);
    }

    #[test]
    fn banner_despawns_on_restart() {
        let mut app = setup_app();
        transition_to(&mut app, AppState::GameOver);
        transition_to(&mut app, AppState::Playing);
        assert_eq!(banner_count(&mut app), 0);
    }

    #[test]
    fn summary_reports_one_based_level() {
        let session = GameSession::new(PhysicsConfig::default());
        let lines = summary_lines(&session);
        assert_eq!(lines[0], "Level Reached: 1");
        assert_eq!(lines[1], "Coins: 0");
    }
}
