//! HUD overlay: health, coins and level display.

use bevy::prelude::*;
use micromegas_tracing::prelude::span_fn;

use crate::app_state::AppState;
use crate::plugins::GameSet;
use crate::resources::ActiveSession;

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnExit(AppState::Loading), spawn_hud);
        app.add_systems(
            Update,
            update_hud
                .in_set(GameSet::Presentation)
                .run_if(not(in_state(AppState::Loading))),
        );
    }
}

// ---------------------------------------------------------------------------
// Components
// ---------------------------------------------------------------------------

#[derive(Component)]
pub struct HudRoot;

#[derive(Component)]
pub struct HealthText;

#[derive(Component)]
pub struct CoinsText;

#[derive(Component)]
pub struct LevelText;

// ---------------------------------------------------------------------------
// Systems
// ---------------------------------------------------------------------------

fn hud_text(text: &str) -> (Text, TextColor, TextFont) {
    (
        Text::new(text),
        TextColor(Color::WHITE),
        TextFont {
            font_size: 24.0,
            ..default()
        },
    )
}

#[span_fn]
fn spawn_hud(mut commands: Commands) {
    commands
        .spawn((
            HudRoot,
            Node {
                width: Val::Percent(100.0),
                height: Val::Auto,
                justify_content: JustifyContent::SpaceBetween,
                padding: UiRect::all(Val::Px(10.0)),
                position_type: PositionType::Absolute,
                top: Val::Px(0.0),
                left: Val::Px(0.0),
                ..default()
            },
        ))
        .with_children(|parent| {
            parent
                .spawn(Node {
                    flex_direction: FlexDirection::Column,
                    row_gap: Val::Px(8.0),
                    ..default()
                })
                .with_children(|column| {
                    column.spawn((HealthText, hud_text("Health: 3")));
                    column.spawn((CoinsText, hud_text("Coins: 0")));
                });
            parent.spawn((LevelText, hud_text("Level: 1")));
        });
}

#[allow(clippy::type_complexity)]
#[span_fn]
fn update_hud(
    session: Res<ActiveSession>,
    mut health_text: Query<&mut Text, (With<HealthText>, Without<CoinsText>, Without<LevelText>)>,
    mut coins_text: Query<&mut Text, (With<CoinsText>, Without<HealthText>, Without<LevelText>)>,
    mut level_text: Query<&mut Text, (With<LevelText>, Without<HealthText>, Without<CoinsText>)>,
) {
    let player = session.player();
    if let Ok(mut text) = health_text.single_mut() {
        **text = format!("Health: {}", player.health);
    }
    if let Ok(mut text) = coins_text.single_mut() {
        **text = format!("Coins: {}", player.coins_collected);
    }
    if let Ok(mut text) = level_text.single_mut() {
        **text = format!("Level: {}", session.level().index + 1);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
