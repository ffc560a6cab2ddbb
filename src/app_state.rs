use bevy::prelude::*;

use crate::sim::SessionStatus;

/// Top-level app state. Outside `Loading` it mirrors the session status so
/// presentation systems can hook `OnEnter`/`OnExit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, States)]
pub enum AppState {
    #[default]
    Loading,
    Playing,
    GameOver,
    Won,
}

impl From<SessionStatus> for AppState {
    fn from(status: SessionStatus) -> Self {
        match status {
            SessionStatus::Playing => AppState::Playing,
            SessionStatus::GameOver => AppState::GameOver,
            SessionStatus::Won => AppState::Won,
        }
    }
}
