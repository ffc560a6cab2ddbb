use bevy::prelude::*;
use bevy_asset_loader::prelude::*;
use bevy_kira_audio::AudioSource;

use crate::sim::{GameSession, TickInput};

/// The one running session. Systems read it for presentation; only the
/// fixed-rate tick mutates it.
#[derive(Resource, Debug, Deref, DerefMut)]
pub struct ActiveSession(pub GameSession);

/// Input latched between frames and ticks. Edge-triggered requests stay set
/// until a tick consumes them.
#[derive(Resource, Debug, Default)]
pub struct PendingInput(pub TickInput);

impl PendingInput {
    /// Input for the next tick. Clears the one-shot requests.
    pub fn take_tick_input(&mut self) -> TickInput {
        let input = self.0;
        self.0.jump = false;
        self.0.restart = false;
        input
    }
}

#[derive(AssetCollection, Resource)]
pub struct AudioAssets {
    #[asset(path = "audio/sfx/jump.ogg")]
    pub jump: Handle<AudioSource>,
    #[asset(path = "audio/sfx/coin.ogg")]
    pub coin: Handle<AudioSource>,
    #[asset(path = "audio/sfx/stomp.ogg")]
    pub stomp: Handle<AudioSource>,
    #[asset(path = "audio/sfx/damage.ogg")]
    pub damage: Handle<AudioSource>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::HorizontalIntent;

    #[test]
    fn one_shot_requests_are_consumed() {
        let mut pending = PendingInput(TickInput {
            horizontal: HorizontalIntent::Left,
            jump: true,
            restart: true,
            quit: false,
        });

        let first = pending.take_tick_input();
        assert!(first.jump && first.restart);

        let second = pending.take_tick_input();
        assert!(!second.jump && !second.restart);
        assert_eq!(second.horizontal, HorizontalIntent::Left);
    }
}
