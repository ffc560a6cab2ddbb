//! Game events triggered by the simulation driver and observed by audio and
//! presentation.

use bevy::prelude::*;

use crate::sim::SimEvent;

#[derive(Event)]
pub struct Jumped;

#[derive(Event)]
pub struct CoinCollected;

#[derive(Event)]
pub struct EnemyStomped;

#[derive(Event)]
pub struct PlayerDamaged;

/// Fan a simulation event out to its observers.
pub fn trigger_sim_event(commands: &mut Commands, event: SimEvent) {
    match event {
        SimEvent::Jump => commands.trigger(Jumped),
        SimEvent::CoinCollected => commands.trigger(CoinCollected),
        SimEvent::Stomp => commands.trigger(EnemyStomped),
        SimEvent::Damage => commands.trigger(PlayerDamaged),
    }
}
