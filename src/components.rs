use bevy::prelude::*;

/// A rectangle drawn for one simulated object. The slot is its position in
/// the draw list rebuilt from the session every frame.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneSprite(pub usize);

/// What a scene rectangle depicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Platform,
    Coin,
    Enemy,
    Player,
}
