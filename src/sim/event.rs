//! Discrete events produced by a tick, consumed by the audio sink.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimEvent {
    Jump,
    CoinCollected,
    Stomp,
    Damage,
}
