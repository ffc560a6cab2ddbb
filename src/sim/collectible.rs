use super::body::Body;

/// Side length of a coin.
pub const COIN_SIZE: f32 = 16.0;

/// A coin. Picked up once, then dropped from its level.
#[derive(Debug, Clone, PartialEq)]
pub struct Collectible {
    pub body: Body,
    collected: bool,
}

impl Collectible {
    /// Coin centred on `(cx, cy)`.
    pub fn coin(cx: f32, cy: f32) -> Self {
        Self {
            body: Body::centered(cx, cy, COIN_SIZE, COIN_SIZE),
            collected: false,
        }
    }

    pub fn is_collected(&self) -> bool {
        self.collected
    }

    /// Mark the coin as taken. Returns `false` if it already was.
    pub fn collect(&mut self) -> bool {
        !std::mem::replace(&mut self.collected, true)
    }
}
