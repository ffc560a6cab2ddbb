//! Deterministic simulation core: entities, collision resolution, levels and
//! the session state machine. Nothing in here touches the ECS; the driver
//! plugins own one `GameSession` and call `tick` at a fixed rate.

pub mod body;
pub mod collectible;
pub mod enemy;
pub mod event;
pub mod level;
pub mod platform;
pub mod player;
pub mod session;
pub mod tick;

pub use event::SimEvent;
pub use level::Level;
pub use player::{Facing, HorizontalIntent, Player};
pub use session::{GameSession, SessionStats, SessionStatus, TickInput};
pub use tick::Tick;
