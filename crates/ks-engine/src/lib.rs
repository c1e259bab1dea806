//! Game-state engine for Kitty Spin.
//!
//! Provides the decay loop, the weighted slot-symbol generator, reward and
//! purchase resolution, and the [`Game`] orchestrator that owns the single
//! live [`ks_core::GameState`]. Every transition is a plain function of the
//! previous state and its inputs; randomness enters only through a
//! [`RandomSource`], and time only through [`Game::advance`].

/// Configuration types for game sessions.
pub mod config;
/// Stat decay and the decay clock.
pub mod decay;
/// Error types for the engine crate.
pub mod error;
/// Game event types and the event log.
pub mod event;
/// The game orchestrator and its scheduler.
pub mod game;
/// Weighted symbol draws.
pub mod generator;
/// Uniform random sources.
pub mod random;
/// Reward aggregation and application.
pub mod reward;
/// Shop purchases.
pub mod shop;
/// Reel strips and spin resolution.
pub mod spin;

/// Re-exports of the configuration types.
pub use config::{DecayConfig, GameConfig, RewardConfig, SpinConfig};
/// Re-exports of [`decay::decay`] and [`decay::DecayClock`].
pub use decay::{DecayClock, decay};
/// Re-exports of [`error::EngineError`] and [`error::EngineResult`].
pub use error::{EngineError, EngineResult};
/// Re-exports of the event log types.
pub use event::{EventLog, GameEvent, GameEventKind, Stat};
/// Re-exports of [`game::Game`] and [`game::SpinTicket`].
pub use game::{Game, SpinTicket};
/// Re-export of [`generator::SymbolGenerator`].
pub use generator::SymbolGenerator;
/// Re-exports of [`random::RandomSource`] and [`random::ScriptedSource`].
pub use random::{RandomSource, ScriptedSource};
/// Re-exports of the reward functions and [`reward::RewardDelta`].
pub use reward::{RewardDelta, aggregate, apply_reward};
/// Re-exports of [`shop::purchase`] and [`shop::PurchaseOutcome`].
pub use shop::{PurchaseOutcome, purchase};
/// Re-exports of the spin types.
pub use spin::{SpinOutcome, SpinResult, spin};
