//! Core types for Kitty Spin: the cat, the coins, and the catalogs.
//!
//! This crate defines the data model the engine operates on. It holds no
//! randomness and no clock: [`GameState`] is a plain snapshot that can be
//! rendered, compared, or serialized, and the catalogs ([`SymbolTable`],
//! [`ShopItem`]) are immutable once built.

/// Error types used throughout the crate.
pub mod error;
/// Shop items and their costs and benefits.
pub mod item;
/// The game state snapshot shared by all collaborators.
pub mod state;
/// Cat health, mood, and adoption time.
pub mod stats;
/// Slot symbols, categories, and the weighted symbol table.
pub mod symbol;

/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export shop item types.
pub use item::{ItemDefinition, ShopItem};
/// Re-export the game state snapshot.
pub use state::GameState;
/// Re-export cat stat types.
pub use stats::{CatMood, CatStats, MAX_STAT};
/// Re-export symbol catalog types.
pub use symbol::{Category, SymbolDefinition, SymbolId, SymbolTable};
