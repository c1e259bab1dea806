//! Buying care items with coins.

use ks_core::{GameState, ShopItem};
use serde::Serialize;

/// Result of a purchase request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PurchaseOutcome {
    /// Coins were debited and the item applied.
    Purchased {
        /// What was bought.
        item: ShopItem,
        /// Coins paid.
        cost: u64,
    },
    /// The cat's owner could not pay; nothing changed.
    InsufficientCoins {
        /// What was requested.
        item: ShopItem,
        /// Its price.
        cost: u64,
        /// Coins available at the time.
        coins: u64,
    },
}

impl PurchaseOutcome {
    /// True when the purchase went through.
    pub fn is_purchased(&self) -> bool {
        matches!(self, PurchaseOutcome::Purchased { .. })
    }

    /// The item involved.
    pub fn item(&self) -> ShopItem {
        match *self {
            PurchaseOutcome::Purchased { item, .. }
            | PurchaseOutcome::InsufficientCoins { item, .. } => item,
        }
    }
}

/// Try to buy `item`.
///
/// Returns the next state and the outcome. When the price exceeds the coin
/// balance the returned state equals `state` exactly.
pub fn purchase(state: &GameState, item: ShopItem) -> (GameState, PurchaseOutcome) {
    let def = item.definition();
    if !item.affordable(state.coins) {
        let outcome = PurchaseOutcome::InsufficientCoins {
            item,
            cost: def.cost,
            coins: state.coins,
        };
        return (state.clone(), outcome);
    }

    let mut next = state.clone();
    next.coins -= def.cost;
    next.cat_stats.raise_health(def.health);
    next.cat_stats.raise_mood(def.mood);
    (
        next,
        PurchaseOutcome::Purchased {
            item,
            cost: def.cost,
        },
    )
}
