//! Turning spin results into coin and stat deltas.

use ks_core::{Category, GameState, SymbolTable};
use serde::Serialize;

use crate::config::RewardConfig;
use crate::spin::SpinResult;

/// Coins and stat points earned by one spin.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct RewardDelta {
    /// Coins credited.
    pub coins: u64,
    /// Health restored (before clamping).
    pub health: f64,
    /// Mood restored (before clamping).
    pub mood: f64,
}

impl RewardDelta {
    /// True when the spin earned nothing.
    pub fn is_empty(&self) -> bool {
        self.coins == 0 && self.health == 0.0 && self.mood == 0.0
    }

    /// Scale every component. Coins are floored to whole coins.
    pub fn scaled(self, factor: f64) -> Self {
        Self {
            coins: (self.coins as f64 * factor).floor() as u64,
            health: self.health * factor,
            mood: self.mood * factor,
        }
    }

    /// Add one result's contribution according to its category.
    fn credit(&mut self, category: Category, value: u32) {
        match category {
            Category::Coin => self.coins += u64::from(value),
            Category::Health => self.health += f64::from(value),
            Category::Mood => self.mood += f64::from(value),
            Category::Special => {
                self.health += f64::from(value);
                self.mood += f64::from(value);
                self.coins += u64::from(value / 2);
            }
        }
    }
}

/// Sum the rewards of a set of reel results.
///
/// Each result is credited independently, so the order of results does not
/// matter and every special symbol pays its own half-value in coins. Results
/// whose symbol is not in `table` earn nothing.
pub fn aggregate<'a, I>(results: I, table: &SymbolTable) -> RewardDelta
where
    I: IntoIterator<Item = &'a SpinResult>,
{
    let mut delta = RewardDelta::default();
    for result in results {
        if let Some(def) = table.get(result.symbol) {
            delta.credit(def.category, result.value);
        }
    }
    delta
}

/// Aggregate and apply the configured multipliers. `pay_row_matched` enables
/// the match bonus when one is configured.
pub fn resolve_reward(
    results: &[SpinResult],
    table: &SymbolTable,
    config: &RewardConfig,
    pay_row_matched: bool,
) -> RewardDelta {
    let mut factor = config.base_multiplier;
    if pay_row_matched {
        if let Some(bonus) = config.match_multiplier {
            factor *= bonus;
        }
    }
    let delta = aggregate(results, table);
    if factor == 1.0 { delta } else { delta.scaled(factor) }
}

/// Credit a reward: coins are added, health and mood are raised and capped at 100.
pub fn apply_reward(state: &GameState, delta: &RewardDelta) -> GameState {
    let mut next = state.clone();
    next.coins = next.coins.saturating_add(delta.coins);
    next.cat_stats.raise_health(delta.health);
    next.cat_stats.raise_mood(delta.mood);
    next
}
