//! The slot machine: reel strips, reward symbols, and matched rows.

use ks_core::{SymbolDefinition, SymbolId};
use serde::Serialize;

use crate::config::{RewardConfig, SpinConfig};
use crate::generator::SymbolGenerator;
use crate::random::RandomSource;
use crate::reward::{RewardDelta, resolve_reward};

/// The reward symbol landed by one reel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpinResult {
    /// Symbol on the pay row.
    pub symbol: SymbolId,
    /// Its catalog value.
    pub value: u32,
}

impl SpinResult {
    /// Create a result.
    pub fn new(symbol: SymbolId, value: u32) -> Self {
        Self { symbol, value }
    }

    /// Build a result from a catalog entry.
    pub fn from_definition(def: &SymbolDefinition) -> Self {
        Self::new(def.id, def.value)
    }
}

/// Everything one spin produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpinOutcome {
    /// One reward result per reel.
    pub results: Vec<SpinResult>,
    /// Visible symbols per reel, top row first. `strips[reel][0]` is the
    /// reward symbol of that reel.
    pub strips: Vec<Vec<SymbolId>>,
    /// Rows where every reel shows the same symbol.
    pub matched_rows: Vec<usize>,
    /// Reward to credit when the spin resolves.
    pub reward: RewardDelta,
}

impl SpinOutcome {
    /// True when the pay row is a matched row.
    pub fn pay_row_matched(&self) -> bool {
        self.matched_rows.first() == Some(&0)
    }
}

/// Spin every reel and work out the reward.
///
/// Reels are drawn one after another, each strip top to bottom. The top
/// symbol of each strip is the reel's reward draw; the other rows only take
/// part in match detection.
pub fn spin<R: RandomSource + ?Sized>(
    generator: &SymbolGenerator,
    config: &SpinConfig,
    rewards: &RewardConfig,
    rng: &mut R,
) -> SpinOutcome {
    let rows = config.visible_rows.max(1);
    let mut results = Vec::with_capacity(config.reels);
    let mut strips = Vec::with_capacity(config.reels);

    for _ in 0..config.reels {
        let strip: Vec<&SymbolDefinition> =
            (0..rows).map(|_| generator.draw_definition(rng)).collect();
        results.push(SpinResult::from_definition(strip[0]));
        strips.push(strip.iter().map(|def| def.id).collect::<Vec<_>>());
    }

    let matched = matched_rows(&strips);
    let pay_row_matched = matched.first() == Some(&0);
    let reward = resolve_reward(&results, generator.table(), rewards, pay_row_matched);

    SpinOutcome {
        results,
        strips,
        matched_rows: matched,
        reward,
    }
}

/// Indices of rows where all strips agree. Rows missing from any strip never match.
pub fn matched_rows(strips: &[Vec<SymbolId>]) -> Vec<usize> {
    let Some(first) = strips.first() else {
        return Vec::new();
    };
    (0..first.len())
        .filter(|&row| strips.iter().all(|strip| strip.get(row) == Some(&first[row])))
        .collect()
}
