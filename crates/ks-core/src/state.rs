use serde::{Deserialize, Serialize};

use crate::stats::CatStats;

/// Coins a new game starts with.
pub const STARTING_COINS: u64 = 100;

/// Snapshot of the whole game, as rendered by front ends.
///
/// There is exactly one live instance, owned by the engine. Everyone else
/// reads a reference or a clone and asks the engine for transitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Coin balance.
    pub coins: u64,
    /// The cat.
    pub cat_stats: CatStats,
    /// A spin is in flight; new spin requests are ignored.
    pub is_spinning: bool,
    /// Spins are being requested automatically.
    pub auto_spin: bool,
}

impl GameState {
    /// The state a session starts in: 100 coins and a happy, new cat.
    pub fn new() -> Self {
        Self {
            coins: STARTING_COINS,
            cat_stats: CatStats::full(),
            is_spinning: false,
            auto_spin: false,
        }
    }

    /// Replace the coin balance.
    pub fn with_coins(mut self, coins: u64) -> Self {
        self.coins = coins;
        self
    }

    /// Replace the cat stats.
    pub fn with_stats(mut self, cat_stats: CatStats) -> Self {
        self.cat_stats = cat_stats;
        self
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "coins {} | health {:.1} | mood {:.1} | day {} ({}) | {} | auto {}",
            self.coins,
            self.cat_stats.health,
            self.cat_stats.mood,
            self.cat_stats.adoption_day(),
            self.cat_stats.cat_mood(),
            if self.is_spinning { "spinning" } else { "idle" },
            if self.auto_spin { "on" } else { "off" },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn initial_state() {
        let state = GameState::new();
        assert_eq!(state.coins, 100);
        assert_eq!(state.cat_stats, CatStats::full());
        assert!(!state.is_spinning);
        assert!(!state.auto_spin);
        assert_eq!(state, GameState::default());
    }

    #[test]
    fn builders() {
        let state = GameState::new()
            .with_coins(10)
            .with_stats(CatStats::new(50.0, 50.0, 0.0));
        assert_eq!(state.coins, 10);
        assert!((state.cat_stats.health - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn display_initial() {
        insta::assert_snapshot!(
            GameState::new().to_string(),
            @"coins 100 | health 100.0 | mood 100.0 | day 0 (happy) | idle | auto off"
        );
    }

    #[test]
    fn display_sad_spinning() {
        let mut state = GameState::new()
            .with_coins(7)
            .with_stats(CatStats::new(12.34, 55.0, 2.9));
        state.is_spinning = true;
        state.auto_spin = true;
        insta::assert_snapshot!(
            state.to_string(),
            @"coins 7 | health 12.3 | mood 55.0 | day 2 (sad) | spinning | auto on"
        );
    }

    #[test]
    fn serde_round_trip() {
        let state = GameState::new().with_coins(250);
        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }

    proptest! {
        #[test]
        fn stat_helpers_stay_in_range(
            health in 0.0f64..=100.0,
            mood in 0.0f64..=100.0,
            deltas in proptest::collection::vec(-200.0f64..200.0, 0..32),
        ) {
            let mut stats = CatStats::new(health, mood, 0.0);
            for d in deltas {
                if d >= 0.0 {
                    stats.raise_health(d);
                    stats.decay_mood(d);
                } else {
                    stats.decay_health(-d);
                    stats.raise_mood(-d);
                }
                prop_assert!((0.0..=100.0).contains(&stats.health));
                prop_assert!((0.0..=100.0).contains(&stats.mood));
            }
        }
    }
}
