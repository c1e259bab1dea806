//! Periodic stat decay and adoption time.

use ks_core::GameState;

use crate::config::DecayConfig;

/// One decay step: lower health and mood (never below zero) and age the cat.
///
/// Coins and the spin flags pass through untouched, so a decay step composes
/// with any spin or purchase applied in the same scheduling window.
pub fn decay(state: &GameState, config: &DecayConfig) -> GameState {
    let mut next = state.clone();
    next.cat_stats.decay_health(config.health_per_tick);
    next.cat_stats.decay_mood(config.mood_per_tick);
    next.cat_stats.age(config.days_per_tick);
    next
}

/// Counts decay ticks and applies [`decay`] with a fixed configuration.
#[derive(Debug, Clone)]
pub struct DecayClock {
    ticks: u64,
    config: DecayConfig,
}

impl DecayClock {
    /// Create a clock at tick 0.
    pub fn new(config: DecayConfig) -> Self {
        Self { ticks: 0, config }
    }

    /// Advance by one tick and return the decayed state.
    pub fn tick(&mut self, state: &GameState) -> GameState {
        self.ticks += 1;
        decay(state, &self.config)
    }

    /// Number of ticks applied so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// The decay rates in use.
    pub fn config(&self) -> &DecayConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use ks_core::CatStats;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn single_tick_reference_rates() {
        let state = GameState::new();
        let next = decay(&state, &DecayConfig::default());
        assert!((next.cat_stats.health - 99.9).abs() < 1e-9);
        assert!((next.cat_stats.mood - 99.85).abs() < 1e-9);
        assert!((next.cat_stats.adoption_days - 1.0 / 1440.0).abs() < 1e-12);
        assert_eq!(next.coins, state.coins);
    }

    #[test]
    fn decay_floors_at_zero() {
        let state = GameState::new().with_stats(CatStats::new(0.05, 0.0, 0.0));
        let next = decay(&state, &DecayConfig::default());
        assert_eq!(next.cat_stats.health, 0.0);
        assert_eq!(next.cat_stats.mood, 0.0);
        assert!(next.cat_stats.adoption_days > 0.0);
    }

    #[test]
    fn decay_leaves_flags_alone() {
        let mut state = GameState::new();
        state.is_spinning = true;
        state.auto_spin = true;
        let next = decay(&state, &DecayConfig::default());
        assert!(next.is_spinning);
        assert!(next.auto_spin);
    }

    #[test]
    fn clock_counts_ticks() {
        let mut clock = DecayClock::new(DecayConfig::default());
        let mut state = GameState::new();
        for _ in 0..1440 {
            state = clock.tick(&state);
        }
        assert_eq!(clock.ticks(), 1440);
        assert!((state.cat_stats.adoption_days - 1.0).abs() < 1e-9);
        // 1440 * 0.1 = 144 > 100, so health bottoms out
        assert_eq!(state.cat_stats.health, 0.0);
        assert_eq!(state.cat_stats.mood, 0.0);
    }

    #[test]
    fn hundred_ticks_mid_values() {
        let mut clock = DecayClock::new(DecayConfig::default());
        let mut state = GameState::new();
        for _ in 0..100 {
            state = clock.tick(&state);
        }
        assert!((state.cat_stats.health - 90.0).abs() < 1e-6);
        assert!((state.cat_stats.mood - 85.0).abs() < 1e-6);
    }

    proptest! {
        #[test]
        fn tick_keeps_bounds_and_ages(
            health in 0.0f64..=100.0,
            mood in 0.0f64..=100.0,
            days in 0.0f64..1000.0,
            health_rate in 0.0f64..50.0,
            mood_rate in 0.0f64..50.0,
        ) {
            let config = DecayConfig {
                health_per_tick: health_rate,
                mood_per_tick: mood_rate,
                ..DecayConfig::default()
            };
            let state = GameState::new().with_stats(CatStats::new(health, mood, days));
            let next = decay(&state, &config);
            prop_assert!((0.0..=100.0).contains(&next.cat_stats.health));
            prop_assert!((0.0..=100.0).contains(&next.cat_stats.mood));
            prop_assert!(next.cat_stats.health <= state.cat_stats.health);
            prop_assert!(next.cat_stats.mood <= state.cat_stats.mood);
            prop_assert!(next.cat_stats.adoption_days > state.cat_stats.adoption_days);
        }
    }
}
