//! Static game configuration.
//!
//! Every value is fixed when a [`crate::Game`] is built. Defaults reproduce
//! the reference tuning: one decay tick per second, three reels, a one-second
//! spin resolution, and auto-spin every 1.5 seconds.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Minutes in a day; one decay tick ages the cat by one minute.
const MINUTES_PER_DAY: f64 = 24.0 * 60.0;

/// How fast the cat's stats run down.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecayConfig {
    /// Health lost per tick.
    pub health_per_tick: f64,
    /// Mood lost per tick.
    pub mood_per_tick: f64,
    /// Simulated adoption days gained per tick.
    pub days_per_tick: f64,
}

impl Default for DecayConfig {
    fn default() -> Self {
        Self {
            health_per_tick: 0.1,
            mood_per_tick: 0.15,
            days_per_tick: 1.0 / MINUTES_PER_DAY,
        }
    }
}

/// Slot machine shape and timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpinConfig {
    /// Number of reels; one reward symbol per reel.
    pub reels: usize,
    /// Symbols shown per reel. Row 0 pays; the rest are only checked for matches.
    pub visible_rows: usize,
    /// Time between a spin starting and its rewards landing.
    pub resolution_delay_ms: u64,
    /// Time between automatic spins while auto-spin is on.
    pub auto_spin_interval_ms: u64,
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self {
            reels: 3,
            visible_rows: 4,
            resolution_delay_ms: 1000,
            auto_spin_interval_ms: 1500,
        }
    }
}

/// Reward scaling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardConfig {
    /// Applied to every spin reward.
    pub base_multiplier: f64,
    /// Applied on top when every reel shows the same symbol on the pay row.
    /// `None` disables the bonus.
    pub match_multiplier: Option<f64>,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            base_multiplier: 1.0,
            match_multiplier: None,
        }
    }
}

/// Configuration for a game session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// RNG seed for deterministic sessions.
    pub seed: u64,
    /// Real time between decay ticks.
    pub tick_interval_ms: u64,
    /// Decay rates.
    pub decay: DecayConfig,
    /// Slot machine settings.
    pub spin: SpinConfig,
    /// Reward scaling.
    pub rewards: RewardConfig,
    /// Maximum event log size (oldest events dropped when exceeded). 0 = unlimited.
    pub max_events: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tick_interval_ms: 1000,
            decay: DecayConfig::default(),
            spin: SpinConfig::default(),
            rewards: RewardConfig::default(),
            max_events: 0,
        }
    }
}

impl GameConfig {
    /// Parse a JSON document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> EngineResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the real time between decay ticks.
    pub fn with_tick_interval(mut self, ms: u64) -> Self {
        self.tick_interval_ms = ms;
        self
    }

    /// Replace the decay rates.
    pub fn with_decay(mut self, decay: DecayConfig) -> Self {
        self.decay = decay;
        self
    }

    /// Set the number of reels.
    pub fn with_reels(mut self, reels: usize) -> Self {
        self.spin.reels = reels;
        self
    }

    /// Set the number of visible rows per reel.
    pub fn with_visible_rows(mut self, rows: usize) -> Self {
        self.spin.visible_rows = rows;
        self
    }

    /// Set the spin resolution delay.
    pub fn with_resolution_delay(mut self, ms: u64) -> Self {
        self.spin.resolution_delay_ms = ms;
        self
    }

    /// Set the auto-spin interval.
    pub fn with_auto_spin_interval(mut self, ms: u64) -> Self {
        self.spin.auto_spin_interval_ms = ms;
        self
    }

    /// Replace the reward scaling.
    pub fn with_rewards(mut self, rewards: RewardConfig) -> Self {
        self.rewards = rewards;
        self
    }

    /// Set the maximum event log size (0 = unlimited).
    pub fn with_max_events(mut self, max: usize) -> Self {
        self.max_events = max;
        self
    }

    /// Reject values the scheduler or the stat invariants cannot work with.
    pub fn validate(&self) -> EngineResult<()> {
        if self.tick_interval_ms == 0 {
            return Err(invalid("tick_interval_ms must be > 0"));
        }
        if self.spin.auto_spin_interval_ms == 0 {
            return Err(invalid("spin.auto_spin_interval_ms must be > 0"));
        }
        if self.spin.reels == 0 {
            return Err(invalid("spin.reels must be > 0"));
        }
        if self.spin.visible_rows == 0 {
            return Err(invalid("spin.visible_rows must be > 0"));
        }
        let d = &self.decay;
        if !(d.health_per_tick.is_finite() && d.health_per_tick >= 0.0) {
            return Err(invalid("decay.health_per_tick must be a finite value >= 0"));
        }
        if !(d.mood_per_tick.is_finite() && d.mood_per_tick >= 0.0) {
            return Err(invalid("decay.mood_per_tick must be a finite value >= 0"));
        }
        if !(d.days_per_tick.is_finite() && d.days_per_tick > 0.0) {
            return Err(invalid("decay.days_per_tick must be a finite value > 0"));
        }
        if !positive(self.rewards.base_multiplier) {
            return Err(invalid("rewards.base_multiplier must be > 0"));
        }
        if self.rewards.match_multiplier.is_some_and(|m| !positive(m)) {
            return Err(invalid("rewards.match_multiplier must be > 0"));
        }
        Ok(())
    }
}

fn positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn invalid(msg: &str) -> EngineError {
    EngineError::InvalidConfig(msg.to_string())
}
