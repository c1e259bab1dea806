use serde::{Deserialize, Serialize};

/// Upper bound for health and mood.
pub const MAX_STAT: f64 = 100.0;

/// Health or mood below this makes the cat sad.
pub const SAD_THRESHOLD: f64 = 30.0;

/// Health and mood above this make the cat happy.
pub const HAPPY_THRESHOLD: f64 = 80.0;

/// The cat's vital stats.
///
/// `health` and `mood` live in `0.0..=100.0`; `adoption_days` only grows.
/// The mutating helpers keep both ranges intact, so code that only goes
/// through them never has to clamp by hand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CatStats {
    /// Physical condition, `0.0..=100.0`.
    pub health: f64,
    /// Happiness, `0.0..=100.0`.
    pub mood: f64,
    /// Simulated days since adoption, fractional.
    pub adoption_days: f64,
}

impl CatStats {
    /// Create stats, clamping health and mood into range and adoption time to >= 0.
    pub fn new(health: f64, mood: f64, adoption_days: f64) -> Self {
        Self {
            health: clamp_stat(health),
            mood: clamp_stat(mood),
            adoption_days: adoption_days.max(0.0),
        }
    }

    /// A freshly adopted cat at full health and mood.
    pub fn full() -> Self {
        Self::new(MAX_STAT, MAX_STAT, 0.0)
    }

    /// Lower health by `amount`, flooring at 0.
    pub fn decay_health(&mut self, amount: f64) {
        self.health = (self.health - amount).max(0.0);
    }

    /// Lower mood by `amount`, flooring at 0.
    pub fn decay_mood(&mut self, amount: f64) {
        self.mood = (self.mood - amount).max(0.0);
    }

    /// Raise health by `amount`, capping at [`MAX_STAT`].
    pub fn raise_health(&mut self, amount: f64) {
        self.health = (self.health + amount).min(MAX_STAT);
    }

    /// Raise mood by `amount`, capping at [`MAX_STAT`].
    pub fn raise_mood(&mut self, amount: f64) {
        self.mood = (self.mood + amount).min(MAX_STAT);
    }

    /// Advance adoption time. Negative amounts are ignored.
    pub fn age(&mut self, days: f64) {
        self.adoption_days += days.max(0.0);
    }

    /// Whole days since adoption, as shown on the "Day N" label.
    pub fn adoption_day(&self) -> u64 {
        self.adoption_days.floor() as u64
    }

    /// How the cat is feeling overall.
    pub fn cat_mood(&self) -> CatMood {
        CatMood::classify(self.health, self.mood)
    }
}

impl Default for CatStats {
    fn default() -> Self {
        Self::full()
    }
}

/// Clamp a health or mood value into `0.0..=100.0`. NaN becomes 0.
pub fn clamp_stat(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, MAX_STAT)
    }
}

/// Overall disposition, used by front ends to pick a portrait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatMood {
    /// Mood and health both above 80.
    Happy,
    /// Anything in between.
    Neutral,
    /// Mood or health below 30.
    Sad,
}

impl CatMood {
    /// Classify a health/mood pair. Happy wins over sad only when both are high,
    /// so the checks cannot overlap.
    pub fn classify(health: f64, mood: f64) -> Self {
        if mood > HAPPY_THRESHOLD && health > HAPPY_THRESHOLD {
            Self::Happy
        } else if mood < SAD_THRESHOLD || health < SAD_THRESHOLD {
            Self::Sad
        } else {
            Self::Neutral
        }
    }
}

impl std::fmt::Display for CatMood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Happy => write!(f, "happy"),
            Self::Neutral => write!(f, "neutral"),
            Self::Sad => write!(f, "sad"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_stats() {
        let stats = CatStats::full();
        assert!((stats.health - 100.0).abs() < f64::EPSILON);
        assert!((stats.mood - 100.0).abs() < f64::EPSILON);
        assert_eq!(stats.adoption_days, 0.0);
    }

    #[test]
    fn new_clamps_out_of_range() {
        let stats = CatStats::new(150.0, -20.0, -1.0);
        assert!((stats.health - 100.0).abs() < f64::EPSILON);
        assert_eq!(stats.mood, 0.0);
        assert_eq!(stats.adoption_days, 0.0);
    }

    #[test]
    fn decay_floors_at_zero() {
        let mut stats = CatStats::new(0.05, 0.1, 0.0);
        stats.decay_health(0.1);
        stats.decay_mood(0.15);
        assert_eq!(stats.health, 0.0);
        assert_eq!(stats.mood, 0.0);
    }

    #[test]
    fn raise_caps_at_max() {
        let mut stats = CatStats::new(90.0, 95.0, 0.0);
        stats.raise_health(20.0);
        stats.raise_mood(40.0);
        assert!((stats.health - 100.0).abs() < f64::EPSILON);
        assert!((stats.mood - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn age_ignores_negative() {
        let mut stats = CatStats::full();
        stats.age(1.5);
        stats.age(-3.0);
        assert!((stats.adoption_days - 1.5).abs() < f64::EPSILON);
        assert_eq!(stats.adoption_day(), 1);
    }

    #[test]
    fn clamp_stat_nan_is_zero() {
        assert_eq!(clamp_stat(f64::NAN), 0.0);
        assert_eq!(clamp_stat(f64::INFINITY), 100.0);
    }

    #[test]
    fn mood_classification() {
        assert_eq!(CatMood::classify(100.0, 100.0), CatMood::Happy);
        assert_eq!(CatMood::classify(81.0, 80.0), CatMood::Neutral);
        assert_eq!(CatMood::classify(50.0, 50.0), CatMood::Neutral);
        assert_eq!(CatMood::classify(29.9, 100.0), CatMood::Sad);
        assert_eq!(CatMood::classify(100.0, 10.0), CatMood::Sad);
        assert_eq!(CatMood::classify(30.0, 30.0), CatMood::Neutral);
    }

    #[test]
    fn mood_display() {
        assert_eq!(CatMood::Happy.to_string(), "happy");
        assert_eq!(CatMood::Sad.to_string(), "sad");
    }

    #[test]
    fn round_trip_serde() {
        let stats = CatStats::new(42.5, 17.25, 3.0);
        let json = serde_json::to_string(&stats).unwrap();
        let back: CatStats = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stats);
    }
}
