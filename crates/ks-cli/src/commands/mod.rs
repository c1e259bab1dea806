pub mod odds;
pub mod play;
pub mod shop;
pub mod simulate;

use std::path::Path;

use ks_core::CatMood;
use ks_core::stats::{HAPPY_THRESHOLD, SAD_THRESHOLD};
use ks_engine::GameConfig;

/// Load a game config from an optional JSON file, then apply the seed override.
fn load_config(path: Option<&Path>, seed: Option<u64>) -> Result<GameConfig, String> {
    let mut config = match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
            GameConfig::from_json(&json).map_err(|e| format!("{}: {e}", path.display()))?
        }
        None => GameConfig::default(),
    };
    if let Some(seed) = seed {
        config.seed = seed;
    }
    Ok(config)
}

/// Render a 0-100 stat as a ten-cell bar.
fn stat_bar(value: f64) -> String {
    let filled = (value / 10.0).round().clamp(0.0, 10.0) as usize;
    format!("{}{}", "#".repeat(filled), "-".repeat(10 - filled))
}

/// Colour band for a single stat, using the same cut-offs as the cat's mood.
pub fn stat_band(value: f64) -> CatMood {
    if value < SAD_THRESHOLD {
        CatMood::Sad
    } else if value <= HAPPY_THRESHOLD {
        CatMood::Neutral
    } else {
        CatMood::Happy
    }
}
