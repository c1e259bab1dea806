use std::path::Path;

use ks_engine::Game;

/// Keep the in-memory log bounded during an open-ended session.
const PLAY_MAX_EVENTS: usize = 200;

pub fn run(config: Option<&Path>, seed: Option<u64>) -> Result<(), String> {
    let mut config = super::load_config(config, seed)?;
    if config.max_events == 0 {
        config.max_events = PLAY_MAX_EVENTS;
    }
    let game = Game::new(config).map_err(|e| format!("cannot start game: {e}"))?;
    crate::tui::run(game)
}
