use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use ks_core::ShopItem;
use ks_engine::Game;

/// TUI state: the game plus the bits of wall-clock bookkeeping it needs.
pub struct App {
    pub game: Game,
    pub should_quit: bool,
    pub show_help: bool,
    /// Sub-millisecond remainder carried between frames.
    carry: Duration,
}

impl App {
    pub fn new(game: Game) -> Self {
        Self {
            game,
            should_quit: false,
            show_help: false,
            carry: Duration::ZERO,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Ctrl+C always quits
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(' ') | KeyCode::Enter => {
                self.game.request_spin();
            }
            KeyCode::Char('a') => {
                self.game.toggle_auto_spin();
            }
            KeyCode::Char('?') => self.show_help = !self.show_help,
            KeyCode::Char(c) => {
                if let Some(item) = item_for_key(c) {
                    self.game.request_purchase(item);
                }
            }
            _ => {}
        }
    }

    /// Feed real elapsed time to the game in whole milliseconds.
    pub fn advance(&mut self, elapsed: Duration) {
        let total = self.carry + elapsed;
        let ms = total.as_millis() as u64;
        self.carry = total - Duration::from_millis(ms);
        if ms > 0 {
            self.game.advance(ms);
        }
    }
}

/// Keys `1`-`3` map to the shop items in shop order.
fn item_for_key(c: char) -> Option<ShopItem> {
    let idx = c.to_digit(10)? as usize;
    idx.checked_sub(1)
        .and_then(|i| ShopItem::ALL.get(i))
        .copied()
}
