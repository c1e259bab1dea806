use ks_core::ShopItem;
use serde::Serialize;

use crate::game::SpinTicket;
use crate::reward::RewardDelta;

/// A cat stat tracked for threshold events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stat {
    /// Cat health.
    Health,
    /// Cat mood.
    Mood,
}

impl std::fmt::Display for Stat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Stat::Health => "health",
            Stat::Mood => "mood",
        })
    }
}

/// What kind of game event occurred.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameEventKind {
    // Spins
    /// A spin was accepted and is waiting to resolve.
    SpinStarted {
        /// Ticket of the pending spin.
        ticket: SpinTicket,
        /// The spin was requested by the auto-spin timer.
        auto: bool,
    },
    /// A spin request arrived while another spin was in flight.
    SpinIgnored,
    /// A pending spin resolved and its reward was credited.
    SpinResolved {
        /// Ticket of the resolved spin.
        ticket: SpinTicket,
        /// Reward credited.
        reward: RewardDelta,
        /// Every reel landed the same symbol on the pay row.
        jackpot: bool,
    },
    /// Auto-spin was switched on or off.
    AutoSpinToggled {
        /// New setting.
        enabled: bool,
    },

    // Shop
    /// An item was bought.
    Purchased {
        /// The item.
        item: ShopItem,
        /// Coins paid.
        cost: u64,
    },
    /// A purchase was refused for lack of coins.
    PurchaseRejected {
        /// The item.
        item: ShopItem,
        /// Its price.
        cost: u64,
        /// Coins available.
        coins: u64,
    },

    // Stats
    /// A stat fell below the sad threshold.
    StatLow {
        /// The stat.
        stat: Stat,
    },
    /// A stat reached zero.
    StatDepleted {
        /// The stat.
        stat: Stat,
    },
}

impl GameEventKind {
    /// Events worth surfacing in a summary: everything except routine spins.
    pub fn is_notable(&self) -> bool {
        match self {
            Self::SpinStarted { .. } | Self::SpinIgnored => false,
            Self::SpinResolved { jackpot, .. } => *jackpot,
            _ => true,
        }
    }

    /// Check whether this event concerns the given stat.
    pub fn involves_stat(&self, which: Stat) -> bool {
        match self {
            Self::StatLow { stat } | Self::StatDepleted { stat } => *stat == which,
            _ => false,
        }
    }
}

/// A record of something that happened during a game.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameEvent {
    /// Game time in milliseconds when this event occurred.
    pub at_ms: u64,
    /// The specific kind of event.
    #[serde(flatten)]
    pub kind: GameEventKind,
    /// A human-readable description.
    pub description: String,
}

impl GameEvent {
    /// Create a new event.
    pub fn new(at_ms: u64, kind: GameEventKind, description: impl Into<String>) -> Self {
        Self {
            at_ms,
            kind,
            description: description.into(),
        }
    }
}

/// Accumulates events during a game.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<GameEvent>,
    max_events: usize,
}

impl EventLog {
    /// Create a new event log with the given maximum capacity (0 = unlimited).
    pub fn new(max_events: usize) -> Self {
        Self {
            events: Vec::new(),
            max_events,
        }
    }

    /// Append an event, dropping the oldest events if the log exceeds its capacity.
    pub fn push(&mut self, event: GameEvent) {
        self.events.push(event);
        if self.max_events > 0 && self.events.len() > self.max_events {
            let drain_count = self.events.len() - self.max_events;
            self.events.drain(..drain_count);
        }
    }

    /// Return a slice of all recorded events.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Return all events recorded at the given game time.
    pub fn events_at(&self, at_ms: u64) -> Vec<&GameEvent> {
        self.events.iter().filter(|e| e.at_ms == at_ms).collect()
    }

    /// Return all events concerning the given stat.
    pub fn events_for_stat(&self, stat: Stat) -> Vec<&GameEvent> {
        self.events
            .iter()
            .filter(|e| e.kind.involves_stat(stat))
            .collect()
    }

    /// Return the notable events, oldest first.
    pub fn notable(&self) -> Vec<&GameEvent> {
        self.events.iter().filter(|e| e.kind.is_notable()).collect()
    }

    /// Return the number of recorded events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Return `true` if no events have been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
