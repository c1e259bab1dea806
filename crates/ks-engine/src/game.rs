use ks_core::stats::SAD_THRESHOLD;
use ks_core::{CatStats, GameState, ShopItem, SymbolDefinition, SymbolTable};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

use crate::config::GameConfig;
use crate::decay::DecayClock;
use crate::error::EngineResult;
use crate::event::{EventLog, GameEvent, GameEventKind, Stat};
use crate::generator::SymbolGenerator;
use crate::random::RandomSource;
use crate::reward::apply_reward;
use crate::shop::{PurchaseOutcome, purchase};
use crate::spin::{SpinOutcome, SpinResult, spin};

/// Identifies one accepted spin until it resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SpinTicket(u64);

impl SpinTicket {
    /// Wrap a raw ticket number.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// The raw ticket number.
    pub fn id(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SpinTicket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A spin waiting for its resolution time.
#[derive(Debug, Clone)]
struct PendingSpin {
    ticket: SpinTicket,
    outcome: SpinOutcome,
    resolves_at_ms: u64,
}

/// Timers driven by [`Game::advance`]. Declaration order is the tie order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Timer {
    Decay,
    Resolve,
    AutoSpin,
}

/// The game orchestrator.
///
/// Owns the one live [`GameState`] together with the catalog, the decay
/// clock, the random source, and the event log. Front ends submit intents
/// (`request_spin`, `toggle_auto_spin`, `request_purchase`) and report the
/// passage of time through [`Game::advance`]; everything else happens here.
pub struct Game<R = StdRng> {
    state: GameState,
    config: GameConfig,
    generator: SymbolGenerator,
    clock: DecayClock,
    rng: R,
    events: EventLog,
    now_ms: u64,
    next_decay_at: u64,
    pending: Option<PendingSpin>,
    next_auto_spin_at: Option<u64>,
    next_ticket: u64,
    spins_resolved: u64,
    last_outcome: Option<SpinOutcome>,
}

impl<R> std::fmt::Debug for Game<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("now_ms", &self.now_ms)
            .field("state", &self.state)
            .field("pending", &self.pending.as_ref().map(|p| p.ticket))
            .field("events", &self.events.len())
            .finish()
    }
}

impl Game {
    /// Create a game with the reference catalog and a `StdRng` seeded from `config.seed`.
    pub fn new(config: GameConfig) -> EngineResult<Self> {
        let rng = StdRng::seed_from_u64(config.seed);
        Self::with_rng(config, rng)
    }
}

impl<R: RandomSource> Game<R> {
    /// Create a game with the reference catalog and the given random source.
    pub fn with_rng(config: GameConfig, rng: R) -> EngineResult<Self> {
        Self::build(config, SymbolTable::standard(), rng)
    }

    /// Create a game with a custom symbol catalog.
    pub fn with_catalog(
        config: GameConfig,
        symbols: Vec<SymbolDefinition>,
        rng: R,
    ) -> EngineResult<Self> {
        let table = SymbolTable::new(symbols)?;
        Self::build(config, table, rng)
    }

    fn build(config: GameConfig, table: SymbolTable, rng: R) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self {
            state: GameState::new(),
            generator: SymbolGenerator::new(table),
            clock: DecayClock::new(config.decay.clone()),
            rng,
            events: EventLog::new(config.max_events),
            now_ms: 0,
            next_decay_at: config.tick_interval_ms,
            pending: None,
            next_auto_spin_at: None,
            next_ticket: 1,
            spins_resolved: 0,
            last_outcome: None,
            config,
        })
    }

    /// Start with a different coin balance.
    pub fn with_coins(mut self, coins: u64) -> Self {
        self.state.coins = coins;
        self
    }

    /// Start with different cat stats.
    pub fn with_stats(mut self, stats: CatStats) -> Self {
        self.state.cat_stats = stats;
        self
    }

    // -- intents --

    /// Ask for a spin. Returns the reel results, or `None` if a spin is
    /// already in flight. Rewards land when the spin resolves.
    pub fn request_spin(&mut self) -> Option<Vec<SpinResult>> {
        self.begin_spin()?;
        self.pending.as_ref().map(|p| p.outcome.results.clone())
    }

    /// First half of a spin: draw the reels and mark the machine busy.
    ///
    /// While a spin is pending every further request is ignored and leaves
    /// the pending spin untouched.
    pub fn begin_spin(&mut self) -> Option<SpinTicket> {
        self.start_spin(false)
    }

    /// Second half of a spin: credit the reward and free the machine in one
    /// step. Returns `false` if `ticket` is not the pending spin.
    pub fn complete_spin(&mut self, ticket: SpinTicket) -> bool {
        if self.pending_ticket() != Some(ticket) {
            return false;
        }
        let Some(pending) = self.pending.take() else {
            return false;
        };

        let mut next = apply_reward(&self.state, &pending.outcome.reward);
        next.is_spinning = false;
        self.state = next;
        self.spins_resolved += 1;
        if self.state.auto_spin {
            self.next_auto_spin_at = Some(self.now_ms + self.config.spin.auto_spin_interval_ms);
        }

        let reward = pending.outcome.reward;
        let jackpot = pending.outcome.pay_row_matched();
        let mut description = format!(
            "spin {ticket} paid {} coins, +{:.1} health, +{:.1} mood",
            reward.coins, reward.health, reward.mood
        );
        if jackpot {
            if let Some(first) = pending.outcome.results.first() {
                description.push_str(&format!(" (jackpot: {})", first.symbol));
            }
        }
        self.log(
            GameEventKind::SpinResolved {
                ticket,
                reward,
                jackpot,
            },
            description,
        );
        self.last_outcome = Some(pending.outcome);
        true
    }

    /// Flip auto-spin and return the new setting.
    ///
    /// Turning it off only stops future automatic spins; a spin already in
    /// flight still resolves.
    pub fn toggle_auto_spin(&mut self) -> bool {
        let enabled = !self.state.auto_spin;
        self.state.auto_spin = enabled;
        self.next_auto_spin_at = if enabled && !self.state.is_spinning {
            Some(self.now_ms + self.config.spin.auto_spin_interval_ms)
        } else {
            None
        };
        let word = if enabled { "on" } else { "off" };
        self.log(
            GameEventKind::AutoSpinToggled { enabled },
            format!("auto-spin {word}"),
        );
        enabled
    }

    /// Try to buy `item`. Purchases are immediate and allowed mid-spin.
    pub fn request_purchase(&mut self, item: ShopItem) -> PurchaseOutcome {
        let (next, outcome) = purchase(&self.state, item);
        self.state = next;
        let def = item.definition();
        match outcome {
            PurchaseOutcome::Purchased { item, cost } => self.log(
                GameEventKind::Purchased { item, cost },
                format!("bought {} for {cost} coins", def.name),
            ),
            PurchaseOutcome::InsufficientCoins { item, cost, coins } => self.log(
                GameEventKind::PurchaseRejected { item, cost, coins },
                format!("{} costs {cost} coins, only {coins} available", def.name),
            ),
        }
        outcome
    }

    // -- time --

    /// Apply one decay tick immediately, outside the scheduler.
    pub fn tick_decay(&mut self) {
        let before = self.state.cat_stats;
        self.state = self.clock.tick(&self.state);
        let after = self.state.cat_stats;
        self.check_threshold(Stat::Health, before.health, after.health);
        self.check_threshold(Stat::Mood, before.mood, after.mood);
    }

    /// Move game time forward by `elapsed_ms`, firing every timer that falls
    /// due on the way in chronological order. Timers due at the same instant
    /// fire as decay, then spin resolution, then auto-spin.
    pub fn advance(&mut self, elapsed_ms: u64) {
        let target = self.now_ms.saturating_add(elapsed_ms);
        while let Some((at, timer)) = self.next_due(target) {
            self.now_ms = at;
            match timer {
                Timer::Decay => {
                    self.tick_decay();
                    self.next_decay_at = at + self.config.tick_interval_ms;
                }
                Timer::Resolve => {
                    if let Some(ticket) = self.pending_ticket() {
                        self.complete_spin(ticket);
                    }
                }
                Timer::AutoSpin => {
                    self.next_auto_spin_at = None;
                    self.start_spin(true);
                }
            }
        }
        self.now_ms = target;
    }

    fn next_due(&self, target: u64) -> Option<(u64, Timer)> {
        [
            Some((self.next_decay_at, Timer::Decay)),
            self.pending.as_ref().map(|p| (p.resolves_at_ms, Timer::Resolve)),
            self.next_auto_spin_at.map(|at| (at, Timer::AutoSpin)),
        ]
        .into_iter()
        .flatten()
        .filter(|&(at, _)| at <= target)
        .min()
    }

    fn start_spin(&mut self, auto: bool) -> Option<SpinTicket> {
        if self.state.is_spinning {
            self.log(GameEventKind::SpinIgnored, "spin ignored: reels still turning");
            return None;
        }

        let ticket = SpinTicket(self.next_ticket);
        self.next_ticket += 1;
        let outcome = spin(
            &self.generator,
            &self.config.spin,
            &self.config.rewards,
            &mut self.rng,
        );
        let symbols: Vec<&str> = outcome.results.iter().map(|r| r.symbol.as_str()).collect();
        let description = format!("spin {ticket} started: {}", symbols.join(" "));

        self.state.is_spinning = true;
        self.next_auto_spin_at = None;
        self.pending = Some(PendingSpin {
            ticket,
            outcome,
            resolves_at_ms: self.now_ms + self.config.spin.resolution_delay_ms,
        });
        self.log(GameEventKind::SpinStarted { ticket, auto }, description);
        Some(ticket)
    }

    fn check_threshold(&mut self, stat: Stat, before: f64, after: f64) {
        if before >= SAD_THRESHOLD && after < SAD_THRESHOLD {
            self.log(
                GameEventKind::StatLow { stat },
                format!("{stat} dropped below {SAD_THRESHOLD}"),
            );
        }
        if before > 0.0 && after <= 0.0 {
            self.log(GameEventKind::StatDepleted { stat }, format!("{stat} reached 0"));
        }
    }

    fn log(&mut self, kind: GameEventKind, description: impl Into<String>) {
        self.events
            .push(GameEvent::new(self.now_ms, kind, description));
    }
}

impl<R> Game<R> {
    /// The live state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// An owned copy of the live state.
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    /// The configuration this game was built with.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The symbol catalog.
    pub fn table(&self) -> &SymbolTable {
        self.generator.table()
    }

    /// Recorded events.
    pub fn events(&self) -> &EventLog {
        &self.events
    }

    /// Game time in milliseconds.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Decay ticks applied so far.
    pub fn decay_ticks(&self) -> u64 {
        self.clock.ticks()
    }

    /// Spins resolved so far.
    pub fn spins_resolved(&self) -> u64 {
        self.spins_resolved
    }

    /// Ticket of the spin in flight, if any.
    pub fn pending_ticket(&self) -> Option<SpinTicket> {
        self.pending.as_ref().map(|p| p.ticket)
    }

    /// Outcome of the spin in flight, if any.
    pub fn pending_outcome(&self) -> Option<&SpinOutcome> {
        self.pending.as_ref().map(|p| &p.outcome)
    }

    /// When the spin in flight resolves.
    pub fn pending_resolves_at(&self) -> Option<u64> {
        self.pending.as_ref().map(|p| p.resolves_at_ms)
    }

    /// The most recently resolved spin.
    pub fn last_outcome(&self) -> Option<&SpinOutcome> {
        self.last_outcome.as_ref()
    }

    /// When the next automatic spin fires, if one is scheduled.
    pub fn next_auto_spin_at(&self) -> Option<u64> {
        self.next_auto_spin_at
    }
}

#[cfg(test)]
mod tests {
    use ks_core::{Category, CoreError, SymbolId};

    use super::*;
    use crate::error::EngineError;
    use crate::random::ScriptedSource;
    use proptest::prelude::*;

    /// A game whose every draw lands on coin.
    fn coin_game() -> Game<ScriptedSource> {
        Game::with_rng(GameConfig::default(), ScriptedSource::new([0.0])).unwrap()
    }

    fn kinds(game: &Game<ScriptedSource>) -> Vec<GameEventKind> {
        game.events().events().iter().map(|e| e.kind.clone()).collect()
    }

    #[test]
    fn new_game_starts_fresh() {
        let game = Game::new(GameConfig::default()).unwrap();
        assert_eq!(game.snapshot(), GameState::new());
        assert_eq!(game.now_ms(), 0);
        assert!(game.pending_ticket().is_none());
        assert!(game.events().is_empty());
    }

    #[test]
    fn invalid_config_rejected() {
        let result = Game::new(GameConfig::default().with_reels(0));
        assert!(matches!(result, Err(EngineError::InvalidConfig(_))));
    }

    #[test]
    fn empty_catalog_rejected() {
        let result = Game::with_catalog(GameConfig::default(), vec![], ScriptedSource::default());
        assert!(matches!(
            result,
            Err(EngineError::Catalog(CoreError::EmptyTable))
        ));
    }

    #[test]
    fn custom_catalog_is_used() {
        let symbols = vec![
            SymbolDefinition::new(SymbolId::Coin, "Coin", Category::Coin, "c", 1.0, 10),
            SymbolDefinition::new(SymbolId::Star, "Star", Category::Special, "*", 1.0, 4),
        ];
        let mut game =
            Game::with_catalog(GameConfig::default(), symbols, ScriptedSource::new([0.9])).unwrap();
        let results = game.request_spin().unwrap();
        assert!(results.iter().all(|r| r.symbol == SymbolId::Star));
        assert_eq!(game.table().len(), 2);
    }

    #[test]
    fn request_spin_marks_machine_busy() {
        let mut game = coin_game();
        let results = game.request_spin().unwrap();
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|r| r.symbol == SymbolId::Coin && r.value == 10));
        assert!(game.state().is_spinning);
        // rewards wait for resolution
        assert_eq!(game.state().coins, 100);
    }

    #[test]
    fn reentrant_spin_is_ignored() {
        let mut game = coin_game();
        let ticket = game.begin_spin().unwrap();
        let resolves_at = game.pending_resolves_at();
        let outcome = game.pending_outcome().cloned();

        game.advance(400);
        assert!(game.begin_spin().is_none());
        assert!(game.request_spin().is_none());

        assert_eq!(game.pending_ticket(), Some(ticket));
        assert_eq!(game.pending_resolves_at(), resolves_at);
        assert_eq!(game.pending_outcome().cloned(), outcome);
        let ignored = kinds(&game)
            .into_iter()
            .filter(|k| *k == GameEventKind::SpinIgnored)
            .count();
        assert_eq!(ignored, 2);
    }

    #[test]
    fn spin_resolves_after_delay() {
        let mut game = coin_game();
        game.request_spin();
        game.advance(999);
        assert!(game.state().is_spinning);
        assert_eq!(game.state().coins, 100);

        game.advance(1);
        assert!(!game.state().is_spinning);
        assert_eq!(game.state().coins, 130);
        assert_eq!(game.spins_resolved(), 1);
        assert!(game.pending_ticket().is_none());
        assert_eq!(game.last_outcome().map(|o| o.reward.coins), Some(30));
        // the decay tick at the same instant also ran
        assert!((game.state().cat_stats.health - 99.9).abs() < 1e-9);
    }

    #[test]
    fn complete_spin_directly() {
        let mut game = coin_game();
        let ticket = game.begin_spin().unwrap();
        assert!(!game.complete_spin(SpinTicket::new(ticket.id() + 1)));
        assert!(game.state().is_spinning);

        assert!(game.complete_spin(ticket));
        assert!(!game.state().is_spinning);
        assert_eq!(game.state().coins, 130);

        // a ticket only pays once
        assert!(!game.complete_spin(ticket));
        assert_eq!(game.state().coins, 130);
    }

    #[test]
    fn tickets_increase() {
        let mut game = coin_game();
        let first = game.begin_spin().unwrap();
        game.advance(1000);
        let second = game.begin_spin().unwrap();
        assert!(second > first);
        assert_eq!(second.to_string(), "#2");
    }

    #[test]
    fn auto_spin_cycle() {
        let mut game = coin_game();
        assert!(game.toggle_auto_spin());
        assert_eq!(game.next_auto_spin_at(), Some(1500));

        game.advance(1499);
        assert!(!game.state().is_spinning);
        game.advance(1);
        assert!(game.state().is_spinning);
        assert_eq!(game.next_auto_spin_at(), None);

        game.advance(1000);
        assert!(!game.state().is_spinning);
        assert_eq!(game.state().coins, 130);
        assert_eq!(game.next_auto_spin_at(), Some(4000));

        game.advance(1500);
        assert!(game.state().is_spinning);
        assert_eq!(game.spins_resolved(), 1);
    }

    #[test]
    fn auto_spin_waits_for_pending_spin() {
        let mut game = coin_game();
        game.begin_spin();
        game.toggle_auto_spin();
        assert_eq!(game.next_auto_spin_at(), None);

        game.advance(1000);
        assert_eq!(game.spins_resolved(), 1);
        assert_eq!(game.next_auto_spin_at(), Some(2500));
    }

    #[test]
    fn auto_spin_off_does_not_abort_spin() {
        let mut game = coin_game();
        game.toggle_auto_spin();
        game.advance(1500);
        assert!(game.state().is_spinning);

        assert!(!game.toggle_auto_spin());
        game.advance(1000);
        assert!(!game.state().is_spinning);
        assert_eq!(game.state().coins, 130);

        game.advance(10_000);
        assert_eq!(game.spins_resolved(), 1);
    }

    #[test]
    fn purchase_allowed_mid_spin() {
        let mut game = coin_game();
        game.begin_spin();
        let outcome = game.request_purchase(ShopItem::Growth);
        assert!(outcome.is_purchased());
        assert_eq!(game.state().coins, 50);
        assert!(game.state().is_spinning);

        game.advance(1000);
        assert_eq!(game.state().coins, 80);
    }

    #[test]
    fn rejected_purchase_changes_nothing() {
        let mut game = coin_game()
            .with_coins(10)
            .with_stats(CatStats::new(50.0, 50.0, 0.0));
        let before = game.snapshot();
        let outcome = game.request_purchase(ShopItem::Health);
        assert!(!outcome.is_purchased());
        assert_eq!(game.snapshot(), before);
        assert!(matches!(
            kinds(&game).last(),
            Some(GameEventKind::PurchaseRejected { cost: 30, coins: 10, .. })
        ));
    }

    #[test]
    fn stat_low_fires_once_on_crossing() {
        let mut game = coin_game().with_stats(CatStats::new(30.05, 100.0, 0.0));
        game.advance(1000);
        game.advance(1000);
        let lows = game.events().events_for_stat(Stat::Health);
        assert_eq!(lows.len(), 1);
        assert_eq!(lows[0].at_ms, 1000);
        assert_eq!(lows[0].kind, GameEventKind::StatLow { stat: Stat::Health });
    }

    #[test]
    fn stat_depleted_fires_at_zero() {
        let mut game = coin_game().with_stats(CatStats::new(100.0, 0.1, 0.0));
        game.advance(3000);
        let mood = game.events().events_for_stat(Stat::Mood);
        assert_eq!(mood.len(), 1);
        assert_eq!(mood[0].kind, GameEventKind::StatDepleted { stat: Stat::Mood });
        assert_eq!(game.state().cat_stats.mood, 0.0);
    }

    #[test]
    fn advance_counts_decay_ticks() {
        let mut game = coin_game();
        game.advance(2500);
        assert_eq!(game.decay_ticks(), 2);
        game.advance(500);
        assert_eq!(game.decay_ticks(), 3);
        assert_eq!(game.now_ms(), 3000);
        assert!((game.state().cat_stats.adoption_days - 3.0 / 1440.0).abs() < 1e-12);
    }

    #[test]
    fn same_instant_order_is_decay_resolve_auto() {
        let config = GameConfig::default()
            .with_resolution_delay(1000)
            .with_auto_spin_interval(1000);
        let mut game = Game::with_rng(config, ScriptedSource::new([0.0])).unwrap();
        game.toggle_auto_spin();
        game.advance(1000);
        // auto spin fired at 1000 and is now pending; resolves together with the 2000 tick
        assert_eq!(game.pending_resolves_at(), Some(2000));
        game.advance(1000);
        let at_2000: Vec<_> = game
            .events()
            .events_at(2000)
            .iter()
            .map(|e| e.kind.clone())
            .collect();
        assert!(matches!(at_2000.first(), Some(GameEventKind::SpinResolved { .. })));
        assert_eq!(game.decay_ticks(), 2);
        assert_eq!(game.next_auto_spin_at(), Some(3000));
    }

    #[test]
    fn decay_applies_before_reward_at_same_instant() {
        let symbols = vec![
            SymbolDefinition::new(SymbolId::Coin, "Coin", Category::Coin, "c", 1.0, 10),
            SymbolDefinition::new(SymbolId::Fish, "Fish", Category::Health, "f", 1.0, 10),
        ];
        let mut game =
            Game::with_catalog(GameConfig::default(), symbols, ScriptedSource::new([0.99]))
                .unwrap()
                .with_stats(CatStats::new(99.95, 100.0, 0.0));
        game.request_spin();
        // decay tick and resolution both land on 1000
        game.advance(1000);
        assert_eq!(game.decay_ticks(), 1);
        assert_eq!(game.spins_resolved(), 1);
        // 99.95 - 0.1 + 30 clamps to 100; the other order would leave 99.9
        assert_eq!(game.state().cat_stats.health, 100.0);
    }

    #[test]
    fn zero_delay_resolves_on_next_advance() {
        let config = GameConfig::default().with_resolution_delay(0);
        let mut game = Game::with_rng(config, ScriptedSource::new([0.0])).unwrap();
        game.request_spin();
        game.advance(0);
        assert!(!game.state().is_spinning);
        assert_eq!(game.state().coins, 130);
    }

    #[test]
    fn event_descriptions() {
        let mut game = coin_game();
        game.request_purchase(ShopItem::Mood);
        game.request_spin();
        game.request_spin();
        game.advance(1000);
        let text = game
            .events()
            .events()
            .iter()
            .map(|e| format!("{}ms {}", e.at_ms, e.description))
            .collect::<Vec<_>>()
            .join("\n");
        insta::assert_snapshot!(text, @r"
        0ms bought Mood Pack for 20 coins
        0ms spin #1 started: coin coin coin
        0ms spin ignored: reels still turning
        1000ms spin #1 paid 30 coins, +0.0 health, +0.0 mood (jackpot: coin)
        ");
    }

    #[test]
    fn seeded_games_are_deterministic() {
        let run = || {
            let mut game = Game::new(GameConfig::default().with_seed(123)).unwrap();
            game.toggle_auto_spin();
            game.advance(60_000);
            (
                game.snapshot(),
                game.events()
                    .events()
                    .iter()
                    .map(|e| e.description.clone())
                    .collect::<Vec<_>>(),
            )
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn event_log_respects_capacity() {
        let mut game =
            Game::with_rng(GameConfig::default().with_max_events(3), ScriptedSource::new([0.0]))
                .unwrap();
        for _ in 0..10 {
            game.toggle_auto_spin();
        }
        assert_eq!(game.events().len(), 3);
    }

    proptest! {
        #[test]
        fn spins_never_lose_coins(seed in any::<u64>(), spins in 1usize..20) {
            let mut game = Game::new(GameConfig::default().with_seed(seed)).unwrap();
            for _ in 0..spins {
                let before = game.snapshot();
                prop_assert!(game.begin_spin().is_some());
                let ticket = game.pending_ticket().unwrap();
                prop_assert!(game.complete_spin(ticket));
                let after = game.snapshot();
                prop_assert!(after.coins >= before.coins);
                prop_assert!(after.cat_stats.health <= 100.0);
                prop_assert!(after.cat_stats.mood <= 100.0);
                prop_assert!(!after.is_spinning);
            }
        }

        #[test]
        fn requests_while_spinning_change_nothing(
            seed in any::<u64>(),
            retries in 1usize..10,
            waits in proptest::collection::vec(0u64..999, 1..10),
        ) {
            let mut game = Game::new(GameConfig::default().with_seed(seed).with_tick_interval(100_000)).unwrap();
            let ticket = game.begin_spin().unwrap();
            let outcome = game.pending_outcome().cloned();
            let before = game.snapshot();
            let mut elapsed = 0;
            for wait in waits {
                let step = wait.min(999 - elapsed);
                game.advance(step);
                elapsed += step;
                for _ in 0..retries {
                    prop_assert!(game.request_spin().is_none());
                }
            }
            prop_assert_eq!(game.pending_ticket(), Some(ticket));
            prop_assert_eq!(game.pending_outcome().cloned(), outcome);
            prop_assert_eq!(game.snapshot(), before);
        }
    }
}
