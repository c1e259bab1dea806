use std::path::PathBuf;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use serde::Serialize;

use ks_core::{CatMood, GameState, ShopItem};
use ks_engine::{Game, GameEvent, GameEventKind};

/// Simulated time between scheduler steps.
const STEP_MS: u64 = 100;

/// Arguments of `kittyspin simulate`.
pub struct SimulateOptions {
    pub seconds: u64,
    pub seed: Option<u64>,
    pub auto_spin: bool,
    pub spins: u32,
    pub buy: Vec<String>,
    pub json: bool,
    pub verbose: bool,
    pub config: Option<PathBuf>,
}

#[derive(Serialize)]
struct Summary<'a> {
    seconds: u64,
    seed: u64,
    spins: u64,
    decay_ticks: u64,
    adoption_day: u64,
    cat_mood: CatMood,
    state: &'a GameState,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    events: Vec<&'a GameEvent>,
}

pub fn run(opts: &SimulateOptions) -> Result<(), String> {
    let config = super::load_config(opts.config.as_deref(), opts.seed)?;
    let items = opts
        .buy
        .iter()
        .map(|name| ShopItem::parse(name).map_err(|e| e.to_string()))
        .collect::<Result<Vec<_>, _>>()?;

    let seed = config.seed;
    let mut game = Game::new(config).map_err(|e| format!("cannot start game: {e}"))?;

    for item in items {
        game.request_purchase(item);
    }
    if opts.auto_spin {
        game.toggle_auto_spin();
    }

    let total_ms = opts.seconds.saturating_mul(1000);
    let mut manual_left = opts.spins;
    while game.now_ms() < total_ms {
        if manual_left > 0 && !game.state().is_spinning && game.begin_spin().is_some() {
            manual_left -= 1;
        }
        let step = STEP_MS.min(total_ms - game.now_ms());
        game.advance(step);
    }

    if opts.json {
        let summary = Summary {
            seconds: opts.seconds,
            seed,
            spins: game.spins_resolved(),
            decay_ticks: game.decay_ticks(),
            adoption_day: game.state().cat_stats.adoption_day(),
            cat_mood: game.state().cat_stats.cat_mood(),
            state: game.state(),
            events: if opts.verbose {
                game.events().events().iter().collect()
            } else {
                Vec::new()
            },
        };
        let json = serde_json::to_string_pretty(&summary)
            .map_err(|e| format!("JSON serialization failed: {e}"))?;
        println!("{json}");
        return Ok(());
    }

    print_report(&game, opts, seed);
    Ok(())
}

fn print_report(game: &Game, opts: &SimulateOptions, seed: u64) {
    let state = game.state();

    // Header
    println!(
        "  {} {}",
        "Simulation".bold(),
        format!("({}s, seed={seed})", opts.seconds).dimmed()
    );
    println!(
        "  {} spins resolved, {} decay ticks, {} events logged",
        game.spins_resolved(),
        game.decay_ticks(),
        game.events().len()
    );
    println!();

    // Events
    if opts.verbose {
        println!("  {}", "Event Log".bold().underline());
        println!();
        for event in game.events().events() {
            let at = format!("[{:>7.1}s]", event.at_ms as f64 / 1000.0).dimmed();
            println!("  {at} {}", colorize_event(&event.kind, &event.description));
        }
        if game.events().is_empty() {
            println!("  {}", "(no events)".dimmed());
        }
        println!();
    } else {
        let notable = game.events().notable();
        if !notable.is_empty() {
            println!("  {}", "Notable Events".bold().underline());
            for event in notable {
                println!("  {}  {}", event_label(&event.kind), event.description);
            }
            println!();
        }
    }

    // Cat status
    println!("  {}", "Cat Status".bold().underline());
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Coins", "Health", "Mood", "Day", "Feeling", "Auto-spin"]);
    table.add_row(vec![
        state.coins.to_string(),
        format_stat(state.cat_stats.health),
        format_stat(state.cat_stats.mood),
        state.cat_stats.adoption_day().to_string(),
        state.cat_stats.cat_mood().to_string(),
        if state.auto_spin { "on" } else { "off" }.to_string(),
    ]);
    println!("{table}");
    println!();

    // Last reels
    if let Some(outcome) = game.last_outcome() {
        let glyphs: Vec<&str> = outcome
            .results
            .iter()
            .filter_map(|r| game.table().get(r.symbol))
            .map(|def| def.glyph.as_str())
            .collect();
        let line = glyphs.join(" ");
        if outcome.pay_row_matched() {
            println!("  Last spin: {} {}", line, "JACKPOT".yellow().bold());
        } else {
            println!("  Last spin: {line}");
        }
        println!();
    }
}

fn colorize_event(kind: &GameEventKind, description: &str) -> colored::ColoredString {
    match kind {
        GameEventKind::StatDepleted { .. } => description.red().bold(),
        GameEventKind::StatLow { .. } => description.yellow(),
        GameEventKind::SpinResolved { jackpot: true, .. } => description.magenta().bold(),
        GameEventKind::SpinResolved { .. } => description.green(),
        GameEventKind::Purchased { .. } => description.cyan(),
        GameEventKind::PurchaseRejected { .. } | GameEventKind::SpinIgnored => {
            description.dimmed()
        }
        GameEventKind::SpinStarted { .. } | GameEventKind::AutoSpinToggled { .. } => {
            description.normal()
        }
    }
}

fn event_label(kind: &GameEventKind) -> colored::ColoredString {
    match kind {
        GameEventKind::StatDepleted { .. } => "EMPTY".red().bold(),
        GameEventKind::StatLow { .. } => " WARN".yellow().bold(),
        GameEventKind::SpinResolved { .. } => "  WIN".magenta().bold(),
        GameEventKind::Purchased { .. } => "  BUY".cyan().bold(),
        GameEventKind::PurchaseRejected { .. } => " DENY".dimmed(),
        _ => " INFO".normal(),
    }
}

fn format_stat(value: f64) -> String {
    let bar = super::stat_bar(value);
    let bar = match super::stat_band(value) {
        CatMood::Sad => bar.red(),
        CatMood::Neutral => bar.yellow(),
        CatMood::Happy => bar.green(),
    };
    format!("[{bar}] {value:>5.1}")
}
