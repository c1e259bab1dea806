//! Drawing the game screen.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Gauge, Paragraph, Wrap};

use ks_core::{CatMood, ShopItem};
use ks_engine::GameEventKind;

use super::app::App;
use crate::commands::stat_band;

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &App) {
    let rows = app.game.config().spin.visible_rows as u16;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),        // Title
            Constraint::Length(6),        // Cat
            Constraint::Length(rows + 3), // Reels
            Constraint::Length(3),        // Shop
            Constraint::Min(3),           // Event log
            Constraint::Length(1),        // Status bar
        ])
        .split(frame.area());

    draw_title(frame, app, chunks[0]);
    draw_cat(frame, app, chunks[1]);
    draw_reels(frame, app, chunks[2]);
    draw_shop(frame, app, chunks[3]);
    draw_log(frame, app, chunks[4]);

    let status = Paragraph::new(" space spin | a auto-spin | 1-3 buy | ? help | q quit")
        .style(Style::default().fg(Color::Black).bg(Color::White));
    frame.render_widget(status, chunks[5]);

    if app.show_help {
        draw_help_popup(frame);
    }
}

fn draw_title(frame: &mut Frame, app: &App, area: Rect) {
    let state = app.game.state();
    let auto = if state.auto_spin {
        Span::styled(" AUTO ", Style::default().fg(Color::Black).bg(Color::Green).bold())
    } else {
        Span::raw("")
    };
    let line = Line::from(vec![
        Span::styled(" Luna Kitty Spin ", Style::default().fg(Color::Magenta).bold()),
        Span::styled(
            format!(" 🌛 {} coins ", state.coins),
            Style::default().fg(Color::Yellow).bold(),
        ),
        auto,
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn portrait(mood: CatMood) -> (&'static str, Color) {
    match mood {
        CatMood::Happy => (" /\\_/\\ \n( ^.^ )\n > ♥ < ", Color::Green),
        CatMood::Neutral => (" /\\_/\\ \n( o.o )\n > ^ < ", Color::Yellow),
        CatMood::Sad => (" /\\_/\\ \n( ;.; )\n > ~ < ", Color::Red),
    }
}

fn draw_cat(frame: &mut Frame, app: &App, area: Rect) {
    let stats = app.game.state().cat_stats;
    let block = Block::default()
        .title(format!(" Luna | Day {} ", stats.adoption_day()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(10), Constraint::Min(10)])
        .split(inner);

    let (art, color) = portrait(stats.cat_mood());
    frame.render_widget(
        Paragraph::new(art).style(Style::default().fg(color)),
        cols[0],
    );

    let bars = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(cols[1]);
    frame.render_widget(stat_gauge("Health", stats.health), bars[0]);
    frame.render_widget(stat_gauge("Mood  ", stats.mood), bars[2]);
}

fn stat_gauge(label: &str, value: f64) -> Gauge<'static> {
    let color = match stat_band(value) {
        CatMood::Sad => Color::Red,
        CatMood::Neutral => Color::Yellow,
        CatMood::Happy => Color::Green,
    };
    Gauge::default()
        .gauge_style(Style::default().fg(color).bg(Color::DarkGray))
        .ratio((value / 100.0).clamp(0.0, 1.0))
        .label(format!("{label} {value:>5.1}"))
}

fn draw_reels(frame: &mut Frame, app: &App, area: Rect) {
    let spinning = app.game.pending_outcome();
    let shown = spinning.or_else(|| app.game.last_outcome());

    let title = if spinning.is_some() {
        " Reels (spinning...) "
    } else {
        " Reels "
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let table = app.game.table();
    let reels = app.game.config().spin.reels;
    let rows = app.game.config().spin.visible_rows;
    let mut lines: Vec<Line<'static>> = Vec::with_capacity(rows + 1);

    for row in 0..rows {
        let matched = spinning.is_none()
            && shown.is_some_and(|o| o.matched_rows.contains(&row));
        let style = if spinning.is_some() {
            Style::default().fg(Color::DarkGray)
        } else if matched {
            Style::default().fg(Color::Black).bg(Color::Yellow).bold()
        } else if row == 0 {
            Style::default().bold()
        } else {
            Style::default().fg(Color::Gray)
        };

        let mut spans = vec![Span::raw(if row == 0 { " ▶ " } else { "   " })];
        for reel in 0..reels {
            let glyph = shown
                .and_then(|o| o.strips.get(reel))
                .and_then(|strip| strip.get(row))
                .and_then(|id| table.get(*id))
                .map(|def| def.glyph.clone())
                .unwrap_or_else(|| "❔".to_string());
            spans.push(Span::styled(format!(" {glyph} "), style));
        }
        lines.push(Line::from(spans));
    }

    if let Some(outcome) = app.game.last_outcome().filter(|_| spinning.is_none()) {
        let r = outcome.reward;
        lines.push(Line::from(Span::styled(
            format!(
                " +{} coins  +{:.0} health  +{:.0} mood",
                r.coins, r.health, r.mood
            ),
            Style::default().fg(Color::Green),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_shop(frame: &mut Frame, app: &App, area: Rect) {
    let coins = app.game.state().coins;
    let block = Block::default()
        .title(" Shop ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let spans: Vec<Span<'static>> = ShopItem::ALL
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let def = item.definition();
            let style = if item.affordable(coins) {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Span::styled(
                format!(" [{}] {} {} {}c ", i + 1, def.glyph, def.name, def.cost),
                style,
            )
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}

fn draw_log(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().title(" Events ").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let events = app.game.events().events();
    let visible = inner.height as usize;
    let start = events.len().saturating_sub(visible);
    let lines: Vec<Line<'static>> = events[start..]
        .iter()
        .map(|e| {
            let color = match e.kind {
                GameEventKind::StatDepleted { .. } => Color::Red,
                GameEventKind::StatLow { .. } => Color::Yellow,
                GameEventKind::SpinResolved { jackpot: true, .. } => Color::Magenta,
                GameEventKind::SpinResolved { .. } => Color::Green,
                GameEventKind::Purchased { .. } => Color::Cyan,
                _ => Color::Gray,
            };
            Line::from(vec![
                Span::styled(
                    format!("{:>7.1}s ", e.at_ms as f64 / 1000.0),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(e.description.clone(), Style::default().fg(color)),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_help_popup(frame: &mut Frame) {
    let area = centered(frame.area(), 44, 11);
    let text = vec![
        Line::from(Span::styled("Keys", Style::default().bold())),
        Line::from(""),
        Line::from("  space   spin the reels"),
        Line::from("  a       toggle auto-spin"),
        Line::from("  1 2 3   buy growth, health, mood pack"),
        Line::from("  ?       toggle this help"),
        Line::from("  q       quit"),
        Line::from(""),
        Line::from("Health and mood drop every second."),
    ];
    let popup = Paragraph::new(text)
        .block(Block::default().title(" Help ").borders(Borders::ALL))
        .wrap(Wrap { trim: false });
    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
