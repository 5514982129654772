//! TUI rendering with ratatui
//!
//! Draws the tile grid, keyboard, alerts and status bar from an `App`
//! snapshot. Animation state is read here and nowhere else.

use super::app::{App, MessageStyle};
use crate::core::{Verdict, WORD_LENGTH};
use crate::game::Phase;
use crate::output::formatters::attempts_meter;
use crate::output::keyboard::KEYBOARD_ROWS;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};
use std::time::Instant;

const TILE_WIDTH: u16 = 5;
const TILE_HEIGHT: u16 = 3;
const TILE_GAP: u16 = 1;

/// What a single grid cell shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tile {
    Empty,
    Typed(u8),
    /// Edge-on during a flip
    Flipping,
    Scored(u8, Verdict),
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App, now: Instant) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Tile grid
            Constraint::Length(5), // Keyboard
            Constraint::Length(5), // Alerts
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_grid(f, app, chunks[1], now);
    render_keyboard(f, app, chunks[2]);
    render_alerts(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 P A L A B R A 🟨")
        .style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Green)),
        );
    f.render_widget(header, area);
}

fn verdict_style(verdict: Verdict) -> Style {
    match verdict {
        Verdict::Correct => Style::default().fg(Color::Black).bg(Color::Green),
        Verdict::WrongLocation => Style::default().fg(Color::Black).bg(Color::Yellow),
        Verdict::Wrong => Style::default().fg(Color::White).bg(Color::DarkGray),
    }
}

/// Contents of the cell at (`row`, `col`)
fn tile_at(app: &App, row: usize, col: usize, now: Instant) -> Tile {
    let Some(state) = app.session.state() else {
        return Tile::Empty;
    };
    let guesses = state.guesses();

    if let Some(result) = guesses.get(row) {
        let letter = result.guess().letter_at(col);
        let verdict = result.verdicts()[col];
        return match app.animation {
            Some(anim) if anim.blocks_input() && anim.row() == row => {
                if col < anim.revealed_tiles(now) {
                    Tile::Scored(letter, verdict)
                } else if anim.is_flipping(col, now) {
                    Tile::Flipping
                } else {
                    Tile::Typed(letter)
                }
            }
            _ => Tile::Scored(letter, verdict),
        };
    }

    if row == guesses.len() && app.session.phase() == Phase::InProgress {
        return state
            .buffer()
            .get(col)
            .map_or(Tile::Empty, |&letter| Tile::Typed(letter));
    }

    Tile::Empty
}

fn render_tile(f: &mut Frame, area: Rect, tile: Tile, lifted: bool) {
    let border_type = if lifted {
        BorderType::Double
    } else {
        BorderType::Rounded
    };

    let (text, style, borders) = match tile {
        Tile::Empty => (
            String::new(),
            Style::default().fg(Color::DarkGray),
            Borders::ALL,
        ),
        Tile::Typed(letter) => (
            (letter as char).to_ascii_uppercase().to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            Borders::ALL,
        ),
        Tile::Flipping => (
            String::new(),
            Style::default().fg(Color::Gray),
            Borders::TOP | Borders::BOTTOM,
        ),
        Tile::Scored(letter, verdict) => (
            (letter as char).to_ascii_uppercase().to_string(),
            verdict_style(verdict).add_modifier(Modifier::BOLD),
            Borders::ALL,
        ),
    };

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(style)
        .block(
            Block::default()
                .borders(borders)
                .border_type(border_type)
                .style(style),
        );
    f.render_widget(paragraph, area);
}

fn render_grid(f: &mut Frame, app: &App, area: Rect, now: Instant) {
    let cols = WORD_LENGTH as u16;
    let rows = u16::from(app.session.max_attempts());
    let grid_width = cols * TILE_WIDTH + (cols - 1) * TILE_GAP;
    let grid_height = rows * TILE_HEIGHT;

    let left = area.x + area.width.saturating_sub(grid_width) / 2;
    let top = area.y + area.height.saturating_sub(grid_height) / 2;

    for row in 0..rows {
        let row_index = row as usize;
        let (offset, dance) = match app.animation {
            Some(anim) if anim.row() == row_index => (anim.shake_offset(now), Some(anim)),
            _ => (0, None),
        };
        let row_left = left.saturating_add_signed(offset);

        for col in 0..cols {
            let col_index = col as usize;
            let lifted = dance.is_some_and(|anim| anim.is_lifted(col_index, now));
            let y = top + row * TILE_HEIGHT;
            let y = if lifted { y.saturating_sub(1).max(area.y) } else { y };

            let rect = Rect::new(row_left + col * (TILE_WIDTH + TILE_GAP), y, TILE_WIDTH, TILE_HEIGHT)
                .intersection(area);
            if rect.area() == 0 {
                continue;
            }
            render_tile(f, rect, tile_at(app, row_index, col_index, now), lifted);
        }
    }
}

fn key_style(status: Option<Verdict>) -> Style {
    status.map_or(
        Style::default().fg(Color::White).bg(Color::Rgb(70, 70, 80)),
        verdict_style,
    )
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let last = KEYBOARD_ROWS.len() - 1;
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mut spans = Vec::new();
            if i == last {
                spans.push(Span::styled(" ENTER ", key_style(None)));
                spans.push(Span::raw(" "));
            }
            for letter in row.bytes() {
                spans.push(Span::styled(
                    format!(" {} ", (letter as char).to_ascii_uppercase()),
                    key_style(app.keyboard.status(letter)).add_modifier(Modifier::BOLD),
                ));
                spans.push(Span::raw(" "));
            }
            if i == last {
                spans.push(Span::styled(" ⌫ ", key_style(None)));
            }
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP).title(" Keyboard "));
    f.render_widget(keyboard, area);
}

fn render_alerts(f: &mut Frame, app: &App, area: Rect) {
    let alerts: Vec<ListItem> = app
        .alerts
        .iter()
        .rev()
        .map(|alert| {
            let style = match alert.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(Line::from(alert.text.clone()).alignment(Alignment::Center)).style(style)
        })
        .collect();

    f.render_widget(List::new(alerts), area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let phase = match app.session.phase() {
        Phase::AwaitingWord if app.fetch_failed => "No word (Enter: retry)".to_string(),
        Phase::AwaitingWord => format!("Fetching ({})...", app.provider_name()),
        Phase::InProgress => format!("Round {}", app.session.round()),
        Phase::Won => "Won!".to_string(),
        Phase::Lost => "Lost".to_string(),
    };
    f.render_widget(Paragraph::new(phase).alignment(Alignment::Center), chunks[0]);

    let meter = attempts_meter(app.session.attempts_remaining(), app.session.max_attempts());
    f.render_widget(
        Paragraph::new(meter)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Cyan)),
        chunks[1],
    );

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.games_played,
        app.stats.win_rate()
    );
    f.render_widget(Paragraph::new(stats_text).alignment(Alignment::Center), chunks[2]);

    let help = Paragraph::new("Ctrl-R: New Word | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
