//! TUI rendering with ratatui
//!
//! Tile pool, answer row and session progress.

use super::app::{App, InputMode, MessageStyle, slot_key_label};
use crate::core::{AnswerSlots, TilePool};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Progress gauge
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(65), // Puzzle
            Constraint::Percentage(35), // Messages
        ])
        .split(chunks[1]);

    render_puzzle(f, app, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);
    render_progress(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 SPELLING TILES - Practice Mode")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_puzzle(f: &mut Frame, app: &App, area: Rect) {
    let Some(round) = app.session.round() else {
        render_finished(f, app, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let answer = Paragraph::new(vec![
        Line::from(""),
        answer_line(round.slots(), round.pool(), round.is_solved()),
        Line::from(""),
        slot_numbers_line(round.slots().len()),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .title(" Answer ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(answer, chunks[0]);

    let tiles = Paragraph::new(vec![Line::from(""), tiles_line(round.pool(), app.selected)])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Tiles ")
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Green)),
        );
    f.render_widget(tiles, chunks[1]);
}

fn answer_line(slots: &AnswerSlots, pool: &TilePool, solved: bool) -> Line<'static> {
    let spans: Vec<Span> = slots
        .letters(pool)
        .into_iter()
        .enumerate()
        .map(|(i, letter)| {
            let style = if solved {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else if slots.is_locked(i) {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else if letter.is_some() {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let text = letter.map_or('_', |b| char::from(b).to_ascii_uppercase());
            Span::styled(format!(" {text} "), style)
        })
        .flat_map(|span| [span, Span::raw(" ")])
        .collect();
    Line::from(spans)
}

fn slot_numbers_line(len: usize) -> Line<'static> {
    let text = (0..len)
        .map(|slot| format!("{:^3}", slot_key_label(slot).unwrap_or(' ')))
        .collect::<Vec<_>>()
        .join(" ");
    Line::styled(text, Style::default().fg(Color::DarkGray))
}

fn tiles_line(pool: &TilePool, selected: usize) -> Line<'static> {
    let spans: Vec<Span> = pool
        .tiles()
        .iter()
        .map(|tile| {
            let mut style = if tile.used {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
            };
            if tile.id.index() == selected {
                style = style.add_modifier(Modifier::REVERSED);
            }
            let text = if tile.used {
                '·'
            } else {
                tile.letter_char().to_ascii_uppercase()
            };
            Span::styled(format!(" {text} "), style)
        })
        .flat_map(|span| [span, Span::raw(" ")])
        .collect();
    Line::from(spans)
}

fn render_finished(f: &mut Frame, app: &App, area: Rect) {
    let summary = app.session.summary();
    let content = vec![
        Line::from(""),
        Line::styled(
            "🏆 All done! 🌟",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(summary.map_or_else(String::new, |s| {
            format!("{} out of {} correct on the first try", s.score, s.total)
        })),
    ];
    let paragraph = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(" Finished ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_progress(f: &mut Frame, app: &App, area: Rect) {
    let progress = app.session.progress();
    let done = if progress.complete {
        progress.total
    } else {
        progress.current - 1
    };
    let percent = if progress.total == 0 {
        0
    } else {
        (done * 100 / progress.total) as u16
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Progress ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!(
            "Word {} of {} | Score {}",
            progress.current, progress.total, progress.score
        ));

    f.render_widget(gauge, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.input_mode() {
        InputMode::Building => {
            "a-z: place | ←/→ + Space: pick tile | 1-9/Backspace: remove | Enter: check | Tab: hear | Esc: quit"
        }
        InputMode::Solved => "Enter: next word | Tab: hear again | Esc: quit",
        InputMode::Finished => "Enter: play again | Esc: quit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, area);
}
