//! TUI rendering with ratatui

use super::app::{App, MessageStyle};
use crate::lexicon::Lexicon;
use crate::session::ROUND_SECONDS;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<L: Lexicon>(f: &mut Frame, app: &App<'_, L>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header: root word
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Used words
            Constraint::Percentage(50), // Score, timer, messages
        ])
        .split(chunks[1]);

    render_used_words(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header<L: Lexicon>(f: &mut Frame, app: &App<'_, L>, area: Rect) {
    let header = Paragraph::new(format!("🔤 {}", app.session.root_word().to_uppercase()))
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Word Scramble ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_used_words<L: Lexicon>(f: &mut Frame, app: &App<'_, L>, area: Rect) {
    let items: Vec<ListItem> = app
        .session
        .used_words()
        .iter()
        .map(|word| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("({}) ", word.chars().count()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(word.clone(), Style::default().fg(Color::White)),
            ]))
        })
        .collect();

    let count = app.session.used_words().len();
    let list = List::new(items).block(
        Block::default()
            .title(format!(" Your Words ({count}) "))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, area);
}

fn render_info_panel<L: Lexicon>(f: &mut Frame, app: &App<'_, L>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Score
            Constraint::Length(3), // Timer gauge
            Constraint::Length(4), // Stats
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_score(f, app, chunks[0]);
    render_timer(f, app, chunks[1]);
    render_stats(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
}

fn render_score<L: Lexicon>(f: &mut Frame, app: &App<'_, L>, area: Rect) {
    let score = Paragraph::new(format!("{}", app.session.score()))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Score ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(score, area);
}

fn render_timer<L: Lexicon>(f: &mut Frame, app: &App<'_, L>, area: Rect) {
    let remaining = app.session.remaining_seconds();
    let ratio = f64::from(remaining) / f64::from(ROUND_SECONDS);
    let color = if remaining <= 10 {
        Color::Red
    } else if remaining <= 30 {
        Color::Yellow
    } else {
        Color::Green
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Time ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .ratio(ratio)
        .label(format!("{remaining}s"));
    f.render_widget(gauge, area);
}

fn render_stats<L: Lexicon>(f: &mut Frame, app: &App<'_, L>, area: Rect) {
    let content = vec![
        Line::from(format!("Rounds played: {}", app.stats.rounds_played)),
        Line::from(format!(
            "Words accepted: {}   Best score: {}",
            app.stats.words_accepted, app.stats.best_score
        )),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Stats ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_messages<L: Lexicon>(f: &mut Frame, app: &App<'_, L>, area: Rect) {
    let lines: Vec<Line> = app
        .messages
        .iter()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::Gray),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            Line::from(Span::styled(msg.text.clone(), style))
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Messages ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_input<L: Lexicon>(f: &mut Frame, app: &App<'_, L>, area: Rect) {
    let input = Paragraph::new(format!("> {}_", app.input_buffer)).block(
        Block::default()
            .title(" Enter your word ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::White)),
    );
    f.render_widget(input, area);
}

fn render_status<L: Lexicon>(f: &mut Frame, app: &App<'_, L>, area: Rect) {
    let status = Paragraph::new(format!(
        "Enter: submit  Backspace: edit  Ctrl+N: new game  Esc: quit  (lang: {})",
        app.session.language()
    ))
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(status, area);
}
