//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Classification, Feedback, Word, WordSize};
use crate::game::Game;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board and messages
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    match &app.game {
        Some(game) => render_board(f, game, main_chunks[0]),
        None => render_menu(f, main_chunks[0]),
    }
    render_messages(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE")
        .style(
            Style::default()
                .fg(Color::White)
                .bg(Color::Green)
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

fn cell_style(class: Classification) -> Style {
    let bg = match class {
        Classification::Exact => Color::Green,
        Classification::Close => Color::Yellow,
        Classification::Absent => Color::Red,
    };
    Style::default()
        .fg(Color::White)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

/// One board row: each letter in a colored cell
fn guess_line(word: &Word, feedback: &Feedback) -> Line<'static> {
    let spans: Vec<Span> = word
        .text()
        .chars()
        .zip(feedback.classifications())
        .flat_map(|(letter, &class)| {
            [
                Span::styled(
                    format!(" {} ", letter.to_ascii_uppercase()),
                    cell_style(class),
                ),
                Span::raw(" "),
            ]
        })
        .collect();
    Line::from(spans)
}

fn empty_line(len: usize) -> Line<'static> {
    Line::from(
        std::iter::repeat_n(
            Span::styled(" _ ", Style::default().fg(Color::DarkGray)),
            len,
        )
        .flat_map(|cell| [cell, Span::raw(" ")])
        .collect::<Vec<_>>(),
    )
}

fn render_menu(f: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::from("Choose your word size to start"),
        Line::from(""),
    ];
    lines.extend(WordSize::ALL.iter().map(|size| {
        Line::from(vec![
            Span::styled(
                format!(" {size} "),
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("  {size} letters, {} tries", size.guess_budget())),
        ])
    }));

    let menu = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Main Menu ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(menu, area);
}

fn render_board(f: &mut Frame, game: &Game, area: Rect) {
    let size = game.size();
    let mut lines: Vec<Line> = game
        .history()
        .iter()
        .map(|(word, feedback)| guess_line(word, feedback))
        .collect();
    lines.extend((0..game.attempts_remaining()).map(|_| empty_line(size.len())));

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(" {size}-letter word "))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
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

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match (app.input_mode, &app.game) {
        (InputMode::Guessing, Some(game)) => (
            format!(" Input a {}-letter word ", game.size()),
            app.input_buffer.to_uppercase(),
            Color::Cyan,
        ),
        (InputMode::GameOver, _) => (
            " Game over | 'n' new game, 'm' menu, 'q' quit ".to_string(),
            String::new(),
            Color::Green,
        ),
        _ => (
            " Word size ".to_string(),
            "Press 5, 6, 7 or 8".to_string(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(35),
            Constraint::Percentage(35),
        ])
        .split(area);

    let guesses = Paragraph::new(match &app.game {
        Some(game) => format!("Guesses left: {}", game.attempts_remaining()),
        None => "No game".to_string(),
    })
    .alignment(Alignment::Center);
    f.render_widget(guesses, chunks[0]);

    let stats = Paragraph::new(format!(
        "Games: {} | Won: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.games_won,
        app.stats.win_rate()
    ))
    .alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = match app.input_mode {
        InputMode::Menu => "5-8: Start | q: Quit",
        InputMode::Guessing => "Enter: Submit | Ctrl-R: Reset | Esc: Menu",
        InputMode::GameOver => "n: New | m: Menu | q: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
