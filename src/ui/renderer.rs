use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;
use crate::game::GameStatus;

// Each slot is drawn three characters wide
const CELL_WIDTH: u16 = 3;

pub fn ui(f: &mut Frame, app: &App) {
    let size = f.size();

    let board = app.session.board();
    // selector row + grid + column numbers + 2 borders
    let board_height = board.height() as u16 + 4;
    let panel_width = (board.width() as u16 * CELL_WIDTH + 2).max(40);

    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(3),            // Header
            Constraint::Length(board_height), // Board
            Constraint::Length(3),            // Message
            Constraint::Length(3),            // Controls
            Constraint::Min(1),
        ])
        .split(size);

    let center = |area: Rect| {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(1),
                Constraint::Length(panel_width),
                Constraint::Min(1),
            ])
            .split(area)[1]
    };

    let header_area = center(vertical_chunks[1]);
    let board_area = center(vertical_chunks[2]);
    let message_area = center(vertical_chunks[3]);
    let controls_area = center(vertical_chunks[4]);

    render_header(f, app, header_area);
    render_board(f, app, board_area);
    render_message(f, app, message_area);
    render_controls(f, controls_area);

    if app.session.is_over() {
        render_game_over_overlay(f, app, board_area);
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let (text, color) = match app.session.status() {
        GameStatus::Turn(player) => (
            format!("{} to move", player.name()),
            app.player_color(player),
        ),
        GameStatus::Won(player) => (
            format!("Game over: {} won", player.name()),
            app.player_color(player),
        ),
        GameStatus::Tied => ("Game over: tie".to_string(), Color::Yellow),
    };

    let header = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));

    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let board = app.session.board();
    let mut board_lines = Vec::new();

    // Selector arrow above the current column; dimmed when the column
    // is full or the game is over
    let mut selector_spans = Vec::new();
    for col in 0..board.width() {
        if col == app.cursor {
            let color = match app.session.current_player() {
                Some(player) if !board.is_column_full(col) => app.player_color(player),
                _ => Color::DarkGray,
            };
            selector_spans.push(Span::styled(" ▼ ", Style::default().fg(color)));
        } else {
            selector_spans.push(Span::raw("   "));
        }
    }
    board_lines.push(Line::from(selector_spans));

    for row in 0..board.height() {
        let mut line_spans = Vec::new();
        for col in 0..board.width() {
            match board.get(row, col) {
                Some(player) => {
                    line_spans.push(Span::styled(
                        " ● ",
                        Style::default().fg(app.player_color(player)),
                    ));
                }
                None => {
                    line_spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
                }
            }
        }
        board_lines.push(Line::from(line_spans));
    }

    // Column hotkeys under the grid
    let mut number_spans = Vec::new();
    for col in 0..board.width() {
        number_spans.push(Span::styled(
            format!(" {} ", col + 1),
            Style::default().fg(Color::DarkGray),
        ));
    }
    board_lines.push(Line::from(number_spans));

    let board_widget = Paragraph::new(board_lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("confour"));

    f.render_widget(board_widget, area);
}

fn render_message(f: &mut Frame, app: &App, area: Rect) {
    let text = app.message.as_deref().unwrap_or("");

    let message_widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(message_widget, area);
}

fn render_controls(f: &mut Frame, area: Rect) {
    let controls = Paragraph::new("←/→ move · Enter drop · 1-9 column · R restart · Q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(controls, area);
}

fn render_game_over_overlay(f: &mut Frame, app: &App, area: Rect) {
    let popup_area = centered_rect(70, 60, area);
    f.render_widget(Clear, popup_area);

    let (headline, color) = match app.session.status() {
        GameStatus::Won(player) => (
            format!("Player {} wins!", player.number()),
            app.player_color(player),
        ),
        GameStatus::Tied => ("Tie!".to_string(), Color::Yellow),
        GameStatus::Turn(_) => return,
    };

    let text = vec![
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::styled(
            headline,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::raw("Press R to restart")]),
        Line::from(vec![Span::raw("Press Q to quit")]),
    ];

    let overlay = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Game Over"));

    f.render_widget(overlay, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
