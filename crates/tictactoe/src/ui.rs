//! Stateless UI rendering for tic-tac-toe.

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use tictactoe_engine::{Board, Mark, Position, Square};

const HELP: &str = "Arrows move · Enter/Space or 1-9 place · r restart · q quit";

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(1), // Score
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, chunks[0]);

    let score = Paragraph::new(app.score().to_string())
        .style(Style::default().fg(Color::Green))
        .alignment(Alignment::Center);
    frame.render_widget(score, chunks[1]);

    match app.finished_round() {
        Some(outcome) => {
            let highlight: Vec<Position> =
                outcome.winning_line().map(Vec::from).unwrap_or_default();
            draw_board(frame, chunks[2], outcome.final_board(), None, &highlight);
            draw_result_banner(frame, chunks[2], app.status_message());
        }
        None => draw_board(frame, chunks[2], app.board(), Some(app.cursor()), &[]),
    }

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[3]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}

fn draw_board(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    cursor: Option<Position>,
    highlight: &[Position],
) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, positions) in Position::ALL.chunks(3).enumerate() {
        if row > 0 {
            draw_separator(frame, rows[row * 2 - 1]);
        }

        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(12),
                Constraint::Length(1),
                Constraint::Length(12),
                Constraint::Length(1),
                Constraint::Length(12),
            ])
            .split(rows[row * 2]);

        for (col, pos) in positions.iter().enumerate() {
            if col > 0 {
                draw_separator_vertical(frame, cols[col * 2 - 1]);
            }
            let style = cell_style(board.get(*pos), Some(*pos) == cursor, highlight.contains(pos));
            draw_cell(frame, cols[col * 2], board.get(*pos), *pos, style);
        }
    }
}

fn cell_style(square: Square, under_cursor: bool, winning: bool) -> Style {
    let base = match square {
        Square::Empty => Style::default().fg(Color::DarkGray),
        Square::Occupied(Mark::Player) => Style::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::BOLD),
        Square::Occupied(Mark::Bot) => Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::BOLD),
    };

    if under_cursor {
        base.bg(Color::White).fg(Color::Black)
    } else if winning {
        base.bg(Color::Yellow)
    } else {
        base
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, square: Square, pos: Position, style: Style) {
    let symbol = match square.mark() {
        Some(mark) => format!(" {} ", mark.symbol()),
        None => format!(" {} ", pos.to_index() + 1),
    };

    // Middle line of the three-line cell.
    let text = vec![
        Line::default(),
        Line::from(Span::styled(symbol, style)),
        Line::default(),
    ];
    let paragraph = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

/// Result popup over the finished board, like a message dialog.
fn draw_result_banner(frame: &mut Frame, area: Rect, message: &str) {
    let popup = center_rect(area, 30, 5);
    let text = vec![
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from("Press any key"),
    ];
    let banner = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Round over"));
    frame.render_widget(Clear, popup);
    frame.render_widget(banner, popup);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
