//! Stateless UI rendering.

use super::app::{App, Focus};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use rewind_tictactoe::{GameSnapshot, Player, Position, Square};

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let snapshot = app.snapshot();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(13),   // Game
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Rewind Games - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    draw_game(frame, columns[0], &snapshot, app.cursor());
    draw_moves(frame, columns[1], app);

    let help = Paragraph::new(
        "arrows/1-9 play  Tab moves list  u/r back/forward  Home/End first/last  s sort  n new  q quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::TOP));
    frame.render_widget(help, chunks[2]);
}

fn draw_game(frame: &mut Frame, area: Rect, snapshot: &GameSnapshot, cursor: Position) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(7)])
        .split(area);

    let status_style = if snapshot.winner.is_some() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let status = Paragraph::new(snapshot.status_text())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, rows[0]);

    let lines: Vec<Line> = (0..3)
        .flat_map(|row| {
            let cells = Line::from(
                (0..3)
                    .flat_map(|col| {
                        let span = Position::from_index(row * 3 + col)
                            .map(|pos| cell_span(snapshot, cursor, pos))
                            .unwrap_or_default();
                        let sep = if col < 2 { "│" } else { "" };
                        [span, Span::styled(sep, Style::default().fg(Color::DarkGray))]
                    })
                    .collect::<Vec<_>>(),
            );
            let divider = if row < 2 {
                Some(Line::styled("───┼───┼───", Style::default().fg(Color::DarkGray)))
            } else {
                None
            };
            std::iter::once(cells).chain(divider)
        })
        .collect();

    let (title, border) = if snapshot.status.is_over() {
        ("Board (game over)", Style::default().fg(Color::DarkGray))
    } else {
        ("Board", Style::default())
    };
    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(title),
    );
    frame.render_widget(board, rows[1]);
}

fn cell_span(snapshot: &GameSnapshot, cursor: Position, pos: Position) -> Span<'static> {
    let (symbol, mut style) = match snapshot.board.get(pos) {
        Square::Empty => ("   ", Style::default().fg(Color::DarkGray)),
        Square::Occupied(Player::X) => (
            " X ",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            " O ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if snapshot.winner.is_some_and(|w| w.contains(pos)) {
        style = style.bg(Color::Green).fg(Color::Black);
    }
    if pos == cursor {
        style = style.bg(Color::White).fg(Color::Black);
    }

    Span::styled(symbol, style)
}

fn draw_moves(frame: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    let focused = app.focus() == Focus::Moves;
    let items: Vec<ListItem> = app
        .move_items()
        .into_iter()
        .map(|item| {
            let selected = focused && item.step == app.selected_step();
            let mut style = if item.is_current {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            if selected {
                style = style.add_modifier(Modifier::REVERSED);
            }
            let marker = if selected { "> " } else { "  " };
            ListItem::new(Line::styled(
                format!("{marker}{}. {}", item.step + 1, item.label),
                style,
            ))
        })
        .collect();

    let (title, border) = if focused {
        ("Moves (Enter jumps)", Style::default().fg(Color::Yellow))
    } else {
        ("Moves", Style::default())
    };
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(title),
    );
    frame.render_widget(list, rows[0]);

    let toggle = Paragraph::new(format!("[s] {}", app.sort_order().toggle_label()))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Right);
    frame.render_widget(toggle, rows[1]);
}
