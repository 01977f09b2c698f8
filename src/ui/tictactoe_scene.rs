//! Tic-tac-toe board rendering.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use super::game_common::{
    centered_origin, game_layout, info_line, render_ending_banner,
    info_panel, render_status_bar, title_line, Ending,
};
use arcade::core::{Coordinate, GameStatus};
use arcade::games::tictactoe::Mark;
use arcade::games::TicTacToeSnapshot;

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;

fn mark_color(mark: Mark) -> Color {
    match mark {
        Mark::X => Color::LightCyan,
        Mark::O => Color::LightMagenta,
    }
}

pub fn render_tictactoe_scene(frame: &mut Frame, area: Rect, snapshot: &TicTacToeSnapshot, cursor: Coordinate) {
    let layout = game_layout(frame, area, " Tic-Tac-Toe ", Color::Cyan, 10, 20);

    render_board(frame, layout.content, snapshot, cursor);
    render_info_panel(frame, layout.info_panel, snapshot);

    if let Some(result) = Ending::from_status(snapshot.status) {
        let message = match snapshot.winner {
            Some(winner) => format!("{} wins", winner.mark.symbol()),
            None => "Nobody wins".to_string(),
        };
        let title = if result == Ending::Draw {
            "Draw"
        } else {
            "Three in a row"
        };
        render_ending_banner(frame, layout.content, result, title, &message, "");
    }

    let status = match snapshot.status {
        GameStatus::Won | GameStatus::Draw => "Round over".to_string(),
        _ => format!("{} to move", snapshot.next.symbol()),
    };
    render_status_bar(
        frame,
        layout.status_bar,
        &status,
        Color::Cyan,
        &[
            ("[Arrows]", "Move"),
            ("[Enter]", "Place"),
            ("[Tab]", "Swap starter"),
            ("[R]", "Restart"),
            ("[Esc]", "Menu"),
        ],
    );
}

fn render_board(frame: &mut Frame, area: Rect, snapshot: &TicTacToeSnapshot, cursor: Coordinate) {
    let cells = &snapshot.cells;
    let width = cells.cols() as u16 * CELL_WIDTH;
    let height = cells.rows() as u16 * CELL_HEIGHT;
    let (x0, y0) = centered_origin(area, width, height);
    let game_over = snapshot.status.is_terminal();

    for at in cells.coords() {
        let mark = cells.get(at).copied().flatten();
        let label = mark.map(|m| m.symbol().to_string()).unwrap_or_default();

        let mut style = match mark {
            Some(m) => Style::default().fg(mark_color(m)).add_modifier(Modifier::BOLD),
            None => Style::default().fg(Color::DarkGray),
        };
        style = if snapshot.is_winning_cell(at) {
            style.bg(Color::Rgb(30, 90, 30))
        } else if !game_over && at == cursor {
            style.bg(Color::DarkGray)
        } else {
            style.bg(Color::Rgb(30, 30, 38))
        };

        let rect = Rect::new(
            x0 + at.col as u16 * CELL_WIDTH,
            y0 + at.row as u16 * CELL_HEIGHT,
            CELL_WIDTH - 1,
            CELL_HEIGHT,
        )
        .intersection(area);
        if rect.width == 0 || rect.height == 0 {
            continue;
        }

        let lines = vec![Line::from(""), Line::from(label), Line::from("")];
        frame.render_widget(
            Paragraph::new(lines).style(style).alignment(Alignment::Center),
            rect,
        );
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, snapshot: &TicTacToeSnapshot) {
    let inner = info_panel(frame, area);

    let lines = vec![
        title_line("Tic-Tac-Toe", Color::Cyan),
        Line::from(""),
        info_line(
            "Starter",
            snapshot.starter.symbol().to_string(),
            mark_color(snapshot.starter),
        ),
        info_line(
            "Next",
            snapshot.next.symbol().to_string(),
            mark_color(snapshot.next),
        ),
        info_line(
            "State",
            if snapshot.status.is_terminal() {
                "finished".to_string()
            } else {
                "in play".to_string()
            },
            Color::White,
        ),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
