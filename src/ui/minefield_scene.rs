//! Minesweeper board rendering.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::game_common::{
    centered_origin, game_layout, info_line, render_ending_banner,
    info_panel, render_status_bar, title_line, Ending,
};
use arcade::core::{Coordinate, GameStatus};
use arcade::games::minefield::Cell;
use arcade::games::MinefieldSnapshot;

pub fn render_minefield_scene(
    frame: &mut Frame,
    area: Rect,
    snapshot: &MinefieldSnapshot,
    cursor: Coordinate,
    best: u32,
) {
    let layout = game_layout(frame, area, " Minesweeper ", Color::Yellow, 10, 22);

    render_grid(frame, layout.content, snapshot, cursor);
    render_info_panel(frame, layout.info_panel, snapshot, best);

    if let Some(result) = Ending::from_status(snapshot.status) {
        let (title, message) = match result {
            Ending::Win => ("Field cleared!", "Every safe cell found"),
            _ => ("Boom!", "You hit a mine"),
        };
        render_ending_banner(frame, layout.content, result, title, message, "");
    }

    let (text, color) = match snapshot.status {
        GameStatus::Ready => ("Pick a cell to begin", Color::Yellow),
        GameStatus::Won => ("Cleared", Color::Green),
        GameStatus::Lost => ("Mine hit", Color::Red),
        _ => ("Sweeping...", Color::Green),
    };
    render_status_bar(
        frame,
        layout.status_bar,
        text,
        color,
        &[
            ("[Arrows]", "Move"),
            ("[Enter]", "Reveal"),
            ("[F]", "Flag"),
            ("[R]", "Restart"),
            ("[Esc]", "Menu"),
        ],
    );
}

/// Render the minefield grid. Each cell is 2 chars wide, 1 char tall.
fn render_grid(frame: &mut Frame, area: Rect, snapshot: &MinefieldSnapshot, cursor: Coordinate) {
    let grid = &snapshot.grid;
    let grid_width = (grid.cols() * 2) as u16;
    let grid_height = grid.rows() as u16;
    let (x_offset, y_offset) = centered_origin(area, grid_width, grid_height);

    let game_over = snapshot.status.is_terminal();

    for row in 0..grid.rows() {
        if row as u16 >= area.height {
            break;
        }
        let spans: Vec<Span> = grid
            .row(row)
            .iter()
            .enumerate()
            .map(|(col, cell)| {
                let (text, color) = get_cell_display(cell);
                let mut style = Style::default().fg(color);
                if !game_over && cursor == Coordinate::from((row, col)) {
                    style = style.bg(Color::DarkGray);
                }
                Span::styled(text, style)
            })
            .collect();

        frame.render_widget(
            Paragraph::new(Line::from(spans)),
            Rect::new(x_offset, y_offset + row as u16, grid_width.min(area.width), 1),
        );
    }
}

/// Display text and color for a cell.
fn get_cell_display(cell: &Cell) -> (&'static str, Color) {
    if cell.is_flagged && !cell.is_revealed {
        return ("F ", Color::Red);
    }

    if !cell.is_revealed {
        return ("# ", Color::Gray);
    }

    if cell.is_mine {
        return ("* ", Color::Red);
    }

    match cell.adjacent_count {
        0 => (". ", Color::DarkGray),
        1 => ("1 ", Color::Blue),
        2 => ("2 ", Color::Green),
        3 => ("3 ", Color::Red),
        4 => ("4 ", Color::Magenta),
        5 => ("5 ", Color::Yellow),
        6 => ("6 ", Color::Cyan),
        7 => ("7 ", Color::Gray),
        8 => ("8 ", Color::White),
        _ => ("? ", Color::White),
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, snapshot: &MinefieldSnapshot, best: u32) {
    let inner = info_panel(frame, area);

    let remaining_color = if snapshot.flags_placed > snapshot.mines {
        Color::Red
    } else {
        Color::White
    };

    let lines = vec![
        title_line("Minesweeper", Color::Yellow),
        Line::from(""),
        info_line(
            "Grid",
            format!("{}x{}", snapshot.grid.cols(), snapshot.grid.rows()),
            Color::White,
        ),
        info_line("Mines", snapshot.mines.to_string(), Color::White),
        info_line("Remaining", snapshot.mines_remaining.to_string(), remaining_color),
        info_line("Revealed", snapshot.revealed_safe.to_string(), Color::White),
        info_line("Best", best.to_string(), Color::Cyan),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
