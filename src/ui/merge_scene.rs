//! 2048 board rendering.

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
use arcade::core::GameStatus;
use arcade::games::MergeSnapshot;

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;

/// Background and foreground for a tile value.
fn tile_colors(value: u32) -> (Color, Color) {
    match value {
        0 => (Color::Rgb(40, 40, 48), Color::DarkGray),
        2 => (Color::Rgb(238, 228, 218), Color::Black),
        4 => (Color::Rgb(237, 224, 200), Color::Black),
        8 => (Color::Rgb(242, 177, 121), Color::White),
        16 => (Color::Rgb(245, 149, 99), Color::White),
        32 => (Color::Rgb(246, 124, 95), Color::White),
        64 => (Color::Rgb(246, 94, 59), Color::White),
        128 => (Color::Rgb(237, 207, 114), Color::White),
        256 => (Color::Rgb(237, 204, 97), Color::White),
        512 => (Color::Rgb(237, 200, 80), Color::White),
        1024 => (Color::Rgb(237, 197, 63), Color::White),
        2048 => (Color::Rgb(237, 194, 46), Color::White),
        _ => (Color::Rgb(60, 58, 50), Color::White),
    }
}

pub fn render_merge_scene(frame: &mut Frame, area: Rect, snapshot: &MergeSnapshot, best: u32, new_best: bool) {
    let layout = game_layout(frame, area, " 2048 ", Color::Yellow, 12, 20);

    render_board(frame, layout.content, snapshot);
    render_info_panel(frame, layout.info_panel, snapshot, best);

    if let Some(result) = Ending::from_status(snapshot.status) {
        let detail = if new_best {
            format!("New best: {}", snapshot.score)
        } else {
            String::new()
        };
        render_ending_banner(
            frame,
            layout.content,
            result,
            "No moves left",
            &format!("Score {}", snapshot.score),
            &detail,
        );
    }

    let status = if snapshot.status == GameStatus::Lost {
        ("Game over", Color::Red)
    } else {
        ("Merge the tiles!", Color::Yellow)
    };
    render_status_bar(
        frame,
        layout.status_bar,
        status.0,
        status.1,
        &[("[Arrows]", "Slide"), ("[R]", "Restart"), ("[Esc]", "Menu")],
    );
}

fn render_board(frame: &mut Frame, area: Rect, snapshot: &MergeSnapshot) {
    let board = &snapshot.board;
    let width = board.cols() as u16 * CELL_WIDTH;
    let height = board.rows() as u16 * CELL_HEIGHT;
    let (x0, y0) = centered_origin(area, width, height);

    for row in 0..board.rows() {
        for (col, &value) in board.row(row).iter().enumerate() {
            let (bg, fg) = tile_colors(value);
            let label = if value == 0 {
                String::new()
            } else {
                value.to_string()
            };
            let style = Style::default().bg(bg).fg(fg).add_modifier(Modifier::BOLD);

            let lines = vec![
                Line::from(""),
                Line::from(label),
                Line::from(""),
            ];
            let cell = Rect::new(
                x0 + col as u16 * CELL_WIDTH,
                y0 + row as u16 * CELL_HEIGHT,
                CELL_WIDTH - 1,
                CELL_HEIGHT,
            )
            .intersection(area);
            if cell.width == 0 || cell.height == 0 {
                continue;
            }
            frame.render_widget(
                Paragraph::new(lines).style(style).alignment(Alignment::Center),
                cell,
            );
        }
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, snapshot: &MergeSnapshot, best: u32) {
    let inner = info_panel(frame, area);

    let lines = vec![
        title_line("2048", Color::Yellow),
        Line::from(""),
        info_line("Score", snapshot.score.to_string(), Color::White),
        info_line("Best", best.max(snapshot.score).to_string(), Color::Cyan),
        info_line("Max tile", snapshot.max_tile.to_string(), Color::White),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
