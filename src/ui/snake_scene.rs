//! Snake rendering.
//!
//! Uses half-block pixel rendering: each grid cell is one colored "pixel",
//! and two vertically stacked pixels share one terminal row via `▀`
//! (fg = top pixel, bg = bottom pixel).

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::game_common::{
    game_layout, info_line, render_ending_banner, info_panel,
    render_status_bar, title_line, Ending,
};
use arcade::core::GameStatus;
use arcade::games::SnakeSnapshot;

// ── Border characters ────────────────────────────────────────────────
const BORDER_H: char = '\u{2500}'; // ─
const BORDER_V: char = '\u{2502}'; // │
const BORDER_TL: char = '\u{250C}'; // ┌
const BORDER_TR: char = '\u{2510}'; // ┐
const BORDER_BL: char = '\u{2514}'; // └
const BORDER_BR: char = '\u{2518}'; // ┘
const HALF_TOP: char = '\u{2580}'; // ▀

// ── Colors ───────────────────────────────────────────────────────────
const HEAD_COLOR: Color = Color::Rgb(100, 255, 100);
const BODY_BRIGHT: (f64, f64, f64) = (50.0, 220.0, 50.0);
const BODY_DIM: (f64, f64, f64) = (20.0, 80.0, 20.0);
const FOOD_COLOR: Color = Color::Rgb(255, 90, 50);
const EMPTY_BG: Color = Color::Rgb(12, 12, 18);
const BORDER_COLOR: Color = Color::Rgb(80, 80, 80);

pub fn render_snake_scene(frame: &mut Frame, area: Rect, snapshot: &SnakeSnapshot, best: u32, new_best: bool) {
    let layout = game_layout(frame, area, " Snake ", Color::LightGreen, 12, 18);

    render_play_field(frame, layout.content, snapshot);
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
            "Game over",
            &format!("Length {}, score {}", snapshot.body.len(), snapshot.score),
            &detail,
        );
    }

    render_status_bar_content(frame, layout.status_bar, snapshot);
}

/// Interpolated color for body segment `index` (0 = head).
fn body_color(index: usize, snake_len: usize) -> Color {
    let t = index as f64 / (snake_len - 1).max(1) as f64;
    let r = (BODY_BRIGHT.0 * (1.0 - t) + BODY_DIM.0 * t) as u8;
    let g = (BODY_BRIGHT.1 * (1.0 - t) + BODY_DIM.1 * t) as u8;
    let b = (BODY_BRIGHT.2 * (1.0 - t) + BODY_DIM.2 * t) as u8;
    Color::Rgb(r, g, b)
}

fn border_span(text: String) -> Span<'static> {
    Span::styled(text, Style::default().fg(BORDER_COLOR))
}

fn render_play_field(frame: &mut Frame, area: Rect, snapshot: &SnakeSnapshot) {
    if area.height < 3 || area.width < 5 {
        return;
    }

    let grid_w = snapshot.cols;
    let grid_h = snapshot.rows;

    // ── Build color grid ────────────────────────────────────────
    let mut pixels: Vec<Vec<Option<Color>>> = vec![vec![None; grid_w]; grid_h];

    if let Some(food) = snapshot.food {
        if let (Ok(r), Ok(c)) = (usize::try_from(food.row), usize::try_from(food.col)) {
            if r < grid_h && c < grid_w {
                pixels[r][c] = Some(FOOD_COLOR);
            }
        }
    }

    let snake_len = snapshot.body.len();
    for (i, seg) in snapshot.body.iter().enumerate() {
        if let (Ok(r), Ok(c)) = (usize::try_from(seg.row), usize::try_from(seg.col)) {
            if r < grid_h && c < grid_w {
                pixels[r][c] = Some(if i == 0 {
                    HEAD_COLOR
                } else {
                    body_color(i, snake_len)
                });
            }
        }
    }

    // ── Layout dimensions ───────────────────────────────────────
    let content_rows = grid_h.div_ceil(2);
    let render_w = ((grid_w + 2) as u16).min(area.width);
    let inner_w = render_w as usize - 2;
    let x_off = area.x + (area.width.saturating_sub(render_w)) / 2;
    let y_off = area.y;

    // ── Top border ──────────────────────────────────────────────
    let mut top = String::new();
    top.push(BORDER_TL);
    top.extend(std::iter::repeat(BORDER_H).take(inner_w));
    top.push(BORDER_TR);
    frame.render_widget(
        Paragraph::new(Line::from(border_span(top))),
        Rect::new(x_off, y_off, render_w, 1),
    );

    // ── Content rows ────────────────────────────────────────────
    let empty_row: Vec<Option<Color>> = vec![None; grid_w];
    for term_row in 0..content_rows {
        let row_y = y_off + 1 + term_row as u16;
        if row_y >= area.y + area.height {
            break;
        }
        let top_row = pixels.get(term_row * 2).unwrap_or(&empty_row);
        let bot_row = pixels.get(term_row * 2 + 1).unwrap_or(&empty_row);

        let mut spans: Vec<Span> = vec![border_span(BORDER_V.to_string())];

        // Batch consecutive cells with the same colors
        let mut cur_fg = Color::Reset;
        let mut cur_bg = Color::Reset;
        let mut cur_text = String::new();

        for (&top_c, &bot_c) in top_row.iter().zip(bot_row.iter()).take(inner_w) {
            let fg = top_c.unwrap_or(EMPTY_BG);
            let bg = bot_c.unwrap_or(EMPTY_BG);

            if fg != cur_fg || bg != cur_bg {
                if !cur_text.is_empty() {
                    spans.push(Span::styled(
                        std::mem::take(&mut cur_text),
                        Style::default().fg(cur_fg).bg(cur_bg),
                    ));
                }
                cur_fg = fg;
                cur_bg = bg;
            }
            cur_text.push(HALF_TOP);
        }
        if !cur_text.is_empty() {
            spans.push(Span::styled(
                cur_text,
                Style::default().fg(cur_fg).bg(cur_bg),
            ));
        }

        spans.push(border_span(BORDER_V.to_string()));
        frame.render_widget(
            Paragraph::new(Line::from(spans)),
            Rect::new(x_off, row_y, render_w, 1),
        );
    }

    // ── Bottom border ───────────────────────────────────────────
    let bot_y = y_off + 1 + content_rows as u16;
    if bot_y < area.y + area.height {
        let mut bottom = String::new();
        bottom.push(BORDER_BL);
        bottom.extend(std::iter::repeat(BORDER_H).take(inner_w));
        bottom.push(BORDER_BR);
        frame.render_widget(
            Paragraph::new(Line::from(border_span(bottom))),
            Rect::new(x_off, bot_y, render_w, 1),
        );
    }
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, snapshot: &SnakeSnapshot) {
    let (text, color, controls): (&str, Color, &[(&str, &str)]) = match snapshot.status {
        GameStatus::Ready => (
            "Ready",
            Color::LightGreen,
            &[("[Enter]", "Start"), ("[Arrows]", "Aim"), ("[Esc]", "Menu")],
        ),
        GameStatus::Paused => (
            "Paused",
            Color::Yellow,
            &[("[Space]", "Resume"), ("[R]", "Restart"), ("[Esc]", "Menu")],
        ),
        GameStatus::Lost | GameStatus::Won | GameStatus::Draw => (
            "Game over",
            Color::Red,
            &[("[R]", "Restart"), ("[Esc]", "Menu")],
        ),
        GameStatus::Playing => (
            "Slither!",
            Color::Green,
            &[("[Arrows]", "Turn"), ("[Space]", "Pause"), ("[Esc]", "Menu")],
        ),
    };
    render_status_bar(frame, area, text, color, controls);
}

fn render_info_panel(frame: &mut Frame, area: Rect, snapshot: &SnakeSnapshot, best: u32) {
    let inner = info_panel(frame, area);

    let lines = vec![
        title_line("Snake", Color::LightGreen),
        Line::from(""),
        info_line("Score", snapshot.score.to_string(), Color::White),
        info_line("Best", best.max(snapshot.score).to_string(), Color::Cyan),
        info_line("Length", snapshot.body.len().to_string(), Color::White),
        info_line(
            "Grid",
            format!("{}x{}", snapshot.cols, snapshot.rows),
            Color::White,
        ),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
