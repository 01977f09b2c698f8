//! Pieces every game scene shares: the board/footer/sidebar split, the
//! footer itself, the end-of-round banner and sidebar line helpers.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use arcade::core::GameStatus;

/// Footer height: one status line, one key-hint line.
const FOOTER_ROWS: u16 = 2;
/// Narrowest the board column may shrink to.
const MIN_BOARD_COLS: u16 = 20;

pub struct SceneLayout {
    /// Where the board is drawn.
    pub content: Rect,
    pub status_bar: Rect,
    /// Right-hand column, framed separately by `info_panel`.
    pub info_panel: Rect,
}

/// Clear `area`, draw a titled border, and split the inside into a board
/// with a footer under it and a sidebar `sidebar_width` columns wide.
pub fn game_layout(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border_color: Color,
    board_min_height: u16,
    sidebar_width: u16,
) -> SceneLayout {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(MIN_BOARD_COLS), Constraint::Length(sidebar_width)])
        .split(inner);
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(board_min_height), Constraint::Length(FOOTER_ROWS)])
        .split(columns[0]);

    SceneLayout {
        content: left[0],
        status_bar: left[1],
        info_panel: columns[1],
    }
}

/// Status message on the first footer line, key hints on the second.
/// Each hint is a `(key, label)` pair such as `("[Enter]", "Reveal")`.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    if area.height == 0 {
        return;
    }

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    if area.height < 2 || controls.is_empty() {
        return;
    }

    let mut spans = Vec::with_capacity(controls.len() * 3);
    for (key, label) in controls {
        if !spans.is_empty() {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(*key, Style::default().fg(Color::White)));
        spans.push(Span::styled(format!(" {}", label), Style::default().fg(Color::DarkGray)));
    }
    let hints = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(
        hints,
        Rect {
            y: area.y + 1,
            height: 1,
            ..area
        },
    );
}

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    Win,
    Loss,
    Draw,
}

impl Ending {
    /// `None` while the round is still going.
    pub fn from_status(status: GameStatus) -> Option<Self> {
        match status {
            GameStatus::Won => Some(Self::Win),
            GameStatus::Lost => Some(Self::Loss),
            GameStatus::Draw => Some(Self::Draw),
            GameStatus::Ready | GameStatus::Playing | GameStatus::Paused => None,
        }
    }

    pub fn color(self) -> Color {
        match self {
            Ending::Win => Color::Green,
            Ending::Loss => Color::Red,
            Ending::Draw => Color::Yellow,
        }
    }
}

/// Banner pinned to the bottom rows of `area`. Only those rows are cleared,
/// so the final board remains readable above it. Pass an empty `detail` for
/// a one-line message.
pub fn render_ending_banner(
    frame: &mut Frame,
    area: Rect,
    ending: Ending,
    title: &str,
    message: &str,
    detail: &str,
) {
    let height = if detail.is_empty() { 4 } else { 5 };
    let banner = Rect {
        y: area.y + area.height.saturating_sub(height),
        height: height.min(area.height),
        ..area
    };
    frame.render_widget(Clear, banner);

    let color = ending.color();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inner = block.inner(banner);
    frame.render_widget(block, banner);

    let mut lines = vec![Line::from(vec![
        Span::styled(title, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Span::raw(" - "),
        Span::styled(message, Style::default().fg(Color::White)),
    ])];
    if !detail.is_empty() {
        lines.push(Line::from(Span::styled(detail, Style::default().fg(Color::Cyan))));
    }
    lines.push(Line::from(Span::styled(
        "[R] Play again  [Esc] Menu",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

/// Frame the sidebar and hand back the space inside it.
pub fn info_panel(frame: &mut Frame, area: Rect) -> Rect {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

pub fn info_line(label: &str, value: String, value_color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), Style::default().fg(Color::DarkGray)),
        Span::styled(value, Style::default().fg(value_color)),
    ])
}

pub fn title_line(title: &str, color: Color) -> Line<'static> {
    Line::from(Span::styled(
        title.to_string(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
}

/// Top-left cell that centers a `width`×`height` board in `area`. Boards
/// larger than `area` are pinned to its corner.
pub fn centered_origin(area: Rect, width: u16, height: u16) -> (u16, u16) {
    (
        area.x + area.width.saturating_sub(width) / 2,
        area.y + area.height.saturating_sub(height) / 2,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ending_only_for_terminal_status() {
        assert_eq!(Ending::from_status(GameStatus::Won), Some(Ending::Win));
        assert_eq!(Ending::from_status(GameStatus::Lost), Some(Ending::Loss));
        assert_eq!(Ending::from_status(GameStatus::Draw), Some(Ending::Draw));
        assert_eq!(Ending::from_status(GameStatus::Paused), None);
        assert_eq!(Ending::from_status(GameStatus::Ready), None);
    }

    #[test]
    fn test_centered_origin_pins_oversized_boards() {
        let area = Rect::new(2, 3, 10, 6);
        assert_eq!(centered_origin(area, 4, 2), (5, 5));
        assert_eq!(centered_origin(area, 30, 30), (2, 3));
    }
}
