//! Game picker shown at startup and after leaving a game.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

use arcade::best_scores::BestScores;
use arcade::games::GameKind;

pub fn render_menu(frame: &mut Frame, area: Rect, selected: usize, best: &BestScores) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Arcade ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    let items: Vec<ListItem> = GameKind::ALL
        .iter()
        .enumerate()
        .map(|(i, kind)| {
            let is_selected = i == selected;
            let prefix = if is_selected { "> " } else { "  " };
            let name_style = if is_selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let mut spans = vec![
                Span::styled(format!("{}{:<14}", prefix, kind.name()), name_style),
                Span::styled(kind.description(), Style::default().fg(Color::DarkGray)),
            ];
            if kind.keeps_best_score() {
                let score = best.get(*kind);
                if score > 0 {
                    spans.push(Span::styled(
                        format!("  best {}", score),
                        Style::default().fg(Color::Cyan),
                    ));
                }
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    frame.render_widget(List::new(items), chunks[0]);

    let help = Paragraph::new("[↑/↓] Navigate  [Enter] Play  [Esc/Q] Quit")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[1]);
}
