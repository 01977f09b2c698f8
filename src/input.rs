//! Key translation for the terminal host.
//!
//! Raw crossterm events become a small set of abstract inputs; `app.rs` turns
//! those into engine actions for whichever game is open.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::Direction;

/// UI-agnostic input shared by every screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArcadeInput {
    Up,
    Down,
    Left,
    Right,
    /// Enter: select, reveal, place, start.
    Primary,
    /// Space / F / P: flag, pause.
    Secondary,
    /// R
    Restart,
    /// Tab: swap the tic-tac-toe starter.
    Swap,
    /// Esc: back to the menu.
    Cancel,
    /// Q or Ctrl-C.
    Quit,
    Other,
}

impl ArcadeInput {
    pub fn direction(self) -> Option<Direction> {
        match self {
            Self::Up => Some(Direction::Up),
            Self::Down => Some(Direction::Down),
            Self::Left => Some(Direction::Left),
            Self::Right => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Map a key event. Release and repeat events (reported on some platforms)
/// map to `Other`.
pub fn map_key(key: KeyEvent) -> ArcadeInput {
    if key.kind != KeyEventKind::Press {
        return ArcadeInput::Other;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => ArcadeInput::Quit,
            _ => ArcadeInput::Other,
        };
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => ArcadeInput::Up,
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => ArcadeInput::Down,
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => ArcadeInput::Left,
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => ArcadeInput::Right,
        KeyCode::Enter => ArcadeInput::Primary,
        KeyCode::Char(' ')
        | KeyCode::Char('f')
        | KeyCode::Char('F')
        | KeyCode::Char('p')
        | KeyCode::Char('P') => ArcadeInput::Secondary,
        KeyCode::Char('r') | KeyCode::Char('R') => ArcadeInput::Restart,
        KeyCode::Tab => ArcadeInput::Swap,
        KeyCode::Esc => ArcadeInput::Cancel,
        KeyCode::Char('q') | KeyCode::Char('Q') => ArcadeInput::Quit,
        _ => ArcadeInput::Other,
    }
}
