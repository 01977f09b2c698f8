//! Terminal rendering. Every scene draws from an engine snapshot.

mod game_common;
mod menu_scene;
mod merge_scene;
mod minefield_scene;
mod snake_scene;
mod tictactoe_scene;

use ratatui::Frame;

use arcade::app::{ActiveGame, App};
use arcade::core::RandomSource;

/// Draw the current screen.
pub fn draw<R: RandomSource>(frame: &mut Frame, app: &App<R>) {
    let area = frame.size();
    let best = app.best();

    match app.active() {
        None => menu_scene::render_menu(frame, area, app.menu_index(), best),
        Some(active) => {
            let best_score = best.get(active.kind());
            match active {
                ActiveGame::Merge(game) => {
                    merge_scene::render_merge_scene(frame, area, &game.snapshot(), best_score, app.is_new_best())
                }
                ActiveGame::Minefield { game, cursor } => {
                    minefield_scene::render_minefield_scene(frame, area, &game.snapshot(), *cursor, best_score)
                }
                ActiveGame::Snake { game, .. } => {
                    snake_scene::render_snake_scene(frame, area, &game.snapshot(), best_score, app.is_new_best())
                }
                ActiveGame::TicTacToe { game, cursor } => {
                    tictactoe_scene::render_tictactoe_scene(frame, area, &game.snapshot(), *cursor)
                }
            }
        }
    }
}
