use crate::game_engine::{GameEngine, GameState, Outcome};
use crate::io::OutputWriter;
use crate::models::board::Board;
use crate::models::constants::BOARD_SIZE;

pub struct BoardPresenter;

impl BoardPresenter {
    /// Print the grid, one row per line with a trailing space after
    /// each cell, followed by a blank line.
    pub fn show(board: &Board, output: &mut dyn OutputWriter) {
        for y in 0..BOARD_SIZE {
            output.writeln(&board.render_row(y));
        }
        output.writeln("");
    }
}

pub struct GamePresenter;

impl GamePresenter {
    /// The turn prompt for the player about to move.
    pub fn turn_prompt(engine: &GameEngine) -> String {
        format!(
            "{}'s turn. Enter U, D, L, or R to move: ",
            engine.current_player().name
        )
    }

    /// Announce the final result. Does nothing while the game is still
    /// in progress.
    pub fn announce_outcome(engine: &GameEngine, output: &mut dyn OutputWriter) {
        let GameState::Over { outcome } = engine.state() else {
            return;
        };
        match outcome {
            Outcome::Winner(id) => {
                output.writeln(&format!("{} wins!", engine.player(id).name));
            }
            Outcome::Tie => output.writeln("It's a tie!"),
        }
    }
}
