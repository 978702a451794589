use crate::game_engine::{GameEngine, GameState};
use crate::io::{InputReader, OutputWriter, TerminalIO};
use crate::models::direction::Direction;
use crate::models::errors::{GameError, GameResult};
use crate::ui::presenters::{BoardPresenter, GamePresenter};

/// The interactive game: one engine plus the two console collaborators.
pub struct Game<I: InputReader, O: OutputWriter> {
    engine: GameEngine,
    input: I,
    output: O,
}

impl Game<TerminalIO, TerminalIO> {
    /// A terminal game over a freshly generated board.
    pub fn new(seed: u64) -> Self {
        Self::with_io(GameEngine::new(seed), TerminalIO, TerminalIO)
    }
}

impl<I: InputReader, O: OutputWriter> Game<I, O> {
    pub fn with_io(engine: GameEngine, input: I, output: O) -> Self {
        Game {
            engine,
            input,
            output,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Run the game to completion. Each iteration shows the board,
    /// prompts the current player, and attempts the move. Rejected
    /// input is reported and re-prompted without consuming a turn.
    /// After the final accepted move the board is shown once more and
    /// the winner announced; no further input is read.
    pub fn run(&mut self) -> GameResult<()> {
        while self.engine.state() == GameState::InProgress {
            BoardPresenter::show(self.engine.board(), &mut self.output);

            let prompt = GamePresenter::turn_prompt(&self.engine);
            let line = self.input.read_line(&prompt)?;

            let result =
                Direction::parse(&line).and_then(|direction| self.engine.apply_move(direction));
            match result {
                Ok(()) => {}
                Err(err @ (GameError::InvalidDirection | GameError::BlockedMove)) => {
                    self.output.writeln(&err.to_string());
                }
                Err(err) => return Err(err),
            }
        }

        BoardPresenter::show(self.engine.board(), &mut self.output);
        GamePresenter::announce_outcome(&self.engine, &mut self.output);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_engine::PlayerId;
    use crate::io::test_utils::{MockInput, MockOutput};
    use crate::models::board::Board;
    use crate::models::constants::{Occupant, MAX_TURNS};
    use crate::models::position::Position;

    /// Thirty accepted moves: both players shuttle between their
    /// corner and the adjacent cell.
    fn shuttle_script() -> Vec<&'static str> {
        (0..MAX_TURNS as usize)
            .map(|turn| match turn % 4 {
                0 => "R",
                1 => "L",
                2 => "L",
                _ => "R",
            })
            .collect()
    }

    fn scripted_game(board: Board, responses: Vec<&str>) -> Game<MockInput, MockOutput> {
        Game::with_io(
            GameEngine::with_board(board),
            MockInput::new(responses),
            MockOutput::new(),
        )
    }

    #[test]
    fn full_game_ends_in_a_tie_on_an_empty_board() {
        let mut game = scripted_game(Board::new(), shuttle_script());
        game.run().unwrap();

        assert_eq!(game.engine().total_turns(), MAX_TURNS);
        // 30 board displays of 7 lines each, the final display, and
        // the announcement.
        assert_eq!(game.output.lines.len(), 31 * 7 + 1);
        assert_eq!(game.output.lines.last().unwrap(), "It's a tie!");
        // Exactly one prompt per accepted move.
        assert_eq!(game.input.prompts.len(), MAX_TURNS as usize);
        assert_eq!(
            game.input.prompts[0],
            "P1's turn. Enter U, D, L, or R to move: "
        );
        assert_eq!(
            game.input.prompts[1],
            "P2's turn. Enter U, D, L, or R to move: "
        );
    }

    #[test]
    fn collected_gem_decides_the_winner() {
        let mut board = Board::new();
        board.set(Position { x: 1, y: 0 }, Occupant::Gem);

        let mut game = scripted_game(board, shuttle_script());
        game.run().unwrap();

        assert_eq!(game.engine().player(PlayerId::One).gem_count, 1);
        assert_eq!(game.output.lines.last().unwrap(), "P1 wins!");
    }

    #[test]
    fn unrecognized_input_warns_and_reprompts_the_same_player() {
        let mut script = vec!["X", "7"];
        script.extend(shuttle_script());

        let mut game = scripted_game(Board::new(), script);
        game.run().unwrap();

        let warnings = game
            .output
            .lines
            .iter()
            .filter(|line| *line == "Invalid direction. Use U, D, L, or R.")
            .count();
        assert_eq!(warnings, 2);
        // The bad attempts did not consume a turn, so P1 was prompted
        // three times before the first accepted move.
        assert!(game.input.prompts[..3]
            .iter()
            .all(|p| p.starts_with("P1's")));
        assert_eq!(game.engine().total_turns(), MAX_TURNS);
    }

    #[test]
    fn blocked_move_warns_and_reprompts_the_same_player() {
        // From (0,0), Up and Left run off the board.
        let mut script = vec!["U", "L"];
        script.extend(shuttle_script());

        let mut game = scripted_game(Board::new(), script);
        game.run().unwrap();

        let warnings = game
            .output
            .lines
            .iter()
            .filter(|line| *line == "Invalid move. Try again.")
            .count();
        assert_eq!(warnings, 2);
        assert_eq!(game.engine().total_turns(), MAX_TURNS);
    }

    #[test]
    fn exhausted_input_surfaces_as_an_io_error() {
        let mut game = scripted_game(Board::new(), vec!["R"]);
        let result = game.run();
        assert!(matches!(result, Err(GameError::IoError(_))));
    }
}
