//! Game state machine
//!
//! Manages the turn loop state: whose move it is, how many moves have
//! been accepted, and whether the game has ended. The GameEngine owns
//! the board and both players and is free of any I/O, so the whole
//! turn-resolution logic is testable without a console.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::models::board::Board;
use crate::models::constants::{
    Occupant, MAX_TURNS, PLAYER1_NAME, PLAYER1_START, PLAYER2_NAME, PLAYER2_START,
};
use crate::models::direction::Direction;
use crate::models::errors::{GameError, GameResult};
use crate::models::player::Player;
use crate::models::position::Position;

/// Selector for one of the two fixed players.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub fn other(&self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// The board marker for this player.
    pub fn marker(&self) -> Occupant {
        match self {
            PlayerId::One => Occupant::Player1,
            PlayerId::Two => Occupant::Player2,
        }
    }

    fn index(&self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    Over { outcome: Outcome },
}

/// Final result, decided by comparing gem counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Winner(PlayerId),
    Tie,
}

/// Core game engine that drives turn resolution and termination.
pub struct GameEngine {
    board: Board,
    players: [Player; 2],
    current: PlayerId,
    total_turns: u32,
    state: GameState,
}

impl GameEngine {
    /// Creates a new engine with a freshly generated board
    ///
    /// # Arguments
    ///
    /// * `seed` - Random number generator seed for board generation
    ///
    /// # Returns
    ///
    /// A new GameEngine in the InProgress state with player 1 to move
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::with_board(Board::generate(&mut rng))
    }

    /// Creates an engine around an existing board. Both players start
    /// at their standard corners; the board is taken as-is, so tests
    /// can stage exact layouts.
    pub fn with_board(board: Board) -> Self {
        let (x, y) = PLAYER1_START;
        let player1 = Player::new(PLAYER1_NAME, Position { x, y });
        let (x, y) = PLAYER2_START;
        let player2 = Player::new(PLAYER2_NAME, Position { x, y });
        GameEngine {
            board,
            players: [player1, player2],
            current: PlayerId::One,
            total_turns: 0,
            state: GameState::InProgress,
        }
    }

    /// Returns an immutable reference to the board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// Mutable access to a player, for staging test scenarios.
    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id.index()]
    }

    /// The player whose move it is.
    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    pub fn current_turn(&self) -> PlayerId {
        self.current
    }

    /// Accepted moves so far. Rejected attempts are not counted.
    pub fn total_turns(&self) -> u32 {
        self.total_turns
    }

    /// Returns the current game state
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Whether the current player may step in `direction`.
    pub fn is_valid_move(&self, direction: Direction) -> bool {
        self.board.is_valid_move(self.current_player(), direction)
    }

    /// Attempt one move for the current player
    ///
    /// # Arguments
    ///
    /// * `direction` - The step the current player wants to take
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the move was accepted
    /// * `Err(GameError::BlockedMove)` if the destination is off the
    ///   board or holds an obstacle; nothing changes and no turn is
    ///   consumed
    /// * `Err(GameError::GameOver)` if called after the game ended
    ///
    /// # Effects of an accepted move
    ///
    /// The player steps one cell, collects a gem if one is at the
    /// destination, the board markers are updated, the turn passes to
    /// the other player, and the move counter goes up by one. The 30th
    /// accepted move ends the game and fixes the outcome.
    pub fn apply_move(&mut self, direction: Direction) -> GameResult<()> {
        if self.state != GameState::InProgress {
            return Err(GameError::GameOver);
        }
        if !self.is_valid_move(direction) {
            return Err(GameError::BlockedMove);
        }

        let mover = self.current;
        let other = mover.other();
        let from = self.player(mover).position;

        self.players[mover.index()].step(direction);
        self.board.collect_gem(&mut self.players[mover.index()]);

        let to = self.player(mover).position;
        let other_pos = self.player(other).position;
        self.board
            .move_marker(mover.marker(), from, to, (other.marker(), other_pos));

        self.current = other;
        self.total_turns += 1;

        if self.total_turns >= MAX_TURNS {
            self.state = GameState::Over {
                outcome: self.outcome(),
            };
        }
        Ok(())
    }

    /// Compare gem counts: strictly more gems wins, equal is a tie.
    fn outcome(&self) -> Outcome {
        let one = self.player(PlayerId::One).gem_count;
        let two = self.player(PlayerId::Two).gem_count;
        if one > two {
            Outcome::Winner(PlayerId::One)
        } else if two > one {
            Outcome::Winner(PlayerId::Two)
        } else {
            Outcome::Tie
        }
    }
}
