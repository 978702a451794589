use std::fmt;

/// Game-specific error types
#[derive(Debug)]
pub enum GameError {
    /// Input did not parse as one of the four direction commands.
    InvalidDirection,
    /// Recognized direction, but the move is blocked by the board edge
    /// or an obstacle.
    BlockedMove,
    /// A move was submitted after the game already ended.
    GameOver,
    /// I/O error occurred
    IoError(std::io::Error),
}

/// Type alias for Results using GameError
pub type GameResult<T> = Result<T, GameError>;

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // The first two are user-facing warnings printed verbatim by the
        // game loop, so the wording is part of the console contract.
        match self {
            GameError::InvalidDirection => write!(f, "Invalid direction. Use U, D, L, or R."),
            GameError::BlockedMove => write!(f, "Invalid move. Try again."),
            GameError::GameOver => write!(f, "The game is already over"),
            GameError::IoError(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GameError {
    fn from(err: std::io::Error) -> Self {
        GameError::IoError(err)
    }
}
