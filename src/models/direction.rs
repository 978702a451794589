use super::errors::{GameError, GameResult};

/// A single-step move command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The (dx, dy) unit delta. Up decreases y, Left decreases x.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Map a command character to a direction. Only the uppercase
    /// letters U, D, L, R are recognized.
    pub fn from_char(c: char) -> Option<Direction> {
        match c {
            'U' => Some(Direction::Up),
            'D' => Some(Direction::Down),
            'L' => Some(Direction::Left),
            'R' => Some(Direction::Right),
            _ => None,
        }
    }

    /// Parse a raw input line. The trimmed line must be exactly one
    /// recognized command character.
    pub fn parse(input: &str) -> GameResult<Direction> {
        let mut chars = input.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Direction::from_char(c).ok_or(GameError::InvalidDirection),
            _ => Err(GameError::InvalidDirection),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_the_four_commands() {
        assert_eq!(Direction::parse("U").unwrap(), Direction::Up);
        assert_eq!(Direction::parse("D").unwrap(), Direction::Down);
        assert_eq!(Direction::parse("L").unwrap(), Direction::Left);
        assert_eq!(Direction::parse("R").unwrap(), Direction::Right);
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(Direction::parse("  R\n").unwrap(), Direction::Right);
    }

    #[test]
    fn rejects_everything_else() {
        for bad in ["", "u", "X", "UD", "up", " 5 "] {
            assert!(matches!(
                Direction::parse(bad),
                Err(GameError::InvalidDirection)
            ));
        }
    }
}
