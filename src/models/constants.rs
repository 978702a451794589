/// Board edge length. The playing field is a fixed 6x6 grid.
pub const BOARD_SIZE: usize = 6;

/// Gem placement attempts during board generation.
pub const NUM_GEMS: usize = 4;
/// Obstacles placed during board generation.
pub const NUM_OBSTACLES: usize = 4;

/// Accepted moves before the game ends and gem counts are compared.
pub const MAX_TURNS: u32 = 30;

pub const PLAYER1_NAME: &str = "P1";
pub const PLAYER2_NAME: &str = "P2";

/// Starting coordinates: player 1 in the upper-left corner,
/// player 2 in the lower-right.
pub const PLAYER1_START: (i32, i32) = (0, 0);
pub const PLAYER2_START: (i32, i32) = (5, 5);

/// Contents of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occupant {
    Empty,
    Player1,
    Player2,
    Gem,
    Obstacle,
}

impl Occupant {
    pub fn symbol(&self) -> &'static str {
        match self {
            Occupant::Empty => "-",
            Occupant::Player1 => "P1",
            Occupant::Player2 => "P2",
            Occupant::Gem => "G",
            Occupant::Obstacle => "O",
        }
    }
}
