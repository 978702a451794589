use rand::rngs::StdRng;
use rand::Rng;

use super::constants::{
    Occupant, BOARD_SIZE, NUM_GEMS, PLAYER1_START, PLAYER2_START,
};
use super::direction::Direction;
use super::player::Player;
use super::position::Position;

/// The 6x6 playing field.
pub struct Board {
    /// Grid of cell contents. Indexed grid[y][x].
    grid: [[Occupant; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// An all-empty board with no markers placed. Useful for staging
    /// exact layouts in tests; real games go through [`Board::generate`].
    pub fn new() -> Self {
        Board {
            grid: [[Occupant::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Generate the starting layout: player markers in opposite corners,
    /// then four rounds of one gem plus one obstacle.
    ///
    /// Placement keeps the original relaxed policy: a gem lands on a
    /// uniformly random cell and overwrites whatever is there (another
    /// gem, an obstacle from an earlier round, even a player marker),
    /// while an obstacle re-rolls until it finds an empty cell. The
    /// start corners are never empty during generation, so obstacles
    /// cannot land on them.
    pub fn generate(rng: &mut StdRng) -> Self {
        let mut board = Board::new();

        let (x, y) = PLAYER1_START;
        board.set(Position { x, y }, Occupant::Player1);
        let (x, y) = PLAYER2_START;
        board.set(Position { x, y }, Occupant::Player2);

        for _ in 0..NUM_GEMS {
            let pos = Self::random_position(rng);
            board.set(pos, Occupant::Gem);

            let mut pos = Self::random_position(rng);
            while board.occupant(pos) != Occupant::Empty {
                pos = Self::random_position(rng);
            }
            board.set(pos, Occupant::Obstacle);
        }

        board
    }

    fn random_position(rng: &mut StdRng) -> Position {
        Position {
            x: rng.gen_range(0..BOARD_SIZE as i32),
            y: rng.gen_range(0..BOARD_SIZE as i32),
        }
    }

    /// Whether (x, y) lies on the board.
    pub fn in_bounds(x: i32, y: i32) -> bool {
        (0..BOARD_SIZE as i32).contains(&x) && (0..BOARD_SIZE as i32).contains(&y)
    }

    /// The content of the cell at `pos`. `pos` must be in bounds.
    pub fn occupant(&self, pos: Position) -> Occupant {
        self.grid[pos.y as usize][pos.x as usize]
    }

    /// Set the content of the cell at `pos`. `pos` must be in bounds.
    pub fn set(&mut self, pos: Position, occupant: Occupant) {
        self.grid[pos.y as usize][pos.x as usize] = occupant;
    }

    /// Whether the player may take one step in `direction` from its
    /// current position: the destination must lie on the board and must
    /// not hold an obstacle. The destination may hold the other player;
    /// overlapping is allowed.
    pub fn is_valid_move(&self, player: &Player, direction: Direction) -> bool {
        let (dx, dy) = direction.delta();
        let x = player.position.x + dx;
        let y = player.position.y + dy;
        Self::in_bounds(x, y) && self.occupant(Position { x, y }) != Occupant::Obstacle
    }

    /// Award the gem under the player's current position, if any: bump
    /// the player's count and clear the cell. No-op on any other cell
    /// content, so a second call at the same position does nothing.
    pub fn collect_gem(&mut self, player: &mut Player) {
        if self.occupant(player.position) == Occupant::Gem {
            player.gem_count += 1;
            self.set(player.position, Occupant::Empty);
        }
    }

    /// Reflect an accepted move on the grid: clear the departed cell and
    /// stamp `marker` on the destination. The departed cell is only
    /// cleared when it still shows the mover; if the other player stands
    /// on it as well, its marker is restored instead of emptying the
    /// cell.
    pub fn move_marker(
        &mut self,
        marker: Occupant,
        from: Position,
        to: Position,
        other: (Occupant, Position),
    ) {
        if self.occupant(from) == marker {
            let (other_marker, other_pos) = other;
            let vacated = if other_pos == from {
                other_marker
            } else {
                Occupant::Empty
            };
            self.set(from, vacated);
        }
        self.set(to, marker);
    }

    /// Render row `y` for display: each cell symbol followed by one
    /// space, trailing space included.
    pub fn render_row(&self, y: usize) -> String {
        (0..BOARD_SIZE)
            .map(|x| format!("{} ", self.grid[y][x].symbol()))
            .collect()
    }

    /// Number of cells currently holding `occupant`.
    pub fn count(&self, occupant: Occupant) -> usize {
        self.grid
            .iter()
            .flatten()
            .filter(|&&cell| cell == occupant)
            .count()
    }
}
