use super::constants::BOARD_SIZE;
use super::direction::Direction;
use super::position::Position;

/// One of the two gem hunters.
pub struct Player {
    /// Display name, fixed at creation.
    pub name: String,
    pub position: Position,
    /// Gems collected so far. Never decreases during a game.
    pub gem_count: u32,
}

impl Player {
    pub fn new(name: &str, position: Position) -> Self {
        Player {
            name: name.to_string(),
            position,
            gem_count: 0,
        }
    }

    /// Take one step in `direction`, clamped to the board on both axes.
    /// Stepping against an edge is a silent no-op on that axis; obstacle
    /// rejection happens one layer up, on the board.
    pub fn step(&mut self, direction: Direction) {
        let (dx, dy) = direction.delta();
        let max = BOARD_SIZE as i32 - 1;
        self.position.x = (self.position.x + dx).clamp(0, max);
        self.position.y = (self.position.y + dy).clamp(0, max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_moves_one_cell() {
        let mut player = Player::new("P1", Position { x: 2, y: 2 });
        player.step(Direction::Up);
        assert_eq!(player.position, Position { x: 2, y: 1 });
        player.step(Direction::Right);
        assert_eq!(player.position, Position { x: 3, y: 1 });
    }

    #[test]
    fn step_clamps_at_the_edges() {
        let mut player = Player::new("P1", Position { x: 0, y: 0 });
        player.step(Direction::Up);
        player.step(Direction::Left);
        assert_eq!(player.position, Position { x: 0, y: 0 });

        let mut player = Player::new("P2", Position { x: 5, y: 5 });
        player.step(Direction::Down);
        player.step(Direction::Right);
        assert_eq!(player.position, Position { x: 5, y: 5 });
    }
}
