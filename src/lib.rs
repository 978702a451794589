//! Gem Hunters Game Engine
//!
//! A two-player, turn-based console game on a 6x6 grid. Players take
//! turns stepping up, down, left, or right, collecting the gems
//! scattered across the board while steering around obstacles. After
//! 30 accepted moves the hunter with the most gems wins.
//!
//! # Modules
//!
//! - [`game_engine`] - Turn state machine and termination logic
//! - [`models`] - Domain models (Board, Player, Position, etc.)
//! - [`services`] - The interactive game loop
//! - [`io`] - Input/output abstractions for testing
//! - [`ui`] - User interface and presentation logic
//!
//! # Example
//!
//! ```rust,no_run
//! use gemhunters::services::game::Game;
//!
//! let mut game = Game::new(42);
//! game.run().expect("game loop failed");
//! ```

pub mod cli;
pub mod game_engine;
pub mod io;
pub mod models;
pub mod services;
pub mod ui;

// Re-export commonly used types
pub use game_engine::{GameEngine, GameState, Outcome, PlayerId};
