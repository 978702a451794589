//! Game services
//!
//! This module contains the interactive game loop that wires the turn
//! engine to the input and output collaborators.

pub mod game;
