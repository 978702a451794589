//! Domain models
//!
//! This module contains all domain models representing game entities
//! and concepts. Models are pure data structures with minimal logic.

pub mod board;
pub mod constants;
pub mod direction;
pub mod errors;
pub mod player;
pub mod position;
