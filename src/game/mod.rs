//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies:
//! the snake, the apple family, the per-mode rules and the screen state machine.

pub mod action;
pub mod apple;
pub mod config;
pub mod engine;
pub mod session;
pub mod state;

// Re-export commonly used types
pub use action::{Command, Direction};
pub use apple::{Apple, AppleKind, Color, QuizPayload, WordPayload};
pub use config::{GameConfig, Resolution, CELL_SIZE, TICK_RATE};
pub use engine::{GameEngine, TickOutcome};
pub use session::{GameMode, QuestionId, QuizRound, Screen, Session, WordRound};
pub use state::{Grid, Position, Snake};
