//! Clever Snake - a terminal Snake game with quiz and word-collection modes
//!
//! This library provides:
//! - Core game logic and the screen state machine (game module)
//! - Interface strings in Russian, English and Korean (i18n module)
//! - Quiz questions and vocabulary (content module)
//! - Keyboard mapping, TUI rendering and run statistics (input, render, metrics)
//! - The interactive terminal loop (app module)

pub mod app;
pub mod content;
pub mod game;
pub mod i18n;
pub mod input;
pub mod metrics;
pub mod render;
