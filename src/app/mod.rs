//! Interactive terminal application

pub mod play;

pub use play::PlayApp;
