//! Static game content: quiz questions and word-collection tables

pub mod quiz;
pub mod words;

pub use quiz::{questions, QuizQuestion};
pub use words::{random_letter, random_target_word, translate_word};
