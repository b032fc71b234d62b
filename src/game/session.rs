use std::collections::HashSet;

use super::action::Direction;
use super::apple::Apple;
use super::state::{Grid, Position, Snake};
use crate::content::QuizQuestion;
use crate::i18n::Language;

/// Ticks the "Correct!" banner stays up after a right quiz answer
pub const RESULT_DISPLAY_TICKS: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameMode {
    Classic,
    Quiz,
    WordCollection,
}

impl GameMode {
    /// All modes in main-menu order
    pub const ALL: [GameMode; 3] = [GameMode::Classic, GameMode::Quiz, GameMode::WordCollection];

    /// Localization key of the mode's title
    pub fn title_key(&self) -> &'static str {
        match self {
            GameMode::Classic => "classic_mode",
            GameMode::Quiz => "quiz_mode",
            GameMode::WordCollection => "word_mode",
        }
    }
}

/// Which screen the application is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Menu,
    Settings,
    Game,
    GameOver,
    QuizCompleted,
}

/// Stable identity of a question: its language and index in that bank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuestionId {
    pub language: Language,
    pub index: usize,
}

/// The active quiz question
#[derive(Debug, Clone, PartialEq)]
pub struct QuizRound {
    pub id: QuestionId,
    pub question: &'static QuizQuestion,
    /// Answers in shuffled order; apple `n` carries `answers[n - 1]`
    pub answers: Vec<&'static str>,
    /// 1-based number of the correct answer
    pub correct_number: usize,
}

/// The word being collected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordRound {
    /// Target as shown to the player, in the interface language
    pub target: &'static str,
    /// Target spelled in the content language; these letters are collected
    pub spelling: String,
    pub letters: Vec<char>,
}

impl WordRound {
    pub fn new(target: &'static str, spelling: String) -> Self {
        let letters = spelling.chars().collect();
        Self {
            target,
            spelling,
            letters,
        }
    }
}

/// Mutable state of one play-through in one mode
#[derive(Debug, Clone)]
pub struct Session {
    pub mode: GameMode,
    pub interface_language: Language,
    pub content_language: Language,
    pub grid: Grid,
    pub snake: Snake,
    /// Every apple currently on the field
    pub apples: Vec<Apple>,
    pub score: u32,
    pub paused: bool,
    /// Last direction requested since the previous tick
    pub pending_direction: Option<Direction>,
    pub quiz: Option<QuizRound>,
    pub word: Option<WordRound>,
    pub collected_letters: Vec<char>,
    pub used_questions: HashSet<QuestionId>,
    /// `Some(true)` while the "Correct!" banner is shown
    pub quiz_result: Option<bool>,
    pub result_timer: u32,
}

impl Session {
    /// Fresh session with the snake at the grid center and no apples yet
    pub fn new(
        mode: GameMode,
        grid: Grid,
        interface_language: Language,
        content_language: Language,
    ) -> Self {
        Self {
            mode,
            interface_language,
            content_language,
            grid,
            snake: Snake::new(grid.center(), Direction::Right, grid),
            apples: Vec::new(),
            score: 0,
            paused: false,
            pending_direction: None,
            quiz: None,
            word: None,
            collected_letters: Vec::new(),
            used_questions: HashSet::new(),
            quiz_result: None,
            result_timer: 0,
        }
    }

    /// Index of the apple at `pos`, if any
    pub fn apple_at(&self, pos: Position) -> Option<usize> {
        self.apples.iter().position(|apple| apple.position == pos)
    }

    /// Cells covered by the snake or any apple
    pub fn occupied_cells(&self) -> Vec<Position> {
        self.snake
            .body
            .iter()
            .copied()
            .chain(self.apples.iter().map(|apple| apple.position))
            .collect()
    }

    /// Show the quiz result banner for [`RESULT_DISPLAY_TICKS`]
    pub fn show_result(&mut self, correct: bool) {
        self.quiz_result = Some(correct);
        self.result_timer = RESULT_DISPLAY_TICKS;
    }

    /// Count the banner down by one tick, clearing it at zero
    pub fn tick_result_timer(&mut self) {
        if self.result_timer > 0 {
            self.result_timer -= 1;
            if self.result_timer == 0 {
                self.quiz_result = None;
            }
        }
    }
}
