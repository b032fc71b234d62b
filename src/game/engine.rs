use log::{debug, info, warn};
use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::Rng;

use super::{
    action::Command,
    apple::{free_position, Apple},
    config::{GameConfig, Resolution},
    session::{GameMode, QuestionId, QuizRound, Screen, Session, WordRound},
};
use crate::content::{questions, random_letter, random_target_word, translate_word};
use crate::i18n::{Language, Localization};

/// Quiz apples keep this many cells away from every edge when the grid allows
const QUIZ_APPLE_MARGIN: i32 = 2;

/// Wrong word apples spawned alongside the correct one
const MIN_WRONG_LETTERS: usize = 2;
const MAX_WRONG_LETTERS: usize = 4;

/// What happened during one call to [`GameEngine::tick`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing advanced: not in a game, or paused
    Idle,
    /// The snake moved without touching an apple
    Moved,
    /// Classic apple eaten
    AteApple,
    /// Right quiz answer; a new question is up
    CorrectAnswer,
    /// Wrong quiz answer; the round is over
    WrongAnswer,
    /// Right quiz answer and no unused question left
    QuizCompleted,
    /// Correct letter eaten; the next letter is up
    LetterCollected,
    /// Correct letter eaten and it finished the word; a new word is up
    WordCompleted,
    /// Wrong letter eaten; the round is over
    WrongLetter,
    /// The head ran into the body
    SelfCollision,
    /// No free cell left to place an apple on
    BoardFull,
}

impl TickOutcome {
    /// Whether this outcome ended the session
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            TickOutcome::WrongAnswer
                | TickOutcome::QuizCompleted
                | TickOutcome::WrongLetter
                | TickOutcome::SelfCollision
                | TickOutcome::BoardFull
        )
    }
}

/// Result of building a new quiz question or word batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RoundSpawn {
    Ready,
    /// The word batch started a new word after finishing the previous one
    NewWord,
    Exhausted,
    BoardFull,
}

/// The game controller: owns the configuration, the current screen and the
/// active session, and advances the simulation one tick at a time.
pub struct GameEngine<R: Rng = ThreadRng> {
    config: GameConfig,
    localization: Localization,
    screen: Screen,
    session: Option<Session>,
    running: bool,
    sessions_started: u64,
    rng: R,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, rand::thread_rng())
    }
}

impl<R: Rng> GameEngine<R> {
    /// Create an engine drawing randomness from `rng`
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        Self {
            localization: Localization::new(config.interface_language),
            config,
            screen: Screen::Menu,
            session: None,
            running: true,
            sessions_started: 0,
            rng,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn localization(&self) -> &Localization {
        &self.localization
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut Session> {
        self.session.as_mut()
    }

    /// False once the player asked to leave the application
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Number of sessions started so far, restarts included
    pub fn sessions_started(&self) -> u64 {
        self.sessions_started
    }

    /// Apply one input command according to the current screen
    pub fn handle_command(&mut self, command: Command) {
        match (self.screen, command) {
            (_, Command::Exit) => self.running = false,

            (Screen::Menu, Command::StartMode(mode)) => self.start_game(mode),
            (Screen::Menu, Command::OpenSettings) => self.go_to(Screen::Settings),
            (Screen::Menu, Command::Quit) => {
                info!("Quit from menu");
                self.running = false;
            }

            (Screen::Settings, Command::SetInterfaceLanguage(language)) => {
                self.set_interface_language(language)
            }
            (Screen::Settings, Command::SetContentLanguage(language)) => {
                self.set_content_language(language)
            }
            (Screen::Settings, Command::SetResolution(resolution)) => {
                self.set_resolution(resolution)
            }
            (Screen::Settings, Command::Quit | Command::Back) => self.go_to(Screen::Menu),

            (Screen::Game, Command::Move(direction)) => {
                if let Some(session) = self.session.as_mut() {
                    session.pending_direction = Some(direction);
                }
            }
            (Screen::Game, Command::TogglePause) => {
                if let Some(session) = self.session.as_mut() {
                    session.paused = !session.paused;
                    debug!("Paused: {}", session.paused);
                }
            }
            (Screen::Game, Command::Resume) => {
                if let Some(session) = self.session.as_mut() {
                    session.paused = false;
                }
            }
            (Screen::Game, Command::Menu | Command::Quit | Command::Back) => {
                self.go_to(Screen::Menu)
            }

            (Screen::Game | Screen::GameOver, Command::Restart) => {
                if let Some(mode) = self.session.as_ref().map(|session| session.mode) {
                    self.start_game(mode);
                }
            }
            (Screen::QuizCompleted, Command::Restart) => self.start_game(GameMode::Quiz),
            (Screen::GameOver, Command::Menu) => self.go_to(Screen::Menu),
            (Screen::QuizCompleted, Command::Menu | Command::Back) => self.go_to(Screen::Menu),

            (screen, command) => debug!("Ignoring {:?} on {:?}", command, screen),
        }
    }

    /// Start a new session in `mode` and switch to the game screen
    pub fn start_game(&mut self, mode: GameMode) {
        let grid = self.config.grid();
        let mut session = Session::new(
            mode,
            grid,
            self.config.interface_language,
            self.config.content_language,
        );
        self.sessions_started += 1;

        info!(
            "Starting {:?} on {}x{} grid (interface {}, content {})",
            mode,
            grid.width,
            grid.height,
            session.interface_language.code(),
            session.content_language.code()
        );

        let spawn = match mode {
            GameMode::Classic => {
                match free_position(grid, &session.snake.body, 0, &mut self.rng) {
                    Some(position) => {
                        session.apples = vec![Apple::plain(position)];
                        RoundSpawn::Ready
                    }
                    None => RoundSpawn::BoardFull,
                }
            }
            GameMode::Quiz => spawn_quiz_round(&mut session, &mut self.rng),
            GameMode::WordCollection => spawn_word_batch(&mut session, &mut self.rng),
        };

        self.session = Some(session);
        self.screen = match spawn {
            RoundSpawn::Ready | RoundSpawn::NewWord => Screen::Game,
            RoundSpawn::Exhausted => Screen::QuizCompleted,
            RoundSpawn::BoardFull => Screen::GameOver,
        };
    }

    /// Advance the simulation by one step.
    ///
    /// Does nothing unless the game screen is up and not paused.
    pub fn tick(&mut self) -> TickOutcome {
        if self.screen != Screen::Game {
            return TickOutcome::Idle;
        }
        let Some(session) = self.session.as_mut() else {
            return TickOutcome::Idle;
        };
        if session.paused {
            return TickOutcome::Idle;
        }

        if let Some(direction) = session.pending_direction.take() {
            session.snake.change_direction(direction);
        }
        session.snake.move_snake();

        if session.snake.check_self_collision() {
            info!("Self collision at {:?}, score {}", session.snake.head(), session.score);
            self.screen = Screen::GameOver;
            return TickOutcome::SelfCollision;
        }

        let outcome = match session.mode {
            GameMode::Classic => resolve_classic(session, &mut self.rng),
            GameMode::Quiz => resolve_quiz(session, &mut self.rng),
            GameMode::WordCollection => resolve_word(session, &mut self.rng),
        };

        session.tick_result_timer();

        match outcome {
            TickOutcome::QuizCompleted => {
                info!("All questions answered, score {}", session.score);
                self.screen = Screen::QuizCompleted;
            }
            outcome if outcome.is_terminal() => {
                info!("Round over ({:?}), score {}", outcome, session.score);
                self.screen = Screen::GameOver;
            }
            _ => {}
        }

        outcome
    }

    pub fn set_resolution(&mut self, resolution: Resolution) {
        info!("Resolution set to {}", resolution.label());
        self.config.resolution = resolution;
    }

    pub fn set_interface_language(&mut self, language: Language) {
        info!("Interface language set to {}", language.code());
        self.config.interface_language = language;
        self.localization.set_language(language);
    }

    pub fn set_content_language(&mut self, language: Language) {
        info!("Content language set to {}", language.code());
        self.config.content_language = language;
    }

    fn go_to(&mut self, screen: Screen) {
        debug!("Screen {:?} -> {:?}", self.screen, screen);
        self.screen = screen;
    }
}

fn resolve_classic<R: Rng + ?Sized>(session: &mut Session, rng: &mut R) -> TickOutcome {
    let head = session.snake.head();
    let Some(apple) = session.apples.first_mut() else {
        return TickOutcome::Moved;
    };
    if apple.position != head {
        return TickOutcome::Moved;
    }

    session.snake.grow();
    session.score += 1;

    if apple.respawn(session.grid, &session.snake.body, rng) {
        TickOutcome::AteApple
    } else {
        warn!("No free cell left for the apple");
        TickOutcome::BoardFull
    }
}

fn resolve_quiz<R: Rng + ?Sized>(session: &mut Session, rng: &mut R) -> TickOutcome {
    let head = session.snake.head();
    let Some(answer) = session
        .apple_at(head)
        .and_then(|index| session.apples[index].answer_number())
    else {
        return TickOutcome::Moved;
    };

    session.snake.grow();

    let correct = session
        .quiz
        .as_ref()
        .is_some_and(|round| round.correct_number == answer);
    if !correct {
        info!("Wrong answer {}", answer);
        return TickOutcome::WrongAnswer;
    }

    session.score += 10;
    session.show_result(true);

    match spawn_quiz_round(session, rng) {
        RoundSpawn::Exhausted => TickOutcome::QuizCompleted,
        RoundSpawn::BoardFull => TickOutcome::BoardFull,
        RoundSpawn::Ready | RoundSpawn::NewWord => TickOutcome::CorrectAnswer,
    }
}

fn resolve_word<R: Rng + ?Sized>(session: &mut Session, rng: &mut R) -> TickOutcome {
    let head = session.snake.head();
    let Some(apple) = session.apple_at(head).map(|index| session.apples[index]) else {
        return TickOutcome::Moved;
    };

    if !apple.is_correct_letter() {
        info!("Wrong letter {:?}", apple.letter());
        return TickOutcome::WrongLetter;
    }

    session.snake.grow();
    if let Some(letter) = apple.letter() {
        session.collected_letters.push(letter);
    }
    session.score += 1;

    match spawn_word_batch(session, rng) {
        RoundSpawn::NewWord => TickOutcome::WordCompleted,
        RoundSpawn::Ready => TickOutcome::LetterCollected,
        RoundSpawn::BoardFull | RoundSpawn::Exhausted => TickOutcome::BoardFull,
    }
}

/// Pick an unused question, shuffle its answers and lay out one apple per
/// answer. Replaces the previous quiz apples.
fn spawn_quiz_round<R: Rng + ?Sized>(session: &mut Session, rng: &mut R) -> RoundSpawn {
    let language = session.content_language;
    let bank = questions(language);
    let available: Vec<usize> = (0..bank.len())
        .filter(|&index| {
            !session
                .used_questions
                .contains(&QuestionId { language, index })
        })
        .collect();

    let Some(&index) = available.choose(rng) else {
        return RoundSpawn::Exhausted;
    };
    let id = QuestionId { language, index };
    session.used_questions.insert(id);

    let question = &bank[index];
    let all_answers = question.answers();

    // Index 0 of `all_answers` is the correct one
    let mut order: Vec<usize> = (0..all_answers.len()).collect();
    order.shuffle(rng);
    let answers: Vec<&'static str> = order.iter().map(|&i| all_answers[i]).collect();
    let correct_number = order.iter().position(|&i| i == 0).map_or(1, |pos| pos + 1);

    let mut occupied = session.snake.body.clone();
    let mut apples = Vec::with_capacity(answers.len());
    for number in 1..=answers.len() {
        let Some(position) = free_position(session.grid, &occupied, QUIZ_APPLE_MARGIN, rng)
        else {
            warn!("No free cell left for quiz answer {}", number);
            return RoundSpawn::BoardFull;
        };
        occupied.push(position);
        apples.push(Apple::quiz(position, question, number));
    }

    debug!(
        "Question {} ({}), correct answer {}",
        index,
        language.code(),
        correct_number
    );

    session.apples = apples;
    session.quiz = Some(QuizRound {
        id,
        question,
        answers,
        correct_number,
    });
    RoundSpawn::Ready
}

/// Lay out the apples for the next letter of the current word, starting a
/// new word first when none is in progress or the current one is complete.
fn spawn_word_batch<R: Rng + ?Sized>(session: &mut Session, rng: &mut R) -> RoundSpawn {
    let mut new_word = false;

    loop {
        if session.word.is_none() {
            let Some(target) = random_target_word(session.interface_language, rng) else {
                return RoundSpawn::Exhausted;
            };
            let spelling = translate_word(
                target,
                session.interface_language,
                session.content_language,
            );
            if spelling.is_empty() {
                return RoundSpawn::Exhausted;
            }
            info!("New word {} ({})", target, spelling);
            session.word = Some(WordRound::new(target, spelling));
            session.collected_letters.clear();
        }

        let word_len = session.word.as_ref().map_or(0, |word| word.letters.len());
        if session.collected_letters.len() >= word_len {
            session.score += 10;
            session.word = None;
            session.collected_letters.clear();
            new_word = true;
            continue;
        }
        break;
    }

    let Some(correct) = session
        .word
        .as_ref()
        .and_then(|word| word.letters.get(session.collected_letters.len()).copied())
    else {
        return RoundSpawn::Exhausted;
    };

    let mut occupied = session.snake.body.clone();
    let Some(position) = free_position(session.grid, &occupied, 0, rng) else {
        warn!("No free cell left for letter {}", correct);
        return RoundSpawn::BoardFull;
    };
    occupied.push(position);
    let mut apples = vec![Apple::word(position, correct, true)];

    let wrong_count = rng.gen_range(MIN_WRONG_LETTERS..=MAX_WRONG_LETTERS);
    for _ in 0..wrong_count {
        let mut letter = random_letter(session.content_language, rng);
        while letter == correct {
            letter = random_letter(session.content_language, rng);
        }
        let Some(position) = free_position(session.grid, &occupied, 0, rng) else {
            break;
        };
        occupied.push(position);
        apples.push(Apple::word(position, letter, false));
    }

    session.apples = apples;
    if new_word {
        RoundSpawn::NewWord
    } else {
        RoundSpawn::Ready
    }
}
