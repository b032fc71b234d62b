use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::{Command, Direction, GameMode, Resolution, Screen};
use crate::i18n::Language;

/// Maps key presses to [`Command`]s.
///
/// `R`, `M`, `Q` and `Esc` mean the same on every screen; everything else
/// depends on the screen, e.g. `S` opens settings in the menu but steers
/// down in the game.
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent, screen: Screen) -> Option<Command> {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Command::Exit);
        }

        match key.code {
            KeyCode::Char('r') | KeyCode::Char('R') => return Some(Command::Restart),
            KeyCode::Char('m') | KeyCode::Char('M') => return Some(Command::Menu),
            KeyCode::Char('q') | KeyCode::Char('Q') => return Some(Command::Quit),
            KeyCode::Esc => return Some(Command::Back),
            _ => {}
        }

        match screen {
            Screen::Menu => Self::menu_command(key.code),
            Screen::Settings => Self::settings_command(key.code),
            Screen::Game => Self::game_command(key.code),
            Screen::GameOver | Screen::QuizCompleted => None,
        }
    }

    fn menu_command(code: KeyCode) -> Option<Command> {
        match code {
            KeyCode::Char('1') => Some(Command::StartMode(GameMode::Classic)),
            KeyCode::Char('2') => Some(Command::StartMode(GameMode::Quiz)),
            KeyCode::Char('3') => Some(Command::StartMode(GameMode::WordCollection)),
            KeyCode::Char('s') | KeyCode::Char('S') => Some(Command::OpenSettings),
            _ => None,
        }
    }

    fn settings_command(code: KeyCode) -> Option<Command> {
        let command = match code {
            KeyCode::Char('1') => Command::SetInterfaceLanguage(Language::Russian),
            KeyCode::Char('2') => Command::SetInterfaceLanguage(Language::English),
            KeyCode::Char('3') => Command::SetInterfaceLanguage(Language::Korean),
            KeyCode::Char('4') => Command::SetContentLanguage(Language::Russian),
            KeyCode::Char('5') => Command::SetContentLanguage(Language::English),
            KeyCode::Char('6') => Command::SetContentLanguage(Language::Korean),
            KeyCode::Char('7') => Command::SetResolution(Resolution::R800x600),
            KeyCode::Char('8') => Command::SetResolution(Resolution::R1000x700),
            KeyCode::Char('9') => Command::SetResolution(Resolution::R1200x800),
            KeyCode::Char('0') => Command::SetResolution(Resolution::R1366x768),
            KeyCode::Char('-') => Command::SetResolution(Resolution::R1920x1080),
            _ => return None,
        };
        Some(command)
    }

    fn game_command(code: KeyCode) -> Option<Command> {
        if let Some(direction) = Self::direction(code) {
            return Some(direction.into());
        }

        match code {
            // Pause controls
            KeyCode::Char('c') | KeyCode::Char('C') => Some(Command::TogglePause),
            KeyCode::Char('v') | KeyCode::Char('V') => Some(Command::Resume),
            _ => None,
        }
    }

    fn direction(code: KeyCode) -> Option<Direction> {
        match code {
            // Movement - Arrow keys
            KeyCode::Up => Some(Direction::Up),
            KeyCode::Down => Some(Direction::Down),
            KeyCode::Left => Some(Direction::Left),
            KeyCode::Right => Some(Direction::Right),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => Some(Direction::Up),
            KeyCode::Char('s') | KeyCode::Char('S') => Some(Direction::Down),
            KeyCode::Char('a') | KeyCode::Char('A') => Some(Direction::Left),
            KeyCode::Char('d') | KeyCode::Char('D') => Some(Direction::Right),

            _ => None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrow_keys() {
        let handler = InputHandler::new();

        assert_eq!(
            handler.handle_key_event(key(KeyCode::Up), Screen::Game),
            Some(Command::Move(Direction::Up))
        );
        assert_eq!(
            handler.handle_key_event(key(KeyCode::Down), Screen::Game),
            Some(Command::Move(Direction::Down))
        );
        assert_eq!(
            handler.handle_key_event(key(KeyCode::Left), Screen::Game),
            Some(Command::Move(Direction::Left))
        );
        assert_eq!(
            handler.handle_key_event(key(KeyCode::Right), Screen::Game),
            Some(Command::Move(Direction::Right))
        );
    }

    #[test]
    fn test_wasd_keys() {
        let handler = InputHandler::new();

        assert_eq!(
            handler.handle_key_event(key(KeyCode::Char('w')), Screen::Game),
            Some(Command::Move(Direction::Up))
        );
        assert_eq!(
            handler.handle_key_event(key(KeyCode::Char('a')), Screen::Game),
            Some(Command::Move(Direction::Left))
        );
        assert_eq!(
            handler.handle_key_event(key(KeyCode::Char('s')), Screen::Game),
            Some(Command::Move(Direction::Down))
        );
        assert_eq!(
            handler.handle_key_event(key(KeyCode::Char('d')), Screen::Game),
            Some(Command::Move(Direction::Right))
        );
    }

    #[test]
    fn test_wasd_uppercase() {
        let handler = InputHandler::new();

        let w_upper = KeyEvent::new(KeyCode::Char('W'), KeyModifiers::SHIFT);
        assert_eq!(
            handler.handle_key_event(w_upper, Screen::Game),
            Some(Command::Move(Direction::Up))
        );
    }

    #[test]
    fn test_s_depends_on_screen() {
        let handler = InputHandler::new();

        assert_eq!(
            handler.handle_key_event(key(KeyCode::Char('s')), Screen::Menu),
            Some(Command::OpenSettings)
        );
        assert_eq!(
            handler.handle_key_event(key(KeyCode::Char('s')), Screen::Game),
            Some(Command::Move(Direction::Down))
        );
    }

    #[test]
    fn test_universal_keys() {
        let handler = InputHandler::new();

        for screen in [
            Screen::Menu,
            Screen::Settings,
            Screen::Game,
            Screen::GameOver,
            Screen::QuizCompleted,
        ] {
            assert_eq!(
                handler.handle_key_event(key(KeyCode::Char('q')), screen),
                Some(Command::Quit)
            );
            assert_eq!(
                handler.handle_key_event(key(KeyCode::Char('R')), screen),
                Some(Command::Restart)
            );
            assert_eq!(
                handler.handle_key_event(key(KeyCode::Char('m')), screen),
                Some(Command::Menu)
            );
            assert_eq!(
                handler.handle_key_event(key(KeyCode::Esc), screen),
                Some(Command::Back)
            );
        }
    }

    #[test]
    fn test_menu_digits_start_modes() {
        let handler = InputHandler::new();

        assert_eq!(
            handler.handle_key_event(key(KeyCode::Char('1')), Screen::Menu),
            Some(Command::StartMode(GameMode::Classic))
        );
        assert_eq!(
            handler.handle_key_event(key(KeyCode::Char('3')), Screen::Menu),
            Some(Command::StartMode(GameMode::WordCollection))
        );
    }

    #[test]
    fn test_settings_digits() {
        let handler = InputHandler::new();

        assert_eq!(
            handler.handle_key_event(key(KeyCode::Char('2')), Screen::Settings),
            Some(Command::SetInterfaceLanguage(Language::English))
        );
        assert_eq!(
            handler.handle_key_event(key(KeyCode::Char('6')), Screen::Settings),
            Some(Command::SetContentLanguage(Language::Korean))
        );
        assert_eq!(
            handler.handle_key_event(key(KeyCode::Char('0')), Screen::Settings),
            Some(Command::SetResolution(Resolution::R1366x768))
        );
        assert_eq!(
            handler.handle_key_event(key(KeyCode::Char('-')), Screen::Settings),
            Some(Command::SetResolution(Resolution::R1920x1080))
        );
    }

    #[test]
    fn test_pause_keys() {
        let handler = InputHandler::new();

        assert_eq!(
            handler.handle_key_event(key(KeyCode::Char('c')), Screen::Game),
            Some(Command::TogglePause)
        );
        assert_eq!(
            handler.handle_key_event(key(KeyCode::Char('v')), Screen::Game),
            Some(Command::Resume)
        );
    }

    #[test]
    fn test_unknown_key() {
        let handler = InputHandler::new();

        assert_eq!(
            handler.handle_key_event(key(KeyCode::Char('x')), Screen::Game),
            None
        );
        assert_eq!(
            handler.handle_key_event(key(KeyCode::Char('1')), Screen::GameOver),
            None
        );
    }

    #[test]
    fn test_ctrl_c() {
        let handler = InputHandler::new();

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(
            handler.handle_key_event(ctrl_c, Screen::Game),
            Some(Command::Exit)
        );
    }
}
