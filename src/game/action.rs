use super::config::Resolution;
use super::session::GameMode;
use crate::i18n::Language;

/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
                | (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
        )
    }

    /// Returns the delta (dx, dy) for moving in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Semantic command produced by the input layer and consumed by the engine.
///
/// The same physical key can mean different commands on different screens,
/// so the mapping from keys happens in [`crate::input::InputHandler`] with the
/// current screen in hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    TogglePause,
    Resume,
    Restart,
    Menu,
    /// `Q`: leaves the application from the menu, returns to the menu elsewhere
    Quit,
    /// `Esc`
    Back,
    StartMode(GameMode),
    OpenSettings,
    SetInterfaceLanguage(Language),
    SetContentLanguage(Language),
    SetResolution(Resolution),
    /// Leave the application from any screen
    Exit,
}

impl From<Direction> for Command {
    fn from(direction: Direction) -> Self {
        Command::Move(direction)
    }
}
