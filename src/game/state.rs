use super::action::Direction;

/// A cell on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// Dimensions of the playing field in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
}

impl Grid {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Check if a position is within the grid bounds
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    /// Bring a position back onto the grid through the opposite edge
    pub fn wrap(&self, pos: Position) -> Position {
        Position::new(pos.x.rem_euclid(self.width), pos.y.rem_euclid(self.height))
    }

    pub fn center(&self) -> Position {
        Position::new(self.width / 2, self.height / 2)
    }

    pub fn cell_count(&self) -> usize {
        (self.width.max(0) as usize) * (self.height.max(0) as usize)
    }

    /// Every cell in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Position::new(x, y)))
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
    /// Current direction of movement
    pub direction: Direction,
    /// Set by [`Snake::grow`], consumed by the next move
    pub grow_pending: bool,
    grid: Grid,
}

impl Snake {
    /// Create a one-segment snake at `head` on `grid`
    pub fn new(head: Position, direction: Direction, grid: Grid) -> Self {
        Self {
            body: vec![grid.wrap(head)],
            direction,
            grow_pending: false,
            grid,
        }
    }

    /// Create a snake from explicit segments, head first
    pub fn from_segments(body: Vec<Position>, direction: Direction, grid: Grid) -> Self {
        Self {
            body,
            direction,
            grow_pending: false,
            grid,
        }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get body segments (excluding head)
    pub fn body_segments(&self) -> &[Position] {
        &self.body[1..]
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Check if any segment, head included, covers `pos`
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Move one cell in the current direction, wrapping through the walls.
    ///
    /// The tail is kept when growth is pending, so the snake gets one longer.
    pub fn move_snake(&mut self) {
        let new_head = self
            .grid
            .wrap(self.head().moved_in_direction(self.direction));
        self.body.insert(0, new_head);

        if self.grow_pending {
            self.grow_pending = false;
        } else {
            self.body.pop();
        }
    }

    /// Adopt `direction` unless it reverses the current one.
    ///
    /// Returns whether the direction was accepted.
    pub fn change_direction(&mut self, direction: Direction) -> bool {
        if self.direction.is_opposite(direction) {
            return false;
        }
        self.direction = direction;
        true
    }

    /// Grow by one segment on the next move
    pub fn grow(&mut self) {
        self.grow_pending = true;
    }

    /// True when the head shares a cell with another segment
    pub fn check_self_collision(&self) -> bool {
        self.body_segments().contains(&self.head())
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        Grid::new(10, 8)
    }

    #[test]
    fn test_position_movement() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.moved_by(1, 0), Position::new(6, 5));
        assert_eq!(pos.moved_by(-1, 0), Position::new(4, 5));
        assert_eq!(pos.moved_by(0, 1), Position::new(5, 6));
        assert_eq!(pos.moved_by(0, -1), Position::new(5, 4));
    }

    #[test]
    fn test_grid_wrap() {
        let grid = grid();
        assert_eq!(grid.wrap(Position::new(10, 3)), Position::new(0, 3));
        assert_eq!(grid.wrap(Position::new(-1, 3)), Position::new(9, 3));
        assert_eq!(grid.wrap(Position::new(4, 8)), Position::new(4, 0));
        assert_eq!(grid.wrap(Position::new(4, -1)), Position::new(4, 7));
        assert_eq!(grid.wrap(Position::new(4, 4)), Position::new(4, 4));
    }

    #[test]
    fn test_grid_cells() {
        let grid = Grid::new(3, 2);
        assert_eq!(grid.cell_count(), 6);
        let cells: Vec<Position> = grid.cells().collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[0], Position::new(0, 0));
        assert_eq!(cells[4], Position::new(1, 1));
    }

    #[test]
    fn test_snake_creation() {
        let snake = Snake::new(Position::new(5, 5), Direction::Right, grid());
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Position::new(5, 5));
        assert!(!snake.grow_pending);
    }

    #[test]
    fn test_snake_movement_keeps_length() {
        let mut snake = Snake::from_segments(
            vec![Position::new(5, 5), Position::new(4, 5), Position::new(3, 5)],
            Direction::Right,
            grid(),
        );

        snake.move_snake();
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(6, 5));
        assert_eq!(snake.body[2], Position::new(4, 5));
    }

    #[test]
    fn test_growth_applies_on_next_move() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right, grid());

        snake.grow();
        assert_eq!(snake.len(), 1);

        snake.move_snake();
        assert_eq!(snake.len(), 2);
        assert!(!snake.grow_pending);

        snake.move_snake();
        assert_eq!(snake.len(), 2);
    }

    #[test]
    fn test_movement_wraps_on_every_edge() {
        let grid = grid();
        let cases = [
            (Position::new(9, 3), Direction::Right, Position::new(0, 3)),
            (Position::new(0, 3), Direction::Left, Position::new(9, 3)),
            (Position::new(4, 7), Direction::Down, Position::new(4, 0)),
            (Position::new(4, 0), Direction::Up, Position::new(4, 7)),
        ];

        for (start, direction, expected) in cases {
            let mut snake = Snake::new(start, direction, grid);
            snake.move_snake();
            assert_eq!(snake.head(), expected);
            assert!(grid.contains(snake.head()));
        }
    }

    #[test]
    fn test_change_direction_rejects_reverse() {
        for current in Direction::ALL {
            for proposed in Direction::ALL {
                let mut snake = Snake::new(Position::new(5, 5), current, grid());
                let accepted = snake.change_direction(proposed);

                assert_eq!(accepted, !current.is_opposite(proposed));
                let expected = if accepted { proposed } else { current };
                assert_eq!(snake.direction, expected);
            }
        }
    }

    #[test]
    fn test_self_collision() {
        let single = Snake::new(Position::new(5, 5), Direction::Right, grid());
        assert!(!single.check_self_collision());

        let mut looped = Snake::from_segments(
            vec![
                Position::new(5, 5),
                Position::new(4, 5),
                Position::new(4, 6),
                Position::new(5, 6),
                Position::new(6, 6),
            ],
            Direction::Down,
            grid(),
        );
        assert!(!looped.check_self_collision());

        // Head moves onto (5, 6), which stays in the body after the tail pops
        looped.move_snake();
        assert!(looped.check_self_collision());
    }

    #[test]
    fn test_occupies() {
        let snake = Snake::from_segments(
            vec![Position::new(5, 5), Position::new(4, 5)],
            Direction::Right,
            grid(),
        );
        assert!(snake.occupies(Position::new(5, 5)));
        assert!(snake.occupies(Position::new(4, 5)));
        assert!(!snake.occupies(Position::new(3, 5)));
    }
}
