//! Apples: the plain classic apple, numbered quiz answers and lettered word
//! apples, all sharing a position and a color tag.

use rand::Rng;

use super::state::{Grid, Position};
use crate::content::QuizQuestion;

/// Random draws tried per cell of the grid before falling back to a scan
const ATTEMPTS_PER_CELL: usize = 4;

/// An RGB color tag, mapped to a terminal color by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const RED: Color = Color::rgb(255, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Payload of a quiz apple: which answer of which question it stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizPayload {
    pub question: &'static QuizQuestion,
    /// 1-based position of this apple's answer in the shuffled answer list
    pub answer_number: usize,
}

/// Payload of a word apple
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordPayload {
    pub letter: char,
    pub is_correct: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppleKind {
    Plain,
    Quiz(QuizPayload),
    Word(WordPayload),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Apple {
    pub position: Position,
    pub color: Color,
    pub kind: AppleKind,
}

impl Apple {
    pub fn plain(position: Position) -> Self {
        Self {
            position,
            color: Color::RED,
            kind: AppleKind::Plain,
        }
    }

    pub fn quiz(position: Position, question: &'static QuizQuestion, answer_number: usize) -> Self {
        Self {
            position,
            color: Color::RED,
            kind: AppleKind::Quiz(QuizPayload {
                question,
                answer_number,
            }),
        }
    }

    /// Every word apple is red so the color never gives the correct one away
    pub fn word(position: Position, letter: char, is_correct: bool) -> Self {
        Self {
            position,
            color: Color::RED,
            kind: AppleKind::Word(WordPayload { letter, is_correct }),
        }
    }

    /// Uniformly random cell on `grid`, occupied or not
    pub fn generate_position<R: Rng + ?Sized>(grid: Grid, rng: &mut R) -> Position {
        Position::new(rng.gen_range(0..grid.width), rng.gen_range(0..grid.height))
    }

    /// Move to a cell not in `occupied`.
    ///
    /// Returns false, leaving the apple in place, when the grid has no free cell.
    pub fn respawn<R: Rng + ?Sized>(
        &mut self,
        grid: Grid,
        occupied: &[Position],
        rng: &mut R,
    ) -> bool {
        match free_position(grid, occupied, 0, rng) {
            Some(position) => {
                self.position = position;
                true
            }
            None => false,
        }
    }

    pub fn answer_number(&self) -> Option<usize> {
        match self.kind {
            AppleKind::Quiz(payload) => Some(payload.answer_number),
            _ => None,
        }
    }

    pub fn letter(&self) -> Option<char> {
        match self.kind {
            AppleKind::Word(payload) => Some(payload.letter),
            _ => None,
        }
    }

    pub fn is_correct_letter(&self) -> bool {
        matches!(
            self.kind,
            AppleKind::Word(WordPayload {
                is_correct: true,
                ..
            })
        )
    }

    /// Text drawn on top of the apple, if any
    pub fn label(&self) -> Option<String> {
        match self.kind {
            AppleKind::Plain => None,
            AppleKind::Quiz(payload) => Some(payload.answer_number.to_string()),
            AppleKind::Word(payload) => Some(payload.letter.to_string()),
        }
    }
}

/// Find a cell outside `occupied`, at least `margin` cells from every edge
/// when the grid is big enough for that.
///
/// Random draws are tried first, bounded by the grid size. If they all land
/// on occupied cells the region is scanned in row-major order, and finally
/// the whole grid. `None` means every cell is taken.
pub fn free_position<R: Rng + ?Sized>(
    grid: Grid,
    occupied: &[Position],
    margin: i32,
    rng: &mut R,
) -> Option<Position> {
    let margin = if grid.width > 2 * margin && grid.height > 2 * margin {
        margin.max(0)
    } else {
        0
    };
    let (min_x, max_x) = (margin, grid.width - margin);
    let (min_y, max_y) = (margin, grid.height - margin);

    if min_x >= max_x || min_y >= max_y {
        return None;
    }

    let region = Grid::new(max_x - min_x, max_y - min_y);
    let attempts = grid.cell_count() * ATTEMPTS_PER_CELL;
    for _ in 0..attempts {
        let pos = Apple::generate_position(region, rng).moved_by(margin, margin);
        if !occupied.contains(&pos) {
            return Some(pos);
        }
    }

    let in_region =
        |pos: &Position| pos.x >= min_x && pos.x < max_x && pos.y >= min_y && pos.y < max_y;

    grid.cells()
        .find(|pos| in_region(pos) && !occupied.contains(pos))
        .or_else(|| grid.cells().find(|pos| !occupied.contains(pos)))
}
