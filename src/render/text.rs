//! Text measurement used by the presentation layer.
//!
//! A terminal has no fonts to probe; what the renderer needs is the column
//! width of a string, so that wide scripts (Hangul) and narrow ones (Latin,
//! Cyrillic, digits) both fill a two-column grid cell exactly.

use ratatui::text::Span;

/// Sample used to check that the terminal can lay out Korean text
pub const HANGUL_PROBE: &str = "한글";

pub trait TextMeasure {
    /// Width of `text` in terminal columns
    fn width(&self, text: &str) -> usize;

    /// Whether `text` takes up any room at all when drawn
    fn supports(&self, text: &str) -> bool {
        self.width(text) > 0
    }
}

/// Column widths as ratatui lays them out (Unicode East Asian width rules)
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalText;

impl TextMeasure for TerminalText {
    fn width(&self, text: &str) -> usize {
        Span::raw(text).width()
    }
}

/// Pad `glyph` with spaces to exactly `columns` columns.
///
/// Glyphs that are empty or too wide are replaced by `fallback`.
pub fn fit_cell<M: TextMeasure + ?Sized>(
    measure: &M,
    glyph: &str,
    columns: usize,
    fallback: char,
) -> String {
    let width = measure.width(glyph);
    if width == 0 || width > columns {
        let mut cell = fallback.to_string();
        cell.push_str(&" ".repeat(columns.saturating_sub(1)));
        return cell;
    }

    let mut cell = glyph.to_string();
    cell.push_str(&" ".repeat(columns - width));
    cell
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widths() {
        let text = TerminalText;
        assert_eq!(text.width("A"), 1);
        assert_eq!(text.width("Я"), 1);
        assert_eq!(text.width("사"), 2);
        assert_eq!(text.width(HANGUL_PROBE), 4);
        assert!(text.supports(HANGUL_PROBE));
        assert!(!text.supports(""));
    }

    #[test]
    fn test_fit_cell_pads_narrow_glyphs() {
        let text = TerminalText;
        assert_eq!(fit_cell(&text, "3", 2, '?'), "3 ");
        assert_eq!(fit_cell(&text, "Ж", 2, '?'), "Ж ");
    }

    #[test]
    fn test_fit_cell_keeps_wide_glyphs() {
        let text = TerminalText;
        assert_eq!(fit_cell(&text, "ㅏ", 2, '?'), "ㅏ");
        assert_eq!(fit_cell(&text, "과", 2, '?'), "과");
    }

    #[test]
    fn test_fit_cell_fallback() {
        let text = TerminalText;
        assert_eq!(fit_cell(&text, "", 2, '?'), "? ");
        assert_eq!(fit_cell(&text, "ABC", 2, '?'), "? ");
    }
}
