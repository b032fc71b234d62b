pub mod renderer;
pub mod text;

pub use renderer::Renderer;
pub use text::{TerminalText, TextMeasure};
