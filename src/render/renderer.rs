use rand::Rng;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use super::text::{fit_cell, TerminalText, TextMeasure};
use crate::game::{
    Apple, AppleKind, GameEngine, GameMode, Position, Resolution, Screen, Session,
};
use crate::i18n::{Language, Localization};
use crate::metrics::GameMetrics;

/// Terminal columns per grid cell
const CELL_COLUMNS: usize = 2;

/// Rows taken by the header and footer together
const CHROME_ROWS: u16 = 6;

/// Border cells around the grid on each axis
const GRID_BORDER: u16 = 2;

/// Draws the current screen of a [`GameEngine`] with ratatui
pub struct Renderer<M: TextMeasure = TerminalText> {
    text: M,
}

impl Renderer {
    pub fn new() -> Self {
        Self::with_measure(TerminalText)
    }
}

impl<M: TextMeasure> Renderer<M> {
    pub fn with_measure(text: M) -> Self {
        Self { text }
    }

    pub fn render<R: Rng>(
        &self,
        frame: &mut Frame,
        engine: &GameEngine<R>,
        metrics: &GameMetrics,
    ) {
        let loc = engine.localization();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Screen body
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let body = chunks[1];
        match (engine.screen(), engine.session()) {
            (Screen::Game, Some(session)) if !self.session_fits(frame.area(), loc, session) => {
                let area = frame.area();
                let needed = self.required_size(loc, session);
                frame.render_widget(self.render_too_small(loc, needed, area), area);
                return;
            }
            (Screen::Game, Some(session)) => {
                frame.render_widget(self.render_stats(loc, session, metrics), chunks[0]);
                self.render_game(frame, body, loc, session);
            }
            (Screen::GameOver, Some(session)) => {
                frame.render_widget(self.render_game_over(loc, session), body);
            }
            (Screen::QuizCompleted, Some(session)) => {
                frame.render_widget(self.render_quiz_completed(loc, session), body);
            }
            (Screen::Settings, _) => {
                frame.render_widget(self.render_settings(loc, engine), body);
            }
            _ => {
                frame.render_widget(self.render_menu(loc), body);
            }
        }

        let controls = self.render_controls(loc, engine.screen());
        frame.render_widget(controls, chunks[2]);
    }

    /// Whether `area` can show the current screen without clipping the board
    pub fn fits<R: Rng>(&self, area: Rect, engine: &GameEngine<R>) -> bool {
        match (engine.screen(), engine.session()) {
            (Screen::Game, Some(session)) => {
                self.session_fits(area, engine.localization(), session)
            }
            _ => true,
        }
    }

    /// Columns and rows needed to draw `session` with its panels
    pub fn required_size(&self, loc: &Localization, session: &Session) -> (u16, u16) {
        let info_height = self
            .render_round_info(loc, session)
            .map_or(0, |(_, height)| height);
        let width = session.grid.width.max(0) as u16;
        let height = session.grid.height.max(0) as u16;
        let columns = width * CELL_COLUMNS as u16 + GRID_BORDER;
        let rows = height + GRID_BORDER + CHROME_ROWS + info_height;
        (columns, rows)
    }

    fn session_fits(&self, area: Rect, loc: &Localization, session: &Session) -> bool {
        let (columns, rows) = self.required_size(loc, session);
        area.width >= columns && area.height >= rows
    }

    fn render_too_small(
        &self,
        loc: &Localization,
        (columns, rows): (u16, u16),
        area: Rect,
    ) -> Paragraph<'static> {
        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                loc.get_text("too_small").to_string(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!("{}x{} / {}x{}", area.width, area.height, columns, rows),
                Style::default().fg(Color::Yellow),
            )),
            Line::from(loc.get_text("resize_hint").to_string()),
            Line::from(""),
            Line::from(Span::styled(
                format!("M - {}", loc.get_text("back_to_menu")),
                Style::default().fg(Color::Gray),
            )),
        ];

        Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
    }

    fn render_game(&self, frame: &mut Frame, area: Rect, loc: &Localization, session: &Session) {
        let info = self.render_round_info(loc, session);
        let info_height = info.as_ref().map_or(0, |(_, height)| *height);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(info_height), Constraint::Min(0)])
            .split(area);

        if let Some((panel, _)) = info {
            frame.render_widget(panel, rows[0]);
        }

        let grid = self.render_grid(loc, session);
        frame.render_widget(grid, rows[1]);
    }

    fn render_grid(&self, loc: &Localization, session: &Session) -> Paragraph<'static> {
        let mut lines = Vec::new();

        for y in 0..session.grid.height {
            let mut spans = Vec::new();

            for x in 0..session.grid.width {
                let pos = Position::new(x, y);

                let cell = if pos == session.snake.head() {
                    Span::styled(
                        "██",
                        Style::default()
                            .fg(Color::Rgb(0, 150, 0))
                            .add_modifier(Modifier::BOLD),
                    )
                } else if session.snake.occupies(pos) {
                    Span::styled("██", Style::default().fg(Color::Green))
                } else if let Some(apple) = session.apples.iter().find(|a| a.position == pos) {
                    self.render_apple(apple)
                } else {
                    // Empty cell
                    Span::styled(". ", Style::default().fg(Color::DarkGray))
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        let title = format!(" {} ", loc.get_text(session.mode.title_key()));

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(title),
            )
            .alignment(Alignment::Center)
    }

    fn render_apple(&self, apple: &Apple) -> Span<'static> {
        let color = Color::Rgb(apple.color.r, apple.color.g, apple.color.b);
        match apple.kind {
            AppleKind::Plain => Span::styled(
                fit_cell(&self.text, "●", CELL_COLUMNS, 'o'),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            AppleKind::Quiz(_) | AppleKind::Word(_) => {
                let label = apple.label().unwrap_or_default();
                Span::styled(
                    fit_cell(&self.text, &label, CELL_COLUMNS, '?'),
                    Style::default()
                        .fg(Color::White)
                        .bg(color)
                        .add_modifier(Modifier::BOLD),
                )
            }
        }
    }

    /// Question or word panel shown above the grid, with its height
    fn render_round_info(
        &self,
        loc: &Localization,
        session: &Session,
    ) -> Option<(Paragraph<'static>, u16)> {
        let mut lines = Vec::new();

        match session.mode {
            GameMode::Classic => {}
            GameMode::Quiz => {
                let round = session.quiz.as_ref()?;
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("{}: ", loc.get_text("question")),
                        Style::default().fg(Color::Yellow),
                    ),
                    Span::styled(
                        round.question.question.to_string(),
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]));
                for (i, answer) in round.answers.iter().enumerate() {
                    lines.push(Line::from(format!("{}. {}", i + 1, answer)));
                }
            }
            GameMode::WordCollection => {
                let word = session.word.as_ref()?;
                let collected: String = session.collected_letters.iter().collect();
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("{}: ", loc.get_text("word")),
                        Style::default().fg(Color::Yellow),
                    ),
                    Span::styled(
                        word.target.to_string(),
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]));
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("{}: ", loc.get_text("collect_word")),
                        Style::default().fg(Color::Yellow),
                    ),
                    Span::styled(collected, Style::default().fg(Color::Green)),
                ]));
            }
        }

        if let Some(correct) = session.quiz_result {
            let (key, color) = if correct {
                ("correct", Color::Green)
            } else {
                ("wrong", Color::Red)
            };
            lines.push(Line::from(Span::styled(
                loc.get_text(key).to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )));
        }

        if session.paused {
            lines.push(Line::from(Span::styled(
                loc.get_text("pause").to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )));
        }

        if lines.is_empty() {
            return None;
        }

        let height = lines.len() as u16;
        let panel = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        Some((panel, height))
    }

    fn render_stats(
        &self,
        loc: &Localization,
        session: &Session,
        metrics: &GameMetrics,
    ) -> Paragraph<'static> {
        let text = vec![Line::from(vec![
            Span::styled(
                format!("{}: ", loc.get_text("score")),
                Style::default().fg(Color::Yellow),
            ),
            Span::styled(
                session.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled(
                format!("{}: ", loc.get_text("best_score")),
                Style::default().fg(Color::Yellow),
            ),
            Span::styled(
                metrics.best_for(session.mode).max(session.score).to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled(
                format!("{}: ", loc.get_text("time")),
                Style::default().fg(Color::Yellow),
            ),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_menu(&self, loc: &Localization) -> Paragraph<'static> {
        let mut text = vec![
            Line::from(""),
            Line::from(Span::styled(
                loc.get_text("title").to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        for (i, mode) in GameMode::ALL.iter().enumerate() {
            text.push(Line::from(format!(
                "{}. {}",
                i + 1,
                loc.get_text(mode.title_key())
            )));
        }

        text.push(Line::from(""));
        text.push(Line::from(Span::styled(
            loc.get_text("play").to_string(),
            Style::default().fg(Color::Green),
        )));
        text.push(Line::from(Span::styled(
            format!("S. {}", loc.get_text("settings")),
            Style::default().fg(Color::Yellow),
        )));
        text.push(Line::from(Span::styled(
            format!("Q. {}", loc.get_text("exit")),
            Style::default().fg(Color::Red),
        )));

        text.push(Line::from(""));
        text.push(Line::from(Span::styled(
            loc.get_text("controls").to_string(),
            Style::default().fg(Color::Gray),
        )));
        for key in [
            "up",
            "down",
            "left",
            "right",
            "pause_key",
            "resume_key",
            "quit_key",
        ] {
            text.push(Line::from(Span::styled(
                loc.get_text(key).to_string(),
                Style::default().fg(Color::DarkGray),
            )));
        }

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
    }

    fn render_settings<R: Rng>(
        &self,
        loc: &Localization,
        engine: &GameEngine<R>,
    ) -> Paragraph<'static> {
        let config = engine.config();
        let heading = |key: &str| {
            Line::from(Span::styled(
                loc.get_text(key).to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ))
        };
        let option = |key: String, label: &str, selected: bool| {
            let color = if selected { Color::Green } else { Color::Gray };
            Line::from(Span::styled(
                format!("{}. {}", key, label),
                Style::default().fg(color),
            ))
        };

        let mut text = vec![
            Line::from(""),
            heading("settings"),
            Line::from(""),
            heading("interface_lang"),
        ];
        for (i, language) in Language::ALL.iter().enumerate() {
            text.push(option(
                (i + 1).to_string(),
                language.native_name(),
                *language == loc.language(),
            ));
        }

        text.push(Line::from(""));
        text.push(heading("game_lang"));
        for (i, language) in Language::ALL.iter().enumerate() {
            text.push(option(
                (i + 4).to_string(),
                language.native_name(),
                *language == config.content_language,
            ));
        }

        text.push(Line::from(""));
        text.push(heading("resolution"));
        for (key, resolution) in ["7", "8", "9", "0", "-"].iter().zip(Resolution::ALL) {
            text.push(option(
                key.to_string(),
                resolution.label(),
                resolution == config.resolution,
            ));
        }

        text.push(Line::from(""));
        text.push(Line::from(Span::styled(
            loc.get_text("back_hint").to_string(),
            Style::default().fg(Color::DarkGray),
        )));

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
    }

    fn render_game_over(&self, loc: &Localization, session: &Session) -> Paragraph<'static> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                loc.get_text("game_over").to_string(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            self.final_score_line(loc, session),
            Line::from(""),
            self.restart_line(loc),
            self.menu_line(loc),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_quiz_completed(&self, loc: &Localization, session: &Session) -> Paragraph<'static> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                loc.get_text("well_done").to_string(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(loc.get_text("all_answered").to_string()),
            self.final_score_line(loc, session),
            Line::from(""),
            self.restart_line(loc),
            self.menu_line(loc),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        )
    }

    fn final_score_line(&self, loc: &Localization, session: &Session) -> Line<'static> {
        Line::from(vec![
            Span::styled(
                format!("{}: ", loc.get_text("final_score")),
                Style::default().fg(Color::Yellow),
            ),
            Span::styled(
                session.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
    }

    fn restart_line(&self, loc: &Localization) -> Line<'static> {
        Line::from(Span::styled(
            format!("R. {}", loc.get_text("restart")),
            Style::default().fg(Color::Green),
        ))
    }

    fn menu_line(&self, loc: &Localization) -> Line<'static> {
        Line::from(Span::styled(
            format!("M. {}", loc.get_text("back_to_menu")),
            Style::default().fg(Color::Yellow),
        ))
    }

    fn render_controls(&self, loc: &Localization, screen: Screen) -> Paragraph<'static> {
        let spans = match screen {
            Screen::Game => vec![
                Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
                Span::raw(" / "),
                Span::styled("WASD", Style::default().fg(Color::Cyan)),
                Span::raw(" | "),
                Span::styled(
                    loc.get_text("pause_key").to_string(),
                    Style::default().fg(Color::Yellow),
                ),
                Span::raw(" | "),
                Span::styled(
                    loc.get_text("resume_key").to_string(),
                    Style::default().fg(Color::Yellow),
                ),
                Span::raw(" | "),
                Span::styled(
                    format!("R - {}", loc.get_text("restart")),
                    Style::default().fg(Color::Green),
                ),
                Span::raw(" | "),
                Span::styled(
                    format!("M - {}", loc.get_text("back_to_menu")),
                    Style::default().fg(Color::Red),
                ),
            ],
            Screen::Menu => vec![Span::styled(
                loc.get_text("quit_key").to_string(),
                Style::default().fg(Color::Red),
            )],
            Screen::Settings => vec![Span::styled(
                loc.get_text("back_hint").to_string(),
                Style::default().fg(Color::Gray),
            )],
            Screen::GameOver | Screen::QuizCompleted => vec![
                Span::styled("R", Style::default().fg(Color::Green)),
                Span::raw(" / "),
                Span::styled("M", Style::default().fg(Color::Yellow)),
            ],
        };

        Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Command, GameConfig};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(engine: &GameEngine<StdRng>) -> String {
        draw_sized(engine, 120, 60)
    }

    fn draw_sized(engine: &GameEngine<StdRng>, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        let renderer = Renderer::new();
        let metrics = GameMetrics::new();
        terminal
            .draw(|frame| renderer.render(frame, engine, &metrics))
            .unwrap();

        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    /// Foreground color of the first cell where `text` is drawn
    fn fg_of(engine: &GameEngine<StdRng>, text: &str) -> Option<Color> {
        let backend = TestBackend::new(120, 60);
        let mut terminal = Terminal::new(backend).unwrap();
        let renderer = Renderer::new();
        let metrics = GameMetrics::new();
        terminal
            .draw(|frame| renderer.render(frame, engine, &metrics))
            .unwrap();

        let cells = terminal.backend().buffer().content();
        let wanted: Vec<String> = text.chars().map(|c| c.to_string()).collect();
        (0..cells.len().saturating_sub(wanted.len()))
            .find(|&i| {
                wanted
                    .iter()
                    .enumerate()
                    .all(|(j, symbol)| cells[i + j].symbol() == symbol)
            })
            .map(|i| cells[i].fg)
    }

    fn english_engine() -> GameEngine<StdRng> {
        english_engine_at(Resolution::R800x600)
    }

    fn english_engine_at(resolution: Resolution) -> GameEngine<StdRng> {
        let config = GameConfig {
            interface_language: Language::English,
            content_language: Language::English,
            ..GameConfig::new(resolution)
        };
        GameEngine::with_rng(config, StdRng::seed_from_u64(1))
    }

    #[test]
    fn test_menu_lists_modes() {
        let engine = english_engine();
        let screen = draw(&engine);
        assert!(screen.contains("Clever Snake"));
        assert!(screen.contains("1. Classic Snake"));
        assert!(screen.contains("3. Snake with Words"));
    }

    #[test]
    fn test_settings_screen() {
        let mut engine = english_engine();
        engine.handle_command(Command::OpenSettings);
        let screen = draw(&engine);
        assert!(screen.contains("Interface Language"));
        assert!(screen.contains("1920x1080"));
    }

    #[test]
    fn test_settings_highlight_current_languages() {
        let mut engine = english_engine();
        engine.handle_command(Command::OpenSettings);
        engine.handle_command(Command::SetContentLanguage(Language::Russian));

        assert_eq!(fg_of(&engine, "2. English"), Some(Color::Green));
        assert_eq!(fg_of(&engine, "1. Русский"), Some(Color::Gray));
        assert_eq!(fg_of(&engine, "4. Русский"), Some(Color::Green));
        assert_eq!(fg_of(&engine, "5. English"), Some(Color::Gray));
        assert_eq!(fg_of(&engine, "7. 800x600"), Some(Color::Green));
    }

    #[test]
    fn test_game_shows_score_and_question() {
        let mut engine = english_engine();
        engine.handle_command(Command::StartMode(GameMode::Quiz));
        let screen = draw(&engine);
        assert!(screen.contains("Score: 0"));
        assert!(screen.contains("Question:"));
    }

    #[test]
    fn test_game_over_screen() {
        let mut engine = english_engine();
        engine.handle_command(Command::StartMode(GameMode::Classic));
        let session = engine.session_mut().unwrap();
        session.score = 12;
        session.snake = crate::game::Snake::from_segments(
            vec![
                Position::new(5, 5),
                Position::new(4, 5),
                Position::new(4, 6),
                Position::new(5, 6),
                Position::new(6, 6),
            ],
            crate::game::Direction::Right,
            session.grid,
        );
        session.apples.clear();
        engine.handle_command(Command::Move(crate::game::Direction::Down));
        engine.tick();

        assert_eq!(engine.screen(), Screen::GameOver);
        let screen = draw(&engine);
        assert!(screen.contains("Game Over"));
        assert!(screen.contains("Final Score: 12"));
    }
    #[test]
    fn test_small_terminal_shows_resize_message() {
        let mut engine = english_engine_at(Resolution::R1000x700);
        engine.handle_command(Command::StartMode(GameMode::Classic));

        let renderer = Renderer::new();
        assert!(!renderer.fits(Rect::new(0, 0, 80, 24), &engine));

        let screen = draw_sized(&engine, 80, 24);
        assert!(screen.contains("Terminal window too small"));
        assert!(screen.contains("80x24 / 102x43"));
        assert!(!screen.contains("Score:"));
    }

    #[test]
    fn test_board_drawn_when_terminal_fits() {
        let mut engine = english_engine_at(Resolution::R1000x700);
        engine.handle_command(Command::StartMode(GameMode::Classic));

        let renderer = Renderer::new();
        assert!(renderer.fits(Rect::new(0, 0, 102, 43), &engine));
        assert!(!renderer.fits(Rect::new(0, 0, 101, 43), &engine));
        assert!(!renderer.fits(Rect::new(0, 0, 102, 42), &engine));

        let screen = draw_sized(&engine, 102, 43);
        assert!(!screen.contains("Terminal window too small"));
        assert!(screen.contains("Score: 0"));
        assert!(screen.contains("██"));
        assert!(screen.contains("●"));
    }

    #[test]
    fn test_quiz_panel_counts_toward_required_rows() {
        let mut engine = english_engine();
        engine.handle_command(Command::StartMode(GameMode::Quiz));
        let session = engine.session().unwrap();
        let answers = session.quiz.as_ref().unwrap().answers.len() as u16;

        let renderer = Renderer::new();
        let (columns, rows) = renderer.required_size(engine.localization(), session);
        assert_eq!(columns, 82);
        assert_eq!(rows, 30 + GRID_BORDER + CHROME_ROWS + 1 + answers);
    }

    #[test]
    fn test_menu_always_fits() {
        let engine = english_engine();
        let renderer = Renderer::new();
        assert!(renderer.fits(Rect::new(0, 0, 20, 10), &engine));
    }
}
