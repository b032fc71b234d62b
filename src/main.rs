use anyhow::{Context, Result};
use clap::Parser;
use clever_snake::app::PlayApp;
use clever_snake::game::{GameConfig, Resolution};
use clever_snake::i18n::Language;
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "clever_snake")]
#[command(version, about = "Snake game with quiz and word modes in three languages")]
struct Cli {
    /// JSON file with resolution and language settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Screen resolution; the grid is this size divided into 20px cells
    #[arg(long)]
    resolution: Option<Resolution>,

    /// Language of menus and labels
    #[arg(long)]
    interface_lang: Option<Language>,

    /// Language of quiz questions and collected letters
    #[arg(long)]
    content_lang: Option<Language>,

    /// Where to write the log; the terminal belongs to the game
    #[arg(long, default_value = "clever_snake.log")]
    log_file: PathBuf,

    /// Log at debug level
    #[arg(long)]
    debug: bool,
}

fn load_config(path: &Path) -> Result<GameConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse config file {}", path.display()))
}

fn build_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => GameConfig::default(),
    };

    if let Some(resolution) = cli.resolution {
        config.resolution = resolution;
    }
    if let Some(language) = cli.interface_lang {
        config.interface_language = language;
    }
    if let Some(language) = cli.content_lang {
        config.content_language = language;
    }

    Ok(config)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let log_file = File::create(&cli.log_file)
        .with_context(|| format!("Failed to create log file {}", cli.log_file.display()))?;
    WriteLogger::init(level, Config::default(), log_file).context("Failed to initialize logger")?;

    let config = build_config(&cli)?;
    info!(
        "Starting Clever Snake: {} grid {}x{}, interface {}, content {}",
        config.resolution.label(),
        config.grid().width,
        config.grid().height,
        config.interface_language.code(),
        config.content_language.code()
    );

    let mut app = PlayApp::new(config);
    app.run().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_defaults() {
        let cli = Cli::parse_from([
            "clever_snake",
            "--resolution",
            "800x600",
            "--interface-lang",
            "ko",
        ]);
        let config = build_config(&cli).unwrap();
        assert_eq!(config.resolution, Resolution::R800x600);
        assert_eq!(config.interface_language, Language::Korean);
        assert_eq!(config.content_language, Language::Russian);
    }

    #[test]
    fn test_cli_overrides_config_file() {
        let path = std::env::temp_dir().join("clever_snake_cli_test.json");
        fs::write(
            &path,
            r#"{"resolution": "1920x1080", "content_language": "en"}"#,
        )
        .unwrap();

        let cli = Cli::parse_from([
            "clever_snake",
            "--config",
            path.to_str().unwrap(),
            "--content-lang",
            "ko",
        ]);
        let config = build_config(&cli).unwrap();
        assert_eq!(config.resolution, Resolution::R1920x1080);
        assert_eq!(config.content_language, Language::Korean);
        assert_eq!(config.interface_language, Language::Russian);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_config_file_is_error() {
        let err = load_config(Path::new("/nonexistent/clever_snake.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
