use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::game::GameMode;

/// Per-run statistics shown in the game header. Nothing is persisted.
#[derive(Debug, Clone)]
pub struct GameMetrics {
    /// Set while the session clock is running
    running_since: Option<Instant>,
    /// Time banked before the clock was last stopped
    banked: Duration,
    pub elapsed_time: Duration,
    pub high_score: u32,
    pub games_played: u32,
    best_by_mode: HashMap<GameMode, u32>,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            running_since: None,
            banked: Duration::ZERO,
            elapsed_time: Duration::ZERO,
            high_score: 0,
            games_played: 0,
            best_by_mode: HashMap::new(),
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.banked
            + self
                .running_since
                .map_or(Duration::ZERO, |since| since.elapsed());
    }

    pub fn on_game_start(&mut self) {
        self.banked = Duration::ZERO;
        self.elapsed_time = Duration::ZERO;
        self.running_since = Some(Instant::now());
    }

    /// Stop or restart the clock; pausing twice is harmless
    pub fn set_paused(&mut self, paused: bool) {
        match (paused, self.running_since) {
            (true, Some(since)) => {
                self.banked += since.elapsed();
                self.running_since = None;
            }
            (false, None) => self.running_since = Some(Instant::now()),
            _ => {}
        }
        self.update();
    }

    pub fn on_game_over(&mut self, mode: GameMode, final_score: u32) {
        self.set_paused(true);
        self.games_played += 1;
        if final_score > self.high_score {
            self.high_score = final_score;
        }

        let best = self.best_by_mode.entry(mode).or_insert(0);
        *best = (*best).max(final_score);
    }

    /// Best score reached in `mode` during this run
    pub fn best_for(&self, mode: GameMode) -> u32 {
        self.best_by_mode.get(&mode).copied().unwrap_or(0)
    }

    pub fn is_clock_running(&self) -> bool {
        self.running_since.is_some()
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        let mut metrics = GameMetrics::new();
        metrics.elapsed_time = Duration::from_secs(125);
        assert_eq!(metrics.format_time(), "02:05");

        metrics.elapsed_time = Duration::from_secs(0);
        assert_eq!(metrics.format_time(), "00:00");

        metrics.elapsed_time = Duration::from_secs(3661);
        assert_eq!(metrics.format_time(), "61:01");
    }

    #[test]
    fn test_high_score_tracking() {
        let mut metrics = GameMetrics::new();

        metrics.on_game_over(GameMode::Classic, 10);
        assert_eq!(metrics.high_score, 10);
        assert_eq!(metrics.games_played, 1);

        metrics.on_game_over(GameMode::Quiz, 5);
        assert_eq!(metrics.high_score, 10); // Should not decrease
        assert_eq!(metrics.best_for(GameMode::Quiz), 5);
        assert_eq!(metrics.games_played, 2);

        metrics.on_game_over(GameMode::Classic, 15);
        assert_eq!(metrics.high_score, 15);
        assert_eq!(metrics.best_for(GameMode::Classic), 15);
        assert_eq!(metrics.best_for(GameMode::WordCollection), 0);
        assert_eq!(metrics.games_played, 3);
    }

    #[test]
    fn test_clock_idle_until_game_start() {
        let mut metrics = GameMetrics::new();
        std::thread::sleep(Duration::from_millis(20));
        metrics.update();
        assert_eq!(metrics.elapsed_time, Duration::ZERO);
        assert!(!metrics.is_clock_running());
    }

    #[test]
    fn test_game_start_resets_time() {
        let mut metrics = GameMetrics::new();
        metrics.on_game_start();
        std::thread::sleep(Duration::from_millis(50));
        metrics.update();
        assert!(metrics.elapsed_time.as_millis() >= 50);

        metrics.on_game_start();
        metrics.update();
        assert!(metrics.elapsed_time.as_millis() < 50);
    }

    #[test]
    fn test_pause_freezes_clock() {
        let mut metrics = GameMetrics::new();
        metrics.on_game_start();
        std::thread::sleep(Duration::from_millis(20));
        metrics.set_paused(true);
        let frozen = metrics.elapsed_time;
        assert!(frozen.as_millis() >= 20);

        std::thread::sleep(Duration::from_millis(30));
        metrics.update();
        assert_eq!(metrics.elapsed_time, frozen);

        metrics.set_paused(false);
        assert!(metrics.is_clock_running());
        metrics.update();
        assert!(metrics.elapsed_time >= frozen);
    }

    #[test]
    fn test_game_over_stops_clock() {
        let mut metrics = GameMetrics::new();
        metrics.on_game_start();
        metrics.on_game_over(GameMode::Classic, 3);
        assert!(!metrics.is_clock_running());
    }
}
