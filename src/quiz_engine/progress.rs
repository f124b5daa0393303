//! Player progress: stars and level per game.
//!
//! Sessions emit [`ProgressDelta`]s; a [`ProgressSink`] applies them. The
//! in-memory [`Progress`] store is the default sink and round-trips through
//! JSON so a host app can persist it however it likes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::quiz_engine::{
    error::QuizError,
    models::{GameType, ProgressDelta},
};

pub const DEFAULT_PLAYER_NAME: &str = "Teman";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameProgress {
    pub stars: u32,
    /// Current level, starting at 1.
    pub level: u32,
    /// Number of sessions finished.
    pub completed: u32,
}

impl Default for GameProgress {
    fn default() -> Self {
        GameProgress { stars: 0, level: 1, completed: 0 }
    }
}

/// Receiver for the deltas a session emits.
pub trait ProgressSink {
    fn add_stars(&mut self, game: GameType, amount: u32);
    fn complete_level(&mut self, game: GameType);

    fn apply(&mut self, delta: &ProgressDelta) {
        match *delta {
            ProgressDelta::AddStars { game, amount } => self.add_stars(game, amount),
            ProgressDelta::CompleteLevel { game }    => self.complete_level(game),
        }
    }

    fn apply_all(&mut self, deltas: &[ProgressDelta]) {
        for d in deltas {
            self.apply(d);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Progress {
    pub player_name: String,
    pub games: BTreeMap<GameType, GameProgress>,
}

impl Default for Progress {
    fn default() -> Self {
        Progress {
            player_name: DEFAULT_PLAYER_NAME.to_string(),
            games: BTreeMap::new(),
        }
    }
}

impl Progress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Progress for `game`; untouched games report the defaults.
    pub fn game(&self, game: GameType) -> GameProgress {
        self.games.get(&game).copied().unwrap_or_default()
    }

    pub fn level(&self, game: GameType) -> u32 {
        self.game(game).level
    }

    pub fn stars(&self, game: GameType) -> u32 {
        self.game(game).stars
    }

    pub fn total_stars(&self) -> u32 {
        self.games.values().map(|g| g.stars).sum()
    }

    pub fn to_json(&self) -> Result<String, QuizError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(s: &str) -> Result<Self, QuizError> {
        Ok(serde_json::from_str(s)?)
    }

    fn entry(&mut self, game: GameType) -> &mut GameProgress {
        self.games.entry(game).or_default()
    }
}

impl ProgressSink for Progress {
    fn add_stars(&mut self, game: GameType, amount: u32) {
        let g = self.entry(game);
        g.stars = g.stars.saturating_add(amount);
    }

    fn complete_level(&mut self, game: GameType) {
        let g = self.entry(game);
        g.completed += 1;
        g.level += 1;
        debug!(game = ?game, level = g.level, "level up");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_progress_starts_at_level_one() {
        let p = Progress::new();
        assert_eq!(p.player_name, "Teman");
        for game in GameType::ALL {
            assert_eq!(p.level(game), 1);
            assert_eq!(p.stars(game), 0);
        }
        assert_eq!(p.total_stars(), 0);
    }

    #[test]
    fn deltas_accumulate_per_game() {
        let mut p = Progress::new();
        p.apply_all(&[
            ProgressDelta::AddStars { game: GameType::Counting, amount: 1 },
            ProgressDelta::AddStars { game: GameType::Counting, amount: 1 },
            ProgressDelta::AddStars { game: GameType::Story, amount: 1 },
            ProgressDelta::CompleteLevel { game: GameType::Counting },
        ]);
        assert_eq!(p.stars(GameType::Counting), 2);
        assert_eq!(p.level(GameType::Counting), 2);
        assert_eq!(p.game(GameType::Counting).completed, 1);
        assert_eq!(p.level(GameType::Story), 1);
        assert_eq!(p.total_stars(), 3);
    }

    #[test]
    fn json_round_trip_keeps_everything() {
        let mut p = Progress::new();
        p.player_name = "Sari".into();
        p.add_stars(GameType::Reading, 4);
        p.complete_level(GameType::Reading);

        let back = Progress::from_json(&p.to_json().unwrap()).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let p = Progress::from_json("{}").unwrap();
        assert_eq!(p, Progress::new());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(Progress::from_json("not json"), Err(QuizError::Json(_))));
    }
}
