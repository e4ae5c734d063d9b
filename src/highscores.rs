//! Best score tracking
//!
//! One best value per cabinet, persisted to the local key-value store.

use serde::{Deserialize, Serialize};

use crate::error::PersistError;
use crate::persistence::{KeyValueStore, load_json, save_json};

/// Cabinets that keep a best score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArcadeGame {
    Snake,
    Flappy,
    Pong,
}

impl ArcadeGame {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArcadeGame::Snake => "Snake",
            ArcadeGame::Flappy => "Flappy",
            ArcadeGame::Pong => "Pong",
        }
    }
}

/// Best score per cabinet
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BestScores {
    /// Longest snake
    pub snake: u32,
    /// Most blocks passed
    pub flappy: u32,
    /// Longest rally
    pub pong: u32,
}

impl BestScores {
    /// Storage key
    const STORAGE_KEY: &'static str = "arcade_best_scores";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, game: ArcadeGame) -> u32 {
        match game {
            ArcadeGame::Snake => self.snake,
            ArcadeGame::Flappy => self.flappy,
            ArcadeGame::Pong => self.pong,
        }
    }

    /// Record a score. Returns true if it beat the previous best.
    pub fn record(&mut self, game: ArcadeGame, score: u32) -> bool {
        let slot = match game {
            ArcadeGame::Snake => &mut self.snake,
            ArcadeGame::Flappy => &mut self.flappy,
            ArcadeGame::Pong => &mut self.pong,
        };
        if score > *slot {
            *slot = score;
            true
        } else {
            false
        }
    }

    /// Load from the store, starting fresh on absence or corruption
    pub fn load(store: &dyn KeyValueStore) -> Self {
        match load_json::<BestScores>(store, Self::STORAGE_KEY) {
            Ok(Some(scores)) => {
                log::info!(
                    "Loaded best scores (snake {}, flappy {}, pong {})",
                    scores.snake,
                    scores.flappy,
                    scores.pong
                );
                scores
            }
            Ok(None) => {
                log::info!("No best scores found, starting fresh");
                Self::new()
            }
            Err(e) => {
                log::warn!("Ignoring stored best scores: {}", e);
                Self::new()
            }
        }
    }

    pub fn save(&self, store: &mut dyn KeyValueStore) -> Result<(), PersistError> {
        save_json(store, Self::STORAGE_KEY, self)
    }
}
