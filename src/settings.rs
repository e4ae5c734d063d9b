//! Arcade settings
//!
//! Persisted as JSON in the local key-value store. Unknown or missing fields
//! fall back to defaults so older payloads keep loading.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::PersistError;
use crate::persistence::{KeyValueStore, load_json, save_json};

/// Arcade configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Step cap for every cabinet (frames per second)
    pub target_fps: u32,
    /// Flappy block spawn period (ms)
    pub spawn_interval_ms: f64,

    // === Automaton ===
    pub life_width: usize,
    pub life_height: usize,
    /// Fraction of cells alive after a reseed (0.0 - 1.0)
    pub life_density: f32,

    /// Keep best scores across page loads
    pub persist_best: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            target_fps: TARGET_FPS,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            life_width: LIFE_WIDTH,
            life_height: LIFE_HEIGHT,
            life_density: LIFE_DENSITY,
            persist_best: true,
        }
    }
}

impl Settings {
    /// Storage key
    const STORAGE_KEY: &'static str = "arcade_settings";

    /// Clamp values into ranges the simulations can run with
    pub fn sanitized(mut self) -> Self {
        self.target_fps = self.target_fps.clamp(1, 60);
        if !self.spawn_interval_ms.is_finite() || self.spawn_interval_ms < 250.0 {
            self.spawn_interval_ms = SPAWN_INTERVAL_MS;
        }
        self.life_width = self.life_width.clamp(1, SURFACE_SIZE as usize);
        self.life_height = self.life_height.clamp(1, SURFACE_SIZE as usize);
        self.life_density = if self.life_density.is_finite() {
            self.life_density.clamp(0.0, 1.0)
        } else {
            LIFE_DENSITY
        };
        self
    }

    /// Load from the store, falling back to defaults on absence or corruption
    pub fn load(store: &dyn KeyValueStore) -> Self {
        match load_json::<Settings>(store, Self::STORAGE_KEY) {
            Ok(Some(settings)) => {
                log::info!("Loaded settings from storage");
                settings.sanitized()
            }
            Ok(None) => {
                log::info!("Using default settings");
                Self::default()
            }
            Err(e) => {
                log::warn!("Ignoring stored settings: {}", e);
                Self::default()
            }
        }
    }

    pub fn save(&self, store: &mut dyn KeyValueStore) -> Result<(), PersistError> {
        save_json(store, Self::STORAGE_KEY, self)?;
        log::info!("Settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    #[test]
    fn test_defaults_match_constants() {
        let settings = Settings::default();
        assert_eq!(settings.target_fps, 12);
        assert_eq!(settings.spawn_interval_ms, 3000.0);
    }

    #[test]
    fn test_round_trip() {
        let mut store = MemoryStore::new();
        let settings = Settings {
            target_fps: 30,
            life_width: 25,
            ..Settings::default()
        };
        settings.save(&mut store).unwrap();
        assert_eq!(Settings::load(&store), settings);
    }

    #[test]
    fn test_partial_payload_fills_defaults() {
        let mut store = MemoryStore::new();
        store.set("arcade_settings", r#"{"target_fps": 24}"#).unwrap();
        let settings = Settings::load(&store);
        assert_eq!(settings.target_fps, 24);
        assert_eq!(settings.life_width, LIFE_WIDTH);
    }

    #[test]
    fn test_corrupt_payload_falls_back() {
        let mut store = MemoryStore::new();
        store.set("arcade_settings", r#"{"target_fps": "fast"}"#).unwrap();
        assert_eq!(Settings::load(&store), Settings::default());
    }

    #[test]
    fn test_out_of_range_values_clamped() {
        let mut store = MemoryStore::new();
        store
            .set(
                "arcade_settings",
                r#"{"target_fps": 0, "spawn_interval_ms": 5, "life_width": 5000, "life_density": 3.0}"#,
            )
            .unwrap();
        let settings = Settings::load(&store);
        assert_eq!(settings.target_fps, 1);
        assert_eq!(settings.spawn_interval_ms, SPAWN_INTERVAL_MS);
        assert_eq!(settings.life_width, 100);
        assert_eq!(settings.life_density, 1.0);
    }
}
