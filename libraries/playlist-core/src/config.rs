//! Playlist editing configuration

use crate::error::{PlaylistError, Result};
use crate::validation::PLAYLIST_MAX_SIZE;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default configuration file name
pub const CONFIG_FILE: &str = "playlist.toml";

/// Environment variable prefix (`PLAYLIST_MAX_TRACKS`, ...)
pub const ENV_PREFIX: &str = "PLAYLIST";

/// Limits applied by the editing service
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PlaylistConfig {
    /// Largest number of tracks a playlist may hold
    #[serde(default = "default_max_tracks")]
    pub max_tracks: usize,
}

fn default_max_tracks() -> usize {
    PLAYLIST_MAX_SIZE
}

impl Default for PlaylistConfig {
    fn default() -> Self {
        Self {
            max_tracks: default_max_tracks(),
        }
    }
}

impl PlaylistConfig {
    /// Load configuration from `playlist.toml` and the environment
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Load configuration from a file (if it exists) and the environment
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut settings = config::Config::builder();

        if path.exists() {
            settings = settings.add_source(config::File::from(path));
        }

        // Override with environment variables (prefixed with PLAYLIST_)
        settings = settings.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: Self = settings.build()?.try_deserialize()?;
        config.validate()?;

        tracing::debug!(max_tracks = config.max_tracks, "Loaded playlist configuration");

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.max_tracks == 0 || self.max_tracks > PLAYLIST_MAX_SIZE {
            return Err(PlaylistError::config(format!(
                "max_tracks must be between 1 and {PLAYLIST_MAX_SIZE}, got {}",
                self.max_tracks
            )));
        }
        Ok(())
    }
}
