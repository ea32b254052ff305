use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use trailmate::{PlaybackSpeed, TrailmateError};

use super::REFRESH_RATE_MS;

const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub(crate) struct WindowSize {
    pub(crate) width: f32,
    pub(crate) height: f32,
}

impl Default for WindowSize {
    fn default() -> Self {
        Self {
            width: 1280.,
            height: 800.,
        }
    }
}

/// Viewer preferences. Only ever read; the recap viewer never writes them back.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub(crate) struct ViewerConfig {
    pub(crate) refresh_rate_ms: u64,
    pub(crate) default_speed: PlaybackSpeed,
    pub(crate) default_journey: Option<String>,
    pub(crate) show_environment_chart: bool,
    pub(crate) window_size: WindowSize,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            refresh_rate_ms: REFRESH_RATE_MS,
            default_speed: PlaybackSpeed::Normal,
            default_journey: None,
            show_environment_chart: false,
            window_size: WindowSize::default(),
        }
    }
}

impl ViewerConfig {
    pub(crate) fn config_path() -> Result<PathBuf, TrailmateError> {
        Ok(dirs::config_dir()
            .ok_or(TrailmateError::NoConfigDir)?
            .join("trailmate")
            .join(CONFIG_FILE_NAME))
    }

    /// Read the config file from the platform config directory, `None` when there is none
    pub(crate) fn from_local_file() -> Result<Option<Self>, TrailmateError> {
        Self::from_path(&Self::config_path()?)
    }

    pub(crate) fn from_path(config_path: &Path) -> Result<Option<Self>, TrailmateError> {
        if !config_path.exists() {
            debug!("No config file at {:?}", config_path);
            return Ok(None);
        }

        let file = std::fs::File::open(config_path)
            .map_err(|e| TrailmateError::ConfigIOError { source: e })?;
        let config = serde_json::from_reader(std::io::BufReader::new(file))
            .map_err(|e| TrailmateError::ConfigParseError { source: e })?;
        Ok(Some(config))
    }
}
