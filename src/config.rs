//! Showcase settings, read from a `settings.toml` file.
//!
//! Every section and key is optional; anything missing falls back to the
//! values in [`crate::constants`].
//!
//! ```toml
//! [rotation]
//! interval_ms = 5000
//! cooldown_ms = 8000
//! hover_release = "honor_cooldown"
//!
//! [content]
//! image_dir = "public"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

use crate::constants::*;
use crate::contact::SubmissionSettings;
use crate::error::{Error, Result};
use crate::rotation::{HoverRelease, RotationTiming};

pub const CONFIG_FILE: &str = "settings.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub rotation: RotationConfig,
    pub window: WindowConfig,
    pub content: ContentConfig,
    pub contact: ContactConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationConfig {
    pub interval_ms: u64,
    pub cooldown_ms: u64,
    pub hover_release: HoverRelease,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            interval_ms: AUTO_ADVANCE_INTERVAL.as_millis() as u64,
            cooldown_ms: MANUAL_COOLDOWN.as_millis() as u64,
            hover_release: HoverRelease::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: i32,
    pub height: i32,
    pub fps: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self { width: RENDER_WIDTH, height: RENDER_HEIGHT, fps: FPS }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Directory holding the hero and gallery images.
    pub image_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub recipient: String,
    pub send_delay_ms: u64,
    pub reset_delay_ms: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            recipient: CONTACT_RECIPIENT.to_string(),
            send_delay_ms: CONTACT_SEND_DELAY.as_millis() as u64,
            reset_delay_ms: CONTACT_RESET_DELAY.as_millis() as u64,
        }
    }
}

impl Config {
    pub fn rotation_timing(&self) -> RotationTiming {
        RotationTiming::new(
            Duration::from_millis(self.rotation.interval_ms),
            Duration::from_millis(self.rotation.cooldown_ms),
            self.rotation.hover_release,
        )
    }

    pub fn submission_settings(&self) -> SubmissionSettings {
        SubmissionSettings {
            recipient: self.contact.recipient.clone(),
            send_delay: Duration::from_millis(self.contact.send_delay_ms),
            reset_delay: Duration::from_millis(self.contact.reset_delay_ms),
        }
    }

    /// Frame rate used by the window, never zero.
    pub fn fps(&self) -> u32 {
        self.window.fps.max(1)
    }
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let config = toml::from_str(&content)?;
    debug!(?path, "settings loaded");
    Ok(config)
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content).map_err(|e| Error::io(path, e))
}

/// Loads `explicit` if given (it must exist), otherwise `settings.toml` in
/// the working directory when present, otherwise the defaults.
pub fn load_or_default(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return load_from_path(path);
    }
    let local = Path::new(CONFIG_FILE);
    if local.exists() {
        return load_from_path(local);
    }
    info!("no {CONFIG_FILE} found, using built-in defaults");
    Ok(Config::default())
}
