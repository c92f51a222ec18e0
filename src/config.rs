//! Configuration loading.
//!
//! Settings come from a TOML file: either the path given on the command line or
//! `<config_dir>/navtoggle/config.toml`. Every key is optional and falls back to the
//! built-in page.
//!
//! ```toml
//! theme = "monochrome"
//! poll_interval_ms = 50
//!
//! [vm]
//! label = "VM"
//! title = "Welcome"
//! body = ["Pick a section from the bar above."]
//!
//! [nes]
//! body_file = "content/nes.txt"
//! ```

use crate::error::{NavToggleError, Result};
use crate::ui::ColorTheme;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const DEFAULT_POLL_INTERVAL_MS: u64 = 50;
const MAX_POLL_INTERVAL_MS: u64 = 1000;

/// Effective application configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppConfig {
    /// Theme name, see [`ColorTheme::by_name`]
    pub theme: String,
    /// Input poll interval in milliseconds
    pub poll_interval_ms: u64,
    pub vm: SectionConfig,
    pub nes: SectionConfig,
}

/// Content of one page section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionConfig {
    /// Text of the navigation trigger
    pub label: String,
    /// Title drawn on the region border
    pub title: String,
    pub body: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    theme: Option<String>,
    poll_interval_ms: Option<u64>,
    vm: Option<RawSection>,
    nes: Option<RawSection>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSection {
    label: Option<String>,
    title: Option<String>,
    body: Option<Vec<String>>,
    body_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: "default".to_string(),
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            vm: SectionConfig {
                label: "VM".to_string(),
                title: "Welcome".to_string(),
                body: vec![
                    "Welcome!".to_string(),
                    String::new(),
                    "Use the navigation bar above to switch sections.".to_string(),
                    "VM toggles this text; NES brings up the music notes.".to_string(),
                ],
            },
            nes: SectionConfig {
                label: "NES".to_string(),
                title: "NES".to_string(),
                body: vec![
                    "NES audio experiments.".to_string(),
                    String::new(),
                    "An MML parser and note decoder that render".to_string(),
                    "2A03-style square, triangle and noise channels to WAV.".to_string(),
                ],
            },
        }
    }
}

impl SectionConfig {
    fn merge(&mut self, raw: RawSection, base_dir: &Path) -> Result<()> {
        if let Some(label) = raw.label {
            self.label = label;
        }
        if let Some(title) = raw.title {
            self.title = title;
        }
        match (raw.body, raw.body_file) {
            (Some(_), Some(_)) => {
                return Err(NavToggleError::config(
                    "section sets both 'body' and 'body_file'",
                ))
            }
            (Some(body), None) => self.body = body,
            (None, Some(file)) => {
                let path = if file.is_absolute() {
                    file
                } else {
                    base_dir.join(file)
                };
                let contents = fs::read_to_string(&path).map_err(|err| {
                    NavToggleError::file_error(
                        format!("cannot read body file {}", path.display()),
                        err,
                    )
                })?;
                self.body = contents.lines().map(str::to_string).collect();
            }
            (None, None) => {}
        }
        Ok(())
    }
}

impl AppConfig {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the default location is used when
    /// present and the built-in defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match default_config_path() {
                Some(path) if path.is_file() => Self::from_file(&path),
                _ => {
                    log::debug!("no config file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    /// Parse a config file; relative `body_file` paths resolve against its directory.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|err| {
            NavToggleError::file_error(format!("cannot read config {}", path.display()), err)
        })?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        log::info!("loading config from {}", path.display());
        Self::from_toml_str(&text, base_dir)
    }

    pub fn from_toml_str(text: &str, base_dir: &Path) -> Result<Self> {
        let raw: RawConfig =
            toml::from_str(text).map_err(|err| NavToggleError::config(err.to_string()))?;

        let mut config = Self::default();
        if let Some(theme) = raw.theme {
            config.theme = theme;
        }
        if let Some(interval) = raw.poll_interval_ms {
            config.poll_interval_ms = interval;
        }
        if let Some(vm) = raw.vm {
            config.vm.merge(vm, base_dir)?;
        }
        if let Some(nes) = raw.nes {
            config.nes.merge(nes, base_dir)?;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_POLL_INTERVAL_MS).contains(&self.poll_interval_ms) {
            return Err(NavToggleError::config(format!(
                "poll_interval_ms must be between 1 and {}, got {}",
                MAX_POLL_INTERVAL_MS, self.poll_interval_ms
            )));
        }
        self.color_theme()?;
        Ok(())
    }

    /// Resolve the configured theme name.
    pub fn color_theme(&self) -> Result<ColorTheme> {
        ColorTheme::by_name(&self.theme)
            .ok_or_else(|| NavToggleError::config(format!("unknown theme '{}'", self.theme)))
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Render the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|err| NavToggleError::config(err.to_string()))
    }
}

/// `<config_dir>/navtoggle/config.toml`, when the platform has a config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("navtoggle").join("config.toml"))
}
