use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use directories_next::ProjectDirs;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::animation::Spring;

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        // roughly a phone held upright
        Self {
            title: String::from("Let's Travel"),
            width: 390.0,
            height: 844.0,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct CardConfig {
    pub compact_height: f32,
    pub spacing: f32,
    pub corner_radius: f32,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            compact_height: 250.0,
            spacing: 20.0,
            corner_radius: 20.0,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OverlayConfig {
    /// false keeps the overlay on the first destination no matter which card
    /// was tapped, true shows the tapped card
    pub follow_tapped_card: bool,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Theme {
    pub background_start: egui::Color32,
    pub background_end: egui::Color32,
    pub button_start: egui::Color32,
    pub button_end: egui::Color32,
    pub text: egui::Color32,
}

pub const PURPLE: egui::Color32 = egui::Color32::from_rgb(175, 82, 222);
pub const BLUE: egui::Color32 = egui::Color32::from_rgb(0, 122, 255);

impl Default for Theme {
    fn default() -> Self {
        Self {
            background_start: PURPLE.gamma_multiply(0.3),
            background_end: BLUE.gamma_multiply(0.3),
            button_start: PURPLE,
            button_end: BLUE,
            text: egui::Color32::WHITE,
        }
    }
}

/// Everything that can be tuned without recompiling. Read once at startup.
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub spring: Spring,
    pub cards: CardConfig,
    pub overlay: OverlayConfig,
    pub theme: Theme,
    /// directory with `poke1.png` etc. Defaults to `assets` next to the working directory.
    pub assets_dir: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_yaml(text: &str) -> anyhow::Result<Self> {
        let config: Self =
            serde_yaml::from_str(text).context("Failed to parse the config as YAML")?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would end up as NaN or negative sizes in the layout.
    pub fn validate(&self) -> anyhow::Result<()> {
        self.spring.validate().context("Invalid spring")?;
        let sizes = [
            ("window.width", self.window.width),
            ("window.height", self.window.height),
            ("cards.compact_height", self.cards.compact_height),
            ("cards.spacing", self.cards.spacing),
            ("cards.corner_radius", self.cards.corner_radius),
        ];
        for (name, value) in sizes {
            anyhow::ensure!(
                value.is_finite() && value >= 0.0,
                "{name} must be a finite, non-negative size, got {value}"
            );
        }
        Ok(())
    }

    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let text =
            fs::read_to_string(path).with_context(|| format!("Failed to read {path:?}"))?;
        Self::from_yaml(&text).with_context(|| format!("Invalid config file {path:?}"))
    }

    /// Load the config from the user's config dir. A missing file gives the
    /// defaults, a broken one is reported and also gives the defaults.
    pub fn load() -> Self {
        let Some(path) = config_path() else {
            return Self::default();
        };
        if !path.is_file() {
            info!("no config at {path:?}, using defaults");
            return Self::default();
        }
        match Self::from_path(&path) {
            Ok(config) => {
                info!("loaded config from {path:?}");
                config
            }
            Err(err) => {
                warn!("{err:?}");
                Self::default()
            }
        }
    }

    pub fn assets_dir(&self) -> PathBuf {
        self.assets_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

fn my_project_dir() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "TravelCards")
}

fn config_path() -> Option<PathBuf> {
    my_project_dir().map(|dir| dir.config_dir().join("config.yaml"))
}
