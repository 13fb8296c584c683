//! Game configuration: static values plus the dynamic difficulty
//! parameters that reset at every new game.
//!
//! All static values can be overridden from an optional RON file; the
//! dynamic values are derived at runtime and never serialized.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const BASE_SHIP_SPEED: f32 = 2.0;
const BASE_BULLET_SPEED: f32 = 3.5;
const BASE_ALIEN_SPEED: f32 = 0.6;
const BASE_ALIEN_POINTS: u32 = 50;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Logical field size. Entities move in these units; the renderer
    /// scales them to whatever terminal area is available.
    pub screen_width: f32,
    pub screen_height: f32,
    /// Background color of the play field, as an RGB triple.
    pub bg_color: (u8, u8, u8),
    /// Ships the player gets per game.
    pub ship_limit: u32,
    /// Maximum bullets in flight at once.
    pub bullets_allowed: usize,
    /// Vertical distance the whole fleet descends on edge contact.
    pub fleet_drop_speed: f32,
    /// Speed multiplier applied each time a fleet is cleared.
    pub speedup_scale: f32,
    /// Per-alien score multiplier applied each time a fleet is cleared.
    pub score_scale: f32,

    // Dynamic difficulty values; reset by initialize_dynamic_settings
    // at every new game.
    #[serde(skip)]
    pub ship_speed: f32,
    #[serde(skip)]
    pub bullet_speed: f32,
    #[serde(skip)]
    pub alien_speed: f32,
    /// Sign of the fleet's horizontal travel: `1.0` right, `-1.0` left.
    #[serde(skip)]
    pub fleet_direction: f32,
    #[serde(skip)]
    pub alien_points: u32,
}

impl Default for Settings {
    fn default() -> Self {
        let mut settings = Self {
            screen_width: 320.0,
            screen_height: 200.0,
            bg_color: (8, 8, 24),
            ship_limit: 3,
            bullets_allowed: 3,
            fleet_drop_speed: 8.0,
            speedup_scale: 1.1,
            score_scale: 1.5,
            ship_speed: 0.0,
            bullet_speed: 0.0,
            alien_speed: 0.0,
            fleet_direction: 1.0,
            alien_points: 0,
        };
        settings.initialize_dynamic_settings();
        settings
    }
}

/// All the ways loading or validating the configuration can fail.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to read config {path}: {source}")]
    Read { path: String, source: io::Error },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: String,
        source: ron::error::SpannedError,
    },
    #[error("screen dimensions must be positive, got {width}x{height}")]
    ScreenSize { width: f32, height: f32 },
    #[error("bullets_allowed must be at least 1")]
    BulletCap,
    #[error("ship_limit must be at least 1")]
    ShipLimit,
    #[error("speedup_scale must be at least 1.0, got {0}")]
    SpeedupScale(f32),
    #[error("score_scale must be at least 1.0, got {0}")]
    ScoreScale(f32),
    #[error("fleet_drop_speed must not be negative, got {0}")]
    DropSpeed(f32),
}

impl Settings {
    /// Reset the difficulty-scaling values to their base constants.
    /// Called at construction and at the start of every game.
    pub fn initialize_dynamic_settings(&mut self) {
        self.ship_speed = BASE_SHIP_SPEED;
        self.bullet_speed = BASE_BULLET_SPEED;
        self.alien_speed = BASE_ALIEN_SPEED;
        self.fleet_direction = 1.0;
        self.alien_points = BASE_ALIEN_POINTS;
    }

    /// Scale the speeds and the per-alien score after a cleared fleet.
    pub fn increase_speed(&mut self) {
        self.ship_speed *= self.speedup_scale;
        self.bullet_speed *= self.speedup_scale;
        self.alien_speed *= self.speedup_scale;
        self.alien_points = (self.alien_points as f32 * self.score_scale) as u32;
    }

    /// Load from a RON file, failing on any read, parse, or validation
    /// error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let mut settings: Settings =
            ron::from_str(&data).map_err(|source| SettingsError::Parse {
                path: path.display().to_string(),
                source,
            })?;
        settings.initialize_dynamic_settings();
        settings.validate()?;
        Ok(settings)
    }

    /// Like [`Settings::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        match Self::load(&path) {
            Err(SettingsError::Read { ref source, .. })
                if source.kind() == io::ErrorKind::NotFound =>
            {
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Reject configurations the layout math cannot survive.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.screen_width <= 0.0 || self.screen_height <= 0.0 {
            return Err(SettingsError::ScreenSize {
                width: self.screen_width,
                height: self.screen_height,
            });
        }
        if self.bullets_allowed == 0 {
            return Err(SettingsError::BulletCap);
        }
        if self.ship_limit == 0 {
            return Err(SettingsError::ShipLimit);
        }
        if self.speedup_scale < 1.0 {
            return Err(SettingsError::SpeedupScale(self.speedup_scale));
        }
        if self.score_scale < 1.0 {
            return Err(SettingsError::ScoreScale(self.score_scale));
        }
        if self.fleet_drop_speed < 0.0 {
            return Err(SettingsError::DropSpeed(self.fleet_drop_speed));
        }
        Ok(())
    }
}
