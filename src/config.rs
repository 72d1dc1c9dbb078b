//! Game configuration
//!
//! Every tunable number of the game lives in [`GameConfig`]. Defaults match the
//! classic layout; a page may override any subset with an embedded JSON blob.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config field `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// Play field, entity and scoring constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Play field size in pixels
    pub field_width: f32,
    pub field_height: f32,

    pub ball_radius: f32,
    /// Velocity the ball starts with and is reset to after a lost life
    pub ball_dx: f32,
    pub ball_dy: f32,
    /// Ball start height, measured up from the bottom edge
    pub ball_start_lift: f32,
    /// Ball respawn height after a lost life, measured up from the bottom edge
    pub ball_respawn_lift: f32,

    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Horizontal paddle travel per frame while a key is held
    pub paddle_step: f32,

    pub block_columns: usize,
    pub block_rows: usize,
    pub block_width: f32,
    pub block_height: f32,
    pub block_padding: f32,
    pub block_offset_top: f32,
    pub block_offset_left: f32,

    pub points_per_block: u64,
    pub points_per_paddle_bounce: u64,
    pub starting_lives: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: 900.0,
            field_height: 600.0,

            ball_radius: 10.0,
            ball_dx: 2.0,
            ball_dy: -2.0,
            ball_start_lift: 260.0,
            ball_respawn_lift: 30.0,

            paddle_width: 75.0,
            paddle_height: 10.0,
            paddle_step: 7.0,

            block_columns: 10,
            block_rows: 5,
            block_width: 75.0,
            block_height: 20.0,
            block_padding: 10.0,
            block_offset_top: 30.0,
            block_offset_left: 30.0,

            points_per_block: 100,
            points_per_paddle_bounce: 100,
            starting_lives: 3,
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON config and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the numbers describe a playable field
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("ball_radius", self.ball_radius),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("block_width", self.block_width),
            ("block_height", self.block_height),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::invalid(field, format!("must be > 0, got {value}")));
            }
        }

        if !(self.paddle_step.is_finite() && self.paddle_step >= 0.0) {
            return Err(ConfigError::invalid("paddle_step", "must be >= 0"));
        }
        let (max_dx, max_dy) = self.max_ball_speed();
        if !(self.ball_dx.is_finite() && self.ball_dx.abs() <= max_dx) {
            return Err(ConfigError::invalid(
                "ball_dx",
                format!("must be finite and at most {max_dx} in size, got {}", self.ball_dx),
            ));
        }
        if !(self.ball_dy.is_finite() && self.ball_dy != 0.0 && self.ball_dy.abs() <= max_dy) {
            return Err(ConfigError::invalid(
                "ball_dy",
                format!("must be non-zero and at most {max_dy} in size, got {}", self.ball_dy),
            ));
        }

        for (field, offset) in [
            ("block_offset_left", self.block_offset_left),
            ("block_offset_top", self.block_offset_top),
        ] {
            if !(offset.is_finite() && offset >= 0.0) {
                return Err(ConfigError::invalid(field, format!("must be >= 0, got {offset}")));
            }
        }
        if !self.block_padding.is_finite()
            || self.block_width + self.block_padding <= 0.0
            || self.block_height + self.block_padding <= 0.0
        {
            return Err(ConfigError::invalid(
                "block_padding",
                "blocks must advance along both grid axes",
            ));
        }

        if self.paddle_width > self.field_width {
            return Err(ConfigError::invalid(
                "paddle_width",
                "paddle is wider than the field",
            ));
        }
        if self.ball_radius * 2.0 >= self.field_width.min(self.field_height) {
            return Err(ConfigError::invalid(
                "ball_radius",
                "ball does not fit in the field",
            ));
        }
        if self.starting_lives == 0 {
            return Err(ConfigError::invalid("starting_lives", "must be at least 1"));
        }
        if self.block_columns == 0 || self.block_rows == 0 {
            return Err(ConfigError::invalid(
                "block_columns",
                "grid needs at least one column and one row",
            ));
        }

        let (grid_right, grid_bottom) = self.grid_extent();
        if grid_right > self.field_width {
            return Err(ConfigError::invalid(
                "block_columns",
                format!("grid ends at x={grid_right}, past the field edge"),
            ));
        }
        if grid_bottom > self.field_height - self.paddle_height {
            return Err(ConfigError::invalid(
                "block_rows",
                format!("grid ends at y={grid_bottom}, overlapping the paddle"),
            ));
        }

        for (field, lift) in [
            ("ball_start_lift", self.ball_start_lift),
            ("ball_respawn_lift", self.ball_respawn_lift),
        ] {
            let y = self.field_height - lift;
            if !(y >= self.ball_radius && y <= self.field_height - self.ball_radius) {
                return Err(ConfigError::invalid(field, "spawn point is outside the field"));
            }
        }

        // A respawned ball takes one unchecked step in the frame it appears
        let r = self.ball_radius;
        let next_x = self.field_width / 2.0 + self.ball_dx;
        let next_y = self.field_height - self.ball_respawn_lift + self.ball_dy;
        if next_x < r
            || next_x > self.field_width - r
            || next_y < r
            || next_y > self.field_height - r
        {
            return Err(ConfigError::invalid(
                "ball_respawn_lift",
                "first step after a respawn leaves the field",
            ));
        }

        Ok(())
    }

    /// Largest velocity components that keep the ball inside the field
    ///
    /// A reflected step moves the ball back by the same amount it would have
    /// overshot, so a component may span at most half the free width/height.
    pub fn max_ball_speed(&self) -> (f32, f32) {
        let free_w = self.field_width - 2.0 * self.ball_radius;
        let free_h = self.field_height - 2.0 * self.ball_radius;
        (free_w / 2.0, free_h / 2.0)
    }

    /// Right and bottom edges of the block grid
    pub fn grid_extent(&self) -> (f32, f32) {
        let right = self.block_offset_left
            + self.block_columns as f32 * (self.block_width + self.block_padding)
            - self.block_padding;
        let bottom = self.block_offset_top
            + self.block_rows as f32 * (self.block_height + self.block_padding)
            - self.block_padding;
        (right, bottom)
    }

    /// Paddle x that centres it horizontally
    pub fn centered_paddle_x(&self) -> f32 {
        (self.field_width - self.paddle_width) / 2.0
    }

    /// Top edge of the paddle
    pub fn paddle_y(&self) -> f32 {
        self.field_height - self.paddle_height
    }

    /// Id of the optional page element holding a JSON override
    #[cfg(target_arch = "wasm32")]
    const ELEMENT_ID: &'static str = "game-config";

    /// Load the config embedded in the page (WASM only)
    ///
    /// Falls back to defaults when the element is missing or invalid.
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::ELEMENT_ID))
            .and_then(|el| el.text_content());

        match text {
            Some(json) => match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded game config from page");
                    config
                }
                Err(e) => {
                    log::warn!("Ignoring page config: {e}");
                    Self::default()
                }
            },
            None => {
                log::info!("Using default game config");
                Self::default()
            }
        }
    }

    /// Native: defaults only
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
