//! Data-driven level layout
//!
//! The placement of the paddle, the ball spawn point and the brick rows is
//! expressed as fractions of the world size so the same layout fits any
//! surface. Everything that decides difficulty (paddle width, ball size and
//! speed, grid size, lives, score, frame cap) stays fixed in `consts`.

use std::fmt;

use serde::Deserialize;

use crate::consts::BRICK_COLS;

/// Level layout
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Tuning {
    // === Paddle ===
    /// Paddle height as a fraction of world height
    pub paddle_height_ratio: f32,
    /// Distance from paddle top to world bottom, in paddle heights
    pub paddle_lift: f32,

    // === Ball ===
    /// Ball spawn point as fractions of world width/height
    pub ball_spawn_x_ratio: f32,
    pub ball_spawn_y_ratio: f32,

    // === Bricks ===
    /// Gap between and around columns, as a fraction of world width
    pub brick_margin_ratio: f32,
    /// Brick height as a fraction of world height
    pub brick_height_ratio: f32,
    /// Top of the first brick row as a fraction of world height
    pub brick_top_ratio: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            paddle_height_ratio: 0.02,
            paddle_lift: 3.0,

            ball_spawn_x_ratio: 0.5,
            ball_spawn_y_ratio: 0.6,

            brick_margin_ratio: 0.02,
            brick_height_ratio: 0.03,
            brick_top_ratio: 0.1,
        }
    }
}

/// Reasons a tuning file is rejected
#[derive(Debug)]
pub enum TuningError {
    /// The file is not valid JSON for `Tuning`, or names a field it does not have
    Parse(serde_json::Error),
    /// A value that must be a positive finite number is not
    NotPositive { field: &'static str, value: f32 },
    /// A ratio that must stay below 1.0 does not
    RatioTooLarge { field: &'static str, value: f32 },
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::Parse(e) => write!(f, "invalid tuning JSON: {e}"),
            TuningError::NotPositive { field, value } => {
                write!(f, "{field} must be a positive number, got {value}")
            }
            TuningError::RatioTooLarge { field, value } => {
                write!(f, "{field} must be below 1.0, got {value}")
            }
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TuningError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(e: serde_json::Error) -> Self {
        TuningError::Parse(e)
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document. Missing fields keep defaults.
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Parse a tuning document, falling back to defaults on any error
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(tuning) => {
                log::info!("Loaded level tuning");
                tuning
            }
            Err(e) => {
                log::warn!("Ignoring tuning ({e}), using defaults");
                Self::default()
            }
        }
    }

    /// Check that every value produces well-formed geometry
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("paddle_height_ratio", self.paddle_height_ratio),
            ("paddle_lift", self.paddle_lift),
            ("ball_spawn_x_ratio", self.ball_spawn_x_ratio),
            ("ball_spawn_y_ratio", self.ball_spawn_y_ratio),
            ("brick_margin_ratio", self.brick_margin_ratio),
            ("brick_height_ratio", self.brick_height_ratio),
            ("brick_top_ratio", self.brick_top_ratio),
        ];
        for (field, value) in positive {
            // NaN fails this comparison too
            if !(value.is_finite() && value > 0.0) {
                return Err(TuningError::NotPositive { field, value });
            }
        }

        let total_margin = self.brick_margin_ratio * (BRICK_COLS as f32 + 1.0);
        let below_one = [
            ("paddle_height_ratio * paddle_lift", self.paddle_height_ratio * self.paddle_lift),
            ("ball_spawn_x_ratio", self.ball_spawn_x_ratio),
            ("ball_spawn_y_ratio", self.ball_spawn_y_ratio),
            ("brick_margin_ratio * (columns + 1)", total_margin),
            ("brick_top_ratio", self.brick_top_ratio),
        ];
        for (field, value) in below_one {
            if value >= 1.0 {
                return Err(TuningError::RatioTooLarge { field, value });
            }
        }

        Ok(())
    }
}
