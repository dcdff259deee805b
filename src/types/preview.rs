use serde::{Deserialize, Serialize};

pub const OPACITY_MIN: i32 = 0;
pub const OPACITY_MAX: i32 = 100;
pub const OFFSET_MIN: i32 = -100;
pub const OFFSET_MAX: i32 = 100;
pub const SCALE_MIN: i32 = 10;
pub const SCALE_MAX: i32 = 200;

pub const DEFAULT_OPACITY: i32 = 100;
pub const DEFAULT_SCALE: i32 = 100;

/// Opacity of the checkerboard behind an empty or freshly reset preview.
pub const PLACEHOLDER_BACKGROUND_OPACITY: f64 = 0.25;

/// Axis of an offset slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

/// Slider values applied to one preview image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewState {
    /// Percent, 0..=100.
    pub opacity: i32,
    /// Pixels, -100..=100.
    pub offset_x: i32,
    /// Pixels, -100..=100.
    pub offset_y: i32,
    /// Percent, 10..=200.
    pub scale: i32,
}

impl Default for PreviewState {
    fn default() -> Self {
        Self {
            opacity: DEFAULT_OPACITY,
            offset_x: 0,
            offset_y: 0,
            scale: DEFAULT_SCALE,
        }
    }
}
