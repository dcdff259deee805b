//! Preview Manager for mcbe-preview.
//!
//! Tracks the opacity, offset and scale sliders of each mode's preview and
//! derives what the presentation layer applies to the image.

use crate::types::history::RenderMode;
use crate::types::preview::{
    Axis, PreviewState, DEFAULT_SCALE, OFFSET_MAX, OFFSET_MIN, OPACITY_MAX, OPACITY_MIN,
    PLACEHOLDER_BACKGROUND_OPACITY, SCALE_MAX, SCALE_MIN,
};

/// Trait defining preview transform operations.
pub trait PreviewManagerTrait {
    fn state(&self, mode: RenderMode) -> PreviewState;
    fn set_opacity(&mut self, mode: RenderMode, percent: i32) -> i32;
    fn set_offset(&mut self, mode: RenderMode, axis: Axis, px: i32) -> i32;
    fn set_scale(&mut self, mode: RenderMode, percent: i32) -> i32;
    fn reset(&mut self, mode: RenderMode);
    fn reset_transform(&mut self, mode: RenderMode);
    fn transform_css(&self, mode: RenderMode) -> String;
    fn opacity_fraction(&self, mode: RenderMode) -> f64;
    fn show_placeholder_background(&mut self, mode: RenderMode);
    fn show_slider_background(&mut self, mode: RenderMode);
    fn background_opacity(&self, mode: RenderMode) -> f64;
}

#[derive(Debug, Clone, Copy)]
struct Slot {
    state: PreviewState,
    /// Cleared while the placeholder is shown (render pending, form reset);
    /// otherwise the checkerboard tracks the opacity slider.
    background_from_slider: bool,
}

impl Default for Slot {
    fn default() -> Self {
        Self {
            state: PreviewState::default(),
            background_from_slider: true,
        }
    }
}

#[derive(Debug, Default)]
pub struct PreviewManager {
    text: Slot,
    structured: Slot,
}

impl PreviewManager {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, mode: RenderMode) -> &Slot {
        match mode {
            RenderMode::Text => &self.text,
            RenderMode::Structured => &self.structured,
        }
    }

    fn slot_mut(&mut self, mode: RenderMode) -> &mut Slot {
        match mode {
            RenderMode::Text => &mut self.text,
            RenderMode::Structured => &mut self.structured,
        }
    }

    fn state_mut(&mut self, mode: RenderMode) -> &mut PreviewState {
        &mut self.slot_mut(mode).state
    }

    /// Percentage of the opacity slider track to fill.
    pub fn opacity_track_percent(value: i32) -> f64 {
        f64::from(value.clamp(OPACITY_MIN, OPACITY_MAX))
    }

    /// Percentage of an offset slider track to fill (-100 → 0, 100 → 100).
    pub fn offset_track_percent(value: i32) -> f64 {
        let value = f64::from(value.clamp(OFFSET_MIN, OFFSET_MAX));
        (value + 100.0) / 200.0 * 100.0
    }

    /// Percentage of the scale slider track to fill (10 → 0, 200 → 100).
    pub fn scale_track_percent(value: i32) -> f64 {
        let value = f64::from(value.clamp(SCALE_MIN, SCALE_MAX));
        (value - 10.0) / 190.0 * 100.0
    }
}

impl PreviewManagerTrait for PreviewManager {
    fn state(&self, mode: RenderMode) -> PreviewState {
        self.slot(mode).state
    }

    /// Stores the clamped opacity and returns it. The checkerboard follows.
    fn set_opacity(&mut self, mode: RenderMode, percent: i32) -> i32 {
        let value = percent.clamp(OPACITY_MIN, OPACITY_MAX);
        let slot = self.slot_mut(mode);
        slot.state.opacity = value;
        slot.background_from_slider = true;
        value
    }

    fn set_offset(&mut self, mode: RenderMode, axis: Axis, px: i32) -> i32 {
        let value = px.clamp(OFFSET_MIN, OFFSET_MAX);
        let state = self.state_mut(mode);
        match axis {
            Axis::X => state.offset_x = value,
            Axis::Y => state.offset_y = value,
        }
        value
    }

    fn set_scale(&mut self, mode: RenderMode, percent: i32) -> i32 {
        let value = percent.clamp(SCALE_MIN, SCALE_MAX);
        self.state_mut(mode).scale = value;
        value
    }

    /// Form reset: clears the transform and brings back the placeholder
    /// checkerboard. Opacity is left alone.
    fn reset(&mut self, mode: RenderMode) {
        self.reset_transform(mode);
        self.show_placeholder_background(mode);
    }

    /// Zeroes the offsets and restores 100% scale; the background is untouched.
    fn reset_transform(&mut self, mode: RenderMode) {
        let state = self.state_mut(mode);
        state.offset_x = 0;
        state.offset_y = 0;
        state.scale = DEFAULT_SCALE;
    }

    fn transform_css(&self, mode: RenderMode) -> String {
        let state = self.state(mode);
        format!(
            "translate({}px, {}px) scale({})",
            state.offset_x,
            state.offset_y,
            f64::from(state.scale) / 100.0
        )
    }

    fn opacity_fraction(&self, mode: RenderMode) -> f64 {
        f64::from(self.state(mode).opacity) / 100.0
    }

    /// Puts the checkerboard back to its placeholder opacity, as when a new
    /// render starts.
    fn show_placeholder_background(&mut self, mode: RenderMode) {
        self.slot_mut(mode).background_from_slider = false;
    }

    /// Lets the checkerboard follow the opacity slider again, as once a
    /// rendered image is shown.
    fn show_slider_background(&mut self, mode: RenderMode) {
        self.slot_mut(mode).background_from_slider = true;
    }

    fn background_opacity(&self, mode: RenderMode) -> f64 {
        if self.slot(mode).background_from_slider {
            self.opacity_fraction(mode)
        } else {
            PLACEHOLDER_BACKGROUND_OPACITY
        }
    }
}
