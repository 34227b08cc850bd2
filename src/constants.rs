//! Sizing, color, and styling constants for the picker.

/// Default wheel side length.
pub const WHEEL_DIMENSION: f64 = 200.0;

/// Resolution the wheel is rasterized at before scaling to widget size.
pub const WHEEL_RASTER_SIZE: u32 = 256;

/// 1D slider track height
pub const SLIDER_HEIGHT: f32 = 16.0;

/// Cursor circle radius on the wheel
pub const CURSOR_RADIUS: f64 = 8.0;

/// Thumb radius on 1D sliders
pub const THUMB_RADIUS: f64 = 7.0;

/// Gap between picker elements
pub const GAP: f32 = 8.0;

/// Padding around the whole picker
pub const PADDING: f32 = 8.0;

/// Color text font size
pub const TEXT_FONT: f32 = 11.0;

/// Checkerboard tile side (two cells per side).
pub const CHECKER_TILE: u32 = 6;

/// Checkerboard ink, drawn over the slider's light base.
pub const CHECKER_INK: [u8; 4] = [204, 204, 204, 255];
