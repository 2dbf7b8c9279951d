//! Shared tuning constants.

/// Default continuous-run execution speed, in steps per second.
pub const DEFAULT_SPEED: f64 = 5.0;

/// Minimum accepted execution speed, in steps per second.
pub const MIN_SPEED: f64 = 0.1;

/// Maximum accepted execution speed, in steps per second.
pub const MAX_SPEED: f64 = 1000.0;

/// Default unit-to-pixel scale factor for new sessions.
pub const DEFAULT_SCALE: f64 = 10.0;

/// Stroke width applied to the drawing surface is the session scale
/// multiplied by this factor.
pub const STROKE_WIDTH_FACTOR: f64 = 1.5;

/// Default drawing surface width, in pixels.
pub const DEFAULT_CANVAS_WIDTH: u32 = 800;

/// Default drawing surface height, in pixels.
pub const DEFAULT_CANVAS_HEIGHT: u32 = 600;

/// Minimum presentation zoom.
pub const MIN_ZOOM: f64 = 0.1;

/// Maximum presentation zoom.
pub const MAX_ZOOM: f64 = 5.0;

/// Multiplier applied per zoom-in/zoom-out step.
pub const ZOOM_STEP: f64 = 1.1;
