//! Presentation-side pan/zoom for rendered snapshots.
//!
//! The viewport re-frames an already-rendered image at display time.
//! Machine coordinates and the drawing surface are never touched, so
//! zooming or panning cannot change what a session has cut.

use std::fmt;

use image::{Rgb, RgbImage};
use wiresim_core::constants::{MAX_ZOOM, MIN_ZOOM, ZOOM_STEP};

/// Fill used for regions panned or zoomed outside the source image.
const FILL: Rgb<u8> = Rgb([255, 255, 255]);

/// Represents the viewport transformation state (zoom and pan).
///
/// Zoom is anchored at the image centre, matching the centre-origin
/// drawing convention; pan offsets are in output pixels.
#[derive(Debug, Clone)]
pub struct Viewport {
    zoom: f64,
    pan_x: f64,
    pan_y: f64,
}

impl Viewport {
    /// Creates an identity viewport (no zoom, no pan).
    pub fn new() -> Self {
        Self {
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
        }
    }

    /// Gets the current zoom level (1.0 = 100%).
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Sets the zoom level, clamped to the supported range.
    /// Non-finite values are ignored.
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom.is_finite() {
            self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        }
    }

    /// Zooms in by one step.
    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom * ZOOM_STEP);
    }

    /// Zooms out by one step.
    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom / ZOOM_STEP);
    }

    /// Gets the pan offset (X coordinate).
    pub fn pan_x(&self) -> f64 {
        self.pan_x
    }

    /// Gets the pan offset (Y coordinate).
    pub fn pan_y(&self) -> f64 {
        self.pan_y
    }

    /// Sets the pan offset.
    pub fn set_pan(&mut self, x: f64, y: f64) {
        self.pan_x = x;
        self.pan_y = y;
    }

    /// Pans by a delta amount.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Resets to identity framing.
    pub fn reset(&mut self) {
        self.zoom = 1.0;
        self.pan_x = 0.0;
        self.pan_y = 0.0;
    }

    /// Re-frames a rendered snapshot according to the current state.
    ///
    /// The output keeps the source dimensions. Each output pixel
    /// samples the source nearest-neighbour at
    ///
    /// ```text
    /// src = centre + (out + 0.5 - centre - pan) / zoom
    /// ```
    ///
    /// Samples outside the source are filled with the background.
    pub fn apply(&self, src: &RgbImage) -> RgbImage {
        let (width, height) = src.dimensions();
        let cx = width as f64 / 2.0;
        let cy = height as f64 / 2.0;

        RgbImage::from_fn(width, height, |x, y| {
            let sx = cx + (x as f64 + 0.5 - cx - self.pan_x) / self.zoom;
            let sy = cy + (y as f64 + 0.5 - cy - self.pan_y) / self.zoom;
            if sx < 0.0 || sy < 0.0 || sx >= width as f64 || sy >= height as f64 {
                FILL
            } else {
                *src.get_pixel(sx as u32, sy as u32)
            }
        })
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Zoom: {:.2}x | Pan: ({:.1}, {:.1})",
            self.zoom, self.pan_x, self.pan_y
        )
    }
}
