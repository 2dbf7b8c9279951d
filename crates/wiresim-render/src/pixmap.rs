//! Raster drawing surface backed by tiny-skia.

use std::path::Path;

use image::{Rgb, RgbImage};
use tiny_skia::{Color, Paint, PathBuilder, Pixmap, Stroke, Transform};
use tracing::trace;
use wiresim_core::error::{RenderError, Result};
use wiresim_core::Point;

use crate::surface::DrawSurface;

/// Maximum angular step used when flattening arcs, in radians.
const ARC_MAX_STEP: f64 = 0.05;

fn background_color() -> Color {
    Color::from_rgba8(255, 255, 255, 255)
}

fn stroke_color() -> Color {
    Color::from_rgba8(0, 0, 0, 255)
}

/// Raster surface that strokes toolpath primitives into a pixmap.
///
/// Machine coordinates map to pixels with the origin at the surface
/// centre and Y up; see [`DrawSurface`](crate::DrawSurface) for the
/// full contract.
#[derive(Debug)]
pub struct PixmapSurface {
    pixmap: Pixmap,
    stroke: Stroke,
}

impl PixmapSurface {
    /// Creates a white surface of the given size.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let Some(mut pixmap) = Pixmap::new(width, height) else {
            return Err(RenderError::InvalidDimensions { width, height }.into());
        };
        pixmap.fill(background_color());
        Ok(Self {
            pixmap,
            stroke: Stroke::default(),
        })
    }

    /// Maps a machine point to pixel coordinates (centre origin, Y
    /// flipped so machine up is screen up).
    fn to_pixel(&self, p: Point) -> (f32, f32) {
        let cx = self.pixmap.width() as f32 / 2.0;
        let cy = self.pixmap.height() as f32 / 2.0;
        (cx + p.x as f32, cy - p.y as f32)
    }

    fn stroke_path(&mut self, builder: PathBuilder) {
        let mut paint = Paint::default();
        paint.set_color(stroke_color());
        paint.anti_alias = true;

        if let Some(path) = builder.finish() {
            self.pixmap
                .stroke_path(&path, &paint, &self.stroke, Transform::identity(), None);
        }
    }

    /// Copies the surface into an RGB image.
    pub fn to_image(&self) -> RgbImage {
        let width = self.pixmap.width();
        let data = self.pixmap.data();
        RgbImage::from_fn(width, self.pixmap.height(), |x, y| {
            let idx = ((y * width + x) * 4) as usize;
            Rgb([data[idx], data[idx + 1], data[idx + 2]])
        })
    }

    /// Writes the surface to an image file; format follows the
    /// extension.
    pub fn save(&self, path: &Path) -> Result<()> {
        self.to_image().save(path).map_err(|e| {
            RenderError::WriteFailed {
                reason: e.to_string(),
            }
            .into()
        })
    }
}

impl DrawSurface for PixmapSurface {
    fn width(&self) -> u32 {
        self.pixmap.width()
    }

    fn height(&self) -> u32 {
        self.pixmap.height()
    }

    fn clear(&mut self) {
        self.pixmap.fill(background_color());
    }

    fn set_stroke_width(&mut self, width: f32) {
        self.stroke.width = width;
    }

    fn stroke_line(&mut self, from: Point, to: Point) {
        let (x0, y0) = self.to_pixel(from);
        let (x1, y1) = self.to_pixel(to);

        let mut builder = PathBuilder::new();
        builder.move_to(x0, y0);
        builder.line_to(x1, y1);
        self.stroke_path(builder);
    }

    fn stroke_arc(
        &mut self,
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        clockwise: bool,
    ) {
        if radius <= 0.0 {
            trace!("skipping degenerate arc");
            return;
        }
        let sweep = if clockwise {
            normalize_sweep(start_angle - end_angle)
        } else {
            normalize_sweep(end_angle - start_angle)
        };
        if sweep == 0.0 {
            trace!("skipping zero-sweep arc");
            return;
        }

        // Flatten to a polyline in machine space, then map each sample.
        let steps = ((sweep / ARC_MAX_STEP).ceil() as usize).max(2);
        let mut builder = PathBuilder::new();
        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            let angle = if clockwise {
                start_angle - sweep * t
            } else {
                start_angle + sweep * t
            };
            let sample = Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            );
            let (px, py) = self.to_pixel(sample);
            if i == 0 {
                builder.move_to(px, py);
            } else {
                builder.line_to(px, py);
            }
        }
        self.stroke_path(builder);
    }
}

/// Normalizes an angular sweep into `[0, 2π)`.
///
/// Start and end angles that coincide normalize to zero, so a
/// nominally full-circle arc draws nothing.
fn normalize_sweep(sweep: f64) -> f64 {
    sweep.rem_euclid(std::f64::consts::TAU)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_normalize_sweep() {
        assert_eq!(normalize_sweep(0.0), 0.0);
        assert!((normalize_sweep(PI) - PI).abs() < 1e-12);
        assert!((normalize_sweep(-PI) - PI).abs() < 1e-12);
        assert!((normalize_sweep(3.0 * PI) - PI).abs() < 1e-12);
    }
}
