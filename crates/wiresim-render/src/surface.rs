//! Drawing surface abstraction.

use wiresim_core::Point;

/// A persistent 2D surface the path renderer strokes onto.
///
/// Coordinates are machine coordinates: the origin sits at the surface
/// centre and Y grows upward. Implementations own the mapping onto
/// their pixel grid. Strokes accumulate until [`clear`] is called;
/// nothing else erases them.
///
/// [`clear`]: DrawSurface::clear
pub trait DrawSurface: Send {
    /// Surface width in pixels.
    fn width(&self) -> u32;

    /// Surface height in pixels.
    fn height(&self) -> u32;

    /// Erases every stroke and restores the background.
    fn clear(&mut self);

    /// Sets the stroke width, in pixels, for subsequent strokes.
    fn set_stroke_width(&mut self, width: f32);

    /// Strokes a straight segment between two machine points.
    fn stroke_line(&mut self, from: Point, to: Point);

    /// Strokes a circular arc.
    ///
    /// Angles are measured in machine space: radians, counter-clockwise
    /// from +X. `clockwise` selects the machine-space sweep direction
    /// from `start_angle` to `end_angle`. A zero radius or a zero sweep
    /// degenerates to a point and draws nothing.
    fn stroke_arc(
        &mut self,
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        clockwise: bool,
    );
}

/// Surface that swallows every stroke, for dry runs and tests.
#[derive(Debug, Clone)]
pub struct NullSurface {
    width: u32,
    height: u32,
}

impl NullSurface {
    /// Creates a surface of the given nominal size.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl DrawSurface for NullSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear(&mut self) {}

    fn set_stroke_width(&mut self, _width: f32) {}

    fn stroke_line(&mut self, _from: Point, _to: Point) {}

    fn stroke_arc(
        &mut self,
        _center: Point,
        _radius: f64,
        _start_angle: f64,
        _end_angle: f64,
        _clockwise: bool,
    ) {
    }
}
