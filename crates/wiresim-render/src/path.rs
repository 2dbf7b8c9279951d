//! Drawing primitives requested by the machine interpreter.

use wiresim_core::Point;

use crate::surface::DrawSurface;

/// One drawing primitive produced by executing a motion command.
#[derive(Debug, Clone, PartialEq)]
pub enum PathSegment {
    /// Straight cut between two points.
    Line { from: Point, to: Point },
    /// Circular arc cut.
    ///
    /// `center` is absolute (already offset from the start point), and
    /// the angles locate `from`/`to` on the circle in machine space.
    Arc {
        from: Point,
        to: Point,
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        clockwise: bool,
    },
}

/// Strokes one segment onto the surface.
///
/// Prior strokes always remain; only a surface clear removes them.
pub fn render_segment(surface: &mut dyn DrawSurface, segment: &PathSegment) {
    match segment {
        PathSegment::Line { from, to } => surface.stroke_line(*from, *to),
        PathSegment::Arc {
            center,
            radius,
            start_angle,
            end_angle,
            clockwise,
            ..
        } => surface.stroke_arc(*center, *radius, *start_angle, *end_angle, *clockwise),
    }
}
