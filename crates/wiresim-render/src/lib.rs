//! # WireSim Render
//!
//! Toolpath rendering: the drawing-surface abstraction used by the
//! execution controller, a raster implementation backed by tiny-skia,
//! and the presentation-side pan/zoom viewport.
//!
//! Drawing happens in machine coordinates (origin at the surface
//! centre, Y up); the viewport re-frames finished snapshots and never
//! touches machine coordinates.

pub mod path;
pub mod pixmap;
pub mod surface;
pub mod viewport;

pub use path::{render_segment, PathSegment};
pub use pixmap::PixmapSurface;
pub use surface::{DrawSurface, NullSurface};
pub use viewport::Viewport;
