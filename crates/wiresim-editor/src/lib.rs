//! # WireSim Editor
//!
//! The editor collaborator interface consumed by the execution
//! controller, a rope-backed buffer that tracks line highlights, and a
//! no-op editor for headless runs.

pub mod buffer;
pub mod surface;

pub use buffer::HighlightBuffer;
pub use surface::{EditorSurface, NullEditor};
