//! # WireSim Core
//!
//! Core types and utilities shared across the WireSim workspace:
//! planar geometry, tuning constants, the error taxonomy, and
//! shared-state type aliases.

pub mod constants;
pub mod error;
pub mod geometry;
pub mod types;

pub use error::{Error, RenderError, Result, SessionError};
pub use geometry::{Bounds, Point};
pub use types::{thread_safe, ThreadSafe};
