//! Error handling for WireSim
//!
//! Provides structured error types for the layers that can genuinely
//! fail: session construction and rendering/file I/O. Command
//! interpretation itself has no fatal path; malformed input degrades to
//! no-ops by design.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Session error type
///
/// Represents errors raised while constructing or reconfiguring a
/// simulation session.
#[derive(Error, Debug, Clone)]
pub enum SessionError {
    /// Execution speed must be positive and finite
    #[error("Invalid speed {value}: must be positive and finite")]
    InvalidSpeed {
        /// The rejected speed value.
        value: f64,
    },

    /// Scale factor must be positive and finite
    #[error("Invalid scale {value}: must be positive and finite")]
    InvalidScale {
        /// The rejected scale value.
        value: f64,
    },
}

/// Render error type
///
/// Represents errors related to drawing surfaces and image export.
#[derive(Error, Debug, Clone)]
pub enum RenderError {
    /// Surface dimensions must be non-zero
    #[error("Invalid surface dimensions {width}x{height}")]
    InvalidDimensions {
        /// The requested surface width.
        width: u32,
        /// The requested surface height.
        height: u32,
    },

    /// Image encoding or writing failed
    #[error("Failed to write image: {reason}")]
    WriteFailed {
        /// The reason the write failed.
        reason: String,
    },
}

/// Main error type for WireSim
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Session error
    #[error(transparent)]
    Session(#[from] SessionError),

    /// Render error
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a session error
    pub fn is_session_error(&self) -> bool {
        matches!(self, Error::Session(_))
    }

    /// Check if this is a render error
    pub fn is_render_error(&self) -> bool {
        matches!(self, Error::Render(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
