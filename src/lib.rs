//! # WireSim
//!
//! A wire-cutting EDM toolpath visualizer. A small G-code dialect is
//! parsed, interpreted against a 2D machine model, and drawn to an
//! off-screen surface, with execution paced manually or on a timer.
//!
//! ## Architecture
//!
//! WireSim is organized as a workspace with multiple crates:
//!
//! 1. **wiresim-core** - Shared geometry, errors, constants
//! 2. **wiresim-gcode** - Program text parsing into commands
//! 3. **wiresim-editor** - Program buffer with line highlights
//! 4. **wiresim-render** - Toolpath drawing and presentation
//! 5. **wiresim-sim** - Machine interpreter and execution control
//! 6. **wiresim** - Command-line host that integrates all crates

pub mod config;

pub use config::Config;

pub use wiresim_core::{
    constants, thread_safe, Bounds, Error, Point, RenderError, Result, SessionError, ThreadSafe,
};
pub use wiresim_editor::{EditorSurface, HighlightBuffer, NullEditor};
pub use wiresim_gcode::{parse_program, Command};
pub use wiresim_render::{DrawSurface, PathSegment, PixmapSurface, Viewport};
pub use wiresim_sim::{spawn_run, ExecMode, MachineState, Session, Simulator, StepEffect};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output on stderr, keeping stdout free for data
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
