//! Machine state and command interpretation.
//!
//! The machine tracks wire position in scaled drawing units, the
//! absolute/relative positioning mode, and the logical origin captured
//! by G92. Interpreting a command mutates the state and reports the
//! resulting toolpath geometry, if any; drawing itself happens
//! elsewhere.

use tracing::trace;
use wiresim_core::Point;
use wiresim_gcode::Command;
use wiresim_render::PathSegment;

/// What interpreting one command means for the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum StepEffect {
    /// State may have changed but nothing was cut.
    None,
    /// The wire moved along this segment.
    Draw(PathSegment),
    /// The program requested termination (M02).
    EndProgram,
}

/// Interpreter state for one program run.
///
/// Positions are kept in drawing units: numeric parameters are
/// multiplied by the session scale as they are read, so `X1` at scale
/// 10 moves ten units. Axis parameters that are absent (or
/// unparseable) fall back to the current coordinate on that axis
/// before mode-specific adjustment, which in relative mode makes an
/// omitted axis re-apply the current coordinate as an offset.
#[derive(Debug, Clone)]
pub struct MachineState {
    position: Point,
    absolute_mode: bool,
    origin: Point,
    scale: f64,
    cursor: usize,
}

impl MachineState {
    /// Creates a machine at the origin, in absolute mode.
    pub fn new(scale: f64) -> Self {
        Self {
            position: Point::ZERO,
            absolute_mode: true,
            origin: Point::ZERO,
            scale,
            cursor: 0,
        }
    }

    /// Current wire position in drawing units.
    pub fn position(&self) -> Point {
        self.position
    }

    /// True while G90 positioning is in effect.
    pub fn is_absolute(&self) -> bool {
        self.absolute_mode
    }

    /// Logical origin captured by the last G92.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Unit-to-pixel scale factor.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Index of the next command to execute.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Advances the cursor past the command just executed.
    pub fn advance(&mut self) {
        self.cursor += 1;
    }

    /// Restores the initial state. The scale is kept.
    pub fn reset(&mut self) {
        self.position = Point::ZERO;
        self.absolute_mode = true;
        self.origin = Point::ZERO;
        self.cursor = 0;
    }

    /// Reads one axis parameter in drawing units, falling back to the
    /// current coordinate when the parameter is missing.
    fn axis_value(&self, command: &Command, name: char, fallback: f64) -> f64 {
        command.param(name).map_or(fallback, |v| v * self.scale)
    }

    /// Resolves the end point of a motion command.
    ///
    /// Absolute mode subtracts the logical origin from the resolved
    /// axis values; relative mode adds them to the current position.
    fn target_for(&self, command: &Command) -> Point {
        let x = self.axis_value(command, 'X', self.position.x);
        let y = self.axis_value(command, 'Y', self.position.y);
        if self.absolute_mode {
            Point::new(x - self.origin.x, y - self.origin.y)
        } else {
            Point::new(self.position.x + x, self.position.y + y)
        }
    }

    /// Interprets a single command.
    ///
    /// Unsupported mnemonics leave the state untouched. The cursor is
    /// not advanced here; callers advance it once the effect has been
    /// applied.
    pub fn apply(&mut self, command: &Command) -> StepEffect {
        match command.code.as_str() {
            "G90" => {
                self.absolute_mode = true;
                StepEffect::None
            }
            "G91" => {
                self.absolute_mode = false;
                StepEffect::None
            }
            "G92" => {
                self.origin = self.position;
                StepEffect::None
            }
            "G01" => {
                let target = self.target_for(command);
                let segment = PathSegment::Line {
                    from: self.position,
                    to: target,
                };
                self.position = target;
                StepEffect::Draw(segment)
            }
            "G02" | "G03" => {
                let i = command.param('I').map_or(0.0, |v| v * self.scale);
                let j = command.param('J').map_or(0.0, |v| v * self.scale);
                let center = Point::new(self.position.x + i, self.position.y + j);
                let radius = i.hypot(j);
                let start_angle =
                    (self.position.y - center.y).atan2(self.position.x - center.x);
                let target = self.target_for(command);
                let end_angle = (target.y - center.y).atan2(target.x - center.x);
                let segment = PathSegment::Arc {
                    from: self.position,
                    to: target,
                    center,
                    radius,
                    start_angle,
                    end_angle,
                    clockwise: command.code == "G02",
                };
                self.position = target;
                StepEffect::Draw(segment)
            }
            "M02" => StepEffect::EndProgram,
            _ => {
                trace!("ignoring unsupported command: {}", command.raw);
                StepEffect::None
            }
        }
    }
}
