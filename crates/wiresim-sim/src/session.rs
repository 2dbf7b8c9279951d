//! A parsed program paired with machine state and pacing.

use std::fmt;
use std::time::Duration;

use tracing::{debug, warn};
use uuid::Uuid;
use wiresim_core::constants::{MAX_SPEED, MIN_SPEED};
use wiresim_core::SessionError;
use wiresim_gcode::{parse_program, Command};

use crate::machine::{MachineState, StepEffect};

/// Execution mode of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecMode {
    /// No command has executed since the last reset.
    Idle,
    /// Advanced manually, one command at a time.
    Stepping,
    /// Advancing on a timer.
    Running,
    /// A timed run was suspended; position and cursor are kept.
    Paused,
    /// The program ended, by M02 or by running out of commands.
    Finished,
}

impl fmt::Display for ExecMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExecMode::Idle => "idle",
            ExecMode::Stepping => "stepping",
            ExecMode::Running => "running",
            ExecMode::Paused => "paused",
            ExecMode::Finished => "finished",
        };
        write!(f, "{name}")
    }
}

/// One program bound to one machine.
///
/// The command list is fixed for the life of the session; changing the
/// program text or the scale means building a new session.
#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    commands: Vec<Command>,
    machine: MachineState,
    mode: ExecMode,
    speed: f64,
}

impl Session {
    /// Creates a session over an already-parsed program.
    ///
    /// Speed and scale must be finite and positive.
    pub fn new(commands: Vec<Command>, speed: f64, scale: f64) -> Result<Self, SessionError> {
        if !speed.is_finite() || speed <= 0.0 {
            return Err(SessionError::InvalidSpeed { value: speed });
        }
        if !scale.is_finite() || scale <= 0.0 {
            return Err(SessionError::InvalidScale { value: scale });
        }
        let session = Self {
            id: Uuid::new_v4(),
            commands,
            machine: MachineState::new(scale),
            mode: ExecMode::Idle,
            speed,
        };
        debug!(
            "session {} created: {} commands, speed {}, scale {}",
            session.id,
            session.commands.len(),
            speed,
            scale
        );
        Ok(session)
    }

    /// Parses program text and creates a session over it.
    pub fn from_text(text: &str, speed: f64, scale: f64) -> Result<Self, SessionError> {
        Self::new(parse_program(text), speed, scale)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    pub fn machine(&self) -> &MachineState {
        &self.machine
    }

    pub fn mode(&self) -> ExecMode {
        self.mode
    }

    pub(crate) fn set_mode(&mut self, mode: ExecMode) {
        self.mode = mode;
    }

    /// Steps per second for continuous runs.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Pause between timed steps, derived from the current speed.
    pub fn step_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.speed)
    }

    /// Updates the speed, clamping it into the supported range.
    /// Non-finite values are ignored. Takes effect from the next
    /// scheduled step.
    pub fn set_speed(&mut self, speed: f64) {
        if !speed.is_finite() {
            warn!("ignoring non-finite speed {speed}");
            return;
        }
        let clamped = speed.clamp(MIN_SPEED, MAX_SPEED);
        if clamped != speed {
            warn!("speed {speed} out of range, clamped to {clamped}");
        }
        self.speed = clamped;
    }

    /// True once the cursor has moved past the last command.
    pub fn at_end(&self) -> bool {
        self.machine.cursor() >= self.commands.len()
    }

    /// Executes the command under the cursor and advances past it.
    /// Returns the command's source line and its effect, or `None`
    /// when the cursor is already past the end.
    pub(crate) fn execute_next(&mut self) -> Option<(usize, StepEffect)> {
        let command = self.commands.get(self.machine.cursor())?;
        let effect = self.machine.apply(command);
        let line = command.source_line;
        self.machine.advance();
        Some((line, effect))
    }

    /// Rewinds to the initial state, keeping program and speed.
    pub fn reset(&mut self) {
        self.machine.reset();
        self.mode = ExecMode::Idle;
    }
}
