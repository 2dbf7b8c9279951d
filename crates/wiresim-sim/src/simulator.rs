//! Drives a session against a drawing surface and an editor.

use tracing::{debug, info};
use wiresim_core::constants::STROKE_WIDTH_FACTOR;
use wiresim_core::{Bounds, Point, SessionError};
use wiresim_editor::EditorSurface;
use wiresim_render::{render_segment, DrawSurface, PathSegment};

use crate::machine::StepEffect;
use crate::session::{ExecMode, Session};

/// Execution controller for one session.
///
/// Owns the drawing surface and the editor it reports to. The surface
/// accumulates strokes across steps and is wiped only by [`reset`];
/// the editor carries a single highlight that follows the command
/// being executed.
///
/// [`reset`]: Simulator::reset
pub struct Simulator<S, E> {
    session: Session,
    surface: S,
    editor: E,
    highlighted: Option<usize>,
    bounds: Bounds,
}

impl<S: DrawSurface, E: EditorSurface> Simulator<S, E> {
    /// Creates a simulator and prepares the surface for drawing.
    pub fn new(session: Session, surface: S, editor: E) -> Self {
        let mut simulator = Self {
            session,
            surface,
            editor,
            highlighted: None,
            bounds: Bounds::new(),
        };
        simulator.reset();
        simulator
    }

    /// Parses program text and builds a simulator around it.
    pub fn from_text(
        text: &str,
        speed: f64,
        scale: f64,
        surface: S,
        editor: E,
    ) -> Result<Self, SessionError> {
        Ok(Self::new(Session::from_text(text, speed, scale)?, surface, editor))
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn mode(&self) -> ExecMode {
        self.session.mode()
    }

    pub fn cursor(&self) -> usize {
        self.session.machine().cursor()
    }

    /// Source line currently highlighted in the editor, if any.
    pub fn highlighted_line(&self) -> Option<usize> {
        self.highlighted
    }

    /// Extents of the toolpath drawn so far, in machine coordinates.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn editor(&self) -> &E {
        &self.editor
    }

    /// Executes the next command.
    ///
    /// Does nothing once the session is finished. Reaching the end of
    /// the program, by M02 or by exhausting the command list, moves
    /// the session to [`ExecMode::Finished`].
    pub fn step(&mut self) {
        if self.session.mode() == ExecMode::Finished {
            return;
        }
        match self.session.execute_next() {
            Some((line, effect)) => {
                self.highlight(line);
                match effect {
                    StepEffect::Draw(segment) => {
                        self.track_bounds(&segment);
                        render_segment(&mut self.surface, &segment);
                    }
                    StepEffect::EndProgram => {
                        self.finish();
                        return;
                    }
                    StepEffect::None => {}
                }
                if self.session.at_end() {
                    self.finish();
                } else if self.session.mode() != ExecMode::Running {
                    self.session.set_mode(ExecMode::Stepping);
                }
            }
            None => self.finish(),
        }
    }

    /// Marks the session as running. The caller is expected to pace
    /// steps on a timer, see [`crate::spawn_run`].
    pub fn start(&mut self) {
        self.session.set_mode(ExecMode::Running);
    }

    /// Suspends a continuous run. Has no effect in any other mode.
    pub fn pause(&mut self) {
        if self.session.mode() == ExecMode::Running {
            self.session.set_mode(ExecMode::Paused);
        }
    }

    /// Rewinds the session and wipes everything derived from it: the
    /// surface, the highlight, and the accumulated bounds.
    pub fn reset(&mut self) {
        self.session.reset();
        self.surface.clear();
        let width = self.session.machine().scale() * STROKE_WIDTH_FACTOR;
        self.surface.set_stroke_width(width as f32);
        self.editor.clear_all_highlights();
        self.highlighted = None;
        self.bounds = Bounds::new();
        debug!("session {} reset", self.session.id());
    }

    /// Updates the run speed in place, without disturbing execution.
    pub fn update_speed(&mut self, speed: f64) {
        self.session.set_speed(speed);
    }

    fn finish(&mut self) {
        self.session.set_mode(ExecMode::Finished);
        info!(
            "session {} finished after {} commands",
            self.session.id(),
            self.session.machine().cursor()
        );
    }

    /// Moves the editor highlight, clearing the previous one first.
    fn highlight(&mut self, line: usize) {
        if let Some(previous) = self.highlighted {
            self.editor.clear_line_highlight(previous);
        }
        self.editor.set_line_highlight(line);
        self.highlighted = Some(line);
    }

    fn track_bounds(&mut self, segment: &PathSegment) {
        match segment {
            PathSegment::Line { from, to } => {
                self.bounds.expand(*from);
                self.bounds.expand(*to);
            }
            // An arc cannot leave the box around its full circle.
            PathSegment::Arc { center, radius, .. } => {
                self.bounds
                    .expand(Point::new(center.x - radius, center.y - radius));
                self.bounds
                    .expand(Point::new(center.x + radius, center.y + radius));
            }
        }
    }
}
