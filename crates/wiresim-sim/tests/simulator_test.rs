use std::time::Duration;

use proptest::prelude::*;
use wiresim_core::{thread_safe, Point};
use wiresim_editor::{HighlightBuffer, NullEditor};
use wiresim_render::{DrawSurface, NullSurface};
use wiresim_sim::{spawn_run, ExecMode, Simulator};

/// Records surface calls so tests can assert on draw order.
#[derive(Debug, Clone, PartialEq)]
enum Op {
    Clear,
    StrokeWidth(f32),
    Line(Point, Point),
    Arc(Point, f64),
}

#[derive(Default)]
struct RecordingSurface {
    ops: Vec<Op>,
}

impl RecordingSurface {
    fn lines(&self) -> usize {
        self.ops.iter().filter(|op| matches!(op, Op::Line(..))).count()
    }

    fn clears(&self) -> usize {
        self.ops.iter().filter(|op| matches!(op, Op::Clear)).count()
    }
}

impl DrawSurface for RecordingSurface {
    fn width(&self) -> u32 {
        800
    }

    fn height(&self) -> u32 {
        600
    }

    fn clear(&mut self) {
        self.ops.push(Op::Clear);
    }

    fn set_stroke_width(&mut self, width: f32) {
        self.ops.push(Op::StrokeWidth(width));
    }

    fn stroke_line(&mut self, from: Point, to: Point) {
        self.ops.push(Op::Line(from, to));
    }

    fn stroke_arc(
        &mut self,
        center: Point,
        radius: f64,
        _start_angle: f64,
        _end_angle: f64,
        _clockwise: bool,
    ) {
        self.ops.push(Op::Arc(center, radius));
    }
}

fn simulator(text: &str) -> Simulator<RecordingSurface, NullEditor> {
    Simulator::from_text(text, 5.0, 10.0, RecordingSurface::default(), NullEditor).unwrap()
}

fn headless(text: &str) -> Simulator<NullSurface, NullEditor> {
    Simulator::from_text(text, 5.0, 10.0, NullSurface::new(800, 600), NullEditor).unwrap()
}

#[test]
fn test_new_simulator_prepares_the_surface() {
    let sim = simulator("G01 X1");
    assert_eq!(sim.mode(), ExecMode::Idle);
    assert_eq!(sim.cursor(), 0);
    // Cleared once and given the scale-derived stroke width.
    assert_eq!(sim.surface().ops, vec![Op::Clear, Op::StrokeWidth(15.0)]);
}

#[test]
fn test_step_executes_one_command() {
    let mut sim = simulator("G01 X1\nG01 Y1");
    sim.step();

    assert_eq!(sim.mode(), ExecMode::Stepping);
    assert_eq!(sim.cursor(), 1);
    assert_eq!(sim.session().machine().position(), Point::new(10.0, 0.0));
    assert_eq!(sim.surface().lines(), 1);
}

#[test]
fn test_stepping_past_the_end_is_harmless() {
    let mut sim = simulator("G01 X1\nG01 Y1");
    for _ in 0..5 {
        sim.step();
    }
    assert_eq!(sim.mode(), ExecMode::Finished);
    assert_eq!(sim.cursor(), 2);
    assert_eq!(sim.surface().lines(), 2);
}

#[test]
fn test_end_of_program_command_stops_execution() {
    let mut sim = simulator("G01 X1\nM02\nG01 X5");
    sim.step();
    sim.step();
    assert_eq!(sim.mode(), ExecMode::Finished);

    sim.step();
    // The command after M02 never runs.
    assert_eq!(sim.cursor(), 2);
    assert_eq!(sim.session().machine().position(), Point::new(10.0, 0.0));
    assert_eq!(sim.surface().lines(), 1);
}

#[test]
fn test_empty_program_finishes_immediately() {
    let mut sim = simulator("");
    sim.step();
    assert_eq!(sim.mode(), ExecMode::Finished);
    assert_eq!(sim.cursor(), 0);
}

#[test]
fn test_highlight_follows_the_cursor() {
    let text = "G01 X1\n; cut the notch\nG01 Y1";
    let mut sim =
        Simulator::from_text(text, 5.0, 10.0, RecordingSurface::default(), HighlightBuffer::from(text))
            .unwrap();
    assert_eq!(sim.highlighted_line(), None);

    sim.step();
    assert_eq!(sim.highlighted_line(), Some(0));
    assert!(sim.editor().is_highlighted(0));

    sim.step();
    // The comment line is never highlighted and the old tag is gone.
    assert_eq!(sim.highlighted_line(), Some(2));
    assert!(!sim.editor().is_highlighted(0));
    assert_eq!(sim.editor().highlighted_lines(), &[2]);
}

#[test]
fn test_finish_keeps_the_last_highlight() {
    let text = "G01 X1";
    let mut sim =
        Simulator::from_text(text, 5.0, 10.0, RecordingSurface::default(), HighlightBuffer::from(text))
            .unwrap();
    sim.step();
    assert_eq!(sim.mode(), ExecMode::Finished);
    assert!(sim.editor().is_highlighted(0));
}

#[test]
fn test_reset_clears_derived_state() {
    let text = "G01 X1\nG01 Y1";
    let mut sim =
        Simulator::from_text(text, 5.0, 10.0, RecordingSurface::default(), HighlightBuffer::from(text))
            .unwrap();
    sim.step();
    sim.step();

    sim.reset();
    assert_eq!(sim.mode(), ExecMode::Idle);
    assert_eq!(sim.cursor(), 0);
    assert_eq!(sim.session().machine().position(), Point::ZERO);
    assert_eq!(sim.highlighted_line(), None);
    assert!(sim.editor().highlighted_lines().is_empty());
    assert!(sim.bounds().is_empty());
    // The surface was wiped and re-prepared.
    assert_eq!(sim.surface().clears(), 2);
    assert_eq!(
        sim.surface().ops.last(),
        Some(&Op::StrokeWidth(15.0))
    );
}

#[test]
fn test_drawing_accumulates_between_resets() {
    let mut sim = simulator("G01 X1\nG01 Y1\nG01 X0");
    sim.step();
    sim.step();
    sim.step();
    assert_eq!(sim.surface().lines(), 3);
    assert_eq!(sim.surface().clears(), 1);
}

#[test]
fn test_bounds_cover_lines_and_arcs() {
    let mut sim = simulator("G01 X1 Y2\nG02 X3 I1");
    sim.step();
    let bounds = sim.bounds();
    assert_eq!(bounds.min_x, 0.0);
    assert_eq!(bounds.max_y, 20.0);

    sim.step();
    // The arc at centre (20, 20) radius 10 widens the box.
    let bounds = sim.bounds();
    assert_eq!(bounds.min_x, 0.0);
    assert_eq!(bounds.min_y, 0.0);
    assert_eq!(bounds.max_x, 30.0);
    assert_eq!(bounds.max_y, 30.0);
}

#[test]
fn test_update_speed_reshapes_the_interval() {
    let mut sim = headless("G01 X1");
    assert_eq!(sim.session().step_interval(), Duration::from_millis(200));

    sim.update_speed(10.0);
    assert_eq!(sim.session().step_interval(), Duration::from_millis(100));

    sim.update_speed(f64::NAN);
    assert_eq!(sim.session().step_interval(), Duration::from_millis(100));

    sim.update_speed(1e9);
    assert_eq!(sim.session().speed(), 1000.0);
}

#[test]
fn test_pause_only_affects_a_running_session() {
    let mut sim = headless("G01 X1\nG01 Y1");
    sim.pause();
    assert_eq!(sim.mode(), ExecMode::Idle);

    sim.step();
    sim.pause();
    assert_eq!(sim.mode(), ExecMode::Stepping);

    sim.start();
    sim.pause();
    assert_eq!(sim.mode(), ExecMode::Paused);
}

#[test]
fn test_restarting_a_finished_session_finishes_again() {
    let mut sim = headless("G01 X1");
    sim.step();
    assert_eq!(sim.mode(), ExecMode::Finished);

    sim.start();
    sim.step();
    assert_eq!(sim.mode(), ExecMode::Finished);
    assert_eq!(sim.cursor(), 1);
}

proptest! {
    #[test]
    fn prop_cursor_is_capped_at_command_count(
        lines in prop::collection::vec("G0[123]( [XY][0-9]{1,2})?", 0..12),
        steps in 0usize..20,
    ) {
        let mut sim = Simulator::from_text(
            &lines.join("\n"),
            5.0,
            10.0,
            NullSurface::new(800, 600),
            NullEditor,
        )
        .unwrap();
        let count = sim.session().command_count();
        for _ in 0..steps {
            sim.step();
        }
        prop_assert_eq!(sim.cursor(), steps.min(count));
    }
}

#[tokio::test(start_paused = true)]
async fn test_run_executes_to_completion() {
    let sim = thread_safe(simulator("G01 X1\nG01 Y1\nG01 X0"));
    spawn_run(sim.clone()).await.unwrap();

    let sim = sim.lock();
    assert_eq!(sim.mode(), ExecMode::Finished);
    assert_eq!(sim.cursor(), 3);
    assert_eq!(sim.session().machine().position(), Point::new(0.0, 10.0));
    assert_eq!(sim.surface().lines(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_pause_before_the_first_wake_runs_nothing() {
    let sim = thread_safe(simulator("G01 X1\nG01 Y1"));
    let handle = spawn_run(sim.clone());

    // The first step only happens after a full interval.
    sim.lock().pause();
    handle.await.unwrap();

    let sim = sim.lock();
    assert_eq!(sim.mode(), ExecMode::Paused);
    assert_eq!(sim.cursor(), 0);
    assert_eq!(sim.surface().lines(), 0);
}
