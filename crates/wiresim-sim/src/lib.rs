//! Machine interpreter and execution control.
//!
//! [`MachineState`] interprets parsed commands one at a time and reports
//! what each one means for the toolpath. [`Session`] pairs a parsed
//! program with machine state and pacing. [`Simulator`] drives a session
//! against a drawing surface and an editor, and [`spawn_run`] paces it on
//! a tokio timer for continuous execution.

pub mod machine;
pub mod runner;
pub mod session;
pub mod simulator;

pub use machine::{MachineState, StepEffect};
pub use runner::{run_loop, spawn_run};
pub use session::{ExecMode, Session};
pub use simulator::Simulator;
