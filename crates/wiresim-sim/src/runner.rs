//! Timer-paced continuous execution on the tokio runtime.

use tokio::task::JoinHandle;
use tracing::info;
use wiresim_core::ThreadSafe;
use wiresim_editor::EditorSurface;
use wiresim_render::DrawSurface;

use crate::session::ExecMode;
use crate::simulator::Simulator;

/// Paces a running simulator until it leaves [`ExecMode::Running`].
///
/// The interval is re-read before every sleep, so speed changes made
/// through the shared handle take effect on the next step. The lock is
/// never held across the sleep; pausing from another task therefore
/// takes effect no later than the next wake, before any command runs.
pub async fn run_loop<S, E>(simulator: ThreadSafe<Simulator<S, E>>)
where
    S: DrawSurface,
    E: EditorSurface,
{
    loop {
        let interval = {
            let sim = simulator.lock();
            if sim.mode() != ExecMode::Running {
                break;
            }
            sim.session().step_interval()
        };
        tokio::time::sleep(interval).await;
        let mut sim = simulator.lock();
        if sim.mode() != ExecMode::Running {
            break;
        }
        sim.step();
    }
}

/// Marks the simulator as running and spawns [`run_loop`] for it.
pub fn spawn_run<S, E>(simulator: ThreadSafe<Simulator<S, E>>) -> JoinHandle<()>
where
    S: DrawSurface + 'static,
    E: EditorSurface + 'static,
{
    {
        let mut sim = simulator.lock();
        sim.start();
        info!(
            "session {} running at {} steps/s",
            sim.session().id(),
            sim.session().speed()
        );
    }
    tokio::spawn(run_loop(simulator))
}
