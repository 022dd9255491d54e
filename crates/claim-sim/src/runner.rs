//! Timer-driven auto-advance for a claim simulation.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{Instant, Interval, MissedTickBehavior};
use tracing::{debug, warn};

use crate::engine::{ClaimSimulation, RunToken, SimulationRunState, TickOutcome};

/// A simulation shared between its owner and the auto-advance task.
pub type SharedSimulation = Arc<Mutex<ClaimSimulation>>;

/// Source of auto-advance ticks.
#[async_trait]
pub trait StepTimer: Send {
    /// Wait for the next tick. `false` means the source is exhausted.
    async fn wait(&mut self) -> bool;
}

/// Shortest period an [`IntervalTimer`] will tick at.
pub const MIN_STEP_INTERVAL: Duration = Duration::from_millis(1);

/// Fixed-period ticks on the tokio clock. The first tick fires one period
/// after creation.
pub struct IntervalTimer {
    interval: Interval,
}

impl IntervalTimer {
    /// A zero period is raised to [`MIN_STEP_INTERVAL`].
    pub fn new(period: Duration) -> Self {
        let period = period.max(MIN_STEP_INTERVAL);
        let mut interval = tokio::time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self { interval }
    }
}

#[async_trait]
impl StepTimer for IntervalTimer {
    async fn wait(&mut self) -> bool {
        self.interval.tick().await;
        true
    }
}

/// Why an auto-advance loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoAdvanceExit {
    /// The run reached its last step and was evaluated.
    Finished,
    /// The run was stopped, reset or restarted.
    Superseded,
    /// The timer stopped producing ticks.
    TimerClosed,
}

/// Feed ticks from `timer` into the run identified by `token` until the
/// run ends.
pub async fn run_auto_advance<T: StepTimer>(
    simulation: SharedSimulation,
    token: RunToken,
    mut timer: T,
) -> AutoAdvanceExit {
    loop {
        if !timer.wait().await {
            debug!("Step timer closed");
            return AutoAdvanceExit::TimerClosed;
        }

        let outcome = simulation.lock().await.tick(token);
        match outcome {
            TickOutcome::Advanced(_) => continue,
            TickOutcome::Evaluated => return AutoAdvanceExit::Finished,
            TickOutcome::Stale => return AutoAdvanceExit::Superseded,
        }
    }
}

/// Owns a simulation and at most one auto-advance task for it.
///
/// Dropping the session aborts the task and disarms the run it started, so
/// no tick can land after the owner is gone. If another handle holds the
/// lock at that moment, the disarm runs on a spawned task once the lock is
/// free; outside a tokio runtime it is skipped with a warning.
pub struct SimulationSession {
    simulation: SharedSimulation,
    runner: Option<JoinHandle<AutoAdvanceExit>>,
    /// Run started by this session, for teardown.
    token: Option<RunToken>,
}

impl SimulationSession {
    pub fn new(simulation: ClaimSimulation) -> Self {
        Self {
            simulation: Arc::new(Mutex::new(simulation)),
            runner: None,
            token: None,
        }
    }

    /// Handle for reading state or changing parameters.
    pub fn shared(&self) -> SharedSimulation {
        Arc::clone(&self.simulation)
    }

    /// Start a run ticking at the configured step interval.
    pub async fn start(&mut self) -> Option<RunToken> {
        let period = self.simulation.lock().await.step_interval();
        self.start_with_timer(IntervalTimer::new(period)).await
    }

    /// Start a run driven by `timer`. Any earlier run is cancelled first.
    pub async fn start_with_timer<T>(&mut self, timer: T) -> Option<RunToken>
    where
        T: StepTimer + 'static,
    {
        self.abort_runner();

        let token = self.simulation.lock().await.start();
        self.token = token;
        let token = token?;
        let simulation = Arc::clone(&self.simulation);
        self.runner = Some(tokio::spawn(run_auto_advance(simulation, token, timer)));
        Some(token)
    }

    /// Cancel the current run. Idempotent.
    pub async fn stop(&mut self) {
        self.abort_runner();
        self.token = None;
        self.simulation.lock().await.stop();
    }

    /// Wait for the current auto-advance task to end.
    ///
    /// `None` if no task was running or it was cancelled.
    pub async fn wait(&mut self) -> Option<AutoAdvanceExit> {
        let runner = self.runner.take()?;
        match runner.await {
            Ok(exit) => Some(exit),
            Err(e) if e.is_cancelled() => None,
            Err(e) => {
                warn!(error = %e, "Auto-advance task failed");
                None
            }
        }
    }

    /// Copy of the current display state.
    pub async fn snapshot(&self) -> SimulationRunState {
        self.simulation.lock().await.state().clone()
    }

    fn abort_runner(&mut self) {
        if let Some(runner) = self.runner.take() {
            runner.abort();
        }
    }
}

impl Drop for SimulationSession {
    fn drop(&mut self) {
        self.abort_runner();
        let Some(token) = self.token.take() else {
            return;
        };

        if let Ok(mut simulation) = self.simulation.try_lock() {
            simulation.stop_run(token);
            return;
        }

        // Another handle holds the lock: disarm once it is released.
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let simulation = Arc::clone(&self.simulation);
                handle.spawn(async move {
                    simulation.lock().await.stop_run(token);
                });
            }
            Err(_) => warn!("Simulation locked at teardown outside a runtime; run stays armed"),
        }
    }
}
