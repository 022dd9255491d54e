//! Parametric typhoon claim simulation.
//!
//! A four-stage presentation state machine (fetch risk data, match the
//! parametric condition, calculate the payout, done) that evaluates a fixed
//! rule table once it reaches its last stage.
//!
//! The engine itself is synchronous: [`ClaimSimulation::tick`] is the timer
//! transition and [`ClaimSimulation::next_debug_step`] the manual one.
//! [`SimulationSession`] drives ticks from a tokio task through a pluggable
//! [`StepTimer`], so tests can step deterministically.
//!
//! ```ignore
//! use claim_sim::{ClaimSimulation, ParamsUpdate, SimulationSession, TyphoonLevel, PredictTime};
//!
//! let mut sim = ClaimSimulation::default();
//! sim.set_params(
//!     ParamsUpdate::new()
//!         .location(28.5, 121.5)
//!         .typhoon_level(TyphoonLevel::Level9To10)
//!         .impact_region(true)
//!         .predict_time(PredictTime::OneWeek),
//! );
//!
//! let mut session = SimulationSession::new(sim);
//! session.start().await;
//! session.wait().await;
//! println!("{}", session.snapshot().await.result_message);
//! ```

pub mod config;
pub mod engine;
pub mod params;
pub mod premium;
pub mod rules;
pub mod runner;
pub mod steps;

pub use config::{ClaimConfig, LevelFactors};
pub use engine::{ClaimSimulation, RunToken, SimulationRunState, TickOutcome};
pub use params::{ParamsUpdate, PredictTime, SimulationParams, TyphoonLevel};
pub use premium::{calculate_premium, PremiumQuote};
pub use rules::{match_rule, ClaimRule, CLAIM_RULES};
pub use runner::{
    run_auto_advance, AutoAdvanceExit, IntervalTimer, SharedSimulation, SimulationSession,
    StepTimer, MIN_STEP_INTERVAL,
};
pub use steps::{SimulationStep, FINAL_STEP, STEPS};
