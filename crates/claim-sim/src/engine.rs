//! The claim simulation state machine.

use std::time::Duration;

use serde::Serialize;
use tracing::{debug, info};

use crate::config::ClaimConfig;
use crate::params::{ParamsUpdate, SimulationParams};
use crate::premium::{calculate_premium, PremiumQuote};
use crate::rules::match_rule;
use crate::steps::{SimulationStep, FINAL_STEP, STEPS};

const INCOMPLETE_ON_START: &str = "请提供完整的参数以进行理赔模拟。";
const INCOMPLETE_ON_EVALUATE: &str = "参数不完整，无法进行赔付核算。";
const PAYOUT_PREFIX: &str = "恭喜您！";
const NO_PAYOUT_PREFIX: &str = "根据当前参数，";
const MISSED_REGION: &str = "台风未命中承保区域，因此不触发赔付。";
const BELOW_TRIGGER: &str =
    "本次台风预测未达到触发提前赔付的条件（例如：强度未达标，或预测时间不符），因此不触发提前赔付。";

/// Identifies one armed auto-advance run.
///
/// Starting again or stopping invalidates the previous token, so a late
/// tick from an old timer cannot move the current run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RunToken(u64);

/// What a [`ClaimSimulation::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Moved to the given step; the run stays armed.
    Advanced(usize),
    /// Was on the last step: disarmed and evaluated.
    Evaluated,
    /// The token is not the armed run; nothing changed.
    Stale,
}

/// Display state of the current run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationRunState {
    pub current_step: usize,
    pub complete: bool,
    pub result_message: String,
    pub estimated_premium: PremiumQuote,
    pub has_payout: bool,
}

/// Step-driven claim simulation.
///
/// One instance per consumer. In auto mode a timer calls [`Self::tick`];
/// in debug mode the caller advances with [`Self::next_debug_step`].
#[derive(Debug, Default)]
pub struct ClaimSimulation {
    config: ClaimConfig,
    params: SimulationParams,
    state: SimulationRunState,
    debug_mode: bool,
    armed: Option<RunToken>,
    runs_started: u64,
}

impl ClaimSimulation {
    pub fn new(config: ClaimConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &ClaimConfig {
        &self.config
    }

    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    pub fn state(&self) -> &SimulationRunState {
        &self.state
    }

    pub fn debug_mode(&self) -> bool {
        self.debug_mode
    }

    /// Whether an auto-advance run is armed.
    pub fn is_running(&self) -> bool {
        self.armed.is_some()
    }

    pub fn current_step(&self) -> &'static SimulationStep {
        &STEPS[self.state.current_step.min(FINAL_STEP)]
    }

    pub fn step_interval(&self) -> Duration {
        self.config.step_interval()
    }

    /// Shallow-merge `update` into the parameters.
    pub fn set_params(&mut self, update: ParamsUpdate) {
        update.apply(&mut self.params);
    }

    /// Begin a run.
    ///
    /// With incomplete parameters the run finishes immediately with a notice
    /// and no token is returned. Otherwise the returned token must be passed
    /// to every [`Self::tick`] of this run.
    pub fn start(&mut self) -> Option<RunToken> {
        self.reset_display();

        if !self.params.is_complete() {
            self.state.result_message = INCOMPLETE_ON_START.to_string();
            self.state.complete = true;
            self.state.estimated_premium = PremiumQuote::NotAvailable;
            info!("Claim simulation not started, parameters incomplete");
            return None;
        }

        // Debug mode arms the timer too; the first manual step disarms it.
        self.runs_started += 1;
        let token = RunToken(self.runs_started);
        self.armed = Some(token);
        debug!(run = token.0, debug_mode = self.debug_mode, "Claim simulation armed");
        Some(token)
    }

    /// Timer transition for the run identified by `token`.
    pub fn tick(&mut self, token: RunToken) -> TickOutcome {
        if self.armed != Some(token) {
            return TickOutcome::Stale;
        }

        if self.state.current_step < FINAL_STEP {
            self.state.current_step += 1;
            debug!(run = token.0, step = self.state.current_step, "Claim simulation advanced");
            TickOutcome::Advanced(self.state.current_step)
        } else {
            self.armed = None;
            self.evaluate();
            TickOutcome::Evaluated
        }
    }

    /// Manual transition: advance one step, or evaluate on the last step.
    pub fn next_debug_step(&mut self) {
        self.stop();
        if self.state.current_step < FINAL_STEP {
            self.state.current_step += 1;
            debug!(step = self.state.current_step, "Claim simulation stepped manually");
        } else {
            self.evaluate();
        }
    }

    /// Cancel any pending auto-advance. Idempotent.
    pub fn stop(&mut self) {
        self.armed = None;
    }

    /// Cancel the run identified by `token` if it is still the armed one.
    /// A newer run is left alone.
    pub fn stop_run(&mut self, token: RunToken) {
        if self.armed == Some(token) {
            self.armed = None;
        }
    }

    /// Stop and clear the display state. Parameters are kept.
    pub fn reset_display(&mut self) {
        self.stop();
        self.state = SimulationRunState::default();
    }

    /// Clear the display state and every parameter.
    pub fn reset_all(&mut self) {
        self.reset_display();
        self.params = SimulationParams::default();
    }

    /// Switch mode. Always resets everything.
    pub fn set_debug_mode(&mut self, debug_mode: bool) {
        self.debug_mode = debug_mode;
        self.reset_all();
    }

    fn evaluate(&mut self) {
        let params = &self.params;

        if !params.is_complete() {
            self.state.result_message = INCOMPLETE_ON_EVALUATE.to_string();
            self.state.estimated_premium = PremiumQuote::NotAvailable;
            self.state.has_payout = false;
            self.state.complete = true;
            return;
        }

        self.state.estimated_premium = calculate_premium(params, &self.config);

        match match_rule(params) {
            Some(rule) if rule.triggers_payout() => {
                self.state.result_message = format!("{}{}", PAYOUT_PREFIX, rule.message);
                self.state.has_payout = true;
            }
            _ => {
                let reason = if params.impact_region {
                    BELOW_TRIGGER
                } else {
                    MISSED_REGION
                };
                self.state.result_message = format!("{}{}", NO_PAYOUT_PREFIX, reason);
                self.state.has_payout = false;
            }
        }
        self.state.complete = true;

        info!(
            level = %self.params.typhoon_level,
            predict_time = %self.params.predict_time,
            impact_region = self.params.impact_region,
            has_payout = self.state.has_payout,
            premium = %self.state.estimated_premium,
            "Claim simulation evaluated"
        );
    }
}
