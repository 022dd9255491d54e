//! `claim` subcommand.

use std::path::PathBuf;

use anyhow::{Context, Result};
use claim_sim::{
    AutoAdvanceExit, ClaimConfig, ClaimSimulation, ParamsUpdate, PredictTime, SimulationRunState,
    SimulationSession, TyphoonLevel, FINAL_STEP,
};
use serde::Serialize;
use tracing::{info, warn};

pub struct ClaimArgs {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub level: Option<TyphoonLevel>,
    pub impact: bool,
    pub predict_time: Option<PredictTime>,
    pub debug: bool,
    pub config: Option<PathBuf>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ClaimReport {
    mode: &'static str,
    step_title: &'static str,
    #[serde(flatten)]
    state: SimulationRunState,
}

pub async fn run(args: ClaimArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => ClaimConfig::from_yaml_file(path)
            .with_context(|| format!("Failed to load claim config from {}", path.display()))?,
        None => {
            let config = ClaimConfig::from_env();
            config
                .validate()
                .map_err(|e| anyhow::anyhow!("Invalid claim configuration: {}", e))?;
            config
        }
    };

    let mut update = ParamsUpdate {
        lat: args.lat.map(Some),
        lon: args.lon.map(Some),
        ..Default::default()
    }
    .impact_region(args.impact);
    if let Some(level) = args.level {
        update = update.typhoon_level(level);
    }
    if let Some(time) = args.predict_time {
        update = update.predict_time(time);
    }

    let mut simulation = ClaimSimulation::new(config);
    simulation.set_debug_mode(args.debug);
    simulation.set_params(update);

    let report = if args.debug {
        run_stepped(simulation)
    } else {
        run_timed(simulation).await
    };

    crate::print_json(&report)
}

/// Walk every stage by hand, logging each one.
fn run_stepped(mut simulation: ClaimSimulation) -> ClaimReport {
    if simulation.start().is_some() {
        for _ in 0..=FINAL_STEP {
            info!(step = simulation.current_step().title, "Stage");
            simulation.next_debug_step();
        }
    }

    ClaimReport {
        mode: "debug",
        step_title: simulation.current_step().title,
        state: simulation.state().clone(),
    }
}

async fn run_timed(simulation: ClaimSimulation) -> ClaimReport {
    let interval = simulation.step_interval();
    let mut session = SimulationSession::new(simulation);

    if session.start().await.is_some() {
        info!(interval_ms = interval.as_millis() as u64, "Auto-advancing claim simulation");
        match session.wait().await {
            Some(AutoAdvanceExit::Finished) => {}
            other => warn!(exit = ?other, "Claim simulation ended early"),
        }
    }

    let shared = session.shared();
    let simulation = shared.lock().await;
    ClaimReport {
        mode: "auto",
        step_title: simulation.current_step().title,
        state: simulation.state().clone(),
    }
}
