//! Behavioural tests for the claim simulation engine.

use claim_sim::{
    ClaimConfig, ClaimSimulation, ParamsUpdate, PredictTime, PremiumQuote, SimulationParams,
    TickOutcome, TyphoonLevel, FINAL_STEP, STEPS,
};
use test_utils::fixtures::points::{
    INSURED_CENTER, INSURED_NE_CORNER, INSURED_OFF_CENTER, OUTSIDE,
};

fn sim_with(
    (lat, lon): (f64, f64),
    level: TyphoonLevel,
    impact: bool,
    time: PredictTime,
) -> ClaimSimulation {
    let mut sim = ClaimSimulation::new(ClaimConfig::default());
    sim.set_params(
        ParamsUpdate::new()
            .location(lat, lon)
            .typhoon_level(level)
            .impact_region(impact)
            .predict_time(time),
    );
    sim
}

/// Start a run and tick it to completion.
fn run_to_end(sim: &mut ClaimSimulation) {
    let token = sim.start().expect("parameters are complete");
    for _ in 0..FINAL_STEP {
        assert!(matches!(sim.tick(token), TickOutcome::Advanced(_)));
    }
    assert_eq!(sim.tick(token), TickOutcome::Evaluated);
}

// ============================================================================
// Payout tests
// ============================================================================

#[test]
fn test_level9_10_one_week_pays_fifty_percent() {
    let mut sim = sim_with(
        INSURED_CENTER,
        TyphoonLevel::Level9To10,
        true,
        PredictTime::OneWeek,
    );
    run_to_end(&mut sim);

    let state = sim.state();
    assert!(state.complete);
    assert!(state.has_payout);
    assert!(state.result_message.starts_with("恭喜您！"));
    assert!(state.result_message.contains("50%"));
    assert_eq!(state.current_step, FINAL_STEP);
    assert_eq!(state.estimated_premium.to_string(), "¥ 2000.00");
}

#[test]
fn test_zero_percent_rule_does_not_pay() {
    let mut sim = sim_with(
        INSURED_CENTER,
        TyphoonLevel::Level5To6,
        true,
        PredictTime::OneWeek,
    );
    run_to_end(&mut sim);

    let state = sim.state();
    assert!(state.complete);
    assert!(!state.has_payout);
    assert!(state.result_message.starts_with("根据当前参数，"));
    assert!(state.result_message.contains("未达到触发提前赔付的条件"));
    assert_eq!(state.estimated_premium.to_string(), "¥ 1000.00");
}

#[test]
fn test_missed_region_message() {
    let mut sim = sim_with(
        INSURED_CENTER,
        TyphoonLevel::Level9To10,
        false,
        PredictTime::TwoWeeks,
    );
    run_to_end(&mut sim);

    let state = sim.state();
    assert!(!state.has_payout);
    assert!(state.result_message.contains("台风未命中承保区域"));
}

#[test]
fn test_unmatched_with_impact_message() {
    let mut sim = sim_with(
        INSURED_CENTER,
        TyphoonLevel::Level7To8,
        true,
        PredictTime::OneWeek,
    );
    run_to_end(&mut sim);

    assert!(!sim.state().has_payout);
    assert!(sim.state().result_message.contains("未达到触发提前赔付的条件"));
}

#[test]
fn test_payout_outside_region_still_quotes_out_of_coverage() {
    let mut sim = sim_with(OUTSIDE, TyphoonLevel::Level7To8, true, PredictTime::TwoWeeks);
    run_to_end(&mut sim);

    let state = sim.state();
    assert!(state.has_payout);
    assert_eq!(state.estimated_premium, PremiumQuote::OutOfCoverage);
    assert_eq!(state.estimated_premium.to_string(), "不在承保范围");
}

#[test]
fn test_off_center_premium_loading() {
    let mut sim = sim_with(
        INSURED_OFF_CENTER,
        TyphoonLevel::Level5To6,
        true,
        PredictTime::TwoWeeks,
    );
    run_to_end(&mut sim);
    assert_eq!(sim.state().estimated_premium.to_string(), "¥ 1100.00");
    assert!(sim.state().result_message.contains("10%"));
}

#[test]
fn test_region_corner_is_covered() {
    let mut sim = sim_with(
        INSURED_NE_CORNER,
        TyphoonLevel::Level9To10,
        true,
        PredictTime::TwoWeeks,
    );
    run_to_end(&mut sim);
    assert_eq!(sim.state().estimated_premium.to_string(), "¥ 2600.00");
}

// ============================================================================
// Incomplete parameter tests
// ============================================================================

#[test]
fn test_incomplete_params_finish_immediately() {
    let mut sim = sim_with(
        INSURED_CENTER,
        TyphoonLevel::Level9To10,
        true,
        PredictTime::None,
    );

    assert!(sim.start().is_none());
    let state = sim.state();
    assert!(state.complete);
    assert!(!state.has_payout);
    assert_eq!(state.current_step, 0);
    assert_eq!(state.estimated_premium.to_string(), "N/A");
    assert_eq!(state.result_message, "请提供完整的参数以进行理赔模拟。");
    assert!(!sim.is_running());
}

#[test]
fn test_params_cleared_mid_run_evaluate_as_incomplete() {
    let mut sim = sim_with(
        INSURED_CENTER,
        TyphoonLevel::Level9To10,
        true,
        PredictTime::OneWeek,
    );
    let token = sim.start().unwrap();
    sim.tick(token);
    sim.set_params(ParamsUpdate {
        lat: Some(None),
        ..Default::default()
    });
    sim.tick(token);
    sim.tick(token);
    assert_eq!(sim.tick(token), TickOutcome::Evaluated);

    let state = sim.state();
    assert!(state.complete);
    assert!(!state.has_payout);
    assert_eq!(state.estimated_premium, PremiumQuote::NotAvailable);
    assert_eq!(state.result_message, "参数不完整，无法进行赔付核算。");
}

// ============================================================================
// Debug mode tests
// ============================================================================

#[test]
fn test_debug_mode_toggle_resets_everything() {
    for flag in [true, false, true] {
        let mut sim = sim_with(
            INSURED_CENTER,
            TyphoonLevel::Level9To10,
            true,
            PredictTime::OneWeek,
        );
        run_to_end(&mut sim);
        assert!(sim.state().complete);

        sim.set_debug_mode(flag);
        assert_eq!(sim.debug_mode(), flag);
        assert_eq!(sim.params(), &SimulationParams::default());
        assert_eq!(sim.state().current_step, 0);
        assert!(!sim.state().complete);
        assert!(sim.state().result_message.is_empty());
        assert_eq!(sim.state().estimated_premium, PremiumQuote::Pending);
        assert!(!sim.state().has_payout);
        assert!(!sim.is_running());
    }
}

#[test]
fn test_debug_stepping_walks_every_stage() {
    let mut sim = ClaimSimulation::default();
    sim.set_debug_mode(true);
    sim.set_params(
        ParamsUpdate::new()
            .location(INSURED_CENTER.0, INSURED_CENTER.1)
            .typhoon_level(TyphoonLevel::Level9To10)
            .impact_region(true)
            .predict_time(PredictTime::TwoWeeks),
    );
    sim.start().unwrap();

    let mut titles = vec![sim.current_step().title];
    for _ in 0..FINAL_STEP {
        sim.next_debug_step();
        titles.push(sim.current_step().title);
        assert!(!sim.state().complete);
    }
    assert_eq!(titles, STEPS.iter().map(|s| s.title).collect::<Vec<_>>());

    sim.next_debug_step();
    assert!(sim.state().complete);
    assert!(sim.state().has_payout);
    assert!(sim.state().result_message.contains("40%"));
}

// ============================================================================
// Reset tests
// ============================================================================

#[test]
fn test_reset_display_keeps_params() {
    let mut sim = sim_with(
        INSURED_CENTER,
        TyphoonLevel::Level9To10,
        true,
        PredictTime::OneWeek,
    );
    run_to_end(&mut sim);
    let params = sim.params().clone();

    sim.reset_display();
    assert_eq!(sim.params(), &params);
    assert!(!sim.state().complete);
    assert_eq!(sim.state().current_step, 0);
}

#[test]
fn test_reset_all_clears_params() {
    let mut sim = sim_with(
        INSURED_CENTER,
        TyphoonLevel::Level9To10,
        true,
        PredictTime::OneWeek,
    );
    let token = sim.start().unwrap();
    sim.reset_all();

    assert_eq!(sim.params(), &SimulationParams::default());
    assert_eq!(sim.tick(token), TickOutcome::Stale);
}

#[test]
fn test_state_serializes_camel_case() {
    let mut sim = sim_with(
        INSURED_CENTER,
        TyphoonLevel::Level7To8,
        true,
        PredictTime::TwoWeeks,
    );
    run_to_end(&mut sim);

    let json = serde_json::to_value(sim.state()).unwrap();
    assert_eq!(json["currentStep"], 3);
    assert_eq!(json["hasPayout"], true);
    assert_eq!(json["estimatedPremium"], "¥ 1500.00");
}
