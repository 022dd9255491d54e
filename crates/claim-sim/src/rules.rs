//! The fixed parametric payout table.

use crate::params::{PredictTime, SimulationParams, TyphoonLevel};

/// One row of the payout table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClaimRule {
    pub level: TyphoonLevel,
    pub impact: bool,
    pub time: PredictTime,
    /// Payout as a percentage string, e.g. `"30%"`.
    pub payout: &'static str,
    pub message: &'static str,
}

impl ClaimRule {
    pub fn matches(&self, params: &SimulationParams) -> bool {
        self.level == params.typhoon_level
            && self.impact == params.impact_region
            && self.time == params.predict_time
    }

    /// A matched rule with a `"0%"` payout still pays nothing.
    pub fn triggers_payout(&self) -> bool {
        self.payout != "0%"
    }
}

/// Payout rules, scanned in declaration order.
pub const CLAIM_RULES: [ClaimRule; 5] = [
    ClaimRule {
        level: TyphoonLevel::Level7To8,
        impact: true,
        time: PredictTime::TwoWeeks,
        payout: "30%",
        message: "预测台风为中等强度（7-8级），提前两周预测且命中承保区域，触发 30% 赔付。",
    },
    ClaimRule {
        level: TyphoonLevel::Level9To10,
        impact: true,
        time: PredictTime::OneWeek,
        payout: "50%",
        message: "预测台风为严重强度（9-10级），提前一周预测且命中承保区域，触发 50% 赔付。",
    },
    ClaimRule {
        level: TyphoonLevel::Level9To10,
        impact: true,
        time: PredictTime::TwoWeeks,
        payout: "40%",
        message: "预测台风为严重强度（9-10级），提前两周预测且命中承保区域，触发 40% 赔付。",
    },
    ClaimRule {
        level: TyphoonLevel::Level5To6,
        impact: true,
        time: PredictTime::TwoWeeks,
        payout: "10%",
        message: "预测台风为轻微强度（5-6级），提前两周预测且命中承保区域，触发 10% 赔付。",
    },
    ClaimRule {
        level: TyphoonLevel::Level5To6,
        impact: true,
        time: PredictTime::OneWeek,
        payout: "0%",
        message: "预测台风为轻微强度（5-6级），提前一周预测且命中承保区域，不触发赔付。",
    },
];

/// First rule matching `(level, impact, time)`. If rules ever overlap,
/// the earlier declaration wins.
pub fn match_rule(params: &SimulationParams) -> Option<&'static ClaimRule> {
    CLAIM_RULES.iter().find(|rule| rule.matches(params))
}
