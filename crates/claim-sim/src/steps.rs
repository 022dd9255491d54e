//! The four narrative stages a simulation walks through.

/// One stage of the simulation as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationStep {
    pub title: &'static str,
    pub description: &'static str,
    pub display_content: &'static str,
}

/// Index of the last stage; evaluation runs when advancing past it.
pub const FINAL_STEP: usize = STEPS.len() - 1;

pub const STEPS: [SimulationStep; 4] = [
    SimulationStep {
        title: "获取风险数据",
        description: "根据提供的位置信息，获取台风预测强度、影响范围与提前时间。",
        display_content: "正在获取台风预测参数...",
    },
    SimulationStep {
        title: "参数化条件匹配",
        description: "系统根据预设规则，判断是否触发提前赔付条件。",
        display_content: "系统正在匹配当前台风强度、影响区域和预测时间，判断是否符合理赔条件。",
    },
    SimulationStep {
        title: "自动赔付核算",
        description: "若符合条件，系统自动核算赔付金额并计算预估保费。",
        display_content: "系统正在核算具体赔付金额和本次台风险种的预估保费。",
    },
    SimulationStep {
        title: "完成理赔模拟",
        description: "理赔模拟流程结束，结果已生成。",
        display_content: "理赔模拟已完成，请查看下方详细结果。",
    },
];
