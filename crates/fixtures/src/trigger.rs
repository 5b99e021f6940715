//! Harvest-trigger expectations.

use serde::Serialize;

/// A state the trigger scenario puts the strategy into before asking
/// `harvestTrigger`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerCondition {
    /// Debt ratio zero, no credit, nothing stale.
    Idle,
    /// Credit threshold below the credit available to the strategy.
    CreditAboveThreshold,
    /// Credit threshold far above the credit available to the strategy.
    CreditBelowThreshold,
    /// Force-harvest flag set.
    ForcedHarvest,
    /// Right after a harvest with nothing accrued.
    JustHarvested,
    /// Claimable profit clears the configured minimum.
    ProfitAboveMin,
    /// Claimable profit clears the configured maximum.
    ProfitAboveMax,
    /// Max report delay shorter than the time since the last report.
    ReportOverdue,
    /// Base-fee oracle manually forced to "unacceptable".
    BaseFeeTooHigh,
}

impl TriggerCondition {
    pub const ALL: [Self; 9] = [
        Self::Idle,
        Self::CreditAboveThreshold,
        Self::CreditBelowThreshold,
        Self::ForcedHarvest,
        Self::JustHarvested,
        Self::ProfitAboveMin,
        Self::ProfitAboveMax,
        Self::ReportOverdue,
        Self::BaseFeeTooHigh,
    ];

    /// Whether `harvestTrigger` should fire in this state.
    pub fn expected(self) -> bool {
        match self {
            Self::Idle
            | Self::CreditBelowThreshold
            | Self::JustHarvested
            | Self::BaseFeeTooHigh => false,
            Self::CreditAboveThreshold
            | Self::ForcedHarvest
            | Self::ProfitAboveMin
            | Self::ProfitAboveMax
            | Self::ReportOverdue => true,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Idle => "debt ratio 0, no credit, nothing stale",
            Self::CreditAboveThreshold => "credit threshold below available credit",
            Self::CreditBelowThreshold => "credit threshold above available credit",
            Self::ForcedHarvest => "force-harvest flag set",
            Self::JustHarvested => "immediately after harvest",
            Self::ProfitAboveMin => "claimable profit above min threshold",
            Self::ProfitAboveMax => "claimable profit above max threshold",
            Self::ReportOverdue => "max report delay elapsed",
            Self::BaseFeeTooHigh => "base fee forced unacceptable",
        }
    }
}

impl std::fmt::Display for TriggerCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

/// One trigger check and its outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TriggerCheck {
    pub condition: TriggerCondition,
    pub expected: bool,
    pub observed: bool,
}

impl TriggerCheck {
    pub fn new(condition: TriggerCondition, observed: bool) -> Self {
        Self {
            condition,
            expected: condition.expected(),
            observed,
        }
    }

    pub fn passed(&self) -> bool {
        self.expected == self.observed
    }
}
