//! What a scenario run produced.

use alloy_primitives::U256;
use rust_decimal::Decimal;
use serde::Serialize;
use strategy_harness_fixtures::{HarvestResult, TriggerCheck};

use crate::error::{HarnessError, Result};
use crate::status::StrategyStatus;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum Outcome {
    Passed,
    Skipped { reason: String },
}

/// Record of one scenario run.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    pub name: &'static str,
    pub outcome: Outcome,
    pub harvests: Vec<HarvestResult>,
    pub trigger_checks: Vec<TriggerCheck>,
    pub estimated_apr: Option<Decimal>,
    pub starting_balance: Option<U256>,
    pub ending_balance: Option<U256>,
    pub status: Option<StrategyStatus>,
}

impl ScenarioReport {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            outcome: Outcome::Passed,
            harvests: Vec::new(),
            trigger_checks: Vec::new(),
            estimated_apr: None,
            starting_balance: None,
            ending_balance: None,
            status: None,
        }
    }

    pub fn skipped(name: &'static str, reason: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::Skipped {
                reason: reason.into(),
            },
            ..Self::new(name)
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self.outcome, Outcome::Skipped { .. })
    }

    pub fn record_harvest(&mut self, result: HarvestResult) -> HarvestResult {
        self.harvests.push(result);
        result
    }

    /// Record the check and fail on the first mismatch.
    pub fn record_trigger(&mut self, check: TriggerCheck) -> Result<()> {
        self.trigger_checks.push(check);
        tracing::info!(
            condition = %check.condition,
            expected = check.expected,
            observed = check.observed,
            "harvest trigger"
        );
        if !check.passed() {
            return Err(HarnessError::TriggerMismatch(check));
        }
        Ok(())
    }
}
