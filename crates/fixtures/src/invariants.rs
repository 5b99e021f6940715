//! Accounting invariants checked against on-chain state.
//!
//! Everything here is a pure predicate over values already read from the
//! fork, so it can be exercised without a node.

use alloy_primitives::U256;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

/// Basis-point denominator for debt ratios.
pub const MAX_BPS: u64 = 10_000;

const SECONDS_PER_YEAR: u64 = 365 * 24 * 60 * 60;

/// A failed accounting check.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{check}: {detail}")]
pub struct Violation {
    pub check: &'static str,
    pub detail: String,
}

impl Violation {
    pub fn new(check: &'static str, detail: impl Into<String>) -> Self {
        Self {
            check,
            detail: detail.into(),
        }
    }
}

/// The vault's per-strategy record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StrategyParams {
    pub performance_fee: U256,
    pub activation: U256,
    pub debt_ratio: U256,
    pub min_debt_per_harvest: U256,
    pub max_debt_per_harvest: U256,
    pub last_report: U256,
    pub total_debt: U256,
    pub total_gain: U256,
    pub total_loss: U256,
}

impl StrategyParams {
    /// Strategies that were ever added to a vault have a nonzero activation.
    pub fn is_active(&self) -> bool {
        !self.activation.is_zero()
    }

    /// Check the record's internal consistency.
    pub fn check(&self) -> Result<(), Violation> {
        check_bps("strategy debt ratio", self.debt_ratio)?;
        if self.min_debt_per_harvest > self.max_debt_per_harvest {
            return Err(Violation::new(
                "debt per harvest",
                format!(
                    "min {} exceeds max {}",
                    self.min_debt_per_harvest, self.max_debt_per_harvest
                ),
            ));
        }
        if self.is_active() && self.last_report < self.activation {
            return Err(Violation::new(
                "last report",
                format!(
                    "last report {} precedes activation {}",
                    self.last_report, self.activation
                ),
            ));
        }
        Ok(())
    }
}

/// A debt ratio must not exceed 100%.
pub fn check_bps(check: &'static str, ratio: U256) -> Result<(), Violation> {
    if ratio > U256::from(MAX_BPS) {
        return Err(Violation::new(check, format!("{ratio} exceeds {MAX_BPS} bps")));
    }
    Ok(())
}

/// Sum the debt ratios of a withdrawal queue and check the total.
pub fn check_debt_ratio_sum(ratios: &[U256]) -> Result<U256, Violation> {
    let total = ratios
        .iter()
        .try_fold(U256::ZERO, |acc, r| acc.checked_add(*r))
        .ok_or_else(|| Violation::new("queue debt ratio", "sum overflows"))?;
    check_bps("queue debt ratio", total)?;
    Ok(total)
}

/// `after` must not be below `before`.
pub fn check_non_decreasing(check: &'static str, before: U256, after: U256) -> Result<(), Violation> {
    if after < before {
        return Err(Violation::new(check, format!("dropped from {before} to {after}")));
    }
    Ok(())
}

/// `actual` must be strictly above `floor`.
pub fn check_above(check: &'static str, actual: U256, floor: U256) -> Result<(), Violation> {
    if actual <= floor {
        return Err(Violation::new(check, format!("{actual} is not above {floor}")));
    }
    Ok(())
}

pub fn within_tolerance(actual: U256, expected: U256, tolerance: U256) -> bool {
    actual.abs_diff(expected) <= tolerance
}

/// Ending balance of a depositor: above the start when the strategy earns,
/// within `tolerance` of it when it is not expected to.
pub fn check_depositor_outcome(
    start: U256,
    end: U256,
    no_profit: bool,
    tolerance: U256,
) -> Result<(), Violation> {
    if no_profit {
        if within_tolerance(end, start, tolerance) {
            return Ok(());
        }
        return Err(Violation::new(
            "depositor balance",
            format!("{end} not within {tolerance} wei of {start}"),
        ));
    }
    check_above("depositor balance", end, start)
}

/// Harvest-trigger profit window. The trigger fires when claimable profit
/// clears either bound on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProfitThresholds {
    pub min: U256,
    pub max: U256,
}

impl ProfitThresholds {
    pub fn new(min: U256, max: U256) -> Self {
        Self { min, max }
    }

    pub fn fires(&self, claimable: U256) -> bool {
        claimable > self.min || claimable > self.max
    }
}

/// Claimable profit must clear `thresholds`, so that a profit trigger check
/// configured with them is expected to fire.
pub fn check_profit_clears(thresholds: ProfitThresholds, claimable: U256) -> Result<(), Violation> {
    if thresholds.fires(claimable) {
        return Ok(());
    }
    Err(Violation::new(
        "claimable profit",
        format!(
            "{claimable} clears neither min {} nor max {}",
            thresholds.min, thresholds.max
        ),
    ))
}

impl Default for ProfitThresholds {
    /// 1,000 / 10,000 USDC at 6 decimals.
    fn default() -> Self {
        Self {
            min: U256::from(1_000_000_000u64),
            max: U256::from(10_000_000_000u64),
        }
    }
}

fn to_decimal(value: U256) -> Option<Decimal> {
    u128::try_from(value).ok().and_then(Decimal::from_u128)
}

/// Annualised return from the change in vault assets over one period,
/// relative to what the strategy holds.
pub fn estimate_apr(
    assets_before: U256,
    assets_after: U256,
    period_secs: u64,
    strategy_assets: U256,
) -> Option<Decimal> {
    if period_secs == 0 || strategy_assets.is_zero() {
        return None;
    }
    let gain = to_decimal(assets_after.saturating_sub(assets_before))?;
    let held = to_decimal(strategy_assets)?;
    let periods = Decimal::from(SECONDS_PER_YEAR) / Decimal::from(period_secs);
    gain.checked_mul(periods)?.checked_div(held)
}
