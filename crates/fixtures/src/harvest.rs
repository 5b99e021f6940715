//! Outcome of a single harvest.

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

/// Debt bookkeeping reported alongside profit and loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HarvestExtra {
    pub debt_payment: U256,
    pub debt_outstanding: U256,
}

/// Values carried by the strategy's `Harvested` event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HarvestResult {
    pub profit: U256,
    pub loss: U256,
    pub extra: HarvestExtra,
}

impl HarvestResult {
    pub fn new(profit: U256, loss: U256, debt_payment: U256, debt_outstanding: U256) -> Self {
        Self {
            profit,
            loss,
            extra: HarvestExtra {
                debt_payment,
                debt_outstanding,
            },
        }
    }

    /// Neither profit nor loss was reported.
    pub fn is_flat(&self) -> bool {
        self.profit.is_zero() && self.loss.is_zero()
    }

    pub fn is_profitable(&self) -> bool {
        self.profit > self.loss
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_and_profitable() {
        assert!(HarvestResult::default().is_flat());
        assert!(!HarvestResult::default().is_profitable());

        let result = HarvestResult::new(U256::from(5u64), U256::ZERO, U256::ZERO, U256::ZERO);
        assert!(!result.is_flat());
        assert!(result.is_profitable());

        let lossy = HarvestResult::new(U256::ZERO, U256::from(1u64), U256::ZERO, U256::ZERO);
        assert!(!lossy.is_flat());
        assert!(!lossy.is_profitable());
    }
}
