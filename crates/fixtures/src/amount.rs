//! Token amounts in whole units or raw base units.

use alloy_primitives::U256;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{FixtureError, Result};

/// An amount of some ERC-20 token.
///
/// Fixture tables are written in whole tokens; the token's `decimals()` is
/// only known once the fork is up, so conversion to base units happens at
/// provisioning time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenAmount {
    /// Whole-token units, scaled by the token's decimals.
    Units(Decimal),
    /// Raw base units.
    Raw(U256),
}

impl TokenAmount {
    /// Whole units from a mantissa and scale, e.g. `units(5, 7)` = 0.0000005.
    pub const fn units(mantissa: u32, scale: u32) -> Self {
        Self::Units(Decimal::from_parts(mantissa, 0, 0, false, scale))
    }

    /// Convert to base units. Digits below `decimals` are truncated; an
    /// amount that truncates to zero is rejected.
    pub fn to_base_units(&self, decimals: u8) -> Result<U256> {
        let raw = match self {
            Self::Raw(raw) => *raw,
            Self::Units(units) => units_to_raw(*units, decimals)?,
        };
        if raw.is_zero() {
            return Err(self.invalid(decimals, "amount is zero"));
        }
        Ok(raw)
    }

    fn invalid(&self, decimals: u8, reason: &'static str) -> FixtureError {
        FixtureError::InvalidAmount {
            amount: self.to_string(),
            decimals,
            reason,
        }
    }
}

impl std::fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Units(units) => write!(f, "{units} units"),
            Self::Raw(raw) => write!(f, "{raw} wei"),
        }
    }
}

fn units_to_raw(units: Decimal, decimals: u8) -> Result<U256> {
    let invalid = |reason| FixtureError::InvalidAmount {
        amount: units.to_string(),
        decimals,
        reason,
    };
    if units.is_sign_negative() && !units.is_zero() {
        return Err(invalid("amount is negative"));
    }

    let text = units.normalize().to_string();
    let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let fraction = &fraction[..fraction.len().min(decimals as usize)];
    let digits = format!("{integer}{fraction:0<width$}", width = decimals as usize);
    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        return Ok(U256::ZERO);
    }
    U256::from_str_radix(digits, 10).map_err(|_| invalid("does not fit in 256 bits"))
}

/// Render base units as a decimal string with `decimals` fractional digits,
/// trailing zeros stripped.
pub fn format_units(raw: U256, decimals: u8) -> String {
    let text = raw.to_string();
    let decimals = decimals as usize;
    if decimals == 0 {
        return text;
    }
    let padded = format!("{text:0>width$}", width = decimals + 1);
    let (integer, fraction) = padded.split_at(padded.len() - decimals);
    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        integer.to_string()
    } else {
        format!("{integer}.{fraction}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_whole_units() {
        let amount = TokenAmount::Units(dec!(60));
        assert_eq!(
            amount.to_base_units(18).unwrap(),
            U256::from(60u64) * U256::from(10u64).pow(U256::from(18u64))
        );
    }

    #[test]
    fn test_fractional_units() {
        assert_eq!(
            TokenAmount::units(5, 7).to_base_units(18).unwrap(),
            U256::from(500_000_000_000u64)
        );
        assert_eq!(
            TokenAmount::units(1, 4).to_base_units(6).unwrap(),
            U256::from(100u64)
        );
    }

    #[test]
    fn test_truncates_below_precision() {
        assert_eq!(
            TokenAmount::Units(dec!(1.23456789)).to_base_units(6).unwrap(),
            U256::from(1_234_567u64)
        );
    }

    #[test]
    fn test_truncates_to_zero_is_error() {
        let err = TokenAmount::units(5, 7).to_base_units(6).unwrap_err();
        assert!(matches!(
            err,
            FixtureError::InvalidAmount {
                reason: "amount is zero",
                ..
            }
        ));
    }

    #[test]
    fn test_negative_rejected() {
        let err = TokenAmount::Units(dec!(-1)).to_base_units(18).unwrap_err();
        assert!(matches!(
            err,
            FixtureError::InvalidAmount {
                reason: "amount is negative",
                ..
            }
        ));
    }

    #[test]
    fn test_raw_passthrough() {
        let raw = U256::from(11u64) * U256::from(10u64).pow(U256::from(18u64));
        assert_eq!(TokenAmount::Raw(raw).to_base_units(0).unwrap(), raw);
        assert!(TokenAmount::Raw(U256::ZERO).to_base_units(18).is_err());
    }

    #[test]
    fn test_units_const_matches_macro() {
        assert_eq!(TokenAmount::units(1, 4), TokenAmount::Units(dec!(0.0001)));
        assert_eq!(TokenAmount::units(60, 0), TokenAmount::Units(dec!(60)));
    }

    #[test]
    fn test_format_units() {
        assert_eq!(format_units(U256::from(1_500_000u64), 6), "1.5");
        assert_eq!(format_units(U256::from(42u64), 6), "0.000042");
        assert_eq!(format_units(U256::from(3_000_000u64), 6), "3");
        assert_eq!(format_units(U256::from(7u64), 0), "7");
        assert_eq!(format_units(U256::ZERO, 18), "0");
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&TokenAmount::Units(dec!(60))).unwrap();
        assert_eq!(json, r#"{"units":"60"}"#);
        let parsed: TokenAmount = serde_json::from_str(r#"{"raw":"0x10"}"#).unwrap();
        assert_eq!(parsed, TokenAmount::Raw(U256::from(16u64)));
    }
}
