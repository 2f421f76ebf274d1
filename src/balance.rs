// Account balance classification.

use crate::error::{LoadError, Result};

/// Sign classification of a customer's account balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceStatus {
    /// Balance is exactly zero.
    Settled,
    /// Balance is positive.
    Credit,
    /// Balance is negative.
    Debit,
}

impl BalanceStatus {
    /// Classify a raw balance field.
    ///
    /// Only an exact zero classifies as settled; there is no tolerance band
    /// for floating-point residue. That matches the upstream business rule.
    pub fn classify(raw: &str) -> Result<BalanceStatus> {
        let balance: f64 = raw.parse().map_err(|_| LoadError::Parse {
            field: 0,
            value: raw.to_string(),
        })?;
        Ok(Self::of(balance))
    }

    pub fn of(balance: f64) -> BalanceStatus {
        if balance == 0.0 {
            BalanceStatus::Settled
        } else if balance > 0.0 {
            BalanceStatus::Credit
        } else {
            BalanceStatus::Debit
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BalanceStatus::Settled => "settled",
            BalanceStatus::Credit => "credit",
            BalanceStatus::Debit => "debit",
        }
    }
}
