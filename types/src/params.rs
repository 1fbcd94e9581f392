//! Construction-time governance parameters.

use crate::error::TypesError;

/// Fixed rules for one governance instance.
///
/// Both values are set once when the engine is built and never change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GovernanceParams {
    /// Length of the voting window in seconds. Always positive.
    voting_period_secs: u64,
    /// Share of total supply (0..=100) that yes-weight must reach.
    quorum_percentage: u8,
}

impl GovernanceParams {
    pub fn new(voting_period_secs: u64, quorum_percentage: u8) -> Result<Self, TypesError> {
        if voting_period_secs == 0 {
            return Err(TypesError::InvalidParams(
                "voting period must be positive".into(),
            ));
        }
        if quorum_percentage > 100 {
            return Err(TypesError::InvalidParams(format!(
                "quorum percentage {quorum_percentage} exceeds 100"
            )));
        }
        Ok(Self {
            voting_period_secs,
            quorum_percentage,
        })
    }

    pub fn voting_period_secs(&self) -> u64 {
        self.voting_period_secs
    }

    pub fn quorum_percentage(&self) -> u8 {
        self.quorum_percentage
    }
}

impl Default for GovernanceParams {
    /// One week, simple majority of supply.
    fn default() -> Self {
        Self {
            voting_period_secs: 7 * 24 * 60 * 60,
            quorum_percentage: 50,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_period() {
        assert!(matches!(
            GovernanceParams::new(0, 50),
            Err(TypesError::InvalidParams(_))
        ));
    }

    #[test]
    fn rejects_percentage_over_100() {
        assert!(GovernanceParams::new(60, 101).is_err());
        assert!(GovernanceParams::new(60, 100).is_ok());
        assert!(GovernanceParams::new(60, 0).is_ok());
    }
}
