//! Portfolio builder for fluent construction.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::warn;

use crate::types::{Position, UserProfile};
use crate::{Portfolio, PortfolioError, PortfolioResult};

/// Builder for constructing a [`Portfolio`].
///
/// # Example
///
/// ```rust
/// use quantprint_portfolio::prelude::*;
/// use rust_decimal::Decimal;
///
/// let portfolio = PortfolioBuilder::new()
///     .add_position(Position::new("AAA", "equity", Decimal::from(10), Decimal::from(100)).unwrap())
///     .add_position(Position::new("BBB", "bond", Decimal::from(5), Decimal::from(100)).unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(portfolio.total_value, Decimal::from(1500));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PortfolioBuilder {
    positions: Vec<Position>,
    profile: UserProfile,
}

impl PortfolioBuilder {
    /// Creates a new portfolio builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a position.
    #[must_use]
    pub fn add_position(mut self, position: Position) -> Self {
        self.positions.push(position);
        self
    }

    /// Adds multiple positions.
    #[must_use]
    pub fn add_positions(mut self, positions: impl IntoIterator<Item = Position>) -> Self {
        self.positions.extend(positions);
        self
    }

    /// Sets the investor profile.
    #[must_use]
    pub fn profile(mut self, profile: UserProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Builds the portfolio, computing total value and weights.
    ///
    /// # Errors
    ///
    /// Returns an error if the total value overflows.
    pub fn build(self) -> PortfolioResult<Portfolio> {
        let total_value = self
            .positions
            .iter()
            .try_fold(Decimal::ZERO, |acc, p| acc.checked_add(p.value))
            .ok_or_else(|| PortfolioError::calculation_failed("total value overflows"))?;

        let mut positions = self.positions;
        if total_value.is_zero() {
            warn!(
                positions = positions.len(),
                "Portfolio total value is zero; all weights set to 0"
            );
            for p in &mut positions {
                p.weight = 0.0;
            }
        } else {
            for p in &mut positions {
                p.weight = (p.value / total_value).to_f64().unwrap_or(0.0);
            }
        }

        Ok(Portfolio {
            positions,
            total_value,
            profile: self.profile,
        })
    }
}
