//! Portfolio struct and core methods.

use quantprint_config::HoldingSpec;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::types::{Position, UserProfile};
use crate::PortfolioResult;

/// A priced, weighted consumer portfolio.
///
/// Immutable once built: positions carry their value and weight, and
/// `total_value` is the sum of position values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    /// Positions in input order.
    pub positions: Vec<Position>,

    /// Sum of position values.
    pub total_value: Decimal,

    /// Investor profile.
    pub profile: UserProfile,
}

impl Portfolio {
    /// Creates a new portfolio builder.
    #[must_use]
    pub fn builder() -> super::PortfolioBuilder {
        super::PortfolioBuilder::new()
    }

    /// Prices and weights raw holdings.
    ///
    /// A portfolio whose total value is zero gets weight 0 on every
    /// position and logs a warning.
    ///
    /// # Errors
    ///
    /// Returns an error if a holding has a negative or non-finite quantity
    /// or price.
    pub fn load(holdings: &[HoldingSpec], profile: UserProfile) -> PortfolioResult<Self> {
        let positions = holdings
            .iter()
            .map(Position::from_spec)
            .collect::<PortfolioResult<Vec<_>>>()?;

        let portfolio = Self::builder()
            .add_positions(positions)
            .profile(profile)
            .build()?;

        info!(
            positions = portfolio.position_count(),
            total_value = %portfolio.total_value,
            "Loaded consumer portfolio"
        );
        Ok(portfolio)
    }

    /// Returns the number of positions.
    #[must_use]
    pub fn position_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns true if the portfolio has no positions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns true if the total value is zero.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.total_value.is_zero()
    }

    /// Total value as `f64`.
    #[must_use]
    pub fn total_value_f64(&self) -> f64 {
        self.total_value.to_f64().unwrap_or(0.0)
    }

    /// Sum of position weights: 1 for a priced portfolio, 0 when degenerate.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.positions.iter().map(|p| p.weight).sum()
    }
}
