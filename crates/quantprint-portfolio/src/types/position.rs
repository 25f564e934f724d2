//! Priced position.

use quantprint_config::HoldingSpec;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{PortfolioError, PortfolioResult};

/// A holding with its market value and portfolio weight.
///
/// `weight` is set when the position joins a [`Portfolio`](crate::Portfolio);
/// a standalone position has weight 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Ticker or identifier.
    pub symbol: String,

    /// Asset class label.
    pub asset_class: String,

    /// Units held.
    pub quantity: Decimal,

    /// Price per unit.
    pub price: Decimal,

    /// Market value (quantity x price).
    pub value: Decimal,

    /// Fraction of total portfolio value.
    pub weight: f64,
}

impl Position {
    /// Creates a position, computing its value.
    ///
    /// # Errors
    ///
    /// Returns an error if quantity or price is negative, or the value
    /// overflows.
    pub fn new(
        symbol: impl Into<String>,
        asset_class: impl Into<String>,
        quantity: Decimal,
        price: Decimal,
    ) -> PortfolioResult<Self> {
        let symbol = symbol.into();

        if quantity.is_sign_negative() && !quantity.is_zero() {
            return Err(PortfolioError::invalid_holding(
                symbol,
                format!("quantity must be non-negative, got {}", quantity),
            ));
        }
        if price.is_sign_negative() && !price.is_zero() {
            return Err(PortfolioError::invalid_holding(
                symbol,
                format!("price must be non-negative, got {}", price),
            ));
        }

        let value = quantity
            .checked_mul(price)
            .ok_or_else(|| PortfolioError::invalid_holding(&symbol, "market value overflows"))?;

        Ok(Self {
            symbol,
            asset_class: asset_class.into(),
            quantity,
            price,
            value,
            weight: 0.0,
        })
    }

    /// Creates a position from a raw holding record.
    ///
    /// # Errors
    ///
    /// Returns an error if quantity or price is not a finite non-negative
    /// number.
    pub fn from_spec(spec: &HoldingSpec) -> PortfolioResult<Self> {
        let quantity = to_decimal(&spec.symbol, "quantity", spec.quantity)?;
        let price = to_decimal(&spec.symbol, "price", spec.price)?;
        Self::new(spec.symbol.clone(), spec.asset_class.clone(), quantity, price)
    }

    /// Market value as `f64`.
    #[must_use]
    pub fn value_f64(&self) -> f64 {
        self.value.to_f64().unwrap_or(0.0)
    }
}

fn to_decimal(symbol: &str, field: &str, value: f64) -> PortfolioResult<Decimal> {
    Decimal::from_f64(value).ok_or_else(|| {
        PortfolioError::invalid_holding(symbol, format!("{} is not representable: {}", field, value))
    })
}
