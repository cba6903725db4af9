//! Contract inputs for a single Black-Scholes call valuation.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use crate::models::bs::bs_call_price;

/// The five scalar inputs of the pricing formula.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CallParams {
    /// Spot price of the underlying (S)
    pub spot: f64,
    /// Strike price (K)
    pub strike: f64,
    /// Time to maturity in years (T)
    pub maturity: f64,
    /// Annualised continuously-compounded risk-free rate (r)
    pub rate: f64,
    /// Annualised volatility of the underlying (σ)
    pub vol: f64,
}

impl CallParams {
    pub fn new(spot: f64, strike: f64, maturity: f64, rate: f64, vol: f64) -> Self {
        Self {
            spot,
            strike,
            maturity,
            rate,
            vol,
        }
    }

    /// Theoretical call price. Never fails; degenerate inputs yield NaN or inf.
    pub fn call_price(&self) -> f64 {
        bs_call_price(self.spot, self.strike, self.maturity, self.rate, self.vol)
    }

    /// Reject inputs for which the closed form has no meaningful value.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("spot", self.spot),
            ("strike", self.strike),
            ("maturity", self.maturity),
            ("vol", self.vol),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(anyhow!("{} must be positive and finite, got {}", name, value));
            }
        }
        if !self.rate.is_finite() {
            return Err(anyhow!("rate must be finite, got {}", self.rate));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn call_price_matches_free_function() {
        let p = CallParams::new(100.0, 100.0, 1.0, 0.05, 0.2);
        assert_eq!(p.call_price(), bs_call_price(100.0, 100.0, 1.0, 0.05, 0.2));
    }

    #[test]
    fn validate_accepts_negative_rate() {
        assert!(CallParams::new(100.0, 90.0, 0.5, -0.01, 0.3).validate().is_ok());
    }

    #[test]
    fn validate_rejects_degenerate_inputs() {
        assert!(CallParams::new(100.0, 100.0, 0.0, 0.05, 0.2).validate().is_err());
        assert!(CallParams::new(100.0, 100.0, 1.0, 0.05, 0.0).validate().is_err());
        assert!(CallParams::new(-1.0, 100.0, 1.0, 0.05, 0.2).validate().is_err());
        assert!(CallParams::new(100.0, f64::NAN, 1.0, 0.05, 0.2).validate().is_err());
        assert!(CallParams::new(100.0, 100.0, 1.0, f64::INFINITY, 0.2).validate().is_err());
    }

    #[test]
    fn serde_round_trip_through_toml() {
        let p = CallParams::new(100.0, 95.0, 0.5, 0.03, 0.25);
        let text = toml::to_string(&p).unwrap();
        assert!(text.contains("strike = 95.0"), "{text}");
        let back: CallParams = toml::from_str(&text).unwrap();
        assert_eq!(back, p);
        assert_eq!(back.call_price().to_bits(), p.call_price().to_bits());
    }

    #[test]
    fn deserialize_rejects_missing_fields() {
        assert!(toml::from_str::<CallParams>("spot = 100.0\nstrike = 100.0").is_err());
    }

    #[test]
    fn validate_error_names_the_field() {
        let err = CallParams::new(100.0, 100.0, 1.0, 0.05, 0.0)
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("vol"), "unexpected message: {err}");
    }
}
