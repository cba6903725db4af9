//! # bs-call: Black-Scholes European Call Calculator
//!
//! `bs-call` prices a European call option with the Black-Scholes closed form
//! and tabulates that price over spot × volatility grids.
//!
//! ## Core Features
//!
//! - **Closed-form pricing**: `S·Φ(d1) − K·e^(−rT)·Φ(d2)` with Φ evaluated
//!   through `erfc` for tail accuracy
//! - **Calculator CLI**: `bs-call <S> <K> <T> <r> <sigma>`
//! - **Price heatmap**: CSV table and SVG heatmap over spot and volatility
//!   ranges, configured from TOML
//!
//! ## Quick Start
//!
//! ```rust
//! use bs_call::{price_call, CallParams};
//!
//! let params = CallParams::new(100.0, 100.0, 1.0, 0.05, 0.2);
//! let price = price_call(&params);
//! assert!((price - 10.4506).abs() < 1e-4);
//! ```
//!
//! ## Degenerate Inputs
//!
//! Pricing never fails. With `T = 0` or `sigma = 0` the formula divides by
//! zero and the result is whatever IEEE-754 arithmetic produces (`NaN`, or a
//! finite intrinsic value when `d1` and `d2` both diverge to `+inf`). Call
//! [`CallParams::validate`] first when such inputs should be rejected.

// ================================================================================================
// MODULES
// ================================================================================================

pub mod cli;
pub mod heatmap;
pub mod logging;
pub mod model_params;
pub mod models;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

pub use heatmap::{
    config::HeatmapConfig, generate_heatmap, pipeline::build_price_grid, types::PriceGrid,
};
pub use model_params::CallParams;
pub use models::bs::{bs_call_price, d1_d2, norm_cdf};

/// Price a European call from bundled inputs.
///
/// Equivalent to [`bs_call_price`] with the fields of `params` in order.
pub fn price_call(params: &CallParams) -> f64 {
    params.call_price()
}
