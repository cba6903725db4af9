// Closed-form Black-Scholes pricing for a European call.
//
// Preconditions (S > 0, K > 0, T > 0, sigma > 0) are not enforced here:
// degenerate inputs run straight through IEEE-754 arithmetic and come out as
// NaN or +/-inf. Use `CallParams::validate` when rejecting them is wanted.

use tracing::trace;

/// Standard normal CDF, Φ(x) = 0.5 * erfc(-x / sqrt(2)).
///
/// Going through `erfc` rather than `1 + erf` keeps full relative precision in
/// the lower tail, where `1 + erf(x)` cancels to zero long before Φ does.
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * libm::erfc(-x * std::f64::consts::FRAC_1_SQRT_2)
}

/// The risk-adjusted log-moneyness terms `(d1, d2)`.
#[allow(non_snake_case)]
pub fn d1_d2(S: f64, K: f64, T: f64, r: f64, sigma: f64) -> (f64, f64) {
    let sigma_sqrt_t = sigma * T.sqrt();
    let d1 = ((S / K).ln() + (r + 0.5 * sigma * sigma) * T) / sigma_sqrt_t;
    (d1, d1 - sigma_sqrt_t)
}

/// Price of a European call option under Black-Scholes assumptions.
///
/// `T` is in years, `r` and `sigma` are annualised decimals.
#[allow(non_snake_case)]
pub fn bs_call_price(S: f64, K: f64, T: f64, r: f64, sigma: f64) -> f64 {
    let (d1, d2) = d1_d2(S, K, T, r, sigma);
    trace!(d1, d2, "black-scholes terms");
    S * norm_cdf(d1) - K * (-r * T).exp() * norm_cdf(d2)
}
