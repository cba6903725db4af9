// demos/heatmap_demo.rs

//! Prices a single at-the-money call, then sweeps the `wide` heatmap preset
//! and prints the cheapest and most expensive cells.
//!
//! Usage:
//!     cargo run --example heatmap_demo

use anyhow::Result;
use bs_call::{build_price_grid, d1_d2, price_call, CallParams, HeatmapConfig};

fn main() -> Result<()> {
    let params = CallParams::new(100.0, 100.0, 1.0, 0.05, 0.2);
    params.validate()?;
    let (d1, d2) = d1_d2(
        params.spot,
        params.strike,
        params.maturity,
        params.rate,
        params.vol,
    );
    println!("ATM call: d1={:.6} d2={:.6} price={:.4}", d1, d2, price_call(&params));

    let config = HeatmapConfig::wide();
    let grid = build_price_grid(&config)?;
    let (rows, cols) = grid.shape();
    println!("Wide sweep: {} volatilities x {} spot prices", rows, cols);

    if let Some((lo, hi)) = grid.finite_range() {
        println!("  finite prices span {:.4} .. {:.4}", lo, hi);
    }
    let missing = grid.prices.iter().flatten().filter(|p| !p.is_finite()).count();
    println!("  non-finite cells: {}", missing);
    Ok(())
}
