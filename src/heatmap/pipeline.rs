use anyhow::{anyhow, Result};
use tracing::{debug, warn};

use crate::heatmap::config::HeatmapConfig;
use crate::heatmap::types::PriceGrid;
use crate::models::utils::stepped_range;

/// Evaluate the call price at every (volatility, spot) point of the grid.
///
/// Cells whose inputs are degenerate (zero spot or zero volatility) keep
/// whatever the closed form produces, NaN included.
pub fn build_price_grid(config: &HeatmapConfig) -> Result<PriceGrid> {
    config.validate()?;

    let spots = stepped_range(config.spot_min, config.spot_max, config.spot_step);
    let vols = stepped_range(config.vol_min, config.vol_max, config.vol_step);
    if spots.is_empty() || vols.is_empty() {
        return Err(anyhow!("heatmap axes are empty"));
    }

    let prices: Vec<Vec<f64>> = vols
        .iter()
        .map(|&vol| {
            spots
                .iter()
                .map(|&spot| config.params_at(spot, vol).call_price())
                .collect()
        })
        .collect();

    let non_finite = prices.iter().flatten().filter(|p| !p.is_finite()).count();
    if non_finite > 0 {
        warn!(non_finite, "grid contains non-finite prices");
    }
    debug!(rows = vols.len(), cols = spots.len(), "price grid built");

    Ok(PriceGrid {
        spots,
        vols,
        prices,
    })
}
