use anyhow::{anyhow, Context, Result};
use plotters::prelude::*;
use std::path::Path;
use tracing::info;

use crate::heatmap::config::HeatmapConfig;
use crate::heatmap::types::PriceGrid;

const LOW: RGBColor = RGBColor(255, 255, 204);
const MID: RGBColor = RGBColor(65, 182, 196);
const HIGH: RGBColor = RGBColor(8, 29, 88);
const MISSING: RGBColor = RGBColor(190, 190, 190);

/// Write the grid as a table: a header of spot prices, then one row per volatility.
pub fn write_csv<P: AsRef<Path>>(grid: &PriceGrid, path: P) -> Result<()> {
    let path = path.as_ref();
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    let mut header = vec!["vol\\spot".to_string()];
    header.extend(grid.spots.iter().map(|s| s.to_string()));
    writer.write_record(&header)?;

    for (vol, row) in grid.vols.iter().zip(&grid.prices) {
        let mut record = vec![vol.to_string()];
        record.extend(row.iter().map(|p| format!("{:.4}", p)));
        writer.write_record(&record)?;
    }
    writer.flush()?;

    info!(path = %path.display(), "wrote price table");
    Ok(())
}

/// Linear blend through LOW -> MID -> HIGH for `t` in [0, 1].
fn heat_color(t: f64) -> RGBColor {
    let t = t.clamp(0.0, 1.0);
    let (a, b, u) = if t < 0.5 {
        (LOW, MID, t * 2.0)
    } else {
        (MID, HIGH, (t - 0.5) * 2.0)
    };
    let mix = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * u).round() as u8;
    RGBColor(mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
}

/// Half the distance to the neighbouring axis point, used as cell padding.
fn half_step(axis: &[f64], fallback: f64) -> f64 {
    match axis {
        [a, b, ..] => (b - a) / 2.0,
        _ => fallback / 2.0,
    }
}

/// Draw the grid as an SVG heatmap, one rectangle per cell.
pub fn render_svg<P: AsRef<Path>>(
    grid: &PriceGrid,
    config: &HeatmapConfig,
    path: P,
) -> Result<()> {
    let path = path.as_ref();
    let (first_spot, last_spot) = match (grid.spots.first(), grid.spots.last()) {
        (Some(a), Some(b)) => (*a, *b),
        _ => return Err(anyhow!("cannot render an empty grid")),
    };
    let (first_vol, last_vol) = match (grid.vols.first(), grid.vols.last()) {
        (Some(a), Some(b)) => (*a, *b),
        _ => return Err(anyhow!("cannot render an empty grid")),
    };
    let (lo, hi) = grid.finite_range().unwrap_or((0.0, 0.0));
    let span = if hi > lo { hi - lo } else { 1.0 };

    let dx = half_step(&grid.spots, config.spot_step);
    let dy = half_step(&grid.vols, config.vol_step);

    let root = SVGBackend::new(path, (1024, 640)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| anyhow!("{e}"))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(
            format!(
                "European call price | K={} T={}y r={}",
                config.strike, config.maturity, config.rate
            ),
            ("sans-serif", 24),
        )
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(
            (first_spot - dx)..(last_spot + dx),
            (first_vol - dy)..(last_vol + dy),
        )
        .map_err(|e| anyhow!("{e}"))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Stock price (S)")
        .y_desc("Volatility (sigma)")
        .draw()
        .map_err(|e| anyhow!("{e}"))?;

    let cells = grid.vols.iter().zip(&grid.prices).flat_map(|(&vol, row)| {
        grid.spots.iter().zip(row).map(move |(&spot, &price)| {
            let color = if price.is_finite() {
                heat_color((price - lo) / span)
            } else {
                MISSING
            };
            Rectangle::new(
                [(spot - dx, vol - dy), (spot + dx, vol + dy)],
                color.filled(),
            )
        })
    });
    chart.draw_series(cells).map_err(|e| anyhow!("{e}"))?;

    root.present()
        .map_err(|e| anyhow!("failed to write {}: {e}", path.display()))?;
    info!(path = %path.display(), "wrote heatmap");
    Ok(())
}
