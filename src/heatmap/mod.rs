pub mod config;
pub mod pipeline;
pub mod render;
pub mod types;

use anyhow::Result;

use config::HeatmapConfig;
use types::PriceGrid;

/// Build the grid described by `config` and write both the CSV table and the
/// SVG heatmap to the paths it names.
pub fn generate_heatmap(config: &HeatmapConfig) -> Result<PriceGrid> {
    let grid = pipeline::build_price_grid(config)?;
    render::write_csv(&grid, &config.csv_path)?;
    render::render_svg(&grid, config, &config.svg_path)?;
    Ok(grid)
}
