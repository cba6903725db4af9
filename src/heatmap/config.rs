use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::model_params::CallParams;

/// Upper bound on the number of cells a single grid may hold
pub const MAX_GRID_CELLS: usize = 250_000;

/// Axis points are rounded to two decimals, so no step may be finer than this
pub const MIN_AXIS_STEP: f64 = 0.01;

/// Settings for a spot × volatility price grid.
///
/// Every field has a default, so a TOML file only needs to name the values it
/// changes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeatmapConfig {
    /// Strike price (K), held fixed across the grid
    #[serde(default = "default_strike")]
    pub strike: f64,

    /// Time to maturity in years (T)
    #[serde(default = "default_maturity")]
    pub maturity: f64,

    /// Risk-free rate (r)
    #[serde(default = "default_rate")]
    pub rate: f64,

    #[serde(default = "default_spot_min")]
    pub spot_min: f64,

    #[serde(default = "default_spot_max")]
    pub spot_max: f64,

    #[serde(default = "default_spot_step")]
    pub spot_step: f64,

    #[serde(default = "default_vol_min")]
    pub vol_min: f64,

    #[serde(default = "default_vol_max")]
    pub vol_max: f64,

    #[serde(default = "default_vol_step")]
    pub vol_step: f64,

    /// Where the CSV table is written
    #[serde(default = "default_csv_path")]
    pub csv_path: String,

    /// Where the SVG heatmap is written
    #[serde(default = "default_svg_path")]
    pub svg_path: String,
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            strike: default_strike(),
            maturity: default_maturity(),
            rate: default_rate(),
            spot_min: default_spot_min(),
            spot_max: default_spot_max(),
            spot_step: default_spot_step(),
            vol_min: default_vol_min(),
            vol_max: default_vol_max(),
            vol_step: default_vol_step(),
            csv_path: default_csv_path(),
            svg_path: default_svg_path(),
        }
    }
}

impl HeatmapConfig {
    /// Broader sweep: spot 0..500 in steps of 25, volatility 0.05..1.0
    pub fn wide() -> Self {
        Self {
            spot_min: 0.0,
            spot_max: 500.0,
            spot_step: 25.0,
            vol_min: 0.05,
            vol_max: 1.0,
            vol_step: 0.05,
            ..Self::default()
        }
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s).context("failed to parse heatmap config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml_str(&raw).with_context(|| format!("invalid config in {}", path.display()))
    }

    /// The fixed contract terms at a given grid point.
    pub fn params_at(&self, spot: f64, vol: f64) -> CallParams {
        CallParams::new(spot, self.strike, self.maturity, self.rate, vol)
    }

    pub fn validate(&self) -> Result<()> {
        let finite = [
            ("strike", self.strike),
            ("maturity", self.maturity),
            ("rate", self.rate),
            ("spot_min", self.spot_min),
            ("spot_max", self.spot_max),
            ("spot_step", self.spot_step),
            ("vol_min", self.vol_min),
            ("vol_max", self.vol_max),
            ("vol_step", self.vol_step),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(anyhow!("{} must be finite, got {}", name, value));
            }
        }
        if self.strike <= 0.0 || self.maturity <= 0.0 {
            return Err(anyhow!(
                "strike and maturity must be positive (strike={}, maturity={})",
                self.strike,
                self.maturity
            ));
        }
        if self.spot_step < MIN_AXIS_STEP || self.vol_step < MIN_AXIS_STEP {
            return Err(anyhow!(
                "steps must be at least {} (spot_step={}, vol_step={})",
                MIN_AXIS_STEP,
                self.spot_step,
                self.vol_step
            ));
        }
        if self.spot_min < 0.0 || self.vol_min < 0.0 {
            return Err(anyhow!("range minimums must be non-negative"));
        }
        if self.spot_min > self.spot_max {
            return Err(anyhow!(
                "spot_min ({}) exceeds spot_max ({})",
                self.spot_min,
                self.spot_max
            ));
        }
        if self.vol_min > self.vol_max {
            return Err(anyhow!(
                "vol_min ({}) exceeds vol_max ({})",
                self.vol_min,
                self.vol_max
            ));
        }

        let spots = ((self.spot_max - self.spot_min) / self.spot_step).floor() + 1.0;
        let vols = ((self.vol_max - self.vol_min) / self.vol_step).floor() + 1.0;
        if spots * vols > MAX_GRID_CELLS as f64 {
            return Err(anyhow!(
                "grid of {} x {} cells exceeds the limit of {}",
                spots,
                vols,
                MAX_GRID_CELLS
            ));
        }
        Ok(())
    }
}

fn default_strike() -> f64 {
    100.0
}

fn default_maturity() -> f64 {
    1.0
}

fn default_rate() -> f64 {
    0.05
}

fn default_spot_min() -> f64 {
    50.0
}

fn default_spot_max() -> f64 {
    150.0
}

fn default_spot_step() -> f64 {
    10.0
}

fn default_vol_min() -> f64 {
    0.1
}

fn default_vol_max() -> f64 {
    0.5
}

fn default_vol_step() -> f64 {
    0.05
}

fn default_csv_path() -> String {
    "call_prices.csv".to_string()
}

fn default_svg_path() -> String {
    "call_heatmap.svg".to_string()
}
