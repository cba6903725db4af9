// Tabulate and plot European call prices over a spot × volatility grid.
//
// Usage:
//     bs-heatmap [config.toml]
//
// Without a config file the built-in defaults are used (K=100, T=1, r=0.05,
// spot 50..150 step 10, volatility 0.1..0.5 step 0.05).

use anyhow::Result;
use bs_call::{generate_heatmap, HeatmapConfig};

fn usage(program: &str) -> String {
    format!("Usage: {} [config.toml]", program)
}

fn run(config_path: Option<String>) -> Result<()> {
    let config = match config_path {
        Some(path) => HeatmapConfig::from_file(path)?,
        None => HeatmapConfig::default(),
    };

    let grid = generate_heatmap(&config)?;
    let (rows, cols) = grid.shape();
    println!(
        "Priced {} x {} grid -> {}, {}",
        rows, cols, config.csv_path, config.svg_path
    );
    Ok(())
}

fn main() {
    bs_call::logging::init_tracing();

    let mut argv = std::env::args();
    let program = argv.next().unwrap_or_else(|| "bs-heatmap".to_string());
    let args: Vec<String> = argv.collect();
    if args.len() > 1 {
        eprintln!("{}", usage(&program));
        std::process::exit(1);
    }

    if let Err(e) = run(args.into_iter().next()) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}
