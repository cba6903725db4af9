//! Command-line front end for the single-shot call calculator.
//!
//! `bs-call <S> <K> <T> <r> <sigma>` prints
//! `European Call Option Price: <value>` and exits 0. A wrong argument count
//! or an unparseable number prints the usage line to stderr and exits 1.

use anyhow::{anyhow, Result};
use std::io::Write;
use tracing::{debug, warn};

use crate::model_params::CallParams;

pub const DEFAULT_PROGRAM_NAME: &str = "bs-call";

const ARG_NAMES: [&str; 5] = ["S", "K", "T", "r", "sigma"];

pub fn usage(program: &str) -> String {
    format!("Usage: {} <S> <K> <T> <r> <sigma>", program)
}

fn parse_arg(name: &str, raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| anyhow!("invalid value for {}: '{}'", name, raw))
}

/// Parse the five positional arguments (program name excluded).
pub fn parse_args(args: &[String]) -> Result<CallParams> {
    if args.len() != ARG_NAMES.len() {
        return Err(anyhow!(
            "expected {} arguments, got {}",
            ARG_NAMES.len(),
            args.len()
        ));
    }
    let mut values = [0.0; 5];
    for ((slot, name), raw) in values.iter_mut().zip(ARG_NAMES).zip(args) {
        *slot = parse_arg(name, raw)?;
    }
    let [spot, strike, maturity, rate, vol] = values;
    Ok(CallParams::new(spot, strike, maturity, rate, vol))
}

/// Run the calculator over a full argv (program name first) and return the
/// process exit code.
pub fn run<I, O, E>(argv: I, out: &mut O, err: &mut E) -> i32
where
    I: IntoIterator<Item = String>,
    O: Write,
    E: Write,
{
    let mut argv = argv.into_iter();
    let program = argv
        .next()
        .unwrap_or_else(|| DEFAULT_PROGRAM_NAME.to_string());
    let args: Vec<String> = argv.collect();

    if args.len() != ARG_NAMES.len() {
        let _ = writeln!(err, "{}", usage(&program));
        return 1;
    }

    let params = match parse_args(&args) {
        Ok(p) => p,
        Err(e) => {
            let _ = writeln!(err, "error: {}", e);
            let _ = writeln!(err, "{}", usage(&program));
            return 1;
        }
    };
    debug!(?params, "pricing european call");

    let price = params.call_price();
    if !price.is_finite() {
        warn!(price, "call price is not finite; check that S, K, T and sigma are positive");
    }

    match writeln!(out, "European Call Option Price: {}", price) {
        Ok(()) => 0,
        Err(e) => {
            let _ = writeln!(err, "error: failed to write result: {}", e);
            1
        }
    }
}
