use tracing_subscriber::EnvFilter;

/// Level used when `RUST_LOG` is unset or unparseable
pub const DEFAULT_FILTER: &str = "warn";

/// Install the stderr `tracing` subscriber shared by both binaries.
///
/// `RUST_LOG` overrides the level. Stdout is never written to, and a second
/// call is a no-op.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_does_not_panic() {
        init_tracing();
        init_tracing();
    }
}
