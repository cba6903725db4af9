use std::process::Command;

fn bs_call() -> Command {
    Command::new(env!("CARGO_BIN_EXE_bs-call"))
}

#[test]
fn test_cli_prints_single_price_line() {
    let output = bs_call()
        .args(["100", "100", "1", "0.05", "0.2"])
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run bs-call");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1, "stdout: {:?}", stdout);

    let value: f64 = stdout
        .trim_end()
        .strip_prefix("European Call Option Price: ")
        .expect("missing prefix")
        .parse()
        .expect("price is not a number");
    assert!((value - 10.4506).abs() < 1e-4, "got {}", value);
    assert!(output.stderr.is_empty());
}

#[test]
fn test_cli_wrong_argument_count() {
    let output = bs_call()
        .args(["100", "100", "1"])
        .output()
        .expect("failed to run bs-call");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.starts_with("Usage: "), "stderr: {:?}", stderr);
    assert!(stderr.trim_end().ends_with("<S> <K> <T> <r> <sigma>"));
}

#[test]
fn test_cli_rejects_malformed_number() {
    let output = bs_call()
        .args(["100", "100", "one", "0.05", "0.2"])
        .output()
        .expect("failed to run bs-call");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("invalid value for T"), "stderr: {:?}", stderr);
}

#[test]
fn test_cli_zero_volatility_prints_nan() {
    let output = bs_call()
        .args(["100", "100", "1", "0", "0"])
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run bs-call");

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "European Call Option Price: NaN\n"
    );
}

#[test]
fn test_heatmap_rejects_extra_arguments() {
    let output = Command::new(env!("CARGO_BIN_EXE_bs-heatmap"))
        .args(["a.toml", "b.toml"])
        .output()
        .expect("failed to run bs-heatmap");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.starts_with("Usage: "), "stderr: {:?}", stderr);
    assert!(stderr.trim_end().ends_with("[config.toml]"));
}

#[test]
fn test_heatmap_reports_missing_config() {
    let missing =
        std::env::temp_dir().join(format!("bs_call_missing_{}.toml", std::process::id()));
    let output = Command::new(env!("CARGO_BIN_EXE_bs-heatmap"))
        .arg(&missing)
        .output()
        .expect("failed to run bs-heatmap");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("failed to read config file"), "stderr: {:?}", stderr);
}
