use std::process::{Command, Output};

fn run(bin: &str, args: &[&str]) -> Output {
    Command::new(bin)
        .args(args)
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .output()
        .unwrap()
}

fn text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).to_string()
}

#[test]
fn test_invalid_settings_print_suggestion() {
    let output = run(
        env!("CARGO_BIN_EXE_copy-demo"),
        &["--initial", "9223372036854775807"],
    );
    let stderr = text(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("Configuration validation failed"));
    assert!(stderr.contains("Suggestion: Check the command line flags"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_verbose_shows_binary_debug_logs() {
    let output = run(env!("CARGO_BIN_EXE_copy-demo"), &["-v"]);
    let stderr = text(&output.stderr);

    assert!(output.status.success());
    assert!(stderr.contains("Settings:"));
    assert!(text(&output.stdout).contains("deep.data: [1, 2]"));
}

#[test]
fn test_unresolvable_host_fails_after_first_phase() {
    let output = run(
        env!("CARGO_BIN_EXE_interaction-demo"),
        &["--host", "nowhere.invalid", "--delay-ms", "0"],
    );
    let stdout = text(&output.stdout);
    let stderr = text(&output.stderr);

    assert!(!output.status.success());
    assert!(stdout.contains("1) Synchronous blocking"));
    assert!(stdout.contains("Read this file, length:"));
    assert!(stdout.contains("2) Synchronous non-blocking"));
    assert!(!stdout.contains("3) Synchronous interaction"));
    assert!(stderr.contains("nowhere.invalid:80"));
    assert!(stderr.contains("--offline"));
}

#[test]
fn test_offline_run_completes_every_phase() {
    let output = run(
        env!("CARGO_BIN_EXE_interaction-demo"),
        &["--offline", "--delay-ms", "10"],
    );
    let stdout = text(&output.stdout);

    assert!(output.status.success());
    for header in ["1)", "2)", "3)", "4)"] {
        assert!(stdout.contains(header), "missing {header}");
    }
    assert!(stdout.contains("Results: OK, OK"));
}
