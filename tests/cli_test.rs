/*!
 * Integration tests for the air-easy binary
 */

use assert_fs::prelude::*;
use assert_fs::TempDir;
use std::io::Write;
use std::process::{Command, Output, Stdio};

const PAYLOAD: &str = r#"[
    {"flight_number": "AE100", "departure": "JFK", "arrival": "LAX", "status": "On Time"},
    {"flight_number": "AE200", "departure": "JFK", "arrival": "LAX", "status": "Delayed"}
]"#;

/// Temp home with a saved payload, so no user config is picked up
fn workspace() -> TempDir {
    let temp = TempDir::new().unwrap();
    temp.child("flights.json").write_str(PAYLOAD).unwrap();
    temp
}

fn air_easy(temp: &TempDir, args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_air-easy"))
        .args(args)
        .env("HOME", temp.path())
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn session(temp: &TempDir, answers: &str) -> Output {
    let payload = temp.child("flights.json");
    let payload = payload.path().to_str().unwrap();
    air_easy(temp, &["--payload", payload], answers)
}

fn stdout(output: &Output) -> String {
    console::strip_ansi_codes(&String::from_utf8_lossy(&output.stdout)).into_owned()
}

fn stderr(output: &Output) -> String {
    console::strip_ansi_codes(&String::from_utf8_lossy(&output.stderr)).into_owned()
}

#[test]
fn test_piped_booking_session() {
    let temp = workspace();
    let output = session(&temp, "Ada\na@b.c\n36\n555\nJFK\nLAX\n1\n1\n");

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let text = stdout(&output);
    assert!(text.contains("Welcome to Air-Easy Ticket Booking"));
    assert!(text.contains("AE200"));
    assert!(text.contains("Booking successful for Flight: AE100"));
    assert!(text.contains("Ada"));
}

#[test]
fn test_piped_cancel_session() {
    let temp = workspace();
    let output = session(&temp, "Ada\na@b.c\n36\n555\nJFK\nLAX\n2\n2\n");

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Cancellation successful for Flight: AE200"));
}

#[test]
fn test_invalid_action_exits_zero() {
    let temp = workspace();
    let output = session(&temp, "Ada\na@b.c\n36\n555\nJFK\nLAX\n9\n");

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Invalid action."));
}

#[test]
fn test_rejected_booking_exits_zero() {
    let temp = workspace();
    let output = session(&temp, "Ada\na@b.c\n36\n555\nJFK\nLAX\n1\n5\n");

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Invalid choice."));
}

#[test]
fn test_input_ending_early_exits_one() {
    let temp = workspace();
    let output = session(&temp, "Ada\na@b.c\n");

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("Input error"));
    assert!(err.contains("input ended early"));
}

#[test]
fn test_missing_config_exits_one() {
    let temp = workspace();
    let missing = temp.child("missing.toml");
    let output = air_easy(
        &temp,
        &[
            "--config",
            missing.path().to_str().unwrap(),
            "flights",
            "--from",
            "JFK",
            "--to",
            "LAX",
        ],
        "",
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("I/O error"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_flights_json_listing() {
    let temp = workspace();
    let payload = temp.child("flights.json");
    let output = air_easy(
        &temp,
        &[
            "--payload",
            payload.path().to_str().unwrap(),
            "flights",
            "--from",
            "JFK",
            "--to",
            "LAX",
            "--json",
        ],
        "",
    );

    assert_eq!(output.status.code(), Some(0));
    let listing: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(listing["origin"], "JFK");
    assert_eq!(listing["destination"], "LAX");
    assert_eq!(listing["count"], 2);
    assert_eq!(listing["flights"][1]["flight_number"], "AE200");
    assert_eq!(listing["flights"][1]["available_seats"], 60);
}

#[test]
fn test_payload_overrides_fetch_command() {
    let temp = workspace();
    let payload = temp.child("flights.json");
    let output = air_easy(
        &temp,
        &[
            "--fetch-command",
            "air-easy-missing-fetcher",
            "--payload",
            payload.path().to_str().unwrap(),
            "flights",
            "--from",
            "JFK",
            "--to",
            "LAX",
        ],
        "",
    );

    assert_eq!(output.status.code(), Some(0));
    let text = stdout(&output);
    assert!(text.contains("AE100"));
    assert!(text.contains("AE200"));
}

#[test]
fn test_failing_fetch_command_lists_nothing() {
    let temp = workspace();
    let config = temp.child("air-easy.toml");
    config
        .write_str(&format!(
            "fetch_program = \"air-easy-missing-fetcher\"\nartifact_path = '{}'\n",
            temp.child("out.json").path().display()
        ))
        .unwrap();

    let output = air_easy(
        &temp,
        &[
            "--config",
            config.path().to_str().unwrap(),
            "flights",
            "--from",
            "JFK",
            "--to",
            "LAX",
        ],
        "",
    );

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("No flights found for the given route."));
    assert!(stderr(&output).contains("flight fetch failed"));
}

#[test]
fn test_empty_route_code_is_rejected() {
    let temp = workspace();
    let payload = temp.child("flights.json");
    let output = air_easy(
        &temp,
        &[
            "--payload",
            payload.path().to_str().unwrap(),
            "flights",
            "--from",
            " ",
            "--to",
            "LAX",
        ],
        "",
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Configuration error"));
}
