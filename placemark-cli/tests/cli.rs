//! End-to-end tests for the `placemark` binary.
//!
//! Every test points `--config` into a temporary directory so the user's
//! own ~/.placemark is never read or written.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// Temporary home for one test run.
struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    fn config_path(&self) -> PathBuf {
        self.dir.path().join("config.ini")
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_placemark"));
        cmd.arg("--config").arg(self.config_path());
        cmd.env("HOME", self.dir.path());
        cmd.env_remove("RUST_LOG");
        cmd
    }

    fn run(&self, args: &[&str]) -> Output {
        self.command().args(args).output().unwrap()
    }

    fn run_with_stdin(&self, args: &[&str], input: &str) -> Output {
        let mut child = self
            .command()
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .unwrap();
        child
            .stdin
            .take()
            .unwrap()
            .write_all(input.as_bytes())
            .unwrap();
        child.wait_with_output().unwrap()
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_extract_from_arguments() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&[
        "extract",
        "https://mapy.cz/zakladni?x=14.4378&y=50.0755&z=12",
        "https://www.google.com/maps/@50.0875,14.4213,15z",
        "https://example.com/nothing",
    ]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "50.0755,14.4378\n50.0875,14.4213\nno match\n"
    );
}

#[test]
fn test_extract_from_stdin_as_json() {
    let sandbox = Sandbox::new();
    let output = sandbox.run_with_stdin(
        &["extract", "--format", "json"],
        "https://maps.apple.com/?ll=48.8584,2.2945\n\nnot a map\n",
    );

    assert!(output.status.success());
    let lines: Vec<serde_json::Value> = stdout(&output)
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["dialect"], "ll");
    assert_eq!(lines[0]["lat"], 48.8584);
    assert!(lines[1]["match"].is_null());
}

#[test]
fn test_strict_exits_with_two_on_miss() {
    let sandbox = Sandbox::new();

    let output = sandbox.run(&["extract", "--strict", "?ll=1,2", "nothing"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("1 of 2 URLs had no coordinates"));

    let output = sandbox.run(&["extract", "--strict", "?ll=1,2"]);
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_policy_from_config_and_flag() {
    let sandbox = Sandbox::new();
    let url = "https://x.test/?x=200&y=50&ll=50,14";

    assert_eq!(stdout(&sandbox.run(&["extract", url])), "no match\n");

    let output = sandbox.run(&["config", "set", "extract.policy", "first-valid"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&sandbox.run(&["extract", url])), "50,14\n");

    let output = sandbox.run(&["extract", "--policy", "first-pattern", url]);
    assert_eq!(stdout(&output), "no match\n");
}

#[test]
fn test_verbose_logs_diagnostics_to_stderr() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["--verbose", "extract", "?x=14.4&y=50.1"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "50.1,14.4\n");
    assert!(stderr(&output).contains("mapy.cz"));
}

#[test]
fn test_dialects_lists_all_formats() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["dialects"]);

    assert!(output.status.success());
    let text = stdout(&output);
    for format in ["x=lng, y=lat", "@lat,lng,zoom", "q=lat,lng", "ll=lat,lng"] {
        assert!(text.contains(format), "missing {}", format);
    }
}

#[test]
fn test_locations_summary() {
    let sandbox = Sandbox::new();
    let file = sandbox.dir.path().join("locations.json");
    fs::write(
        &file,
        r#"[{"id":"1","name":"Karlštejn","location":"Czechia","category_id":"c",
            "map_url":"https://mapy.cz/?x=14.1883&y=49.9394","visited":true}]"#,
    )
    .unwrap();

    let output = sandbox.run(&["locations", file.to_str().unwrap()]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let text = stdout(&output);
    assert!(text.starts_with("1 locations, 1 with coordinates"));
    assert!(text.contains("Coordinates: 49.9394,14.1883 (mapy.cz)"));
}

#[test]
fn test_locations_invalid_file() {
    let sandbox = Sandbox::new();
    let file = sandbox.dir.path().join("broken.json");
    fs::write(&file, "{").unwrap();

    let output = sandbox.run(&["locations", file.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Invalid location data"));
}

#[test]
fn test_config_round_trip() {
    let sandbox = Sandbox::new();

    let output = sandbox.run(&["config", "path"]);
    assert_eq!(
        stdout(&output).trim(),
        sandbox.config_path().display().to_string()
    );

    assert_eq!(
        stdout(&sandbox.run(&["config", "get", "logging.level"])).trim(),
        "info"
    );

    let output = sandbox.run(&["config", "set", "logging.level", "warn"]);
    assert!(output.status.success());
    assert!(sandbox.config_path().exists());
    assert_eq!(
        stdout(&sandbox.run(&["config", "get", "logging.level"])).trim(),
        "warn"
    );

    let output = sandbox.run(&["config", "set", "logging.level", "loud"]);
    assert_eq!(output.status.code(), Some(1));

    let output = sandbox.run(&["config", "get", "nope.key"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Unknown configuration key"));
}

#[test]
fn test_config_set_repairs_one_key_and_keeps_the_rest() {
    let sandbox = Sandbox::new();
    fs::write(
        sandbox.config_path(),
        "[extract]\npolicy = first-valid\n\n[logging]\nlevel = loud\n",
    )
    .unwrap();

    let output = sandbox.run(&["extract", "?ll=1,2"]);
    assert_eq!(output.status.code(), Some(1));

    let output = sandbox.run(&["config", "set", "logging.level", "info"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert_eq!(
        stdout(&sandbox.run(&["config", "get", "extract.policy"])).trim(),
        "first-valid"
    );
    assert_eq!(
        stdout(&sandbox.run(&["config", "get", "logging.level"])).trim(),
        "info"
    );
}
