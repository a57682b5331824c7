use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

fn bin() -> String {
    // Cargo sets this for bin targets in integration tests
    env!("CARGO_BIN_EXE_quantum_toy").to_string()
}

fn run(cfg: &Path, args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(bin())
        .arg("--no-color")
        .arg("--config")
        .arg(cfg)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(stdin.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("run")
}

fn stdout(o: &Output) -> String {
    String::from_utf8_lossy(&o.stdout).into_owned()
}

#[test]
fn repl_measures_on_enter_and_quits_on_q() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("config.toml");
    let output = run(&cfg, &["--seed", "1"], "\nagain\nQ\n");

    assert!(
        output.status.success(),
        "stderr:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );
    let out = stdout(&output);
    assert!(out.contains("QUANTUM TOY MODEL - Interactive"));
    // ENTER and any other input both measure
    assert_eq!(out.matches("QUANTUM MEASUREMENT (Operator Ô)").count(), 2);
    assert_eq!(out.matches("= 7").count(), 2);
}

#[test]
fn repl_stops_at_eof() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("config.toml");
    let output = run(&cfg, &["repl", "--mode", "uniform"], "\n");
    assert!(output.status.success());
    let out = stdout(&output);
    assert_eq!(out.matches("QUANTUM MEASUREMENT").count(), 1);
    assert!(!out.contains("Operator Ô applied"));
}

#[test]
fn measure_json_lines() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("config.toml");
    let output = run(&cfg, &["measure", "-n", "5", "--seed", "3", "--json"], "");
    assert!(output.status.success());

    let out = stdout(&output);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 5);
    for line in lines {
        let v: serde_json::Value = serde_json::from_str(line).unwrap();
        let m = v["measured"].as_u64().unwrap();
        let h = v["hidden"].as_u64().unwrap();
        assert_eq!(m + h, 7);
        assert!(v["measured_binary"].is_u64());
    }
}

#[test]
fn seeded_output_is_reproducible() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("config.toml");
    let a = run(&cfg, &["measure", "-n", "10", "--seed", "77", "--json"], "");
    let b = run(&cfg, &["measure", "-n", "10", "--seed", "77", "--json"], "");
    assert_eq!(stdout(&a), stdout(&b));
}

#[test]
fn config_file_sets_mode() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("config.toml");
    fs::write(&cfg, "mode = \"uniform\"\njson = true\n").unwrap();

    let output = run(&cfg, &["measure", "-n", "3"], "");
    assert!(output.status.success());
    for line in stdout(&output).lines() {
        let v: serde_json::Value = serde_json::from_str(line).unwrap();
        assert!(v.get("measured_binary").is_none());
    }
}

#[test]
fn tally_reports_chi_square() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("config.toml");
    let output = run(&cfg, &["tally", "-n", "600", "--mode", "uniform", "--seed", "4"], "");
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Tally (uniform mode, 600 measurements)"));
    assert!(out.contains("χ² = "));
}

#[test]
fn operator_command_prints_properties() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("config.toml");
    let output = run(&cfg, &["operator", "--json"], "");
    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert_eq!(v["lambda_0"].as_f64(), Some(1.0));
    assert!((v["lambda_1"].as_f64().unwrap() + 0.3624).abs() < 1e-4);
}

#[test]
fn config_init_refuses_to_clobber() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("sub").join("config.toml");

    let first = run(&cfg, &["config", "--init"], "");
    assert!(first.status.success());
    assert!(fs::read_to_string(&cfg).unwrap().contains("mode = \"operator\""));

    let second = run(&cfg, &["config", "--init"], "");
    assert!(!second.status.success());
    assert!(String::from_utf8_lossy(&second.stderr).contains("already exists"));

    let forced = run(&cfg, &["config", "--init", "--force"], "");
    assert!(forced.status.success());
}

#[test]
fn broken_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("config.toml");
    fs::write(&cfg, "mode = \"dice\"\n").unwrap();
    let output = run(&cfg, &["measure"], "");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("parsing"));
}

#[test]
fn repl_json_mode_emits_json_lines_only() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("config.toml");
    let output = run(&cfg, &["--json", "--seed", "2"], "\n\nq\n");
    assert!(output.status.success());

    let out = stdout(&output);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2, "stdout:\n{out}");
    for line in lines {
        let v: serde_json::Value = serde_json::from_str(line).unwrap();
        assert_eq!(v["measured"].as_u64().unwrap() + v["hidden"].as_u64().unwrap(), 7);
    }
}

#[test]
fn tally_rejects_zero_count() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("config.toml");
    let output = run(&cfg, &["tally", "-n", "0"], "");
    assert!(!output.status.success());
    assert!(!stdout(&output).contains("uniform below"));
}

#[test]
fn config_init_force_replaces_broken_file() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("config.toml");
    fs::write(&cfg, "mode = \"dice\"\n").unwrap();

    let output = run(&cfg, &["config", "--init", "--force"], "");
    assert!(output.status.success());
    let measured = run(&cfg, &["measure", "--json"], "");
    assert!(measured.status.success());
}
