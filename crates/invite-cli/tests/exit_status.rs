use std::process::Command;

use tempfile::tempdir;

fn invite() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_invite"));
    cmd.env_remove("RUST_LOG").env_remove("INVITE_CONFIG");
    cmd
}

#[test]
fn failure_is_reported_on_stderr_with_error_prefix() {
    let temp = tempdir().expect("tempdir");
    let missing = temp.path().join("absent.toml");

    let output = invite()
        .args(["-qq", "--config"])
        .arg(&missing)
        .arg("dday")
        .output()
        .expect("run invite");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    let reported = stderr
        .lines()
        .find(|line| line.starts_with("error: "))
        .unwrap_or_else(|| panic!("no error line in {stderr:?}"));
    assert!(reported.contains("absent.toml"));
}

#[test]
fn dday_succeeds_with_a_config_file() {
    let temp = tempdir().expect("tempdir");
    let path = temp.path().join("invite.toml");
    std::fs::write(&path, "[wedding]\ndate = \"2026-04-11\"\n").expect("write config");

    let output = invite()
        .arg("--config")
        .arg(&path)
        .args(["dday", "--today", "2026-04-01"])
        .output()
        .expect("run invite");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "D-10");
}
