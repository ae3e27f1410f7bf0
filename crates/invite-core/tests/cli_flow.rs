use std::fs;

use chrono::NaiveDate;
use invite_core::cli::{Command, execute};
use invite_core::config::InviteConfig;
use tempfile::tempdir;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn run(cfg: &InviteConfig, command: Command) -> String {
    let mut out = Vec::new();
    execute(cfg, command, &mut out).expect("command should succeed");
    String::from_utf8(out).expect("utf-8 output")
}

#[test]
fn config_file_drives_dday_output() {
    let temp = tempdir().expect("tempdir");
    let path = temp.path().join("invite.toml");
    fs::write(
        &path,
        "[wedding]\ndate = \"2026-04-11\"\ntimezone = \"Asia/Seoul\"\n\n\
         [messages]\ndday_today = \"오늘이에요!\"\n",
    )
    .expect("write config");

    let cfg = InviteConfig::load(Some(&path)).expect("load config");

    let before = run(
        &cfg,
        Command::Dday {
            today: Some(date(2026, 4, 1)),
            json: false,
        },
    );
    assert_eq!(before.trim_end(), "D-10");

    let on_the_day = run(
        &cfg,
        Command::Dday {
            today: Some(date(2026, 4, 11)),
            json: false,
        },
    );
    assert_eq!(on_the_day.trim_end(), "D-Day, 오늘이에요!");

    let after = run(
        &cfg,
        Command::Dday {
            today: Some(date(2026, 4, 15)),
            json: false,
        },
    );
    assert_eq!(after.trim_end(), "D+4");
}

#[test]
fn dday_json_report() {
    let cfg = InviteConfig::default();
    let out = run(
        &cfg,
        Command::Dday {
            today: Some(date(2026, 4, 1)),
            json: true,
        },
    );
    let value: serde_json::Value = serde_json::from_str(&out).expect("json output");
    assert_eq!(value["wedding"], "2026-04-11");
    assert_eq!(value["today"], "2026-04-01");
    assert_eq!(value["countdown"]["phase"], "until");
    assert_eq!(value["countdown"]["days"], 10);
    assert_eq!(value["text"], "D-10");
}

#[test]
fn config_command_prints_resolved_toml() {
    let out = run(&InviteConfig::default(), Command::Config);
    let parsed = InviteConfig::from_toml_str(&out).expect("printed config parses");
    assert_eq!(parsed, InviteConfig::default());
    assert!(out.contains("dismiss_after_ms = 1300"));
}

#[test]
fn missing_config_file_is_an_error() {
    let temp = tempdir().expect("tempdir");
    let err = InviteConfig::load(Some(&temp.path().join("absent.toml")))
        .expect_err("missing explicit file");
    assert!(format!("{err:#}").contains("absent.toml"));
}
