//! Integration tests for the co-cli command-line interface.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// The binary with no API key in its environment.
fn chronos() -> Command {
    let mut cmd = Command::cargo_bin("chronos").unwrap();
    cmd.env_remove("GEMINI_API_KEY").env_remove("API_KEY");
    cmd
}

// ---------------------------------------------------------------------------
// draw
// ---------------------------------------------------------------------------

#[test]
fn draw_numeric_single_value_range() {
    chronos()
        .args(["draw", "numeric", "--min", "5", "--max", "5", "--offline"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Result"))
        .stdout(predicate::str::contains("5"))
        .stdout(predicate::str::contains("每一个随机的瞬间都是宇宙的低语。"));
}

#[test]
fn draw_numeric_negative_bounds() {
    chronos()
        .args(["draw", "numeric", "--min", "-3", "--max", "-3", "--offline"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-3"));
}

#[test]
fn draw_numeric_inverted_bounds_fails() {
    chronos()
        .args(["draw", "numeric", "--min", "10", "--max", "1", "--offline"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid range"));
}

#[test]
fn draw_numeric_json_is_parseable() {
    let output = chronos()
        .args(["draw", "--json", "numeric", "--min", "7", "--max", "7", "--offline"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let item: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(item["mode"], "NUMERIC");
    assert_eq!(item["outcome"]["kind"], "number");
    assert_eq!(item["outcome"]["value"], 7);
    assert!(item["millisecond_seed"].as_u64().unwrap() < 1000);
    assert_eq!(item["insight"], "每一个随机的瞬间都是宇宙的低语。");
}

#[test]
fn draw_single_option() {
    chronos()
        .args(["draw", "options", "Hot pot", "--offline"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hot pot"));
}

#[test]
fn draw_options_requires_one() {
    chronos()
        .args(["draw", "options", "--offline"])
        .assert()
        .failure();
}

#[test]
fn draw_blank_options_fail() {
    chronos()
        .args(["draw", "options", "  ", "--offline"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no options"));
}

#[test]
fn draw_divination_offline() {
    let output = chronos()
        .args(["draw", "divination", "Should I move?", "--json", "--offline"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let item: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(item["mode"], "DIVINATION");
    assert_eq!(item["question"], "Should I move?");
    let reading = &item["outcome"]["value"];
    let code = reading["binary_code"].as_str().unwrap();
    assert_eq!(code.len(), 6);
    assert!(code.chars().all(|c| c == '0' || c == '1'));
    let line = reading["active_line"].as_u64().unwrap();
    assert!((1..=6).contains(&line));
    assert_ne!(reading["hexagram_name"], "未知之卦");
    assert_eq!(item["insight"], "万物盈缩，皆有定数。请静待时机。");
}

#[test]
fn draw_divination_empty_question_fails() {
    chronos()
        .args(["draw", "divination", "   ", "--offline"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("question"));
}

#[test]
fn draw_without_key_notes_fallback() {
    chronos()
        .args(["draw", "numeric"])
        .assert()
        .success()
        .stderr(predicate::str::contains("GEMINI_API_KEY"));
}

// ---------------------------------------------------------------------------
// hexagram / hexagrams / modes
// ---------------------------------------------------------------------------

#[test]
fn hexagram_lookup() {
    chronos()
        .args(["hexagram", "111111"])
        .assert()
        .success()
        .stdout(predicate::str::contains("乾为天"))
        .stdout(predicate::str::contains("The Creative"));
}

#[test]
fn hexagram_with_moving_line() {
    chronos()
        .args(["hexagram", "010101", "--line", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("水火既济"))
        .stdout(predicate::str::contains("初九"));
}

#[test]
fn hexagram_lookup_by_number() {
    chronos()
        .args(["hexagram", "63"])
        .assert()
        .success()
        .stdout(predicate::str::contains("水火既济"));
    chronos()
        .args(["hexagram", "65"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no hexagram number 65"));
}

#[test]
fn hexagram_invalid_code_fails() {
    chronos()
        .args(["hexagram", "12345"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid hexagram code"));
}

#[test]
fn hexagram_line_out_of_range_fails() {
    chronos()
        .args(["hexagram", "000000", "--line", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("between 1 and 6"));
}

#[test]
fn hexagrams_lists_all() {
    chronos()
        .arg("hexagrams")
        .assert()
        .success()
        .stdout(predicate::str::contains("火水未济"))
        .stdout(predicate::str::contains("64 hexagrams"));
}

#[test]
fn modes_lists_all() {
    chronos()
        .arg("modes")
        .assert()
        .success()
        .stdout(predicate::str::contains("NUMERIC"))
        .stdout(predicate::str::contains("OPTIONS"))
        .stdout(predicate::str::contains("DIVINATION"));
}

// ---------------------------------------------------------------------------
// session
// ---------------------------------------------------------------------------

#[test]
fn session_quits_on_eof() {
    chronos()
        .args(["session", "--offline"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Session"));
}

#[test]
fn session_unknown_command_is_reported() {
    chronos()
        .args(["session", "--offline"])
        .write_stdin("tarot\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("unknown command"));
}

#[test]
fn session_draws_and_exports_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.json");
    let script = format!(
        "range 4 4\ndraw\nclear\nmode options\noptions clear\ndraw\nadd Tea\nadd Cake\nremove 2\ndraw\nmode divination\nask Will it rain?\ndraw\nhistory\nexport json {}\nquit\n",
        path.display()
    );

    chronos()
        .args(["session", "--offline"])
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("no options"))
        .stdout(predicate::str::contains("Exported to"));

    let json = fs::read_to_string(&path).unwrap();
    let items: serde_json::Value = serde_json::from_str(&json).unwrap();
    let items = items.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["mode"], "DIVINATION");
    assert_eq!(items[0]["question"], "Will it rain?");
    assert_eq!(items[1]["outcome"]["value"], "Tea");
}

#[test]
fn session_question_is_used_once() {
    let output = chronos()
        .args(["session", "--offline"])
        .write_stdin("mode divination\nask Will it rain?\ndraw\ndraw\nexport json\nquit\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("a divination needs a question"));
    assert_eq!(stdout.matches("\"mode\": \"DIVINATION\"").count(), 1);
}

#[test]
fn session_history_filters_by_mode() {
    chronos()
        .args(["session", "--offline"])
        .write_stdin("range 3 3\ndraw\nmode options\ndraw\nhistory divination\nhistory options\nhistory tarot\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("(no draws yet)"))
        .stdout(predicate::str::contains("OPTIONS"))
        .stdout(predicate::str::contains("unknown mode 'tarot'"));
}

#[test]
fn session_exports_markdown_to_stdout() {
    chronos()
        .args(["session", "--offline"])
        .write_stdin("range 9 9\ndraw\nexport md\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Chronos Oracle Session"))
        .stdout(predicate::str::contains("## 9"));
}

#[test]
fn session_rejects_bad_range() {
    chronos()
        .args(["session", "--offline"])
        .write_stdin("range 5 1\ndraw\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("invalid range"));
}
