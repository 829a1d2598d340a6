//! CLI tests for the `hanoi` binary.
//!
//! Spawns the binary and checks the printed move listing, grid and exit
//! status.

use std::process::{Command, Output};

fn hanoi(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hanoi"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run hanoi")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf-8 stdout")
}

#[test]
fn default_run_prints_the_three_disk_solution() {
    let output = hanoi(&[]);
    assert!(output.status.success());

    let text = stdout(&output);
    let moves: Vec<&str> = text.lines().filter(|l| l.starts_with("Move ")).collect();
    assert_eq!(
        moves,
        vec![
            "Move 1: Disk 1 from left to right",
            "Move 2: Disk 2 from left to middle",
            "Move 3: Disk 1 from right to middle",
            "Move 4: Disk 3 from left to right",
            "Move 5: Disk 1 from middle to left",
            "Move 6: Disk 2 from middle to right",
            "Move 7: Disk 1 from left to right",
        ]
    );
    assert!(text.starts_with("Solving Tower of Hanoi for 3 disks:\n"));
    assert!(text.trim_end().ends_with("Total Moves: 7"));
}

#[test]
fn each_move_is_followed_by_the_grid() {
    let text = stdout(&hanoi(&["--disks", "1"]));
    let expected = [
        "Solving Tower of Hanoi for 1 disks:",
        "",
        "Current Peg State:",
        " [1]    |     |   ",
        "------------------",
        "  A     B     C   ",
        "==============================",
        "Move 1: Disk 1 from left to right",
        "",
        "Current Peg State:",
        "  |     |    [1]  ",
        "------------------",
        "  A     B     C   ",
        "==============================",
        "",
        "Total Moves: 1",
    ]
    .map(|line| format!("{}\n", line))
    .concat();
    assert_eq!(text, expected);
}

#[test]
fn quiet_skips_the_grid() {
    let text = stdout(&hanoi(&["--disks", "2", "--quiet"]));
    assert!(!text.contains("Current Peg State:"));
    assert_eq!(text.lines().filter(|l| l.starts_with("Move ")).count(), 3);
}

#[test]
fn zero_disks_make_no_moves() {
    let output = hanoi(&["--disks", "0", "--quiet"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "Solving Tower of Hanoi for 0 disks:\n\nTotal Moves: 0\n"
    );
}

#[test]
fn custom_roles_and_verification() {
    let output = hanoi(&[
        "--disks", "4", "--source", "right", "--auxiliary", "left", "--target", "middle",
        "--verify", "--quiet",
    ]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Move 1: Disk 1 from right to left"));
    assert!(text.trim_end().ends_with("Total Moves: 15"));
}

#[test]
fn snapshot_is_printed_as_json() {
    let text = stdout(&hanoi(&["--disks", "2", "--quiet", "--snapshot"]));
    let json_start = text.find('{').expect("snapshot json");
    let value: serde_json::Value = serde_json::from_str(&text[json_start..]).expect("valid json");

    assert_eq!(value["move_count"], 3);
    assert_eq!(value["pegs"]["right"], serde_json::json!([2, 1]));
}

#[test]
fn duplicate_pegs_are_rejected() {
    let output = hanoi(&["--source", "left", "--target", "left"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid configuration"));
}

#[test]
fn too_many_disks_are_rejected() {
    let output = hanoi(&["--disks", "21"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Too many disks"));
}
