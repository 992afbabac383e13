#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn pcl() -> Command {
    cargo_bin_cmd!("punchclock")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_punchclock.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the schema for a test database
pub fn init_db(db_path: &str) {
    pcl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// One punch with a pinned timestamp (epoch ms)
pub fn punch_at(db_path: &str, at_ms: i64) {
    pcl()
        .args(["--db", db_path, "--test", "punch", "--at", &at_ms.to_string()])
        .assert()
        .success();
}

// Pinned instants, all in the UTC+8 reference timezone.
// 2025-09-01 09:00:00 +08
pub const T_IN: i64 = 1_756_688_400_000;
// 2025-09-01 18:30:45 +08 (570 whole minutes after T_IN)
pub const T_OUT: i64 = 1_756_722_645_000;
// 2025-09-02 09:00:00 +08
pub const T_NEXT_IN: i64 = 1_756_774_800_000;
