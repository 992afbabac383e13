mod common;

use common::{T_IN, T_NEXT_IN, T_OUT, init_db, pcl, punch_at, setup_test_db, temp_out};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_init_creates_database() {
    let db = setup_test_db("init");

    pcl()
        .args(["--db", &db, "--test", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Database initialized"));

    assert!(fs::metadata(&db).is_ok());
}

#[test]
fn test_first_punch_clocks_in() {
    let db = setup_test_db("first_punch");
    init_db(&db);

    pcl()
        .args(["--db", &db, "--test", "punch", "--at", &T_IN.to_string()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Clocked in at 09:00 (2025-09-01)"))
        .stdout(predicate::str::contains("1 day(s) on record"));
}

#[test]
fn test_second_punch_clocks_out_with_rounded_hours() {
    let db = setup_test_db("second_punch");
    init_db(&db);
    punch_at(&db, T_IN);

    pcl()
        .args(["--db", &db, "--test", "punch", "--at", &T_OUT.to_string()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Clocked out at 18:30"))
        .stdout(predicate::str::contains("9.5 h"));
}

#[test]
fn test_third_punch_same_day_overwrites_clock_out() {
    let db = setup_test_db("third_punch");
    init_db(&db);
    punch_at(&db, T_IN);
    punch_at(&db, T_OUT);

    let later = T_OUT + 20 * 60_000;
    pcl()
        .args(["--db", &db, "--test", "punch", "--at", &later.to_string()])
        .assert()
        .success()
        .stdout(predicate::str::contains("already closed"))
        .stdout(predicate::str::contains("Clocked out at 18:50"));
}

#[test]
fn test_punch_next_day_opens_new_record() {
    let db = setup_test_db("next_day");
    init_db(&db);
    punch_at(&db, T_IN);
    punch_at(&db, T_OUT);

    pcl()
        .args([
            "--db",
            &db,
            "--test",
            "punch",
            "--at",
            &T_NEXT_IN.to_string(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Clocked in at 09:00 (2025-09-02)"))
        .stdout(predicate::str::contains("2 day(s) on record"));
}

#[test]
fn test_punch_backwards_clock_records_negative_duration() {
    let db = setup_test_db("negative");
    init_db(&db);
    punch_at(&db, T_IN);

    let earlier = T_IN - 2 * 60_000;
    pcl()
        .args(["--db", &db, "--test", "punch", "--at", &earlier.to_string()])
        .assert()
        .success()
        .stdout(predicate::str::contains("negative duration"));
}

#[test]
fn test_punch_rejects_bad_timestamp() {
    let db = setup_test_db("bad_at");
    init_db(&db);

    pcl()
        .args(["--db", &db, "--test", "punch", "--at", "not-a-number"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid timestamp"));
}

#[test]
fn test_list_groups_by_month_newest_first() {
    let db = setup_test_db("list");
    init_db(&db);
    punch_at(&db, T_IN);
    punch_at(&db, T_OUT);
    punch_at(&db, T_NEXT_IN);

    pcl()
        .args(["--db", &db, "--test", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("📅 2025-09"))
        .stdout(predicate::str::contains("2025-09-02"))
        .stdout(predicate::str::contains("2025-09-01"))
        .stdout(predicate::str::contains("9.5 h"))
        .stdout(predicate::str::contains("2 day(s) on record"));
}

#[test]
fn test_list_month_filter() {
    let db = setup_test_db("list_month");
    init_db(&db);
    punch_at(&db, T_IN);

    pcl()
        .args(["--db", &db, "--test", "list", "--month", "2025-09"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-09-01"));

    pcl()
        .args(["--db", &db, "--test", "list", "--month", "2025-07"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No records for 2025-07."));
}

#[test]
fn test_list_empty_database() {
    let db = setup_test_db("list_empty");
    init_db(&db);

    pcl()
        .args(["--db", &db, "--test", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No records yet."));
}

#[test]
fn test_status_reports_last_recorded_day() {
    let db = setup_test_db("status");
    init_db(&db);
    punch_at(&db, T_IN);

    // The pinned day is in the past, so the clock reads as off duty.
    pcl()
        .args(["--db", &db, "--test", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Last recorded day: 2025-09-01."));
}

#[test]
fn test_status_empty_database() {
    let db = setup_test_db("status_empty");
    init_db(&db);

    pcl()
        .args(["--db", &db, "--test", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No records yet."));
}

#[test]
fn test_clear_asks_for_confirmation() {
    let db = setup_test_db("clear_confirm");
    init_db(&db);
    punch_at(&db, T_IN);

    pcl()
        .args(["--db", &db, "--test", "clear"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 1 record(s)."));

    pcl()
        .args(["--db", &db, "--test", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No records yet."));
}

#[test]
fn test_clear_cancelled_keeps_records() {
    let db = setup_test_db("clear_cancel");
    init_db(&db);
    punch_at(&db, T_IN);

    pcl()
        .args(["--db", &db, "--test", "clear"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Clear cancelled."));

    pcl()
        .args(["--db", &db, "--test", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-09-01"));
}

#[test]
fn test_clear_yes_on_empty_database() {
    let db = setup_test_db("clear_empty");
    init_db(&db);

    pcl()
        .args(["--db", &db, "--test", "clear", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already empty"));
}

#[test]
fn test_export_csv() {
    let db = setup_test_db("export_csv");
    let out = temp_out("export_csv", "csv");
    init_db(&db);
    punch_at(&db, T_IN);
    punch_at(&db, T_OUT);

    pcl()
        .args([
            "--db", &db, "--test", "export", "--format", "csv", "--file", &out, "--force",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported data to"));

    let content = fs::read_to_string(&out).expect("read export");
    assert!(content.contains("working_hours"));
    assert!(content.contains("2025-09-01"));
    assert!(content.contains("9.5"));
}

#[test]
fn test_export_json() {
    let db = setup_test_db("export_json");
    let out = temp_out("export_json", "json");
    init_db(&db);
    punch_at(&db, T_IN);

    pcl()
        .args([
            "--db", &db, "--test", "export", "--format", "json", "--file", &out, "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read export");
    assert!(content.contains("\"date\": \"2025-09-01\""));
    assert!(content.contains("\"working_hours\": null"));
}

#[test]
fn test_export_rejects_unknown_format() {
    let db = setup_test_db("export_bad_format");
    let out = temp_out("export_bad_format", "xml");
    init_db(&db);
    punch_at(&db, T_IN);

    pcl()
        .args([
            "--db", &db, "--test", "export", "--format", "xml", "--file", &out, "--force",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Export format not supported"));
}

#[test]
fn test_export_rejects_relative_path() {
    let db = setup_test_db("export_relative");
    init_db(&db);
    punch_at(&db, T_IN);

    pcl()
        .args([
            "--db",
            &db,
            "--test",
            "export",
            "--format",
            "csv",
            "--file",
            "relative_out.csv",
            "--force",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be absolute"));
}

#[test]
fn test_log_records_punches() {
    let db = setup_test_db("log");
    init_db(&db);
    punch_at(&db, T_IN);
    punch_at(&db, T_OUT);

    pcl()
        .args(["--db", &db, "--test", "log", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("punch_in"))
        .stdout(predicate::str::contains("punch_out"));
}

#[test]
fn test_backup_copies_database() {
    let db = setup_test_db("backup");
    let out = temp_out("backup", "sqlite");
    init_db(&db);
    punch_at(&db, T_IN);

    pcl()
        .args(["--db", &db, "--test", "backup", "--file", &out])
        .assert()
        .success()
        .stdout(predicate::str::contains("Backup created"));

    assert!(fs::metadata(&out).is_ok());
}
