use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db, rwt, track_at};

#[test]
fn test_start_pause_resume_stop_cycle() {
    let db_path = init_db("cycle");

    track_at(&db_path, "2025-07-01 08:00", &["start", "--loc", "O"]);
    track_at(&db_path, "2025-07-01 12:00", &["pause"]);
    track_at(&db_path, "2025-07-01 12:20", &["resume"]);
    track_at(&db_path, "2025-07-01 15:00", &["pause"]);
    track_at(&db_path, "2025-07-01 15:15", &["resume"]);

    rwt()
        .args(["--db", &db_path, "--at", "2025-07-01 17:00", "stop"])
        .assert()
        .success()
        .stdout(contains("Tracking stopped at 17:00"))
        .stdout(contains("worked 09h 00m"))
        .stdout(contains("break required"));

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let (state, break_minutes, end_time, location): (String, i64, Option<String>, Option<String>) =
        conn.query_row(
            "SELECT state, break_minutes, end_time, location FROM work_sessions WHERE id = 1",
            [],
            |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?, r.get(3)?)),
        )
        .expect("session row");

    assert_eq!(state, "stopped");
    assert_eq!(break_minutes, 35);
    assert!(end_time.is_some());
    assert_eq!(location.as_deref(), Some("O"));

    let open_breaks: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM breaks WHERE session_id = 1 AND end_time IS NULL",
            [],
            |r| r.get(0),
        )
        .expect("count");
    assert_eq!(open_breaks, 0);
}

#[test]
fn test_stop_while_paused_closes_break() {
    let db_path = init_db("stop_paused");

    track_at(&db_path, "2025-07-02 08:00", &["start"]);
    track_at(&db_path, "2025-07-02 12:00", &["pause"]);
    track_at(&db_path, "2025-07-02 12:45", &["stop"]);

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let break_minutes: i64 = conn
        .query_row("SELECT break_minutes FROM work_sessions WHERE id = 1", [], |r| {
            r.get(0)
        })
        .expect("row");
    assert_eq!(break_minutes, 45);
}

#[test]
fn test_pause_without_session_fails() {
    let db_path = init_db("pause_idle");

    rwt()
        .args(["--db", &db_path, "--at", "2025-07-01 10:00", "pause"])
        .assert()
        .failure()
        .stderr(contains("No active tracking session"));
}

#[test]
fn test_resume_while_tracking_is_rejected() {
    let db_path = init_db("resume_tracking");
    track_at(&db_path, "2025-07-01 08:00", &["start"]);

    rwt()
        .args(["--db", &db_path, "--at", "2025-07-01 09:00", "resume"])
        .assert()
        .failure()
        .stderr(contains("Cannot resume a session that is tracking"));
}

#[test]
fn test_double_start_is_rejected() {
    let db_path = init_db("double_start");
    track_at(&db_path, "2025-07-01 08:00", &["start"]);

    rwt()
        .args(["--db", &db_path, "--at", "2025-07-01 08:30", "start"])
        .assert()
        .failure()
        .stderr(contains("already being tracked"));
}

#[test]
fn test_pause_before_start_is_rejected() {
    let db_path = init_db("pause_before_start");
    track_at(&db_path, "2025-07-01 08:00", &["start"]);

    rwt()
        .args(["--db", &db_path, "--at", "2025-07-01 07:30", "pause"])
        .assert()
        .failure()
        .stderr(contains("precedes the session start"));
}

#[test]
fn test_invalid_location_is_rejected() {
    let db_path = init_db("bad_location");

    rwt()
        .args(["--db", &db_path, "--at", "2025-07-01 08:00", "start", "--loc", "X"])
        .assert()
        .failure()
        .stderr(contains("Invalid location code"));
}

#[test]
fn test_invalid_at_is_rejected() {
    let db_path = init_db("bad_at");

    rwt()
        .args(["--db", &db_path, "--at", "yesterday", "start"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format"));
}

#[test]
fn test_status_without_session_shows_empty_state() {
    let db_path = init_db("status_empty");

    rwt()
        .args(["--db", &db_path, "status"])
        .assert()
        .success()
        .stdout(contains("No active tracking"));

    rwt()
        .args(["--db", &db_path, "status", "--json"])
        .assert()
        .success()
        .stdout(contains("null"));
}

#[test]
fn test_status_after_six_hours_without_break() {
    let db_path = init_db("status_6h05");
    track_at(&db_path, "2025-07-01 08:00", &["start", "--project", "payroll"]);

    rwt()
        .args(["--db", &db_path, "--at", "2025-07-01 14:05", "status"])
        .assert()
        .success()
        .stdout(contains("Session #1 (tracking)"))
        .stdout(contains("Worked         : 06h 05m"))
        .stdout(contains("required 30 min, satisfied: no"))
        .stdout(contains("payroll"))
        .stdout(contains("break required"))
        .stdout(contains("required-break-30"))
        .stdout(contains("warning"))
        .stdout(contains("required-break-45").not());
}

#[test]
fn test_status_json_counts_running_pause() {
    let db_path = init_db("status_json_pause");
    track_at(&db_path, "2025-07-01 08:00", &["start"]);
    track_at(&db_path, "2025-07-01 12:00", &["pause"]);
    track_at(&db_path, "2025-07-01 12:25", &["resume"]);
    track_at(&db_path, "2025-07-01 14:00", &["pause"]);

    let out = rwt()
        .args(["--db", &db_path, "--at", "2025-07-01 14:05:30", "status", "--json"])
        .output()
        .expect("run status");
    assert!(out.status.success());

    let v: serde_json::Value = serde_json::from_slice(&out.stdout).expect("valid json");
    assert_eq!(v["session"]["state"], "paused");
    assert_eq!(v["snapshot"]["worked_minutes"], 365);
    assert_eq!(v["snapshot"]["effective_break_minutes"], 30);
    assert_eq!(v["snapshot"]["required_break_minutes"], 30);
    assert_eq!(v["snapshot"]["break_satisfied"], true);
    assert_eq!(v["snapshot"]["minutes_until_legal_max"], 235);
    assert_eq!(v["status"], "compliant");

    let kinds: Vec<&str> = v["timeline"]
        .as_array()
        .expect("timeline array")
        .iter()
        .filter_map(|e| e["kind"].as_str())
        .collect();
    assert_eq!(
        kinds,
        vec![
            "session-start",
            "break-taken",
            "required-break-30",
            "legal-maximum"
        ]
    );
}

#[test]
fn test_timeline_json_after_long_day() {
    let db_path = init_db("timeline_long");
    track_at(&db_path, "2025-07-01 07:00", &["start"]);

    let out = rwt()
        .args(["--db", &db_path, "--at", "2025-07-01 17:30", "timeline", "--json"])
        .output()
        .expect("run timeline");
    assert!(out.status.success());

    let v: serde_json::Value = serde_json::from_slice(&out.stdout).expect("valid json");
    let events = v.as_array().expect("array");
    assert_eq!(events.len(), 4);

    assert_eq!(events[2]["kind"], "required-break-45");
    assert_eq!(events[2]["severity"], "error");
    assert_eq!(events[2]["is_satisfied"], false);

    assert_eq!(events[3]["kind"], "legal-maximum");
    assert_eq!(events[3]["severity"], "error");
}

#[test]
fn test_status_last_reports_stopped_session() {
    let db_path = init_db("status_last");
    track_at(&db_path, "2025-07-01 08:00", &["start"]);
    track_at(&db_path, "2025-07-01 12:00", &["stop"]);

    rwt()
        .args(["--db", &db_path, "--at", "2025-07-03 09:00", "status"])
        .assert()
        .success()
        .stdout(contains("No active tracking"));

    rwt()
        .args(["--db", &db_path, "--at", "2025-07-03 09:00", "status", "--last"])
        .assert()
        .success()
        .stdout(contains("Session #1 (stopped)"))
        .stdout(contains("Worked         : 04h 00m"))
        .stdout(contains("compliant"));
}

#[test]
fn test_new_session_cannot_overlap_previous() {
    let db_path = init_db("overlap");
    track_at(&db_path, "2025-07-01 08:00", &["start"]);
    track_at(&db_path, "2025-07-01 12:00", &["stop"]);

    rwt()
        .args(["--db", &db_path, "--at", "2025-07-01 11:00", "start"])
        .assert()
        .failure()
        .stderr(contains("precedes the end of the previous session"));

    track_at(&db_path, "2025-07-01 13:00", &["start"]);
}

#[test]
fn test_resume_before_break_start_is_rejected() {
    let db_path = init_db("resume_before_pause");
    track_at(&db_path, "2025-07-01 08:00", &["start"]);
    track_at(&db_path, "2025-07-01 12:00", &["pause"]);

    rwt()
        .args(["--db", &db_path, "--at", "2025-07-01 11:50", "resume"])
        .assert()
        .failure()
        .stderr(contains("precedes the break start"));

    rwt()
        .args(["--db", &db_path, "--at", "2025-07-01 11:00", "stop"])
        .assert()
        .failure()
        .stderr(contains("precedes the break start"));
}

#[test]
fn test_pause_inside_closed_break_is_rejected() {
    let db_path = init_db("pause_inside_break");
    track_at(&db_path, "2025-07-01 08:00", &["start"]);
    track_at(&db_path, "2025-07-01 10:00", &["pause"]);
    track_at(&db_path, "2025-07-01 10:30", &["resume"]);

    rwt()
        .args(["--db", &db_path, "--at", "2025-07-01 10:10", "pause"])
        .assert()
        .failure()
        .stderr(contains("precedes the end of the previous break"));

    track_at(&db_path, "2025-07-01 10:40", &["pause"]);
    track_at(&db_path, "2025-07-01 10:50", &["resume"]);

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let (state, break_minutes): (String, i64) = conn
        .query_row(
            "SELECT state, break_minutes FROM work_sessions WHERE id = 1",
            [],
            |r| Ok((r.get(0)?, r.get(1)?)),
        )
        .expect("row");
    assert_eq!(state, "tracking");
    assert_eq!(break_minutes, 40);
}

#[test]
fn test_stop_before_closed_break_end_is_rejected() {
    let db_path = init_db("stop_inside_break");
    track_at(&db_path, "2025-07-01 08:00", &["start"]);
    track_at(&db_path, "2025-07-01 10:00", &["pause"]);
    track_at(&db_path, "2025-07-01 11:00", &["resume"]);

    rwt()
        .args(["--db", &db_path, "--at", "2025-07-01 10:05", "stop"])
        .assert()
        .failure()
        .stderr(contains("precedes the end of the previous break"));

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let (state, end_time): (String, Option<String>) = conn
        .query_row(
            "SELECT state, end_time FROM work_sessions WHERE id = 1",
            [],
            |r| Ok((r.get(0)?, r.get(1)?)),
        )
        .expect("row");
    assert_eq!(state, "tracking");
    assert!(end_time.is_none());

    track_at(&db_path, "2025-07-01 11:00", &["stop"]);
}

#[test]
fn test_init_with_relative_db_uses_working_directory() {
    let dir = std::env::temp_dir().join("rworktime_relative_db");
    std::fs::create_dir_all(&dir).expect("create dir");
    let db_file = dir.join("relative_rworktime.sqlite");
    std::fs::remove_file(&db_file).ok();

    rwt()
        .current_dir(&dir)
        .args(["--db", "relative_rworktime.sqlite", "--test", "init"])
        .assert()
        .success();
    assert!(db_file.exists());

    rwt()
        .current_dir(&dir)
        .args(["--db", "relative_rworktime.sqlite", "--at", "2025-07-01 08:00", "start"])
        .assert()
        .success();

    let conn = rusqlite::Connection::open(&db_file).expect("open db");
    let sessions: i64 = conn
        .query_row("SELECT COUNT(*) FROM work_sessions", [], |r| r.get(0))
        .expect("count");
    assert_eq!(sessions, 1);
}
