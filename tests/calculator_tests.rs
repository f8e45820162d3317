use chrono::{DateTime, Local, TimeDelta, TimeZone};
use rworktime::core::calculator::rules;
use rworktime::core::calculator::{
    SessionTiming, build_timeline_events, compute_snapshot, timeline_at,
};
use rworktime::errors::AppError;
use rworktime::models::compliance::{ComplianceStatus, Severity, TimelineEventKind};

fn start() -> DateTime<Local> {
    Local
        .with_ymd_and_hms(2025, 7, 1, 8, 0, 0)
        .single()
        .expect("unambiguous local time")
}

fn after(minutes: i64) -> DateTime<Local> {
    start() + TimeDelta::minutes(minutes)
}

fn timing(break_minutes: i64, pause_seconds: i64) -> SessionTiming {
    SessionTiming::from_parts(Some(start()), None, break_minutes, pause_seconds)
        .expect("valid timing")
}

#[test]
fn test_worked_minutes_is_monotonic_in_now() {
    let t = timing(0, 0);
    let mut previous = -1;
    for minutes in [0, 1, 59, 60, 359, 360, 361, 540, 600, 720] {
        let snap = compute_snapshot(&t, after(minutes));
        assert!(snap.worked_minutes >= previous);
        previous = snap.worked_minutes;
    }

    // seconds never round up
    let snap = compute_snapshot(&t, start() + TimeDelta::seconds(119));
    assert_eq!(snap.worked_minutes, 1);
}

#[test]
fn test_required_break_thresholds() {
    let t = timing(0, 0);
    let cases = [(0, 0), (359, 0), (360, 30), (539, 30), (540, 45), (700, 45)];
    for (worked, required) in cases {
        let snap = compute_snapshot(&t, after(worked));
        assert_eq!(snap.worked_minutes, worked);
        assert_eq!(snap.required_break_minutes, required, "worked={worked}");
    }
}

#[test]
fn test_required_break_rule_directly() {
    assert_eq!(rules::required_break_minutes(359), 0);
    assert_eq!(rules::required_break_minutes(360), 30);
    assert_eq!(rules::required_break_minutes(539), 30);
    assert_eq!(rules::required_break_minutes(540), 45);
}

#[test]
fn test_future_start_clamps_to_zero() {
    let now = start();
    let t = SessionTiming::from_parts(Some(after(10)), None, 0, 0).expect("valid timing");
    let snap = compute_snapshot(&t, now);
    assert_eq!(snap.worked_minutes, 0);
    assert_eq!(snap.required_break_minutes, 0);
    assert!(snap.break_satisfied);
    assert_eq!(snap.minutes_until_legal_max, 600);
}

#[test]
fn test_running_pause_counts_in_whole_minutes() {
    let snap = compute_snapshot(&timing(25, 300), after(400));
    assert_eq!(snap.effective_break_minutes, 30);
    assert_eq!(snap.required_break_minutes, 30);
    assert!(snap.break_satisfied);

    // 4m59s of pause is still only 4 minutes
    let snap = compute_snapshot(&timing(25, 299), after(400));
    assert_eq!(snap.effective_break_minutes, 29);
    assert!(!snap.break_satisfied);
    assert_eq!(snap.missing_break_minutes(), 1);
}

#[test]
fn test_legal_max_never_negative() {
    let snap = compute_snapshot(&timing(45, 0), after(650));
    assert_eq!(snap.worked_minutes, 650);
    assert_eq!(snap.minutes_until_legal_max, 0);

    let snap = compute_snapshot(&timing(45, 0), after(590));
    assert_eq!(snap.minutes_until_legal_max, 10);
}

#[test]
fn test_six_hours_five_minutes_without_break() {
    let t = timing(0, 0);
    let now = after(6 * 60 + 5);
    let snap = compute_snapshot(&t, now);

    assert_eq!(snap.worked_minutes, 365);
    assert_eq!(snap.required_break_minutes, 30);
    assert!(!snap.break_satisfied);
    assert_eq!(snap.status(), ComplianceStatus::BreakRequired);

    let events = build_timeline_events(&t, &snap);
    let ev = events
        .iter()
        .find(|e| e.kind == TimelineEventKind::RequiredBreak30)
        .expect("required-break-30 event");
    assert_eq!(ev.severity, Severity::Warning);
    assert!(!ev.is_satisfied);
    assert_eq!(ev.event_time, after(360));
}

#[test]
fn test_snapshot_is_idempotent() {
    let t = timing(10, 42);
    let now = after(555);
    assert_eq!(compute_snapshot(&t, now), compute_snapshot(&t, now));
    assert_eq!(timeline_at(&t, now), timeline_at(&t, now));
}

#[test]
fn test_completed_session_measures_to_end_time() {
    let t = SessionTiming::from_parts(Some(start()), Some(after(480)), 30, 0)
        .expect("valid timing");
    // now far past the end does not matter
    let snap = compute_snapshot(&t, after(2000));
    assert_eq!(snap.worked_minutes, 480);
    assert!(snap.break_satisfied);
}

#[test]
fn test_break_time_is_not_subtracted_from_worked() {
    let snap = compute_snapshot(&timing(60, 0), after(300));
    assert_eq!(snap.worked_minutes, 300);
}

#[test]
fn test_invalid_inputs_fail_fast() {
    let missing = SessionTiming::from_parts(None, None, 0, 0);
    assert!(matches!(missing, Err(AppError::InvalidInput(_))));

    let negative_break = SessionTiming::from_parts(Some(start()), None, -1, 0);
    assert!(matches!(negative_break, Err(AppError::InvalidInput(_))));

    let negative_pause = SessionTiming::from_parts(Some(start()), None, 0, -5);
    assert!(matches!(negative_pause, Err(AppError::InvalidInput(_))));
}

#[test]
fn test_status_classification() {
    assert_eq!(
        compute_snapshot(&timing(0, 0), after(120)).status(),
        ComplianceStatus::Compliant
    );
    assert_eq!(
        compute_snapshot(&timing(30, 0), after(545)).status(),
        ComplianceStatus::BreakRequired
    );
    // ceiling outranks a satisfied break
    assert_eq!(
        compute_snapshot(&timing(45, 0), after(600)).status(),
        ComplianceStatus::LegalMaximumReached
    );
}

#[test]
fn test_timeline_before_any_threshold() {
    let events: Vec<_> = timeline_at(&timing(0, 0), after(90)).iter().collect();
    let kinds: Vec<_> = events.iter().map(|e| e.kind).collect();

    assert_eq!(
        kinds,
        vec![
            TimelineEventKind::SessionStart,
            TimelineEventKind::RequiredBreak30,
            TimelineEventKind::LegalMaximum,
        ]
    );
    assert_eq!(events[0].event_time, start());
    assert_eq!(events[0].severity, Severity::Info);
    assert_eq!(events[1].severity, Severity::Info);
    assert_eq!(events[2].severity, Severity::Warning);
    assert!(events[2].is_satisfied);
}

#[test]
fn test_timeline_long_day_with_short_break() {
    let t = timing(30, 0);
    let events: Vec<_> = timeline_at(&t, after(610)).iter().collect();
    let kinds: Vec<_> = events.iter().map(|e| e.kind).collect();

    assert_eq!(
        kinds,
        vec![
            TimelineEventKind::SessionStart,
            TimelineEventKind::BreakTaken,
            TimelineEventKind::RequiredBreak30,
            TimelineEventKind::RequiredBreak45,
            TimelineEventKind::LegalMaximum,
        ]
    );

    // sorted ascending by time
    assert!(events.windows(2).all(|w| w[0].event_time <= w[1].event_time));

    assert_eq!(events[1].event_time, after(240));
    assert_eq!(events[1].severity, Severity::Info);

    assert_eq!(events[2].severity, Severity::Info);
    assert!(events[2].is_satisfied);

    assert_eq!(events[3].severity, Severity::Error);
    assert!(!events[3].is_satisfied);

    assert_eq!(events[4].severity, Severity::Error);
    assert!(!events[4].is_satisfied);
}

#[test]
fn test_required_break_45_satisfied_is_info() {
    let events = timeline_at(&timing(45, 0), after(560));
    let ev = events
        .iter()
        .find(|e| e.kind == TimelineEventKind::RequiredBreak45)
        .expect("required-break-45 event");
    assert_eq!(ev.severity, Severity::Info);
    assert!(ev.is_satisfied);
    assert_eq!(events.worst_severity(), Severity::Warning);
}

#[test]
fn test_required_break_45_absent_below_threshold() {
    let events = timeline_at(&timing(0, 0), after(539));
    assert!(
        events
            .iter()
            .all(|e| e.kind != TimelineEventKind::RequiredBreak45)
    );
}

#[test]
fn test_break_marker_counts_running_pause() {
    let events = timeline_at(&timing(0, 60), after(200));
    assert!(
        events
            .iter()
            .any(|e| e.kind == TimelineEventKind::BreakTaken)
    );

    // under a minute of pause is not a break yet
    let events = timeline_at(&timing(0, 59), after(200));
    assert!(
        events
            .iter()
            .all(|e| e.kind != TimelineEventKind::BreakTaken)
    );
}

#[test]
fn test_timeline_is_restartable() {
    let events = timeline_at(&timing(30, 0), after(400));
    let first: Vec<_> = events.iter().collect();
    let second: Vec<_> = (&events).into_iter().collect();
    assert_eq!(first, second);

    let mut it = events.iter();
    assert!(it.size_hint().1.is_some_and(|n| n <= 5));
    let _ = it.by_ref().count();
    assert!(it.next().is_none());
}

#[test]
fn test_timeline_near_the_end_of_time_skips_unrepresentable_markers() {
    let late = (DateTime::<chrono::Utc>::MAX_UTC - TimeDelta::minutes(30)).with_timezone(&Local);
    let t = SessionTiming::from_parts(Some(late), None, 0, 0).expect("valid timing");

    let events: Vec<_> = timeline_at(&t, late).iter().collect();

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].kind, TimelineEventKind::SessionStart);
    assert_eq!(events[0].event_time, late);
}
