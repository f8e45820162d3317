//! Session lifecycle: idle → tracking → paused → tracking → … → stopped.
//!
//! This is the only place session state changes. The compliance calculator
//! reads the resulting rows and never writes them.

use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::location::Location;
use crate::models::session_state::SessionState;
use crate::models::work_session::WorkSession;
use chrono::{DateTime, Local};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingAction {
    Start,
    Pause,
    Resume,
    Stop,
}

impl TrackingAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackingAction::Start => "start",
            TrackingAction::Pause => "pause",
            TrackingAction::Resume => "resume",
            TrackingAction::Stop => "stop",
        }
    }
}

/// Pure transition table. `None` stands for "idle" (no open session).
pub fn next_state(current: Option<SessionState>, action: TrackingAction) -> AppResult<SessionState> {
    use SessionState::*;
    use TrackingAction::*;

    match (current, action) {
        (None | Some(Stopped), Start) => Ok(Tracking),
        (None | Some(Stopped), _) => Err(AppError::NoActiveSession),
        (Some(Tracking), Pause) => Ok(Paused),
        (Some(Paused), Resume) => Ok(Tracking),
        (Some(Tracking | Paused), Stop) => Ok(Stopped),
        (Some(from), action) => Err(AppError::InvalidTransition {
            from: from.to_string(),
            action: action.as_str().to_string(),
        }),
    }
}

fn ensure_not_before(at: &DateTime<Local>, floor: &DateTime<Local>, what: &str) -> AppResult<()> {
    if at < floor {
        return Err(AppError::InvalidTime(format!(
            "{} precedes {} ({})",
            at.format("%Y-%m-%d %H:%M"),
            what,
            floor.format("%Y-%m-%d %H:%M")
        )));
    }
    Ok(())
}

fn open_session_or_err(pool: &DbPool) -> AppResult<WorkSession> {
    queries::load_open_session(&pool.conn)?.ok_or(AppError::NoActiveSession)
}

/// Pauses never overlap: a new action may not fall inside the last closed break.
fn ensure_after_last_break(pool: &DbPool, session_id: i64, at: &DateTime<Local>) -> AppResult<()> {
    if let Some(last) = queries::load_last_closed_break(&pool.conn, session_id)?
        && let Some(end) = last.end_time
    {
        ensure_not_before(at, &end, "the end of the previous break")?;
    }
    Ok(())
}

fn reload(pool: &DbPool, id: i64) -> AppResult<WorkSession> {
    queries::load_session(&pool.conn, id)?
        .ok_or_else(|| AppError::Other(format!("session {} vanished after update", id)))
}

/// High-level business logic for the tracking commands.
pub struct TrackingLogic;

impl TrackingLogic {
    pub fn start(
        pool: &mut DbPool,
        at: DateTime<Local>,
        location: Option<Location>,
        project: Option<&str>,
    ) -> AppResult<WorkSession> {
        if let Some(open) = queries::load_open_session(&pool.conn)? {
            return Err(AppError::SessionAlreadyActive(open.id));
        }
        next_state(None, TrackingAction::Start)?;

        if let Some(last) = queries::load_latest_session(&pool.conn)?
            && let Some(end) = last.end_time
        {
            ensure_not_before(&at, &end, "the end of the previous session")?;
        }

        let id = pool.with_tx(|tx| {
            let id = queries::insert_session(tx, &at, location, project)?;
            ttlog(
                tx,
                "start",
                &format!("session {}", id),
                &format!("Tracking started at {}", at.format("%Y-%m-%d %H:%M")),
            )?;
            Ok(id)
        })?;

        reload(pool, id)
    }

    pub fn pause(pool: &mut DbPool, at: DateTime<Local>) -> AppResult<WorkSession> {
        let session = open_session_or_err(pool)?;
        let state = next_state(Some(session.state), TrackingAction::Pause)?;
        ensure_not_before(&at, &session.start_time, "the session start")?;
        ensure_after_last_break(pool, session.id, &at)?;

        pool.with_tx(|tx| {
            queries::insert_break(tx, session.id, &at)?;
            queries::update_session_state(tx, session.id, state)?;
            ttlog(
                tx,
                "pause",
                &format!("session {}", session.id),
                &format!("Break started at {}", at.format("%H:%M")),
            )
        })?;

        reload(pool, session.id)
    }

    /// Close the running break. Returns the session and the whole minutes the
    /// break contributed.
    pub fn resume(pool: &mut DbPool, at: DateTime<Local>) -> AppResult<(WorkSession, i64)> {
        let session = open_session_or_err(pool)?;
        let state = next_state(Some(session.state), TrackingAction::Resume)?;

        let open = session
            .open_break
            .clone()
            .ok_or_else(|| AppError::Other(format!("session {} is paused without a break", session.id)))?;
        ensure_not_before(&at, &open.start_time, "the break start")?;

        let minutes = open.minutes_until(at);

        pool.with_tx(|tx| {
            queries::close_break(tx, open.id, &at)?;
            queries::add_break_minutes(tx, session.id, minutes)?;
            queries::update_session_state(tx, session.id, state)?;
            ttlog(
                tx,
                "resume",
                &format!("session {}", session.id),
                &format!("Break ended at {} ({} min)", at.format("%H:%M"), minutes),
            )
        })?;

        Ok((reload(pool, session.id)?, minutes))
    }

    /// Stop the open session, closing a running break first.
    pub fn stop(pool: &mut DbPool, at: DateTime<Local>) -> AppResult<WorkSession> {
        let session = open_session_or_err(pool)?;
        next_state(Some(session.state), TrackingAction::Stop)?;
        ensure_not_before(&at, &session.start_time, "the session start")?;
        ensure_after_last_break(pool, session.id, &at)?;

        if let Some(open) = &session.open_break {
            ensure_not_before(&at, &open.start_time, "the break start")?;
        }

        pool.with_tx(|tx| {
            if let Some(open) = &session.open_break {
                let minutes = open.minutes_until(at);
                queries::close_break(tx, open.id, &at)?;
                queries::add_break_minutes(tx, session.id, minutes)?;
            }
            queries::close_session(tx, session.id, &at)?;
            ttlog(
                tx,
                "stop",
                &format!("session {}", session.id),
                &format!("Tracking stopped at {}", at.format("%Y-%m-%d %H:%M")),
            )
        })?;

        reload(pool, session.id)
    }

    /// Delete a session and its breaks. Returns false when no such session exists.
    pub fn delete(pool: &mut DbPool, id: i64) -> AppResult<bool> {
        pool.with_tx(|tx| {
            let removed = queries::delete_session(tx, id)? > 0;
            if removed {
                ttlog(tx, "del", &format!("session {}", id), "Session deleted")?;
            }
            Ok(removed)
        })
    }
}
