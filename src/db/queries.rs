use crate::errors::{AppError, AppResult};
use crate::models::break_interval::BreakInterval;
use crate::models::location::Location;
use crate::models::session_state::SessionState;
use crate::models::work_session::WorkSession;
use chrono::{DateTime, Local, NaiveDate};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const SESSION_COLUMNS: &str =
    "id, start_time, end_time, break_minutes, location, project, state, created_at";

fn conversion_error(idx: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(err))
}

fn parse_ts(idx: usize, raw: &str) -> Result<DateTime<Local>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Local))
        .map_err(|_| conversion_error(idx, AppError::InvalidTime(raw.to_string())))
}

pub fn to_db_ts(ts: &DateTime<Local>) -> String {
    ts.to_rfc3339()
}

pub fn map_session_row(row: &Row) -> Result<WorkSession> {
    let start_raw: String = row.get("start_time")?;
    let start_time = parse_ts(1, &start_raw)?;

    let end_time = match row.get::<_, Option<String>>("end_time")? {
        Some(raw) => Some(parse_ts(2, &raw)?),
        None => None,
    };

    let location = match row.get::<_, Option<String>>("location")? {
        Some(code) => Some(
            Location::from_db_str(&code)
                .ok_or_else(|| conversion_error(4, AppError::InvalidLocation(code.clone())))?,
        ),
        None => None,
    };

    let state_raw: String = row.get("state")?;
    let state = SessionState::from_db_str(&state_raw).ok_or_else(|| {
        conversion_error(
            6,
            AppError::InvalidInput(format!("Invalid session state: {}", state_raw)),
        )
    })?;

    Ok(WorkSession {
        id: row.get("id")?,
        start_time,
        end_time,
        accumulated_break_minutes: row.get("break_minutes")?,
        location,
        project: row
            .get::<_, Option<String>>("project")?
            .filter(|p| !p.is_empty()),
        state,
        open_break: None,
        created_at: row.get("created_at")?,
    })
}

fn map_break_row(row: &Row) -> Result<BreakInterval> {
    let start_raw: String = row.get("start_time")?;
    let end_time = match row.get::<_, Option<String>>("end_time")? {
        Some(raw) => Some(parse_ts(3, &raw)?),
        None => None,
    };

    Ok(BreakInterval {
        id: row.get("id")?,
        session_id: row.get("session_id")?,
        start_time: parse_ts(2, &start_raw)?,
        end_time,
    })
}

/// Attach the running pause (if any) to a freshly loaded session.
fn with_open_break(conn: &Connection, mut session: WorkSession) -> AppResult<WorkSession> {
    if session.state == SessionState::Paused {
        session.open_break = load_open_break(conn, session.id)?;
    }
    Ok(session)
}

fn collect_sessions(
    conn: &Connection,
    sql: &str,
    args: impl rusqlite::Params,
) -> AppResult<Vec<WorkSession>> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map(args, map_session_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(with_open_break(conn, r?)?);
    }
    Ok(out)
}

// ---------------------------
// Sessions
// ---------------------------

pub fn insert_session(
    conn: &Connection,
    start_time: &DateTime<Local>,
    location: Option<Location>,
    project: Option<&str>,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO work_sessions (start_time, break_minutes, location, project, state, created_at)
         VALUES (?1, 0, ?2, ?3, ?4, ?5)",
        params![
            to_db_ts(start_time),
            location.map(|l| l.to_db_str()),
            project,
            SessionState::Tracking.to_db_str(),
            Local::now().to_rfc3339(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_session(conn: &Connection, id: i64) -> AppResult<Option<WorkSession>> {
    let sql = format!("SELECT {SESSION_COLUMNS} FROM work_sessions WHERE id = ?1");
    let session = conn.query_row(&sql, [id], map_session_row).optional()?;

    match session {
        Some(s) => Ok(Some(with_open_break(conn, s)?)),
        None => Ok(None),
    }
}

/// The session currently tracking or paused, if any.
pub fn load_open_session(conn: &Connection) -> AppResult<Option<WorkSession>> {
    let sql = format!(
        "SELECT {SESSION_COLUMNS} FROM work_sessions
         WHERE state != 'stopped'
         ORDER BY start_time DESC, id DESC
         LIMIT 1"
    );
    Ok(collect_sessions(conn, &sql, [])?.into_iter().next())
}

/// The most recently started session, whatever its state.
pub fn load_latest_session(conn: &Connection) -> AppResult<Option<WorkSession>> {
    let sql = format!(
        "SELECT {SESSION_COLUMNS} FROM work_sessions
         ORDER BY start_time DESC, id DESC
         LIMIT 1"
    );
    Ok(collect_sessions(conn, &sql, [])?.into_iter().next())
}

pub fn load_all_sessions(conn: &Connection) -> AppResult<Vec<WorkSession>> {
    let sql = format!(
        "SELECT {SESSION_COLUMNS} FROM work_sessions
         ORDER BY start_time ASC, id ASC"
    );
    collect_sessions(conn, &sql, [])
}

/// Sessions whose start date lies in `[from, to]`, both inclusive.
pub fn load_sessions_in_range(
    conn: &Connection,
    from: &NaiveDate,
    to: &NaiveDate,
) -> AppResult<Vec<WorkSession>> {
    let sql = format!(
        "SELECT {SESSION_COLUMNS} FROM work_sessions
         WHERE substr(start_time, 1, 10) BETWEEN ?1 AND ?2
         ORDER BY start_time ASC, id ASC"
    );
    collect_sessions(
        conn,
        &sql,
        [
            from.format("%Y-%m-%d").to_string(),
            to.format("%Y-%m-%d").to_string(),
        ],
    )
}

pub fn update_session_state(conn: &Connection, id: i64, state: SessionState) -> AppResult<()> {
    conn.execute(
        "UPDATE work_sessions SET state = ?1 WHERE id = ?2",
        params![state.to_db_str(), id],
    )?;
    Ok(())
}

pub fn add_break_minutes(conn: &Connection, id: i64, minutes: i64) -> AppResult<()> {
    conn.execute(
        "UPDATE work_sessions SET break_minutes = break_minutes + ?1 WHERE id = ?2",
        params![minutes, id],
    )?;
    Ok(())
}

pub fn close_session(conn: &Connection, id: i64, end_time: &DateTime<Local>) -> AppResult<()> {
    conn.execute(
        "UPDATE work_sessions SET end_time = ?1, state = ?2 WHERE id = ?3",
        params![
            to_db_ts(end_time),
            SessionState::Stopped.to_db_str(),
            id
        ],
    )?;
    Ok(())
}

// ---------------------------
// Breaks
// ---------------------------

pub fn insert_break(
    conn: &Connection,
    session_id: i64,
    start_time: &DateTime<Local>,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO breaks (session_id, start_time) VALUES (?1, ?2)",
        params![session_id, to_db_ts(start_time)],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_open_break(conn: &Connection, session_id: i64) -> AppResult<Option<BreakInterval>> {
    let found = conn
        .query_row(
            "SELECT id, session_id, start_time, end_time FROM breaks
             WHERE session_id = ?1 AND end_time IS NULL
             ORDER BY id DESC
             LIMIT 1",
            [session_id],
            map_break_row,
        )
        .optional()?;
    Ok(found)
}

/// The most recently closed break of a session.
pub fn load_last_closed_break(
    conn: &Connection,
    session_id: i64,
) -> AppResult<Option<BreakInterval>> {
    let found = conn
        .query_row(
            "SELECT id, session_id, start_time, end_time FROM breaks
             WHERE session_id = ?1 AND end_time IS NOT NULL
             ORDER BY id DESC
             LIMIT 1",
            [session_id],
            map_break_row,
        )
        .optional()?;
    Ok(found)
}

pub fn close_break(conn: &Connection, break_id: i64, end_time: &DateTime<Local>) -> AppResult<()> {
    conn.execute(
        "UPDATE breaks SET end_time = ?1 WHERE id = ?2",
        params![to_db_ts(end_time), break_id],
    )?;
    Ok(())
}

/// Remove a session; its breaks go with it through `ON DELETE CASCADE`.
pub fn delete_session(conn: &Connection, id: i64) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM work_sessions WHERE id = ?1", [id])?)
}
