use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension};

/// A schema step, applied at most once and recorded in the `log` table.
struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20250301_0001_create_work_sessions",
        description: "Created work_sessions table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS work_sessions (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            start_time    TEXT NOT NULL,
            end_time      TEXT,
            break_minutes INTEGER NOT NULL DEFAULT 0 CHECK(break_minutes >= 0),
            location      TEXT CHECK(location IS NULL OR location IN ('O','R','C','M')),
            project       TEXT,
            state         TEXT NOT NULL DEFAULT 'tracking'
                          CHECK(state IN ('tracking','paused','stopped')),
            created_at    TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_sessions_start ON work_sessions(start_time);
        CREATE INDEX IF NOT EXISTS idx_sessions_state ON work_sessions(state);
        "#,
    },
    Migration {
        version: "20250301_0002_create_breaks",
        description: "Created breaks table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS breaks (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            session_id  INTEGER NOT NULL REFERENCES work_sessions(id) ON DELETE CASCADE,
            start_time  TEXT NOT NULL,
            end_time    TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_breaks_session ON breaks(session_id);
        "#,
    },
];

/// Ensure that the `log` table exists; migrations are tracked in it.
fn ensure_log_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> AppResult<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, m: &Migration) -> AppResult<()> {
    conn.execute_batch(m.sql)
        .map_err(|e| AppError::Migration(format!("{}: {}", m.version, e)))?;

    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [m.version, m.description],
    )?;

    success(format!("Migration applied: {}", m.version));
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;

    for m in MIGRATIONS {
        if !is_applied(conn, m.version)? {
            apply(conn, m)?;
        }
    }

    Ok(())
}
