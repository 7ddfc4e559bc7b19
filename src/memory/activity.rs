use std::path::Path;
use std::sync::{Arc, Mutex};

use rusqlite::Connection;

/// Durable activity/event log backed by SQLite. The engine is the sole
/// writer; the connection sits behind a mutex so the log handle can be
/// shared between the engine and the driver.
#[derive(Clone)]
pub struct ActivityLog {
    conn: Arc<Mutex<Connection>>,
}

/// One row of the per-app usage summary.
#[derive(Debug, Clone, PartialEq)]
pub struct AppUsage {
    pub app_name: String,
    pub total_duration: f64,
}

impl ActivityLog {
    pub fn open(path: &Path) -> rusqlite::Result<Self> {
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        Self::init(Connection::open(path)?)
    }

    pub fn open_in_memory() -> rusqlite::Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> rusqlite::Result<Self> {
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS event_logs (
                 id INTEGER PRIMARY KEY AUTOINCREMENT,
                 timestamp TEXT,
                 event_type TEXT,
                 details TEXT
             );
             CREATE TABLE IF NOT EXISTS activity_logs (
                 id INTEGER PRIMARY KEY AUTOINCREMENT,
                 timestamp TEXT,
                 app_name TEXT,
                 window_title TEXT,
                 duration REAL
             );",
        )?;
        Ok(Self { conn: Arc::new(Mutex::new(conn)) })
    }

    pub fn log_event(&self, event_type: &str, details: &str) -> rusqlite::Result<()> {
        let conn = self.conn.lock().unwrap_or_else(|e| e.into_inner());
        conn.execute(
            "INSERT INTO event_logs (timestamp, event_type, details) VALUES (?1, ?2, ?3)",
            (chrono::Local::now().to_rfc3339(), event_type, details),
        )?;
        Ok(())
    }

    pub fn log_activity(&self, app: &str, title: &str, duration: f64) -> rusqlite::Result<()> {
        let conn = self.conn.lock().unwrap_or_else(|e| e.into_inner());
        conn.execute(
            "INSERT INTO activity_logs (timestamp, app_name, window_title, duration)
             VALUES (?1, ?2, ?3, ?4)",
            (chrono::Local::now().to_rfc3339(), app, title, duration),
        )?;
        Ok(())
    }

    /// Per-app usage totals, heaviest first.
    pub fn activity_summary(&self) -> rusqlite::Result<Vec<AppUsage>> {
        let conn = self.conn.lock().unwrap_or_else(|e| e.into_inner());
        let mut stmt = conn.prepare(
            "SELECT app_name, SUM(duration) AS total
             FROM activity_logs GROUP BY app_name ORDER BY total DESC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(AppUsage { app_name: row.get(0)?, total_duration: row.get(1)? })
        })?;
        rows.collect()
    }
}
