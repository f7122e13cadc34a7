//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! two tables: `step_timeline` and `summary`.

use std::path::Path;

use rusqlite::Connection;

use crate::{OutputResult, StepRow, SummaryRow};
use crate::writer::OutputWriter;

/// Writes run output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS step_timeline (
                 policy         TEXT    NOT NULL,
                 step           INTEGER NOT NULL,
                 context        TEXT    NOT NULL,
                 active_device  TEXT    NOT NULL,
                 network_type   TEXT    NOT NULL,
                 bandwidth_mbps REAL    NOT NULL,
                 quality        TEXT    NOT NULL,
                 decision       TEXT    NOT NULL,
                 phase          TEXT    NOT NULL,
                 job_progress   REAL,
                 step_power     REAL    NOT NULL,
                 total_power    REAL    NOT NULL,
                 qoe            REAL    NOT NULL,
                 PRIMARY KEY (policy, step)
             );
             CREATE TABLE IF NOT EXISTS summary (
                 policy                 TEXT PRIMARY KEY,
                 handover_latency_steps INTEGER NOT NULL,
                 total_power_consumed   REAL    NOT NULL,
                 proactive_data_mb      REAL    NOT NULL,
                 total_migration_time   INTEGER NOT NULL,
                 power                  REAL    NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_steps(&mut self, rows: &[StepRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO step_timeline \
                 (policy, step, context, active_device, network_type, bandwidth_mbps, quality, \
                  decision, phase, job_progress, step_power, total_power, qoe) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.policy,
                    row.step as i64,
                    row.context,
                    row.active_device,
                    row.network_type,
                    row.bandwidth_mbps,
                    row.quality,
                    row.decision,
                    row.phase,
                    row.job_progress,
                    row.step_power,
                    row.total_power,
                    row.qoe,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO summary \
             (policy, handover_latency_steps, total_power_consumed, proactive_data_mb, \
              total_migration_time, power) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            rusqlite::params![
                row.policy,
                row.handover_latency_steps as i64,
                row.total_power_consumed,
                row.proactive_data_mb,
                row.total_migration_time as i64,
                row.power,
            ],
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
