//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `step_timeline.csv`
//! - `summary.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::{OutputResult, StepRow, SummaryRow};
use crate::writer::OutputWriter;

pub const STEP_HEADERS: [&str; 13] = [
    "policy", "step", "context", "active_device", "network_type", "bandwidth_mbps", "quality",
    "decision", "phase", "job_progress", "step_power", "total_power", "qoe",
];

pub const SUMMARY_HEADERS: [&str; 6] = [
    "policy", "handover_latency_steps", "total_power_consumed", "proactive_data_mb",
    "total_migration_time", "power",
];

/// Writes run output to two CSV files.
pub struct CsvWriter {
    steps:     Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut steps = Writer::from_path(dir.join("step_timeline.csv"))?;
        steps.write_record(STEP_HEADERS)?;

        let mut summaries = Writer::from_path(dir.join("summary.csv"))?;
        summaries.write_record(SUMMARY_HEADERS)?;

        Ok(Self { steps, summaries, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_steps(&mut self, rows: &[StepRow]) -> OutputResult<()> {
        for row in rows {
            self.steps.write_record(&[
                row.policy.clone(),
                row.step.to_string(),
                row.context.to_owned(),
                row.active_device.clone(),
                row.network_type.to_owned(),
                row.bandwidth_mbps.to_string(),
                row.quality.to_owned(),
                row.decision.to_owned(),
                row.phase.to_owned(),
                row.job_progress.map(|p| p.to_string()).unwrap_or_default(),
                row.step_power.to_string(),
                row.total_power.to_string(),
                row.qoe.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.policy.clone(),
            row.handover_latency_steps.to_string(),
            row.total_power_consumed.to_string(),
            row.proactive_data_mb.to_string(),
            row.total_migration_time.to_string(),
            row.power.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.steps.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
