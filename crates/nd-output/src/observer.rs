//! `TimelineObserver<W>`: bridges `StepObserver` to an `OutputWriter`.

use nd_core::Step;
use nd_sim::{Metrics, StepObserver, StepRecord};

use crate::qoe::{QOE_EXCELLENT, qoe_curve};
use crate::row::{StepRow, SummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`StepObserver`] that records one policy's run and hands it to any
/// [`OutputWriter`] backend (CSV, SQLite, …).
///
/// Step rows are buffered because their QoE column depends on the handover
/// latency, which is only known once the run ends.  At
/// [`on_run_end`][StepObserver::on_run_end] the rows and a summary row are
/// written.  The writer is not finished, so one writer can serve several
/// runs through `&mut W`; call [`OutputWriter::finish`] when done.
///
/// Errors from the writer are stored internally because `StepObserver`
/// methods have no return value.  After `engine.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct TimelineObserver<W: OutputWriter> {
    writer:          W,
    policy:          String,
    session_size_mb: f64,
    switch_step:     Option<Step>,
    rows:            Vec<StepRow>,
    last_error:      Option<OutputError>,
}

impl<W: OutputWriter> TimelineObserver<W> {
    /// Create an observer for the run of `policy`.  `session_size_mb` feeds
    /// the derived power column of the summary.
    pub fn new(writer: W, policy: impl Into<String>, session_size_mb: f64) -> Self {
        Self {
            writer,
            policy: policy.into(),
            session_size_mb,
            switch_step: None,
            rows: Vec::new(),
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `engine.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> StepObserver for TimelineObserver<W> {
    fn on_step_end(&mut self, record: &StepRecord<'_>) {
        if record.is_user_switching && self.switch_step.is_none() {
            self.switch_step = Some(record.step);
        }
        self.rows.push(StepRow {
            policy:         self.policy.clone(),
            step:           record.step.0,
            context:        record.context.as_str(),
            active_device:  record.active_device.to_owned(),
            network_type:   record.network.network_type.as_str(),
            bandwidth_mbps: record.network.bandwidth_mbps,
            quality:        record.network.quality.as_str(),
            decision:       record.decision.as_str(),
            phase:          record.phase.as_str(),
            job_progress:   record.job_progress,
            step_power:     record.step_power,
            total_power:    record.total_power,
            qoe:            QOE_EXCELLENT,
        });
    }

    fn on_run_end(&mut self, final_step: Step, metrics: &Metrics) {
        if let Some(switch) = self.switch_step {
            let curve = qoe_curve(metrics.handover_latency_steps, switch, final_step.0);
            for row in &mut self.rows {
                if let Some(&q) = curve.get(row.step as usize) {
                    row.qoe = q;
                }
            }
        }

        let rows = std::mem::take(&mut self.rows);
        let result = self.writer.write_steps(&rows);
        self.store_err(result);

        let report = metrics.report(self.session_size_mb);
        let summary = SummaryRow {
            policy:                 self.policy.clone(),
            handover_latency_steps: report.handover_latency_steps,
            total_power_consumed:   report.total_power_consumed,
            proactive_data_mb:      report.proactive_data_mb,
            total_migration_time:   report.total_migration_time,
            power:                  report.power,
        };
        let result = self.writer.write_summary(&summary);
        self.store_err(result);
    }
}
