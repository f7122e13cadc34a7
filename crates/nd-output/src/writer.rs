//! The `OutputWriter` trait implemented by all backend writers.

use crate::{OutputResult, StepRow, SummaryRow};

/// Trait implemented by the CSV and SQLite writers.
///
/// All methods are infallible from the observer's perspective; errors are
/// stored internally and retrieved with
/// [`TimelineObserver::take_error`][crate::TimelineObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of per-step rows.
    fn write_steps(&mut self, rows: &[StepRow]) -> OutputResult<()>;

    /// Write one policy's summary row.
    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent, safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

/// Lets several observers, one per policy, share a single writer in turn.
impl<W: OutputWriter + ?Sized> OutputWriter for &mut W {
    fn write_steps(&mut self, rows: &[StepRow]) -> OutputResult<()> {
        (**self).write_steps(rows)
    }

    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()> {
        (**self).write_summary(row)
    }

    fn finish(&mut self) -> OutputResult<()> {
        (**self).finish()
    }
}
