//! Integration tests for nd-output.

use crate::row::{StepRow, SummaryRow};

fn step_row(policy: &str, step: u64) -> StepRow {
    StepRow {
        policy:         policy.to_owned(),
        step,
        context:        "At Office",
        active_device:  "Laptop".to_owned(),
        network_type:   "Wi-Fi",
        bandwidth_mbps: 50.0,
        quality:        "High",
        decision:       "NO_OP",
        phase:          "idle",
        job_progress:   None,
        step_power:     0.25,
        total_power:    0.25 * (step + 1) as f64,
        qoe:            5.0,
    }
}

fn summary_row(policy: &str) -> SummaryRow {
    SummaryRow {
        policy:                 policy.to_owned(),
        handover_latency_steps: 32,
        total_power_consumed:   44.2,
        proactive_data_mb:      0.0,
        total_migration_time:   33,
        power:                  0.25,
    }
}

// ── QoE curve ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod qoe_tests {
    use nd_core::Step;

    use crate::qoe::{QOE_EXCELLENT, QOE_POOR, qoe_curve};

    #[test]
    fn slow_handover_dips() {
        let curve = qoe_curve(32, Step(60), 100);
        assert_eq!(curve.len(), 100);
        assert_eq!(curve[59], QOE_EXCELLENT);
        assert!(curve[60..92].iter().all(|&q| q == QOE_POOR));
        assert_eq!(curve[92], QOE_EXCELLENT);
    }

    #[test]
    fn fast_handover_is_flat() {
        assert!(qoe_curve(1, Step(60), 100).iter().all(|&q| q == QOE_EXCELLENT));
        assert!(qoe_curve(0, Step(60), 100).iter().all(|&q| q == QOE_EXCELLENT));
    }

    #[test]
    fn dip_clipped_at_run_end() {
        let curve = qoe_curve(32, Step(90), 100);
        assert_eq!(curve[89], QOE_EXCELLENT);
        assert!(curve[90..].iter().all(|&q| q == QOE_POOR));
    }
}

// ── CSV ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use super::{step_row, summary_row};
    use crate::csv::{CsvWriter, STEP_HEADERS, SUMMARY_HEADERS};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("step_timeline.csv").exists());
        assert!(dir.path().join("summary.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("step_timeline.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, STEP_HEADERS);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("summary.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, SUMMARY_HEADERS);
    }

    #[test]
    fn csv_step_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let mut rows = vec![step_row("Reactive", 0), step_row("Reactive", 1)];
        rows[1].job_progress = Some(0.5);
        w.write_steps(&rows).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("step_timeline.csv")).unwrap();
        let read: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read.len(), 2);
        assert_eq!(&read[0][0], "Reactive");
        assert_eq!(&read[1][1], "1");     // step
        assert_eq!(&read[0][4], "Wi-Fi");
        assert_eq!(&read[0][9], "");      // idle: no progress
        assert_eq!(&read[1][9], "0.5");
    }

    #[test]
    fn csv_summary_row() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_summary(&summary_row("Myopic")).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("summary.csv")).unwrap();
        let read: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read.len(), 1);
        assert_eq!(&read[0][0], "Myopic");
        assert_eq!(&read[0][1], "32");
        assert_eq!(&read[0][4], "33");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_empty_batch_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_steps(&[]).unwrap();
    }
}

// ── Observer driven by a real engine ──────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use nd_core::ScenarioConfig;
    use nd_policy::{Policy, PredictivePolicy, ReactivePolicy};
    use nd_sim::{default_policies, run_policy};
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::observer::TimelineObserver;
    use crate::writer::OutputWriter;
    use crate::{OutputResult, StepRow, SummaryRow};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    /// In-memory writer for inspecting what the observer produced.
    #[derive(Default)]
    struct Collect {
        steps:     Vec<StepRow>,
        summaries: Vec<SummaryRow>,
    }

    impl OutputWriter for Collect {
        fn write_steps(&mut self, rows: &[StepRow]) -> OutputResult<()> {
            self.steps.extend_from_slice(rows);
            Ok(())
        }

        fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()> {
            self.summaries.push(row.clone());
            Ok(())
        }

        fn finish(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    /// Writer that fails every call.
    struct Broken;

    impl OutputWriter for Broken {
        fn write_steps(&mut self, _rows: &[StepRow]) -> OutputResult<()> {
            Err(std::io::Error::other("disk full").into())
        }

        fn write_summary(&mut self, _row: &SummaryRow) -> OutputResult<()> {
            Err(std::io::Error::other("still full").into())
        }

        fn finish(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    #[test]
    fn reactive_timeline_and_qoe() {
        let config = ScenarioConfig::default();
        let mut out = Collect::default();
        let mut obs = TimelineObserver::new(&mut out, "Reactive", config.session_size_mb);
        let report = run_policy(&config, ReactivePolicy, &mut obs).unwrap();
        assert!(obs.take_error().is_none());

        assert_eq!(out.steps.len(), 100);
        assert_eq!(out.steps[30].network_type, "5G");
        assert_eq!(out.steps[30].context, "Walking");
        assert_eq!(out.steps[60].active_device, "Phone");
        assert_eq!(out.steps[60].decision, "EXECUTE_MIGRATION");
        assert_eq!(out.steps[60].phase, "executing");
        assert_eq!(out.steps[60].job_progress, Some(0.0));
        assert_eq!(out.steps[59].qoe, 5.0);
        assert_eq!(out.steps[60].qoe, 1.5);
        assert_eq!(out.steps[91].qoe, 1.5);
        assert_eq!(out.steps[92].qoe, 5.0);

        assert_eq!(out.summaries.len(), 1);
        assert_eq!(out.summaries[0].policy, "Reactive");
        assert_eq!(out.summaries[0].handover_latency_steps, report.handover_latency_steps);
        assert_eq!(out.summaries[0].power, report.power);
    }

    #[test]
    fn predictive_qoe_stays_flat() {
        let config = ScenarioConfig::default();
        let mut out = Collect::default();
        let mut obs = TimelineObserver::new(&mut out, "Predictive", config.session_size_mb);
        run_policy(&config, PredictivePolicy::default(), &mut obs).unwrap();
        assert!(out.steps.iter().all(|r| r.qoe == 5.0));
        assert_eq!(out.steps[30].decision, "PREPARE_MIGRATION");
        assert_eq!(out.summaries[0].proactive_data_mb, 100.0);
    }

    #[test]
    fn first_write_error_is_kept() {
        let config = ScenarioConfig::default();
        let mut obs = TimelineObserver::new(Broken, "Reactive", config.session_size_mb);
        run_policy(&config, ReactivePolicy, &mut obs).unwrap();
        let err = obs.take_error().unwrap();
        assert!(err.to_string().contains("disk full"));
        assert!(obs.take_error().is_none());
    }

    #[test]
    fn shared_csv_writer_across_policies() {
        let dir = tmp();
        let config = ScenarioConfig::default();
        let mut writer = CsvWriter::new(dir.path()).unwrap();
        for policy in default_policies() {
            let mut obs = TimelineObserver::new(&mut writer, policy.name(), config.session_size_mb);
            run_policy(&config, policy, &mut obs).unwrap();
            assert!(obs.take_error().is_none());
        }
        writer.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("step_timeline.csv")).unwrap();
        assert_eq!(rdr.records().count(), 300);

        let mut rdr = csv::Reader::from_path(dir.path().join("summary.csv")).unwrap();
        let policies: Vec<String> = rdr.records().map(|r| r.unwrap()[0].to_owned()).collect();
        assert_eq!(policies, vec!["Reactive", "Myopic", "Predictive"]);
    }
}

// ── SQLite ────────────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use tempfile::TempDir;

    use super::{step_row, summary_row};
    use crate::sqlite::SqliteWriter;
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn sqlite_db_created() {
        let dir = tmp();
        let _w = SqliteWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("output.db").exists());
    }

    #[test]
    fn sqlite_step_count() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        let rows: Vec<_> = (0..3).map(|s| step_row("Reactive", s)).collect();
        w.write_steps(&rows).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM step_timeline", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 3);
    }

    #[test]
    fn sqlite_progress_null_when_idle() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        let mut busy = step_row("Reactive", 1);
        busy.job_progress = Some(0.25);
        w.write_steps(&[step_row("Reactive", 0), busy]).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let idle: Option<f64> = conn
            .query_row("SELECT job_progress FROM step_timeline WHERE step = 0", [], |r| r.get(0))
            .unwrap();
        let live: Option<f64> = conn
            .query_row("SELECT job_progress FROM step_timeline WHERE step = 1", [], |r| r.get(0))
            .unwrap();
        assert_eq!(idle, None);
        assert_eq!(live, Some(0.25));
    }

    #[test]
    fn sqlite_summary() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_summary(&summary_row("Predictive")).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let (latency, time): (i64, i64) = conn
            .query_row(
                "SELECT handover_latency_steps, total_migration_time FROM summary \
                 WHERE policy = 'Predictive'",
                [],
                |r| Ok((r.get(0)?, r.get(1)?)),
            )
            .unwrap();
        assert_eq!(latency, 32);
        assert_eq!(time, 33);
    }

    #[test]
    fn sqlite_duplicate_summary_rejected() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_summary(&summary_row("Reactive")).unwrap();
        assert!(w.write_summary(&summary_row("Reactive")).is_err());
    }
}
