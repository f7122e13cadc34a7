//! nomad: the nomadic-user handover scenario for the nomad_dt twin.
//!
//! A user works on a laptop at the office over Wi-Fi, walks out onto 5G,
//! then picks up their phone.  The same scenario is run once per policy
//! (Reactive, Myopic, Predictive) and the handover cost of each is compared.
//!
//! Usage: `nomad [scenario.json]`.  Any field missing from the JSON file
//! takes its default.  Set `RUST_LOG=debug` to see per-step transfers.

use std::collections::BTreeMap;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nd_core::ScenarioConfig;
use nd_output::{CsvWriter, OutputWriter, TimelineObserver};
#[cfg(feature = "sqlite")]
use nd_output::{OutputResult, SqliteWriter, StepRow, SummaryRow};
use nd_policy::Policy;
use nd_sim::{Comparison, MetricsReport, default_policies, run_policy};

// ── Constants ─────────────────────────────────────────────────────────────────

const OUTPUT_DIR: &str = "output/nomad";

// ── Writer fan-out ────────────────────────────────────────────────────────────

/// Sends every row to two backends.
#[cfg(feature = "sqlite")]
struct Fanout<A: OutputWriter, B: OutputWriter> {
    first:  A,
    second: B,
}

#[cfg(feature = "sqlite")]
impl<A: OutputWriter, B: OutputWriter> OutputWriter for Fanout<A, B> {
    fn write_steps(&mut self, rows: &[StepRow]) -> OutputResult<()> {
        self.first.write_steps(rows)?;
        self.second.write_steps(rows)
    }

    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()> {
        self.first.write_summary(row)?;
        self.second.write_summary(row)
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.first.finish()?;
        self.second.finish()
    }
}

#[cfg(feature = "sqlite")]
fn open_writer(dir: &Path) -> Result<impl OutputWriter> {
    Ok(Fanout {
        first:  CsvWriter::new(dir)?,
        second: SqliteWriter::new(dir)?,
    })
}

#[cfg(not(feature = "sqlite"))]
fn open_writer(dir: &Path) -> Result<impl OutputWriter> {
    Ok(CsvWriter::new(dir)?)
}

// ── Config ────────────────────────────────────────────────────────────────────

fn load_config(path: Option<PathBuf>) -> Result<ScenarioConfig> {
    let config = match path {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("opening scenario file {}", path.display()))?;
            serde_json::from_reader(file)
                .with_context(|| format!("parsing scenario file {}", path.display()))?
        }
        None => ScenarioConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 1. Scenario.
    let config = load_config(std::env::args_os().nth(1).map(PathBuf::from))?;
    println!("=== nomad: session handover twin ===");
    println!(
        "Steps: {}  |  Session: {} MB  |  Wi-Fi {} MB/s → 5G {} MB/s at {}  |  Switch at {}",
        config.steps,
        config.session_size_mb,
        config.wifi_bandwidth_mbps,
        config.fiveg_bandwidth_mbps,
        config.context_change_step,
        config.switch_step,
    );
    println!();

    // 2. Output.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let mut writer = open_writer(Path::new(OUTPUT_DIR))?;

    // 3. One fresh run per policy.
    let policies = default_policies();
    let mut results = Comparison::new();
    let t0 = Instant::now();
    for policy in &policies {
        let name = policy.name().to_owned();
        let mut obs = TimelineObserver::new(&mut writer, name.as_str(), config.session_size_mb);
        let report = run_policy(&config, policy.clone(), &mut obs)?;
        if let Some(e) = obs.take_error() {
            eprintln!("output error ({name}): {e}");
        }
        info!(policy = %name, power = report.power, "policy evaluated");
        results.insert(name, report);
    }
    writer.finish()?;
    let elapsed = t0.elapsed();

    // 4. Machine-readable summary.
    let summary_path = Path::new(OUTPUT_DIR).join("summary.json");
    serde_json::to_writer_pretty(File::create(&summary_path)?, &results)?;

    // 5. Comparison table, in run order.
    println!("Runs complete in {:.3} s", elapsed.as_secs_f64());
    println!();
    print_table(&policies, &results);
    println!();
    println!("Wrote {OUTPUT_DIR}/step_timeline.csv, summary.csv, summary.json");

    Ok(())
}

fn print_table(policies: &[std::sync::Arc<dyn Policy>], results: &BTreeMap<String, MetricsReport>) {
    println!(
        "{:<12} {:>9} {:>12} {:>10} {:>14} {:>14}",
        "Policy", "Latency", "Total power", "Mig. time", "Proactive MB", "Power (γ/T)"
    );
    println!("{}", "-".repeat(76));
    for policy in policies {
        let Some(r) = results.get(policy.name()) else {
            continue;
        };
        println!(
            "{:<12} {:>9} {:>12.2} {:>10} {:>14.1} {:>14.3}",
            policy.name(),
            r.handover_latency_steps,
            r.total_power_consumed,
            r.total_migration_time,
            r.proactive_data_mb,
            r.power,
        );
    }
}
