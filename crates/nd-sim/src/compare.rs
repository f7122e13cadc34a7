//! Side-by-side runs of several policies over the same scenario.
//!
//! Every run gets a fresh user, engine and counter set, so runs are
//! independent.  With the `parallel` feature they execute on Rayon's thread
//! pool; results are identical to the sequential path.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use nd_core::ScenarioConfig;
use nd_policy::{MyopicPolicy, Policy, PredictivePolicy, ReactivePolicy};

use crate::{EngineBuilder, MetricsReport, NoopObserver, SimError, SimResult, StepObserver};

/// Policy name → report, ordered by name.
pub type Comparison = BTreeMap<String, MetricsReport>;

/// Reactive, Myopic and Predictive, in that order.
pub fn default_policies() -> Vec<Arc<dyn Policy>> {
    vec![
        Arc::new(ReactivePolicy),
        Arc::new(MyopicPolicy),
        Arc::new(PredictivePolicy::default()),
    ]
}

/// Run one policy over `config` with the default user and timeline.
pub fn run_policy<P: Policy, O: StepObserver>(
    config:   &ScenarioConfig,
    policy:   P,
    observer: &mut O,
) -> SimResult<MetricsReport> {
    let mut engine = EngineBuilder::new(config.clone(), policy).build()?;
    let metrics = engine.run(observer)?;
    Ok(metrics.report(config.session_size_mb))
}

/// Run every policy over `config` and collect the reports by name.
///
/// # Errors
///
/// [`SimError::DuplicatePolicy`] if two policies share a name; otherwise the
/// first engine error encountered.
pub fn compare(config: &ScenarioConfig, policies: &[Arc<dyn Policy>]) -> SimResult<Comparison> {
    let mut seen = BTreeSet::new();
    for policy in policies {
        if !seen.insert(policy.name()) {
            return Err(SimError::DuplicatePolicy(policy.name().to_owned()));
        }
    }

    #[cfg(not(feature = "parallel"))]
    let runs: Vec<(String, MetricsReport)> = policies
        .iter()
        .map(|p| Ok((p.name().to_owned(), run_policy(config, Arc::clone(p), &mut NoopObserver)?)))
        .collect::<SimResult<_>>()?;

    #[cfg(feature = "parallel")]
    let runs: Vec<(String, MetricsReport)> = {
        use rayon::prelude::*;

        policies
            .par_iter()
            .map(|p| Ok((p.name().to_owned(), run_policy(config, Arc::clone(p), &mut NoopObserver)?)))
            .collect::<SimResult<_>>()?
    };

    Ok(runs.into_iter().collect())
}
