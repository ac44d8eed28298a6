//! Parallel Driver: fan heights out across a fixed worker pool, fan the
//! per-height tallies back in.
//!
//! Each height is processed exactly once, entirely inside one worker, so the
//! only shared state is the work distribution itself. Completed reports are
//! handed to the injected `report` callback in completion order; the core
//! never prints or writes files.

use std::time::Instant;

use rayon::prelude::*;

use crate::diagnostics::DiagnosticPolicy;
use crate::height;
use crate::{Degree, HeightReport, RunConfig, RunError, RunSummary, Tally};

/// Process heights `1..=config.max_height` on a pool of exactly
/// `config.num_workers` threads and merge the tallies into run totals.
/// A worker count of 0 is treated as 1 (rayon would otherwise substitute
/// its own default pool size).
///
/// Blocks until every height is done. A fatal [`RunError`] from any height
/// aborts the run; there are no cancellation or timeout semantics otherwise.
pub fn run_heights<F>(
    config: &RunConfig,
    degree: Degree,
    policy: &DiagnosticPolicy,
    report: F,
) -> Result<RunSummary, RunError>
where
    F: Fn(&HeightReport) + Sync,
{
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.num_workers.max(1))
        .build()?;

    let start = Instant::now();
    log::info!(
        "degree {} run: heights 1..={}, {} workers, int_only={} no_small={} invert_q={}",
        degree.as_u32(),
        config.max_height,
        config.num_workers,
        config.int_only,
        config.no_small,
        config.invert_q
    );

    let totals = pool.install(|| {
        (1..=config.max_height)
            .into_par_iter()
            .map(|h| -> Result<Tally, RunError> {
                let tally = height::process_height(h, degree, config, policy)?;
                report(&HeightReport::new(&tally, config.int_only));
                Ok(tally.counts)
            })
            .try_reduce(Tally::default, |mut acc, counts| {
                acc.merge(&counts);
                Ok(acc)
            })
    })?;

    let bad_percent = if totals.count == 0 {
        0.0
    } else {
        100.0 * totals.bad as f64 / totals.count as f64
    };

    Ok(RunSummary {
        degree: degree.as_u32(),
        config: *config,
        heights_processed: config.max_height,
        totals,
        bad_percent,
        wall_seconds: start.elapsed().as_secs_f64(),
    })
}
