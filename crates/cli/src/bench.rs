//! Repeated-trial timing harness for both solvers.
//!
//! Each trial draws a fresh cloud, then times generation, gift wrap and Graham
//! scan on it. Hull sizes are edge counts. A trial where the two solvers report
//! different vertex counts is logged and counted, never fatal.

use anyhow::{Context, Result};
use hull2::cloud::{generate, CloudCfg};
use hull2::{Algorithm, HullCfg, HullSolver};
use polars::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::fs::File;
use std::path::Path;
use std::time::Instant;

use crate::stats::{summarize, Summary};

#[derive(Clone, Copy, Debug)]
pub struct BenchParams {
    pub trials: usize,
    pub cloud: CloudCfg,
    pub seed: u64,
    pub hull: HullCfg,
}

/// One trial's measurements (times in milliseconds).
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TrialRow {
    pub trial: usize,
    pub seed: u64,
    pub gen_ms: f64,
    pub gift_wrap_ms: f64,
    pub graham_ms: f64,
    pub gift_wrap_edges: usize,
    pub graham_edges: usize,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct SolverSummary {
    pub time_ms: Summary,
    pub hull_size: Summary,
}

#[derive(Clone, Debug, Serialize)]
pub struct BenchReport {
    pub trials: usize,
    pub points: usize,
    pub distribution: String,
    pub seed: u64,
    pub generation_ms: Summary,
    pub gift_wrap: SolverSummary,
    pub graham: SolverSummary,
    pub disagreements: usize,
    #[serde(skip)]
    pub rows: Vec<TrialRow>,
}

#[inline]
fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1e3
}

pub fn run(params: &BenchParams) -> Result<BenchReport> {
    let mut master = StdRng::seed_from_u64(params.seed);
    let gift_wrap = Algorithm::GiftWrap.solver(params.hull);
    let step = (params.trials / 10).max(1);
    let mut rows = Vec::with_capacity(params.trials);
    let mut disagreements = 0usize;

    for trial in 0..params.trials {
        if trial % step == 0 {
            tracing::info!(
                trial,
                done_pct = trial * 100 / params.trials.max(1),
                "bench_progress"
            );
        }
        // Top bit cleared: the CSV seed column must read back as i64.
        let seed: u64 = master.gen::<u64>() >> 1;

        let t = Instant::now();
        let points = generate(&params.cloud, seed)
            .with_context(|| format!("generating cloud for trial {trial}"))?;
        let gen_ms = elapsed_ms(t);

        let t = Instant::now();
        let gw = gift_wrap.solve(&points);
        let gift_wrap_ms = elapsed_ms(t);

        let graham = Algorithm::GrahamScan.seeded_solver(params.hull, &mut master);
        let t = Instant::now();
        let gs = graham.solve(&points);
        let graham_ms = elapsed_ms(t);

        if gw.vertex_count() != gs.vertex_count() {
            disagreements += 1;
            tracing::warn!(
                trial,
                seed,
                gift_wrap = gw.vertex_count(),
                graham = gs.vertex_count(),
                "hull_size_mismatch"
            );
        }
        rows.push(TrialRow {
            trial,
            seed,
            gen_ms,
            gift_wrap_ms,
            graham_ms,
            gift_wrap_edges: gw.len(),
            graham_edges: gs.len(),
        });
    }

    let column = |f: fn(&TrialRow) -> f64| rows.iter().map(f).collect::<Vec<f64>>();
    let report = BenchReport {
        trials: params.trials,
        points: params.cloud.count,
        distribution: params.cloud.distribution.to_string(),
        seed: params.seed,
        generation_ms: summarize(&column(|r| r.gen_ms)),
        gift_wrap: SolverSummary {
            time_ms: summarize(&column(|r| r.gift_wrap_ms)),
            hull_size: summarize(&column(|r| r.gift_wrap_edges as f64)),
        },
        graham: SolverSummary {
            time_ms: summarize(&column(|r| r.graham_ms)),
            hull_size: summarize(&column(|r| r.graham_edges as f64)),
        },
        disagreements,
        rows,
    };
    Ok(report)
}

/// Per-trial rows as a DataFrame.
pub fn to_frame(rows: &[TrialRow]) -> PolarsResult<DataFrame> {
    df!(
        "trial" => rows.iter().map(|r| r.trial as u64).collect::<Vec<u64>>(),
        "seed" => rows.iter().map(|r| r.seed as i64).collect::<Vec<i64>>(),
        "gen_ms" => rows.iter().map(|r| r.gen_ms).collect::<Vec<f64>>(),
        "gift_wrap_ms" => rows.iter().map(|r| r.gift_wrap_ms).collect::<Vec<f64>>(),
        "graham_ms" => rows.iter().map(|r| r.graham_ms).collect::<Vec<f64>>(),
        "gift_wrap_edges" => rows.iter().map(|r| r.gift_wrap_edges as u64).collect::<Vec<u64>>(),
        "graham_edges" => rows.iter().map(|r| r.graham_edges as u64).collect::<Vec<u64>>()
    )
}

/// Write the per-trial rows as CSV (with header), creating parent directories.
pub fn write_csv<P: AsRef<Path>>(path: P, rows: &[TrialRow]) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let mut df = to_frame(rows)?;
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hull2::cloud::Distribution;
    use tempfile::tempdir;

    fn params(distribution: Distribution) -> BenchParams {
        BenchParams {
            trials: 5,
            cloud: CloudCfg {
                count: 200,
                distribution,
                ..CloudCfg::default()
            },
            seed: 9,
            hull: HullCfg::default(),
        }
    }

    #[test]
    fn report_covers_every_trial() {
        let report = run(&params(Distribution::Uniform)).unwrap();
        assert_eq!(report.rows.len(), 5);
        assert_eq!(report.gift_wrap.time_ms.n, 5);
        assert_eq!(report.disagreements, 0);
        for row in &report.rows {
            assert_eq!(row.gift_wrap_edges, row.graham_edges);
            assert!(row.gift_wrap_edges >= 3);
        }
    }

    #[test]
    fn same_seed_same_hull_sizes() {
        let a = run(&params(Distribution::Normal)).unwrap();
        let b = run(&params(Distribution::Normal)).unwrap();
        let sizes = |r: &BenchReport| r.rows.iter().map(|t| t.graham_edges).collect::<Vec<_>>();
        assert_eq!(sizes(&a), sizes(&b));
    }

    #[test]
    fn csv_round_trips_through_polars() {
        let report = run(&params(Distribution::Circle)).unwrap();
        let dir = tempdir().unwrap();
        let path = dir.path().join("out/trials.csv");
        write_csv(&path, &report.rows).unwrap();
        let df = LazyCsvReader::new(&path)
            .with_infer_schema_length(Some(100))
            .finish()
            .unwrap()
            .collect()
            .unwrap();
        assert_eq!(df.shape(), (5, 7));
        let seeds: Vec<Option<i64>> = df
            .column("seed")
            .unwrap()
            .i64()
            .unwrap()
            .into_iter()
            .collect();
        let expected: Vec<Option<i64>> =
            report.rows.iter().map(|r| Some(r.seed as i64)).collect();
        assert_eq!(seeds, expected);
    }

    #[test]
    fn trial_seeds_fit_signed_columns() {
        let mut p = params(Distribution::Uniform);
        p.trials = 64;
        p.cloud.count = 16;
        let report = run(&p).unwrap();
        assert!(report.rows.iter().all(|r| i64::try_from(r.seed).is_ok()));
    }

    #[test]
    fn zero_trials_is_empty_report() {
        let mut p = params(Distribution::Uniform);
        p.trials = 0;
        let report = run(&p).unwrap();
        assert!(report.rows.is_empty());
        assert!(report.gift_wrap.time_ms.mean.is_nan());
    }
}
