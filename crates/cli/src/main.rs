use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use hull2::cloud::{generate, Bounds, CloudCfg, Distribution};
use hull2::{Algorithm, HullCfg, EPS};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::fmt::SubscriberBuilder;

mod bench;
mod export;
mod provenance;
mod stats;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Convex hull runner and timing harness")]
struct Cmd {
    /// Optional free-form tag; propagated to outputs and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Args, Clone, Debug)]
struct CloudArgs {
    /// Points per cloud
    #[arg(long, default_value_t = 5_000)]
    points: usize,
    /// uniform | normal | circle | circle-fixed
    #[arg(long, default_value = "circle")]
    dist: Distribution,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long, default_value_t = 0.0)]
    min_x: f64,
    #[arg(long, default_value_t = 1000.0)]
    max_x: f64,
    #[arg(long, default_value_t = 0.0)]
    min_y: f64,
    #[arg(long, default_value_t = 1000.0)]
    max_y: f64,
    /// Predicate tolerance
    #[arg(long, default_value_t = EPS)]
    eps: f64,
}

impl CloudArgs {
    fn cloud_cfg(&self) -> CloudCfg {
        CloudCfg {
            count: self.points,
            distribution: self.dist,
            bounds: Bounds {
                min_x: self.min_x,
                max_x: self.max_x,
                min_y: self.min_y,
                max_y: self.max_y,
            },
        }
    }

    fn hull_cfg(&self) -> HullCfg {
        HullCfg { eps: self.eps }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Generate one cloud, build its hull, optionally export an SVG
    Hull {
        /// gift-wrap | graham
        #[arg(long, default_value = "graham")]
        algo: Algorithm,
        #[command(flatten)]
        cloud: CloudArgs,
        #[arg(long)]
        svg: Option<PathBuf>,
    },
    /// Time both solvers over repeated independent trials
    Bench {
        #[arg(long, default_value_t = 1_000)]
        trials: usize,
        #[command(flatten)]
        cloud: CloudArgs,
        /// Write per-trial rows as CSV (plus a provenance sidecar)
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Hull { algo, cloud, svg } => hull(algo, cloud, svg, cmd.tag),
        Action::Bench { trials, cloud, csv } => bench(trials, cloud, csv, cmd.tag),
        Action::Report => report(cmd.tag),
    }
}

fn hull(
    algo: Algorithm,
    args: CloudArgs,
    svg: Option<PathBuf>,
    tag: Option<String>,
) -> Result<()> {
    let cfg = args.cloud_cfg();
    tracing::info!(
        %algo,
        points = cfg.count,
        dist = %cfg.distribution,
        seed = args.seed,
        tag = ?tag,
        "hull"
    );
    let points = generate(&cfg, args.seed)?;
    let solver = algo.solver(args.hull_cfg());
    let start = Instant::now();
    let hull = solver.solve(&points);
    let elapsed_ms = start.elapsed().as_secs_f64() * 1e3;
    tracing::info!(edges = hull.len(), elapsed_ms, "hull_done");

    if let Some(path) = &svg {
        export::write_svg(path, &points, &hull, &cfg.bounds)?;
        let meta = serde_json::json!({
            "algo": algo.as_str(),
            "points": cfg.count,
            "dist": cfg.distribution.as_str(),
            "seed": args.seed,
            "eps": args.eps,
        });
        provenance::write_sidecar(path, provenance::Payload::new(meta).with_tag(tag.clone()))?;
        tracing::info!(path = %path.display(), "svg_written");
    }

    let summary = serde_json::json!({
        "algo": solver.name(),
        "points": points.len(),
        "dist": cfg.distribution.as_str(),
        "seed": args.seed,
        "edges": hull.len(),
        "vertices": hull.vertex_count(),
        "elapsed_ms": elapsed_ms,
        "svg": svg.as_ref().map(|p| p.to_string_lossy().into_owned()),
        "tag": tag,
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn bench(
    trials: usize,
    args: CloudArgs,
    csv: Option<PathBuf>,
    tag: Option<String>,
) -> Result<()> {
    let params = bench::BenchParams {
        trials,
        cloud: args.cloud_cfg(),
        seed: args.seed,
        hull: args.hull_cfg(),
    };
    tracing::info!(
        trials,
        points = params.cloud.count,
        dist = %params.cloud.distribution,
        seed = params.seed,
        tag = ?tag,
        "bench"
    );
    let report = bench::run(&params)?;
    if report.disagreements > 0 {
        tracing::warn!(disagreements = report.disagreements, "solvers_disagreed");
    }

    if let Some(path) = &csv {
        bench::write_csv(path, &report.rows)?;
        let meta = serde_json::json!({
            "trials": trials,
            "points": params.cloud.count,
            "dist": params.cloud.distribution.as_str(),
            "seed": params.seed,
            "eps": params.hull.eps,
        });
        provenance::write_sidecar(path, provenance::Payload::new(meta).with_tag(tag))?;
        tracing::info!(path = %path.display(), rows = report.rows.len(), "csv_written");
    }

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = provenance::describe(tag.as_deref());
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hull_command() {
        let cmd = Cmd::try_parse_from([
            "cli",
            "--tag",
            "t1",
            "hull",
            "--algo",
            "gift-wrap",
            "--points",
            "50",
            "--dist",
            "circle-fixed",
        ])
        .unwrap();
        assert_eq!(cmd.tag.as_deref(), Some("t1"));
        match cmd.action {
            Action::Hull { algo, cloud, svg } => {
                assert_eq!(algo, Algorithm::GiftWrap);
                assert_eq!(cloud.points, 50);
                assert_eq!(cloud.dist, Distribution::CircleFixed);
                assert_eq!(cloud.eps, EPS);
                assert!(svg.is_none());
            }
            _ => panic!("expected hull"),
        }
    }

    #[test]
    fn bench_defaults_mirror_reference_run() {
        let cmd = Cmd::try_parse_from(["cli", "bench"]).unwrap();
        match cmd.action {
            Action::Bench { trials, cloud, csv } => {
                assert_eq!(trials, 1_000);
                assert_eq!(cloud.points, 5_000);
                assert_eq!(cloud.dist, Distribution::Circle);
                assert_eq!(cloud.cloud_cfg().bounds, Bounds::default());
                assert!(csv.is_none());
            }
            _ => panic!("expected bench"),
        }
    }

    #[test]
    fn rejects_unknown_algorithm() {
        assert!(Cmd::try_parse_from(["cli", "hull", "--algo", "quickhull"]).is_err());
        assert!(Cmd::try_parse_from(["cli", "hull", "--dist", "gaussian"]).is_err());
    }
}
