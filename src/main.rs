use analogs::{evaluate_batch, load_sample, registry, MetricParams};
use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

/// Score candidate samples against a target sample
#[derive(Parser, Debug)]
#[command(name = "analogs")]
#[command(about = "Distribution dissimilarity metrics for spatial analogues", long_about = None)]
struct Args {
    /// Metric name (see --list)
    #[arg(short, long, default_value = "szekely_rizzo")]
    method: String,

    /// Target sample (JSON)
    #[arg(short, long, required_unless_present = "list")]
    target: Option<PathBuf>,

    /// Candidate samples (JSON), one score per file
    #[arg(short, long, num_args = 1.., required_unless_present = "list")]
    candidates: Vec<PathBuf>,

    /// Metric parameters as JSON, e.g. '{"k": 3}'
    #[arg(long)]
    params: Option<String>,

    /// Neighbour rank for kldiv
    #[arg(long)]
    k: Option<usize>,

    /// Distance floor for zech_aslan and kldiv
    #[arg(long)]
    dmin: Option<f64>,

    /// Compare raw feature values in szekely_rizzo
    #[arg(long)]
    no_standardize: bool,

    /// Print the metric registry and exit
    #[arg(long)]
    list: bool,

    /// Log level
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[derive(Serialize)]
struct Score {
    candidates: PathBuf,
    score: f64,
}

#[derive(Serialize)]
struct Report<'a> {
    method: &'a str,
    params: MetricParams,
    scores: Vec<Score>,
}

fn metric_params(args: &Args) -> anyhow::Result<MetricParams> {
    let mut params: MetricParams = match &args.params {
        Some(json) => serde_json::from_str(json).context("invalid --params")?,
        None => MetricParams::default(),
    };
    if let Some(k) = args.k {
        params = params.with_k(k);
    }
    if let Some(dmin) = args.dmin {
        params = params.with_dmin(dmin);
    }
    if args.no_standardize {
        params = params.with_standardize(false);
    }
    Ok(params)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    if args.list {
        println!("{}", serde_json::to_string_pretty(registry())?);
        return Ok(());
    }

    let params = metric_params(&args)?;
    let target_path = args.target.as_ref().context("--target is required")?;
    let target = load_sample(target_path)
        .with_context(|| format!("loading target {}", target_path.display()))?;
    info!(
        "Target {:?}: {} observations, {} features",
        target_path,
        target.sample.len(),
        target.sample.dim()
    );

    let groups = args
        .candidates
        .iter()
        .map(|path| {
            let loaded = load_sample(path)
                .with_context(|| format!("loading candidates {}", path.display()))?;
            debug!("Candidates {:?}: {} observations", path, loaded.sample.len());
            Ok(loaded.sample)
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let scores = evaluate_batch(&args.method, &target.sample, &groups, &params)?;
    info!("Scored {} candidate samples with {}", scores.len(), args.method);

    let report = Report {
        method: &args.method,
        params,
        scores: args
            .candidates
            .iter()
            .cloned()
            .zip(scores)
            .map(|(candidates, score)| Score { candidates, score })
            .collect(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
