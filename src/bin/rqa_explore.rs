use clap::{Parser, Subcommand, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use serde::Serialize;
use serde_json::json;
use std::path::PathBuf;
use tracing::info;

use recurplot::{
    run_pipeline, run_pipeline_with, PipelineOutput, PipelineParams, RecurplotConfig, RqaMetrics,
    SignalKind,
};

#[derive(Parser, Debug)]
#[command(version, about = "Recurrence plots and RQA for synthetic signals", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// TOML config supplying defaults for every parameter
    #[arg(short, long, default_value = "recurplot.toml", global = true)]
    config: PathBuf,

    /// Seed for a repeatable run (unseeded by default)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Samples to generate
    #[arg(long, global = true)]
    length: Option<usize>,

    /// Oscillation frequency, cycles per sample
    #[arg(long, global = true)]
    frequency: Option<f64>,

    /// Additive uniform noise amplitude
    #[arg(long, global = true)]
    noise: Option<f64>,

    /// Embedding dimension m
    #[arg(short = 'm', long, global = true)]
    dimension: Option<usize>,

    /// Embedding lag τ
    #[arg(short = 't', long, global = true)]
    tau: Option<usize>,

    /// Recurrence threshold, fraction of the maximum distance
    #[arg(short = 'e', long, global = true)]
    threshold: Option<f64>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze one signal model
    Run {
        #[arg(long, value_enum)]
        signal: Option<Kind>,

        /// Include the generated samples in the output
        #[arg(long)]
        with_signal: bool,

        /// Include the recurrence matrix rows in the output
        #[arg(long)]
        with_matrix: bool,
    },
    /// Analyze every signal model in parallel
    Survey,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Kind {
    Sine,
    Noise,
    Lorenz,
    Drift,
    Intermittent,
    Quasiperiodic,
    FmriHealthy,
    FmriMci,
}

impl From<Kind> for SignalKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Sine => SignalKind::Sine,
            Kind::Noise => SignalKind::Noise,
            Kind::Lorenz => SignalKind::Lorenz,
            Kind::Drift => SignalKind::Drift,
            Kind::Intermittent => SignalKind::Intermittent,
            Kind::Quasiperiodic => SignalKind::Quasiperiodic,
            Kind::FmriHealthy => SignalKind::FmriHealthy,
            Kind::FmriMci => SignalKind::FmriMci,
        }
    }
}

#[derive(Serialize)]
struct Report {
    signal: SignalKind,
    states: usize,
    max_dist: f64,
    eps: f64,
    metrics: RqaMetrics,
}

impl Report {
    fn new(kind: SignalKind, out: &PipelineOutput) -> Self {
        Self {
            signal: kind,
            states: out.analysis.len(),
            max_dist: out.analysis.distances.max_dist(),
            eps: out.analysis.recurrence.eps(),
            metrics: out.analysis.metrics,
        }
    }
}

fn execute(params: &PipelineParams, seed: Option<u64>) -> PipelineOutput {
    match seed {
        Some(seed) => run_pipeline_with(params, &mut StdRng::seed_from_u64(seed)),
        None => run_pipeline(params),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays clean JSON
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let config = RecurplotConfig::load(&cli.config)?;
    let mut params = config.pipeline_params();

    if let Some(length) = cli.length {
        params.signal.length = length;
    }
    if let Some(frequency) = cli.frequency {
        params.signal.frequency = frequency;
    }
    if let Some(noise) = cli.noise {
        params.signal.noise_level = noise;
    }
    if let Some(m) = cli.dimension {
        params.embedding.dimension = m;
    }
    if let Some(tau) = cli.tau {
        params.embedding.time_lag = tau;
    }
    if let Some(threshold) = cli.threshold {
        params.embedding.threshold = threshold;
    }

    match cli.command.unwrap_or(Commands::Survey) {
        Commands::Run {
            signal,
            with_signal,
            with_matrix,
        } => {
            if let Some(kind) = signal {
                params.signal.kind = kind.into();
            }
            let params = params.sanitized();
            info!(
                signal = %params.signal.kind,
                length = params.signal.length,
                m = params.embedding.dimension,
                tau = params.embedding.time_lag,
                threshold = params.embedding.threshold,
                "running pipeline"
            );

            let out = execute(&params, cli.seed);
            let mut value = serde_json::to_value(Report::new(params.signal.kind, &out))?;
            if with_signal {
                value["samples"] = json!(out.signal);
            }
            if with_matrix {
                value["recurrence"] = json!(out.analysis.recurrence.to_rows());
            }
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        Commands::Survey => {
            info!(models = SignalKind::all().len(), "surveying signal models");

            let reports: Vec<Report> = SignalKind::all()
                .par_iter()
                .enumerate()
                .map(|(i, &kind)| {
                    let mut p = params.clone();
                    p.signal.kind = kind;
                    let seed = cli.seed.map(|s| s.wrapping_add(i as u64));
                    let out = execute(&p.sanitized(), seed);
                    Report::new(kind, &out)
                })
                .collect();

            println!("{}", serde_json::to_string_pretty(&reports)?);
        }
    }

    Ok(())
}
