use std::fs::{self, OpenOptions};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use u_shard::request::{MatrixRequest, PlanOptions};

#[derive(Parser)]
#[command(
    name = "u-shard",
    about = "Plan balanced CI job batches from weighted work items",
    version
)]
struct Cli {
    /// Path to the JSON request, or `-` to read stdin
    #[arg(short, long, default_value = "-")]
    input: String,

    /// Capacity of one batch
    #[arg(long, default_value_t = 50)]
    max_weight_per_batch: u64,

    /// Isolate items at least this heavy in their own batch (0 disables)
    #[arg(long, default_value_t = 0)]
    heavy_threshold: u64,

    /// Minimum jobs per project
    #[arg(long, default_value_t = 1)]
    min_jobs: usize,

    /// Maximum jobs per project (at most 100)
    #[arg(long, default_value_t = 10)]
    max_jobs: usize,

    /// Items per job for projects that only give a count
    #[arg(long, default_value_t = 50)]
    items_per_job: u64,

    /// Weight of items given without one
    #[arg(long, default_value_t = 1)]
    default_weight: u64,

    /// Pretty-print the matrix
    #[arg(long)]
    pretty: bool,

    /// Append `matrix=<json>` to this file (e.g. $GITHUB_OUTPUT)
    #[arg(long)]
    github_output: Option<PathBuf>,
}

impl Cli {
    fn options(&self) -> PlanOptions {
        PlanOptions {
            max_weight_per_batch: self.max_weight_per_batch,
            heavy_threshold: self.heavy_threshold,
            min_jobs: self.min_jobs,
            max_jobs: self.max_jobs,
            items_per_job: self.items_per_job,
            default_weight: self.default_weight,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("u_shard=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    let raw = read_input(&cli.input)?;
    let request: MatrixRequest =
        serde_json::from_str(&raw).context("failed to parse request JSON")?;
    let matrix = request.plan(&cli.options())?;
    tracing::info!(
        projects = request.projects.len(),
        jobs = matrix.len(),
        "matrix planned"
    );

    if let Some(path) = &cli.github_output {
        let compact = serde_json::to_string(&matrix)?;
        append_output(path, &compact)?;
    }

    let json = if cli.pretty {
        serde_json::to_string_pretty(&matrix)?
    } else {
        serde_json::to_string(&matrix)?
    };
    println!("{json}");
    Ok(())
}

fn read_input(input: &str) -> anyhow::Result<String> {
    if input == "-" {
        let mut raw = String::new();
        io::stdin()
            .read_to_string(&mut raw)
            .context("failed to read request from stdin")?;
        Ok(raw)
    } else {
        fs::read_to_string(input).with_context(|| format!("failed to read {input}"))
    }
}

fn append_output(path: &Path, matrix_json: &str) -> anyhow::Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    writeln!(file, "matrix={matrix_json}")
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
