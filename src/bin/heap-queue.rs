use std::{
    fs::File,
    io::{self, Read},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use heap_queue::{BuildStrategy, Comparator, NaturalOrder, PriorityQueue, QueueConfig, Reversed};
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::EnvFilter;

const DEFAULT_LEVEL: &str = "warn";

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    Text,
    Json,
}

/// Sorts integers by pushing them through a priority queue.
#[derive(Parser)]
struct Args {
    /// Values to sort; read whitespace separated from stdin if empty.
    #[clap(allow_negative_numbers = true)]
    values: Vec<i64>,

    /// Dequeue the largest value first.
    #[clap(long)]
    max: bool,

    /// YAML queue configuration.
    #[clap(long)]
    config: Option<PathBuf>,

    /// Overrides the build strategy of the configuration.
    #[clap(long, value_enum)]
    build: Option<BuildStrategy>,

    #[clap(long, value_enum, default_value = "text")]
    format: Format,

    /// The log level to be set.
    #[clap(long, default_value = DEFAULT_LEVEL, env = "RUST_LOG")]
    log_level: String,
}

fn read_values(mut input: impl Read) -> Result<Vec<i64>> {
    let mut text = String::new();
    input.read_to_string(&mut text)?;
    text.split_whitespace()
        .map(|word| {
            word.parse()
                .with_context(|| format!("invalid integer {word:?}"))
        })
        .collect()
}

fn render<C>(queue: &PriorityQueue<i64, C>, format: Format) -> Result<String>
where
    C: Comparator<i64> + Clone,
{
    Ok(match format {
        Format::Text => queue.to_string(),
        Format::Json => serde_json::to_string(queue)?,
    })
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::ERROR.into())
                .parse_lossy(&args.log_level),
        )
        .with_writer(io::stderr)
        .init();

    let mut config = match &args.config {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open config {}", path.display()))?;
            QueueConfig::from_reader(file)?
        }
        None => QueueConfig::default(),
    };
    if let Some(build) = args.build {
        config.build = build;
    }

    let values = if args.values.is_empty() {
        read_values(io::stdin().lock())?
    } else {
        args.values
    };
    info!("sorting {} values", values.len());

    let output = if args.max {
        let queue = PriorityQueue::from_config(&config, values, Reversed(NaturalOrder));
        render(&queue, args.format)?
    } else {
        let queue = PriorityQueue::from_config(&config, values, NaturalOrder);
        render(&queue, args.format)?
    };
    println!("{output}");

    Ok(())
}
