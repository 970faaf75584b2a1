//! Train command - Self-play training of a Q-table

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    adapters::CsvRepository,
    cli::output::{format_number, format_rate, print_kv, print_section},
    pipeline::{LoggingObserver, ProgressObserver, TrainingConfig, TrainingPipeline},
    ports::QTableRepository,
    q_learning::{QTable, RewardScheme},
};

#[derive(Parser, Debug)]
#[command(about = "Train a Q-table by self-play", allow_negative_numbers = true)]
pub struct TrainArgs {
    /// Number of self-play games
    #[arg(long, short = 'g', default_value_t = 10_000)]
    pub games: usize,

    /// CSV file to write the trained table to
    #[arg(long, short = 'o', default_value = "q_table.csv")]
    pub output: PathBuf,

    /// Continue training from an existing table
    #[arg(long)]
    pub resume: Option<PathBuf>,

    /// Log progress every N games (used with --no-progress)
    #[arg(long, default_value_t = 100)]
    pub log_interval: usize,

    /// Reward credited for an X win
    #[arg(long, default_value_t = 1.0)]
    pub x_win: f64,

    /// Reward credited for an O win
    #[arg(long, default_value_t = -1.0)]
    pub o_win: f64,

    /// Reward credited for a tie
    #[arg(long, default_value_t = 0.0)]
    pub tie: f64,

    /// Write a JSON training summary to this file
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// Disable the progress bar and log through tracing instead
    #[arg(long)]
    pub no_progress: bool,
}

pub fn execute(args: TrainArgs) -> Result<()> {
    let rewards =
        RewardScheme::new(args.x_win, args.o_win, args.tie).context("Invalid reward values")?;
    let repo = CsvRepository::new();

    let mut table = match &args.resume {
        Some(path) => repo
            .load(path, rewards)
            .with_context(|| format!("Failed to load Q-table from {}", path.display()))?,
        None => QTable::with_rewards(rewards),
    };

    let config = TrainingConfig::default()
        .with_num_games(args.games)
        .with_log_interval(args.log_interval);

    let mut pipeline = TrainingPipeline::new(config);
    pipeline = if args.no_progress {
        let observer = LoggingObserver::from_config(pipeline.config());
        pipeline.with_observer(Box::new(observer))
    } else {
        pipeline.with_observer(Box::new(ProgressObserver::new()))
    };

    let result = pipeline.run(&mut table).context("Training failed")?;

    repo.save(&table, &args.output)
        .with_context(|| format!("Failed to save Q-table to {}", args.output.display()))?;

    print_section("Training Results");
    print_kv("Games", &format_number(result.total_games));
    print_kv(
        "X wins",
        &format!("{} ({})", result.x_wins, format_rate(result.x_wins, result.total_games)),
    );
    print_kv(
        "O wins",
        &format!("{} ({})", result.o_wins, format_rate(result.o_wins, result.total_games)),
    );
    print_kv(
        "Ties",
        &format!("{} ({})", result.ties, format_rate(result.ties, result.total_games)),
    );
    print_kv("States", &format_number(result.table_size));
    print_kv("Saved to", &args.output.display().to_string());

    if let Some(path) = &args.summary {
        result
            .save(path)
            .with_context(|| format!("Failed to write summary to {}", path.display()))?;
        print_kv("Summary", &path.display().to_string());
    }

    Ok(())
}
