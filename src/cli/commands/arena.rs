//! Arena command - Play two agents against each other

use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result, anyhow};
use clap::{Parser, ValueEnum};

use crate::{
    adapters::CsvRepository,
    agents::{MinimaxAgent, QTableAgent, RandomAgent},
    cli::output::{create_spinner, format_number, format_rate, print_kv, print_section},
    minimax::MinimaxEvaluator,
    pipeline::play_match,
    ports::{Agent, QTableRepository},
    q_learning::RewardScheme,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AgentKind {
    /// Perfect play from the solved game tree
    Minimax,
    /// Greedy play from a trained Q-table (requires --table)
    QTable,
    /// Uniformly random legal moves
    Random,
}

#[derive(Parser, Debug)]
#[command(about = "Play two agents against each other")]
pub struct ArenaArgs {
    /// Agent playing X (moves first)
    #[arg(long, value_enum)]
    pub x: AgentKind,

    /// Agent playing O
    #[arg(long, value_enum)]
    pub o: AgentKind,

    /// Q-table CSV for q-table agents
    #[arg(long)]
    pub table: Option<PathBuf>,

    /// Number of games
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: usize,

    /// Random seed for random agents
    #[arg(long)]
    pub seed: Option<u64>,
}

struct AgentFactory {
    table: Option<PathBuf>,
    seed: Option<u64>,
    evaluator: Option<Arc<MinimaxEvaluator>>,
}

impl AgentFactory {
    fn evaluator(&mut self) -> Result<Arc<MinimaxEvaluator>> {
        if let Some(evaluator) = &self.evaluator {
            return Ok(Arc::clone(evaluator));
        }
        let spinner = create_spinner("Solving game tree...")?;
        let evaluator = Arc::new(MinimaxEvaluator::from_empty_board()?);
        spinner.finish_and_clear();
        self.evaluator = Some(Arc::clone(&evaluator));
        Ok(evaluator)
    }

    fn build(&mut self, kind: AgentKind, side: &str, seed_offset: u64) -> Result<Box<dyn Agent>> {
        let name = format!("{kind:?}-{side}");
        let agent: Box<dyn Agent> = match kind {
            AgentKind::Minimax => Box::new(MinimaxAgent::new(name, self.evaluator()?)),
            AgentKind::QTable => {
                let path = self
                    .table
                    .as_ref()
                    .ok_or_else(|| anyhow!("--table is required for q-table agents"))?;
                let table = CsvRepository::new()
                    .load(path, RewardScheme::default())
                    .with_context(|| format!("Failed to load Q-table from {}", path.display()))?;
                Box::new(QTableAgent::new(name, table))
            }
            AgentKind::Random => match self.seed {
                Some(seed) => Box::new(RandomAgent::with_seed(
                    name,
                    seed.wrapping_add(seed_offset),
                )),
                None => Box::new(RandomAgent::new(name)),
            },
        };
        Ok(agent)
    }
}

pub fn execute(args: ArenaArgs) -> Result<()> {
    let mut factory = AgentFactory {
        table: args.table.clone(),
        seed: args.seed,
        evaluator: None,
    };
    let mut x = factory.build(args.x, "X", 0)?;
    let mut o = factory.build(args.o, "O", 1)?;

    let result = play_match(x.as_mut(), o.as_mut(), args.games).context("Match failed")?;

    print_section(&format!("{} vs {}", result.x_name, result.o_name));
    print_kv("Games", &format_number(result.games));
    print_kv(
        "X wins",
        &format!("{} ({})", result.x_wins, format_rate(result.x_wins, result.games)),
    );
    print_kv(
        "O wins",
        &format!("{} ({})", result.o_wins, format_rate(result.o_wins, result.games)),
    );
    print_kv(
        "Ties",
        &format!("{} ({})", result.ties, format_rate(result.ties, result.games)),
    );
    if let Some(seed) = args.seed {
        print_kv("Seed", &seed.to_string());
    }

    Ok(())
}
