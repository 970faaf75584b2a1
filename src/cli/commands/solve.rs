//! Solve command - Minimax value and best line for a position

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    cli::output::{create_spinner, format_number, print_board, print_kv, print_section},
    minimax::MinimaxEvaluator,
    tictactoe::{BoardState, GameOutcome},
};

#[derive(Parser, Debug)]
#[command(about = "Solve a position with exhaustive minimax")]
pub struct SolveArgs {
    /// Position as 9 characters in row-major order (`X`, `O`, `.`)
    #[arg(long, default_value = ".........")]
    pub state: String,
}

pub fn execute(args: SolveArgs) -> Result<()> {
    let root = BoardState::from_string(&args.state)
        .with_context(|| format!("Invalid position '{}'", args.state))?;

    let spinner = create_spinner("Solving game tree...")?;
    let evaluator = MinimaxEvaluator::new(root).context("Failed to solve position")?;
    spinner.finish_and_clear();

    print_section("Position");
    print_board(&root);

    print_section("Minimax");
    let value = evaluator.value(&root)?;
    print_kv("Value", &value.to_string());
    let outcome = match evaluator.predicted_outcome(&root)? {
        GameOutcome::Win(player) => format!("{player} wins"),
        GameOutcome::Draw => "tie".to_string(),
    };
    print_kv("Perfect play", &outcome);
    print_kv("States solved", &format_number(evaluator.len()));

    if root.is_terminal() {
        print_kv("Best move", "none (game over)");
        return Ok(());
    }

    let best = evaluator.best_move(&root)?;
    print_kv("To move", &root.turn_marker()?.to_string());
    print_kv("Best move", &best.to_string());

    let line = evaluator
        .principal_variation(&root)?
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    print_kv("Principal line", &line);

    Ok(())
}
