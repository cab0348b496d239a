use std::process;

use anyhow::{Context, Result};
use circuit_tracer::{render, CLIArgs, CircuitTracer};
use clap::{CommandFactory, Parser};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = CLIArgs::parse();
    let mut renderer = render::renderer_for(args.output_mode());
    let board = match circuit_tracer::read_board(&args.input_path).with_context(|| {
        format!(
            "Failed to read circuit board from given file({}).",
            args.input_path.display()
        )
    }) {
        Ok(board) => board,
        Err(e) => {
            eprintln!("Error: {:?}", e);
            eprintln!("{}", CLIArgs::command().render_usage());
            process::exit(1);
        }
    };

    let best_paths = CircuitTracer::new(&board)
        .search(args.discipline())
        .context("Failed to search traces on given board.")?;
    if best_paths.is_empty() {
        eprintln!(
            "There's no trace from {} to {} on given board.",
            board.starting_position(),
            board.ending_position()
        );
    }

    renderer
        .render(best_paths.traces())
        .context("Failed to output traces.")?;

    Ok(())
}
