use anyhow::{Context, Result};
use clap::Parser;
use day10::{pipe_loop::PipeLoop, CLIArgs};
use log::info;

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = CLIArgs::parse();
    let grid = day10::read_grid(&args.input_path).with_context(|| {
        format!(
            "Failed to read pipe map from given file({}).",
            args.input_path.display()
        )
    })?;
    info!("Read {} row(s) of pipe map.", grid.row_n());

    let pipe_loop = PipeLoop::trace(&grid).with_context(|| {
        format!(
            "Failed to trace the loop in pipe map from given file({}).",
            args.input_path.display()
        )
    })?;
    println!(
        "It takes {} step(s) to get from the start to the farthest point of the loop.",
        pipe_loop.farthest_distance()
    );

    Ok(())
}
