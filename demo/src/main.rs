//! A* pathfinding animation.
//!
//! Run: cargo run --bin astar-demo -- --width 50 --cell-size 16

use std::process::ExitCode;

use clap::Parser;
use gridpath_demo::Config;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match gridpath_demo::run(&Config::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::from(e.exit_status())
        }
    }
}
