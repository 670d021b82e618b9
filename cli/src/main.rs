//! Planar CLI - adds two points from the command line.
//!
//! ```text
//! main() -> Cli::parse() -> NumericMode::resolve() -> add_points() -> stdout
//! ```
//!
//! Usage errors exit with clap's status 2, runtime failures (bad coordinates,
//! integer overflow) with status 1.

mod args;
mod config;

use anyhow::Result;
use clap::Parser;
use std::{
    io::{IsTerminal, stderr},
    process::ExitCode,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use planar_types::Point;

use crate::args::{Cli, Command, parse_point};
use crate::config::{NumericMode, PlanarConfig};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // stdout carries the result only; logs go to stderr.
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_ansi(stderr().is_terminal())
                .with_writer(stderr),
        )
        .with(env_filter)
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Command::Add { lhs, rhs } => {
            let config = PlanarConfig::load();
            let mode = NumericMode::resolve(config.as_ref());
            match add_points(mode, &lhs, &rhs) {
                Ok(sum) => println!("{sum}"),
                Err(err) => {
                    eprintln!("Error: {err:#}");
                    return ExitCode::FAILURE;
                }
            }
        }
    }

    ExitCode::SUCCESS
}

fn add_points(mode: NumericMode, lhs: &str, rhs: &str) -> Result<String> {
    tracing::debug!(?mode, lhs, rhs, "Adding points");
    match mode {
        NumericMode::Int => {
            let lhs: Point<i64> = parse_point(lhs)?;
            let rhs: Point<i64> = parse_point(rhs)?;
            Ok(lhs.try_add(rhs)?.to_string())
        }
        NumericMode::Float => {
            let lhs: Point<f64> = parse_point(lhs)?;
            let rhs: Point<f64> = parse_point(rhs)?;
            Ok(lhs.add(rhs).to_string())
        }
    }
}
