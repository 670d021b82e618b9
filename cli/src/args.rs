//! Argument parsing for the `planar` binary.

use std::{error::Error as StdError, str::FromStr};

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use planar_types::{Coordinate, Point};

const ENV_HELP: &str = "\
Environment:
  PLANAR_NUMERIC   int | float (overrides ~/.planar/config.toml)
  RUST_LOG         log filter, default \"warn\"";

#[derive(Debug, Parser)]
#[command(name = "planar")]
#[command(about = "Add two-dimensional points component-wise")]
#[command(version, after_help = ENV_HELP)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Add two points and print the result as (x, y)
    Add {
        /// First point, as X,Y
        #[arg(allow_hyphen_values = true)]
        lhs: String,
        /// Second point, as X,Y
        #[arg(allow_hyphen_values = true)]
        rhs: String,
    },
}

/// Parse `X,Y`, optionally wrapped in parentheses, into a point.
pub fn parse_point<T>(raw: &str) -> Result<Point<T>>
where
    T: Coordinate + FromStr,
    T::Err: StdError + Send + Sync + 'static,
{
    let trimmed = raw.trim();
    let inner = trimmed
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .unwrap_or(trimmed);

    let (x, y) = inner
        .split_once(',')
        .ok_or_else(|| anyhow!("expected a point as X,Y, got `{raw}`"))?;

    let x = x
        .trim()
        .parse::<T>()
        .with_context(|| format!("invalid x coordinate in `{raw}`"))?;
    let y = y
        .trim()
        .parse::<T>()
        .with_context(|| format!("invalid y coordinate in `{raw}`"))?;

    Ok(Point::new(x, y))
}
