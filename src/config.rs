//! Runtime configuration: command-line flags with environment fallbacks.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;

use crate::types::TICK_MS;

/// Top-down lane-dodging car game for the terminal
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "tui-racer")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Directory holding road.bmp, car.png and police.png
    #[arg(long = "assets", env = "RACER_ASSETS", default_value = "assets")]
    pub asset_dir: PathBuf,

    /// Random seed (default: derived from the clock)
    #[arg(long, env = "RACER_SEED")]
    pub seed: Option<u32>,

    /// Milliseconds between simulation ticks
    #[arg(long, env = "RACER_TICK_MS", default_value_t = TICK_MS,
          value_parser = clap::value_parser!(u32).range(1..=1000))]
    pub tick_ms: u32,

    /// Write logs to this file (the terminal is owned by the game)
    #[arg(long, env = "RACER_LOG")]
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// The configured seed, or one taken from the wall clock.
    pub fn resolved_seed(&self) -> u32 {
        self.seed.unwrap_or_else(clock_seed)
    }
}

fn clock_seed() -> u32 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(1);
    // Fold the high bits in so consecutive launches differ.
    (nanos ^ (nanos >> 32)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Config, clap::Error> {
        Config::try_parse_from(std::iter::once("tui-racer").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults() {
        let cfg = parse(&[]).unwrap();
        assert_eq!(cfg.asset_dir, PathBuf::from("assets"));
        assert_eq!(cfg.tick_ms, TICK_MS);
        assert_eq!(cfg.log_file, None);
    }

    #[test]
    fn test_flags() {
        let cfg = parse(&[
            "--assets",
            "/tmp/art",
            "--seed",
            "42",
            "--tick-ms",
            "33",
            "--log-file",
            "racer.log",
        ])
        .unwrap();
        assert_eq!(cfg.asset_dir, PathBuf::from("/tmp/art"));
        assert_eq!(cfg.seed, Some(42));
        assert_eq!(cfg.resolved_seed(), 42);
        assert_eq!(cfg.tick_ms, 33);
        assert_eq!(cfg.log_file, Some(PathBuf::from("racer.log")));
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(parse(&["--seed", "minus-one"]).is_err());
        assert!(parse(&["--tick-ms", "0"]).is_err());
        assert!(parse(&["--tick-ms", "5000"]).is_err());
        assert!(parse(&["--turbo"]).is_err());
    }

    #[test]
    fn test_clap_definition_is_consistent() {
        use clap::CommandFactory;
        Config::command().debug_assert();
    }
}
