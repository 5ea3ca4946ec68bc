//! Launch configuration: CLI flags plus the one-time seed read
//!
//! The seed may be given as `--seed`; otherwise it is read once from stdin
//! before the terminal enters raw mode. A malformed seed aborts before any
//! game state exists.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use crate::core::{Catalog, SessionConfig};
use crate::types::{
    SpawnColumn, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, LOCK_DELAY_MS, MAX_START_LEVEL,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CatalogArg {
    /// Six pieces, no tee (the small-board variant's catalog)
    Classic6,
    /// All seven pieces
    Full7,
}

impl From<CatalogArg> for Catalog {
    fn from(arg: CatalogArg) -> Self {
        match arg {
            CatalogArg::Classic6 => Catalog::ClassicSix,
            CatalogArg::Full7 => Catalog::FullSeven,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SpawnArg {
    /// Random spawn column drawn from the session RNG
    Random,
    /// Fixed, roughly centered spawn column
    Centered,
}

impl From<SpawnArg> for SpawnColumn {
    fn from(arg: SpawnArg) -> Self {
        match arg {
            SpawnArg::Random => SpawnColumn::Random,
            SpawnArg::Centered => SpawnColumn::Centered,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "frametris", about = "Falling-block puzzle in the terminal")]
pub struct Cli {
    /// Board width in cells
    #[arg(long, default_value_t = DEFAULT_BOARD_WIDTH, value_parser = clap::value_parser!(u8).range(4..))]
    pub width: u8,

    /// Board height in cells
    #[arg(long, default_value_t = DEFAULT_BOARD_HEIGHT, value_parser = clap::value_parser!(u8).range(4..))]
    pub height: u8,

    /// Shape catalog to draw pieces from
    #[arg(long, value_enum, default_value_t = CatalogArg::Full7)]
    pub catalog: CatalogArg,

    /// Spawn column policy
    #[arg(long, value_enum, default_value_t = SpawnArg::Random)]
    pub spawn: SpawnArg,

    /// Grace period before a grounded piece settles, in milliseconds
    #[arg(long, default_value_t = LOCK_DELAY_MS)]
    pub lock_delay_ms: u32,

    /// Initial starting level (also adjustable in the options menu)
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(..=MAX_START_LEVEL as i64))]
    pub level: u8,

    /// RNG seed; prompted on stdin when omitted
    #[arg(long)]
    pub seed: Option<u32>,
}

impl Cli {
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            width: self.width,
            height: self.height,
            catalog: self.catalog.into(),
            spawn: self.spawn.into(),
            lock_delay_ms: self.lock_delay_ms,
        }
    }

    /// Resolve the seed: the flag if present, otherwise one blocking stdin
    /// read. Seed 0 is accepted here and remapped inside the RNG.
    pub fn resolve_seed(&self) -> Result<u32> {
        match self.seed {
            Some(seed) => Ok(seed),
            None => read_seed(&mut io::stdin().lock(), &mut io::stdout()),
        }
    }
}

fn read_seed(input: &mut impl BufRead, prompt_out: &mut impl Write) -> Result<u32> {
    write!(prompt_out, "Enter a seed: ").context("writing seed prompt")?;
    prompt_out.flush().context("flushing seed prompt")?;
    let mut line = String::new();
    input.read_line(&mut line).context("reading seed")?;
    line.trim()
        .parse::<u32>()
        .with_context(|| format!("invalid seed {:?}", line.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_parses_from_a_line() {
        let mut out = Vec::new();
        let seed = read_seed(&mut &b"12345\n"[..], &mut out).unwrap();
        assert_eq!(seed, 12345);
        assert_eq!(out, b"Enter a seed: ");
    }

    #[test]
    fn malformed_seed_is_an_error() {
        let mut out = Vec::new();
        assert!(read_seed(&mut &b"not-a-number\n"[..], &mut out).is_err());
        assert!(read_seed(&mut &b"\n"[..], &mut out).is_err());
    }

    #[test]
    fn cli_maps_to_session_config() {
        let cli = Cli::parse_from([
            "frametris",
            "--width",
            "8",
            "--height",
            "8",
            "--catalog",
            "classic6",
            "--spawn",
            "centered",
            "--seed",
            "7",
        ]);
        let config = cli.session_config();
        assert_eq!(config.width, 8);
        assert_eq!(config.height, 8);
        assert_eq!(config.catalog, Catalog::ClassicSix);
        assert_eq!(config.spawn, SpawnColumn::Centered);
        assert_eq!(cli.resolve_seed().unwrap(), 7);
    }
}
