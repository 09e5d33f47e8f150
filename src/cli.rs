//! Command-line and environment configuration.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use tracing::Level;

use crate::core::{InvalidConfiguration, RoundConfig};
use crate::types::{DEFAULT_CARD_COUNT, DEFAULT_START_SECS};

#[derive(Debug, Clone, Parser)]
#[command(name = "tui-memory", version, about = "Memory card game for the terminal")]
pub struct Cli {
    /// Number of cards on the table (even, 2-20).
    #[arg(long, env = "MEMORY_CARDS", default_value_t = u32::from(DEFAULT_CARD_COUNT))]
    pub cards: u32,

    /// Countdown length in seconds (10-300).
    #[arg(long, env = "MEMORY_SECONDS", default_value_t = DEFAULT_START_SECS)]
    pub seconds: u32,

    /// Shuffle seed. Taken from the clock when omitted.
    #[arg(long, env = "MEMORY_SEED")]
    pub seed: Option<u32>,

    /// Write logs to this file. Nothing is logged otherwise.
    #[arg(long, env = "MEMORY_LOG")]
    pub log_file: Option<PathBuf>,

    /// Maximum log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info")]
    pub log_level: Level,
}

impl Cli {
    /// Initial round configuration, checked against the settings dialog bounds.
    pub fn round_config(&self) -> Result<RoundConfig, InvalidConfiguration> {
        RoundConfig::from_settings(self.cards, self.seconds)
    }

    pub fn seed(&self) -> u32 {
        self.seed.unwrap_or_else(clock_seed)
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
