//! Round configuration and its validation error.

use thiserror::Error;

use crate::types::{
    DEFAULT_CARD_COUNT, DEFAULT_START_SECS, MAX_CARD_COUNT, MAX_COUNTDOWN_SECS, MIN_CARD_COUNT,
    MIN_COUNTDOWN_SECS,
};

/// The only failure the game reports: a deck size or countdown that cannot
/// be played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidConfiguration {
    #[error("invalid configuration: card count {count} must be even and between {min} and {max}")]
    CardCount { count: u32, min: u8, max: u8 },

    #[error("invalid configuration: countdown {secs}s must be between {min}s and {max}s")]
    Countdown { secs: u32, min: u32, max: u32 },
}

/// Check a card count against the deck limits.
pub fn validate_card_count(count: u32) -> Result<u8, InvalidConfiguration> {
    let in_range = (u32::from(MIN_CARD_COUNT)..=u32::from(MAX_CARD_COUNT)).contains(&count);
    if !in_range || count % 2 != 0 {
        return Err(InvalidConfiguration::CardCount {
            count,
            min: MIN_CARD_COUNT,
            max: MAX_CARD_COUNT,
        });
    }
    Ok(count as u8)
}

/// Deck size and countdown for a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoundConfig {
    card_count: u8,
    start_secs: u32,
}

impl RoundConfig {
    /// Build a config the core can play: an even card count the catalog can
    /// fill and a positive countdown.
    pub fn new(card_count: u32, start_secs: u32) -> Result<Self, InvalidConfiguration> {
        let card_count = validate_card_count(card_count)?;
        if start_secs == 0 {
            return Err(InvalidConfiguration::Countdown {
                secs: start_secs,
                min: 1,
                max: u32::MAX,
            });
        }
        Ok(Self {
            card_count,
            start_secs,
        })
    }

    /// Stricter check used at the settings boundary: the countdown must also
    /// fall within the dialog's range.
    pub fn from_settings(card_count: u32, countdown_secs: u32) -> Result<Self, InvalidConfiguration> {
        if !(MIN_COUNTDOWN_SECS..=MAX_COUNTDOWN_SECS).contains(&countdown_secs) {
            return Err(InvalidConfiguration::Countdown {
                secs: countdown_secs,
                min: MIN_COUNTDOWN_SECS,
                max: MAX_COUNTDOWN_SECS,
            });
        }
        Self::new(card_count, countdown_secs)
    }

    pub fn card_count(&self) -> u8 {
        self.card_count
    }

    pub fn pair_count(&self) -> u8 {
        self.card_count / 2
    }

    pub fn start_secs(&self) -> u32 {
        self.start_secs
    }
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            card_count: DEFAULT_CARD_COUNT,
            start_secs: DEFAULT_START_SECS,
        }
    }
}
