//! Settings and time-up dialogs.
//!
//! The settings dialog edits a draft; nothing reaches the session until the
//! draft passes validation on save.

use crate::core::{InvalidConfiguration, RoundConfig};
use crate::types::{
    CARD_COUNT_STEP, COUNTDOWN_STEP_SECS, MAX_CARD_COUNT, MAX_COUNTDOWN_SECS, MIN_CARD_COUNT,
    MIN_COUNTDOWN_SECS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsField {
    CardCount,
    Countdown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsDialog {
    card_count: u32,
    countdown_secs: u32,
    field: SettingsField,
    /// Set when the last save attempt was rejected.
    error: Option<InvalidConfiguration>,
}

impl SettingsDialog {
    /// Open with a draft seeded from the last applied configuration.
    pub fn open(config: RoundConfig) -> Self {
        Self {
            card_count: u32::from(config.card_count()),
            countdown_secs: config.start_secs(),
            field: SettingsField::CardCount,
            error: None,
        }
    }

    pub fn card_count(&self) -> u32 {
        self.card_count
    }

    pub fn countdown_secs(&self) -> u32 {
        self.countdown_secs
    }

    pub fn field(&self) -> SettingsField {
        self.field
    }

    pub fn error(&self) -> Option<InvalidConfiguration> {
        self.error
    }

    /// Toggle between the two fields.
    pub fn select_next(&mut self) {
        self.field = match self.field {
            SettingsField::CardCount => SettingsField::Countdown,
            SettingsField::Countdown => SettingsField::CardCount,
        };
    }

    /// Step the selected field up, clamped to the accepted range.
    ///
    /// An odd card count steps to the next even value.
    pub fn increase(&mut self) {
        match self.field {
            SettingsField::CardCount => {
                let count = self.clamped_card_count();
                let step = if count % 2 == 1 {
                    1
                } else {
                    u32::from(CARD_COUNT_STEP)
                };
                self.card_count = count
                    .saturating_add(step)
                    .min(u32::from(MAX_CARD_COUNT));
            }
            SettingsField::Countdown => {
                self.countdown_secs = self
                    .clamped_countdown_secs()
                    .saturating_add(COUNTDOWN_STEP_SECS)
                    .min(MAX_COUNTDOWN_SECS);
            }
        }
        self.error = None;
    }

    /// Step the selected field down, clamped to the accepted range.
    ///
    /// An odd card count steps to the previous even value.
    pub fn decrease(&mut self) {
        match self.field {
            SettingsField::CardCount => {
                let count = self.clamped_card_count();
                let step = if count % 2 == 1 {
                    1
                } else {
                    u32::from(CARD_COUNT_STEP)
                };
                self.card_count = count
                    .saturating_sub(step)
                    .max(u32::from(MIN_CARD_COUNT));
            }
            SettingsField::Countdown => {
                self.countdown_secs = self
                    .clamped_countdown_secs()
                    .saturating_sub(COUNTDOWN_STEP_SECS)
                    .max(MIN_COUNTDOWN_SECS);
            }
        }
        self.error = None;
    }

    fn clamped_card_count(&self) -> u32 {
        self.card_count
            .clamp(u32::from(MIN_CARD_COUNT), u32::from(MAX_CARD_COUNT))
    }

    fn clamped_countdown_secs(&self) -> u32 {
        self.countdown_secs.clamp(MIN_COUNTDOWN_SECS, MAX_COUNTDOWN_SECS)
    }

    /// Overwrite the card count draft as typed, without clamping.
    pub fn set_card_count(&mut self, count: u32) {
        self.card_count = count;
        self.error = None;
    }

    /// Overwrite the countdown draft as typed, without clamping.
    pub fn set_countdown_secs(&mut self, secs: u32) {
        self.countdown_secs = secs;
        self.error = None;
    }

    /// Validate the draft. On failure the error is kept for display.
    pub fn save(&mut self) -> Result<RoundConfig, InvalidConfiguration> {
        RoundConfig::from_settings(self.card_count, self.countdown_secs)
            .inspect_err(|e| self.error = Some(*e))
    }
}

/// Shown once a round is over, offering a restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeUpDialog {
    won: bool,
}

impl TimeUpDialog {
    pub fn new(won: bool) -> Self {
        Self { won }
    }

    pub fn won(&self) -> bool {
        self.won
    }

    pub fn message(&self) -> &'static str {
        if self.won {
            "You found all pairs!"
        } else {
            "Time is up!"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_seeds_from_config() {
        let dialog = SettingsDialog::open(RoundConfig::new(8, 60).unwrap());
        assert_eq!(dialog.card_count(), 8);
        assert_eq!(dialog.countdown_secs(), 60);
        assert_eq!(dialog.field(), SettingsField::CardCount);
    }

    #[test]
    fn test_save_returns_updated_values() {
        let mut dialog = SettingsDialog::open(RoundConfig::new(8, 60).unwrap());
        dialog.set_card_count(12);
        dialog.set_countdown_secs(90);

        let config = dialog.save().unwrap();
        assert_eq!(config.card_count(), 12);
        assert_eq!(config.start_secs(), 90);
    }

    #[test]
    fn test_steps_are_clamped() {
        let mut dialog = SettingsDialog::open(RoundConfig::new(18, 295).unwrap());
        dialog.increase();
        dialog.increase();
        assert_eq!(dialog.card_count(), 20);

        dialog.select_next();
        dialog.increase();
        dialog.increase();
        assert_eq!(dialog.countdown_secs(), 300);

        for _ in 0..100 {
            dialog.decrease();
        }
        assert_eq!(dialog.countdown_secs(), 10);

        dialog.select_next();
        for _ in 0..20 {
            dialog.decrease();
        }
        assert_eq!(dialog.card_count(), 2);
    }

    #[test]
    fn test_steps_from_typed_values_stay_even_and_in_range() {
        let mut dialog = SettingsDialog::open(RoundConfig::default());

        dialog.set_card_count(u32::MAX);
        dialog.increase();
        assert_eq!(dialog.card_count(), 20);

        dialog.set_card_count(u32::MAX);
        dialog.decrease();
        assert_eq!(dialog.card_count(), 18);

        dialog.set_card_count(7);
        dialog.increase();
        assert_eq!(dialog.card_count(), 8);

        dialog.set_card_count(7);
        dialog.decrease();
        assert_eq!(dialog.card_count(), 6);

        dialog.set_card_count(0);
        dialog.decrease();
        assert_eq!(dialog.card_count(), 2);
        assert!(dialog.save().is_ok());

        dialog.select_next();
        dialog.set_countdown_secs(u32::MAX);
        dialog.increase();
        assert_eq!(dialog.countdown_secs(), 300);
    }

    #[test]
    fn test_invalid_draft_is_rejected_and_remembered() {
        let mut dialog = SettingsDialog::open(RoundConfig::default());
        dialog.set_card_count(7);
        assert!(dialog.save().is_err());
        assert!(matches!(
            dialog.error(),
            Some(InvalidConfiguration::CardCount { count: 7, .. })
        ));

        dialog.set_card_count(8);
        dialog.set_countdown_secs(400);
        assert!(matches!(
            dialog.save(),
            Err(InvalidConfiguration::Countdown { secs: 400, .. })
        ));
    }

    #[test]
    fn test_time_up_messages() {
        assert_eq!(TimeUpDialog::new(true).message(), "You found all pairs!");
        assert_eq!(TimeUpDialog::new(false).message(), "Time is up!");
    }
}
