//! App: routes player actions to the session or to the open dialog.

use tracing::{debug, warn};

use crate::core::{InvalidConfiguration, RoundConfig, Session};
use crate::cursor::Cursor;
use crate::dialog::{SettingsDialog, TimeUpDialog};
use crate::types::{CardId, GameAction};

/// What sits on top of the card grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    None,
    Settings(SettingsDialog),
    TimeUp(TimeUpDialog),
}

pub struct App {
    session: Session,
    /// Last configuration the player saved (or the startup one).
    applied: RoundConfig,
    cursor: Cursor,
    overlay: Overlay,
}

impl App {
    /// Start the first round with `config`.
    pub fn new(config: RoundConfig, seed: u32) -> Result<Self, InvalidConfiguration> {
        let mut session = Session::new(config, seed);
        session.start()?;
        let cursor = Cursor::new(session.deck().len());
        Ok(Self {
            session,
            applied: config,
            cursor,
            overlay: Overlay::None,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn applied_config(&self) -> RoundConfig {
        self.applied
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    /// Advance game time. Returns true when anything visible changed.
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        let changed = self.session.advance(elapsed_ms);
        self.sync_overlay();
        changed
    }

    /// Apply a player action. Returns true when anything visible changed.
    pub fn handle_action(&mut self, action: GameAction) -> bool {
        let changed = match &mut self.overlay {
            Overlay::Settings(dialog) => match action {
                GameAction::MoveUp | GameAction::MoveDown => {
                    dialog.select_next();
                    true
                }
                GameAction::MoveRight => {
                    dialog.increase();
                    true
                }
                GameAction::MoveLeft => {
                    dialog.decrease();
                    true
                }
                GameAction::Flip => {
                    self.save_settings();
                    true
                }
                GameAction::Cancel => {
                    self.close_settings();
                    true
                }
                GameAction::OpenSettings | GameAction::Restart => false,
            },
            Overlay::TimeUp(_) => match action {
                GameAction::Flip | GameAction::Restart => {
                    self.restart();
                    true
                }
                GameAction::OpenSettings => {
                    self.open_settings();
                    true
                }
                _ => false,
            },
            Overlay::None => match action {
                GameAction::MoveLeft => {
                    self.cursor.move_left();
                    true
                }
                GameAction::MoveRight => {
                    self.cursor.move_right();
                    true
                }
                GameAction::MoveUp => {
                    self.cursor.move_up();
                    true
                }
                GameAction::MoveDown => {
                    self.cursor.move_down();
                    true
                }
                GameAction::Flip => match self.card_under_cursor() {
                    Some(id) => self.session.flip(id),
                    None => false,
                },
                GameAction::OpenSettings => {
                    self.open_settings();
                    true
                }
                GameAction::Restart => {
                    self.restart();
                    true
                }
                GameAction::Cancel => false,
            },
        };
        self.sync_overlay();
        changed
    }

    /// Id of the card the cursor is on.
    pub fn card_under_cursor(&self) -> Option<CardId> {
        self.session
            .deck()
            .cards()
            .get(self.cursor.index())
            .map(|c| c.id)
    }

    pub fn open_settings(&mut self) {
        self.overlay = Overlay::Settings(SettingsDialog::open(self.applied));
    }

    /// Dismiss the settings dialog without touching the session.
    pub fn close_settings(&mut self) {
        if matches!(self.overlay, Overlay::Settings(_)) {
            self.overlay = Overlay::None;
        }
    }

    /// Validate the settings draft and restart with it.
    ///
    /// On failure the dialog stays open showing the error and the running
    /// round is left alone.
    pub fn save_settings(&mut self) {
        let Overlay::Settings(dialog) = &mut self.overlay else {
            return;
        };
        let config = match dialog.save() {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, "settings rejected");
                return;
            }
        };
        if let Err(e) = self.session.restart(config) {
            warn!(error = %e, "restart with new settings failed");
            return;
        }

        debug!(
            cards = config.card_count(),
            secs = config.start_secs(),
            "settings applied"
        );
        self.applied = config;
        self.cursor = Cursor::new(self.session.deck().len());
        self.overlay = Overlay::None;
    }

    /// Restart with the last applied configuration.
    pub fn restart(&mut self) {
        match self.session.restart(self.applied) {
            Ok(()) => {
                self.cursor = Cursor::new(self.session.deck().len());
                if matches!(self.overlay, Overlay::TimeUp(_)) {
                    self.overlay = Overlay::None;
                }
            }
            Err(e) => warn!(error = %e, "restart failed"),
        }
    }

    /// Show the time-up dialog once the round ends; hide it once it restarts.
    fn sync_overlay(&mut self) {
        let over = self.session.is_over();
        match self.overlay {
            Overlay::None if over => {
                self.overlay = Overlay::TimeUp(TimeUpDialog::new(self.session.is_won()));
            }
            Overlay::TimeUp(_) if !over => self.overlay = Overlay::None,
            _ => {}
        }
    }
}
