use crate::deck::Cards;
use crate::types::{Generation, Phase};

/// Read-only view of a session for renderers.
///
/// Fixed capacity and reusable: `Session::snapshot_into` refills an existing
/// snapshot without allocating.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionSnapshot {
    pub cards: Cards,
    pub seconds_remaining: u32,
    pub matched_pairs: u8,
    pub total_pairs: u8,
    pub mistakes: u32,
    pub phase: Phase,
    pub generation: Generation,
    pub mismatch_pending: bool,
}

impl SessionSnapshot {
    pub fn clear(&mut self) {
        self.cards.clear();
        self.seconds_remaining = 0;
        self.matched_pairs = 0;
        self.total_pairs = 0;
        self.mistakes = 0;
        self.phase = Phase::Idle;
        self.generation = 0;
        self.mismatch_pending = false;
    }

    /// Whether clicks can still change the board.
    pub fn playable(&self) -> bool {
        self.phase == Phase::Running && self.seconds_remaining > 0
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self {
            cards: Cards::new(),
            seconds_remaining: 0,
            matched_pairs: 0,
            total_pairs: 0,
            mistakes: 0,
            phase: Phase::Idle,
            generation: 0,
            mismatch_pending: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::Card;
    use crate::types::Animal;

    #[test]
    fn clear_resets_to_default() {
        let mut snap = SessionSnapshot::default();
        snap.cards.push(Card::new(0, Animal::Cat));
        snap.phase = Phase::Won;
        snap.mistakes = 3;

        snap.clear();
        assert_eq!(snap, SessionSnapshot::default());
    }

    #[test]
    fn playable_requires_running_with_time_left() {
        let mut snap = SessionSnapshot {
            phase: Phase::Running,
            seconds_remaining: 5,
            ..Default::default()
        };
        assert!(snap.playable());

        snap.seconds_remaining = 0;
        assert!(!snap.playable());

        snap.seconds_remaining = 5;
        snap.phase = Phase::Won;
        assert!(!snap.playable());
    }
}
