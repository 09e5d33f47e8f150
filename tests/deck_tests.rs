//! Property tests over dealing and random play.

use proptest::prelude::*;

use tui_memory::core::{generate_deck, RoundConfig, Session, SimpleRng};
use tui_memory::types::Phase;

proptest! {
    #[test]
    fn deck_ids_are_unique_and_in_range(pairs in 1u32..=10, seed in any::<u32>()) {
        let count = pairs * 2;
        let deck = generate_deck(count, &mut SimpleRng::new(seed)).unwrap();

        let mut seen = [false; 20];
        for card in deck.cards() {
            prop_assert!((card.id as u32) < count);
            prop_assert!(!seen[card.id as usize]);
            seen[card.id as usize] = true;
        }
    }

    /// Random clicks and waits never break the counters.
    #[test]
    fn random_play_keeps_counters_consistent(
        seed in any::<u32>(),
        steps in prop::collection::vec((0u8..12, 0u32..2_000), 1..80),
    ) {
        let mut session = Session::new(RoundConfig::new(12, 30).unwrap(), seed);
        session.start().unwrap();

        let mut last_secs = session.seconds_remaining();
        let mut last_mistakes = 0;
        for (id, wait) in steps {
            session.flip(id);
            session.advance(wait);

            let matched = session.deck().cards().iter().filter(|c| c.is_matched).count();
            prop_assert_eq!(matched % 2, 0);
            prop_assert_eq!(matched / 2, session.matched_pair_count() as usize);
            prop_assert!(session.selection().len() <= 2);
            prop_assert!(session.seconds_remaining() <= last_secs);
            prop_assert!(session.mistake_count() >= last_mistakes);
            for card in session.deck().cards().iter().filter(|c| c.is_matched) {
                prop_assert!(card.is_flipped);
            }
            if session.phase() == Phase::Won {
                prop_assert_eq!(session.matched_pair_count(), 6);
            }
            last_secs = session.seconds_remaining();
            last_mistakes = session.mistake_count();
        }
    }

    #[test]
    fn double_flip_changes_state_once(seed in any::<u32>(), id in 0u8..12) {
        let mut session = Session::new(RoundConfig::new(12, 30).unwrap(), seed);
        session.start().unwrap();

        prop_assert!(session.flip(id));
        let after_first = session.snapshot();
        prop_assert!(!session.flip(id));
        prop_assert_eq!(session.snapshot(), after_first);
    }
}
