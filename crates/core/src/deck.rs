//! Deck module - paired cards laid out on the table
//!
//! A deck always holds two cards per animal, drawn from the front of the
//! catalog, in shuffled order. Ids follow table position and never change for
//! the lifetime of a deck.

use arrayvec::ArrayVec;

use crate::config::{validate_card_count, InvalidConfiguration};
use crate::rng::{shuffle, RandomSource};
use crate::types::{Animal, CardId, ANIMALS, MAX_CARD_COUNT};

/// One card on the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub id: CardId,
    pub animal: Animal,
    pub is_flipped: bool,
    pub is_matched: bool,
}

impl Card {
    pub fn new(id: CardId, animal: Animal) -> Self {
        Self {
            id,
            animal,
            is_flipped: false,
            is_matched: false,
        }
    }
}

/// Fixed-capacity card storage. No allocation; at most 20 cards.
pub type Cards = ArrayVec<Card, { MAX_CARD_COUNT as usize }>;

/// Ordered, shuffled set of paired cards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Deck {
    cards: Cards,
}

impl Deck {
    /// Build a deck from cards in table order.
    ///
    /// Mostly useful for tests that need a known layout; ids are taken as given.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().take(MAX_CARD_COUNT as usize).collect(),
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.iter_mut().find(|c| c.id == id)
    }

    /// Number of cards marked matched.
    pub fn matched_cards(&self) -> usize {
        self.cards.iter().filter(|c| c.is_matched).count()
    }

    /// Matched pairs, derived from the cards themselves.
    pub fn matched_pairs(&self) -> u8 {
        (self.matched_cards() / 2) as u8
    }

    pub fn pair_count(&self) -> u8 {
        (self.cards.len() / 2) as u8
    }

    /// True once every card has been matched.
    pub fn all_matched(&self) -> bool {
        !self.cards.is_empty() && self.cards.iter().all(|c| c.is_matched)
    }
}

/// Generate a shuffled deck of `card_count` cards.
///
/// Takes the first `card_count / 2` animals from the catalog, lays each down
/// twice, shuffles with Fisher-Yates, then numbers the cards in table order.
///
/// # Errors
///
/// [`InvalidConfiguration::CardCount`] when the count is odd, zero, or larger
/// than the catalog can fill.
///
/// # Examples
///
/// ```
/// use tui_memory_core::{generate_deck, SimpleRng};
///
/// let mut rng = SimpleRng::new(42);
/// let deck = generate_deck(12, &mut rng).unwrap();
/// assert_eq!(deck.len(), 12);
/// assert!(generate_deck(7, &mut rng).is_err());
/// ```
pub fn generate_deck<R: RandomSource + ?Sized>(
    card_count: u32,
    rng: &mut R,
) -> Result<Deck, InvalidConfiguration> {
    let count = validate_card_count(card_count)? as usize;
    let pairs = &ANIMALS[..count / 2];

    let mut animals: ArrayVec<Animal, { MAX_CARD_COUNT as usize }> = ArrayVec::new();
    animals.extend(pairs.iter().copied());
    animals.extend(pairs.iter().copied());
    shuffle(rng, &mut animals);

    let cards = animals
        .into_iter()
        .enumerate()
        .map(|(i, animal)| Card::new(i as CardId, animal))
        .collect();

    Ok(Deck { cards })
}
