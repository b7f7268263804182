//! Deck construction and shuffled dealing for a hand.
//!
//! The randomness source is injected so deals are reproducible in tests.

use rand::seq::SliceRandom;
use rand::Rng;

use super::cards_types::{Card, Rank, Suit};

pub const DECK_SIZE: usize = 40;
pub const HAND_SIZE: usize = 3;

/// All 40 (rank, suit) combinations, exactly once each.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for rank in Rank::ALL {
        for suit in Suit::ALL {
            deck.push(Card { rank, suit });
        }
    }
    deck
}

/// One hand's deal: three cards per seat plus the turned-up vira.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    pub hands: [Vec<Card>; 4],
    pub vira: Card,
}

/// Fisher-Yates shuffle of a fresh deck, then three cards per seat and the
/// vira off the top.
pub fn deal_hand(rng: &mut impl Rng) -> Deal {
    let mut deck = full_deck();
    deck.shuffle(rng);

    let mut hands: [Vec<Card>; 4] = Default::default();
    for (seat, hand) in hands.iter_mut().enumerate() {
        let start = seat * HAND_SIZE;
        hand.extend_from_slice(&deck[start..start + HAND_SIZE]);
    }
    let vira = deck[4 * HAND_SIZE];

    Deal { hands, vira }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn full_deck_has_forty_distinct_cards() {
        let deck = full_deck();
        assert_eq!(deck.len(), DECK_SIZE);
        let unique: HashSet<Card> = deck.into_iter().collect();
        assert_eq!(unique.len(), DECK_SIZE);
    }

    #[test]
    fn deal_is_deterministic_for_a_seed() {
        let d1 = deal_hand(&mut ChaCha8Rng::seed_from_u64(42));
        let d2 = deal_hand(&mut ChaCha8Rng::seed_from_u64(42));
        assert_eq!(d1, d2);
    }

    #[test]
    fn different_seeds_give_different_deals() {
        let d1 = deal_hand(&mut ChaCha8Rng::seed_from_u64(1));
        let d2 = deal_hand(&mut ChaCha8Rng::seed_from_u64(2));
        assert_ne!(d1, d2);
    }

    #[test]
    fn deal_never_duplicates_or_loses_cards() {
        let deal = deal_hand(&mut ChaCha8Rng::seed_from_u64(7));
        let mut seen: HashSet<Card> = HashSet::new();
        for hand in &deal.hands {
            assert_eq!(hand.len(), HAND_SIZE);
            for &card in hand {
                assert!(seen.insert(card), "duplicate card {card}");
            }
        }
        assert!(seen.insert(deal.vira), "vira duplicated a dealt card");
        assert_eq!(seen.len(), 4 * HAND_SIZE + 1);
    }
}
