use std::collections::HashSet;

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::cards_types::{Card, Rank};
use super::dealing::{deal_hand, full_deck, DECK_SIZE, HAND_SIZE};
use super::ranking::{card_power, manilha_rank, MANILHA_BASE_POWER};

proptest! {
    /// Every deal partitions the deck: 12 hand cards + vira, all distinct,
    /// all drawn from the 40-card deck.
    #[test]
    fn deals_never_duplicate_or_invent_cards(seed in any::<u64>()) {
        let deck: HashSet<Card> = full_deck().into_iter().collect();
        let deal = deal_hand(&mut ChaCha8Rng::seed_from_u64(seed));

        let mut seen: HashSet<Card> = HashSet::new();
        for hand in &deal.hands {
            prop_assert_eq!(hand.len(), HAND_SIZE);
            for card in hand {
                prop_assert!(deck.contains(card));
                prop_assert!(seen.insert(*card), "duplicate {}", card);
            }
        }
        prop_assert!(deck.contains(&deal.vira));
        prop_assert!(seen.insert(deal.vira));
        prop_assert_eq!(seen.len(), 4 * HAND_SIZE + 1);
        prop_assert_eq!(deck.len(), DECK_SIZE);
    }

    /// The manilha always sits one step after the vira in the strength
    /// cycle, and manilhas always outrank plain cards.
    #[test]
    fn manilha_tracks_the_vira(seed in any::<u64>()) {
        let deal = deal_hand(&mut ChaCha8Rng::seed_from_u64(seed));
        let manilha = manilha_rank(deal.vira.rank);

        let vira_pos = Rank::ALL.iter().position(|&r| r == deal.vira.rank).unwrap();
        prop_assert_eq!(manilha, Rank::ALL[(vira_pos + 1) % Rank::ALL.len()]);

        for hand in &deal.hands {
            for &card in hand {
                let power = card_power(card, manilha);
                if card.rank == manilha {
                    prop_assert!(power >= MANILHA_BASE_POWER);
                } else {
                    prop_assert!(power < MANILHA_BASE_POWER);
                }
            }
        }
    }
}
