//! Manilha derivation and card power under the current vira.

use super::cards_types::{Card, Rank};

/// Power floor for manilhas; always above any plain rank (max 9).
pub const MANILHA_BASE_POWER: u8 = 100;

/// The manilha is the rank immediately after the vira's rank in the
/// strength cycle (Three wraps to Four).
#[inline]
pub fn manilha_rank(vira: Rank) -> Rank {
    vira.next_cyclic()
}

/// Absolute strength of a played card for trick resolution.
///
/// Manilhas rank above everything and break ties by suit; all other cards
/// compare by rank index alone.
#[inline]
pub fn card_power(card: Card, manilha: Rank) -> u8 {
    if card.rank == manilha {
        MANILHA_BASE_POWER + card.suit.strength()
    } else {
        card.rank.strength()
    }
}
