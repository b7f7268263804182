//! Core card types: Card, Rank, Suit in truco strength order.

/// Suits in manilha tie-break order: clubs weakest, diamonds strongest.
///
/// The declaration order IS the truco suit strength; non-manilha cards never
/// compare by suit.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Suit {
    Clubs,
    Hearts,
    Spades,
    Diamonds,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Hearts, Suit::Spades, Suit::Diamonds];

    /// Tie-break strength among manilhas (0..=3).
    #[inline]
    pub fn strength(self) -> u8 {
        self as u8
    }
}

/// Ranks in truco strength order: 4 weakest, 3 strongest.
///
/// This is a game-specific ordering, not face value. The declaration order
/// IS the strength ordering and the cycle used to derive the manilha.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Rank {
    Four,
    Five,
    Six,
    Seven,
    Queen,
    Jack,
    King,
    Ace,
    Two,
    Three,
}

impl Rank {
    pub const ALL: [Rank; 10] = [
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Queen,
        Rank::Jack,
        Rank::King,
        Rank::Ace,
        Rank::Two,
        Rank::Three,
    ];

    /// Index in the strength ordering (0..=9).
    #[inline]
    pub fn strength(self) -> u8 {
        self as u8
    }

    /// The next rank in the strength cycle; Three wraps back to Four.
    #[inline]
    pub fn next_cyclic(self) -> Rank {
        Rank::ALL[(self as usize + 1) % Rank::ALL.len()]
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

// Note: Ord on Card is only for stable sorting: rank strength then suit.
// Trick resolution must go through ranking::card_power, which accounts for
// the manilha.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.rank.cmp(&other.rank) {
            std::cmp::Ordering::Equal => self.suit.cmp(&other.suit),
            ord => ord,
        }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
