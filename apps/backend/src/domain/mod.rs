//! Domain layer: pure game rules, no I/O.

pub mod bidding;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod fixtures;
pub mod ranking;
pub mod snapshot;
pub mod state;
pub mod tricks;

#[cfg(test)]
mod test_state_helpers;

#[cfg(test)]
mod tests_bidding;
#[cfg(test)]
mod tests_props_dealing;
#[cfg(test)]
mod tests_tricks;

// Re-exports for ergonomics
pub use cards_parsing::try_parse_cards;
pub use cards_types::{Card, Rank, Suit};
pub use dealing::{deal_hand, full_deck, Deal};
pub use ranking::{card_power, manilha_rank};
pub use state::{
    next_seat, team_for_seat, BidState, PlayerIdentity, SeatAssignment, SeatIdx, Team, TrucoState,
    UserId, STAKE_LADDER, TARGET_SCORE,
};
