//! Public snapshot of match state: what every seat may see.
//!
//! Hands never appear here; a recipient's own hand is attached separately by
//! the orchestrator (see [`crate::protocol`]).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::cards_types::{Card, Rank};
use super::state::{BidState, SeatIdx, Team, TrucoState};

/// Public info about one engine seat: identity and card count only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSeatPublic {
    pub user_id: super::state::UserId,
    pub nickname: String,
    pub team: Team,
    pub card_count: usize,
}

/// One play into a trick, in wire shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayPublic {
    pub player: SeatIdx,
    pub card: Card,
}

/// Everything about a match that is public to all four seats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchPublic {
    pub id: Uuid,
    pub score: [u16; 2],
    pub stake: u8,
    pub vira: Card,
    pub manilha: Rank,
    pub turn: SeatIdx,
    pub subround: u8,
    pub trick: Vec<PlayPublic>,
    pub trick_wins: [u8; 2],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_bid: Option<SeatIdx>,
    pub hand_history: Vec<Vec<PlayPublic>>,
    pub over: bool,
    pub seats: Vec<MatchSeatPublic>,
}

impl MatchPublic {
    pub fn from_state(state: &TrucoState) -> Self {
        let to_public = |plays: &[(SeatIdx, Card)]| {
            plays
                .iter()
                .map(|&(player, card)| PlayPublic { player, card })
                .collect::<Vec<_>>()
        };
        Self {
            id: state.id,
            score: state.score,
            stake: state.stake(),
            vira: state.vira,
            manilha: state.manilha(),
            turn: state.turn,
            subround: state.subround,
            trick: to_public(&state.trick),
            trick_wins: state.trick_wins,
            pending_bid: match state.bid {
                BidState::NoBid => None,
                BidState::Pending { requested_by } => Some(requested_by),
            },
            hand_history: state.hand_history.iter().map(|t| to_public(t)).collect(),
            over: state.over,
            seats: state
                .seats
                .iter()
                .map(|s| MatchSeatPublic {
                    user_id: s.user_id.clone(),
                    nickname: s.nickname.clone(),
                    team: s.team,
                    card_count: s.hand.len(),
                })
                .collect(),
        }
    }
}
