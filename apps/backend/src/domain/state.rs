//! Match state container and seat/turn math.

use std::fmt;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::cards_types::{Card, Rank};
use super::dealing::{deal_hand, Deal};
use super::ranking::manilha_rank;

pub const SEATS: usize = 4;
pub const SUBROUNDS: u8 = 3;
pub const TARGET_SCORE: u16 = 12;

/// Point values a hand can be worth, escalated by truco bidding.
pub const STAKE_LADDER: [u8; 5] = [1, 3, 6, 9, 12];

pub type SeatIdx = u8; // 0..=3
pub type Team = u8; // 0 | 1

/// Stable authenticated identity, issued by the external auth provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Identity plus display name, as resolved by the auth collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerIdentity {
    pub user_id: UserId,
    pub nickname: String,
}

/// Seat the player to the left (0 → 1 → 2 → 3 → 0).
#[inline]
pub fn next_seat(seat: SeatIdx) -> SeatIdx {
    (seat + 1) % SEATS as SeatIdx
}

/// Default team by seat parity: seats 0,2 vs 1,3.
#[inline]
pub fn team_for_seat(seat: SeatIdx) -> Team {
    seat % 2
}

#[inline]
pub fn opposing_team(team: Team) -> Team {
    1 - team
}

/// Seat assignment handed to the engine when a match starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatAssignment {
    pub user_id: UserId,
    pub nickname: String,
    pub team: Team,
}

/// A seat owned by the engine while a match runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSeat {
    pub user_id: UserId,
    pub nickname: String,
    pub team: Team,
    pub hand: Vec<Card>,
}

/// Outstanding truco bid, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BidState {
    NoBid,
    Pending { requested_by: SeatIdx },
}

/// One play into the current trick.
pub type TrickPlay = (SeatIdx, Card);

/// Full per-match state. Mutated only through the engine operations in
/// [`super::tricks`] and [`super::bidding`].
#[derive(Debug, Clone)]
pub struct TrucoState {
    pub id: Uuid,
    pub seats: [MatchSeat; SEATS],
    pub dealer: SeatIdx,
    pub turn: SeatIdx,
    /// Cumulative score per team; the match ends at [`TARGET_SCORE`].
    pub score: [u16; 2],
    /// The turned-up card that fixes the manilha for this hand.
    pub vira: Card,
    pub trick: Vec<TrickPlay>,
    pub trick_wins: [u8; 2],
    /// Current sub-round within the hand (1..=3).
    pub subround: u8,
    pub bid: BidState,
    /// Index into [`STAKE_LADDER`]; the accepted stake for this hand.
    pub stake_idx: usize,
    pub over: bool,
    /// Completed tricks of the current hand, oldest first (UI replay only).
    pub hand_history: Vec<Vec<TrickPlay>>,
    /// Winning seat of each completed trick this hand; backs the tie policy.
    pub trick_winners: Vec<SeatIdx>,
    rng: ChaCha8Rng,
}

impl TrucoState {
    /// Start a fresh match: shuffle, deal 3 cards per seat, turn the vira.
    ///
    /// Dealer starts at seat 0 and first turn falls to the seat after the
    /// dealer. The seed makes the whole match's deals reproducible.
    pub fn start(id: Uuid, players: [SeatAssignment; SEATS], seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let Deal { hands, vira } = deal_hand(&mut rng);

        let mut hands = hands.into_iter();
        let seats = players.map(|p| MatchSeat {
            user_id: p.user_id,
            nickname: p.nickname,
            team: p.team,
            hand: hands.next().unwrap_or_default(),
        });

        let dealer: SeatIdx = 0;
        Self {
            id,
            seats,
            dealer,
            turn: next_seat(dealer),
            score: [0, 0],
            vira,
            trick: Vec::with_capacity(SEATS),
            trick_wins: [0, 0],
            subround: 1,
            bid: BidState::NoBid,
            stake_idx: 0,
            over: false,
            hand_history: Vec::new(),
            trick_winners: Vec::new(),
            rng,
        }
    }

    /// Manilha rank for the current hand, derived from the vira.
    #[inline]
    pub fn manilha(&self) -> Rank {
        manilha_rank(self.vira.rank)
    }

    /// The accepted stake this hand is currently worth.
    #[inline]
    pub fn stake(&self) -> u8 {
        STAKE_LADDER[self.stake_idx]
    }

    pub fn seat_of(&self, user: &UserId) -> Option<SeatIdx> {
        self.seats
            .iter()
            .position(|s| &s.user_id == user)
            .map(|i| i as SeatIdx)
    }

    /// Team with strictly more trick-wins this hand; falls back to the team
    /// that won the first completed trick. The fallback is unreachable while
    /// every trick awards exactly one team, but ties must still resolve
    /// deterministically.
    pub fn leading_team(&self) -> Team {
        match self.trick_wins[0].cmp(&self.trick_wins[1]) {
            std::cmp::Ordering::Greater => 0,
            std::cmp::Ordering::Less => 1,
            std::cmp::Ordering::Equal => self
                .trick_winners
                .first()
                .map(|&seat| self.seats[seat as usize].team)
                .unwrap_or(0),
        }
    }

    /// Award the current stake to `team` and close the hand: terminal when
    /// the score reaches [`TARGET_SCORE`], otherwise redeal.
    pub(super) fn conclude_hand(&mut self, team: Team) {
        self.score[team as usize] += u16::from(self.stake());
        if self.score[team as usize] >= TARGET_SCORE {
            self.over = true;
        } else {
            self.redeal();
        }
    }

    /// Reset all per-hand state for a fresh deal, rotating the dealer.
    fn redeal(&mut self) {
        let Deal { hands, vira } = deal_hand(&mut self.rng);
        for (seat, hand) in self.seats.iter_mut().zip(hands) {
            seat.hand = hand;
        }
        self.vira = vira;
        self.trick.clear();
        self.subround = 1;
        self.trick_wins = [0, 0];
        self.stake_idx = 0;
        self.bid = BidState::NoBid;
        self.dealer = next_seat(self.dealer);
        self.turn = next_seat(self.dealer);
        self.hand_history.clear();
        self.trick_winners.clear();
    }
}
