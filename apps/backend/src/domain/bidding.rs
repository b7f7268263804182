//! Truco bidding: stake escalation along the fixed ladder.
//!
//! The accepted stake is `STAKE_LADDER[stake_idx]`; an outstanding bid
//! always proposes the next rung. Raising passes the bid back to the other
//! team, so a raise is only legal while the rung after the proposal exists —
//! the eventual acceptance must never run off the ladder.

use serde::{Deserialize, Serialize};

use super::state::{BidState, SeatIdx, Team, TrucoState, STAKE_LADDER};
use crate::errors::domain::{DomainError, ValidationKind};

/// Reply to an outstanding truco bid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrucoAnswer {
    Accept,
    Raise,
    Run,
}

/// What answering a bid changed, mirroring [`super::tricks::PlayOutcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BidOutcome {
    pub hand_ended: bool,
    pub hand_winner: Option<Team>,
    pub match_over: bool,
}

/// Request a truco, proposing the next rung of the stake ladder.
pub fn request_truco(state: &mut TrucoState, seat: SeatIdx) -> Result<(), DomainError> {
    if state.over {
        return Err(DomainError::validation(
            ValidationKind::MatchAlreadyOver,
            "match is already over",
        ));
    }
    if let BidState::Pending { .. } = state.bid {
        return Err(DomainError::validation(
            ValidationKind::BidAlreadyPending,
            "a truco request is already outstanding",
        ));
    }
    // Room must remain to raise at least once more.
    if state.stake_idx + 2 >= STAKE_LADDER.len() {
        return Err(DomainError::validation(
            ValidationKind::BidLimitReached,
            "stake too high to request truco",
        ));
    }
    state.bid = BidState::Pending { requested_by: seat };
    Ok(())
}

/// Answer the outstanding bid. Only the team opposing the requester may
/// answer; errors leave the state untouched.
pub fn answer_truco(
    state: &mut TrucoState,
    seat: SeatIdx,
    answer: TrucoAnswer,
) -> Result<BidOutcome, DomainError> {
    if state.over {
        return Err(DomainError::validation(
            ValidationKind::MatchAlreadyOver,
            "match is already over",
        ));
    }
    let BidState::Pending { requested_by } = state.bid else {
        return Err(DomainError::validation(
            ValidationKind::NoBidPending,
            "no truco request outstanding",
        ));
    };
    let requester_team = state.seats[requested_by as usize].team;
    if state.seats[seat as usize].team == requester_team {
        return Err(DomainError::validation(
            ValidationKind::WrongTeam,
            "cannot answer your own team's truco",
        ));
    }

    let mut outcome = BidOutcome::default();
    match answer {
        TrucoAnswer::Run => {
            // Requester's team takes the hand at the pre-proposal stake.
            state.bid = BidState::NoBid;
            state.conclude_hand(requester_team);
            outcome.hand_ended = true;
            outcome.hand_winner = Some(requester_team);
            outcome.match_over = state.over;
        }
        TrucoAnswer::Accept => {
            state.stake_idx += 1;
            state.bid = BidState::NoBid;
        }
        TrucoAnswer::Raise => {
            // The raised proposal must leave room for the other team to accept.
            if state.stake_idx + 2 >= STAKE_LADDER.len() {
                return Err(DomainError::validation(
                    ValidationKind::CannotRaiseFurther,
                    "stake ladder exhausted",
                ));
            }
            state.stake_idx += 1;
            state.bid = BidState::Pending { requested_by: seat };
        }
    }
    Ok(outcome)
}
