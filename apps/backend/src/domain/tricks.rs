//! Trick play: turn enforcement, trick resolution, hand and match end.

use super::cards_types::Card;
use super::ranking::card_power;
use super::state::{next_seat, SeatIdx, Team, TrucoState, SEATS, SUBROUNDS};
use crate::errors::domain::{DomainError, ValidationKind};

/// What a successful play changed, for orchestration and notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlayOutcome {
    pub trick_completed: bool,
    pub trick_winner: Option<SeatIdx>,
    pub hand_ended: bool,
    pub hand_winner: Option<Team>,
    pub match_over: bool,
}

/// Play `card` from `seat` into the current trick.
///
/// On the fourth play the trick resolves: the strictly strongest card wins
/// (first played wins exact power ties), the winner's team takes the trick
/// and the winner leads next. A hand ends when a team reaches two trick-wins
/// or the third sub-round completes; the leading team is then awarded the
/// current stake.
pub fn play_card(
    state: &mut TrucoState,
    seat: SeatIdx,
    card: Card,
) -> Result<PlayOutcome, DomainError> {
    if state.over {
        return Err(DomainError::validation(
            ValidationKind::MatchAlreadyOver,
            "match is already over",
        ));
    }
    if state.turn != seat {
        return Err(DomainError::validation(
            ValidationKind::NotYourTurn,
            "not your turn",
        ));
    }

    let hand = &mut state.seats[seat as usize].hand;
    let Some(pos) = hand.iter().position(|&c| c == card) else {
        return Err(DomainError::validation(
            ValidationKind::CardNotInHand,
            format!("card {card} not in hand"),
        ));
    };
    let played = hand.remove(pos);
    state.trick.push((seat, played));
    state.turn = next_seat(seat);

    let mut outcome = PlayOutcome::default();
    if state.trick.len() < SEATS {
        return Ok(outcome);
    }

    // Trick complete: resolve, hand the lead to the winner.
    let winner = resolve_trick(state);
    let winner_team = state.seats[winner as usize].team;
    state.trick_wins[winner_team as usize] += 1;
    state.trick_winners.push(winner);
    let finished = std::mem::take(&mut state.trick);
    state.hand_history.push(finished);
    state.turn = winner;

    outcome.trick_completed = true;
    outcome.trick_winner = Some(winner);

    let hand_over = state.trick_wins.iter().any(|&w| w == 2) || state.subround == SUBROUNDS;
    if hand_over {
        let hand_winner = state.leading_team();
        state.conclude_hand(hand_winner);
        outcome.hand_ended = true;
        outcome.hand_winner = Some(hand_winner);
        outcome.match_over = state.over;
    } else {
        state.subround += 1;
    }

    Ok(outcome)
}

/// Winning seat of the just-completed trick: strictly maximum power under
/// the manilha rule, first occurrence on exact ties.
fn resolve_trick(state: &TrucoState) -> SeatIdx {
    let manilha = state.manilha();
    let mut best_seat = state.trick[0].0;
    let mut best_power = card_power(state.trick[0].1, manilha);
    for &(seat, card) in &state.trick[1..] {
        let power = card_power(card, manilha);
        if power > best_power {
            best_power = power;
            best_seat = seat;
        }
    }
    best_seat
}
