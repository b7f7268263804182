use super::bidding::{answer_truco, request_truco, TrucoAnswer};
use super::state::BidState;
use super::test_state_helpers::match_with_hands;
use crate::errors::domain::{DomainError, ValidationKind};

fn fresh_match() -> super::state::TrucoState {
    match_with_hands(
        [
            &["7C", "6C", "4S"],
            &["AS", "QH", "4D"],
            &["KD", "JH", "6H"],
            &["2C", "QD", "6S"],
        ],
        "4C",
    )
}

#[test]
fn request_sets_pending_bid() {
    let mut state = fresh_match();
    request_truco(&mut state, 1).unwrap();
    assert_eq!(state.bid, BidState::Pending { requested_by: 1 });

    let err = request_truco(&mut state, 3).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::BidAlreadyPending, _)
    ));
}

#[test]
fn request_requires_room_to_raise() {
    let mut state = fresh_match();
    // Stake 9 is the second-to-last rung; no request may start there.
    state.stake_idx = 3;
    let err = request_truco(&mut state, 0).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::BidLimitReached, _)
    ));
    assert_eq!(state.bid, BidState::NoBid);
}

#[test]
fn answer_requires_an_outstanding_bid() {
    let mut state = fresh_match();
    let err = answer_truco(&mut state, 0, TrucoAnswer::Accept).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::NoBidPending, _)
    ));
}

#[test]
fn own_team_cannot_answer() {
    let mut state = fresh_match();
    request_truco(&mut state, 1).unwrap();

    // Seat 3 shares team 1 with the requester.
    let err = answer_truco(&mut state, 3, TrucoAnswer::Accept).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::WrongTeam, _)
    ));
    // Nothing moved: bid still pending, stake unchanged.
    assert_eq!(state.bid, BidState::Pending { requested_by: 1 });
    assert_eq!(state.stake(), 1);
}

#[test]
fn accept_advances_the_stake() {
    let mut state = fresh_match();
    request_truco(&mut state, 1).unwrap();
    let outcome = answer_truco(&mut state, 0, TrucoAnswer::Accept).unwrap();

    assert!(!outcome.hand_ended);
    assert_eq!(state.stake(), 3);
    assert_eq!(state.bid, BidState::NoBid);
}

#[test]
fn raise_chain_walks_the_ladder_and_caps_at_twelve() {
    let mut state = fresh_match();
    request_truco(&mut state, 1).unwrap();

    // Each raise advances one rung and hands the bid to the answering seat.
    answer_truco(&mut state, 0, TrucoAnswer::Raise).unwrap();
    assert_eq!(state.stake(), 3);
    assert_eq!(state.bid, BidState::Pending { requested_by: 0 });

    answer_truco(&mut state, 1, TrucoAnswer::Raise).unwrap();
    assert_eq!(state.stake(), 6);

    answer_truco(&mut state, 0, TrucoAnswer::Raise).unwrap();
    assert_eq!(state.stake(), 9);
    assert_eq!(state.bid, BidState::Pending { requested_by: 0 });

    // The proposal on the table is 12; raising past it must fail cleanly.
    let err = answer_truco(&mut state, 1, TrucoAnswer::Raise).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::CannotRaiseFurther, _)
    ));
    assert_eq!(state.stake(), 9);
    assert_eq!(state.bid, BidState::Pending { requested_by: 0 });

    // Accepting the final proposal lands exactly on the top rung.
    answer_truco(&mut state, 1, TrucoAnswer::Accept).unwrap();
    assert_eq!(state.stake(), 12);
    assert_eq!(state.bid, BidState::NoBid);
}

#[test]
fn running_concedes_the_hand_at_the_current_stake() {
    let mut state = fresh_match();
    request_truco(&mut state, 1).unwrap();
    let outcome = answer_truco(&mut state, 2, TrucoAnswer::Run).unwrap();

    assert!(outcome.hand_ended);
    assert_eq!(outcome.hand_winner, Some(1));
    assert!(!outcome.match_over);
    // Pre-proposal stake (1) awarded to the requester's team, then a redeal.
    assert_eq!(state.score, [0, 1]);
    assert_eq!(state.stake(), 1);
    assert_eq!(state.bid, BidState::NoBid);
    assert_eq!(state.dealer, 1);
}

#[test]
fn running_can_end_the_match() {
    let mut state = fresh_match();
    state.score = [0, 11];
    request_truco(&mut state, 1).unwrap();
    let outcome = answer_truco(&mut state, 0, TrucoAnswer::Run).unwrap();

    assert!(outcome.match_over);
    assert!(state.over);
    assert_eq!(state.score, [0, 12]);
}
