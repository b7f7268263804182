use super::state::{BidState, TrucoState};
use super::test_state_helpers::match_with_hands;
use super::tricks::play_card;
use crate::errors::domain::{DomainError, ValidationKind};

fn play(state: &mut TrucoState, seat: u8, token: &str) -> super::tricks::PlayOutcome {
    play_card(state, seat, token.parse().expect("valid token")).expect("legal play")
}

#[test]
fn play_shrinks_hand_and_advances_turn() {
    // vira 4C -> manilha is Five; no fives dealt here.
    let mut state = match_with_hands(
        [
            &["7C", "6C", "4S"],
            &["AS", "QH", "4D"],
            &["KD", "JH", "6H"],
            &["2C", "QD", "6S"],
        ],
        "4C",
    );
    assert_eq!(state.dealer, 0);
    assert_eq!(state.turn, 1);

    let outcome = play(&mut state, 1, "AS");
    assert!(!outcome.trick_completed);
    assert_eq!(state.seats[1].hand.len(), 2);
    assert_eq!(state.turn, 2);
    assert_eq!(state.trick.len(), 1);
}

#[test]
fn play_card_rejects_illegal_actions() {
    let mut state = match_with_hands(
        [
            &["7C", "6C", "4S"],
            &["AS", "QH", "4D"],
            &["KD", "JH", "6H"],
            &["2C", "QD", "6S"],
        ],
        "4C",
    );

    // Seat 0 acts while it is seat 1's turn.
    let err = play_card(&mut state, 0, "7C".parse().unwrap()).unwrap_err();
    assert_eq!(
        err,
        DomainError::validation(ValidationKind::NotYourTurn, "not your turn")
    );

    // Seat 1 plays a card it does not hold.
    let err = play_card(&mut state, 1, "KD".parse().unwrap()).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::CardNotInHand, _)
    ));

    // Errors leave the state untouched.
    assert_eq!(state.turn, 1);
    assert_eq!(state.seats[1].hand.len(), 3);
    assert!(state.trick.is_empty());
}

#[test]
fn strongest_plain_rank_takes_the_trick() {
    let mut state = match_with_hands(
        [
            &["7C", "6C", "4S"],
            &["AS", "QH", "4D"],
            &["KD", "JH", "6H"],
            &["2C", "QD", "6S"],
        ],
        "4C",
    );

    play(&mut state, 1, "AS");
    play(&mut state, 2, "KD");
    play(&mut state, 3, "2C");
    let outcome = play(&mut state, 0, "7C");

    assert!(outcome.trick_completed);
    assert_eq!(outcome.trick_winner, Some(3));
    // Winner's team takes the trick-win and leads the next one.
    assert_eq!(state.trick_wins, [0, 1]);
    assert_eq!(state.turn, 3);
    assert_eq!(state.subround, 2);
    assert!(state.trick.is_empty());
    assert_eq!(state.hand_history.len(), 1);
}

#[test]
fn manilhas_outrank_everything_and_tie_break_by_suit() {
    // vira 4C -> manilha Five; two manilhas land in the same trick.
    let mut state = match_with_hands(
        [
            &["4S", "6C", "7C"],
            &["5C", "QH", "4D"],
            &["3D", "JH", "6H"],
            &["5D", "QD", "6S"],
        ],
        "4C",
    );

    play(&mut state, 1, "5C");
    play(&mut state, 2, "3D");
    play(&mut state, 3, "5D");
    let outcome = play(&mut state, 0, "4S");

    // 5D beats 5C: diamonds outrank clubs among manilhas; both beat the 3.
    assert_eq!(outcome.trick_winner, Some(3));
}

#[test]
fn equal_plain_ranks_resolve_to_first_played() {
    let mut state = match_with_hands(
        [
            &["6S", "6C", "4S"],
            &["7C", "QH", "4D"],
            &["7D", "JH", "6H"],
            &["4H", "QD", "QS"],
        ],
        "4C",
    );

    play(&mut state, 1, "7C");
    play(&mut state, 2, "7D");
    play(&mut state, 3, "4H");
    let outcome = play(&mut state, 0, "6S");

    // 7C and 7D have exactly equal power; the first played wins.
    assert_eq!(outcome.trick_winner, Some(1));
}

#[test]
fn two_trick_wins_end_the_hand_and_redeal() {
    let mut state = match_with_hands(
        [
            &["4S", "4H", "6C"],
            &["3C", "3D", "7H"],
            &["6D", "7S", "QC"],
            &["QS", "JD", "KH"],
        ],
        "4C",
    );

    play(&mut state, 1, "3C");
    play(&mut state, 2, "6D");
    play(&mut state, 3, "QS");
    play(&mut state, 0, "4S");
    assert_eq!(state.trick_wins, [0, 1]);

    play(&mut state, 1, "3D");
    play(&mut state, 2, "7S");
    play(&mut state, 3, "JD");
    let outcome = play(&mut state, 0, "4H");

    assert!(outcome.hand_ended);
    assert_eq!(outcome.hand_winner, Some(1));
    assert!(!outcome.match_over);

    // Stake 1 awarded, then a fresh hand: dealer rotated, per-hand state reset.
    assert_eq!(state.score, [0, 1]);
    assert_eq!(state.dealer, 1);
    assert_eq!(state.turn, 2);
    assert_eq!(state.subround, 1);
    assert_eq!(state.trick_wins, [0, 0]);
    assert_eq!(state.bid, BidState::NoBid);
    assert!(state.hand_history.is_empty());
    for seat in &state.seats {
        assert_eq!(seat.hand.len(), 3);
    }
}

#[test]
fn third_subround_forces_the_hand_to_resolve() {
    let mut state = match_with_hands(
        [
            &["3S", "4H", "6C"],
            &["2C", "7H", "4D"],
            &["6D", "7S", "QC"],
            &["QS", "JD", "KH"],
        ],
        "4C",
    );

    // Trick 1 to seat 0 (team 0).
    play(&mut state, 1, "2C");
    play(&mut state, 2, "6D");
    play(&mut state, 3, "QS");
    play(&mut state, 0, "3S");
    assert_eq!(state.trick_wins, [1, 0]);

    // Trick 2 to seat 3 (team 1): one win each.
    play(&mut state, 0, "4H");
    play(&mut state, 1, "7H");
    play(&mut state, 2, "7S");
    play(&mut state, 3, "JD");
    assert_eq!(state.trick_wins, [1, 1]);
    assert_eq!(state.subround, 3);

    // Trick 3 decides the hand.
    play(&mut state, 3, "KH");
    play(&mut state, 0, "6C");
    play(&mut state, 1, "4D");
    let outcome = play(&mut state, 2, "QC");

    assert!(outcome.hand_ended);
    assert_eq!(outcome.hand_winner, Some(1));
    assert_eq!(state.score, [0, 1]);
}

#[test]
fn reaching_twelve_points_ends_the_match() {
    let mut state = match_with_hands(
        [
            &["3S", "3D", "4H"],
            &["4D", "6H", "7H"],
            &["QC", "KD", "6S"],
            &["JD", "KH", "AS"],
        ],
        "4C",
    );
    state.score = [11, 0];

    play(&mut state, 1, "4D");
    play(&mut state, 2, "QC");
    play(&mut state, 3, "JD");
    play(&mut state, 0, "3S");

    play(&mut state, 0, "3D");
    play(&mut state, 1, "6H");
    play(&mut state, 2, "KD");
    let outcome = play(&mut state, 3, "KH");

    assert!(outcome.hand_ended);
    assert!(outcome.match_over);
    assert_eq!(state.score, [12, 0]);
    assert!(state.over);

    // Terminal matches refuse further plays.
    let err = play_card(&mut state, 0, "4H".parse().unwrap()).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::MatchAlreadyOver, _)
    ));
}

#[test]
fn tied_trick_wins_fall_back_to_first_trick_winner() {
    let mut state = match_with_hands(
        [
            &["7C", "6C", "4S"],
            &["AS", "QH", "4D"],
            &["KD", "JH", "6H"],
            &["2C", "QD", "6S"],
        ],
        "4C",
    );
    // Unreachable through play (three tricks always split 2-1 or 3-0), but
    // the policy must still be deterministic.
    state.trick_wins = [1, 1];
    state.trick_winners = vec![2];
    assert_eq!(state.leading_team(), 0);

    state.trick_winners = vec![3];
    assert_eq!(state.leading_team(), 1);
}
