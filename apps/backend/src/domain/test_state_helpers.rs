use uuid::Uuid;

use super::fixtures::CardFixtures;
use super::state::{team_for_seat, SeatAssignment, TrucoState, UserId};

/// Build a started match, then pin hands and vira to hardcoded tokens so
/// trick outcomes are fully scripted. The internal RNG stays seeded, so any
/// redeal after a forced hand end remains deterministic.
pub(super) fn match_with_hands(hands: [&[&str]; 4], vira: &str) -> TrucoState {
    let players = [0u8, 1, 2, 3].map(|i| SeatAssignment {
        user_id: UserId(format!("user-{i}")),
        nickname: format!("player-{i}"),
        team: team_for_seat(i),
    });
    let mut state = TrucoState::start(Uuid::new_v4(), players, 99);
    for (seat, tokens) in state.seats.iter_mut().zip(hands) {
        seat.hand = CardFixtures::parse_hardcoded(tokens);
    }
    state.vira = vira.parse().expect("hardcoded valid vira token");
    state
}
