//! Error codes surfaced to clients.
//!
//! Add new codes here; never pass ad-hoc strings as error codes. All codes
//! are SCREAMING_SNAKE_CASE and map 1:1 to the strings that appear in
//! rejection events.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::domain::{ConflictKind, DomainError, NotFoundKind, ValidationKind};

/// Centralized error codes for action rejections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Match rule violations
    NotYourTurn,
    MatchAlreadyOver,
    CardNotInHand,
    BidAlreadyPending,
    BidLimitReached,
    NoBidPending,
    WrongTeam,
    CannotRaiseFurther,
    ParseCard,
    ValidationError,

    // Room lifecycle
    RoomNotFound,
    RoomFull,
    RoomNotReady,
    SeatTaken,
    MatchActive,
    MatchNotFound,
    SeatNotFound,

    // Fallback
    Conflict,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::NotYourTurn => "NOT_YOUR_TURN",
            ErrorCode::MatchAlreadyOver => "MATCH_ALREADY_OVER",
            ErrorCode::CardNotInHand => "CARD_NOT_IN_HAND",
            ErrorCode::BidAlreadyPending => "BID_ALREADY_PENDING",
            ErrorCode::BidLimitReached => "BID_LIMIT_REACHED",
            ErrorCode::NoBidPending => "NO_BID_PENDING",
            ErrorCode::WrongTeam => "WRONG_TEAM",
            ErrorCode::CannotRaiseFurther => "CANNOT_RAISE_FURTHER",
            ErrorCode::ParseCard => "PARSE_CARD",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::RoomNotFound => "ROOM_NOT_FOUND",
            ErrorCode::RoomFull => "ROOM_FULL",
            ErrorCode::RoomNotReady => "ROOM_NOT_READY",
            ErrorCode::SeatTaken => "SEAT_TAKEN",
            ErrorCode::MatchActive => "MATCH_ACTIVE",
            ErrorCode::MatchNotFound => "MATCH_NOT_FOUND",
            ErrorCode::SeatNotFound => "SEAT_NOT_FOUND",
            ErrorCode::Conflict => "CONFLICT",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&DomainError> for ErrorCode {
    fn from(err: &DomainError) -> Self {
        match err {
            DomainError::Validation(kind, _) => match kind {
                ValidationKind::NotYourTurn => ErrorCode::NotYourTurn,
                ValidationKind::MatchAlreadyOver => ErrorCode::MatchAlreadyOver,
                ValidationKind::CardNotInHand => ErrorCode::CardNotInHand,
                ValidationKind::BidAlreadyPending => ErrorCode::BidAlreadyPending,
                ValidationKind::BidLimitReached => ErrorCode::BidLimitReached,
                ValidationKind::NoBidPending => ErrorCode::NoBidPending,
                ValidationKind::WrongTeam => ErrorCode::WrongTeam,
                ValidationKind::CannotRaiseFurther => ErrorCode::CannotRaiseFurther,
                ValidationKind::RoomNotReady => ErrorCode::RoomNotReady,
                ValidationKind::ParseCard => ErrorCode::ParseCard,
                ValidationKind::Other(_) => ErrorCode::ValidationError,
            },
            DomainError::NotFound(kind, _) => match kind {
                NotFoundKind::Room => ErrorCode::RoomNotFound,
                NotFoundKind::Match => ErrorCode::MatchNotFound,
                NotFoundKind::Seat => ErrorCode::SeatNotFound,
                NotFoundKind::Other(_) => ErrorCode::RoomNotFound,
            },
            DomainError::Conflict(kind, _) => match kind {
                ConflictKind::RoomFull => ErrorCode::RoomFull,
                ConflictKind::SeatTaken => ErrorCode::SeatTaken,
                ConflictKind::MatchActive => ErrorCode::MatchActive,
                ConflictKind::Other(_) => ErrorCode::Conflict,
            },
        }
    }
}
