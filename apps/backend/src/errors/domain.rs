//! Domain-level error type used across the engine and services.
//!
//! These errors are expected, recoverable, and attributable to the acting
//! caller. They are reported back for that one action only and never mutate
//! shared state. Transport layers map them to wire codes via
//! [`crate::errors::ErrorCode`].

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Rule violations raised while validating a player action.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    NotYourTurn,
    MatchAlreadyOver,
    CardNotInHand,
    BidAlreadyPending,
    BidLimitReached,
    NoBidPending,
    WrongTeam,
    CannotRaiseFurther,
    RoomNotReady,
    ParseCard,
    Other(String),
}

/// Missing resource in domain terms.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Room,
    Match,
    Seat,
    Other(String),
}

/// Semantic conflicts with current room or match state.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConflictKind {
    RoomFull,
    SeatTaken,
    MatchActive,
    Other(String),
}

/// Central domain error type.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input/user validation or game rule violation.
    Validation(ValidationKind, String),
    /// Missing resource in domain terms.
    NotFound(NotFoundKind, String),
    /// Semantic conflict.
    Conflict(ConflictKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation {kind:?}: {d}"),
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
            DomainError::Conflict(kind, d) => write!(f, "conflict {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn validation_other(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        Self::Validation(ValidationKind::Other(detail.clone()), detail)
    }

    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }

    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }
}
