//! Error codes for the Tammany Hall engine.
//!
//! This module defines all error codes surfaced by the service boundary.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! handed to callers.

use core::fmt;

use crate::errors::domain::ValidationKind;

/// Centralized error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Rule validation
    /// Not the acting player's turn
    OutOfTurn,
    /// Action not allowed in the current phase
    PhaseMismatch,
    /// Turn-ending action already taken
    AlreadyPerformedAction,
    /// Turn cannot end before an action
    NoActionPerformed,
    /// Unknown or inactive ward
    InvalidWard,
    /// Ward is locked up for the term
    WardLocked,
    /// Wrong number of bosses/immigrants
    InvalidPieceCount,
    /// Castle Garden has no immigrant of that nationality
    CastleGardenEmpty,
    /// Immigrant bag has no cube of that nationality
    ImmigrantBagEmpty,
    /// Ward would lose its last immigrant
    LastImmigrant,
    /// Ward has no immigrant of that nationality
    NoSuchImmigrant,
    /// Acting player does not hold the required office
    WrongOffice,
    /// Office power already used this turn
    OfficeAlreadyUsed,
    /// Office power attempted mid-placement
    MidPlacement,
    /// Council President lock-up limit reached
    LockupLimit,
    /// Immigrant move in progress
    ImmigrantInTransit,
    /// Wards are not adjacent
    NotAdjacent,
    /// Invalid bid
    InvalidBid,
    /// Not enough favor chips
    InsufficientChips,
    /// Slander not permitted
    SlanderNotAllowed,
    /// Slander aimed at an invalid player or ward
    InvalidSlanderTarget,
    /// Office assignment rejected
    InvalidOfficeAssignment,
    /// Finish-turn confirmation pending
    FinishPending,
    /// Unknown player
    InvalidPlayer,
    /// Admin privileges required
    AdminOnly,
    /// The game has ended
    GameOver,
    /// General validation error
    ValidationError,

    // Resource Not Found
    /// Game not found
    GameNotFound,
    /// Player not found
    PlayerNotFound,
    /// General not found error
    NotFound,

    // Conflicts
    /// Optimistic lock conflict
    OptimisticLock,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // System Errors
    /// Malformed action parameters
    MalformedInput,
    /// Internal error
    Internal,
    /// Configuration error
    ConfigError,
    /// Data corruption detected
    DataCorruption,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OutOfTurn => "OUT_OF_TURN",
            Self::PhaseMismatch => "PHASE_MISMATCH",
            Self::AlreadyPerformedAction => "ALREADY_PERFORMED_ACTION",
            Self::NoActionPerformed => "NO_ACTION_PERFORMED",
            Self::InvalidWard => "INVALID_WARD",
            Self::WardLocked => "WARD_LOCKED",
            Self::InvalidPieceCount => "INVALID_PIECE_COUNT",
            Self::CastleGardenEmpty => "CASTLE_GARDEN_EMPTY",
            Self::ImmigrantBagEmpty => "IMMIGRANT_BAG_EMPTY",
            Self::LastImmigrant => "LAST_IMMIGRANT",
            Self::NoSuchImmigrant => "NO_SUCH_IMMIGRANT",
            Self::WrongOffice => "WRONG_OFFICE",
            Self::OfficeAlreadyUsed => "OFFICE_ALREADY_USED",
            Self::MidPlacement => "MID_PLACEMENT",
            Self::LockupLimit => "LOCKUP_LIMIT",
            Self::ImmigrantInTransit => "IMMIGRANT_IN_TRANSIT",
            Self::NotAdjacent => "NOT_ADJACENT",
            Self::InvalidBid => "INVALID_BID",
            Self::InsufficientChips => "INSUFFICIENT_CHIPS",
            Self::SlanderNotAllowed => "SLANDER_NOT_ALLOWED",
            Self::InvalidSlanderTarget => "INVALID_SLANDER_TARGET",
            Self::InvalidOfficeAssignment => "INVALID_OFFICE_ASSIGNMENT",
            Self::FinishPending => "FINISH_PENDING",
            Self::InvalidPlayer => "INVALID_PLAYER",
            Self::AdminOnly => "ADMIN_ONLY",
            Self::GameOver => "GAME_OVER",
            Self::ValidationError => "VALIDATION_ERROR",

            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::OptimisticLock => "OPTIMISTIC_LOCK",
            Self::Conflict => "CONFLICT",

            Self::MalformedInput => "MALFORMED_INPUT",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
            Self::DataCorruption => "DATA_CORRUPTION",
        }
    }
}

impl From<&ValidationKind> for ErrorCode {
    fn from(kind: &ValidationKind) -> Self {
        match kind {
            ValidationKind::OutOfTurn => Self::OutOfTurn,
            ValidationKind::PhaseMismatch => Self::PhaseMismatch,
            ValidationKind::AlreadyPerformedAction => Self::AlreadyPerformedAction,
            ValidationKind::NoActionPerformed => Self::NoActionPerformed,
            ValidationKind::InvalidWard => Self::InvalidWard,
            ValidationKind::WardLocked => Self::WardLocked,
            ValidationKind::InvalidPieceCount => Self::InvalidPieceCount,
            ValidationKind::CastleGardenEmpty => Self::CastleGardenEmpty,
            ValidationKind::ImmigrantBagEmpty => Self::ImmigrantBagEmpty,
            ValidationKind::LastImmigrant => Self::LastImmigrant,
            ValidationKind::NoSuchImmigrant => Self::NoSuchImmigrant,
            ValidationKind::WrongOffice => Self::WrongOffice,
            ValidationKind::OfficeAlreadyUsed => Self::OfficeAlreadyUsed,
            ValidationKind::MidPlacement => Self::MidPlacement,
            ValidationKind::LockupLimit => Self::LockupLimit,
            ValidationKind::ImmigrantInTransit => Self::ImmigrantInTransit,
            ValidationKind::NotAdjacent => Self::NotAdjacent,
            ValidationKind::InvalidBid => Self::InvalidBid,
            ValidationKind::InsufficientChips => Self::InsufficientChips,
            ValidationKind::SlanderNotAllowed => Self::SlanderNotAllowed,
            ValidationKind::InvalidSlanderTarget => Self::InvalidSlanderTarget,
            ValidationKind::InvalidOfficeAssignment => Self::InvalidOfficeAssignment,
            ValidationKind::FinishPending => Self::FinishPending,
            ValidationKind::InvalidPlayer => Self::InvalidPlayer,
            ValidationKind::AdminOnly => Self::AdminOnly,
            ValidationKind::GameOver => Self::GameOver,
            ValidationKind::Other(_) => Self::ValidationError,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
