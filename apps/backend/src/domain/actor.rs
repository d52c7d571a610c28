use crate::domain::player::PlayerId;
use crate::domain::state::Game;
use crate::errors::domain::{DomainError, ValidationKind};

/// Validated identity of whoever submits an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub user_id: i64,
    pub is_admin: bool,
}

impl Actor {
    pub const fn user(user_id: i64) -> Self {
        Self {
            user_id,
            is_admin: false,
        }
    }

    pub const fn admin(user_id: i64) -> Self {
        Self {
            user_id,
            is_admin: true,
        }
    }

    /// The current player, provided this actor may act for them.
    ///
    /// Admins may act on behalf of whoever is current.
    pub fn require_current(&self, game: &Game, what: &str) -> Result<PlayerId, DomainError> {
        let current = game.current()?;
        if self.is_admin || current.user_id == self.user_id {
            Ok(current.id)
        } else {
            Err(DomainError::validation(
                ValidationKind::OutOfTurn,
                format!("Only the current player can {what}."),
            ))
        }
    }

    pub fn require_admin(&self) -> Result<(), DomainError> {
        if self.is_admin {
            Ok(())
        } else {
            Err(DomainError::validation(
                ValidationKind::AdminOnly,
                "Only an admin can edit the game directly.",
            ))
        }
    }
}
