//! Preconditions shared by the action validators.

use crate::domain::actor::Actor;
use crate::domain::office::Office;
use crate::domain::player::Player;
use crate::domain::state::{Game, Phase, SubPhase};
use crate::domain::ward::Ward;
use crate::errors::domain::{DomainError, ValidationKind};

pub fn require_phase(game: &Game, phase: Phase) -> Result<(), DomainError> {
    if game.phase == phase {
        Ok(())
    } else {
        Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            format!(
                "Expected \"{phase}\" phase but have \"{}\" phase.",
                game.phase
            ),
        ))
    }
}

/// Only confirming or cancelling is allowed while the office warning shows.
pub fn require_no_office_warning(game: &Game) -> Result<(), DomainError> {
    if game.sub_phase == Some(SubPhase::OfficeWarning) {
        Err(DomainError::validation(
            ValidationKind::FinishPending,
            "Confirm or cancel finishing your turn first.",
        ))
    } else {
        Ok(())
    }
}

pub fn require_not_performed(player: &Player) -> Result<(), DomainError> {
    if player.performed_action {
        Err(DomainError::validation(
            ValidationKind::AlreadyPerformedAction,
            "You have already performed an action.",
        ))
    } else {
        Ok(())
    }
}

pub fn require_office_unused(player: &Player) -> Result<(), DomainError> {
    if player.used_office {
        Err(DomainError::validation(
            ValidationKind::OfficeAlreadyUsed,
            "You have already used your office power.",
        ))
    } else {
        Ok(())
    }
}

pub fn require_unlocked(ward: &Ward, what: &str) -> Result<(), DomainError> {
    if ward.locked_up {
        Err(DomainError::validation(
            ValidationKind::WardLocked,
            format!("You can't {what} a locked ward."),
        ))
    } else {
        Ok(())
    }
}

/// Office powers and slander go before or after placing pieces, not between.
pub fn require_not_mid_placement(player: &Player, what: &str) -> Result<(), DomainError> {
    if player.is_mid_placement() {
        Err(DomainError::validation(
            ValidationKind::MidPlacement,
            format!("You must {what} before or after the placing pieces action, not during."),
        ))
    } else {
        Ok(())
    }
}

/// The acting player must hold `office`; admins bypass the check.
pub fn require_office(
    actor: &Actor,
    player: &Player,
    office: Office,
    what: &str,
) -> Result<(), DomainError> {
    if actor.is_admin || player.holds(office) {
        return Ok(());
    }
    let held = player.office.map(|o| o.as_str()).unwrap_or("holder of no office");
    Err(DomainError::validation(
        ValidationKind::WrongOffice,
        format!("You are the {held}.  Only the {office} can {what}."),
    ))
}
