//! Handing out city offices after a Mayor is seated.
//!
//! The Mayor names the Deputy Mayor, the Deputy Mayor names one office, and
//! the Mayor fills the rest before finishing the turn.

use tracing::debug;

use crate::domain::actor::Actor;
use crate::domain::guards::{require_office, require_phase};
use crate::domain::log::LogKind;
use crate::domain::office::Office;
use crate::domain::player::PlayerId;
use crate::domain::state::{Game, Phase};
use crate::domain::turn_flow::start_next_term;
use crate::errors::domain::{DomainError, ValidationKind};

fn invalid(detail: impl Into<String>) -> DomainError {
    DomainError::validation(ValidationKind::InvalidOfficeAssignment, detail)
}

pub fn assign_office(
    game: &mut Game,
    actor: &Actor,
    office: Office,
    target: PlayerId,
) -> Result<(), DomainError> {
    let pid = actor.require_current(game, "assign an office")?;
    {
        let player = game.require_player(pid)?;
        match game.phase {
            Phase::AssignDeputyMayor => {
                require_office(actor, player, Office::Mayor, "assign the Deputy Mayor")?;
                if office != Office::DeputyMayor {
                    return Err(invalid("You must assign the Deputy Mayor office first."));
                }
            }
            Phase::DeputyMayorAssignOffice => {
                require_office(actor, player, Office::DeputyMayor, "assign an office")?;
            }
            Phase::AssignCityOffices => {
                require_office(actor, player, Office::Mayor, "assign city offices")?;
            }
            phase => {
                return Err(DomainError::validation(
                    ValidationKind::PhaseMismatch,
                    format!("You cannot assign offices in the \"{phase}\" phase."),
                ))
            }
        }
        if !office.is_assignable() {
            return Err(invalid("The Mayor office cannot be assigned."));
        }
        if let Some(holder) = game.office_holder(office) {
            return Err(invalid(format!(
                "{} has already been assigned the {office} office.",
                holder.name
            )));
        }
        let recipient = game.find_target(target)?;
        if let Some(held) = recipient.office {
            return Err(invalid(format!(
                "{} already holds the {held} office.",
                recipient.name
            )));
        }
    }

    game.require_player_mut(target)?.office = Some(office);
    debug!(player = pid, target, %office, "Assigned office");
    game.append_log(Some(pid), Some(target), LogKind::AssignedOffice { office });

    match game.phase {
        Phase::AssignDeputyMayor => {
            game.phase = Phase::DeputyMayorAssignOffice;
            game.current_player = Some(target);
        }
        Phase::DeputyMayorAssignOffice => {
            game.phase = Phase::AssignCityOffices;
            game.current_player = game.mayor().map(|p| p.id);
        }
        _ => {}
    }
    if game.all_players_have_office() {
        game.current_mut()?.performed_action = true;
    }
    Ok(())
}

/// The Mayor finishes once every player holds an office.
pub fn finish_assignments(game: &mut Game, actor: &Actor) -> Result<(), DomainError> {
    require_phase(game, Phase::AssignCityOffices)?;
    actor.require_current(game, "finish turn")?;
    if !game.all_players_have_office() {
        return Err(DomainError::validation(
            ValidationKind::NoActionPerformed,
            "You must assign all offices before finishing your turn.",
        ));
    }
    start_next_term(game)
}
