//! Finishing turns and moving the game between years and terms.

use tracing::{debug, info};

use crate::domain::actor::Actor;
use crate::domain::assign_offices::finish_assignments;
use crate::domain::board::WardId;
use crate::domain::elections::{finish_bidding_turn, finish_reward_turn, start_elections};
use crate::domain::end_game::end_game;
use crate::domain::guards::require_phase;
use crate::domain::immigration::run_immigration;
use crate::domain::office_powers::can_use_office;
use crate::domain::rules::{is_election_year, FINAL_YEAR};
use crate::domain::state::{Game, Phase, SubPhase};
use crate::errors::domain::{DomainError, ValidationKind};

/// Result of a finish-turn request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishOutcome {
    /// Office power still unused; the player must confirm or cancel.
    NeedsConfirmation,
    /// The turn passed on.
    Advanced,
}

pub fn finish_turn(
    game: &mut Game,
    actor: &Actor,
    confirm: bool,
) -> Result<FinishOutcome, DomainError> {
    match game.phase {
        Phase::Actions => finish_action_turn(game, actor, confirm),
        Phase::Elections => finish_bidding_turn(game, actor).map(|_| FinishOutcome::Advanced),
        Phase::PlaceImmigrant | Phase::TakeFavorChip => {
            finish_reward_turn(game, actor).map(|_| FinishOutcome::Advanced)
        }
        Phase::AssignCityOffices => {
            finish_assignments(game, actor).map(|_| FinishOutcome::Advanced)
        }
        phase => Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            format!("You cannot finish a turn in the \"{phase}\" phase."),
        )),
    }
}

fn finish_action_turn(
    game: &mut Game,
    actor: &Actor,
    confirm: bool,
) -> Result<FinishOutcome, DomainError> {
    let pid = actor.require_current(game, "finish turn")?;
    let player = game.require_player(pid)?;
    if !player.performed_action {
        return Err(DomainError::validation(
            ValidationKind::NoActionPerformed,
            "You must place pieces before finishing your turn.",
        ));
    }
    if let Some(t) = game.transit {
        return Err(DomainError::validation(
            ValidationKind::ImmigrantInTransit,
            format!("You must finish moving the {} immigrant.", t.nationality),
        ));
    }
    if !confirm {
        if game.sub_phase == Some(SubPhase::OfficeWarning) {
            return Err(DomainError::validation(
                ValidationKind::FinishPending,
                "Confirm or cancel finishing your turn first.",
            ));
        }
        if can_use_office(player) {
            game.sub_phase = Some(SubPhase::OfficeWarning);
            debug!(player = pid, "Office power unused; asking for confirmation");
            return Ok(FinishOutcome::NeedsConfirmation);
        }
    }

    advance_action_turn(game, pid)?;
    Ok(FinishOutcome::Advanced)
}

/// Pass the turn on. Wrapping back to the first player ends the year.
fn advance_action_turn(game: &mut Game, pid: u8) -> Result<(), DomainError> {
    game.clear_turn_selection();
    let idx = game
        .turn_index(pid)
        .ok_or_else(|| DomainError::corrupt(format!("player {pid} missing from turn order")))?;
    let next = (idx + 1) % game.num_players();

    if next == 0 {
        if is_election_year(game.year) {
            return start_elections(game);
        }
        game.year += 1;
        info!(year = game.year, "Year started");
        run_immigration(game)?;
    }
    let next_id = game.players[next].id;
    game.require_player_mut(next_id)?.begin_turn_reset();
    game.current_player = Some(next_id);
    Ok(())
}

/// Back out of the office warning and keep playing.
pub fn cancel_finish(game: &mut Game, actor: &Actor) -> Result<(), DomainError> {
    actor.require_current(game, "cancel finishing the turn")?;
    require_phase(game, Phase::Actions)?;
    if game.sub_phase != Some(SubPhase::OfficeWarning) {
        return Err(DomainError::validation(
            ValidationKind::FinishPending,
            "There is no finish turn to cancel.",
        ));
    }
    game.sub_phase = None;
    Ok(())
}

/// Remember the ward a player is working in.
pub fn select_area(game: &mut Game, actor: &Actor, ward_id: WardId) -> Result<(), DomainError> {
    actor.require_current(game, "select a ward")?;
    game.find_ward(ward_id)?;
    game.selected_ward = Some(ward_id);
    Ok(())
}

/// After elections: the final year ends the game, otherwise the Mayor
/// hands out offices. Without a Mayor the next term starts at once.
pub fn start_city_offices_phase(game: &mut Game) -> Result<(), DomainError> {
    for p in game.players.iter_mut() {
        p.begin_turn_reset();
    }
    if game.year >= FINAL_YEAR {
        return end_game(game);
    }
    match game.mayor().map(|p| p.id) {
        Some(mayor) => {
            game.phase = Phase::AssignDeputyMayor;
            game.current_player = Some(mayor);
            Ok(())
        }
        None => start_next_term(game),
    }
}

pub fn start_next_term(game: &mut Game) -> Result<(), DomainError> {
    game.year += 1;
    for p in game.players.iter_mut() {
        p.term_reset();
    }
    for w in game.wards.iter_mut() {
        w.locked_up = false;
        w.resolved = false;
    }
    game.clear_turn_selection();
    game.transit = None;
    run_immigration(game)?;
    game.phase = Phase::Actions;
    game.current_player = game.players.first().map(|p| p.id);
    info!(year = game.year, term = game.term(), "Term started");
    Ok(())
}
