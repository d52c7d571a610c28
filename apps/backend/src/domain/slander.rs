//! Two-step slander of another player's bosses.
//!
//! The first step costs one favor chip and the term's slander chip. The
//! second step, if taken at all, must come before any other action, repeat
//! the same target and nationality, land in the same or an adjacent ward, and
//! costs two chips.

use tracing::debug;

use crate::domain::actor::Actor;
use crate::domain::board::WardId;
use crate::domain::guards::{require_not_mid_placement, require_phase, require_unlocked};
use crate::domain::log::LogKind;
use crate::domain::nationality::Nationality;
use crate::domain::player::PlayerId;
use crate::domain::rules::MAX_SLANDERS_PER_TERM;
use crate::domain::state::{Game, Phase, SlanderInProgress};
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlanderStep {
    First,
    Second,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedSlander {
    pub player: PlayerId,
    pub target: PlayerId,
    pub ward: WardId,
    pub nationality: Nationality,
    pub step: SlanderStep,
}

fn not_allowed(detail: impl Into<String>) -> DomainError {
    DomainError::validation(ValidationKind::SlanderNotAllowed, detail)
}

fn bad_target(detail: impl Into<String>) -> DomainError {
    DomainError::validation(ValidationKind::InvalidSlanderTarget, detail)
}

pub fn validate_slander(
    game: &Game,
    actor: &Actor,
    ward_id: WardId,
    target: PlayerId,
    n: Nationality,
) -> Result<ValidatedSlander, DomainError> {
    let pid = actor.require_current(game, "slander another player")?;
    let player = game.require_player(pid)?;
    require_phase(game, Phase::Actions)?;

    let term = game.term();
    if term < 2 {
        return Err(not_allowed(format!("You can't slander in term {term}.")));
    }

    let ward = game.find_ward(ward_id)?;
    require_unlocked(ward, "slander a player in")?;
    require_not_mid_placement(player, "slander")?;

    let victim = game.find_target(target)?;
    if victim.id == pid {
        return Err(bad_target("You can't slander yourself."));
    }
    if !ward.has_immigrant(n) {
        return Err(not_allowed(format!(
            "You attempted to slander with a {n} chip, but there are no {n} immigrants in the selected ward."
        )));
    }
    if ward.bosses_for(target) < 1 {
        return Err(bad_target(format!(
            "{} has no boss in ward {ward_id} to slander.",
            victim.name
        )));
    }

    let step = match (game.slander, player.slandered) {
        (Some(pinned), 1) => {
            if pinned.target != target {
                let pinned_name = game
                    .player(pinned.target)
                    .map(|p| p.name.as_str())
                    .unwrap_or("another player");
                return Err(bad_target(format!(
                    "You attempted to slander {}, but you are in the process of slandering {pinned_name}.",
                    victim.name
                )));
            }
            if pinned.nationality != n {
                return Err(not_allowed(format!(
                    "You attempted to slander using {n} favors, but you are in the process of slandering using {} favors.",
                    pinned.nationality
                )));
            }
            if pinned.ward != ward_id && !ward.is_adjacent_to(pinned.ward) {
                return Err(DomainError::validation(
                    ValidationKind::NotAdjacent,
                    format!("Ward {ward_id} is not adjacent to ward {}.", pinned.ward),
                ));
            }
            if player.chips.get(n) < 2 {
                return Err(DomainError::validation(
                    ValidationKind::InsufficientChips,
                    format!("You don't have two {n} favors to use for the second slander."),
                ));
            }
            SlanderStep::Second
        }
        _ => {
            if player.slandered >= MAX_SLANDERS_PER_TERM {
                return Err(not_allowed("You have already slandered twice this term."));
            }
            if player.slandered > 0 || !player.can_slander_in(term) {
                return Err(not_allowed("You have already slandered this term."));
            }
            if player.chips.get(n) < 1 {
                return Err(DomainError::validation(
                    ValidationKind::InsufficientChips,
                    format!("You don't have a {n} favor to use for the slander."),
                ));
            }
            SlanderStep::First
        }
    };

    Ok(ValidatedSlander {
        player: pid,
        target,
        ward: ward_id,
        nationality: n,
        step,
    })
}

pub fn apply_slander(game: &mut Game, v: ValidatedSlander) -> Result<(), DomainError> {
    let term = game.term();
    game.require_ward_mut(v.ward)?.remove_boss(v.target)?;

    let player = game.require_player_mut(v.player)?;
    let kind = match v.step {
        SlanderStep::First => {
            player.chips.take(v.nationality, 1)?;
            player.spend_slander_chip(term);
            player.slandered = 1;
            game.slander = Some(SlanderInProgress {
                target: v.target,
                nationality: v.nationality,
                ward: v.ward,
            });
            LogKind::FirstSlander {
                ward: v.ward,
                nationality: v.nationality,
            }
        }
        SlanderStep::Second => {
            player.chips.take(v.nationality, 2)?;
            player.slandered = 2;
            game.slander = None;
            LogKind::SecondSlander {
                ward: v.ward,
                nationality: v.nationality,
            }
        }
    };

    debug!(
        player = v.player,
        target = v.target,
        ward = v.ward,
        step = ?v.step,
        "Slander"
    );
    game.append_log(Some(v.player), Some(v.target), kind);
    Ok(())
}

pub fn slander(
    game: &mut Game,
    actor: &Actor,
    ward: WardId,
    target: PlayerId,
    n: Nationality,
) -> Result<(), DomainError> {
    let v = validate_slander(game, actor, ward, target, n)?;
    apply_slander(game, v)
}

/// Any other action by the current player forfeits a pending second step.
pub fn end_slander(game: &mut Game) -> Result<(), DomainError> {
    game.slander = None;
    let player = game.current_mut()?;
    if player.slandered == 1 {
        player.slandered = 2;
    }
    Ok(())
}
