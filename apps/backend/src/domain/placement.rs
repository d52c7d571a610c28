//! Placing bosses and immigrants.

use tracing::debug;

use crate::domain::actor::Actor;
use crate::domain::board::WardId;
use crate::domain::guards::{require_not_performed, require_unlocked};
use crate::domain::log::LogKind;
use crate::domain::nationality::Nationality;
use crate::domain::player::PlayerId;
use crate::domain::rules::{MAX_BOSSES_PER_PLACEMENT, MAX_PIECES_PER_TURN};
use crate::domain::slander::end_slander;
use crate::domain::state::{Game, Phase};
use crate::errors::domain::{DomainError, ValidationKind};

/// A placement that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedPlacement {
    pub player: PlayerId,
    pub ward: WardId,
    pub bosses: u32,
    pub immigrant: Option<Nationality>,
}

pub fn validate_place_pieces(
    game: &Game,
    actor: &Actor,
    ward_id: WardId,
    bosses: i32,
    immigrant: Option<Nationality>,
) -> Result<ValidatedPlacement, DomainError> {
    let pid = actor.require_current(game, "place pieces")?;
    let player = game.require_player(pid)?;
    let ward = game.find_ward(ward_id)?;
    require_unlocked(ward, "place pieces into")?;
    require_not_performed(player)?;

    match game.phase {
        Phase::Actions => {
            if !(0..=MAX_BOSSES_PER_PLACEMENT).contains(&bosses) {
                return Err(piece_count(format!("You cannot place {bosses} bosses.")));
            }
            let count = bosses + i32::from(immigrant.is_some());
            if !(1..=MAX_PIECES_PER_TURN as i32).contains(&count) {
                return Err(piece_count(format!("You cannot place {count} pieces.")));
            }
            let placed = player.placed_pieces();
            if count as u32 + placed > MAX_PIECES_PER_TURN {
                return Err(piece_count(format!(
                    "You already placed {placed} pieces.  You cannot place {count} more pieces."
                )));
            }
            if let Some(n) = immigrant {
                if game.castle_garden.get(n) < 1 {
                    return Err(DomainError::validation(
                        ValidationKind::CastleGardenEmpty,
                        format!("There is not a {n} immigrant in the Castle Garden."),
                    ));
                }
                if player.placed_immigrants >= 1 {
                    return Err(piece_count(
                        "You already placed an immigrant.  You cannot place another immigrant."
                            .to_string(),
                    ));
                }
            }
        }
        Phase::PlaceImmigrant => {
            if bosses != 0 {
                return Err(piece_count("You cannot place a boss.".to_string()));
            }
            let Some(n) = immigrant else {
                return Err(piece_count("You must place 1 immigrant.".to_string()));
            };
            if game.bag.get(n) < 1 {
                return Err(DomainError::validation(
                    ValidationKind::ImmigrantBagEmpty,
                    format!("The Immigrant Bag does not have a {n} cube to place."),
                ));
            }
        }
        _ => {
            return Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                "Wrong phase for performing this action.",
            ))
        }
    }

    Ok(ValidatedPlacement {
        player: pid,
        ward: ward_id,
        bosses: bosses as u32,
        immigrant,
    })
}

fn piece_count(detail: String) -> DomainError {
    DomainError::validation(ValidationKind::InvalidPieceCount, detail)
}

/// Apply a validated placement.
///
/// In the action phase the immigrant leaves Castle Garden and earns its
/// placer a favor chip; a post-election immigrant comes from the bag.
pub fn apply_place_pieces(game: &mut Game, v: ValidatedPlacement) -> Result<(), DomainError> {
    end_slander(game)?;
    let phase = game.phase;

    let mut chip = None;
    if let Some(n) = v.immigrant {
        match phase {
            Phase::Actions => {
                game.castle_garden.take(n, 1)?;
                chip = Some(n);
            }
            _ => game.bag.take(n, 1)?,
        }
    }

    {
        let ward = game.require_ward_mut(v.ward)?;
        ward.add_bosses(v.player, v.bosses)?;
        if let Some(n) = v.immigrant {
            ward.immigrants.add(n, 1);
        }
    }

    let player = game.require_player_mut(v.player)?;
    player.placed_bosses += v.bosses;
    if let Some(n) = v.immigrant {
        player.placed_immigrants += 1;
        if chip.is_some() {
            player.chips.add(n, 1);
        }
    }
    let required = match phase {
        Phase::Actions => MAX_PIECES_PER_TURN,
        _ => 1,
    };
    if player.placed_pieces() >= required {
        player.performed_action = true;
    }

    debug!(
        player = v.player,
        ward = v.ward,
        bosses = v.bosses,
        immigrant = ?v.immigrant,
        "Placed pieces"
    );
    game.append_log(
        Some(v.player),
        None,
        LogKind::PlacedPieces {
            ward: v.ward,
            bosses: v.bosses,
            immigrant: v.immigrant,
            chip,
        },
    );
    Ok(())
}

pub fn place_pieces(
    game: &mut Game,
    actor: &Actor,
    ward: WardId,
    bosses: i32,
    immigrant: Option<Nationality>,
) -> Result<(), DomainError> {
    let v = validate_place_pieces(game, actor, ward, bosses, immigrant)?;
    apply_place_pieces(game, v)
}
