//! Office powers used during the action phase.
//!
//! - Chief of Police removes an immigrant.
//! - Precinct Chairman moves an immigrant to an adjacent ward (two calls).
//! - Council President locks up a ward, at most twice per term.
//!
//! The Deputy Mayor's extra favor chip lives in `favor_chips`.

use tracing::debug;

use crate::domain::actor::Actor;
use crate::domain::board::WardId;
use crate::domain::guards::{
    require_not_mid_placement, require_office, require_office_unused, require_phase,
    require_unlocked,
};
use crate::domain::log::LogKind;
use crate::domain::nationality::Nationality;
use crate::domain::office::Office;
use crate::domain::player::Player;
use crate::domain::rules::MAX_LOCKUPS_PER_TERM;
use crate::domain::slander::end_slander;
use crate::domain::state::{Game, ImmigrantInTransit, Phase};
use crate::domain::ward::Ward;
use crate::errors::domain::{DomainError, ValidationKind};

/// Whether the player still has an office power to use this turn.
///
/// Drives the warning shown when finishing a turn.
pub fn can_use_office(player: &Player) -> bool {
    match player.office {
        Some(Office::DeputyMayor | Office::ChiefOfPolice | Office::PrecinctChairman) => {
            !player.used_office
        }
        Some(Office::CouncilPresident) => {
            !player.used_office && player.locked_up < MAX_LOCKUPS_PER_TERM
        }
        Some(Office::Mayor) | None => false,
    }
}

/// The ward must keep at least one immigrant and hold one of `n`.
fn require_removable(ward: &Ward, n: Nationality, verb: &str) -> Result<(), DomainError> {
    if !ward.has_immigrant(n) {
        return Err(DomainError::validation(
            ValidationKind::NoSuchImmigrant,
            format!("There is no {n} immigrant in ward {}.", ward.id),
        ));
    }
    if ward.has_one_immigrant() {
        return Err(DomainError::validation(
            ValidationKind::LastImmigrant,
            format!("You can't {verb} the last immigrant from the ward."),
        ));
    }
    Ok(())
}

pub fn remove_immigrant(
    game: &mut Game,
    actor: &Actor,
    ward_id: WardId,
    n: Nationality,
) -> Result<(), DomainError> {
    let pid = actor.require_current(game, "remove an immigrant from a ward")?;
    {
        let player = game.require_player(pid)?;
        let ward = game.find_ward(ward_id)?;
        require_unlocked(ward, "remove an immigrant from")?;
        require_not_mid_placement(player, "remove an immigrant")?;
        require_phase(game, Phase::Actions)?;
        require_office_unused(player)?;
        require_removable(ward, n, "remove")?;
        require_office(actor, player, Office::ChiefOfPolice, "remove an immigrant from the ward")?;
    }

    end_slander(game)?;
    game.require_ward_mut(ward_id)?.immigrants.take(n, 1)?;
    game.bag.add(n, 1);
    game.require_player_mut(pid)?.used_office = true;

    debug!(player = pid, ward = ward_id, nationality = %n, "Removed immigrant");
    game.append_log(
        Some(pid),
        None,
        LogKind::RemovedImmigrant {
            ward: ward_id,
            nationality: n,
        },
    );
    Ok(())
}

/// First half of the Precinct Chairman's move: lift a cube out of a ward.
pub fn move_from(
    game: &mut Game,
    actor: &Actor,
    ward_id: WardId,
    n: Nationality,
) -> Result<(), DomainError> {
    let pid = actor.require_current(game, "move an immigrant between wards")?;
    {
        let player = game.require_player(pid)?;
        let ward = game.find_ward(ward_id)?;
        require_unlocked(ward, "move an immigrant from")?;
        require_not_mid_placement(player, "move an immigrant")?;
        require_phase(game, Phase::Actions)?;
        require_office_unused(player)?;
        if let Some(t) = game.transit {
            return Err(DomainError::validation(
                ValidationKind::ImmigrantInTransit,
                format!("You must first finish moving the {} immigrant.", t.nationality),
            ));
        }
        require_removable(ward, n, "move")?;
        require_office(
            actor,
            player,
            Office::PrecinctChairman,
            "move an immigrant between wards",
        )?;
    }

    end_slander(game)?;
    game.require_ward_mut(ward_id)?.immigrants.take(n, 1)?;
    game.bag.add(n, 1);
    game.transit = Some(ImmigrantInTransit {
        from: ward_id,
        nationality: n,
    });

    debug!(player = pid, ward = ward_id, nationality = %n, "Lifted immigrant");
    Ok(())
}

/// Second half of the move: drop the cube in an adjacent ward.
pub fn move_to(
    game: &mut Game,
    actor: &Actor,
    ward_id: WardId,
    n: Nationality,
) -> Result<(), DomainError> {
    let pid = actor.require_current(game, "move an immigrant between wards")?;
    let transit = {
        let player = game.require_player(pid)?;
        let ward = game.find_ward(ward_id)?;
        require_unlocked(ward, "move an immigrant to")?;
        require_phase(game, Phase::Actions)?;
        require_office_unused(player)?;
        let Some(transit) = game.transit else {
            return Err(DomainError::validation(
                ValidationKind::ImmigrantInTransit,
                "There is no immigrant being moved.",
            ));
        };
        if transit.nationality != n {
            return Err(DomainError::validation(
                ValidationKind::ImmigrantInTransit,
                format!(
                    "Expected placement of {} immigrant, but received placement of {n} immigrant.",
                    transit.nationality
                ),
            ));
        }
        if game.bag.get(n) < 1 {
            return Err(DomainError::validation(
                ValidationKind::ImmigrantBagEmpty,
                format!("The Immigrant Bag does not have a {n} cube to place."),
            ));
        }
        require_office(
            actor,
            player,
            Office::PrecinctChairman,
            "move an immigrant between wards",
        )?;
        if !ward.is_adjacent_to(transit.from) {
            return Err(DomainError::validation(
                ValidationKind::NotAdjacent,
                format!("Ward {ward_id} is not adjacent to ward {}.", transit.from),
            ));
        }
        transit
    };

    end_slander(game)?;
    game.bag.take(n, 1)?;
    game.require_ward_mut(ward_id)?.immigrants.add(n, 1);
    game.require_player_mut(pid)?.used_office = true;
    game.transit = None;

    debug!(player = pid, from = transit.from, to = ward_id, nationality = %n, "Moved immigrant");
    game.append_log(
        Some(pid),
        None,
        LogKind::MovedImmigrant {
            from: transit.from,
            to: ward_id,
            nationality: n,
        },
    );
    Ok(())
}

pub fn lockup_ward(game: &mut Game, actor: &Actor, ward_id: WardId) -> Result<(), DomainError> {
    let pid = actor.require_current(game, "lockup a ward")?;
    {
        let player = game.require_player(pid)?;
        let ward = game.find_ward(ward_id)?;
        if ward.locked_up {
            return Err(DomainError::validation(
                ValidationKind::WardLocked,
                "You can't lockup an already locked ward.",
            ));
        }
        require_office_unused(player)?;
        require_not_mid_placement(player, "lockup a ward")?;
        require_phase(game, Phase::Actions)?;
        if player.locked_up >= MAX_LOCKUPS_PER_TERM {
            return Err(DomainError::validation(
                ValidationKind::LockupLimit,
                "You have already locked up two wards this term.",
            ));
        }
        require_office(actor, player, Office::CouncilPresident, "lockup a ward")?;
    }

    end_slander(game)?;
    game.require_ward_mut(ward_id)?.locked_up = true;
    let player = game.require_player_mut(pid)?;
    player.used_office = true;
    player.locked_up += 1;

    debug!(player = pid, ward = ward_id, "Locked up ward");
    game.append_log(Some(pid), None, LogKind::LockedWard { ward: ward_id });
    Ok(())
}
