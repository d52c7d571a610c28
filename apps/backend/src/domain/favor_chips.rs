//! Taking favor chips: the post-election reward and the Deputy Mayor's power.

use tracing::debug;

use crate::domain::actor::Actor;
use crate::domain::guards::{require_not_performed, require_office, require_office_unused, require_phase};
use crate::domain::log::LogKind;
use crate::domain::nationality::Nationality;
use crate::domain::office::Office;
use crate::domain::slander::end_slander;
use crate::domain::state::{Game, Phase};
use crate::errors::domain::DomainError;

/// Turn-ending chip for an uncontested election winner.
pub fn take_chip(game: &mut Game, actor: &Actor, n: Nationality) -> Result<(), DomainError> {
    let pid = actor.require_current(game, "take a chip")?;
    require_not_performed(game.require_player(pid)?)?;
    require_phase(game, Phase::TakeFavorChip)?;

    end_slander(game)?;
    let player = game.require_player_mut(pid)?;
    player.chips.add(n, 1);
    player.performed_action = true;

    debug!(player = pid, nationality = %n, "Took favor chip");
    game.append_log(Some(pid), None, LogKind::TookFavorChip { nationality: n });
    Ok(())
}

/// The Deputy Mayor's once-per-turn chip; does not end the turn.
pub fn deputy_take_chip(game: &mut Game, actor: &Actor, n: Nationality) -> Result<(), DomainError> {
    let pid = actor.require_current(game, "take a chip")?;
    {
        let player = game.require_player(pid)?;
        require_office_unused(player)?;
        require_phase(game, Phase::Actions)?;
        require_office(actor, player, Office::DeputyMayor, "take a favor chip")?;
    }

    end_slander(game)?;
    let player = game.require_player_mut(pid)?;
    player.chips.add(n, 1);
    player.used_office = true;

    debug!(player = pid, nationality = %n, "Deputy Mayor took favor chip");
    game.append_log(Some(pid), None, LogKind::TookFavorChip { nationality: n });
    Ok(())
}
