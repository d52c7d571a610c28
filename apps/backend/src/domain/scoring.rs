//! End-of-term scoring: favor-chip awards, ward points and the next Mayor.

use tracing::debug;

use crate::domain::bidding::PRECEDENCE;
use crate::domain::board::{ward_points, WardId};
use crate::domain::log::{ChipGrant, LogKind, WardsWon};
use crate::domain::nationality::{Nationality, Nationals};
use crate::domain::office::Office;
use crate::domain::player::{Player, PlayerId};
use crate::domain::rules::{CHIPS_PER_AWARD, MAYOR_BONUS};
use crate::domain::state::{Game, Phase};
use crate::errors::domain::DomainError;

/// Three chips of each nationality to whoever controls the most of it.
///
/// Control counts the immigrants in wards a player wins. Ties share the
/// award, including a tie at zero.
pub fn award_favor_chips(game: &mut Game) -> Result<Vec<ChipGrant>, DomainError> {
    game.phase = Phase::AwardFavorChips;

    let mut awards: Vec<(PlayerId, Nationals)> =
        game.players.iter().map(|p| (p.id, Nationals::zero())).collect();
    for n in Nationality::ALL {
        let control: Vec<u32> = game
            .players
            .iter()
            .map(|p| game.controlled_by(p.id, n))
            .collect();
        let max = control.iter().copied().max().unwrap_or(0);
        for ((_, chips), c) in awards.iter_mut().zip(&control) {
            if *c == max {
                chips.add(n, CHIPS_PER_AWARD);
            }
        }
    }

    let grants: Vec<ChipGrant> = awards
        .into_iter()
        .filter(|(_, chips)| !chips.is_empty())
        .map(|(player, chips)| ChipGrant { player, chips })
        .collect();
    for grant in &grants {
        let player = game.require_player_mut(grant.player)?;
        for (n, count) in grant.chips.iter() {
            player.chips.add(n, count);
        }
    }

    debug!(grants = grants.len(), "Awarded favor chips");
    game.append_log(
        None,
        None,
        LogKind::ChipAward {
            grants: grants.clone(),
        },
    );
    Ok(grants)
}

/// Wards each player holds this term, in turn order.
pub fn wards_won(game: &Game) -> Vec<WardsWon> {
    game.players
        .iter()
        .map(|p| {
            let wards: Vec<WardId> = game
                .wards
                .iter()
                .filter(|w| game.ward_winner(w) == Some(p.id))
                .map(|w| w.id)
                .collect();
            let points = wards.iter().map(|&id| ward_points(id)).sum();
            WardsWon {
                player: p.id,
                wards,
                points,
            }
        })
        .collect()
}

/// Ordering used when several players tie on wards won.
fn mayor_tiebreak(p: &Player) -> (u32, [u32; 4], bool) {
    (
        p.chips.total(),
        PRECEDENCE.map(|n| p.chips.get(n)),
        p.holds(Office::Mayor),
    )
}

/// The player who holds the Mayor's office next term.
///
/// Players tied on wards won (zero included) go to the tie-break; an exact
/// tie leaves the office with the incumbent, if there is one.
pub fn new_mayor(game: &Game, results: &[WardsWon]) -> Option<PlayerId> {
    let most = results.iter().map(|r| r.wards.len()).max().unwrap_or(0);
    let mut group: Vec<&Player> = results
        .iter()
        .filter(|r| r.wards.len() == most)
        .filter_map(|r| game.player(r.player))
        .collect();
    if let [only] = group.as_slice() {
        return Some(only.id);
    }
    group.sort_by(|a, b| mayor_tiebreak(b).cmp(&mayor_tiebreak(a)));
    match group.as_slice() {
        [first, second, ..] if mayor_tiebreak(first) > mayor_tiebreak(second) => Some(first.id),
        _ => game.mayor().map(|p| p.id),
    }
}

/// Score ward points and seat the Mayor.
///
/// The Mayor, newly elected or retained, clears every office, gains the
/// bonus and takes the turn. With no Mayor the first player in turn order
/// is current.
pub fn score_victory_points(game: &mut Game) -> Result<Option<PlayerId>, DomainError> {
    game.phase = Phase::ScoreVictoryPoints;

    let results = wards_won(game);
    for r in &results {
        game.require_player_mut(r.player)?.score += r.points;
    }

    let mayor = new_mayor(game, &results);
    let retained = mayor.is_some() && mayor == game.mayor().map(|p| p.id);
    for p in game.players.iter_mut() {
        p.office = None;
    }
    match mayor {
        Some(m) => {
            let seated = game.require_player_mut(m)?;
            seated.office = Some(Office::Mayor);
            seated.score += MAYOR_BONUS;
            game.current_player = Some(m);
        }
        None => game.current_player = game.players.first().map(|p| p.id),
    }

    debug!(?mayor, retained, "Scored victory points");
    game.append_log(
        None,
        mayor,
        LogKind::VictoryPoints {
            results: results.into_iter().filter(|r| !r.wards.is_empty()).collect(),
            mayor,
        },
    );
    Ok(mayor)
}

/// The Mayor leads the new turn order; relative order is kept.
pub fn rotate_turn_order(game: &mut Game) {
    let Some(mayor) = game.mayor().map(|p| p.id) else {
        return;
    };
    if let Some(idx) = game.turn_index(mayor) {
        game.players.rotate_left(idx);
    }
}
