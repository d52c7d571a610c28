//! Ward-by-ward election sequence at the end of each term.
//!
//! Wards are visited in ascending id order. A ward with no bosses resolves
//! immediately; a ward with a single boss holder is won uncontested and the
//! winner takes a favor chip; otherwise every candidate bids once, in turn
//! order, and the strongest bid wins. A contested winner places one
//! immigrant from the bag before the next ward starts.

use tracing::{debug, info};

use crate::domain::actor::Actor;
use crate::domain::bidding::election_winner;
use crate::domain::board::WardId;
use crate::domain::guards::require_phase;
use crate::domain::immigration::empty_castle_garden;
use crate::domain::log::{BidRecord, LogKind};
use crate::domain::nationality::Nationals;
use crate::domain::player::PlayerId;
use crate::domain::scoring::{award_favor_chips, rotate_turn_order, score_victory_points};
use crate::domain::state::{Game, Phase};
use crate::domain::turn_flow::start_city_offices_phase;
use crate::errors::domain::{DomainError, ValidationKind};

/// Whether the sequence needs a player before it can go on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Resolved,
    Waiting,
}

pub fn start_elections(game: &mut Game) -> Result<(), DomainError> {
    game.phase = Phase::Elections;
    game.clear_turn_selection();
    empty_castle_garden(game);
    for p in game.players.iter_mut() {
        p.begin_turn_reset();
    }
    for w in game.wards.iter_mut() {
        w.resolved = w.locked_up;
    }
    game.current_ward = None;
    info!(year = game.year, "Elections started");
    continue_elections(game)
}

/// Resolve wards until one needs a player or none are left.
pub fn continue_elections(game: &mut Game) -> Result<(), DomainError> {
    loop {
        let Some(ward_id) = game.wards.iter().find(|w| !w.resolved).map(|w| w.id) else {
            return finish_elections(game);
        };
        let step = if game.current_ward == Some(ward_id) {
            resolve_ward(game, ward_id)?
        } else {
            start_election_in(game, ward_id)?
        };
        if step == Step::Waiting {
            return Ok(());
        }
    }
}

fn make_current(game: &mut Game, pid: PlayerId) -> Result<(), DomainError> {
    game.require_player_mut(pid)?.begin_turn_reset();
    game.current_player = Some(pid);
    Ok(())
}

fn mark_resolved(game: &mut Game, ward_id: WardId) -> Result<(), DomainError> {
    game.require_ward_mut(ward_id)?.resolved = true;
    Ok(())
}

fn start_election_in(game: &mut Game, ward_id: WardId) -> Result<Step, DomainError> {
    game.current_ward = Some(ward_id);
    let ward = game
        .ward(ward_id)
        .cloned()
        .ok_or_else(|| DomainError::corrupt(format!("ward {ward_id} missing from game")))?;

    for p in game.players.iter_mut() {
        p.candidate = ward.bosses_for(p.id) > 0;
        p.has_bid = false;
        p.played_chips = Nationals::zero();
    }
    let candidates: Vec<PlayerId> = game
        .players
        .iter()
        .filter(|p| p.candidate)
        .map(|p| p.id)
        .collect();

    match candidates.as_slice() {
        [] => {
            debug!(ward = ward_id, "No candidates");
            mark_resolved(game, ward_id)?;
            Ok(Step::Resolved)
        }
        [winner] => {
            let winner = *winner;
            debug!(ward = ward_id, winner, "Uncontested election");
            game.append_log(
                Some(winner),
                None,
                LogKind::ElectionResult {
                    ward: ward_id,
                    bids: Vec::new(),
                    winner: Some(winner),
                    contested: false,
                },
            );
            game.phase = Phase::TakeFavorChip;
            make_current(game, winner)?;
            Ok(Step::Waiting)
        }
        [first, ..] => {
            debug!(ward = ward_id, candidates = candidates.len(), "Contested election");
            make_current(game, *first)?;
            Ok(Step::Waiting)
        }
    }
}

/// All candidates have bid: spend the chips and settle the ward.
fn resolve_ward(game: &mut Game, ward_id: WardId) -> Result<Step, DomainError> {
    let winner = election_winner(game);

    let mut bids = Vec::new();
    for p in game.players.iter_mut().filter(|p| p.candidate) {
        let played = p.played_chips;
        for (n, count) in played.iter() {
            p.chips.take(n, count)?;
        }
        p.played_chips = Nationals::zero();
        bids.push(BidRecord {
            player: p.id,
            chips: played,
        });
    }

    debug!(ward = ward_id, ?winner, "Election resolved");
    game.append_log(
        winner,
        None,
        LogKind::ElectionResult {
            ward: ward_id,
            bids,
            winner,
            contested: true,
        },
    );

    let Some(winner) = winner else {
        mark_resolved(game, ward_id)?;
        return Ok(Step::Resolved);
    };
    game.require_ward_mut(ward_id)?.clear_bosses_except(winner);
    if game.bag.is_empty() {
        mark_resolved(game, ward_id)?;
        return Ok(Step::Resolved);
    }
    game.phase = Phase::PlaceImmigrant;
    make_current(game, winner)?;
    Ok(Step::Waiting)
}

fn finish_elections(game: &mut Game) -> Result<(), DomainError> {
    game.current_ward = None;
    for p in game.players.iter_mut() {
        p.candidate = false;
        p.has_bid = false;
    }
    award_favor_chips(game)?;
    score_victory_points(game)?;
    rotate_turn_order(game);
    info!(year = game.year, mayor = ?game.mayor().map(|p| p.id), "Elections finished");
    start_city_offices_phase(game)
}

/// A candidate finishing after their bid.
pub fn finish_bidding_turn(game: &mut Game, actor: &Actor) -> Result<(), DomainError> {
    require_phase(game, Phase::Elections)?;
    let pid = actor.require_current(game, "finish turn")?;
    if !game.require_player(pid)?.performed_action {
        return Err(DomainError::validation(
            ValidationKind::NoActionPerformed,
            "You must place a bid before finishing your turn.",
        ));
    }

    let next = game
        .players
        .iter()
        .find(|p| p.candidate && !p.has_bid)
        .map(|p| p.id);
    match next {
        Some(next) => make_current(game, next),
        None => continue_elections(game),
    }
}

/// The ward winner finishing after placing an immigrant or taking a chip.
pub fn finish_reward_turn(game: &mut Game, actor: &Actor) -> Result<(), DomainError> {
    if !matches!(game.phase, Phase::PlaceImmigrant | Phase::TakeFavorChip) {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            format!("Expected an election reward phase but have \"{}\" phase.", game.phase),
        ));
    }
    let pid = actor.require_current(game, "finish turn")?;
    if !game.require_player(pid)?.performed_action {
        let what = match game.phase {
            Phase::PlaceImmigrant => "place an immigrant",
            _ => "take a favor chip",
        };
        return Err(DomainError::validation(
            ValidationKind::NoActionPerformed,
            format!("You must {what} before finishing your turn."),
        ));
    }

    let ward_id = game
        .current_ward
        .ok_or_else(|| DomainError::corrupt("Invariant violated: reward without a ward election"))?;
    game.phase = Phase::Elections;
    mark_resolved(game, ward_id)?;
    continue_elections(game)
}
