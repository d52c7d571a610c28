//! Election bids and winner determination for a single ward.

use std::cmp::Ordering;

use tracing::debug;

use crate::domain::actor::Actor;
use crate::domain::guards::{require_not_performed, require_phase};
use crate::domain::nationality::{Nationality, Nationals};
use crate::domain::player::{Player, PlayerId};
use crate::domain::state::{Game, Phase};
use crate::errors::domain::{DomainError, ValidationKind};

/// Nationality order used to break otherwise equal bids.
pub const PRECEDENCE: [Nationality; 4] = Nationality::ALL;

pub fn validate_bid(game: &Game, actor: &Actor, chips: [i32; 4]) -> Result<(PlayerId, Nationals), DomainError> {
    require_phase(game, Phase::Elections)?;
    let pid = actor.require_current(game, "place a bid")?;
    let player = game.require_player(pid)?;
    require_not_performed(player)?;
    if !player.candidate {
        return Err(DomainError::validation(
            ValidationKind::InvalidBid,
            "You are not a candidate in this election.",
        ));
    }
    let ward_id = game.current_ward.ok_or_else(|| {
        DomainError::corrupt("Invariant violated: bidding without a ward election")
    })?;
    let ward = game.find_ward(ward_id)?;

    let mut played = Nationals::zero();
    for n in Nationality::ALL {
        let count = chips[n.index()];
        if count < 0 {
            return Err(DomainError::validation(
                ValidationKind::InvalidBid,
                format!("Invalid value received for played {n} chips."),
            ));
        }
        let count = count as u32;
        if count > player.chips.get(n) {
            return Err(DomainError::validation(
                ValidationKind::InsufficientChips,
                format!("You played more {n} chips, than you have."),
            ));
        }
        if count > 0 && !ward.has_immigrant(n) {
            return Err(DomainError::validation(
                ValidationKind::InvalidBid,
                format!(
                    "You played {n} favour chips, but there are no {n} immigrants in ward {ward_id}"
                ),
            ));
        }
        played.set(n, count);
    }
    Ok((pid, played))
}

/// Commit chips to the current ward election. Chips are only spent when
/// the ward resolves.
pub fn bid(game: &mut Game, actor: &Actor, chips: [i32; 4]) -> Result<(), DomainError> {
    let (pid, played) = validate_bid(game, actor, chips)?;
    let player = game.require_player_mut(pid)?;
    player.played_chips = played;
    player.performed_action = true;
    player.has_bid = true;
    debug!(player = pid, ward = ?game.current_ward, total = played.total(), "Bid");
    Ok(())
}

/// Strength of a bid, compared lexicographically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct BidStrength {
    pub largest: u32,
    pub total: u32,
    pub by_precedence: [u32; 4],
}

impl BidStrength {
    pub fn of(played: &Nationals) -> Self {
        Self {
            largest: played.max(),
            total: played.total(),
            by_precedence: PRECEDENCE.map(|n| played.get(n)),
        }
    }
}

/// The candidate with a strictly strongest bid, if any.
pub fn election_winner(game: &Game) -> Option<PlayerId> {
    let mut candidates: Vec<(&Player, BidStrength)> = game
        .players
        .iter()
        .filter(|p| p.candidate)
        .map(|p| (p, BidStrength::of(&p.played_chips)))
        .collect();
    candidates.sort_by(|a, b| b.1.cmp(&a.1));
    match candidates.as_slice() {
        [] => None,
        [(only, _)] => Some(only.id),
        [(first, s1), (_, s2), ..] => match s1.cmp(s2) {
            Ordering::Greater => Some(first.id),
            _ => None,
        },
    }
}
