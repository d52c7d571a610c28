//! Creating a new game: seating, board and the first immigrants.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::board::active_ward_ids;
use crate::domain::immigration::run_immigration;
use crate::domain::nationality::Nationals;
use crate::domain::player::{Player, PlayerId};
use crate::domain::rules::BAG_PER_NATIONALITY;
use crate::domain::seed_derivation::derive_turn_order_seed;
use crate::domain::state::{Game, Phase};
use crate::domain::ward::Ward;
use crate::errors::domain::{DomainError, ValidationKind};

/// A user joining a new game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    pub user_id: i64,
    pub name: String,
}

impl Seat {
    pub fn new(user_id: i64, name: impl Into<String>) -> Self {
        Self {
            user_id,
            name: name.into(),
        }
    }
}

/// Set up a game for 3 to 5 seats.
///
/// Player ids follow seat order; turn order is a seeded shuffle of the
/// seats. The game starts in year 1 in the action phase with Castle Garden
/// already stocked.
pub fn new_game(seats: &[Seat], rng_seed: u64) -> Result<Game, DomainError> {
    let num_players = seats.len();
    let ward_ids = active_ward_ids(num_players)?;

    let mut seen = HashSet::new();
    if !seats.iter().all(|s| seen.insert(s.user_id)) {
        return Err(DomainError::validation(
            ValidationKind::InvalidPlayer,
            "A user can only take one seat in a game.",
        ));
    }

    let mut players: Vec<Player> = seats
        .iter()
        .enumerate()
        .map(|(i, s)| Player::new(i as PlayerId, s.user_id, s.name.clone()))
        .collect();
    let mut rng = ChaCha8Rng::seed_from_u64(derive_turn_order_seed(rng_seed));
    players.shuffle(&mut rng);

    let wards: Vec<Ward> = ward_ids.map(|id| Ward::new(id, num_players)).collect();
    let mut bag = Nationals::splat(BAG_PER_NATIONALITY);
    for ward in &wards {
        for (n, count) in ward.immigrants.iter() {
            bag.take(n, count)?;
        }
    }

    let current_player = players.first().map(|p| p.id);
    let mut game = Game {
        phase: Phase::Setup,
        sub_phase: None,
        year: 1,
        players,
        current_player,
        wards,
        castle_garden: Nationals::zero(),
        bag,
        current_ward: None,
        selected_ward: None,
        transit: None,
        slander: None,
        winners: Vec::new(),
        log: Vec::new(),
        rng_seed,
    };

    run_immigration(&mut game)?;
    game.phase = Phase::Actions;

    info!(
        num_players,
        first_player = ?game.current_player,
        wards = game.wards.len(),
        "Game set up"
    );
    Ok(game)
}
