//! Immigrants arriving at Castle Garden from the bag.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::domain::log::LogKind;
use crate::domain::nationality::{Nationality, Nationals};
use crate::domain::seed_derivation::derive_immigration_seed;
use crate::domain::state::Game;
use crate::errors::domain::DomainError;

/// Draw one cube uniformly from the bag, or `None` if it is empty.
pub fn draw_from_bag<R: Rng + ?Sized>(
    bag: &mut Nationals,
    rng: &mut R,
) -> Result<Option<Nationality>, DomainError> {
    let total = bag.total();
    if total == 0 {
        return Ok(None);
    }
    let mut pick = rng.random_range(0..total);
    let mut drawn = None;
    for n in Nationality::ALL {
        let count = bag.get(n);
        if pick < count {
            drawn = Some(n);
            break;
        }
        pick -= count;
    }
    let n = drawn.ok_or_else(|| DomainError::corrupt("bag draw fell past the last cube"))?;
    bag.take(n, 1)?;
    Ok(Some(n))
}

/// Top up Castle Garden to one immigrant per player.
///
/// Draws are seeded from the game seed and year so the same game always
/// sees the same arrivals.
pub fn run_immigration(game: &mut Game) -> Result<Nationals, DomainError> {
    let mut rng = ChaCha8Rng::seed_from_u64(derive_immigration_seed(game.rng_seed, game.year));
    let target = game.num_players() as u32;
    let mut arrivals = Nationals::zero();

    while game.castle_garden.total() < target {
        match draw_from_bag(&mut game.bag, &mut rng)? {
            Some(n) => {
                game.castle_garden.add(n, 1);
                arrivals.add(n, 1);
            }
            None => break,
        }
    }

    debug!(
        year = game.year,
        arrived = arrivals.total(),
        garden = game.castle_garden.total(),
        "Immigration"
    );
    game.append_log(None, None, LogKind::Immigration { arrivals });
    Ok(arrivals)
}

/// Return every Castle Garden immigrant to the bag.
pub fn empty_castle_garden(game: &mut Game) {
    for n in Nationality::ALL {
        let count = game.castle_garden.get(n);
        game.bag.add(n, count);
        game.castle_garden.set(n, 0);
    }
}
