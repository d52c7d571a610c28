//! Static board topology: ward ids, adjacency and starting immigrants.

use std::ops::RangeInclusive;

use crate::domain::nationality::Nationality;
use crate::domain::rules::supported_player_counts;
use crate::errors::domain::{DomainError, ValidationKind};

pub type WardId = u8;

pub const WARD_COUNT: usize = 18;

/// The ward that scores double at the end of a term.
pub const DOUBLE_POINT_WARD: WardId = 14;

/// Neighbours of each ward, indexed by `ward_id - 1`.
static ADJACENCY: [&[WardId]; WARD_COUNT] = [
    &[2, 3, 4],
    &[1, 4, 5],
    &[1, 4, 6, 7],
    &[1, 2, 3, 5, 7],
    &[2, 4, 7, 8],
    &[3, 7, 9],
    &[3, 4, 5, 6, 8, 9, 10],
    &[5, 7, 10, 11],
    &[6, 7, 10, 12],
    &[7, 8, 9, 11, 12, 13],
    &[8, 10, 13, 14],
    &[9, 10, 13, 15],
    &[10, 11, 12, 14, 15, 16],
    &[11, 13, 16, 17],
    &[12, 13, 16, 18],
    &[13, 14, 15, 17, 18],
    &[14, 16, 18],
    &[15, 16, 17],
];

#[inline]
pub fn is_board_ward(id: WardId) -> bool {
    (1..=WARD_COUNT as WardId).contains(&id)
}

/// Neighbours of `id`; empty for ids off the board.
pub fn adjacent_wards(id: WardId) -> &'static [WardId] {
    if is_board_ward(id) {
        ADJACENCY[id as usize - 1]
    } else {
        &[]
    }
}

pub fn are_adjacent(a: WardId, b: WardId) -> bool {
    adjacent_wards(a).contains(&b)
}

/// Wards in play for a player count.
///
/// Smaller games close off the lowest-numbered wards.
pub fn active_ward_ids(num_players: usize) -> Result<RangeInclusive<WardId>, DomainError> {
    match num_players {
        5 => Ok(1..=18),
        4 => Ok(4..=18),
        3 => Ok(7..=18),
        n => Err(DomainError::validation(
            ValidationKind::InvalidPlayer,
            format!(
                "Tammany Hall needs between {} and {} players, not {n}.",
                supported_player_counts().start(),
                supported_player_counts().end()
            ),
        )),
    }
}

/// Nationality of the single immigrant a ward starts with.
pub fn starting_nationality(id: WardId) -> Nationality {
    if id == 6 {
        return Nationality::Italian;
    }
    match id.saturating_sub(1) % 3 {
        0 => Nationality::Irish,
        1 => Nationality::English,
        _ => Nationality::German,
    }
}

/// Victory points for winning a ward at the end of a term.
#[inline]
pub fn ward_points(id: WardId) -> u32 {
    if id == DOUBLE_POINT_WARD {
        2
    } else {
        1
    }
}
