use std::ops::RangeInclusive;

pub const MIN_PLAYERS: usize = 3;
pub const MAX_PLAYERS: usize = 5;

/// The game ends after the elections of this year.
pub const FINAL_YEAR: u8 = 16;
pub const YEARS_PER_TERM: u8 = 4;
pub const TERMS: usize = 4;

/// Bosses plus immigrants a player may place during one action turn.
pub const MAX_PIECES_PER_TURN: u32 = 2;
pub const MAX_BOSSES_PER_PLACEMENT: i32 = 2;
pub const MAX_LOCKUPS_PER_TERM: u32 = 2;
pub const MAX_SLANDERS_PER_TERM: u8 = 2;

pub const CHIPS_PER_AWARD: u32 = 3;
pub const MAYOR_BONUS: u32 = 3;
pub const FAVOR_CHIP_POINTS: u32 = 2;
pub const BAG_PER_NATIONALITY: u32 = 20;

pub fn supported_player_counts() -> RangeInclusive<usize> {
    MIN_PLAYERS..=MAX_PLAYERS
}

/// Term for a 1-based year: years 1-4 are term 1, 5-8 term 2, and so on.
#[inline]
pub fn term_for_year(year: u8) -> u8 {
    year.div_ceil(YEARS_PER_TERM)
}

/// Elections close out every term.
#[inline]
pub fn is_election_year(year: u8) -> bool {
    year > 0 && year % YEARS_PER_TERM == 0
}
