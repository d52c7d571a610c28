use serde::{Deserialize, Serialize};

use crate::domain::nationality::Nationals;
use crate::domain::office::Office;
use crate::domain::rules::TERMS;

/// Stable per-game player id (0-based, assigned at setup).
///
/// Independent of turn order, which changes after every election cycle.
pub type PlayerId = u8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub user_id: i64,
    pub name: String,
    pub office: Option<Office>,
    pub score: u32,
    pub chips: Nationals,
    /// Chips committed to the ward election in progress.
    pub played_chips: Nationals,
    pub placed_bosses: u32,
    pub placed_immigrants: u32,
    /// Wards locked up this term.
    pub locked_up: u32,
    /// Slander steps taken this term (0, 1 or 2).
    pub slandered: u8,
    /// One entry per term: may still slander in that term.
    pub slander_chips: [bool; TERMS],
    pub candidate: bool,
    pub has_bid: bool,
    pub performed_action: bool,
    pub used_office: bool,
}

impl Player {
    pub fn new(id: PlayerId, user_id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            user_id,
            name: name.into(),
            office: None,
            score: 0,
            chips: Nationals::zero(),
            played_chips: Nationals::zero(),
            placed_bosses: 0,
            placed_immigrants: 0,
            locked_up: 0,
            slandered: 0,
            // Nobody may slander during the first term.
            slander_chips: [false, true, true, true],
            candidate: false,
            has_bid: false,
            performed_action: false,
            used_office: false,
        }
    }

    #[inline]
    pub fn placed_pieces(&self) -> u32 {
        self.placed_bosses + self.placed_immigrants
    }

    /// Exactly one piece down: the player is in the middle of placing.
    #[inline]
    pub fn is_mid_placement(&self) -> bool {
        self.placed_pieces() == 1
    }

    pub fn holds(&self, office: Office) -> bool {
        self.office == Some(office)
    }

    pub fn can_slander_in(&self, term: u8) -> bool {
        term >= 1
            && self
                .slander_chips
                .get(term as usize - 1)
                .copied()
                .unwrap_or(false)
    }

    pub fn spend_slander_chip(&mut self, term: u8) {
        if let Some(chip) = term
            .checked_sub(1)
            .and_then(|i| self.slander_chips.get_mut(i as usize))
        {
            *chip = false;
        }
    }

    pub fn unused_slander_chips(&self) -> u32 {
        self.slander_chips.iter().filter(|&&c| c).count() as u32
    }

    /// Per-turn counters and flags cleared before the player acts.
    pub fn begin_turn_reset(&mut self) {
        self.performed_action = false;
        self.used_office = false;
        self.placed_bosses = 0;
        self.placed_immigrants = 0;
        if self.slandered == 1 {
            self.slandered = 2;
        }
    }

    /// Per-term counters cleared when a new term starts.
    pub fn term_reset(&mut self) {
        self.begin_turn_reset();
        self.locked_up = 0;
        self.slandered = 0;
        self.candidate = false;
        self.has_bid = false;
        self.played_chips = Nationals::zero();
    }
}
