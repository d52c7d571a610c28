use serde::{Deserialize, Serialize};

use crate::domain::board::{are_adjacent, starting_nationality, WardId};
use crate::domain::nationality::{Nationality, Nationals};
use crate::domain::player::PlayerId;
use crate::errors::domain::DomainError;

/// A ward on the board and the pieces in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ward {
    pub id: WardId,
    pub immigrants: Nationals,
    /// Boss counts indexed by `PlayerId`.
    pub bosses: Vec<u32>,
    /// Election completed this term.
    pub resolved: bool,
    /// Locked up by the Council President; immune to elections this term.
    pub locked_up: bool,
}

impl Ward {
    /// Fresh ward holding its single starting immigrant.
    pub fn new(id: WardId, num_players: usize) -> Self {
        let mut immigrants = Nationals::zero();
        immigrants.add(starting_nationality(id), 1);
        Self {
            id,
            immigrants,
            bosses: vec![0; num_players],
            resolved: false,
            locked_up: false,
        }
    }

    #[inline]
    pub fn bosses_for(&self, player: PlayerId) -> u32 {
        self.bosses.get(player as usize).copied().unwrap_or(0)
    }

    pub fn add_bosses(&mut self, player: PlayerId, count: u32) -> Result<(), DomainError> {
        let id = self.id;
        let slot = self.bosses.get_mut(player as usize).ok_or_else(|| {
            DomainError::corrupt(format!("ward {id} has no boss slot for player {player}"))
        })?;
        *slot += count;
        Ok(())
    }

    pub fn remove_boss(&mut self, player: PlayerId) -> Result<(), DomainError> {
        let id = self.id;
        let slot = self
            .bosses
            .get_mut(player as usize)
            .filter(|c| **c > 0)
            .ok_or_else(|| {
                DomainError::corrupt(format!("player {player} has no boss in ward {id}"))
            })?;
        *slot -= 1;
        Ok(())
    }

    /// Everyone but `keep` loses their bosses here.
    pub fn clear_bosses_except(&mut self, keep: PlayerId) {
        for (pid, count) in self.bosses.iter_mut().enumerate() {
            if pid != keep as usize {
                *count = 0;
            }
        }
    }

    pub fn has_bosses(&self) -> bool {
        self.bosses.iter().any(|&c| c > 0)
    }

    pub fn immigrant_total(&self) -> u32 {
        self.immigrants.total()
    }

    /// Removing or moving this ward's only immigrant is not allowed.
    pub fn has_one_immigrant(&self) -> bool {
        self.immigrant_total() == 1
    }

    pub fn has_immigrant(&self, n: Nationality) -> bool {
        self.immigrants.get(n) > 0
    }

    pub fn is_adjacent_to(&self, other: WardId) -> bool {
        are_adjacent(self.id, other)
    }
}
