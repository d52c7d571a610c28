//! Immigrant nationalities and per-nationality counters.

use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::errors::domain::DomainError;

/// The four immigrant nationalities.
///
/// Declaration order is the tie-break precedence used by elections and the
/// mayoral tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Nationality {
    Irish,
    German,
    Italian,
    English,
}

impl Nationality {
    /// All nationalities in precedence order.
    pub const ALL: [Nationality; 4] = [
        Nationality::Irish,
        Nationality::German,
        Nationality::Italian,
        Nationality::English,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Nationality::Irish => 0,
            Nationality::German => 1,
            Nationality::Italian => 2,
            Nationality::English => 3,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Nationality::Irish => "Irish",
            Nationality::German => "German",
            Nationality::Italian => "Italian",
            Nationality::English => "English",
        }
    }
}

impl fmt::Display for Nationality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A count per nationality (immigrant cubes or favor chips).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Nationals(pub [u32; 4]);

impl Nationals {
    pub const fn zero() -> Self {
        Self([0; 4])
    }

    /// Same count for every nationality.
    pub const fn splat(n: u32) -> Self {
        Self([n; 4])
    }

    #[inline]
    pub fn get(&self, n: Nationality) -> u32 {
        self.0[n.index()]
    }

    #[inline]
    pub fn set(&mut self, n: Nationality, value: u32) {
        self.0[n.index()] = value;
    }

    #[inline]
    pub fn add(&mut self, n: Nationality, count: u32) {
        self.0[n.index()] += count;
    }

    /// Remove `count` of nationality `n`.
    ///
    /// Validators check stock before mutating, so running short here means
    /// the game state is inconsistent.
    pub fn take(&mut self, n: Nationality, count: u32) -> Result<(), DomainError> {
        let slot = &mut self.0[n.index()];
        *slot = slot.checked_sub(count).ok_or_else(|| {
            DomainError::corrupt(format!(
                "cannot take {count} {n} from a stock of {}",
                *slot
            ))
        })?;
        Ok(())
    }

    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    /// Largest single-nationality count.
    pub fn max(&self) -> u32 {
        self.0.iter().copied().max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// `(nationality, count)` pairs in precedence order.
    pub fn iter(&self) -> impl Iterator<Item = (Nationality, u32)> + '_ {
        Nationality::ALL.iter().map(move |&n| (n, self.get(n)))
    }

    /// Nationalities with a non-zero count, in precedence order.
    pub fn present(&self) -> impl Iterator<Item = Nationality> + '_ {
        self.iter().filter(|&(_, c)| c > 0).map(|(n, _)| n)
    }

    /// Element-wise `self >= other`.
    pub fn covers(&self, other: &Nationals) -> bool {
        self.0.iter().zip(other.0.iter()).all(|(a, b)| a >= b)
    }
}

impl Index<Nationality> for Nationals {
    type Output = u32;

    fn index(&self, n: Nationality) -> &u32 {
        &self.0[n.index()]
    }
}

impl IndexMut<Nationality> for Nationals {
    fn index_mut(&mut self, n: Nationality) -> &mut u32 {
        &mut self.0[n.index()]
    }
}
