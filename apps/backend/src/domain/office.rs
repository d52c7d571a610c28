use std::fmt;

use serde::{Deserialize, Serialize};

/// City offices handed out after each election cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Office {
    Mayor,
    DeputyMayor,
    CouncilPresident,
    ChiefOfPolice,
    PrecinctChairman,
}

impl Office {
    pub const ALL: [Office; 5] = [
        Office::Mayor,
        Office::DeputyMayor,
        Office::CouncilPresident,
        Office::ChiefOfPolice,
        Office::PrecinctChairman,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Office::Mayor => "Mayor",
            Office::DeputyMayor => "Deputy Mayor",
            Office::CouncilPresident => "Council President",
            Office::ChiefOfPolice => "Chief of Police",
            Office::PrecinctChairman => "Precinct Chairman",
        }
    }

    /// Offices the Mayor and Deputy Mayor hand out; the Mayor is elected.
    pub const fn is_assignable(self) -> bool {
        !matches!(self, Office::Mayor)
    }
}

impl fmt::Display for Office {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
