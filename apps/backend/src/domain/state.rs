use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::board::WardId;
use crate::domain::log::{LogEntry, LogKind};
use crate::domain::nationality::{Nationality, Nationals};
use crate::domain::office::Office;
use crate::domain::player::{Player, PlayerId};
use crate::domain::rules::term_for_year;
use crate::domain::ward::Ward;
use crate::errors::domain::{DomainError, ValidationKind};

/// Overall game progression phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    /// Board and players being prepared.
    Setup,
    /// Players take turns placing pieces and using office powers.
    Actions,
    /// A contested election winner places one immigrant from the bag.
    PlaceImmigrant,
    /// An uncontested election winner takes one favor chip.
    TakeFavorChip,
    /// Ward elections, one ward at a time.
    Elections,
    AwardFavorChips,
    ScoreVictoryPoints,
    /// The new Mayor names a Deputy Mayor.
    AssignDeputyMayor,
    /// The Deputy Mayor assigns one office.
    DeputyMayorAssignOffice,
    /// The Mayor assigns the remaining offices.
    AssignCityOffices,
    EndGameScoring,
    AnnounceWinners,
    GameOver,
}

impl Phase {
    pub const fn as_str(self) -> &'static str {
        match self {
            Phase::Setup => "Setup",
            Phase::Actions => "Actions",
            Phase::PlaceImmigrant => "Place Immigrant",
            Phase::TakeFavorChip => "Take Favor Chip",
            Phase::Elections => "Elections",
            Phase::AwardFavorChips => "Award Favor Chips",
            Phase::ScoreVictoryPoints => "Score Victory Points",
            Phase::AssignDeputyMayor => "Assign Deputy Mayor",
            Phase::DeputyMayorAssignOffice => "Deputy Mayor Assign Office",
            Phase::AssignCityOffices => "Assign City Offices",
            Phase::EndGameScoring => "End Game Scoring",
            Phase::AnnounceWinners => "Announce Winners",
            Phase::GameOver => "Game Over",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transient annotation on [`Phase::Actions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SubPhase {
    /// The player tried to finish with an office power still unused.
    OfficeWarning,
}

/// A cube lifted by the Precinct Chairman, waiting for its destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImmigrantInTransit {
    pub from: WardId,
    pub nationality: Nationality,
}

/// First slander step taken; pins the second step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlanderInProgress {
    pub target: PlayerId,
    pub nationality: Nationality,
    pub ward: WardId,
}

/// Entire game container, sufficient for pure domain operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub phase: Phase,
    pub sub_phase: Option<SubPhase>,
    /// 1-based year (1..=16).
    pub year: u8,
    /// Players in turn order.
    pub players: Vec<Player>,
    /// Player whose turn it is; `None` once the game has ended.
    pub current_player: Option<PlayerId>,
    /// Active wards in ascending id order.
    pub wards: Vec<Ward>,
    pub castle_garden: Nationals,
    pub bag: Nationals,
    /// Ward holding an election; only set during the election sequence.
    pub current_ward: Option<WardId>,
    pub selected_ward: Option<WardId>,
    pub transit: Option<ImmigrantInTransit>,
    pub slander: Option<SlanderInProgress>,
    pub winners: Vec<PlayerId>,
    pub log: Vec<LogEntry>,
    pub rng_seed: u64,
}

impl Game {
    #[inline]
    pub fn term(&self) -> u8 {
        term_for_year(self.year)
    }

    pub fn num_players(&self) -> usize {
        self.players.len()
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    /// Player lookup for an id that must exist (e.g. from game state).
    pub fn require_player(&self, id: PlayerId) -> Result<&Player, DomainError> {
        self.player(id)
            .ok_or_else(|| DomainError::corrupt(format!("player {id} missing from game")))
    }

    pub fn require_player_mut(&mut self, id: PlayerId) -> Result<&mut Player, DomainError> {
        self.player_mut(id)
            .ok_or_else(|| DomainError::corrupt(format!("player {id} missing from game")))
    }

    /// Player lookup for an id supplied by a caller.
    pub fn find_target(&self, id: PlayerId) -> Result<&Player, DomainError> {
        self.player(id).ok_or_else(|| {
            DomainError::validation(
                ValidationKind::InvalidPlayer,
                "Invalid value received for player.",
            )
        })
    }

    pub fn player_for_user(&self, user_id: i64) -> Option<&Player> {
        self.players.iter().find(|p| p.user_id == user_id)
    }

    /// Position of a player in turn order.
    pub fn turn_index(&self, id: PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p.id == id)
    }

    pub fn require_current(&self, ctx: &'static str) -> Result<PlayerId, DomainError> {
        self.current_player.ok_or_else(|| {
            DomainError::corrupt(format!("Invariant violated: current player must be set ({ctx})"))
        })
    }

    pub fn current(&self) -> Result<&Player, DomainError> {
        let id = self.require_current("current")?;
        self.require_player(id)
    }

    pub fn current_mut(&mut self) -> Result<&mut Player, DomainError> {
        let id = self.require_current("current_mut")?;
        self.require_player_mut(id)
    }

    pub fn office_holder(&self, office: Office) -> Option<&Player> {
        self.players.iter().find(|p| p.holds(office))
    }

    pub fn mayor(&self) -> Option<&Player> {
        self.office_holder(Office::Mayor)
    }

    pub fn all_players_have_office(&self) -> bool {
        self.players.iter().all(|p| p.office.is_some())
    }

    pub fn ward(&self, id: WardId) -> Option<&Ward> {
        self.wards.iter().find(|w| w.id == id)
    }

    pub fn ward_mut(&mut self, id: WardId) -> Option<&mut Ward> {
        self.wards.iter_mut().find(|w| w.id == id)
    }

    /// Ward lookup for an id supplied by a caller.
    pub fn find_ward(&self, id: WardId) -> Result<&Ward, DomainError> {
        self.ward(id).ok_or_else(|| {
            DomainError::validation(
                ValidationKind::InvalidWard,
                format!("Ward {id} is not in play."),
            )
        })
    }

    pub fn require_ward_mut(&mut self, id: WardId) -> Result<&mut Ward, DomainError> {
        self.ward_mut(id)
            .ok_or_else(|| DomainError::corrupt(format!("ward {id} missing from game")))
    }

    pub fn ward_ids(&self) -> Vec<WardId> {
        self.wards.iter().map(|w| w.id).collect()
    }

    /// Favor-chip control: immigrants of `n` in wards `player` wins.
    pub fn controlled_by(&self, player: PlayerId, n: Nationality) -> u32 {
        self.wards
            .iter()
            .filter(|w| self.ward_winner(w) == Some(player))
            .map(|w| w.immigrants.get(n))
            .sum()
    }

    /// Holder of a ward, locked or not: the first player in turn order with
    /// a boss there.
    pub fn ward_winner(&self, ward: &Ward) -> Option<PlayerId> {
        self.players
            .iter()
            .find(|p| ward.bosses_for(p.id) > 0)
            .map(|p| p.id)
    }

    pub fn append_log(
        &mut self,
        player: Option<PlayerId>,
        other_player: Option<PlayerId>,
        kind: LogKind,
    ) {
        let seq = self.log.len() as u32;
        self.log.push(LogEntry {
            seq,
            year: self.year,
            player,
            other_player,
            kind,
        });
    }

    /// Clear the per-turn wizard state when the turn passes.
    pub fn clear_turn_selection(&mut self) {
        self.selected_ward = None;
        self.slander = None;
        self.sub_phase = None;
    }
}
