//! Append-only game log.
//!
//! Entries are plain data. Turning them into text is the job of
//! `crate::log_render`, which keys its renderers by [`LogTag`].

use serde::{Deserialize, Serialize};

use crate::domain::board::WardId;
use crate::domain::nationality::{Nationality, Nationals};
use crate::domain::office::Office;
use crate::domain::player::PlayerId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Position in the game log, starting at 0.
    pub seq: u32,
    pub year: u8,
    /// Acting player; `None` for game events.
    pub player: Option<PlayerId>,
    /// Second player involved (slander target, office holder).
    pub other_player: Option<PlayerId>,
    pub kind: LogKind,
}

/// Chips a candidate committed in a ward election.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BidRecord {
    pub player: PlayerId,
    pub chips: Nationals,
}

/// Wards a player won at the end of a term and the points they earned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WardsWon {
    pub player: PlayerId,
    pub wards: Vec<WardId>,
    pub points: u32,
}

/// Chips a player received in the favor-chip award.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChipGrant {
    pub player: PlayerId,
    pub chips: Nationals,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum LogKind {
    PlacedPieces {
        ward: WardId,
        bosses: u32,
        immigrant: Option<Nationality>,
        /// Favor chip gained for placing the immigrant.
        chip: Option<Nationality>,
    },
    RemovedImmigrant {
        ward: WardId,
        nationality: Nationality,
    },
    MovedImmigrant {
        from: WardId,
        to: WardId,
        nationality: Nationality,
    },
    LockedWard {
        ward: WardId,
    },
    TookFavorChip {
        nationality: Nationality,
    },
    FirstSlander {
        ward: WardId,
        nationality: Nationality,
    },
    SecondSlander {
        ward: WardId,
        nationality: Nationality,
    },
    ElectionResult {
        ward: WardId,
        bids: Vec<BidRecord>,
        winner: Option<PlayerId>,
        contested: bool,
    },
    ChipAward {
        grants: Vec<ChipGrant>,
    },
    VictoryPoints {
        results: Vec<WardsWon>,
        mayor: Option<PlayerId>,
    },
    AssignedOffice {
        office: Office,
    },
    Immigration {
        arrivals: Nationals,
    },
    FavorChipPoints {
        nationality: Nationality,
        points: u32,
    },
    SlanderChipPoints {
        points: u32,
    },
    AnnounceWinners {
        winners: Vec<PlayerId>,
    },
}

/// Payload-free discriminant of [`LogKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogTag {
    PlacedPieces,
    RemovedImmigrant,
    MovedImmigrant,
    LockedWard,
    TookFavorChip,
    FirstSlander,
    SecondSlander,
    ElectionResult,
    ChipAward,
    VictoryPoints,
    AssignedOffice,
    Immigration,
    FavorChipPoints,
    SlanderChipPoints,
    AnnounceWinners,
}

impl LogTag {
    pub const ALL: [LogTag; 15] = [
        LogTag::PlacedPieces,
        LogTag::RemovedImmigrant,
        LogTag::MovedImmigrant,
        LogTag::LockedWard,
        LogTag::TookFavorChip,
        LogTag::FirstSlander,
        LogTag::SecondSlander,
        LogTag::ElectionResult,
        LogTag::ChipAward,
        LogTag::VictoryPoints,
        LogTag::AssignedOffice,
        LogTag::Immigration,
        LogTag::FavorChipPoints,
        LogTag::SlanderChipPoints,
        LogTag::AnnounceWinners,
    ];
}

impl LogKind {
    pub fn tag(&self) -> LogTag {
        match self {
            LogKind::PlacedPieces { .. } => LogTag::PlacedPieces,
            LogKind::RemovedImmigrant { .. } => LogTag::RemovedImmigrant,
            LogKind::MovedImmigrant { .. } => LogTag::MovedImmigrant,
            LogKind::LockedWard { .. } => LogTag::LockedWard,
            LogKind::TookFavorChip { .. } => LogTag::TookFavorChip,
            LogKind::FirstSlander { .. } => LogTag::FirstSlander,
            LogKind::SecondSlander { .. } => LogTag::SecondSlander,
            LogKind::ElectionResult { .. } => LogTag::ElectionResult,
            LogKind::ChipAward { .. } => LogTag::ChipAward,
            LogKind::VictoryPoints { .. } => LogTag::VictoryPoints,
            LogKind::AssignedOffice { .. } => LogTag::AssignedOffice,
            LogKind::Immigration { .. } => LogTag::Immigration,
            LogKind::FavorChipPoints { .. } => LogTag::FavorChipPoints,
            LogKind::SlanderChipPoints { .. } => LogTag::SlanderChipPoints,
            LogKind::AnnounceWinners { .. } => LogTag::AnnounceWinners,
        }
    }
}

impl LogEntry {
    pub fn tag(&self) -> LogTag {
        self.kind.tag()
    }
}
