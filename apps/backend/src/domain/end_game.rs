//! Final scoring after the last election.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::log::LogKind;
use crate::domain::nationality::Nationality;
use crate::domain::player::PlayerId;
use crate::domain::rules::FAVOR_CHIP_POINTS;
use crate::domain::state::{Game, Phase};
use crate::errors::domain::DomainError;

pub fn end_game(game: &mut Game) -> Result<(), DomainError> {
    game.phase = Phase::EndGameScoring;
    game.clear_turn_selection();

    for n in Nationality::ALL {
        let most = game.players.iter().map(|p| p.chips.get(n)).max().unwrap_or(0);
        let leaders: Vec<PlayerId> = game
            .players
            .iter()
            .filter(|p| p.chips.get(n) == most)
            .map(|p| p.id)
            .collect();
        for pid in leaders {
            game.require_player_mut(pid)?.score += FAVOR_CHIP_POINTS;
            game.append_log(
                Some(pid),
                None,
                LogKind::FavorChipPoints {
                    nationality: n,
                    points: FAVOR_CHIP_POINTS,
                },
            );
        }
    }

    let slander_points: Vec<(PlayerId, u32)> = game
        .players
        .iter()
        .map(|p| (p.id, p.unused_slander_chips()))
        .collect();
    for (pid, points) in slander_points {
        game.require_player_mut(pid)?.score += points;
        game.append_log(Some(pid), None, LogKind::SlanderChipPoints { points });
    }

    game.phase = Phase::AnnounceWinners;
    let top = game.players.iter().map(|p| p.score).max().unwrap_or(0);
    game.winners = game
        .players
        .iter()
        .filter(|p| p.score == top)
        .map(|p| p.id)
        .collect();
    game.append_log(
        None,
        None,
        LogKind::AnnounceWinners {
            winners: game.winners.clone(),
        },
    );

    game.current_player = None;
    game.phase = Phase::GameOver;
    info!(winners = ?game.winners, score = top, "Game over");
    Ok(())
}

/// Final standing of one player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerResult {
    pub player: PlayerId,
    pub user_id: i64,
    pub name: String,
    pub score: u32,
}

/// Payload handed to the end-game notifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndGameSummary {
    pub players: Vec<PlayerResult>,
    pub winners: Vec<PlayerId>,
    pub winner_names: Vec<String>,
    /// Player ids grouped by finishing place, best first.
    pub places: Vec<Vec<PlayerId>>,
}

impl EndGameSummary {
    pub fn from_game(game: &Game) -> Self {
        let players: Vec<PlayerResult> = game
            .players
            .iter()
            .map(|p| PlayerResult {
                player: p.id,
                user_id: p.user_id,
                name: p.name.clone(),
                score: p.score,
            })
            .collect();

        let mut scores: Vec<u32> = players.iter().map(|p| p.score).collect();
        scores.sort_unstable_by(|a, b| b.cmp(a));
        scores.dedup();
        let places = scores
            .into_iter()
            .map(|s| {
                players
                    .iter()
                    .filter(|p| p.score == s)
                    .map(|p| p.player)
                    .collect()
            })
            .collect();

        let winner_names = game
            .winners
            .iter()
            .filter_map(|id| game.player(*id))
            .map(|p| p.name.clone())
            .collect();

        Self {
            players,
            winners: game.winners.clone(),
            winner_names,
            places,
        }
    }
}
