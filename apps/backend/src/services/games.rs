//! Creating and loading games.

use serde::Serialize;
use tracing::info;

use crate::domain::setup::{new_game, Seat};
use crate::domain::state::Game;
use crate::error::AppError;
use crate::services::game_flow::GameFlowService;
use crate::services::store::StoredGame;

/// What a user sees of a game: their draft if they have one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    pub game_id: i64,
    /// Stored version the view is based on.
    pub version: i32,
    pub is_draft: bool,
    pub game: Game,
}

impl GameView {
    pub(crate) fn stored(stored: StoredGame) -> Self {
        Self {
            game_id: stored.id,
            version: stored.version,
            is_draft: false,
            game: stored.game,
        }
    }
}

impl GameFlowService {
    pub async fn create_game(&self, seats: &[Seat], rng_seed: u64) -> Result<GameView, AppError> {
        let game = new_game(seats, rng_seed)?;
        let stored = self.store().insert(game).await?;
        info!(
            game_id = stored.id,
            players = seats.len(),
            "Created game"
        );
        Ok(GameView::stored(stored))
    }

    pub async fn load(&self, game_id: i64, user_id: i64) -> Result<GameView, AppError> {
        let stored = self.store().load(game_id).await?;
        match self
            .drafts()
            .current(game_id, user_id, stored.version)
            .await
        {
            Some(draft) => Ok(GameView {
                game_id,
                version: stored.version,
                is_draft: true,
                game: draft.game.clone(),
            }),
            None => Ok(GameView::stored(stored)),
        }
    }
}
