use tracing::{debug, info};

use super::mutation::{require_version, SubmitResult};
use super::GameFlowService;
use crate::domain::actions::{apply_action, Action};
use crate::domain::actor::Actor;
use crate::error::AppError;
use crate::services::games::GameView;

impl GameFlowService {
    /// Validate and apply one action for `actor`.
    ///
    /// `expected_version` is the stored version the caller last saw;
    /// a mismatch is a retryable conflict.
    pub async fn submit(
        &self,
        game_id: i64,
        actor: &Actor,
        expected_version: i32,
        action: Action,
    ) -> Result<SubmitResult, AppError> {
        debug!(
            game_id,
            user_id = actor.user_id,
            action = action.name(),
            "Submitting action"
        );
        self.run_mutation(game_id, actor, expected_version, |game| {
            apply_action(game, actor, action)
        })
        .await
    }

    /// Like [`submit`](Self::submit), with the action given as JSON.
    pub async fn submit_json(
        &self,
        game_id: i64,
        actor: &Actor,
        expected_version: i32,
        body: &str,
    ) -> Result<SubmitResult, AppError> {
        let action: Action = serde_json::from_str(body)?;
        self.submit(game_id, actor, expected_version, action).await
    }

    /// Commit the actor's draft without finishing the turn.
    ///
    /// With no draft this returns the stored game unchanged.
    pub async fn save_draft(
        &self,
        game_id: i64,
        actor: &Actor,
        expected_version: i32,
    ) -> Result<GameView, AppError> {
        let lock = self.game_lock(game_id);
        let _guard = lock.lock().await;

        let stored = self.store().load(game_id).await?;
        self.release_finished(game_id, &stored.game);
        require_version(&stored, expected_version)?;

        let Some(draft) = self
            .drafts()
            .current(game_id, actor.user_id, stored.version)
            .await
        else {
            return Ok(GameView::stored(stored));
        };

        let saved = self
            .store()
            .save(game_id, stored.version, draft.game.clone())
            .await?;
        self.drafts().discard(game_id, actor.user_id).await;
        info!(game_id, version = saved.version, "Saved draft");
        Ok(GameView::stored(saved))
    }

    /// Throw away the actor's draft and return the stored game.
    pub async fn undo(&self, game_id: i64, actor: &Actor) -> Result<GameView, AppError> {
        let lock = self.game_lock(game_id);
        let _guard = lock.lock().await;

        self.drafts().discard(game_id, actor.user_id).await;
        let stored = self.store().load(game_id).await?;
        self.release_finished(game_id, &stored.game);
        debug!(game_id, user_id = actor.user_id, "Undid draft");
        Ok(GameView::stored(stored))
    }
}
