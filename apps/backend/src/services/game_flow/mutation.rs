use tracing::{debug, info, warn};

use crate::domain::actions::ActionOutcome;
use crate::domain::actor::Actor;
use crate::domain::state::Game;
use crate::domain::EndGameSummary;
use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::services::draft_cache::Draft;
use crate::services::game_flow::GameFlowService;
use crate::services::store::{version_mismatch, StoredGame};

/// Result of one accepted action.
#[derive(Debug, Clone)]
pub struct SubmitResult {
    pub game_id: i64,
    /// Stored version the caller should send with its next action.
    pub version: i32,
    pub outcome: ActionOutcome,
    /// The action was committed rather than kept as a draft.
    pub persisted: bool,
    pub game: Game,
}

pub(super) fn require_version(stored: &StoredGame, expected_version: i32) -> Result<(), AppError> {
    if stored.version != expected_version {
        return Err(version_mismatch(expected_version, stored.version).into());
    }
    Ok(())
}

impl GameFlowService {
    /// Apply `mutation` to the actor's working copy of the game.
    ///
    /// The working copy is the actor's draft when one sits on the stored
    /// version, otherwise the stored game. Outcomes that should persist are
    /// saved and clear the draft; everything else replaces the draft.
    pub(super) async fn run_mutation<F>(
        &self,
        game_id: i64,
        actor: &Actor,
        expected_version: i32,
        mutation: F,
    ) -> Result<SubmitResult, AppError>
    where
        F: FnOnce(&mut Game) -> Result<ActionOutcome, DomainError>,
    {
        let lock = self.game_lock(game_id);
        let _guard = lock.lock().await;

        let stored = self.store().load(game_id).await?;
        self.release_finished(game_id, &stored.game);
        require_version(&stored, expected_version)?;

        let mut game = match self
            .drafts()
            .current(game_id, actor.user_id, stored.version)
            .await
        {
            Some(draft) => draft.game.clone(),
            None => stored.game,
        };

        let outcome = mutation(&mut game)?;

        if !outcome.should_persist() {
            debug!(game_id, user_id = actor.user_id, "Keeping draft");
            self.drafts()
                .put(
                    game_id,
                    actor.user_id,
                    Draft {
                        base_version: stored.version,
                        game: game.clone(),
                    },
                )
                .await;
            return Ok(SubmitResult {
                game_id,
                version: stored.version,
                outcome,
                persisted: false,
                game,
            });
        }

        let saved = self.store().save(game_id, stored.version, game).await?;
        self.drafts().discard(game_id, actor.user_id).await;
        self.release_finished(game_id, &saved.game);
        info!(
            game_id,
            version = saved.version,
            phase = %saved.game.phase,
            year = saved.game.year,
            transitions = outcome.transitions.len(),
            "Committed game"
        );

        if let Some(summary) = &outcome.end_game {
            self.notify_end(game_id, summary).await;
        }

        Ok(SubmitResult {
            game_id,
            version: saved.version,
            outcome,
            persisted: true,
            game: saved.game,
        })
    }

    /// The game is already stored; a failed notification is only logged.
    async fn notify_end(&self, game_id: i64, summary: &EndGameSummary) {
        if let Err(e) = self.notifier.game_ended(game_id, summary).await {
            warn!(game_id, error = %e, "End-of-game notification failed");
        }
    }
}
