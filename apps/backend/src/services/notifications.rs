//! End-of-game notification hook.

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::info;

use crate::domain::EndGameSummary;
use crate::error::AppError;
use crate::log_render::render_end_game_body;

/// Told once per game, after the final turn has been stored.
#[async_trait]
pub trait EndGameNotifier: Send + Sync {
    async fn game_ended(&self, game_id: i64, summary: &EndGameSummary) -> Result<(), AppError>;
}

/// Writes the notification to the log instead of sending it anywhere.
#[derive(Debug, Default)]
pub struct TracingNotifier;

#[async_trait]
impl EndGameNotifier for TracingNotifier {
    async fn game_ended(&self, game_id: i64, summary: &EndGameSummary) -> Result<(), AppError> {
        info!(
            game_id,
            winners = ?summary.winner_names,
            body = %render_end_game_body(summary),
            "Game ended"
        );
        Ok(())
    }
}

/// Records notifications for inspection.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    sent: Mutex<Vec<(i64, EndGameSummary)>>,
    fail: bool,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// A notifier whose every delivery fails.
    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn sent(&self) -> Vec<(i64, EndGameSummary)> {
        self.sent.lock().clone()
    }
}

#[async_trait]
impl EndGameNotifier for MemoryNotifier {
    async fn game_ended(&self, game_id: i64, summary: &EndGameSummary) -> Result<(), AppError> {
        if self.fail {
            return Err(AppError::internal(format!(
                "notification for game {game_id} was not delivered"
            )));
        }
        self.sent.lock().push((game_id, summary.clone()));
        Ok(())
    }
}
