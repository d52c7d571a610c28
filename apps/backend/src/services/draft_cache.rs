//! Uncommitted per-user game drafts.
//!
//! Actions that do not finish a turn only change the acting user's draft.
//! Undo drops the draft; committing a turn drops it too. Entries expire
//! after the configured idle time.

use std::sync::Arc;

use moka::future::Cache;
use tracing::debug;

use crate::config::engine::EngineConfig;
use crate::domain::state::Game;

/// A working copy layered over a stored version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub base_version: i32,
    pub game: Game,
}

/// Keyed by `(game_id, user_id)`.
#[derive(Clone)]
pub struct DraftCache {
    cache: Cache<(i64, i64), Arc<Draft>>,
}

impl DraftCache {
    pub fn new(config: &EngineConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(config.draft_capacity)
            .time_to_idle(config.draft_ttl)
            .build();
        Self { cache }
    }

    /// Draft for this user, provided it still sits on `version`.
    ///
    /// A draft built on an older version is discarded.
    pub async fn current(&self, game_id: i64, user_id: i64, version: i32) -> Option<Arc<Draft>> {
        let key = (game_id, user_id);
        let draft = self.cache.get(&key).await?;
        if draft.base_version == version {
            Some(draft)
        } else {
            debug!(
                game_id,
                user_id,
                draft_version = draft.base_version,
                version,
                "Discarding stale draft"
            );
            self.cache.invalidate(&key).await;
            None
        }
    }

    pub async fn put(&self, game_id: i64, user_id: i64, draft: Draft) {
        self.cache.insert((game_id, user_id), Arc::new(draft)).await;
    }

    pub async fn discard(&self, game_id: i64, user_id: i64) {
        self.cache.invalidate(&(game_id, user_id)).await;
    }
}
