//! Game flow service: bridges the synchronous engine with storage, drafts
//! and notifications.
//!
//! Requests for one game are serialized behind a per-game async mutex. The
//! store's version check still guards against writers outside this process.

mod mutation;
mod player_actions;

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::Mutex;
use tracing::debug;

use crate::config::engine::EngineConfig;
use crate::domain::state::{Game, Phase};
use crate::services::draft_cache::DraftCache;
use crate::services::notifications::EndGameNotifier;
use crate::services::store::GameStore;

pub use mutation::SubmitResult;

pub struct GameFlowService {
    store: Arc<dyn GameStore>,
    drafts: DraftCache,
    notifier: Arc<dyn EndGameNotifier>,
    locks: DashMap<i64, Arc<Mutex<()>>>,
}

impl GameFlowService {
    pub fn new(
        store: Arc<dyn GameStore>,
        notifier: Arc<dyn EndGameNotifier>,
        config: &EngineConfig,
    ) -> Self {
        Self {
            store,
            drafts: DraftCache::new(config),
            notifier,
            locks: DashMap::new(),
        }
    }

    pub(crate) fn store(&self) -> &dyn GameStore {
        self.store.as_ref()
    }

    pub(crate) fn drafts(&self) -> &DraftCache {
        &self.drafts
    }

    fn game_lock(&self, game_id: i64) -> Arc<Mutex<()>> {
        let entry = self
            .locks
            .entry(game_id)
            .or_insert_with(|| Arc::new(Mutex::new(())));
        Arc::clone(entry.value())
    }

    /// A finished game takes no more mutations, so its lock is dropped.
    /// Callers still holding the `Arc` keep their guard.
    fn release_finished(&self, game_id: i64, game: &Game) {
        if game.phase == Phase::GameOver && self.locks.remove(&game_id).is_some() {
            debug!(game_id, "Released game lock");
        }
    }
}
