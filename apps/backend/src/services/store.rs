//! Durable game storage behind an optimistic version check.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::domain::state::Game;
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};

/// A persisted game and the version it was stored at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredGame {
    pub id: i64,
    /// Bumped on every save; starts at 1.
    pub version: i32,
    pub game: Game,
}

#[async_trait]
pub trait GameStore: Send + Sync {
    async fn insert(&self, game: Game) -> Result<StoredGame, DomainError>;

    async fn load(&self, game_id: i64) -> Result<StoredGame, DomainError>;

    /// Replace the stored game, provided nobody saved since `expected_version`.
    async fn save(
        &self,
        game_id: i64,
        expected_version: i32,
        game: Game,
    ) -> Result<StoredGame, DomainError>;
}

fn game_not_found(game_id: i64) -> DomainError {
    DomainError::not_found(NotFoundKind::Game, format!("Game {game_id} not found"))
}

pub(crate) fn version_mismatch(expected: i32, actual: i32) -> DomainError {
    DomainError::conflict(
        ConflictKind::OptimisticLock,
        format!(
            "Game lock version mismatch: expected {expected}, but game has version {actual}"
        ),
    )
}

/// Process-local store used by tests and the demo binary.
#[derive(Debug)]
pub struct InMemoryGameStore {
    games: DashMap<i64, StoredGame>,
    next_id: AtomicI64,
}

impl InMemoryGameStore {
    pub fn new() -> Self {
        Self {
            games: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

impl Default for InMemoryGameStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GameStore for InMemoryGameStore {
    async fn insert(&self, game: Game) -> Result<StoredGame, DomainError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let stored = StoredGame {
            id,
            version: 1,
            game,
        };
        self.games.insert(id, stored.clone());
        Ok(stored)
    }

    async fn load(&self, game_id: i64) -> Result<StoredGame, DomainError> {
        self.games
            .get(&game_id)
            .map(|e| e.value().clone())
            .ok_or_else(|| game_not_found(game_id))
    }

    async fn save(
        &self,
        game_id: i64,
        expected_version: i32,
        game: Game,
    ) -> Result<StoredGame, DomainError> {
        match self.games.entry(game_id) {
            Entry::Vacant(_) => Err(game_not_found(game_id)),
            Entry::Occupied(mut slot) => {
                let current = slot.get().version;
                if current != expected_version {
                    return Err(version_mismatch(expected_version, current));
                }
                let stored = StoredGame {
                    id: game_id,
                    version: current + 1,
                    game,
                };
                slot.insert(stored.clone());
                Ok(stored)
            }
        }
    }
}
