#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod log_render;
pub mod services;
pub mod telemetry;

// Re-exports for public API
pub use config::engine::EngineConfig;
pub use domain::{apply_action, Action, ActionOutcome, Actor, EndGameSummary, Game};
pub use error::AppError;
pub use errors::ErrorCode;
pub use services::draft_cache::DraftCache;
pub use services::game_flow::{GameFlowService, SubmitResult};
pub use services::games::GameView;
pub use services::notifications::{EndGameNotifier, MemoryNotifier, TracingNotifier};
pub use services::store::{GameStore, InMemoryGameStore, StoredGame};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::logging::init();
}
