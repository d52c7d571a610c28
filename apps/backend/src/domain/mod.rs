//! Domain layer: pure game logic types and helpers.

pub mod actions;
pub mod actor;
pub mod admin;
pub mod assign_offices;
pub mod bidding;
pub mod board;
pub mod elections;
pub mod end_game;
pub mod favor_chips;
pub mod game_transition;
pub mod guards;
pub mod immigration;
pub mod log;
pub mod nationality;
pub mod office;
pub mod office_powers;
pub mod placement;
pub mod player;
pub mod rules;
pub mod scoring;
pub mod seed_derivation;
pub mod setup;
pub mod slander;
pub mod state;
pub mod turn_flow;
pub mod ward;

#[cfg(test)]
mod tests_end_game;
#[cfg(test)]
mod tests_placement;
#[cfg(test)]
mod tests_scoring;
#[cfg(test)]
mod tests_slander;
#[cfg(test)]
mod tests_turn_flow;

// Re-exports for ergonomics
pub use actions::{apply_action, Action, ActionOutcome};
pub use actor::Actor;
pub use admin::AdminEdit;
pub use board::WardId;
pub use end_game::{EndGameSummary, PlayerResult};
pub use game_transition::GameTransition;
pub use log::{LogEntry, LogKind, LogTag};
pub use nationality::{Nationality, Nationals};
pub use office::Office;
pub use player::{Player, PlayerId};
pub use setup::{new_game, Seat};
pub use state::{Game, Phase, SubPhase};
pub use ward::Ward;
