//! Boundary services: persistence, drafts and notifications around the
//! synchronous engine.

pub mod draft_cache;
pub mod game_flow;
pub mod games;
pub mod notifications;
pub mod store;
