// apps/backend/src/domain/game_transition.rs

use crate::domain::player::PlayerId;
use crate::domain::state::{Game, Phase};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameLifecycleView {
    pub phase: Phase,
    pub year: u8,
    pub turn: Option<PlayerId>,
}

impl GameLifecycleView {
    pub fn of(game: &Game) -> Self {
        Self {
            phase: game.phase,
            year: game.year,
            turn: game.current_player,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameTransition {
    /// Edge-triggered: the turn became a specific player.
    TurnBecame { player_id: PlayerId },

    /// Edge-triggered: the phase changed.
    PhaseChanged { from: Phase, to: Phase },

    /// Edge-triggered: the year counter moved forward.
    YearAdvanced { year: u8 },

    /// Edge-triggered: Game moved to GameOver
    GameEnded,
}

/// Derive domain transitions from before/after lifecycle state.
pub fn derive_game_transitions(
    before: &GameLifecycleView,
    after: &GameLifecycleView,
) -> Vec<GameTransition> {
    let mut transitions = Vec::new();

    // 1. Turn change
    if let Some(player_id) = after.turn {
        if before.turn != Some(player_id) {
            transitions.push(GameTransition::TurnBecame { player_id });
        }
    }

    // 2. Phase change
    if before.phase != after.phase {
        transitions.push(GameTransition::PhaseChanged {
            from: before.phase,
            to: after.phase,
        });
    }

    // 3. Year change
    if after.year > before.year {
        transitions.push(GameTransition::YearAdvanced { year: after.year });
    }

    // 4. Game End (!GameOver -> GameOver)
    if before.phase != Phase::GameOver && after.phase == Phase::GameOver {
        transitions.push(GameTransition::GameEnded);
    }

    transitions
}
