//! Single entry point for player and admin actions.
//!
//! Every action runs against a copy of the game; the copy replaces the
//! original only when the action succeeds, so a failed action never leaves
//! partial changes behind.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::actor::Actor;
use crate::domain::admin::{apply_admin_edit, AdminEdit};
use crate::domain::assign_offices::assign_office;
use crate::domain::bidding::bid;
use crate::domain::board::WardId;
use crate::domain::end_game::EndGameSummary;
use crate::domain::favor_chips::{deputy_take_chip, take_chip};
use crate::domain::game_transition::{derive_game_transitions, GameLifecycleView, GameTransition};
use crate::domain::guards::require_no_office_warning;
use crate::domain::log::LogEntry;
use crate::domain::nationality::Nationality;
use crate::domain::office::Office;
use crate::domain::office_powers::{lockup_ward, move_from, move_to, remove_immigrant};
use crate::domain::placement::place_pieces;
use crate::domain::player::PlayerId;
use crate::domain::slander::slander;
use crate::domain::state::{Game, Phase};
use crate::domain::turn_flow::{cancel_finish, finish_turn, select_area, FinishOutcome};
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum Action {
    PlacePieces {
        ward: WardId,
        #[serde(default)]
        bosses: i32,
        #[serde(default)]
        immigrant: Option<Nationality>,
    },
    RemoveImmigrant {
        ward: WardId,
        nationality: Nationality,
    },
    MoveFrom {
        ward: WardId,
        nationality: Nationality,
    },
    MoveTo {
        ward: WardId,
        nationality: Nationality,
    },
    LockupWard {
        ward: WardId,
    },
    DeputyTakeChip {
        nationality: Nationality,
    },
    TakeChip {
        nationality: Nationality,
    },
    Slander {
        ward: WardId,
        target: PlayerId,
        nationality: Nationality,
    },
    Bid {
        /// Chips per nationality, in `Nationality::ALL` order.
        chips: [i32; 4],
    },
    AssignOffice {
        office: Office,
        player: PlayerId,
    },
    FinishTurn {
        #[serde(default)]
        confirm: bool,
    },
    CancelFinish,
    SelectArea {
        ward: WardId,
    },
    Admin(AdminEdit),
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::PlacePieces { .. } => "place-pieces",
            Action::RemoveImmigrant { .. } => "remove-immigrant",
            Action::MoveFrom { .. } => "move-from",
            Action::MoveTo { .. } => "move-to",
            Action::LockupWard { .. } => "lockup-ward",
            Action::DeputyTakeChip { .. } => "deputy-take-chip",
            Action::TakeChip { .. } => "take-chip",
            Action::Slander { .. } => "slander",
            Action::Bid { .. } => "bid",
            Action::AssignOffice { .. } => "assign-office",
            Action::FinishTurn { .. } => "finish-turn",
            Action::CancelFinish => "cancel-finish",
            Action::SelectArea { .. } => "select-area",
            Action::Admin(_) => "admin",
        }
    }

    /// Allowed while the office warning is showing.
    fn resolves_office_warning(&self) -> bool {
        matches!(
            self,
            Action::FinishTurn { confirm: true } | Action::CancelFinish | Action::Admin(_)
        )
    }
}

/// What an applied action produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionOutcome {
    /// Log entries appended by the action.
    pub entries: Vec<LogEntry>,
    pub transitions: Vec<GameTransition>,
    /// Finishing was paused for the office warning.
    pub needs_confirmation: bool,
    /// The turn passed to another player (or the game ended).
    pub turn_completed: bool,
    pub end_game: Option<EndGameSummary>,
    pub admin_edit: bool,
}

impl ActionOutcome {
    /// Completed turns and admin edits are committed; anything else stays
    /// a draft the player can still undo.
    pub fn should_persist(&self) -> bool {
        self.turn_completed || self.admin_edit
    }
}

pub fn apply_action(
    game: &mut Game,
    actor: &Actor,
    action: Action,
) -> Result<ActionOutcome, DomainError> {
    if game.phase == Phase::GameOver {
        return Err(DomainError::validation(
            ValidationKind::GameOver,
            "The game is over.",
        ));
    }
    if !action.resolves_office_warning() {
        require_no_office_warning(game)?;
    }

    let name = action.name();
    let before = GameLifecycleView::of(game);
    let log_start = game.log.len();
    let mut next = game.clone();
    let mut outcome = ActionOutcome::default();

    match action {
        Action::PlacePieces {
            ward,
            bosses,
            immigrant,
        } => place_pieces(&mut next, actor, ward, bosses, immigrant)?,
        Action::RemoveImmigrant { ward, nationality } => {
            remove_immigrant(&mut next, actor, ward, nationality)?
        }
        Action::MoveFrom { ward, nationality } => move_from(&mut next, actor, ward, nationality)?,
        Action::MoveTo { ward, nationality } => move_to(&mut next, actor, ward, nationality)?,
        Action::LockupWard { ward } => lockup_ward(&mut next, actor, ward)?,
        Action::DeputyTakeChip { nationality } => deputy_take_chip(&mut next, actor, nationality)?,
        Action::TakeChip { nationality } => take_chip(&mut next, actor, nationality)?,
        Action::Slander {
            ward,
            target,
            nationality,
        } => slander(&mut next, actor, ward, target, nationality)?,
        Action::Bid { chips } => bid(&mut next, actor, chips)?,
        Action::AssignOffice { office, player } => assign_office(&mut next, actor, office, player)?,
        Action::FinishTurn { confirm } => match finish_turn(&mut next, actor, confirm)? {
            FinishOutcome::NeedsConfirmation => outcome.needs_confirmation = true,
            FinishOutcome::Advanced => outcome.turn_completed = true,
        },
        Action::CancelFinish => cancel_finish(&mut next, actor)?,
        Action::SelectArea { ward } => select_area(&mut next, actor, ward)?,
        Action::Admin(edit) => {
            apply_admin_edit(&mut next, actor, edit)?;
            outcome.admin_edit = true;
        }
    }

    let after = GameLifecycleView::of(&next);
    outcome.transitions = derive_game_transitions(&before, &after);
    // Office assignment hands the turn over without a finish.
    if before.turn != after.turn {
        outcome.turn_completed = true;
    }
    outcome.entries = next.log.get(log_start..).map(<[_]>::to_vec).unwrap_or_default();
    if outcome
        .transitions
        .contains(&GameTransition::GameEnded)
    {
        outcome.end_game = Some(EndGameSummary::from_game(&next));
    }

    debug!(
        action = name,
        user_id = actor.user_id,
        entries = outcome.entries.len(),
        turn_completed = outcome.turn_completed,
        "Applied action"
    );
    *game = next;
    Ok(outcome)
}
