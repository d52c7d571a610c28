//! Direct state edits for admins repairing a game.
//!
//! Edits bypass the rules but keep the state structurally sound: ids must
//! exist, played chips never exceed held chips, every ward keeps at least
//! one immigrant and one boss slot per player.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::actor::Actor;
use crate::domain::board::WardId;
use crate::domain::nationality::Nationals;
use crate::domain::player::PlayerId;
use crate::domain::rules::FINAL_YEAR;
use crate::domain::state::{Game, Phase};
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "target", rename_all = "kebab-case")]
pub enum AdminEdit {
    State {
        #[serde(default)]
        phase: Option<Phase>,
        #[serde(default)]
        year: Option<u8>,
        #[serde(default)]
        current_player: Option<PlayerId>,
    },
    Player {
        player: PlayerId,
        #[serde(default)]
        chips: Option<Nationals>,
        #[serde(default)]
        played_chips: Option<Nationals>,
        #[serde(default)]
        score: Option<u32>,
        #[serde(default)]
        performed_action: Option<bool>,
        #[serde(default)]
        candidate: Option<bool>,
        #[serde(default)]
        used_office: Option<bool>,
        #[serde(default)]
        placed_bosses: Option<u32>,
        #[serde(default)]
        placed_immigrants: Option<u32>,
        #[serde(default)]
        has_bid: Option<bool>,
    },
    Ward {
        ward: WardId,
        #[serde(default)]
        immigrants: Option<Nationals>,
        #[serde(default)]
        bosses: Option<Vec<u32>>,
        #[serde(default)]
        resolved: Option<bool>,
        #[serde(default)]
        locked_up: Option<bool>,
    },
    CastleGarden {
        counts: Nationals,
    },
    Bag {
        counts: Nationals,
    },
}

fn bad_edit(detail: impl Into<String>) -> DomainError {
    DomainError::validation_other(detail)
}

pub fn apply_admin_edit(game: &mut Game, actor: &Actor, edit: AdminEdit) -> Result<(), DomainError> {
    actor.require_admin()?;
    match edit {
        AdminEdit::State {
            phase,
            year,
            current_player,
        } => {
            if let Some(year) = year {
                if !(1..=FINAL_YEAR).contains(&year) {
                    return Err(bad_edit(format!("Year {year} is out of range.")));
                }
                game.year = year;
            }
            if let Some(pid) = current_player {
                game.find_target(pid)?;
                game.current_player = Some(pid);
            }
            if let Some(phase) = phase {
                game.phase = phase;
            }
            info!(phase = %game.phase, year = game.year, current = ?game.current_player, "Admin edited game state");
        }
        AdminEdit::Player {
            player,
            chips,
            played_chips,
            score,
            performed_action,
            candidate,
            used_office,
            placed_bosses,
            placed_immigrants,
            has_bid,
        } => {
            game.find_target(player)?;
            let p = game.require_player_mut(player)?;
            let chips = chips.unwrap_or(p.chips);
            let played = played_chips.unwrap_or(p.played_chips);
            if !chips.covers(&played) {
                return Err(DomainError::validation(
                    ValidationKind::InsufficientChips,
                    "Played chips cannot exceed held chips.",
                ));
            }
            p.chips = chips;
            p.played_chips = played;
            if let Some(v) = score {
                p.score = v;
            }
            if let Some(v) = performed_action {
                p.performed_action = v;
            }
            if let Some(v) = candidate {
                p.candidate = v;
            }
            if let Some(v) = used_office {
                p.used_office = v;
            }
            if let Some(v) = placed_bosses {
                p.placed_bosses = v;
            }
            if let Some(v) = placed_immigrants {
                p.placed_immigrants = v;
            }
            if let Some(v) = has_bid {
                p.has_bid = v;
            }
            info!(player, "Admin edited player");
        }
        AdminEdit::Ward {
            ward,
            immigrants,
            bosses,
            resolved,
            locked_up,
        } => {
            game.find_ward(ward)?;
            let num_players = game.num_players();
            if immigrants.is_some_and(|i| i.total() == 0) {
                return Err(DomainError::validation(
                    ValidationKind::LastImmigrant,
                    "A ward must keep at least one immigrant.",
                ));
            }
            if bosses.as_ref().is_some_and(|b| b.len() != num_players) {
                return Err(bad_edit(format!(
                    "Expected {num_players} boss counts for ward {ward}."
                )));
            }
            let w = game.require_ward_mut(ward)?;
            if let Some(v) = immigrants {
                w.immigrants = v;
            }
            if let Some(v) = bosses {
                w.bosses = v;
            }
            if let Some(v) = resolved {
                w.resolved = v;
            }
            if let Some(v) = locked_up {
                w.locked_up = v;
            }
            info!(ward, "Admin edited ward");
        }
        AdminEdit::CastleGarden { counts } => {
            game.castle_garden = counts;
            info!(total = counts.total(), "Admin edited Castle Garden");
        }
        AdminEdit::Bag { counts } => {
            game.bag = counts;
            info!(total = counts.total(), "Admin edited immigrant bag");
        }
    }
    Ok(())
}
