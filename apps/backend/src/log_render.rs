//! Plain-text rendering of game log entries.
//!
//! The engine only records structured [`LogKind`] data. Each tag maps to one
//! renderer function; the table is exhaustive so a new log kind without a
//! renderer fails to compile.

use crate::domain::log::{BidRecord, LogEntry, LogKind, LogTag};
use crate::domain::nationality::Nationals;
use crate::domain::player::PlayerId;
use crate::domain::state::Game;
use crate::domain::EndGameSummary;

/// Renders one log entry against the game it belongs to.
pub type Renderer = fn(&Game, &LogEntry) -> String;

pub fn renderer(tag: LogTag) -> Renderer {
    match tag {
        LogTag::PlacedPieces => placed_pieces,
        LogTag::RemovedImmigrant => removed_immigrant,
        LogTag::MovedImmigrant => moved_immigrant,
        LogTag::LockedWard => locked_ward,
        LogTag::TookFavorChip => took_favor_chip,
        LogTag::FirstSlander | LogTag::SecondSlander => slander,
        LogTag::ElectionResult => election_result,
        LogTag::ChipAward => chip_award,
        LogTag::VictoryPoints => victory_points,
        LogTag::AssignedOffice => assigned_office,
        LogTag::Immigration => immigration,
        LogTag::FavorChipPoints => favor_chip_points,
        LogTag::SlanderChipPoints => slander_chip_points,
        LogTag::AnnounceWinners => announce_winners,
    }
}

pub fn render_entry(game: &Game, entry: &LogEntry) -> String {
    renderer(entry.tag())(game, entry)
}

/// Whole log, one line per entry, prefixed by year.
pub fn render_log(game: &Game) -> Vec<String> {
    game.log
        .iter()
        .map(|e| format!("Year {}: {}", e.year, render_entry(game, e)))
        .collect()
}

/// Body of the end-of-game notification.
pub fn render_end_game_body(summary: &EndGameSummary) -> String {
    let mut lines: Vec<String> = summary
        .players
        .iter()
        .map(|p| format!("{} scored {} points.", p.name, p.score))
        .collect();
    lines.push(format!(
        "Congratulations to: {}.",
        to_sentence(&summary.winner_names)
    ));
    lines.join("\n")
}

fn name(game: &Game, player: Option<PlayerId>) -> String {
    player
        .and_then(|id| game.player(id))
        .map(|p| p.name.clone())
        .unwrap_or_else(|| "Someone".to_string())
}

fn names(game: &Game, players: &[PlayerId]) -> String {
    let list: Vec<String> = players.iter().map(|id| name(game, Some(*id))).collect();
    to_sentence(&list)
}

fn to_sentence(items: &[String]) -> String {
    match items {
        [] => "nobody".to_string(),
        [one] => one.clone(),
        [init @ .., last] => format!("{} and {last}", init.join(", ")),
    }
}

fn plural(count: u32, one: &str, many: &str) -> String {
    if count == 1 {
        format!("1 {one}")
    } else {
        format!("{count} {many}")
    }
}

fn chip_list(chips: &Nationals) -> String {
    let parts: Vec<String> = chips
        .iter()
        .filter(|(_, n)| *n > 0)
        .map(|(nat, n)| format!("{n} {nat}"))
        .collect();
    if parts.is_empty() {
        "no chips".to_string()
    } else {
        to_sentence(&parts)
    }
}

fn mismatch(entry: &LogEntry) -> String {
    format!("{:?}", entry.kind)
}

fn placed_pieces(game: &Game, entry: &LogEntry) -> String {
    let LogKind::PlacedPieces {
        ward,
        bosses,
        immigrant,
        chip,
    } = &entry.kind
    else {
        return mismatch(entry);
    };
    let mut parts = Vec::new();
    if *bosses > 0 {
        parts.push(format!(
            "placed {} in ward {ward}",
            plural(*bosses, "boss", "bosses")
        ));
    }
    if let Some(n) = immigrant {
        parts.push(format!("placed 1 {n} immigrant in ward {ward}"));
    }
    if let Some(n) = chip {
        parts.push(format!("received 1 {n} favor"));
    }
    format!("{} {}.", name(game, entry.player), to_sentence(&parts))
}

fn removed_immigrant(game: &Game, entry: &LogEntry) -> String {
    let LogKind::RemovedImmigrant { ward, nationality } = &entry.kind else {
        return mismatch(entry);
    };
    format!(
        "{} removed 1 {nationality} immigrant from ward {ward}.",
        name(game, entry.player)
    )
}

fn moved_immigrant(game: &Game, entry: &LogEntry) -> String {
    let LogKind::MovedImmigrant {
        from,
        to,
        nationality,
    } = &entry.kind
    else {
        return mismatch(entry);
    };
    format!(
        "{} moved 1 {nationality} immigrant from ward {from} to ward {to}.",
        name(game, entry.player)
    )
}

fn locked_ward(game: &Game, entry: &LogEntry) -> String {
    let LogKind::LockedWard { ward } = &entry.kind else {
        return mismatch(entry);
    };
    format!(
        "{} placed a lock-up marker in ward {ward}.",
        name(game, entry.player)
    )
}

fn took_favor_chip(game: &Game, entry: &LogEntry) -> String {
    let LogKind::TookFavorChip { nationality } = &entry.kind else {
        return mismatch(entry);
    };
    format!(
        "{} took 1 {nationality} favor chip.",
        name(game, entry.player)
    )
}

fn slander(game: &Game, entry: &LogEntry) -> String {
    let (ward, nationality, step) = match &entry.kind {
        LogKind::FirstSlander { ward, nationality } => (ward, nationality, "slandered"),
        LogKind::SecondSlander { ward, nationality } => (ward, nationality, "slandered again"),
        _ => return mismatch(entry),
    };
    format!(
        "{} {step} {} in ward {ward} using a {nationality} favor chip.",
        name(game, entry.player),
        name(game, entry.other_player)
    )
}

fn bid_line(game: &Game, bid: &BidRecord) -> String {
    format!("{} bid {}", name(game, Some(bid.player)), chip_list(&bid.chips))
}

fn election_result(game: &Game, entry: &LogEntry) -> String {
    let LogKind::ElectionResult {
        ward,
        bids,
        winner,
        contested,
    } = &entry.kind
    else {
        return mismatch(entry);
    };
    if !contested {
        return format!(
            "{} won ward {ward} unopposed.",
            name(game, *winner)
        );
    }
    let bid_lines: Vec<String> = bids.iter().map(|b| bid_line(game, b)).collect();
    let outcome = match winner {
        Some(w) => format!("{} won ward {ward}", name(game, Some(*w))),
        None => format!("Ward {ward} is undecided"),
    };
    format!("{}. {outcome}.", to_sentence(&bid_lines))
}

fn chip_award(game: &Game, entry: &LogEntry) -> String {
    let LogKind::ChipAward { grants } = &entry.kind else {
        return mismatch(entry);
    };
    if grants.is_empty() {
        return "No favor chips were awarded.".to_string();
    }
    let parts: Vec<String> = grants
        .iter()
        .map(|g| format!("{} received {}", name(game, Some(g.player)), chip_list(&g.chips)))
        .collect();
    format!("{}.", to_sentence(&parts))
}

fn victory_points(game: &Game, entry: &LogEntry) -> String {
    let LogKind::VictoryPoints { results, mayor } = &entry.kind else {
        return mismatch(entry);
    };
    let mut lines: Vec<String> = results
        .iter()
        .map(|r| {
            format!(
                "{} won {} for {}.",
                name(game, Some(r.player)),
                plural(r.wards.len() as u32, "ward", "wards"),
                plural(r.points, "point", "points")
            )
        })
        .collect();
    match mayor {
        Some(m) => lines.push(format!(
            "{} is elected Mayor.",
            name(game, Some(*m))
        )),
        None => lines.push("No one became Mayor.".to_string()),
    }
    lines.join(" ")
}

fn assigned_office(game: &Game, entry: &LogEntry) -> String {
    let LogKind::AssignedOffice { office } = &entry.kind else {
        return mismatch(entry);
    };
    format!(
        "{} appointed {} as {office}.",
        name(game, entry.player),
        name(game, entry.other_player)
    )
}

fn immigration(_game: &Game, entry: &LogEntry) -> String {
    let LogKind::Immigration { arrivals } = &entry.kind else {
        return mismatch(entry);
    };
    if arrivals.is_empty() {
        return "No immigrants arrived at Castle Garden.".to_string();
    }
    let parts: Vec<String> = arrivals
        .iter()
        .filter(|(_, n)| *n > 0)
        .map(|(nat, n)| format!("{n} {nat}"))
        .collect();
    format!(
        "{} arrived at Castle Garden.",
        to_sentence(&parts)
    )
}

fn favor_chip_points(game: &Game, entry: &LogEntry) -> String {
    let LogKind::FavorChipPoints {
        nationality,
        points,
    } = &entry.kind
    else {
        return mismatch(entry);
    };
    format!(
        "{} scored {} for the most {nationality} favor chips.",
        name(game, entry.player),
        plural(*points, "point", "points")
    )
}

fn slander_chip_points(game: &Game, entry: &LogEntry) -> String {
    let LogKind::SlanderChipPoints { points } = &entry.kind else {
        return mismatch(entry);
    };
    format!(
        "{} scored {} for unused slander chips.",
        name(game, entry.player),
        plural(*points, "point", "points")
    )
}

fn announce_winners(game: &Game, entry: &LogEntry) -> String {
    let LogKind::AnnounceWinners { winners } = &entry.kind else {
        return mismatch(entry);
    };
    format!("Congratulations to: {}.", names(game, winners))
}
