use crate::domain::actions::Action;
use crate::domain::game_transition::GameTransition;
use crate::domain::nationality::Nationality;
use crate::domain::office::Office;
use crate::domain::state::{Game, Phase, SubPhase};
use crate::domain::test_state_helpers::{
    act_current, admin, at, give_office, make_game, put_bosses, reject, reject_current,
};
use crate::errors::domain::ValidationKind;

fn place_two(ward: u8) -> Action {
    Action::PlacePieces {
        ward,
        bosses: 2,
        immigrant: None,
    }
}

fn finish() -> Action {
    Action::FinishTurn { confirm: false }
}

/// Every player places two bosses in their own ward and finishes.
fn play_year(game: &mut Game, wards: &[u8]) {
    for &ward in wards.iter().take(game.num_players()) {
        act_current(game, place_two(ward));
        act_current(game, finish());
    }
}

#[test]
fn four_players_finish_year_one_without_elections() {
    let mut game = make_game(4);
    let first = at(&game, 0);
    let order: Vec<u8> = game.players.iter().map(|p| p.id).collect();

    for (i, ward) in [4, 5, 6, 7].into_iter().enumerate() {
        assert_eq!(game.current_player, Some(order[i]));
        act_current(&mut game, place_two(ward));
        act_current(&mut game, finish());
    }

    assert_eq!(game.phase, Phase::Actions);
    assert_eq!(game.year, 2);
    assert_eq!(game.current_player, Some(first));
    assert_eq!(game.castle_garden.total(), 4);
    for (i, ward) in [4, 5, 6, 7].into_iter().enumerate() {
        assert_eq!(game.ward(ward).unwrap().bosses_for(order[i]), 2);
    }
}

#[test]
fn finishing_passes_the_turn_and_reports_it() {
    let mut game = make_game(3);
    let next = at(&game, 1);
    act_current(&mut game, place_two(10));
    let outcome = act_current(&mut game, finish());
    assert!(outcome.turn_completed);
    assert!(outcome.should_persist());
    assert_eq!(
        outcome.transitions,
        vec![GameTransition::TurnBecame { player_id: next }]
    );
}

#[test]
fn placing_pieces_is_a_draft_until_the_turn_ends() {
    let mut game = make_game(3);
    let outcome = act_current(&mut game, place_two(10));
    assert!(!outcome.turn_completed);
    assert!(!outcome.should_persist());
}

#[test]
fn finishing_requires_an_action() {
    let mut game = make_game(3);
    assert_eq!(reject_current(&mut game, finish()), ValidationKind::NoActionPerformed);
}

#[test]
fn unused_office_asks_for_confirmation() {
    let mut game = make_game(3);
    let (me, next) = (at(&game, 0), at(&game, 1));
    give_office(&mut game, me, Office::DeputyMayor);
    act_current(&mut game, place_two(10));

    let outcome = act_current(&mut game, finish());
    assert!(outcome.needs_confirmation);
    assert!(!outcome.turn_completed);
    assert_eq!(game.sub_phase, Some(SubPhase::OfficeWarning));
    assert_eq!(game.current_player, Some(me));

    // Only confirming or cancelling is possible now.
    assert_eq!(
        reject_current(
            &mut game,
            Action::DeputyTakeChip {
                nationality: Nationality::Irish
            }
        ),
        ValidationKind::FinishPending
    );
    assert_eq!(reject_current(&mut game, finish()), ValidationKind::FinishPending);

    act_current(&mut game, Action::CancelFinish);
    assert_eq!(game.sub_phase, None);

    act_current(&mut game, finish());
    let outcome = act_current(&mut game, Action::FinishTurn { confirm: true });
    assert!(outcome.turn_completed);
    assert_eq!(game.sub_phase, None);
    assert_eq!(game.current_player, Some(next));
}

#[test]
fn used_office_finishes_without_warning() {
    let mut game = make_game(3);
    let me = at(&game, 0);
    give_office(&mut game, me, Office::DeputyMayor);
    act_current(
        &mut game,
        Action::DeputyTakeChip {
            nationality: Nationality::German,
        },
    );
    act_current(&mut game, place_two(10));
    let outcome = act_current(&mut game, finish());
    assert!(outcome.turn_completed);
}

#[test]
fn cancel_without_a_pending_finish_is_rejected() {
    let mut game = make_game(3);
    assert_eq!(
        reject_current(&mut game, Action::CancelFinish),
        ValidationKind::FinishPending
    );
}

#[test]
fn selected_ward_is_cleared_when_the_turn_passes() {
    let mut game = make_game(3);
    act_current(&mut game, Action::SelectArea { ward: 12 });
    assert_eq!(game.selected_ward, Some(12));
    assert_eq!(
        reject_current(&mut game, Action::SelectArea { ward: 2 }),
        ValidationKind::InvalidWard
    );
    act_current(&mut game, place_two(12));
    act_current(&mut game, finish());
    assert_eq!(game.selected_ward, None);
}

#[test]
fn election_year_wrap_starts_elections() {
    let mut game = make_game(3);
    game.year = 4;
    let a = at(&game, 0);
    let b = at(&game, 1);
    put_bosses(&mut game, 10, a, 1);
    put_bosses(&mut game, 10, b, 1);

    play_year(&mut game, &[11, 12, 13]);

    assert_eq!(game.phase, Phase::Elections);
    assert_eq!(game.year, 4);
    // Ward 10 is the lowest ward with bosses and both hold some.
    assert_eq!(game.current_ward, Some(10));
    assert_eq!(game.current_player, Some(a));
}

#[test]
fn year_fifteen_rolls_into_sixteen() {
    let mut game = make_game(3);
    game.year = 15;
    play_year(&mut game, &[10, 11, 12]);
    assert_eq!(game.phase, Phase::Actions);
    assert_eq!(game.year, 16);
}

#[test]
fn game_ends_after_the_final_year_wrap() {
    let mut game = make_game(3);
    game.year = 16;
    let order: Vec<u8> = game.players.iter().map(|p| p.id).collect();

    play_year(&mut game, &[10, 11, 12]);

    // Each player won one ward uncontested and takes a chip for it.
    let mut end = None;
    while game.phase == Phase::TakeFavorChip {
        act_current(
            &mut game,
            Action::TakeChip {
                nationality: Nationality::English,
            },
        );
        end = act_current(&mut game, finish()).end_game;
    }

    assert_eq!(game.phase, Phase::GameOver);
    assert_eq!(game.current_player, None);
    assert!(!game.winners.is_empty());
    let summary = end.expect("final turn reports the end of the game");
    assert_eq!(summary.winners, game.winners);
    assert_eq!(summary.players.len(), 3);
    assert!(order.iter().all(|id| summary.players.iter().any(|p| p.player == *id)));

    let err = reject(&mut game, &admin(), finish());
    assert_eq!(err.validation_kind(), Some(&ValidationKind::GameOver));
}
