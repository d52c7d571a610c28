use crate::domain::actions::Action;
use crate::domain::log::LogKind;
use crate::domain::nationality::Nationality;
use crate::domain::state::Phase;
use crate::domain::test_state_helpers::{act_current, actor_for, at, make_game, reject, reject_current};
use crate::errors::domain::ValidationKind;

fn bosses(ward: u8, count: i32) -> Action {
    Action::PlacePieces {
        ward,
        bosses: count,
        immigrant: None,
    }
}

#[test]
fn two_bosses_complete_the_action() {
    let mut game = make_game(3);
    let pid = at(&game, 0);
    act_current(&mut game, bosses(10, 2));

    let player = game.player(pid).unwrap();
    assert!(player.performed_action);
    assert_eq!(player.placed_bosses, 2);
    assert_eq!(game.ward(10).unwrap().bosses_for(pid), 2);
}

#[test]
fn one_piece_leaves_the_player_mid_placement() {
    let mut game = make_game(3);
    let pid = at(&game, 0);
    act_current(&mut game, bosses(10, 1));
    let player = game.player(pid).unwrap();
    assert!(!player.performed_action);
    assert!(player.is_mid_placement());

    act_current(&mut game, bosses(11, 1));
    assert!(game.player(pid).unwrap().performed_action);
}

#[test]
fn castle_garden_immigrant_earns_a_favor_chip() {
    let mut game = make_game(3);
    let pid = at(&game, 0);
    let n = game.castle_garden.present().next().unwrap();
    let garden_before = game.castle_garden.get(n);
    let ward_before = game.ward(12).unwrap().immigrants.get(n);

    let outcome = act_current(
        &mut game,
        Action::PlacePieces {
            ward: 12,
            bosses: 1,
            immigrant: Some(n),
        },
    );

    assert_eq!(game.castle_garden.get(n), garden_before - 1);
    assert_eq!(game.ward(12).unwrap().immigrants.get(n), ward_before + 1);
    assert_eq!(game.player(pid).unwrap().chips.get(n), 1);
    let expected = LogKind::PlacedPieces {
        ward: 12,
        bosses: 1,
        immigrant: Some(n),
        chip: Some(n),
    };
    assert_eq!(outcome.entries.len(), 1);
    assert_eq!(outcome.entries[0].kind, expected);
    assert_eq!(outcome.entries[0].player, Some(pid));
}

#[test]
fn piece_limits_are_enforced() {
    let mut game = make_game(3);
    assert_eq!(
        reject_current(&mut game, bosses(10, 3)),
        ValidationKind::InvalidPieceCount
    );
    assert_eq!(
        reject_current(&mut game, bosses(10, 0)),
        ValidationKind::InvalidPieceCount
    );
    assert_eq!(
        reject_current(&mut game, bosses(10, -1)),
        ValidationKind::InvalidPieceCount
    );

    act_current(&mut game, bosses(10, 1));
    assert_eq!(
        reject_current(&mut game, bosses(11, 2)),
        ValidationKind::InvalidPieceCount
    );
}

#[test]
fn huge_boss_counts_with_an_immigrant_are_rejected() {
    let mut game = make_game(3);
    let n = game.castle_garden.present().next().unwrap();
    for count in [i32::MAX, i32::MIN] {
        let kind = reject_current(
            &mut game,
            Action::PlacePieces {
                ward: 10,
                bosses: count,
                immigrant: Some(n),
            },
        );
        assert_eq!(kind, ValidationKind::InvalidPieceCount);
    }
}

#[test]
fn only_one_immigrant_per_turn() {
    let mut game = make_game(3);
    let first = game.castle_garden.present().next().unwrap();
    act_current(
        &mut game,
        Action::PlacePieces {
            ward: 10,
            bosses: 0,
            immigrant: Some(first),
        },
    );
    let second = game.castle_garden.present().next().unwrap();
    let kind = reject_current(
        &mut game,
        Action::PlacePieces {
            ward: 11,
            bosses: 0,
            immigrant: Some(second),
        },
    );
    assert_eq!(kind, ValidationKind::InvalidPieceCount);
}

#[test]
fn missing_castle_garden_nationality_is_rejected() {
    let mut game = make_game(3);
    let absent = Nationality::ALL
        .into_iter()
        .find(|&n| game.castle_garden.get(n) == 0);
    // The garden holds three cubes, so at least one nationality is absent.
    let absent = absent.unwrap();
    let kind = reject_current(
        &mut game,
        Action::PlacePieces {
            ward: 10,
            bosses: 1,
            immigrant: Some(absent),
        },
    );
    assert_eq!(kind, ValidationKind::CastleGardenEmpty);
}

#[test]
fn placement_rules_around_turn_and_ward() {
    let mut game = make_game(3);
    let other = actor_for(&game, at(&game, 1));
    let err = reject(&mut game, &other, bosses(10, 2));
    assert_eq!(err.validation_kind(), Some(&ValidationKind::OutOfTurn));

    assert_eq!(
        reject_current(&mut game, bosses(3, 2)),
        ValidationKind::InvalidWard
    );

    game.ward_mut(10).unwrap().locked_up = true;
    assert_eq!(
        reject_current(&mut game, bosses(10, 2)),
        ValidationKind::WardLocked
    );

    act_current(&mut game, bosses(11, 2));
    assert_eq!(
        reject_current(&mut game, bosses(12, 1)),
        ValidationKind::AlreadyPerformedAction
    );
}

#[test]
fn election_winner_places_an_immigrant_from_the_bag() {
    let mut game = make_game(3);
    game.phase = Phase::PlaceImmigrant;
    let pid = at(&game, 0);
    let bag_before = game.bag.get(Nationality::German);
    let garden_before = game.castle_garden;

    assert_eq!(
        reject_current(
            &mut game,
            Action::PlacePieces {
                ward: 10,
                bosses: 1,
                immigrant: Some(Nationality::German),
            }
        ),
        ValidationKind::InvalidPieceCount
    );

    act_current(
        &mut game,
        Action::PlacePieces {
            ward: 10,
            bosses: 0,
            immigrant: Some(Nationality::German),
        },
    );
    assert_eq!(game.bag.get(Nationality::German), bag_before - 1);
    assert_eq!(game.castle_garden, garden_before);
    let player = game.player(pid).unwrap();
    assert!(player.performed_action);
    assert_eq!(player.chips.total(), 0);
}

#[test]
fn empty_bag_blocks_the_reward_placement() {
    let mut game = make_game(3);
    game.phase = Phase::PlaceImmigrant;
    game.bag.set(Nationality::English, 0);
    let kind = reject_current(
        &mut game,
        Action::PlacePieces {
            ward: 10,
            bosses: 0,
            immigrant: Some(Nationality::English),
        },
    );
    assert_eq!(kind, ValidationKind::ImmigrantBagEmpty);
}
