use crate::domain::log::{ChipGrant, LogKind};
use crate::domain::nationality::Nationality::{German, Irish};
use crate::domain::nationality::Nationals;
use crate::domain::office::Office;
use crate::domain::player::PlayerId;
use crate::domain::scoring::{award_favor_chips, rotate_turn_order, score_victory_points, wards_won};
use crate::domain::state::Game;
use crate::domain::test_state_helpers::{at, give_office, make_game, put_bosses, set_current};

/// `a` wins wards 7, 8 and 9; `b` wins wards 10, 11 and 12.
fn three_wards_each() -> (Game, PlayerId, PlayerId) {
    let mut game = make_game(3);
    let (a, b) = (at(&game, 0), at(&game, 1));
    for ward in [7, 8, 9] {
        put_bosses(&mut game, ward, a, 1);
    }
    for ward in [10, 11, 12] {
        put_bosses(&mut game, ward, b, 1);
    }
    (game, a, b)
}

#[test]
fn turn_order_rotates_to_the_mayor() {
    let mut game = make_game(4);
    let order: Vec<PlayerId> = game.players.iter().map(|p| p.id).collect();
    give_office(&mut game, order[2], Office::Mayor);
    rotate_turn_order(&mut game);
    let rotated: Vec<PlayerId> = game.players.iter().map(|p| p.id).collect();
    assert_eq!(rotated, vec![order[2], order[3], order[0], order[1]]);
}

#[test]
fn rotation_without_a_mayor_keeps_the_order() {
    let mut game = make_game(3);
    let before = game.players.clone();
    rotate_turn_order(&mut game);
    assert_eq!(game.players, before);
}

#[test]
fn favor_chips_go_to_the_controlling_players() {
    let mut game = make_game(3);
    let (a, b) = (at(&game, 0), at(&game, 1));
    // Wards 10 and 13 each start with one Irish immigrant.
    put_bosses(&mut game, 10, a, 1);
    put_bosses(&mut game, 13, b, 1);
    game.ward_mut(13).unwrap().immigrants.add(German, 2);

    let grants = award_favor_chips(&mut game).unwrap();

    // Nobody controls Italian or English immigrants, so all three tie at zero.
    let c = at(&game, 2);
    assert_eq!(
        grants,
        vec![
            ChipGrant {
                player: a,
                chips: Nationals([3, 0, 3, 3]),
            },
            ChipGrant {
                player: b,
                chips: Nationals([3, 3, 3, 3]),
            },
            ChipGrant {
                player: c,
                chips: Nationals([0, 0, 3, 3]),
            },
        ]
    );
    assert_eq!(game.player(a).unwrap().chips.get(Irish), 3);
    assert_eq!(game.player(b).unwrap().chips.get(German), 3);
    assert_eq!(game.player(c).unwrap().chips.get(German), 0);
}

#[test]
fn an_empty_board_pays_everyone_for_every_nationality() {
    let mut game = make_game(3);
    let grants = award_favor_chips(&mut game).unwrap();
    assert_eq!(grants.len(), 3);
    for p in &game.players {
        assert_eq!(p.chips, Nationals([3, 3, 3, 3]));
    }
    assert!(matches!(
        game.log.last().map(|e| &e.kind),
        Some(LogKind::ChipAward { grants }) if grants.len() == 3
    ));
}

#[test]
fn ward_fourteen_scores_double() {
    let mut game = make_game(3);
    let a = at(&game, 0);
    put_bosses(&mut game, 14, a, 1);
    put_bosses(&mut game, 15, a, 1);
    let won = wards_won(&game);
    assert_eq!(won[0].wards, vec![14, 15]);
    assert_eq!(won[0].points, 3);
}

#[test]
fn first_boss_holder_in_turn_order_wins_the_ward() {
    let mut game = make_game(3);
    let (a, b) = (at(&game, 0), at(&game, 1));
    put_bosses(&mut game, 10, b, 3);
    put_bosses(&mut game, 10, a, 1);
    let won = wards_won(&game);
    assert_eq!(won[0].wards, vec![10]);
    assert!(won[1].wards.is_empty());
}

#[test]
fn locked_wards_still_score_for_their_holder() {
    let mut game = make_game(3);
    let a = at(&game, 0);
    put_bosses(&mut game, 10, a, 2);
    game.ward_mut(10).unwrap().locked_up = true;
    assert_eq!(wards_won(&game)[0].wards, vec![10]);
    assert_eq!(game.controlled_by(a, Irish), 1);

    let mayor = score_victory_points(&mut game).unwrap();

    assert_eq!(mayor, Some(a));
    assert_eq!(game.player(a).unwrap().score, 1 + 3);
}

#[test]
fn most_wards_takes_the_mayoralty() {
    let mut game = make_game(3);
    let (a, b) = (at(&game, 0), at(&game, 1));
    put_bosses(&mut game, 7, a, 1);
    put_bosses(&mut game, 8, b, 1);
    put_bosses(&mut game, 9, b, 1);
    give_office(&mut game, a, Office::ChiefOfPolice);

    let mayor = score_victory_points(&mut game).unwrap();

    assert_eq!(mayor, Some(b));
    assert_eq!(game.player(b).unwrap().score, 2 + 3);
    assert_eq!(game.player(a).unwrap().score, 1);
    assert_eq!(game.player(a).unwrap().office, None);
    assert_eq!(game.current_player, Some(b));
}

#[test]
fn more_chips_break_a_ward_tie() {
    let (mut game, a, b) = three_wards_each();
    game.player_mut(a).unwrap().chips = Nationals([1, 1, 0, 0]);
    game.player_mut(b).unwrap().chips = Nationals([0, 0, 0, 3]);

    let mayor = score_victory_points(&mut game).unwrap();

    assert_eq!(mayor, Some(b));
    assert!(game.player(b).unwrap().holds(Office::Mayor));
    assert_eq!(game.player(b).unwrap().score, 3 + 3);
    assert_eq!(game.player(a).unwrap().score, 3);
}

#[test]
fn exact_tie_keeps_the_incumbent_mayor() {
    let (mut game, a, b) = three_wards_each();
    let incumbent = at(&game, 2);
    give_office(&mut game, incumbent, Office::Mayor);
    give_office(&mut game, a, Office::DeputyMayor);
    game.player_mut(a).unwrap().chips = Nationals([1, 1, 0, 0]);
    game.player_mut(b).unwrap().chips = Nationals([1, 1, 0, 0]);

    let mayor = score_victory_points(&mut game).unwrap();

    assert_eq!(mayor, Some(incumbent));
    let kept = game.player(incumbent).unwrap();
    assert!(kept.holds(Office::Mayor));
    assert_eq!(kept.score, 3);
    assert_eq!(game.player(a).unwrap().office, None);
    assert_eq!(game.player(a).unwrap().score, 3);
    assert_eq!(game.current_player, Some(incumbent));
}

#[test]
fn exact_tie_without_an_incumbent_seats_nobody() {
    let (mut game, a, b) = three_wards_each();
    game.player_mut(a).unwrap().chips = Nationals([1, 1, 0, 0]);
    game.player_mut(b).unwrap().chips = Nationals([1, 1, 0, 0]);
    set_current(&mut game, b);

    assert_eq!(score_victory_points(&mut game).unwrap(), None);
    assert!(game.mayor().is_none());
    assert_eq!(game.player(a).unwrap().score, 3);
    assert_eq!(game.current_player, Some(a));
}

#[test]
fn chips_decide_the_mayor_when_nobody_won_a_ward() {
    let mut game = make_game(3);
    let b = at(&game, 1);
    game.player_mut(b).unwrap().chips = Nationals([0, 1, 0, 0]);

    assert_eq!(score_victory_points(&mut game).unwrap(), Some(b));
    assert!(game.player(b).unwrap().holds(Office::Mayor));
    assert_eq!(game.player(b).unwrap().score, 3);
    assert_eq!(game.current_player, Some(b));
}

#[test]
fn sitting_mayor_wins_an_otherwise_equal_tie() {
    let (mut game, a, b) = three_wards_each();
    give_office(&mut game, b, Office::Mayor);
    game.player_mut(a).unwrap().chips = Nationals([1, 1, 0, 0]);
    game.player_mut(b).unwrap().chips = Nationals([1, 1, 0, 0]);

    assert_eq!(score_victory_points(&mut game).unwrap(), Some(b));
    assert_eq!(game.player(b).unwrap().score, 3 + 3);
}

#[test]
fn irish_chips_outrank_other_chips_in_a_tie() {
    let (mut game, a, b) = three_wards_each();
    game.player_mut(a).unwrap().chips = Nationals([0, 2, 0, 0]);
    game.player_mut(b).unwrap().chips = Nationals([1, 0, 0, 1]);
    assert_eq!(score_victory_points(&mut game).unwrap(), Some(b));
}
