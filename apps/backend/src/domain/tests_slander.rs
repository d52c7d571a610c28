use crate::domain::actions::Action;
use crate::domain::log::LogKind;
use crate::domain::nationality::Nationality::{German, Irish};
use crate::domain::player::PlayerId;
use crate::domain::state::Game;
use crate::domain::test_state_helpers::{act_current, at, make_game, put_bosses, reject_current, term_two_actions};
use crate::errors::domain::ValidationKind;

/// Term-two game: the first player holds Irish chips, the second player
/// has bosses in wards 10 and 13 (adjacent, both starting Irish).
fn slander_setup() -> (Game, PlayerId, PlayerId) {
    let mut game = term_two_actions(3);
    let me = at(&game, 0);
    let victim = at(&game, 1);
    game.player_mut(me).unwrap().chips.set(Irish, 3);
    put_bosses(&mut game, 10, victim, 2);
    put_bosses(&mut game, 13, victim, 1);
    (game, me, victim)
}

fn slander(ward: u8, target: PlayerId) -> Action {
    Action::Slander {
        ward,
        target,
        nationality: Irish,
    }
}

#[test]
fn first_step_costs_one_chip_and_the_term_chip() {
    let (mut game, me, victim) = slander_setup();
    let outcome = act_current(&mut game, slander(10, victim));

    assert_eq!(game.ward(10).unwrap().bosses_for(victim), 1);
    let player = game.player(me).unwrap();
    assert_eq!(player.chips.get(Irish), 2);
    assert_eq!(player.slandered, 1);
    assert!(!player.can_slander_in(2));
    assert!(game.slander.is_some());
    assert_eq!(outcome.entries[0].other_player, Some(victim));
    assert_eq!(
        outcome.entries[0].kind,
        LogKind::FirstSlander {
            ward: 10,
            nationality: Irish
        }
    );
}

#[test]
fn second_step_in_an_adjacent_ward_costs_two_chips() {
    let (mut game, me, victim) = slander_setup();
    act_current(&mut game, slander(10, victim));
    act_current(&mut game, slander(13, victim));

    assert_eq!(game.ward(13).unwrap().bosses_for(victim), 0);
    let player = game.player(me).unwrap();
    assert_eq!(player.chips.get(Irish), 0);
    assert_eq!(player.slandered, 2);
    assert!(game.slander.is_none());

    assert_eq!(
        reject_current(&mut game, slander(10, victim)),
        ValidationKind::SlanderNotAllowed
    );
}

#[test]
fn second_step_may_repeat_the_same_ward() {
    let (mut game, _, victim) = slander_setup();
    act_current(&mut game, slander(10, victim));
    act_current(&mut game, slander(10, victim));
    assert_eq!(game.ward(10).unwrap().bosses_for(victim), 0);
}

#[test]
fn second_step_is_pinned_to_target_nationality_and_neighbourhood() {
    let (mut game, me, victim) = slander_setup();
    let bystander = at(&game, 2);
    put_bosses(&mut game, 10, bystander, 1);
    game.ward_mut(18).unwrap().immigrants.add(Irish, 1);
    put_bosses(&mut game, 18, victim, 1);
    game.ward_mut(10).unwrap().immigrants.add(German, 1);
    game.player_mut(me).unwrap().chips.set(German, 2);

    act_current(&mut game, slander(10, victim));

    assert_eq!(
        reject_current(&mut game, slander(10, bystander)),
        ValidationKind::InvalidSlanderTarget
    );
    assert_eq!(
        reject_current(&mut game, slander(18, victim)),
        ValidationKind::NotAdjacent
    );
    assert_eq!(
        reject_current(
            &mut game,
            Action::Slander {
                ward: 10,
                target: victim,
                nationality: German,
            }
        ),
        ValidationKind::SlanderNotAllowed
    );
}

#[test]
fn second_step_needs_two_chips() {
    let (mut game, me, victim) = slander_setup();
    game.player_mut(me).unwrap().chips.set(Irish, 2);
    act_current(&mut game, slander(10, victim));
    assert_eq!(
        reject_current(&mut game, slander(13, victim)),
        ValidationKind::InsufficientChips
    );
}

#[test]
fn any_other_action_forfeits_the_second_step() {
    let (mut game, me, victim) = slander_setup();
    act_current(&mut game, slander(10, victim));
    act_current(
        &mut game,
        Action::PlacePieces {
            ward: 12,
            bosses: 2,
            immigrant: None,
        },
    );
    assert_eq!(game.player(me).unwrap().slandered, 2);
    assert!(game.slander.is_none());
    assert_eq!(
        reject_current(&mut game, slander(13, victim)),
        ValidationKind::SlanderNotAllowed
    );
}

#[test]
fn nobody_slanders_in_the_first_term() {
    let mut game = make_game(3);
    let me = at(&game, 0);
    let victim = at(&game, 1);
    game.player_mut(me).unwrap().chips.set(Irish, 3);
    put_bosses(&mut game, 10, victim, 1);
    assert_eq!(
        reject_current(&mut game, slander(10, victim)),
        ValidationKind::SlanderNotAllowed
    );
}

#[test]
fn slander_targets_must_be_valid() {
    let (mut game, me, victim) = slander_setup();
    put_bosses(&mut game, 11, me, 1);
    assert_eq!(
        reject_current(&mut game, slander(11, me)),
        ValidationKind::InvalidSlanderTarget
    );
    assert_eq!(
        reject_current(&mut game, slander(16, victim)),
        ValidationKind::InvalidSlanderTarget
    );
    assert_eq!(
        reject_current(&mut game, slander(10, 9)),
        ValidationKind::InvalidPlayer
    );
    assert_eq!(
        reject_current(
            &mut game,
            Action::Slander {
                ward: 10,
                target: victim,
                nationality: German,
            }
        ),
        ValidationKind::SlanderNotAllowed
    );
}

#[test]
fn slander_needs_a_matching_chip() {
    let (mut game, me, victim) = slander_setup();
    game.player_mut(me).unwrap().chips.set(Irish, 0);
    assert_eq!(
        reject_current(&mut game, slander(10, victim)),
        ValidationKind::InsufficientChips
    );
}
