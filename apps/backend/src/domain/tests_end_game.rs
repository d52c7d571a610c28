use crate::domain::end_game::{end_game, EndGameSummary};
use crate::domain::log::LogKind;
use crate::domain::nationality::Nationality::{English, German, Irish, Italian};
use crate::domain::nationality::Nationals;
use crate::domain::state::Phase;
use crate::domain::test_state_helpers::{at, make_game};

#[test]
fn favor_chip_leaders_and_unused_slander_chips_score() {
    let mut game = make_game(3);
    let (a, b, c) = (at(&game, 0), at(&game, 1), at(&game, 2));
    game.year = 16;
    game.player_mut(a).unwrap().chips = Nationals([3, 0, 0, 1]);
    game.player_mut(b).unwrap().chips = Nationals([3, 0, 0, 0]);
    game.player_mut(c).unwrap().chips = Nationals([0, 0, 0, 0]);
    game.player_mut(c).unwrap().slander_chips = [false, false, false, true];

    end_game(&mut game).unwrap();

    // Irish is shared, English belongs to `a`, nobody holds German or Italian
    // so all three tie on those. Three unused slander chips each for `a` and
    // `b`, one for `c`.
    assert_eq!(game.player(a).unwrap().score, 2 + 2 + 2 + 2 + 3);
    assert_eq!(game.player(b).unwrap().score, 2 + 2 + 2 + 3);
    assert_eq!(game.player(c).unwrap().score, 2 + 2 + 1);
    assert_eq!(game.winners, vec![a]);
    assert_eq!(game.phase, Phase::GameOver);
    assert_eq!(game.current_player, None);

    let favor: Vec<_> = game
        .log
        .iter()
        .filter_map(|e| match e.kind {
            LogKind::FavorChipPoints { nationality, .. } => Some((e.player, nationality)),
            _ => None,
        })
        .collect();
    assert_eq!(
        favor,
        vec![
            (Some(a), Irish),
            (Some(b), Irish),
            (Some(a), German),
            (Some(b), German),
            (Some(c), German),
            (Some(a), Italian),
            (Some(b), Italian),
            (Some(c), Italian),
            (Some(a), English),
        ]
    );
    assert!(matches!(
        game.log.last().map(|e| &e.kind),
        Some(LogKind::AnnounceWinners { winners }) if winners == &vec![a]
    ));
}

#[test]
fn tied_top_scores_share_the_win() {
    let mut game = make_game(4);
    let (a, b) = (at(&game, 0), at(&game, 1));
    game.player_mut(a).unwrap().score = 20;
    game.player_mut(b).unwrap().score = 20;

    end_game(&mut game).unwrap();

    let mut winners = game.winners.clone();
    winners.sort_unstable();
    let mut expected = vec![a, b];
    expected.sort_unstable();
    assert_eq!(winners, expected);
}

#[test]
fn summary_groups_players_by_place() {
    let mut game = make_game(4);
    let ids: Vec<u8> = game.players.iter().map(|p| p.id).collect();
    for (id, score) in ids.iter().zip([10, 14, 10, 7]) {
        game.player_mut(*id).unwrap().score = score;
    }
    end_game(&mut game).unwrap();

    let summary = EndGameSummary::from_game(&game);
    // Everyone also gained two points for each nationality, all tied at zero
    // chips, and three for unused slander chips.
    assert_eq!(summary.winners, vec![ids[1]]);
    assert_eq!(summary.winner_names, vec![game.player(ids[1]).unwrap().name.clone()]);
    assert_eq!(
        summary.places,
        vec![vec![ids[1]], vec![ids[0], ids[2]], vec![ids[3]]]
    );
    assert_eq!(summary.players.iter().map(|p| p.score).max(), Some(14 + 8 + 3));
}

#[test]
fn players_without_chips_share_the_favor_points() {
    let mut game = make_game(3);
    for p in game.players.iter_mut() {
        p.slander_chips = [false; 4];
    }

    end_game(&mut game).unwrap();

    for p in &game.players {
        assert_eq!(p.score, 4 * 2);
    }
    let favor = game
        .log
        .iter()
        .filter(|e| matches!(e.kind, LogKind::FavorChipPoints { .. }))
        .count();
    assert_eq!(favor, 4 * 3);
    assert_eq!(game.winners.len(), 3);
}
