#![allow(dead_code)]

use std::sync::Arc;

use tammany::domain::{apply_action, Action, Actor, Game, Nationality, Office, Phase, Seat};
use tammany::{EngineConfig, GameFlowService, InMemoryGameStore, MemoryNotifier};

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

pub const NAMES: [&str; 5] = ["Ann", "Bo", "Cy", "Dee", "Ed"];

pub fn seats(n: usize) -> Vec<Seat> {
    NAMES
        .iter()
        .take(n)
        .enumerate()
        .map(|(i, name)| Seat::new(i as i64 + 100, *name))
        .collect()
}

pub struct Harness {
    pub service: GameFlowService,
    pub notifier: Arc<MemoryNotifier>,
}

pub fn harness_with(notifier: MemoryNotifier) -> Harness {
    let notifier = Arc::new(notifier);
    let service = GameFlowService::new(
        Arc::new(InMemoryGameStore::new()),
        notifier.clone(),
        &EngineConfig::default(),
    );
    Harness { service, notifier }
}

pub fn harness() -> Harness {
    harness_with(MemoryNotifier::new())
}

pub fn current_actor(game: &Game) -> Actor {
    let current = game
        .current_player
        .and_then(|id| game.player(id))
        .expect("someone is current");
    Actor::user(current.user_id)
}

/// Every action a simple bot would consider, most turn-ending first.
fn candidates(game: &Game) -> Vec<Action> {
    let mut out = vec![
        Action::FinishTurn { confirm: false },
        Action::FinishTurn { confirm: true },
    ];

    for n in Nationality::ALL {
        let mut chips = [0i32; 4];
        chips[n.index()] = 1;
        out.push(Action::Bid { chips });
    }
    out.push(Action::Bid { chips: [0; 4] });

    for n in Nationality::ALL {
        out.push(Action::TakeChip { nationality: n });
    }

    for office in Office::ALL {
        for p in &game.players {
            out.push(Action::AssignOffice {
                office,
                player: p.id,
            });
        }
    }

    for ward in game.ward_ids() {
        out.push(Action::PlacePieces {
            ward,
            bosses: 2,
            immigrant: None,
        });
        for n in Nationality::ALL {
            out.push(Action::PlacePieces {
                ward,
                bosses: 1,
                immigrant: Some(n),
            });
            out.push(Action::PlacePieces {
                ward,
                bosses: 0,
                immigrant: Some(n),
            });
        }
        out.push(Action::PlacePieces {
            ward,
            bosses: 1,
            immigrant: None,
        });
    }
    out
}

/// First candidate the engine accepts for the current player.
pub fn next_action(game: &Game) -> Action {
    let actor = current_actor(game);
    candidates(game)
        .into_iter()
        .find(|action| {
            let mut probe = game.clone();
            apply_action(&mut probe, &actor, action.clone()).is_ok()
        })
        .unwrap_or_else(|| {
            panic!(
                "no legal action in phase {:?}, year {}",
                game.phase, game.year
            )
        })
}

pub struct PlayedGame {
    pub game: Game,
    pub version: i32,
    pub actions: usize,
    pub end_reports: usize,
}

/// Drive a stored game through the service until it is over.
pub async fn play_to_end(service: &GameFlowService, game_id: i64, version: i32) -> PlayedGame {
    let mut version = version;
    let mut game = service.load(game_id, 0).await.expect("load").game;
    let mut actions = 0;
    let mut end_reports = 0;

    while game.phase != Phase::GameOver {
        assert!(actions < 20_000, "game did not finish");
        let actor = current_actor(&game);
        let action = next_action(&game);
        let result = service
            .submit(game_id, &actor, version, action)
            .await
            .expect("bot actions are legal");
        if result.outcome.end_game.is_some() {
            end_reports += 1;
        }
        version = result.version;
        game = result.game;
        actions += 1;
    }

    PlayedGame {
        game,
        version,
        actions,
        end_reports,
    }
}
