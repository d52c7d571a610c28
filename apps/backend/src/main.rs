use std::sync::Arc;

use tammany::domain::Seat;
use tammany::log_render::render_log;
use tammany::telemetry::init_tracing;
use tammany::{EngineConfig, GameFlowService, InMemoryGameStore, TracingNotifier};

/// Sets up a game for the player names given on the command line and
/// prints its opening state.
#[tokio::main]
async fn main() {
    init_tracing();

    let config = match EngineConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let names: Vec<String> = std::env::args().skip(1).collect();
    if !(3..=5).contains(&names.len()) {
        eprintln!("usage: tammany NAME NAME NAME [NAME [NAME]]");
        std::process::exit(2);
    }
    let seats: Vec<Seat> = names
        .iter()
        .enumerate()
        .map(|(i, name)| Seat::new(i as i64 + 1, name.clone()))
        .collect();

    let service = GameFlowService::new(
        Arc::new(InMemoryGameStore::new()),
        Arc::new(TracingNotifier),
        &config,
    );
    let seed = rand::random::<u64>();
    let view = match service.create_game(&seats, seed).await {
        Ok(view) => view,
        Err(e) => {
            eprintln!("Could not create game: {}", e.public_message());
            std::process::exit(1);
        }
    };

    for line in render_log(&view.game) {
        println!("{line}");
    }
    match serde_json::to_string_pretty(&view) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("Could not encode game: {e}"),
    }
}
