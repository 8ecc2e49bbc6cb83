use anyhow::Context;
use maze_chase::constants::TICK_SECONDS;
use maze_chase::events::GameEvent;
use maze_chase::game::Game;
use maze_chase::input::InputState;
use tracing::{event, Level};
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;

/// Headless demo driver: runs the standard board at a fixed 60 Hz step
/// with scripted input and logs every event the simulation emits.
pub fn main() -> anyhow::Result<()> {
    // Setup tracing
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .finish()
        .with(ErrorLayer::default());

    tracing::subscriber::set_global_default(subscriber).context("Could not set global default")?;

    let mut game = Game::standard().context("Could not build standard board")?;

    // Sweep left toward the tunnel row, then patrol up and down. Enough
    // to clear a corridor of dots and usually meet a ghost.
    let script: [(InputState, u32); 5] = [
        (InputState::LEFT, 240),
        (InputState::UP, 120),
        (InputState::LEFT, 120),
        (InputState::DOWN, 240),
        (InputState::RIGHT, 240),
    ];

    event!(Level::INFO, "Starting demo loop ({:.3}ms)", TICK_SECONDS * 1000.0);

    let mut tick_no = 0u32;
    'demo: for (input, ticks) in script {
        for _ in 0..ticks {
            tick_no += 1;
            for game_event in game.tick(input, TICK_SECONDS) {
                event!(Level::INFO, tick_no, ?game_event, "Event");
                if matches!(game_event, GameEvent::PlayerCaught | GameEvent::MazeCleared) {
                    break 'demo;
                }
            }
        }
    }

    event!(
        Level::INFO,
        tick_no,
        score = game.session().score(),
        terminal = ?game.session().terminal(),
        "Demo finished"
    );

    Ok(())
}
