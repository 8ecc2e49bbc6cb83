#![allow(dead_code)]

use maze_chase::direction::Direction;
use maze_chase::error::GameResult;
use maze_chase::events::GameEvent;
use maze_chase::game::Game;
use maze_chase::input::InputState;
use maze_chase::rng::{Headings, ScriptedDirections};

/// 60 Hz fixed step used throughout the tests.
pub const DT: f32 = 1.0 / 60.0;

/// Open 5x5 arena with no pickups and no ghosts. Player-friendly cells
/// are all `EmptyPath`.
pub const ARENA: [[u8; 5]; 5] = [
    [1, 1, 1, 1, 1],
    [1, 2, 2, 2, 1],
    [1, 2, 2, 2, 1],
    [1, 2, 2, 2, 1],
    [1, 1, 1, 1, 1],
];

/// Single corridor holding exactly one dot, two cells right of the
/// usual start at (1, 1).
pub const ONE_DOT: [[u8; 5]; 3] = [
    [1, 1, 1, 1, 1],
    [1, 2, 0, 2, 1],
    [1, 1, 1, 1, 1],
];

/// Corridor with tunnel mouths at both ends and no pickups.
pub const TUNNEL: [[u8; 5]; 3] = [
    [1, 1, 1, 1, 1],
    [5, 2, 2, 2, 5],
    [1, 1, 1, 1, 1],
];

/// Two chambers split by a wall column: the player is sealed on the
/// left with two power pellets, a single ghost lives on the right. The
/// ghost can never reach the player.
pub const CHAMBERS: [[u8; 7]; 4] = [
    [1, 1, 1, 1, 1, 1, 1],
    [1, 2, 3, 1, 2, 2, 1],
    [1, 2, 3, 1, 2, 4, 1],
    [1, 1, 1, 1, 1, 1, 1],
];

/// Like [`CHAMBERS`], but the right chamber houses two ghosts. The
/// spare dot next to the pellet keeps the board from clearing when the
/// pellet is eaten.
pub const PAIR_CHAMBERS: [[u8; 8]; 4] = [
    [1, 1, 1, 1, 1, 1, 1, 1],
    [1, 2, 3, 1, 2, 2, 2, 1],
    [1, 2, 0, 1, 2, 4, 4, 1],
    [1, 1, 1, 1, 1, 1, 1, 1],
];

/// Open room with one house cell and a power pellet, all reachable by
/// both the player and the ghost. The spare dot keeps the board from
/// clearing mid-scenario.
pub const SHARED_ROOM: [[u8; 7]; 5] = [
    [1, 1, 1, 1, 1, 1, 1],
    [1, 2, 3, 2, 2, 2, 1],
    [1, 2, 2, 2, 2, 4, 1],
    [1, 2, 2, 2, 2, 0, 1],
    [1, 1, 1, 1, 1, 1, 1],
];

pub fn rows(layout: &[impl AsRef<[u8]>]) -> Vec<&[u8]> {
    layout.iter().map(|row| row.as_ref()).collect()
}

/// A game over `layout` whose ghosts draw headings from a fixed script
/// (cycling) and never pass spontaneous re-roll checks.
pub fn scripted_game(layout: &[impl AsRef<[u8]>], start: (usize, usize), headings: Vec<Direction>) -> GameResult<Game> {
    Game::with_direction_source(&rows(layout), start, Headings(Box::new(ScriptedDirections::new(headings, false))))
}

/// Ticks with held input until `stop` matches an emitted event or the
/// tick budget runs out. Returns all events seen, in emission order.
pub fn tick_until(game: &mut Game, input: InputState, max_ticks: u32, stop: impl Fn(&GameEvent) -> bool) -> Vec<GameEvent> {
    let mut seen = Vec::new();
    for _ in 0..max_ticks {
        let events = game.tick(input, DT);
        let done = events.iter().any(&stop);
        seen.extend(events);
        if done {
            return seen;
        }
    }
    seen
}

/// Ticks for (roughly) `seconds` of simulated time with held input.
pub fn run_for(game: &mut Game, input: InputState, seconds: f32) -> Vec<GameEvent> {
    let ticks = (seconds / DT).ceil() as u32;
    let mut seen = Vec::new();
    for _ in 0..ticks {
        seen.extend(game.tick(input, DT));
    }
    seen
}
