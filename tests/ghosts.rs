use bevy_ecs::query::With;
use maze_chase::constants::{FIRST_RELEASE_DELAY, GHOST_SCORE, POWER_PELLET_SCORE};
use maze_chase::direction::Direction;
use maze_chase::events::GameEvent;
use maze_chase::input::InputState;
use maze_chase::map::{cell_center, Maze, PickupKind};
use maze_chase::session::Terminal;
use maze_chase::systems::components::{Ghost, GhostMode, GhostPersona, Player, Position};
use maze_chase::constants::Tile;
use speculoos::prelude::*;

mod common;

use common::{run_for, scripted_game, tick_until, CHAMBERS, DT, PAIR_CHAMBERS, SHARED_ROOM};

fn bounce_script() -> Vec<Direction> {
    vec![Direction::Up, Direction::Right, Direction::Down, Direction::Left]
}

#[test]
fn test_ghost_release_is_deadline_driven() {
    let mut game = scripted_game(&CHAMBERS, (1, 1), bounce_script()).unwrap();

    match game.ghost_mode(GhostPersona::Red) {
        Some(GhostMode::Caged { release_at }) => assert_eq!(release_at, FIRST_RELEASE_DELAY),
        other => panic!("expected caged ghost, got {other:?}"),
    }

    run_for(&mut game, InputState::empty(), 3.9);
    assert_that(&matches!(game.ghost_mode(GhostPersona::Red), Some(GhostMode::Caged { .. }))).is_true();

    run_for(&mut game, InputState::empty(), 0.3);
    assert_eq!(game.ghost_mode(GhostPersona::Red), Some(GhostMode::Chase));
}

#[test]
fn test_power_pellet_frightens_then_expires() {
    let mut game = scripted_game(&CHAMBERS, (1, 1), bounce_script()).unwrap();

    // Wait out the release so the ghost is actually in Chase; caged
    // ghosts are unaffected by pellets.
    run_for(&mut game, InputState::empty(), 4.2);
    assert_eq!(game.ghost_mode(GhostPersona::Red), Some(GhostMode::Chase));

    let events = tick_until(&mut game, InputState::RIGHT, 30, |event| {
        matches!(
            event,
            GameEvent::PickupConsumed {
                kind: PickupKind::PowerPellet,
                ..
            }
        )
    });
    assert_that(&events.iter().any(|e| matches!(e, GameEvent::PickupConsumed { .. }))).is_true();
    assert_that(&matches!(game.ghost_mode(GhostPersona::Red), Some(GhostMode::Frightened { .. }))).is_true();

    run_for(&mut game, InputState::empty(), 8.2);
    assert_eq!(game.ghost_mode(GhostPersona::Red), Some(GhostMode::Chase));
}

#[test]
fn test_one_pellet_frightens_every_chasing_ghost() {
    let mut game = scripted_game(&PAIR_CHAMBERS, (1, 1), bounce_script()).unwrap();

    // Both releases are staggered; wait out the second one so the pair
    // is in Chase before the pellet.
    run_for(&mut game, InputState::empty(), 6.3);
    assert_eq!(game.ghost_mode(GhostPersona::Red), Some(GhostMode::Chase));
    assert_eq!(game.ghost_mode(GhostPersona::Pink), Some(GhostMode::Chase));

    tick_until(&mut game, InputState::RIGHT, 30, |event| {
        matches!(
            event,
            GameEvent::PickupConsumed {
                kind: PickupKind::PowerPellet,
                ..
            }
        )
    });
    assert_that(&matches!(game.ghost_mode(GhostPersona::Red), Some(GhostMode::Frightened { .. }))).is_true();
    assert_that(&matches!(game.ghost_mode(GhostPersona::Pink), Some(GhostMode::Frightened { .. }))).is_true();

    // One shared deadline; both recover together.
    run_for(&mut game, InputState::empty(), 8.2);
    assert_eq!(game.ghost_mode(GhostPersona::Red), Some(GhostMode::Chase));
    assert_eq!(game.ghost_mode(GhostPersona::Pink), Some(GhostMode::Chase));
}

#[test]
fn test_second_pellet_restarts_frightened_timer() {
    let mut game = scripted_game(&CHAMBERS, (1, 1), bounce_script()).unwrap();
    run_for(&mut game, InputState::empty(), 4.2);

    tick_until(&mut game, InputState::RIGHT, 30, |event| {
        matches!(event, GameEvent::PickupConsumed { .. })
    });
    let first_deadline = match game.ghost_mode(GhostPersona::Red) {
        Some(GhostMode::Frightened { until }) => until,
        other => panic!("expected frightened ghost, got {other:?}"),
    };

    tick_until(&mut game, InputState::DOWN, 30, |event| {
        matches!(event, GameEvent::PickupConsumed { .. })
    });
    let second_deadline = match game.ghost_mode(GhostPersona::Red) {
        Some(GhostMode::Frightened { until }) => until,
        other => panic!("expected frightened ghost, got {other:?}"),
    };

    assert_that(&(second_deadline > first_deadline)).is_true();
}

#[test]
fn test_eaten_ghost_returns_home_and_recages() {
    let mut game = scripted_game(&SHARED_ROOM, (1, 1), bounce_script()).unwrap();

    run_for(&mut game, InputState::empty(), 4.1);
    assert_eq!(game.ghost_mode(GhostPersona::Red), Some(GhostMode::Chase));

    // Grab the pellet, then keep walking into the frightened ghost.
    let events = tick_until(&mut game, InputState::RIGHT, 120, |event| {
        matches!(event, GameEvent::GhostEaten { .. })
    });

    assert_that(&events.iter().any(|e| matches!(e, GameEvent::GhostEaten { ghost: GhostPersona::Red }))).is_true();
    assert_eq!(game.session().score(), POWER_PELLET_SCORE + GHOST_SCORE);
    assert_that(&matches!(game.ghost_mode(GhostPersona::Red), Some(GhostMode::Returning))).is_true();
    assert_eq!(game.session().terminal(), Terminal::Playing);

    // The ghost walks back to its spawn cell and re-cages there.
    let mut recaged = false;
    for _ in 0..240 {
        game.tick(InputState::empty(), DT);
        if matches!(game.ghost_mode(GhostPersona::Red), Some(GhostMode::Caged { .. })) {
            recaged = true;
            break;
        }
    }
    assert_that(&recaged).is_true();

    let home = {
        let mut ghosts = game.world.query::<(&Ghost, &Position)>();
        let (ghost, position) = ghosts.iter(&game.world).next().unwrap();
        assert_eq!(position.0, ghost.home);
        ghost.home
    };
    assert_eq!(home, cell_center(2, 5));

    // And it is released again after the re-arm delay.
    run_for(&mut game, InputState::empty(), 4.2);
    assert_eq!(game.ghost_mode(GhostPersona::Red), Some(GhostMode::Chase));
}

#[test]
fn test_chase_ghost_catches_idle_player() {
    let mut game = scripted_game(&SHARED_ROOM, (1, 1), bounce_script()).unwrap();

    let events = tick_until(&mut game, InputState::empty(), 600, |event| {
        matches!(event, GameEvent::PlayerCaught)
    });

    assert_that(&events.iter().any(|e| matches!(e, GameEvent::PlayerCaught))).is_true();
    assert_eq!(game.session().terminal(), Terminal::PlayerCaught);
    assert_that(&game.session().is_over()).is_true();

    let alive = {
        let mut players = game.world.query::<&Player>();
        players.iter(&game.world).next().unwrap().alive
    };
    assert_that(&alive).is_false();

    // Nothing moves or scores afterwards.
    let after = run_for(&mut game, InputState::RIGHT, 0.5);
    assert_that(&after.is_empty()).is_true();
}

#[test]
fn test_death_blocks_same_tick_pickup() {
    let mut game = scripted_game(&SHARED_ROOM, (1, 1), bounce_script()).unwrap();

    // Park a chasing ghost on the dot cell and place the player one
    // step short of it, so entering the cell and the fatal overlap land
    // on the same tick.
    {
        let mut ghosts = game.world.query::<(&mut Ghost, &mut Position)>();
        for (mut ghost, mut position) in ghosts.iter_mut(&mut game.world) {
            ghost.mode = GhostMode::Chase;
            position.0 = cell_center(3, 5);
        }
        let mut players = game.world.query_filtered::<&mut Position, With<Player>>();
        for mut position in players.iter_mut(&mut game.world) {
            position.0 = cell_center(3, 5) - glam::Vec2::new(18.0, 0.0);
        }
    }

    let events = game.tick(InputState::RIGHT, DT);

    assert_eq!(events, vec![GameEvent::PlayerCaught]);
    assert_eq!(game.session().score(), 0);

    // The dot survives the tick.
    let maze = game.world.resource::<Maze>();
    assert_eq!(maze.classify(3, 5).unwrap(), Tile::Dot);
}
