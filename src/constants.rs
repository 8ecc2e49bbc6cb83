//! This module contains all the constants used in the simulation.

use std::time::Duration;

use glam::UVec2;

/// The size of each maze cell, in pixels.
pub const CELL_SIZE: f32 = 32.0;
/// The size of the standard game board, in cells (columns, rows).
pub const BOARD_CELL_SIZE: UVec2 = UVec2::new(19, 22);

/// Player movement speed, in pixels per second.
pub const PLAYER_SPEED: f32 = 200.0;
/// Ghost base speed (Chase and Returning), in pixels per second.
pub const GHOST_SPEED: f32 = 80.0;
/// Frightened ghosts move at half the base speed.
pub const FRIGHTENED_SPEED: f32 = GHOST_SPEED / 2.0;

/// Score awarded for a regular dot.
pub const DOT_SCORE: u32 = 10;
/// Score awarded for a power pellet.
pub const POWER_PELLET_SCORE: u32 = 50;
/// Score awarded for eating a frightened ghost.
pub const GHOST_SCORE: u32 = 200;

/// How long ghosts stay frightened after a power pellet.
pub const FRIGHTENED_DURATION: Duration = Duration::from_secs(8);
/// Delay before the first ghost leaves the house.
pub const FIRST_RELEASE_DELAY: Duration = Duration::from_secs(4);
/// Additional delay between consecutive ghost releases.
pub const RELEASE_STAGGER: Duration = Duration::from_secs(2);
/// Delay before a ghost that returned to the house is released again.
pub const REARM_DELAY: Duration = Duration::from_secs(4);
/// Suggested host-side delay before restarting after a death.
pub const RESTART_DELAY: Duration = Duration::from_secs(3);
/// The fixed step used by the demo driver, in seconds (60 Hz).
pub const TICK_SECONDS: f32 = 1.0 / 60.0;

/// Entity bounding box side length, in pixels.
pub const ENTITY_SIZE: f32 = 26.0;
/// Distance at which a returning ghost counts as home.
pub const HOME_TOLERANCE: f32 = 4.0;

/// One-in-N per-tick odds that a wandering ghost re-rolls its heading.
pub const WANDER_REROLL_ODDS: u32 = 180;

/// The player's starting cell on the standard board (row, col).
pub const PLAYER_START: (usize, usize) = (16, 9);

/// An enum representing the different types of tiles in the maze.
///
/// Only `Dot` and `PowerPellet` ever mutate after construction (to
/// `EmptyPath`, once consumed); topology is fixed for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    /// A solid wall.
    Wall,
    /// A walkable tile with nothing on it.
    EmptyPath,
    /// A walkable tile holding a regular dot.
    Dot,
    /// A walkable tile holding a power pellet.
    PowerPellet,
    /// A tile inside the ghost house.
    GhostHouse,
    /// A wrap-around tunnel tile at the maze edge.
    Tunnel,
}

impl Tile {
    /// Everything except a wall can be walked on.
    pub fn is_walkable(&self) -> bool {
        !matches!(self, Tile::Wall)
    }
}

/// The standard board layout, as a grid of tile codes.
///
/// `0` dot, `1` wall, `2` empty path, `3` power pellet, `4` ghost
/// house, `5` tunnel.
pub const RAW_LAYOUT: [[u8; BOARD_CELL_SIZE.x as usize]; BOARD_CELL_SIZE.y as usize] = [
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [1, 3, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 3, 1],
    [1, 0, 1, 1, 0, 1, 1, 1, 0, 1, 0, 1, 1, 1, 0, 1, 1, 0, 1],
    [1, 0, 1, 1, 0, 1, 1, 1, 0, 1, 0, 1, 1, 1, 0, 1, 1, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 1, 1, 0, 1, 0, 1, 1, 1, 1, 1, 0, 1, 0, 1, 1, 0, 1],
    [1, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 1],
    [1, 1, 1, 1, 0, 1, 1, 1, 2, 1, 2, 1, 1, 1, 0, 1, 1, 1, 1],
    [5, 5, 5, 1, 0, 1, 2, 2, 2, 2, 2, 2, 2, 1, 0, 1, 5, 5, 5],
    [1, 1, 1, 1, 0, 1, 2, 1, 1, 4, 1, 1, 2, 1, 0, 1, 1, 1, 1],
    [5, 5, 5, 5, 0, 2, 2, 1, 4, 4, 4, 1, 2, 2, 0, 5, 5, 5, 5],
    [1, 1, 1, 1, 0, 1, 2, 1, 1, 1, 1, 1, 2, 1, 0, 1, 1, 1, 1],
    [5, 5, 5, 1, 0, 1, 2, 2, 2, 2, 2, 2, 2, 1, 0, 1, 5, 5, 5],
    [1, 1, 1, 1, 0, 1, 2, 1, 1, 1, 1, 1, 2, 1, 0, 1, 1, 1, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 1, 1, 0, 1, 1, 1, 0, 1, 0, 1, 1, 1, 0, 1, 1, 0, 1],
    [1, 3, 0, 1, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 1, 0, 3, 1],
    [1, 1, 0, 1, 0, 1, 0, 1, 1, 1, 1, 1, 0, 1, 0, 1, 0, 1, 1],
    [1, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 1],
    [1, 0, 1, 1, 1, 1, 1, 1, 0, 1, 0, 1, 1, 1, 1, 1, 1, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
];
