//! Maze-chase game simulation library crate.

pub mod constants;
pub mod direction;
pub mod error;
pub mod events;
pub mod game;
pub mod geometry;
pub mod input;
pub mod map;
pub mod rng;
pub mod session;
pub mod systems;
