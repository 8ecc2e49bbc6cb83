//! Input boundary: the set of currently-held directional keys.

use bevy_ecs::resource::Resource;
use bitflags::bitflags;

use crate::direction::Direction;

bitflags! {
    /// Directional keys held this tick, as reported by the host.
    #[derive(Resource, Default, Clone, Copy, Debug, PartialEq, Eq)]
    pub struct InputState: u8 {
        const UP = 1 << 0;
        const DOWN = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
    }
}

impl InputState {
    /// The held horizontal direction, Left taking priority over Right.
    pub fn horizontal(&self) -> Option<Direction> {
        if self.contains(InputState::LEFT) {
            Some(Direction::Left)
        } else if self.contains(InputState::RIGHT) {
            Some(Direction::Right)
        } else {
            None
        }
    }

    /// The held vertical direction, Up taking priority over Down.
    pub fn vertical(&self) -> Option<Direction> {
        if self.contains(InputState::UP) {
            Some(Direction::Up)
        } else if self.contains(InputState::DOWN) {
            Some(Direction::Down)
        } else {
            None
        }
    }
}

impl From<Direction> for InputState {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Up => InputState::UP,
            Direction::Down => InputState::DOWN,
            Direction::Left => InputState::LEFT,
            Direction::Right => InputState::RIGHT,
        }
    }
}

/// A source of held keys, polled exactly once per tick by the host
/// before calling into the simulation.
pub trait InputProvider {
    fn poll(&mut self) -> InputState;
}
