use glam::Vec2;
use strum_macros::EnumIter;

/// A cardinal movement direction.
///
/// Movement is axis-aligned: an entity's velocity always points along
/// exactly one of these, or is zero. A stopped entity has no direction,
/// which callers represent as `Option<Direction>`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, EnumIter)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

pub const DIRECTIONS: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

impl Direction {
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Unit vector for this direction, in screen coordinates (y grows
    /// downward).
    pub fn as_vec2(&self) -> Vec2 {
        match self {
            Direction::Up => -Vec2::Y,
            Direction::Down => Vec2::Y,
            Direction::Left => -Vec2::X,
            Direction::Right => Vec2::X,
        }
    }

    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// Cell offset for this direction as (row delta, col delta).
    pub fn cell_offset(&self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}
