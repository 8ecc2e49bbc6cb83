use std::time::Duration;

use bevy_ecs::{bundle::Bundle, component::Component};
use glam::Vec2;

use crate::direction::Direction;
use crate::geometry::Rect;

/// Continuous pixel-space position of an entity's center.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Position(pub Vec2);

/// Velocity in pixels per second.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct Velocity(pub Vec2);

/// Square bounding box used for overlap tests.
#[derive(Component, Debug, Clone, Copy)]
pub struct Collider {
    pub size: f32,
}

impl Collider {
    pub fn rect(&self, position: Vec2) -> Rect {
        Rect::square(position, self.size)
    }
}

/// The player-controlled entity.
#[derive(Component, Debug)]
pub struct Player {
    pub alive: bool,
    /// Last applied movement direction; `None` while stopped.
    pub facing: Option<Direction>,
    pub spawn: Vec2,
}

impl Player {
    pub fn new(spawn: Vec2) -> Player {
        Player {
            alive: true,
            facing: None,
            spawn,
        }
    }
}

/// The four ghost personalities. Release order is declaration order;
/// only `Red` pursues the player directly.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GhostPersona {
    Red,
    Pink,
    Blue,
    Orange,
}

impl GhostPersona {
    pub const ALL: [GhostPersona; 4] = [
        GhostPersona::Red,
        GhostPersona::Pink,
        GhostPersona::Blue,
        GhostPersona::Orange,
    ];

    /// The red ghost chases the player; the rest wander.
    pub fn is_pursuer(&self) -> bool {
        matches!(self, GhostPersona::Red)
    }
}

/// Per-ghost behavior state.
///
/// Timed states carry deadlines against the session clock rather than
/// countdowns, so re-entering a state replaces the deadline outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GhostMode {
    /// Waiting in the house until the release deadline.
    Caged { release_at: Duration },
    /// Pursuing or wandering at base speed.
    Chase,
    /// Vulnerable and slow until the deadline.
    Frightened { until: Duration },
    /// Eaten; heading back to the house anchor.
    Returning,
}

impl GhostMode {
    /// Whether contact with the player is lethal to the player in this
    /// mode. Frightened ghosts are eaten instead, and a returning ghost
    /// is harmless: it still overlaps the player on the ticks right
    /// after being eaten.
    pub fn is_lethal(&self) -> bool {
        matches!(self, GhostMode::Caged { .. } | GhostMode::Chase)
    }
}

/// A ghost entity: persona, mode, and house anchor.
#[derive(Component, Debug)]
pub struct Ghost {
    pub persona: GhostPersona,
    pub mode: GhostMode,
    /// Ghost-house anchor this ghost returns to after being eaten.
    pub home: Vec2,
    /// Current wander heading; meaningful for non-pursuers in Chase and
    /// for everyone in Frightened.
    pub heading: Direction,
}

#[derive(Bundle)]
pub struct PlayerBundle {
    pub player: Player,
    pub position: Position,
    pub velocity: Velocity,
    pub collider: Collider,
}

#[derive(Bundle)]
pub struct GhostBundle {
    pub ghost: Ghost,
    pub position: Position,
    pub velocity: Velocity,
    pub collider: Collider,
}
