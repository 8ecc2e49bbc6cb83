//! Typed events emitted by the simulation each tick.
//!
//! Side effects (sounds, score display, scene transitions) are never
//! performed inline by the resolver; they are reported through these
//! events and consumed synchronously by the host after the tick.

use bevy_ecs::prelude::*;

use crate::map::PickupKind;
use crate::systems::components::GhostPersona;

#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    /// The player consumed a pickup at the given cell (row, col).
    PickupConsumed { kind: PickupKind, position: (usize, usize) },
    /// A non-frightened ghost caught the player. Terminal.
    PlayerCaught,
    /// The player ate a frightened ghost.
    GhostEaten { ghost: GhostPersona },
    /// The last pickup was consumed. Terminal.
    MazeCleared,
    /// The score changed; carries the new total.
    ScoreChanged { new_score: u32 },
}
