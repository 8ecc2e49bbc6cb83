//! Wrap-around teleport at the maze's horizontal bounds.

use bevy_ecs::query::With;
use bevy_ecs::system::{Query, Res};
use tracing::trace;

use crate::map::Maze;
use crate::session::Session;
use crate::systems::components::{Player, Position};

/// Snaps the player to the opposite tunnel mouth after it passes a
/// horizontal playable bound.
///
/// Runs after the collision resolver, so the snap never re-triggers
/// wall or pickup checks within the same tick. The snap target sits
/// inside the bound, so a crossing fires exactly once.
pub fn tunnel_system(maze: Res<Maze>, session: Res<Session>, mut players: Query<&mut Position, With<Player>>) {
    if session.is_over() {
        return;
    }

    let width = maze.pixel_size().x;
    for mut position in players.iter_mut() {
        if position.0.x >= 0.0 && position.0.x <= width {
            continue;
        }
        match maze.tunnel_partner(position.0) {
            Some(partner) => {
                trace!(from = ?position.0, to = ?partner, "Tunnel wrap");
                position.0 = partner;
            }
            // No tunnels in this maze; hold the player at the bound.
            None => position.0.x = position.0.x.clamp(0.0, width),
        }
    }
}
