//! Ghost behavior: mode transitions and steering.

use bevy_ecs::system::{Query, Res, ResMut};
use glam::Vec2;
use pathfinding::prelude::dijkstra;
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::constants::{FRIGHTENED_SPEED, GHOST_SPEED, HOME_TOLERANCE, REARM_DELAY, WANDER_REROLL_ODDS};
use crate::direction::DIRECTIONS;
use crate::map::{cell_center, Maze};
use crate::rng::Headings;
use crate::session::{Session, SessionClock};
use crate::systems::components::{Ghost, GhostMode, Player, Position, Velocity};

/// Applies deadline- and arrival-driven mode transitions.
///
/// Pickup-driven transitions (`Chase -> Frightened`, `Frightened ->
/// Returning`) happen in the collision resolver, where their ordering
/// against scoring is fixed.
pub fn ghost_mode_system(
    maze: Res<Maze>,
    clock: Res<SessionClock>,
    session: Res<Session>,
    mut ghosts: Query<(&mut Ghost, &mut Position, &mut Velocity)>,
) {
    if session.is_over() {
        return;
    }

    let now = clock.now();
    for (mut ghost, mut position, mut velocity) in ghosts.iter_mut() {
        match ghost.mode {
            GhostMode::Caged { release_at } if now >= release_at => {
                // Released ghosts start from the house exit gap.
                if let Some(exit) = maze.house_exit() {
                    position.0 = exit;
                }
                ghost.mode = GhostMode::Chase;
                debug!(ghost = ?ghost.persona, "Released from house");
            }
            GhostMode::Frightened { until } if now >= until => {
                ghost.mode = GhostMode::Chase;
                debug!(ghost = ?ghost.persona, "Frightened timer expired");
            }
            GhostMode::Returning if position.0.distance(ghost.home) <= HOME_TOLERANCE => {
                position.0 = ghost.home;
                velocity.0 = Vec2::ZERO;
                ghost.mode = GhostMode::Caged {
                    release_at: now + REARM_DELAY,
                };
                debug!(ghost = ?ghost.persona, "Reached home, caged");
            }
            _ => {}
        }
    }
}

/// Sets ghost velocities for the current mode.
pub fn ghost_steering_system(
    maze: Res<Maze>,
    session: Res<Session>,
    mut headings: ResMut<Headings>,
    mut ghosts: Query<(&mut Ghost, &Position, &mut Velocity)>,
    players: Query<(&Player, &Position)>,
) {
    if session.is_over() {
        return;
    }

    let player_position = players.iter().next().map(|(_, position)| position.0);

    for (mut ghost, position, mut velocity) in ghosts.iter_mut() {
        match ghost.mode {
            GhostMode::Caged { .. } => {
                velocity.0 = Vec2::ZERO;
            }
            GhostMode::Chase if ghost.persona.is_pursuer() => {
                // Direct pursuit of the player's current position.
                if let Some(target) = player_position {
                    velocity.0 = (target - position.0).normalize_or_zero() * GHOST_SPEED;
                }
            }
            GhostMode::Chase => {
                if headings.0.one_in(WANDER_REROLL_ODDS) {
                    let heading = headings.0.heading();
                    trace!(ghost = ?ghost.persona, ?heading, "Wander heading re-rolled");
                    ghost.heading = heading;
                }
                velocity.0 = ghost.heading.as_vec2() * GHOST_SPEED;
            }
            GhostMode::Frightened { .. } => {
                // Keep the previous heading, at reduced speed. No active
                // fleeing; this mirrors the original behavior.
                if velocity.0 != Vec2::ZERO {
                    velocity.0 = velocity.0.normalize() * FRIGHTENED_SPEED;
                } else {
                    velocity.0 = ghost.heading.as_vec2() * FRIGHTENED_SPEED;
                }
            }
            GhostMode::Returning => {
                velocity.0 = returning_velocity(&maze, position.0, ghost.home);
            }
        }
    }
}

/// Velocity for an eaten ghost heading home: shortest path over the
/// walkable cell grid, falling back to a direct vector if no path
/// exists (a dropped waypoint must not corrupt the tick).
fn returning_velocity(maze: &Maze, position: Vec2, home: Vec2) -> Vec2 {
    let start = maze.cell_of(position);
    let goal = maze.cell_of(home);

    let path = dijkstra(
        &start,
        |&(row, col)| {
            DIRECTIONS
                .iter()
                .filter_map(move |dir| {
                    let (dr, dc) = dir.cell_offset();
                    let next = (row.checked_add_signed(dr)?, col.checked_add_signed(dc)?);
                    maze.is_walkable(next.0, next.1).then_some((next, 1u32))
                })
                .collect::<SmallVec<[_; 4]>>()
        },
        |&cell| cell == goal,
    );

    let target = match path {
        Some((steps, _)) if steps.len() > 1 => cell_center(steps[1].0, steps[1].1),
        Some(_) => home,
        None => home,
    };
    (target - position).normalize_or_zero() * GHOST_SPEED
}
