//! The per-tick collision and pickup resolver.
//!
//! Resolution runs in a fixed order so simultaneous contacts are
//! deterministic: player vs walls, ghosts vs walls, player vs ghosts,
//! then player vs pickups. Side effects are reported as events; the
//! resolver itself only mutates simulation state.

use bevy_ecs::event::EventWriter;
use bevy_ecs::query::Without;
use bevy_ecs::system::{Query, Res, ResMut};
use tracing::{debug, trace};

use crate::constants::{DOT_SCORE, FRIGHTENED_DURATION, FRIGHTENED_SPEED, GHOST_SCORE, GHOST_SPEED, POWER_PELLET_SCORE};
use crate::events::GameEvent;
use crate::map::{Maze, PickupKind};
use crate::session::{DeltaTime, Session, SessionClock};
use crate::systems::components::{Collider, Ghost, GhostMode, Player, Position, Velocity};

pub fn collision_resolver_system(
    mut maze: ResMut<Maze>,
    mut session: ResMut<Session>,
    clock: Res<SessionClock>,
    dt: Res<DeltaTime>,
    mut headings: ResMut<crate::rng::Headings>,
    mut events: EventWriter<GameEvent>,
    mut players: Query<(&mut Player, &mut Position, &mut Velocity, &Collider), Without<Ghost>>,
    mut ghosts: Query<(&mut Ghost, &mut Position, &mut Velocity, &Collider), Without<Player>>,
) {
    if session.is_over() {
        return;
    }

    // 1. Player vs walls: integrate one axis at a time, cancel the
    // intersecting axis component and clamp the position to the wall
    // boundary. Axis separation prevents tunneling through corners.
    for (_, mut position, mut velocity, collider) in players.iter_mut() {
        let half = collider.size / 2.0;

        position.0.x += velocity.0.x * dt.0;
        for wall in maze.wall_rects() {
            if collider.rect(position.0).overlaps(wall) {
                if velocity.0.x > 0.0 {
                    position.0.x = wall.left() - half;
                } else if velocity.0.x < 0.0 {
                    position.0.x = wall.right() + half;
                }
                velocity.0.x = 0.0;
            }
        }

        position.0.y += velocity.0.y * dt.0;
        for wall in maze.wall_rects() {
            if collider.rect(position.0).overlaps(wall) {
                if velocity.0.y > 0.0 {
                    position.0.y = wall.top() - half;
                } else if velocity.0.y < 0.0 {
                    position.0.y = wall.bottom() + half;
                }
                velocity.0.y = 0.0;
            }
        }

        // Vertical travel never wraps; keep the player inside the grid
        // so later cell queries cannot go out of bounds. Horizontal
        // overflow is left for the tunnel rule.
        position.0.y = position.0.y.clamp(half, maze.pixel_size().y - half);
    }

    // 2. Ghosts vs walls: push out along the shallow axis and replace
    // the velocity with a random cardinal heading at the mode's speed.
    // Not a physical bounce. Returning ghosts follow walkable cells and
    // are exempt; caged ghosts are stationary.
    for (mut ghost, mut position, mut velocity, collider) in ghosts.iter_mut() {
        position.0 += velocity.0 * dt.0;

        if matches!(ghost.mode, GhostMode::Caged { .. } | GhostMode::Returning) {
            continue;
        }

        let speed = match ghost.mode {
            GhostMode::Frightened { .. } => FRIGHTENED_SPEED,
            _ => GHOST_SPEED,
        };

        let mut bounced = false;
        // Two passes resolve the rare corner where the first push-out
        // lands inside a neighboring wall tile.
        for _ in 0..2 {
            let mut overlapped = false;
            for wall in maze.wall_rects() {
                let rect = collider.rect(position.0);
                if !rect.overlaps(wall) {
                    continue;
                }
                overlapped = true;
                let pen = rect.penetration(wall);
                if pen.x <= pen.y {
                    position.0.x += pen.x * (rect.center.x - wall.center.x).signum();
                } else {
                    position.0.y += pen.y * (rect.center.y - wall.center.y).signum();
                }
            }
            if !overlapped {
                break;
            }
            bounced = true;
        }

        // Wandering out of a tunnel row is treated like a wall hit.
        let half = collider.size / 2.0;
        let bounds = maze.pixel_size();
        let clamped = position.0.clamp(glam::Vec2::splat(half), bounds - half);
        if clamped != position.0 {
            position.0 = clamped;
            bounced = true;
        }

        if bounced {
            let heading = headings.0.heading();
            trace!(ghost = ?ghost.persona, ?heading, "Ghost bounced off wall");
            ghost.heading = heading;
            velocity.0 = heading.as_vec2() * speed;
        }
    }

    // 3. Player vs ghosts: outcome depends on the ghost's mode.
    for (mut player, player_position, mut player_velocity, player_collider) in players.iter_mut() {
        let player_rect = player_collider.rect(player_position.0);

        for (mut ghost, ghost_position, _, ghost_collider) in ghosts.iter_mut() {
            if !player_rect.overlaps(&ghost_collider.rect(ghost_position.0)) {
                continue;
            }

            if ghost.mode.is_lethal() {
                if session.record_player_caught() {
                    player.alive = false;
                    player_velocity.0 = glam::Vec2::ZERO;
                    events.write(GameEvent::PlayerCaught);
                }
            } else if matches!(ghost.mode, GhostMode::Frightened { .. }) {
                if let Some(new_score) = session.add_score(GHOST_SCORE) {
                    debug!(ghost = ?ghost.persona, new_score, "Ghost eaten");
                    ghost.mode = GhostMode::Returning;
                    events.write(GameEvent::GhostEaten { ghost: ghost.persona });
                    events.write(GameEvent::ScoreChanged { new_score });
                }
            }
        }

        // A death and a pickup can land on the same tick; the death is
        // ordered first and the pickup must not score.
        if session.is_over() {
            return;
        }

        // 4. Player vs pickups, at the player's current tile only.
        let (row, col) = maze.cell_of(player_position.0);
        if let Ok(Some(kind)) = maze.consume_pickup_at(row, col) {
            let points = match kind {
                PickupKind::Dot => DOT_SCORE,
                PickupKind::PowerPellet => POWER_PELLET_SCORE,
            };
            events.write(GameEvent::PickupConsumed { kind, position: (row, col) });
            if let Some(new_score) = session.add_score(points) {
                events.write(GameEvent::ScoreChanged { new_score });
            }

            if kind == PickupKind::PowerPellet {
                let until = clock.now() + FRIGHTENED_DURATION;
                for (mut ghost, _, _, _) in ghosts.iter_mut() {
                    // Chase-mode ghosts turn frightened; an already
                    // frightened ghost restarts its timer. Caged and
                    // returning ghosts are unaffected.
                    if matches!(ghost.mode, GhostMode::Chase | GhostMode::Frightened { .. }) {
                        ghost.mode = GhostMode::Frightened { until };
                    }
                }
                debug!(?until, "Power pellet consumed, ghosts frightened");
            }

            if session.record_pickup_consumed() {
                events.write(GameEvent::MazeCleared);
            }
        }
    }
}
