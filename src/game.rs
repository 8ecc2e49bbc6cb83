//! This module contains the main simulation entry point.

use bevy_ecs::event::{EventRegistry, Events};
use bevy_ecs::schedule::IntoScheduleConfigs;
use bevy_ecs::{schedule::Schedule, world::World};
use glam::Vec2;
use tracing::debug;

use crate::constants::{ENTITY_SIZE, FIRST_RELEASE_DELAY, RELEASE_STAGGER, PLAYER_START, RAW_LAYOUT};
use crate::direction::Direction;
use crate::error::{GameError, GameResult};
use crate::events::GameEvent;
use crate::input::InputState;
use crate::map::{cell_center, Maze};
use crate::rng::Headings;
use crate::session::{DeltaTime, Session, SessionClock};
use crate::systems::clock_system;
use crate::systems::collision::collision_resolver_system;
use crate::systems::components::{Collider, Ghost, GhostBundle, GhostMode, GhostPersona, Player, PlayerBundle, Position, Velocity};
use crate::systems::control::player_control_system;
use crate::systems::ghost::{ghost_mode_system, ghost_steering_system};
use crate::systems::tunnel::tunnel_system;

/// The `Game` struct is the tick-driven simulation core.
///
/// The host calls [`Game::tick`] once per rendered frame with the held
/// keys and the frame delta, then consumes the returned events. All
/// state lives in the ECS world; there is no internal parallelism and
/// nothing blocks.
pub struct Game {
    pub world: World,
    schedule: Schedule,
}

impl Game {
    /// Builds a session from a raw tile-code layout and a player start
    /// cell. Layout defects fail construction.
    pub fn new(layout: &[&[u8]], player_start: (usize, usize)) -> GameResult<Game> {
        Game::with_direction_source(layout, player_start, Headings::random())
    }

    /// Like [`Game::new`], with an explicit heading source so tests can
    /// supply a deterministic sequence.
    pub fn with_direction_source(layout: &[&[u8]], player_start: (usize, usize), headings: Headings) -> GameResult<Game> {
        let maze = Maze::new(layout)?;

        // The start cell must exist and be walkable.
        if !maze.classify(player_start.0, player_start.1)?.is_walkable() {
            return Err(GameError::BlockedPlayerStart {
                row: player_start.0,
                col: player_start.1,
            });
        }

        let mut world = World::default();
        let mut schedule = Schedule::default();

        EventRegistry::register_event::<GameEvent>(&mut world);

        let player_spawn = cell_center(player_start.0, player_start.1);
        world.spawn(PlayerBundle {
            player: Player::new(player_spawn),
            position: Position(player_spawn),
            velocity: Velocity::default(),
            collider: Collider { size: ENTITY_SIZE },
        });

        // One ghost per persona, spawned over the house cells in
        // reading order. A house-less layout yields a ghost-less game.
        let spawns: Vec<Vec2> = maze.house_cells().iter().map(|&(row, col)| cell_center(row, col)).collect();
        for (persona, home) in GhostPersona::ALL.into_iter().zip(spawns) {
            world.spawn(GhostBundle {
                ghost: Ghost {
                    persona,
                    mode: GhostMode::Caged {
                        release_at: release_delay(persona),
                    },
                    home,
                    heading: Direction::Left,
                },
                position: Position(home),
                velocity: Velocity::default(),
                collider: Collider { size: ENTITY_SIZE },
            });
        }

        world.insert_resource(Session::new(maze.pickup_count()));
        world.insert_resource(SessionClock::default());
        world.insert_resource(DeltaTime::default());
        world.insert_resource(InputState::empty());
        world.insert_resource(headings);
        world.insert_resource(maze);

        schedule.add_systems(
            (
                clock_system,
                player_control_system,
                ghost_mode_system,
                ghost_steering_system,
                collision_resolver_system,
                tunnel_system,
            )
                .chain(),
        );

        Ok(Game { world, schedule })
    }

    /// A session over the standard bundled board.
    pub fn standard() -> GameResult<Game> {
        let layout: Vec<&[u8]> = RAW_LAYOUT.iter().map(|row| row.as_slice()).collect();
        Game::new(&layout, PLAYER_START)
    }

    /// Runs one simulation step and returns the events it produced.
    pub fn tick(&mut self, input: InputState, dt_seconds: f32) -> Vec<GameEvent> {
        *self.world.resource_mut::<InputState>() = input;
        self.world.resource_mut::<DeltaTime>().0 = dt_seconds;

        self.schedule.run(&mut self.world);

        self.world.resource_mut::<Events<GameEvent>>().drain().collect()
    }

    /// Resets the session in place: pickups are rebuilt from the static
    /// layout, the clock and session restart, and the existing entities
    /// are repositioned (never recreated).
    pub fn reset(&mut self) {
        let mut maze = self.world.resource_mut::<Maze>();
        maze.restore_pickups();
        let pickups = maze.pickup_count();

        self.world.insert_resource(Session::new(pickups));
        self.world.insert_resource(SessionClock::default());
        self.world.resource_mut::<Events<GameEvent>>().clear();

        let mut players = self.world.query::<(&mut Player, &mut Position, &mut Velocity)>();
        for (mut player, mut position, mut velocity) in players.iter_mut(&mut self.world) {
            position.0 = player.spawn;
            velocity.0 = Vec2::ZERO;
            player.alive = true;
            player.facing = None;
        }

        let mut ghosts = self.world.query::<(&mut Ghost, &mut Position, &mut Velocity)>();
        for (mut ghost, mut position, mut velocity) in ghosts.iter_mut(&mut self.world) {
            position.0 = ghost.home;
            velocity.0 = Vec2::ZERO;
            ghost.heading = Direction::Left;
            ghost.mode = GhostMode::Caged {
                release_at: release_delay(ghost.persona),
            };
        }

        debug!(pickups, "Session reset");
    }

    pub fn session(&self) -> &Session {
        self.world.resource::<Session>()
    }

    pub fn clock(&self) -> SessionClock {
        *self.world.resource::<SessionClock>()
    }

    /// The player's current position, if a player exists.
    pub fn player_position(&mut self) -> Option<Vec2> {
        let mut players = self.world.query::<(&Player, &Position)>();
        players.iter(&self.world).next().map(|(_, position)| position.0)
    }

    /// The current mode of the given ghost, if it exists.
    pub fn ghost_mode(&mut self, persona: GhostPersona) -> Option<GhostMode> {
        let mut ghosts = self.world.query::<&Ghost>();
        ghosts.iter(&self.world).find(|ghost| ghost.persona == persona).map(|ghost| ghost.mode)
    }
}

/// Release deadline for a persona, measured from session start. Ghosts
/// release in declaration order with staggered delays.
fn release_delay(persona: GhostPersona) -> std::time::Duration {
    let index = GhostPersona::ALL.iter().position(|p| *p == persona).unwrap_or(0) as u32;
    FIRST_RELEASE_DELAY + RELEASE_STAGGER * index
}
