//! Per-tick simulation systems, run as one chained schedule.

pub mod collision;
pub mod components;
pub mod control;
pub mod ghost;
pub mod tunnel;

use bevy_ecs::system::{Res, ResMut};

use crate::session::{DeltaTime, SessionClock};

/// Advances the session clock by the tick's delta. Runs first so every
/// deadline comparison in the tick sees the same "now".
pub fn clock_system(mut clock: ResMut<SessionClock>, dt: Res<DeltaTime>) {
    clock.advance(std::time::Duration::from_secs_f32(dt.0));
}
