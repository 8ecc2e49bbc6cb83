//! Translates held keys into player velocity.

use bevy_ecs::system::{Query, Res};

use crate::constants::PLAYER_SPEED;
use crate::input::InputState;
use crate::session::Session;
use crate::systems::components::{Player, Velocity};

/// Applies the desired direction to the player's velocity.
///
/// Movement is cardinal: assigning an axis zeroes the other axis'
/// component. The horizontal key is applied first and the vertical key
/// second, so when both axes are held the vertical one wins. A
/// direction change is accepted immediately; the collision resolver is
/// authoritative and may veto the resulting position.
pub fn player_control_system(input: Res<InputState>, session: Res<Session>, mut players: Query<(&mut Player, &mut Velocity)>) {
    if session.is_over() {
        return;
    }

    for (mut player, mut velocity) in players.iter_mut() {
        velocity.0 = glam::Vec2::ZERO;
        player.facing = None;

        if let Some(dir) = input.horizontal() {
            velocity.0 = dir.as_vec2() * PLAYER_SPEED;
            player.facing = Some(dir);
        }
        if let Some(dir) = input.vertical() {
            velocity.0 = dir.as_vec2() * PLAYER_SPEED;
            player.facing = Some(dir);
        }
    }
}
