//! Score and terminal-state tracking for a single session.

use std::time::Duration;

use bevy_ecs::resource::Resource;
use tracing::debug;

/// The outcome of a session. Anything other than `Playing` is
/// absorbing: once set, the session ignores further mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Terminal {
    #[default]
    Playing,
    PlayerCaught,
    MazeCleared,
}

/// Monotonic score and pickup accounting.
///
/// All mutators are no-ops after the session reaches a terminal state;
/// multiple collision events can fire in the same tick, so callers must
/// be able to call them unconditionally.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct Session {
    score: u32,
    remaining_pickups: u32,
    terminal: Terminal,
}

impl Session {
    pub fn new(remaining_pickups: u32) -> Session {
        Session {
            score: 0,
            remaining_pickups,
            terminal: Terminal::Playing,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn remaining_pickups(&self) -> u32 {
        self.remaining_pickups
    }

    pub fn terminal(&self) -> Terminal {
        self.terminal
    }

    pub fn is_over(&self) -> bool {
        self.terminal != Terminal::Playing
    }

    /// Adds to the score. Returns the new total, or `None` if the
    /// session is already over.
    pub fn add_score(&mut self, n: u32) -> Option<u32> {
        if self.is_over() {
            return None;
        }
        self.score += n;
        Some(self.score)
    }

    /// Records one pickup leaving the maze. Returns true when this was
    /// the last one, which also ends the session as `MazeCleared`.
    pub fn record_pickup_consumed(&mut self) -> bool {
        if self.is_over() || self.remaining_pickups == 0 {
            return false;
        }
        self.remaining_pickups -= 1;
        if self.remaining_pickups == 0 {
            debug!(score = self.score, "Maze cleared");
            self.terminal = Terminal::MazeCleared;
            return true;
        }
        false
    }

    /// Records the player being caught. Returns false if the session
    /// was already over.
    pub fn record_player_caught(&mut self) -> bool {
        if self.is_over() {
            return false;
        }
        debug!(score = self.score, "Player caught");
        self.terminal = Terminal::PlayerCaught;
        true
    }
}

/// Monotonically increasing session clock, sampled once per tick.
///
/// Delayed transitions (ghost release, frightened expiry) are deadlines
/// against this clock, never real timers, so tests can advance the
/// state machine deterministically.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct SessionClock(pub Duration);

impl SessionClock {
    pub fn advance(&mut self, dt: Duration) {
        self.0 += dt;
    }

    pub fn now(&self) -> Duration {
        self.0
    }
}

/// Seconds elapsed since the previous tick.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct DeltaTime(pub f32);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_score_accumulates() {
        let mut session = Session::new(3);
        assert_eq!(session.add_score(10), Some(10));
        assert_eq!(session.add_score(50), Some(60));
        assert_eq!(session.score(), 60);
    }

    #[test]
    fn test_last_pickup_ends_session() {
        let mut session = Session::new(2);
        assert!(!session.record_pickup_consumed());
        assert_eq!(session.terminal(), Terminal::Playing);
        assert!(session.record_pickup_consumed());
        assert_eq!(session.terminal(), Terminal::MazeCleared);
    }

    #[test]
    fn test_terminal_is_absorbing() {
        let mut session = Session::new(5);
        assert!(session.record_player_caught());

        // Every mutator becomes a no-op, not an error
        assert_eq!(session.add_score(10), None);
        assert!(!session.record_pickup_consumed());
        assert!(!session.record_player_caught());

        assert_eq!(session.score(), 0);
        assert_eq!(session.remaining_pickups(), 5);
        assert_eq!(session.terminal(), Terminal::PlayerCaught);
    }

    #[test]
    fn test_caught_wins_over_later_clear() {
        let mut session = Session::new(1);
        session.record_player_caught();
        session.record_pickup_consumed();
        assert_eq!(session.terminal(), Terminal::PlayerCaught);
    }

    #[test]
    fn test_clock_advances_monotonically() {
        let mut clock = SessionClock::default();
        clock.advance(Duration::from_millis(16));
        clock.advance(Duration::from_millis(16));
        assert_eq!(clock.now(), Duration::from_millis(32));
    }
}
