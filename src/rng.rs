//! Injectable randomness for ghost headings.
//!
//! Bounce-and-wander behavior needs a random direction source; keeping
//! it behind a trait lets tests supply a deterministic sequence.

use std::collections::VecDeque;

use bevy_ecs::resource::Resource;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::direction::{Direction, DIRECTIONS};

/// Source of random cardinal headings and coarse probability rolls.
pub trait DirectionSource: Send + Sync {
    /// A fresh cardinal heading.
    fn heading(&mut self) -> Direction;

    /// True roughly once every `n` calls.
    fn one_in(&mut self, n: u32) -> bool;
}

/// Resource wrapper for the active direction source.
#[derive(Resource)]
pub struct Headings(pub Box<dyn DirectionSource>);

impl Headings {
    pub fn random() -> Headings {
        Headings(Box::new(RandomDirections::from_entropy()))
    }

    pub fn seeded(seed: u64) -> Headings {
        Headings(Box::new(RandomDirections::seeded(seed)))
    }
}

/// Production source backed by a seedable PRNG.
pub struct RandomDirections(SmallRng);

impl RandomDirections {
    pub fn from_entropy() -> RandomDirections {
        RandomDirections(SmallRng::from_os_rng())
    }

    pub fn seeded(seed: u64) -> RandomDirections {
        RandomDirections(SmallRng::seed_from_u64(seed))
    }
}

impl DirectionSource for RandomDirections {
    fn heading(&mut self) -> Direction {
        DIRECTIONS[self.0.random_range(0..DIRECTIONS.len())]
    }

    fn one_in(&mut self, n: u32) -> bool {
        n <= 1 || self.0.random_range(0..n) == 0
    }
}

/// Deterministic source for tests: replays a fixed heading sequence
/// (cycling when exhausted) and answers `one_in` with a fixed value.
pub struct ScriptedDirections {
    headings: VecDeque<Direction>,
    rolls: bool,
}

impl ScriptedDirections {
    pub fn new(headings: impl IntoIterator<Item = Direction>, rolls: bool) -> ScriptedDirections {
        ScriptedDirections {
            headings: headings.into_iter().collect(),
            rolls,
        }
    }
}

impl DirectionSource for ScriptedDirections {
    fn heading(&mut self) -> Direction {
        match self.headings.pop_front() {
            Some(dir) => {
                self.headings.push_back(dir);
                dir
            }
            None => Direction::Left,
        }
    }

    fn one_in(&mut self, _n: u32) -> bool {
        self.rolls
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_source_is_deterministic() {
        let mut a = RandomDirections::seeded(7);
        let mut b = RandomDirections::seeded(7);
        for _ in 0..32 {
            assert_eq!(a.heading(), b.heading());
        }
    }

    #[test]
    fn test_scripted_source_cycles() {
        let mut source = ScriptedDirections::new([Direction::Up, Direction::Right], false);
        assert_eq!(source.heading(), Direction::Up);
        assert_eq!(source.heading(), Direction::Right);
        assert_eq!(source.heading(), Direction::Up);
        assert!(!source.one_in(1));
    }

    #[test]
    fn test_one_in_one_always_fires() {
        let mut source = RandomDirections::seeded(0);
        for _ in 0..8 {
            assert!(source.one_in(1));
        }
    }
}
