//! Goal the robot chases. It jumps to a new random location each time it is reached.

use log::info;
use rand::Rng;

use super::{Arena, Pose, Position, Rgb};

#[derive(Clone, Debug, PartialEq)]
pub struct Goal {
    pose: Pose,
}

impl Goal {
    pub fn new(config: &GoalConfig) -> Self {
        Self {
            pose: Pose::new(config.vertices, config.color),
        }
    }

    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    pub fn position(&self) -> Position {
        self.pose.position()
    }

    /// Moves the goal to a uniformly drawn integer point of the arena, bounds included.
    pub fn relocate<R: Rng + ?Sized>(&mut self, arena: &Arena, rng: &mut R) {
        let position = Position::new(
            rng.random_range(arena.x_min()..=arena.x_max()).into(),
            rng.random_range(arena.y_min()..=arena.y_max()).into(),
        );
        debug_assert!(arena.contains(position));
        info!("goal relocated to ({}, {})", position.x(), position.y());
        self.pose.translate_to(position);
    }

    #[cfg(test)]
    pub(crate) fn set_position(&mut self, position: Position) {
        self.pose.translate_to(position);
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GoalConfig {
    pub vertices: &'static [Position],
    pub color: Rgb,
}

impl GoalConfig {
    pub const fn new(vertices: &'static [Position], color: Rgb) -> Self {
        GoalConfig { vertices, color }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use rstest::rstest;

    use super::*;
    use crate::domain::Tick;

    const DIAMOND: [Position; 4] = [
        Position::new(10.0, 0.0),
        Position::new(0.0, 10.0),
        Position::new(-10.0, 0.0),
        Position::new(0.0, -10.0),
    ];

    fn goal() -> Goal {
        Goal::new(&GoalConfig::new(&DIAMOND, Rgb::new(255, 0, 0)))
    }

    #[rstest]
    #[case::window(Arena::new(90, 80, 810, 720))]
    #[case::narrow(Arena::new(-3, 7, -2, 9))]
    #[case::single_point(Arena::new(4, 4, 4, 4))]
    fn test_goal_relocate_stays_in_arena(#[case] arena: Arena) {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut goal = goal();
        for _ in 0..1000 {
            goal.relocate(&arena, &mut rng);
            let position = goal.position();
            assert!(arena.contains(position), "{position:?} outside {arena:?}");
            assert_eq!(position.x(), position.x().round());
            assert_eq!(position.y(), position.y().round());
        }
    }

    #[test]
    fn test_goal_relocate_reaches_every_bound() {
        let arena = Arena::new(0, 0, 2, 2);
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut goal = goal();
        let mut seen = [[false; 3]; 3];
        for _ in 0..500 {
            goal.relocate(&arena, &mut rng);
            seen[goal.position().x() as usize][goal.position().y() as usize] = true;
        }
        assert!(seen.iter().flatten().all(|s| *s));
    }

    #[test]
    fn test_goal_relocate_is_reproducible() {
        let arena = Arena::new(90, 80, 810, 720);
        let positions = |seed| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut goal = goal();
            (0..10)
                .map(|_| {
                    goal.relocate(&arena, &mut rng);
                    goal.position()
                })
                .collect::<Vec<_>>()
        };
        assert_eq!(positions(3), positions(3));
    }

    #[test]
    fn test_goal_relocate_only_moves() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut goal = goal();
        goal.relocate(&Arena::new(0, 0, 100, 100), &mut rng);
        assert_eq!(goal.pose().orientation(), Tick::ZERO);
        assert_eq!(goal.pose().local_vertices(), &DIAMOND);
        assert_eq!(goal.pose().color(), Rgb::new(255, 0, 0));
    }
}
