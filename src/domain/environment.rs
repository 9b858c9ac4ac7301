//! Arena in which the goal is placed.

use super::Position;

/// Inclusive integer bounds.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Arena {
    x_min: i32,
    y_min: i32,
    x_max: i32,
    y_max: i32,
}

impl Arena {
    pub const fn new(x_min: i32, y_min: i32, x_max: i32, y_max: i32) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Inner area of a window, leaving a margin of a tenth of the window size on each side.
    pub fn inside_window(width: f64, height: f64) -> Self {
        Self::new(
            (width * 0.1) as i32,
            (height * 0.1) as i32,
            (width * 0.9) as i32,
            (height * 0.9) as i32,
        )
    }

    pub fn x_min(&self) -> i32 {
        self.x_min
    }

    pub fn y_min(&self) -> i32 {
        self.y_min
    }

    pub fn x_max(&self) -> i32 {
        self.x_max
    }

    pub fn y_max(&self) -> i32 {
        self.y_max
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x() >= f64::from(self.x_min)
            && position.x() <= f64::from(self.x_max)
            && position.y() >= f64::from(self.y_min)
            && position.y() <= f64::from(self.y_max)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_arena_inside_window() {
        assert_eq!(Arena::inside_window(900.0, 800.0), Arena::new(90, 80, 810, 720));
        assert_eq!(Arena::inside_window(95.0, 15.0), Arena::new(9, 1, 85, 13));
    }

    #[rstest]
    #[case::inside(Position::new(5.0, 5.0), true)]
    #[case::lower_corner(Position::new(0.0, 0.0), true)]
    #[case::upper_corner(Position::new(10.0, 10.0), true)]
    #[case::left(Position::new(-0.5, 5.0), false)]
    #[case::above(Position::new(5.0, 10.5), false)]
    fn test_arena_contains(#[case] position: Position, #[case] expected: bool) {
        assert_eq!(Arena::new(0, 0, 10, 10).contains(position), expected);
    }
}
