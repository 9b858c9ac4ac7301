//! Basic building blocks.

use std::ops::{Add, Mul, Sub};

use nalgebra::{UnitComplex, Vector2};

/// Point in arena space. Also used as a displacement between two points.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Position {
    x: f64,
    y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn distance(&self, position: Self) -> f64 {
        (self.x - position.x).hypot(self.y - position.y)
    }

    /// Rotation by complex multiplication with a unit complex number.
    pub fn rotate_vector(&self, rotation: &UnitComplex<f64>) -> Position {
        (rotation * Vector2::from(*self)).into()
    }
}

impl From<Position> for Vector2<f64> {
    fn from(value: Position) -> Self {
        Vector2::new(value.x, value.y)
    }
}

impl From<Vector2<f64>> for Position {
    fn from(value: Vector2<f64>) -> Self {
        Self::new(value.x, value.y)
    }
}

impl From<Position> for (f32, f32) {
    fn from(value: Position) -> Self {
        (value.x as f32, value.y as f32)
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for Position {
    type Output = Position;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl Mul<f64> for Position {
    type Output = Position;

    fn mul(self, rhs: f64) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use approx::{assert_abs_diff_eq, AbsDiffEq};
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_position() {
        let position = Position::new(1.0, 2.0);
        assert_abs_diff_eq!(position.x(), 1.0);
        assert_abs_diff_eq!(position.y(), 2.0);
    }

    #[rstest]
    #[case::same(Position::new(1.0, 1.0), Position::new(1.0, 1.0), 0.0)]
    #[case::horizontal(Position::new(-2.0, 1.0), Position::new(1.0, 1.0), 3.0)]
    #[case::diagonal(Position::new(0.0, 0.0), Position::new(3.0, -4.0), 5.0)]
    fn test_position_distance(#[case] a: Position, #[case] b: Position, #[case] expected: f64) {
        assert_abs_diff_eq!(a.distance(b), expected);
        assert_abs_diff_eq!(b.distance(a), expected);
    }

    #[rstest]
    #[case::zero(0.0, Position::new(2.0, 1.0))]
    #[case::quarter(0.5 * PI, Position::new(-1.0, 2.0))]
    #[case::half(PI, Position::new(-2.0, -1.0))]
    #[case::three_quarters(1.5 * PI, Position::new(1.0, -2.0))]
    fn test_position_rotate_vector(#[case] angle: f64, #[case] expected: Position) {
        let rotated = Position::new(2.0, 1.0).rotate_vector(&UnitComplex::new(angle));
        assert_abs_diff_eq!(rotated, expected, epsilon = 1e-12);
    }

    #[test]
    fn test_position_arithmetic() {
        let a = Position::new(1.0, 2.0);
        let b = Position::new(0.5, -1.0);
        assert_abs_diff_eq!(a + b, Position::new(1.5, 1.0));
        assert_abs_diff_eq!(a - b, Position::new(0.5, 3.0));
        assert_abs_diff_eq!(a * 2.0, Position::new(2.0, 4.0));
    }

    impl AbsDiffEq for Position {
        type Epsilon = f64;

        fn default_epsilon() -> f64 {
            f64::EPSILON
        }

        fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
            f64::abs_diff_eq(&self.x, &other.x, epsilon)
                && f64::abs_diff_eq(&self.y, &other.y, epsilon)
        }
    }
}
