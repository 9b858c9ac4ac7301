//! Quantized angles.
//!
//! A full turn is split into [`TICKS_PER_TURN`] integer ticks. Orientations are only ever
//! stored as ticks, and rotations are looked up in a table of unit complex numbers that is
//! computed once when the [`AngleSpace`] is created.

use std::f64::consts::TAU;

use nalgebra::UnitComplex;

use super::Position;

pub const TICKS_PER_TURN: u32 = 1024;

/// Orientation in ticks, always within `[0, TICKS_PER_TURN)`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Tick(u32);

impl Tick {
    pub const ZERO: Tick = Tick(0);
    pub const HALF_TURN: Tick = Tick(TICKS_PER_TURN / 2);

    /// Wraps any integer into a valid tick.
    pub fn wrapping(ticks: i64) -> Self {
        Self(ticks.rem_euclid(i64::from(TICKS_PER_TURN)) as u32)
    }

    pub fn value(self) -> u32 {
        self.0
    }

    /// Adds a possibly fractional number of ticks, rounded to the nearest tick.
    pub fn rotated_by(self, delta_ticks: f64) -> Self {
        Self::wrapping(i64::from(self.0) + delta_ticks.round() as i64)
    }
}

impl From<Tick> for f64 {
    fn from(value: Tick) -> Self {
        value.0.into()
    }
}

#[derive(Clone, Debug)]
pub struct AngleSpace {
    rotations: Vec<UnitComplex<f64>>,
}

impl AngleSpace {
    const RADIANS_PER_TICK: f64 = TAU / TICKS_PER_TURN as f64;

    pub fn new() -> Self {
        Self {
            rotations: (0..TICKS_PER_TURN)
                .map(|tick| UnitComplex::new(f64::from(tick) * Self::RADIANS_PER_TICK))
                .collect(),
        }
    }

    pub fn rotation(&self, tick: Tick) -> &UnitComplex<f64> {
        &self.rotations[tick.0 as usize]
    }

    /// Heading `(cos, sin)` for any integer tick.
    pub fn unit_vector(&self, ticks: i64) -> (f64, f64) {
        let rotation = self.rotation(Tick::wrapping(ticks));
        (rotation.cos_angle(), rotation.sin_angle())
    }

    /// Ticks an entity at `from` with orientation `orientation` has to turn counter-clockwise to
    /// face `to`.
    pub fn angle_to(&self, from: Position, orientation: Tick, to: Position) -> Tick {
        let direction = to - from;
        if direction == Position::default() {
            return Tick::ZERO;
        }

        // Dividing by the heading rotates the direction into the entity's local frame.
        let local = direction.rotate_vector(&self.rotation(orientation).inverse());
        let mut angle = local.y().atan2(local.x());
        if angle < 0.0 {
            angle += TAU;
        }

        // `angle` may round up to a full turn when it is a hair below zero.
        Tick((Self::ticks_from_radians(angle) as u32) % TICKS_PER_TURN)
    }

    pub fn ticks_from_radians(radians: f64) -> f64 {
        radians / Self::RADIANS_PER_TICK
    }

    pub fn radians_from_ticks(tick: Tick) -> f64 {
        f64::from(tick.0) * Self::RADIANS_PER_TICK
    }
}

impl Default for AngleSpace {
    fn default() -> Self {
        Self::new()
    }
}
