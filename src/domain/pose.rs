//! Rigid polygons placed in the arena.

use super::{AngleSpace, Position, Rgb, Tick};

/// Position and orientation of a polygon defined in local space.
#[derive(Clone, Debug, PartialEq)]
pub struct Pose {
    local_vertices: Vec<Position>,
    color: Rgb,
    position: Position,
    orientation: Tick,
}

impl Pose {
    pub fn new(local_vertices: &[Position], color: Rgb) -> Self {
        Self {
            local_vertices: local_vertices.to_vec(),
            color,
            position: Position::default(),
            orientation: Tick::ZERO,
        }
    }

    pub fn local_vertices(&self) -> &[Position] {
        &self.local_vertices
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn orientation(&self) -> Tick {
        self.orientation
    }

    /// Vertices rotated by the current orientation and moved to the current position.
    pub fn transformed_vertices(&self, angles: &AngleSpace) -> Vec<Position> {
        let rotation = angles.rotation(self.orientation);
        self.local_vertices
            .iter()
            .map(|vertex| self.position + vertex.rotate_vector(rotation))
            .collect()
    }

    pub fn translate_to(&mut self, position: Position) {
        self.position = position;
    }

    pub fn translate_by(&mut self, offset: Position) {
        self.position = self.position + offset;
    }

    pub fn rotate_by(&mut self, delta_ticks: f64) {
        self.orientation = self.orientation.rotated_by(delta_ticks);
    }
}
