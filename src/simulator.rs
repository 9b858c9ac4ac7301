//! Simulation of the goal chase.
//!
//! The wall-clock duration of each frame is handed to the domain, which turns it into a whole
//! number of fixed simulation steps.

use bevy::prelude::*;

use crate::resource::SimulationRes;

pub struct Simulator;

impl Plugin for Simulator {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, simulate);
    }
}

pub fn simulate(time: Res<Time>, mut simulation: ResMut<SimulationRes>) {
    simulation.advance(time.delta_seconds_f64());
}
