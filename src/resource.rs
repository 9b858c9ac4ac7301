//! The resource module encapsulates domain entities for use with Bevy.

use std::ops::{Deref, DerefMut};

use bevy::ecs::system::Resource;

use crate::domain;

#[derive(Resource)]
pub struct SimulationRes(domain::SimulationController);

impl Deref for SimulationRes {
    type Target = domain::SimulationController;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for SimulationRes {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<domain::SimulationController> for SimulationRes {
    fn from(value: domain::SimulationController) -> Self {
        Self(value)
    }
}
