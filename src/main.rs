use bevy::{prelude::*, window::WindowResolution};


mod controller;
mod domain;
mod resource;
mod simulator;
mod visualizer;

use domain::{SimulationConfig, SimulationController, SimulationError};

fn main() -> Result<(), SimulationError> {
    let config = SimulationConfig::DEFAULT;
    let simulation = SimulationController::new(&config)?;

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Goal Chaser".into(),
                resolution: WindowResolution::new(config.width as f32, config.height as f32),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(resource::SimulationRes::from(simulation))
        .add_plugins(controller::Controller)
        .add_plugins(visualizer::Visualizer)
        .add_plugins(simulator::Simulator)
        .run();

    Ok(())
}
