//! The domain module encapsulates the goal chase. It defines the `Goal` and `Robot` entities,
//! the quantized angles they are oriented by, and the `SimulationController` advancing them in
//! fixed timesteps.
//!
//! The module does not depend on the game engine, so the simulation can be driven and drawn by
//! any front-end that implements `Renderer`.

mod angle;
mod basis;
mod environment;
mod goal;
mod integrator;
mod pose;
mod robot;
mod simulation;

pub use angle::{AngleSpace, Tick, TICKS_PER_TURN};
pub use basis::{Position, Rgb};
pub use environment::Arena;
pub use goal::{Goal, GoalConfig};
pub use integrator::FixedStepIntegrator;
pub use pose::Pose;
pub use robot::{Robot, RobotConfig, SteeringState};
pub use simulation::{Renderer, SimulationConfig, SimulationController, SimulationError};
