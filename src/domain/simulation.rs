//! Goal chase simulation.
//!
//! The [`SimulationController`] owns the goal, the robot and the timestep. The surrounding
//! application reports elapsed frame time via [`SimulationController::advance`] and asks for
//! the current scene via [`SimulationController::render`].

use std::f64::consts::PI;

use log::{debug, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

use super::{
    AngleSpace, Arena, FixedStepIntegrator, Goal, GoalConfig, Pose, Position, Rgb, Robot,
    RobotConfig, SteeringState,
};

/// Drawing surface provided by the application.
pub trait Renderer {
    fn set_color(&mut self, color: Rgb);

    fn draw_polygon(&mut self, points: &[Position]);
}

pub struct SimulationController {
    angles: AngleSpace,
    goal: Goal,
    robot: Robot,
    integrator: FixedStepIntegrator,
    arena: Arena,
    rng: ChaCha8Rng,
    config: SimulationConfig,
}

impl SimulationController {
    pub fn new(config: &SimulationConfig) -> Result<Self, SimulationError> {
        config.validate()?;

        let arena = Arena::inside_window(config.width, config.height);
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let mut goal = Goal::new(&config.goal);
        goal.relocate(&arena, &mut rng);
        let robot = Robot::new(
            Position::new(config.width / 2.0, config.height / 2.0),
            &config.robot,
        );

        Ok(Self {
            angles: AngleSpace::new(),
            goal,
            robot,
            integrator: FixedStepIntegrator::new(config.dt)?,
            arena,
            rng,
            config: *config,
        })
    }

    pub fn goal(&self) -> &Goal {
        &self.goal
    }

    pub fn robot(&self) -> &Robot {
        &self.robot
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Runs as many simulation steps as fit into the elapsed time plus the time left over from
    /// previous frames. Returns the number of steps.
    pub fn advance(&mut self, elapsed_seconds: f64) -> usize {
        if !(elapsed_seconds.is_finite() && elapsed_seconds >= 0.0) {
            warn!("ignoring invalid frame duration {elapsed_seconds}");
            return 0;
        }

        let goal = self.goal.position();
        let angles = &self.angles;
        let robot = &mut self.robot;
        self.integrator.accumulate(elapsed_seconds);
        self.integrator
            .integrate(|dt| robot.transform(dt, goal, angles))
    }

    /// Handles a reached goal and draws the goal and then the robot.
    pub fn render<R: Renderer + ?Sized>(&mut self, renderer: &mut R) {
        if self.robot.state() == SteeringState::Goal {
            debug!(
                "goal reached at ({:.1}, {:.1})",
                self.robot.position().x(),
                self.robot.position().y()
            );
            self.goal.relocate(&self.arena, &mut self.rng);
            self.robot.reset();
        }

        for pose in [self.goal.pose(), self.robot.pose()] {
            self.draw(pose, renderer);
        }
    }

    fn draw<R: Renderer + ?Sized>(&self, pose: &Pose, renderer: &mut R) {
        renderer.set_color(pose.color());
        renderer.draw_polygon(&pose.transformed_vertices(&self.angles));
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum SimulationError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationConfig {
    pub width: f64,
    pub height: f64,
    pub background: Rgb,
    /// Simulation step in seconds.
    pub dt: f64,
    pub seed: u64,
    pub goal: GoalConfig,
    pub robot: RobotConfig,
}

impl SimulationConfig {
    pub const DEFAULT: SimulationConfig = SimulationConfig::new(
        900.0,
        800.0,
        Rgb::new(250, 250, 250),
        0.005,
        19878367467712,
        GoalConfig::new(
            &[
                Position::new(10.0, 0.0),
                Position::new(0.0, 10.0),
                Position::new(-10.0, 0.0),
                Position::new(0.0, -10.0),
            ],
            Rgb::new(255, 0, 0),
        ),
        RobotConfig::new(
            &[
                Position::new(20.0, 0.0),
                Position::new(-20.0, 20.0),
                Position::new(0.0, 0.0),
                Position::new(-20.0, -20.0),
            ],
            Rgb::new(0, 99, 199),
            PI,
            2.0 * PI / 128.0,
            64.0,
            18.0,
        ),
    );

    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        width: f64,
        height: f64,
        background: Rgb,
        dt: f64,
        seed: u64,
        goal: GoalConfig,
        robot: RobotConfig,
    ) -> Self {
        SimulationConfig {
            width,
            height,
            background,
            dt,
            seed,
            goal,
            robot,
        }
    }

    fn validate(&self) -> Result<(), SimulationError> {
        for (name, value) in [
            ("width", self.width),
            ("height", self.height),
            ("simulation step", self.dt),
            ("angular speed", self.robot.angular_speed),
            ("angular epsilon", self.robot.angular_epsilon),
            ("linear speed", self.robot.linear_speed),
            ("linear epsilon", self.robot.linear_epsilon),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(format!("{name} must be positive, got {value}")));
            }
        }

        if self.goal.vertices.is_empty() || self.robot.vertices.is_empty() {
            return Err(invalid("polygons need at least one vertex".to_string()));
        }

        let angular_step = AngleSpace::ticks_from_radians(self.robot.angular_speed * self.dt);
        let angular_epsilon = AngleSpace::ticks_from_radians(self.robot.angular_epsilon);
        if angular_step.round() < 1.0 {
            return Err(invalid(format!(
                "angular speed turns {angular_step:.3} ticks per step, which rounds to zero"
            )));
        }
        if angular_step.round() >= 2.0 * angular_epsilon {
            return Err(invalid(format!(
                "angular speed turns {angular_step:.3} ticks per step, which overshoots the \
                 angular epsilon of {angular_epsilon:.3} ticks"
            )));
        }

        let linear_step = self.robot.linear_speed * self.dt;
        if linear_step >= self.robot.linear_epsilon {
            return Err(invalid(format!(
                "linear speed moves {linear_step} per step, which overshoots the linear epsilon \
                 of {}",
                self.robot.linear_epsilon
            )));
        }

        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

fn invalid(reason: String) -> SimulationError {
    SimulationError::InvalidConfiguration(reason)
}
