//! Robot chasing the goal.
//!
//! The robot first turns on the spot until it faces the goal and then drives straight towards
//! it. If the distance to the goal starts to grow while driving, it stops and turns again.

use log::debug;

use super::{AngleSpace, Pose, Position, Rgb, Tick, TICKS_PER_TURN};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SteeringState {
    #[default]
    Orientating,
    Orientated,
    Moving,
    Goal,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Robot {
    pose: Pose,
    state: SteeringState,
    /// Ticks per second.
    angular_speed: f64,
    /// Ticks.
    angular_epsilon: f64,
    linear_speed: f64,
    linear_epsilon: f64,
    last_distance: f64,
    velocity: Position,
}

impl Robot {
    pub fn new(position: Position, config: &RobotConfig) -> Self {
        let mut pose = Pose::new(config.vertices, config.color);
        pose.translate_to(position);
        Self {
            pose,
            state: SteeringState::default(),
            angular_speed: AngleSpace::ticks_from_radians(config.angular_speed),
            angular_epsilon: AngleSpace::ticks_from_radians(config.angular_epsilon),
            linear_speed: config.linear_speed,
            linear_epsilon: config.linear_epsilon,
            last_distance: 0.0,
            velocity: Position::default(),
        }
    }

    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    pub fn position(&self) -> Position {
        self.pose.position()
    }

    pub fn orientation(&self) -> Tick {
        self.pose.orientation()
    }

    pub fn state(&self) -> SteeringState {
        self.state
    }

    /// Starts a new chase. Position and orientation are kept.
    pub fn reset(&mut self) {
        self.set_state(SteeringState::Orientating);
    }

    /// Advances the steering by one simulation step of `dt` seconds.
    pub fn transform(&mut self, dt: f64, goal: Position, angles: &AngleSpace) {
        if self.state == SteeringState::Orientating {
            self.orientate(dt, goal, angles);
        }

        // Orientated is left within the step it was entered in.
        match self.state {
            SteeringState::Orientating | SteeringState::Goal => {}
            SteeringState::Orientated => {
                self.start_moving(dt, goal, angles);
                self.translate(goal);
            }
            SteeringState::Moving => self.translate(goal),
        }
    }

    fn orientate(&mut self, dt: f64, goal: Position, angles: &AngleSpace) {
        let angle = f64::from(angles.angle_to(self.position(), self.orientation(), goal));
        let turn = f64::from(TICKS_PER_TURN);

        if angle < self.angular_epsilon || turn - angle < self.angular_epsilon {
            self.set_state(SteeringState::Orientated);
        } else if angle <= f64::from(Tick::HALF_TURN) {
            // A goal exactly behind the robot is approached counter-clockwise.
            self.pose.rotate_by(dt * self.angular_speed);
        } else {
            self.pose.rotate_by(-dt * self.angular_speed);
        }
    }

    fn start_moving(&mut self, dt: f64, goal: Position, angles: &AngleSpace) {
        let (cos, sin) = angles.unit_vector(self.orientation().value().into());
        self.last_distance = self.position().distance(goal);
        self.velocity = Position::new(cos, sin) * (dt * self.linear_speed);
        self.set_state(SteeringState::Moving);
    }

    fn translate(&mut self, goal: Position) {
        self.pose.translate_by(self.velocity);
        let distance = self.position().distance(goal);

        if distance < self.linear_epsilon {
            self.set_state(SteeringState::Goal);
        } else if distance > self.last_distance {
            self.set_state(SteeringState::Orientating);
        } else {
            self.last_distance = distance;
        }
    }

    fn set_state(&mut self, state: SteeringState) {
        if self.state != state {
            debug!(
                "robot at ({:.1}, {:.1}) heading {}: {:?} -> {:?}",
                self.position().x(),
                self.position().y(),
                self.orientation().value(),
                self.state,
                state
            );
        }
        self.state = state;
    }
}

/// Speeds are per second. Angles are in radians, positions in arena units. The robot's front
/// faces the positive x-axis of its local space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RobotConfig {
    pub vertices: &'static [Position],
    pub color: Rgb,
    pub angular_speed: f64,
    pub angular_epsilon: f64,
    pub linear_speed: f64,
    pub linear_epsilon: f64,
}

impl RobotConfig {
    pub const fn new(
        vertices: &'static [Position],
        color: Rgb,
        angular_speed: f64,
        angular_epsilon: f64,
        linear_speed: f64,
        linear_epsilon: f64,
    ) -> Self {
        RobotConfig {
            vertices,
            color,
            angular_speed,
            angular_epsilon,
            linear_speed,
            linear_epsilon,
        }
    }
}
