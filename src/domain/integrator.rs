//! Fixed simulation timestep.
//!
//! Wall-clock time of rendered frames is collected in an accumulator and consumed in constant
//! steps. Steering therefore behaves the same regardless of the frame rate.

use super::SimulationError;

#[derive(Clone, Debug, PartialEq)]
pub struct FixedStepIntegrator {
    step: f64,
    accumulator: f64,
}

impl FixedStepIntegrator {
    pub fn new(step: f64) -> Result<Self, SimulationError> {
        if !(step.is_finite() && step > 0.0) {
            return Err(SimulationError::InvalidConfiguration(format!(
                "simulation step must be positive, got {step}"
            )));
        }
        Ok(Self {
            step,
            accumulator: 0.0,
        })
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    pub fn accumulate(&mut self, elapsed_seconds: f64) {
        self.accumulator += elapsed_seconds;
    }

    /// Calls `step_fn` with the constant step until less than one step is left. Returns the
    /// number of calls.
    pub fn integrate<F: FnMut(f64)>(&mut self, mut step_fn: F) -> usize {
        let mut steps = 0;
        while self.accumulator >= self.step {
            step_fn(self.step);
            self.accumulator -= self.step;
            steps += 1;
        }
        steps
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::zero(0.0)]
    #[case::negative(-0.005)]
    #[case::nan(f64::NAN)]
    #[case::infinite(f64::INFINITY)]
    fn test_integrator_rejects_invalid_step(#[case] step: f64) {
        assert!(matches!(
            FixedStepIntegrator::new(step),
            Err(SimulationError::InvalidConfiguration(_))
        ));
    }

    #[rstest]
    #[case::nothing(0.25, 0.0, 0, 0.0)]
    #[case::less_than_step(0.25, 0.2, 0, 0.2)]
    #[case::exactly_one_step(0.25, 0.25, 1, 0.0)]
    #[case::catch_up(0.25, 1.0, 4, 0.0)]
    #[case::remainder(0.25, 1.125, 4, 0.125)]
    #[case::slow_frame(0.5, 7.75, 15, 0.25)]
    fn test_integrator_integrate(
        #[case] step: f64,
        #[case] elapsed: f64,
        #[case] expected_steps: usize,
        #[case] expected_remainder: f64,
    ) {
        let mut integrator = FixedStepIntegrator::new(step).unwrap();
        let mut calls = vec![];

        integrator.accumulate(elapsed);
        let steps = integrator.integrate(|dt| calls.push(dt));

        assert_eq!(steps, expected_steps);
        assert_eq!(calls, vec![step; expected_steps]);
        assert_abs_diff_eq!(integrator.accumulator(), expected_remainder);
    }

    #[test]
    fn test_integrator_carries_remainder_between_frames() {
        let mut integrator = FixedStepIntegrator::new(0.005).unwrap();
        let mut total_steps = 0;
        for _ in 0..1000 {
            integrator.accumulate(0.0123);
            total_steps += integrator.integrate(|dt| assert_eq!(dt, 0.005));
            assert!(integrator.accumulator() < integrator.step());
            assert!(integrator.accumulator() >= 0.0);
        }
        // 12.3 seconds in steps of 5 ms, minus at most one step lost to rounding.
        assert!((2459..=2460).contains(&total_steps), "{total_steps}");
    }

    #[test]
    fn test_integrator_matches_floor_for_exact_steps() {
        let mut integrator = FixedStepIntegrator::new(0.0625).unwrap();
        for frame in [0.0, 0.03125, 0.5, 0.0625, 1.0] {
            let before = integrator.accumulator() + frame;
            integrator.accumulate(frame);
            let steps = integrator.integrate(|_| {});
            assert_eq!(steps, (before / 0.0625).floor() as usize);
            assert_abs_diff_eq!(integrator.accumulator(), before - steps as f64 * 0.0625);
        }
    }
}
