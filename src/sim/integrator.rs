use crate::dynamics;
use crate::dynamics::state::State;
use crate::params::LaunchParams;

// ---------------------------------------------------------------------------
// Semi-implicit Euler step
// ---------------------------------------------------------------------------

/// Advance a state by one step of semi-implicit Euler.
///
/// Velocity is updated first from the acceleration at the current state; the
/// position then moves with the UPDATED velocity. Every tabulated number in
/// the lab depends on that ordering, so it must not change.
pub fn euler_step(state: &State, params: &LaunchParams) -> State {
    let accel = dynamics::acceleration(&state.vel, params);
    let vel = state.vel + accel * params.dt;

    State {
        time: state.time + params.dt,
        pos: state.pos + vel * params.dt,
        vel,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::LaunchParamsBuilder;
    use approx::assert_relative_eq;
    use nalgebra::Vector2;

    #[test]
    fn position_moves_with_the_updated_velocity() {
        // Drag off, round numbers: accel is exactly (0, -10).
        let params = LaunchParamsBuilder::new()
            .cd(0.0)
            .gravity(10.0)
            .dt(0.5)
            .build();
        let state = State {
            time: 0.0,
            pos: Vector2::zeros(),
            vel: Vector2::new(3.0, 4.0),
        };

        let next = euler_step(&state, &params);

        assert_eq!(next.vel, Vector2::new(3.0, -1.0));
        // Explicit Euler would land at y = 2.0; the semi-implicit form uses
        // the new vertical velocity and drops to -0.5.
        assert_eq!(next.pos, Vector2::new(1.5, -0.5));
        assert_relative_eq!(next.time, 0.5);
    }

    #[test]
    fn drag_enters_the_same_step() {
        // Horizontal motion only: with drag the step travels strictly less
        // than vel * dt because the braked velocity moves the position.
        let params = LaunchParamsBuilder::new().gravity(0.0).dt(0.1).build();
        let state = State {
            time: 0.0,
            pos: Vector2::zeros(),
            vel: Vector2::new(50.0, 0.0),
        };

        let next = euler_step(&state, &params);

        assert!(next.vel.x < 50.0, "drag must slow the step: {}", next.vel.x);
        assert!(
            next.pos.x < 5.0,
            "position must use the braked velocity: {}",
            next.pos.x
        );
        assert!(next.pos.x > 4.0, "braking over a single step stays small");
    }

    #[test]
    fn time_accumulates_step_by_step() {
        let params = LaunchParamsBuilder::new().dt(0.25).build();
        let mut state = State::at_launch(20.0, params.angle_rad());
        for _ in 0..4 {
            state = euler_step(&state, &params);
        }
        assert_relative_eq!(state.time, 1.0);
    }
}
