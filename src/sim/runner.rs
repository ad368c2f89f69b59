use crate::dynamics::state::State;
use crate::params::LaunchParams;
use crate::results::SimulationResult;

use super::integrator::euler_step;

// ---------------------------------------------------------------------------
// Run loop
// ---------------------------------------------------------------------------

/// Upper bound on the up-front trajectory allocation. The vector still grows
/// past it when a flight needs more samples.
const CAPACITY_CAP: usize = 200_000;

/// Run one flight from launch until the first sample below ground level.
///
/// The launch sample is recorded before any stepping, so the trajectory
/// always holds at least two samples. The loop stops on the first sample
/// with negative height and keeps it as the landing sample; there is no
/// interpolation back to exact ground level, which makes the recorded range
/// overshoot by at most one step of horizontal travel.
///
/// Expects a parameter set that passed [`LaunchParams::validate`]; the run
/// loop itself does not re-check.
pub fn simulate(params: &LaunchParams) -> SimulationResult {
    let mut state = State::at_launch(params.speed, params.angle_rad());

    // Size the buffer from the drag-free flight time.
    let est_flight = 2.0 * params.speed * params.angle_rad().sin() / params.gravity;
    let est_samples = (est_flight / params.dt) as usize + 2;
    let mut trajectory = Vec::with_capacity(est_samples.min(CAPACITY_CAP));
    trajectory.push(state);

    let mut max_height: f64 = 0.0;

    while state.height() >= 0.0 {
        state = euler_step(&state, params);
        trajectory.push(state);
        if state.height() > max_height {
            max_height = state.height();
        }
    }

    SimulationResult {
        dt: params.dt,
        range: state.downrange(),
        max_height,
        final_speed: state.speed(),
        trajectory,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{presets, LaunchParamsBuilder};
    use approx::assert_relative_eq;

    #[test]
    fn first_sample_is_the_launch_point() {
        let result = simulate(&presets::lab_default());
        let first = &result.trajectory[0];
        assert_eq!(first.pos.x, 0.0);
        assert_eq!(first.pos.y, 0.0);
        assert_eq!(first.time, 0.0);
    }

    #[test]
    fn last_sample_is_below_ground() {
        let result = simulate(&presets::lab_default());
        let last = result.trajectory.last().unwrap();
        assert!(last.pos.y < 0.0, "landing height {}", last.pos.y);
        // Every earlier sample is still at or above ground
        for s in &result.trajectory[..result.trajectory.len() - 1] {
            assert!(s.pos.y >= 0.0, "premature descent at t={}", s.time);
        }
    }

    #[test]
    fn summary_fields_match_the_trajectory() {
        let result = simulate(&presets::lab_default());
        let last = result.trajectory.last().unwrap();

        assert_eq!(result.range, last.pos.x);
        assert_eq!(result.final_speed, last.vel.norm());
        let sequence_max = result
            .trajectory
            .iter()
            .map(|s| s.pos.y)
            .fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(result.max_height, sequence_max);
        assert_eq!(result.dt, presets::lab_default().dt);
    }

    #[test]
    fn time_stamps_accumulate_by_dt() {
        let params = LaunchParamsBuilder::new().dt(0.05).build();
        let result = simulate(&params);
        let last = result.trajectory.last().unwrap();
        let steps = (result.trajectory.len() - 1) as f64;
        assert_relative_eq!(last.time, steps * 0.05, max_relative = 1e-9);
    }

    #[test]
    fn zero_drag_matches_the_closed_form() {
        // With cd = 0 the flight is plain ballistics:
        //   range = v^2 sin(2a) / g,  apex = v^2 sin^2(a) / (2g)
        // The discretization error is O(dt), so the tolerance tightens
        // with the step.
        for (dt, tol) in [(0.02, 2e-2), (0.001, 2e-3)] {
            let params = LaunchParamsBuilder::new()
                .speed(50.0)
                .angle_deg(30.0)
                .cd(0.0)
                .dt(dt)
                .build();
            let result = simulate(&params);

            let v = params.speed;
            let a = params.angle_rad();
            let g = params.gravity;
            let range = v * v * (2.0 * a).sin() / g;
            let apex = v * v * a.sin() * a.sin() / (2.0 * g);

            assert_relative_eq!(result.range, range, max_relative = tol);
            assert_relative_eq!(result.max_height, apex, max_relative = tol);
        }
    }

    #[test]
    fn drag_shortens_the_flight() {
        let with_drag = simulate(&presets::lab_default());
        let vacuum = simulate(&LaunchParamsBuilder::new().cd(0.0).build());

        assert!(with_drag.range < vacuum.range);
        assert!(with_drag.max_height < vacuum.max_height);
        assert!(with_drag.final_speed < presets::lab_default().speed);
    }

    #[test]
    fn lab_default_lands_in_the_expected_window() {
        // 100 m/s at 45 degrees, 1 kg, sea-level air: roughly 550 m range,
        // 160 m apex, 11-12 s of flight. Wide brackets, so the test pins the
        // physics rather than a particular rounding.
        let result = simulate(&presets::lab_default());

        assert!(result.range > 400.0 && result.range < 700.0, "range {}", result.range);
        assert!(
            result.max_height > 120.0 && result.max_height < 220.0,
            "max height {}",
            result.max_height
        );
        let t = result.flight_time();
        assert!(t > 9.0 && t < 15.0, "flight time {t}");
        assert!(
            result.final_speed > 40.0 && result.final_speed < 90.0,
            "final speed {}",
            result.final_speed
        );
    }

    #[test]
    fn range_converges_as_the_step_shrinks() {
        let reference = simulate(&LaunchParamsBuilder::new().dt(0.001).build());
        for (dt, tol) in [(0.1, 15.0), (0.01, 2.5), (0.002, 0.6)] {
            let run = simulate(&LaunchParamsBuilder::new().dt(dt).build());
            let err = (run.range - reference.range).abs();
            assert!(err < tol, "dt={dt}: range {} is {err} m off", run.range);
        }
    }

    #[test]
    fn huge_step_still_terminates() {
        // One 50 s step throws the body far below ground immediately.
        let params = LaunchParamsBuilder::new().dt(50.0).build();
        let result = simulate(&params);
        assert_eq!(result.trajectory.len(), 2);
        assert!(result.trajectory[1].pos.y < 0.0);
    }

    #[test]
    fn flight_time_runs_one_step_past_the_last_sample() {
        let result = simulate(&presets::lab_default());
        let last = result.trajectory.last().unwrap();
        assert_relative_eq!(
            result.flight_time(),
            last.time + result.dt,
            max_relative = 1e-9
        );
    }
}
