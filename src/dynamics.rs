pub mod state;

use nalgebra::Vector2;

use crate::params::LaunchParams;
use crate::physics::drag;

// ---------------------------------------------------------------------------
// Equations of motion (point mass in a vertical plane)
// ---------------------------------------------------------------------------

/// Acceleration on the projectile for a given velocity.
///
/// Forces modeled:
///   1. Gravity — constant, straight down
///   2. Drag    — quadratic, opposing velocity
///
/// At exactly zero speed the drag term vanishes and the acceleration is pure
/// gravity, so there is no division by zero.
pub fn acceleration(vel: &Vector2<f64>, params: &LaunchParams) -> Vector2<f64> {
    let speed = vel.norm();
    if speed > 0.0 {
        let f_drag = drag::drag_force(params.air_density, params.cd, params.area, speed);
        let scale = -f_drag / (params.mass * speed);
        Vector2::new(vel.x * scale, vel.y * scale - params.gravity)
    } else {
        Vector2::new(0.0, -params.gravity)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
