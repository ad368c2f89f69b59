// ---------------------------------------------------------------------------
// Quadratic drag law
// ---------------------------------------------------------------------------

/// Magnitude of the quadratic air-drag force, N.
///
/// `F = 0.5 * rho * cd * area * v^2`; direction handling is left to the
/// acceleration model.
pub fn drag_force(air_density: f64, cd: f64, area: f64, speed: f64) -> f64 {
    0.5 * air_density * cd * area * speed * speed
}

/// Dynamic pressure `q = 0.5 * rho * v^2`, Pa.
pub fn dynamic_pressure(air_density: f64, speed: f64) -> f64 {
    0.5 * air_density * speed * speed
}
