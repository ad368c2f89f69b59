use thiserror::Error;

// ---------------------------------------------------------------------------
// Physical constants
// ---------------------------------------------------------------------------

pub const STANDARD_GRAVITY: f64 = 9.81; // m/s^2

// ---------------------------------------------------------------------------
// Launch parameter set
// ---------------------------------------------------------------------------

/// Full parameter set for one simulation run.
/// Validated with [`LaunchParams::validate`] before being handed to the
/// simulator; the simulator itself assumes valid input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchParams {
    pub speed: f64,       // initial speed, m/s
    pub angle_deg: f64,   // launch angle above horizontal, degrees
    pub mass: f64,        // kg
    pub air_density: f64, // kg/m^3
    pub cd: f64,          // drag coefficient (dimensionless)
    pub area: f64,        // cross-sectional area, m^2
    pub dt: f64,          // integration step, s
    pub gravity: f64,     // m/s^2
}

impl LaunchParams {
    /// Check the constraints the simulator relies on.
    ///
    /// Returns the first violated constraint: step size and speed must be
    /// positive, the launch angle must lie strictly between 0 and 90 degrees,
    /// and every field must be finite.
    pub fn validate(&self) -> Result<(), ParamError> {
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(ParamError::Step(self.dt));
        }
        if !self.speed.is_finite() || self.speed <= 0.0 {
            return Err(ParamError::Speed(self.speed));
        }
        if !self.angle_deg.is_finite() || self.angle_deg <= 0.0 || self.angle_deg >= 90.0 {
            return Err(ParamError::Angle(self.angle_deg));
        }
        for (label, value) in [
            ("mass", self.mass),
            ("air density", self.air_density),
            ("drag coefficient", self.cd),
            ("cross-sectional area", self.area),
            ("gravity", self.gravity),
        ] {
            if !value.is_finite() {
                return Err(ParamError::NotFinite { label, value });
            }
        }
        Ok(())
    }

    /// Launch angle in radians.
    pub fn angle_rad(&self) -> f64 {
        self.angle_deg.to_radians()
    }
}

// ---------------------------------------------------------------------------
// Validation errors
// ---------------------------------------------------------------------------

/// Invalid-parameter error raised before a simulation is started.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamError {
    #[error("{label}: '{value}' is not a number")]
    Parse { label: &'static str, value: String },

    #[error("step size must be positive, got {0}")]
    Step(f64),

    #[error("initial speed must be positive, got {0}")]
    Speed(f64),

    #[error("launch angle must be strictly between 0 and 90 degrees, got {0}")]
    Angle(f64),

    #[error("{label} must be finite, got {value}")]
    NotFinite { label: &'static str, value: f64 },
}

/// Parse one numeric field from its textual source (form entry or CLI).
pub fn parse_field(label: &'static str, text: &str) -> Result<f64, ParamError> {
    let trimmed = text.trim();
    trimmed.parse::<f64>().map_err(|_| ParamError::Parse {
        label,
        value: trimmed.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

pub struct LaunchParamsBuilder {
    speed: f64,
    angle_deg: f64,
    mass: f64,
    air_density: f64,
    cd: f64,
    area: f64,
    dt: f64,
    gravity: f64,
}

impl LaunchParamsBuilder {
    /// Start from the lab defaults (see [`presets::lab_default`]).
    pub fn new() -> Self {
        let p = presets::lab_default();
        Self {
            speed: p.speed,
            angle_deg: p.angle_deg,
            mass: p.mass,
            air_density: p.air_density,
            cd: p.cd,
            area: p.area,
            dt: p.dt,
            gravity: p.gravity,
        }
    }

    pub fn speed(mut self, v: f64) -> Self { self.speed = v; self }
    pub fn angle_deg(mut self, v: f64) -> Self { self.angle_deg = v; self }
    pub fn mass(mut self, v: f64) -> Self { self.mass = v; self }
    pub fn air_density(mut self, v: f64) -> Self { self.air_density = v; self }
    pub fn cd(mut self, v: f64) -> Self { self.cd = v; self }
    pub fn area(mut self, v: f64) -> Self { self.area = v; self }
    pub fn dt(mut self, v: f64) -> Self { self.dt = v; self }
    pub fn gravity(mut self, v: f64) -> Self { self.gravity = v; self }

    pub fn build(self) -> LaunchParams {
        LaunchParams {
            speed: self.speed,
            angle_deg: self.angle_deg,
            mass: self.mass,
            air_density: self.air_density,
            cd: self.cd,
            area: self.area,
            dt: self.dt,
            gravity: self.gravity,
        }
    }
}

impl Default for LaunchParamsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Preset parameter sets
// ---------------------------------------------------------------------------

pub mod presets {
    use super::{LaunchParams, STANDARD_GRAVITY};

    /// The lab's default experiment: a 1 kg body at 100 m/s, 45 degrees,
    /// sea-level air.
    pub fn lab_default() -> LaunchParams {
        LaunchParams {
            speed: 100.0,
            angle_deg: 45.0,
            mass: 1.0,
            air_density: 1.29,
            cd: 0.15,
            area: 0.01,
            dt: 0.01,
            gravity: STANDARD_GRAVITY,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
