use nalgebra::Vector2;

// ---------------------------------------------------------------------------
// Simulation state
// ---------------------------------------------------------------------------

/// Full state at a single point in time.
/// Frame: x downrange, y up, origin at the launch point.
#[derive(Debug, Clone, Copy)]
pub struct State {
    pub time: f64,         // s
    pub pos: Vector2<f64>, // m   [downrange, height]
    pub vel: Vector2<f64>, // m/s
}

impl State {
    /// State at the moment of launch: origin position, speed decomposed
    /// into components by the launch angle.
    pub fn at_launch(speed: f64, angle_rad: f64) -> State {
        State {
            time: 0.0,
            pos: Vector2::zeros(),
            vel: Vector2::new(speed * angle_rad.cos(), speed * angle_rad.sin()),
        }
    }

    /// Height above ground, m.
    pub fn height(&self) -> f64 {
        self.pos.y
    }

    /// Downrange distance, m.
    pub fn downrange(&self) -> f64 {
        self.pos.x
    }

    /// Speed magnitude, m/s.
    pub fn speed(&self) -> f64 {
        self.vel.norm()
    }
}
