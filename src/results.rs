use crate::dynamics::state::State;

// ---------------------------------------------------------------------------
// Simulation result
// ---------------------------------------------------------------------------

/// Outcome of a single simulation run. Built once by the simulator and never
/// mutated afterwards.
#[derive(Debug, Clone)]
pub struct SimulationResult {
    pub dt: f64,                // integration step used, s
    pub trajectory: Vec<State>, // time-ordered samples, launch sample included
    pub range: f64,             // m, horizontal coordinate of the last sample
    pub max_height: f64,        // m, maximum height over all samples
    pub final_speed: f64,       // m/s at the last sample
}

impl SimulationResult {
    /// Flight time as tabulated: sample count times step size. The launch
    /// sample counts, so this runs one step past the last sample's time.
    pub fn flight_time(&self) -> f64 {
        self.trajectory.len() as f64 * self.dt
    }

    /// Landing sample (the first one below ground level).
    pub fn landing(&self) -> &State {
        self.trajectory.last().unwrap()
    }
}

// ---------------------------------------------------------------------------
// Session result log
// ---------------------------------------------------------------------------

/// Two runs count as "the same step size" within this absolute tolerance.
const DT_MATCH_TOLERANCE: f64 = 1e-10;

/// Ordered store of completed runs for one session. Append-only between
/// clears; insertion order is run order.
#[derive(Debug, Default)]
pub struct ResultLog {
    runs: Vec<SimulationResult>,
}

impl ResultLog {
    pub fn new() -> Self {
        Self { runs: Vec::new() }
    }

    /// Append a completed run.
    pub fn push(&mut self, result: SimulationResult) {
        self.runs.push(result);
    }

    /// All runs, oldest first.
    pub fn runs(&self) -> &[SimulationResult] {
        &self.runs
    }

    /// Drop every stored run.
    pub fn clear(&mut self) {
        self.runs.clear();
    }

    /// True when some stored run already used this step size. Callers gate
    /// a duplicate re-run behind a user confirmation.
    pub fn contains_dt(&self, dt: f64) -> bool {
        self.runs.iter().any(|r| (r.dt - dt).abs() < DT_MATCH_TOLERANCE)
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
