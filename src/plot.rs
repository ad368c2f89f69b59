use crate::results::SimulationResult;

// ---------------------------------------------------------------------------
// Plot projection
// ---------------------------------------------------------------------------
// Everything here is plain data: the visualization front end turns these
// series into its own line/marker primitives, and the tests can check the
// projection without a window.

/// Series colors cycled by run order: blue, red, green, brown, purple.
pub const SERIES_COLORS: [(u8, u8, u8); 5] = [
    (0, 0, 255),
    (255, 0, 0),
    (0, 128, 0),
    (165, 42, 42),
    (128, 0, 128),
];

/// One simulation run projected to drawable form.
#[derive(Debug, Clone, PartialEq)]
pub struct TrajectorySeries {
    pub label: String,         // legend entry, e.g. "Δt = 0.0100 s"
    pub color: (u8, u8, u8),   // RGB
    pub points: Vec<[f64; 2]>, // (x, y) samples in meters
    pub landing: [f64; 2],     // last sample, drawn as a marker
}

/// Legend label for a run with the given step size.
pub fn series_label(dt: f64) -> String {
    format!("Δt = {dt:.4} s")
}

/// Color for the run at `index`, cycling through [`SERIES_COLORS`].
pub fn series_color(index: usize) -> (u8, u8, u8) {
    SERIES_COLORS[index % SERIES_COLORS.len()]
}

/// Project runs into drawable series, keeping run order.
pub fn trajectory_series(runs: &[SimulationResult]) -> Vec<TrajectorySeries> {
    runs.iter()
        .enumerate()
        .map(|(index, run)| {
            let points: Vec<[f64; 2]> =
                run.trajectory.iter().map(|s| [s.pos.x, s.pos.y]).collect();
            let landing = *points.last().unwrap();
            TrajectorySeries {
                label: series_label(run.dt),
                color: series_color(index),
                points,
                landing,
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
