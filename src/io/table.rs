use std::io::{self, Write};

use crate::results::SimulationResult;

/// Render the run comparison table, one row per run in run order.
///
/// The step column keeps six decimals so neighboring steps like 0.001 and
/// 0.0001 stay distinguishable; the flight figures get two.
pub fn write_table<W: Write>(writer: &mut W, runs: &[SimulationResult]) -> io::Result<()> {
    writeln!(
        writer,
        "{:>10}  {:>11}  {:>14}  {:>17}  {:>15}",
        "dt (s)", "Range (m)", "Max height (m)", "Final speed (m/s)", "Flight time (s)"
    )?;
    writeln!(writer, "{}", "─".repeat(75))?;

    for run in runs {
        writeln!(
            writer,
            "{:>10.6}  {:>11.2}  {:>14.2}  {:>17.2}  {:>15.2}",
            run.dt,
            run.range,
            run.max_height,
            run.final_speed,
            run.flight_time(),
        )?;
    }

    Ok(())
}
