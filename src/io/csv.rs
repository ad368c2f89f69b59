use std::io::{self, Write};

use crate::dynamics::state::State;
use crate::results::SimulationResult;

/// Write trajectory data to CSV format.
///
/// Columns: time, x, y, vx, vy, speed
pub fn write_trajectory<W: Write>(writer: &mut W, trajectory: &[State]) -> io::Result<()> {
    writeln!(writer, "time,x,y,vx,vy,speed")?;

    for s in trajectory {
        writeln!(
            writer,
            "{:.4},{:.4},{:.4},{:.4},{:.4},{:.4}",
            s.time,
            s.pos.x,
            s.pos.y,
            s.vel.x,
            s.vel.y,
            s.speed(),
        )?;
    }

    Ok(())
}

/// Write trajectory to a CSV file at the given path.
pub fn write_trajectory_file(path: &str, trajectory: &[State]) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_trajectory(&mut file, trajectory)
}

/// Write the per-run summary to CSV format.
///
/// Columns: dt, range, max_height, final_speed, flight_time
pub fn write_results<W: Write>(writer: &mut W, runs: &[SimulationResult]) -> io::Result<()> {
    writeln!(writer, "dt,range,max_height,final_speed,flight_time")?;

    for run in runs {
        writeln!(
            writer,
            "{:.6},{:.4},{:.4},{:.4},{:.4}",
            run.dt,
            run.range,
            run.max_height,
            run.final_speed,
            run.flight_time(),
        )?;
    }

    Ok(())
}

/// Write the per-run summary to a CSV file at the given path.
pub fn write_results_file(path: &str, runs: &[SimulationResult]) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_results(&mut file, runs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector2;
    use pretty_assertions::assert_eq;

    fn short_trajectory() -> Vec<State> {
        vec![
            State {
                time: 0.0,
                pos: Vector2::zeros(),
                vel: Vector2::new(3.0, 4.0),
            },
            State {
                time: 0.005,
                pos: Vector2::new(0.015, 0.02),
                vel: Vector2::new(3.0, 3.95),
            },
        ]
    }

    #[test]
    fn csv_output_has_header_and_rows() {
        let mut buf = Vec::new();
        write_trajectory(&mut buf, &short_trajectory()).unwrap();
        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "time,x,y,vx,vy,speed");
        assert_eq!(lines.len(), 3); // header + 2 data rows
        assert!(lines[1].starts_with("0.0000,0.0000,0.0000,"));
        assert!(lines[1].ends_with(",5.0000")); // speed of (3, 4)
    }

    #[test]
    fn results_csv_lists_one_row_per_run() {
        let runs = vec![
            SimulationResult {
                dt: 0.01,
                trajectory: short_trajectory(),
                range: 550.25,
                max_height: 163.5,
                final_speed: 61.6,
            },
            SimulationResult {
                dt: 0.001,
                trajectory: short_trajectory(),
                range: 552.0,
                max_height: 163.9,
                final_speed: 61.5,
            },
        ];

        let mut buf = Vec::new();
        write_results(&mut buf, &runs).unwrap();
        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "dt,range,max_height,final_speed,flight_time");
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("0.010000,550.2500,"));
        assert!(lines[2].starts_with("0.001000,"));
    }
}
