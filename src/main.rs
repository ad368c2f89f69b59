use std::path::PathBuf;

use clap::Parser;

use projectile_lab::io::{csv, table};
use projectile_lab::params::{presets, LaunchParams};
use projectile_lab::results::ResultLog;
use projectile_lab::sim::simulate;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Projectile flight lab: semi-implicit Euler with quadratic air drag"
)]
struct Cli {
    /// Integration step sizes to compare, in seconds (repeatable or comma-separated)
    #[arg(long, value_delimiter = ',', default_values_t = [0.1, 0.01, 0.001])]
    dt: Vec<f64>,

    /// Initial speed, m/s
    #[arg(long, default_value_t = presets::lab_default().speed)]
    speed: f64,

    /// Launch angle above horizontal, degrees (strictly between 0 and 90)
    #[arg(long, default_value_t = presets::lab_default().angle_deg)]
    angle: f64,

    /// Projectile mass, kg
    #[arg(long, default_value_t = presets::lab_default().mass)]
    mass: f64,

    /// Air density, kg/m^3
    #[arg(long, default_value_t = presets::lab_default().air_density)]
    air_density: f64,

    /// Drag coefficient
    #[arg(long, default_value_t = presets::lab_default().cd)]
    cd: f64,

    /// Cross-sectional area, m^2
    #[arg(long, default_value_t = presets::lab_default().area)]
    area: f64,

    /// Write per-run trajectory CSVs and a summary CSV into this directory
    #[arg(long, value_name = "DIR")]
    csv_dir: Option<PathBuf>,
}

impl Cli {
    fn params_for(&self, dt: f64) -> LaunchParams {
        LaunchParams {
            speed: self.speed,
            angle_deg: self.angle,
            mass: self.mass,
            air_density: self.air_density,
            cd: self.cd,
            area: self.area,
            dt,
            gravity: projectile_lab::STANDARD_GRAVITY,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // -----------------------------------------------------------------------
    // Run one simulation per requested step size
    // -----------------------------------------------------------------------
    let mut log = ResultLog::new();
    for &dt in &cli.dt {
        if log.contains_dt(dt) {
            println!("note: dt = {dt} requested twice, keeping the first run");
            continue;
        }
        let params = cli.params_for(dt);
        params.validate()?;
        log.push(simulate(&params));
    }

    let shared = cli.params_for(cli.dt[0]);

    // -----------------------------------------------------------------------
    // Print report
    // -----------------------------------------------------------------------
    println!();
    println!("====================================================================");
    println!("  PROJECTILE FLIGHT LAB — semi-implicit Euler, quadratic drag");
    println!("====================================================================");
    println!();
    println!("  Launch Parameters");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Speed:         {:>8.1} m/s    Angle:        {:>8.1} deg",
        shared.speed, shared.angle_deg
    );
    println!(
        "  Mass:          {:>8.2} kg     Air density:  {:>8.3} kg/m^3",
        shared.mass, shared.air_density
    );
    println!(
        "  Cd:            {:>8.3}        Area:         {:>8.4} m^2",
        shared.cd, shared.area
    );
    println!("  Gravity:       {:>8.2} m/s^2", shared.gravity);
    println!();

    println!("  Step Comparison");
    println!("  ──────────────────────────────────────────────────────────────────");
    let stdout = std::io::stdout();
    table::write_table(&mut stdout.lock(), log.runs())?;
    println!();

    // -----------------------------------------------------------------------
    // Optional CSV export
    // -----------------------------------------------------------------------
    if let Some(dir) = &cli.csv_dir {
        std::fs::create_dir_all(dir)?;
        for run in log.runs() {
            let path = dir.join(format!("trajectory_dt{:.6}.csv", run.dt));
            let mut file = std::fs::File::create(path)?;
            csv::write_trajectory(&mut file, &run.trajectory)?;
        }
        let mut file = std::fs::File::create(dir.join("results.csv"))?;
        csv::write_results(&mut file, log.runs())?;
        println!("  CSV written to {}", dir.display());
        println!();
    }

    Ok(())
}
