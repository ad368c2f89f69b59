use projectile_lab::io::{csv, table};
use projectile_lab::params::{presets, LaunchParamsBuilder};
use projectile_lab::results::ResultLog;
use projectile_lab::sim;

fn main() {
    let base = presets::lab_default();
    println!(
        "Sweeping integration steps for {} m/s at {} degrees ...",
        base.speed, base.angle_deg
    );

    let mut log = ResultLog::new();
    for dt in [0.5, 0.1, 0.01, 0.001] {
        let params = LaunchParamsBuilder::new().dt(dt).build();
        log.push(sim::simulate(&params));
    }

    let stdout = std::io::stdout();
    table::write_table(&mut stdout.lock(), log.runs()).expect("Failed to print table");

    csv::write_results_file("step_sweep.csv", log.runs()).expect("Failed to write CSV");
    println!("Exported: step_sweep.csv");
}
