use projectile_lab::params::LaunchParamsBuilder;
use projectile_lab::sim;

fn main() {
    let params = LaunchParamsBuilder::new()
        .speed(60.0)
        .angle_deg(35.0)
        .cd(0.0)
        .dt(0.001)
        .build();

    println!(
        "Drag-free flight, {} m/s at {} degrees",
        params.speed, params.angle_deg
    );
    let result = sim::simulate(&params);

    let a = params.angle_rad();
    let range = params.speed * params.speed * (2.0 * a).sin() / params.gravity;
    let apex = params.speed * params.speed * a.sin().powi(2) / (2.0 * params.gravity);

    println!("Range:      {:.2} m (closed form {:.2} m)", result.range, range);
    println!("Max height: {:.2} m (closed form {:.2} m)", result.max_height, apex);
    println!(
        "Flight:     {:.2} s over {} samples",
        result.flight_time(),
        result.trajectory.len()
    );
}
