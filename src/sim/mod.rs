pub mod integrator;
pub mod runner;

pub use integrator::euler_step;
pub use runner::simulate;
