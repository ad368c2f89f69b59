pub mod params;
pub mod physics;
pub mod dynamics;
pub mod sim;
pub mod results;
pub mod plot;
pub mod io;

// Convenience re-exports for the common path: parameters in, result out.
pub use dynamics::state::State;
pub use params::{parse_field, LaunchParams, LaunchParamsBuilder, ParamError, STANDARD_GRAVITY};
pub use results::{ResultLog, SimulationResult};
pub use sim::{euler_step, simulate};
