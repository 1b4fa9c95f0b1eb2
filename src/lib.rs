pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod trace;

pub use simulation::states::{Atom, System, NVec3};
pub use simulation::params::Parameters;
pub use simulation::forces::{Acceleration, ForceSet, LennardJones};
pub use simulation::integrator::verlet_step;
pub use simulation::oracle::{MdOracle, SimulationOracle};

pub use configuration::config::{AtomConfig, DisplayConfig, ParametersConfig, ScenarioConfig};

pub use visualization::viewer::{run_viewer, AtomId, AtomRegistry, SimulationHandle, SyncSchedule};
pub use visualization::appearance::{style_for, AtomStyle};
pub use visualization::animation::PositionTween;

pub use trace::logger::TraceLogger;
