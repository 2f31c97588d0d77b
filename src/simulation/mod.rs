//! Population management and simulation orchestration.

mod engine;
pub mod parameters;
mod population;

pub use engine::{Simulation, SimulationError};
pub use parameters::{classic_evaluator, classic_reference, classic_zone_map, SimulationParams};
pub use population::{Population, Ranked, ReportEntry};
