//! Worker tasks that back the runtime orchestration.
//!
//! The simulation worker owns the store and applies intents and resumed
//! continuations one at a time.

mod simulation;

pub use simulation::{Command, SimulationWorker};
