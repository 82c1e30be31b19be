//! Runtime orchestration for the dungeon run simulation.
//!
//! This crate wires together the dice service, oracle access and the
//! simulation worker into a cohesive runtime API. Consumers embed [`Runtime`]
//! to dispatch intents, subscribe to events, and query the store through
//! [`RuntimeHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator, builder and configuration
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides topic-based event bus for flexible event routing
//! - [`workers`] keeps background tasks internal to the crate
//! - [`oracle`] adapts the content crate to the engine
pub mod api;
pub mod events;
pub mod oracle;
pub mod runtime;

mod workers;

pub use api::{DiceService, RandomDice, Result, RuntimeError, RuntimeHandle, ScriptedDice};
pub use events::{DiceEvent, Event, EventBus, RunEvent, StoreEvent, Topic};
pub use oracle::{OracleManager, StdRandom};
pub use runtime::{PacingDelays, Runtime, RuntimeBuilder, RuntimeConfig};
