//! High-level runtime orchestrator.
//!
//! The runtime owns the simulation worker, wires up command/event channels,
//! and exposes a builder-based API for clients to drive a run.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use game_core::{GameConfig, Pacing, RunState};

use crate::api::{DiceService, RandomDice, Result, RuntimeError, RuntimeHandle};
use crate::events::EventBus;
use crate::oracle::{OracleManager, StdRandom};
use crate::workers::{Command, SimulationWorker};

/// How long the worker waits before each paced continuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PacingDelays {
    pub enemy_phase: Duration,
    pub phase_switch: Duration,
    pub combat_reward: Duration,
    pub defeat_reset: Duration,
    pub event_result: Duration,
    pub trap_result: Duration,
}

impl PacingDelays {
    pub const fn instant() -> Self {
        Self {
            enemy_phase: Duration::ZERO,
            phase_switch: Duration::ZERO,
            combat_reward: Duration::ZERO,
            defeat_reset: Duration::ZERO,
            event_result: Duration::ZERO,
            trap_result: Duration::ZERO,
        }
    }

    pub fn get(&self, pacing: Pacing) -> Duration {
        match pacing {
            Pacing::EnemyPhase => self.enemy_phase,
            Pacing::PhaseSwitch => self.phase_switch,
            Pacing::CombatReward => self.combat_reward,
            Pacing::DefeatReset => self.defeat_reset,
            Pacing::EventResult => self.event_result,
            Pacing::TrapResult => self.trap_result,
        }
    }

    /// Every delay scaled to `percent` of its value.
    #[must_use]
    pub fn scaled(self, percent: u32) -> Self {
        let scale = |delay: Duration| delay * percent / 100;
        Self {
            enemy_phase: scale(self.enemy_phase),
            phase_switch: scale(self.phase_switch),
            combat_reward: scale(self.combat_reward),
            defeat_reset: scale(self.defeat_reset),
            event_result: scale(self.event_result),
            trap_result: scale(self.trap_result),
        }
    }
}

impl Default for PacingDelays {
    fn default() -> Self {
        Self {
            enemy_phase: Duration::from_millis(1500),
            phase_switch: Duration::from_millis(1000),
            combat_reward: Duration::from_millis(3000),
            defeat_reset: Duration::from_millis(2000),
            event_result: Duration::from_millis(1000),
            trap_result: Duration::from_millis(2000),
        }
    }
}

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    pub delays: PacingDelays,
    pub dice_animation: Duration,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
    /// Seed for the engine's draws and the default dice. `None` uses entropy.
    pub seed: Option<u64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            delays: PacingDelays::default(),
            dice_animation: Duration::from_millis(600),
            event_buffer_size: 100,
            command_buffer_size: 32,
            seed: None,
        }
    }
}

impl RuntimeConfig {
    /// No pacing and no dice animation, for tests and scripted play.
    pub fn instant() -> Self {
        Self {
            delays: PacingDelays::instant(),
            dice_animation: Duration::ZERO,
            ..Self::default()
        }
    }

    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DUNGEON_INSTANT` - Disable all pacing delays (default: false)
    /// - `DUNGEON_DELAY_SCALE` - Percent applied to every delay (default: 100)
    /// - `DUNGEON_SEED` - Fixed seed for reproducible runs
    /// - `DUNGEON_EVENT_BUFFER` - Per-topic event capacity (default: 100)
    /// - `DUNGEON_COMMAND_BUFFER` - Worker command queue size (default: 32)
    pub fn from_env() -> Self {
        let mut config = if read_env_bool("DUNGEON_INSTANT").unwrap_or(false) {
            Self::instant()
        } else {
            Self::default()
        };

        if let Some(percent) = read_env::<u32>("DUNGEON_DELAY_SCALE") {
            config.delays = config.delays.scaled(percent);
            config.dice_animation = config.dice_animation * percent / 100;
        }
        if let Some(seed) = read_env::<u64>("DUNGEON_SEED") {
            config.seed = Some(seed);
        }
        if let Some(capacity) = read_env::<usize>("DUNGEON_EVENT_BUFFER") {
            config.event_buffer_size = capacity.max(1);
        }
        if let Some(capacity) = read_env::<usize>("DUNGEON_COMMAND_BUFFER") {
            config.command_buffer_size = capacity.max(1);
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    let value = env::var(key).ok()?;
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Main runtime that owns the simulation worker.
///
/// [`RuntimeHandle`] provides a cloneable façade for clients.
pub struct Runtime {
    handle: RuntimeHandle,
    sim_worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    ///
    /// The handle can be shared across clients and async tasks.
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Shutdown the runtime gracefully
    ///
    /// The worker stops once every handle clone has been dropped.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);

        self.sim_worker_handle
            .await
            .map_err(RuntimeError::WorkerJoin)
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    state: Option<RunState>,
    oracles: Option<OracleManager>,
    dice: Option<Arc<dyn DiceService>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            state: None,
            oracles: None,
            dice: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Provide initial store (defaults to the main menu)
    pub fn initial_state(mut self, state: RunState) -> Self {
        self.state = Some(state);
        self
    }

    /// Set the oracle manager (defaults to the built-in catalogue)
    pub fn oracles(mut self, oracles: OracleManager) -> Self {
        self.oracles = Some(oracles);
        self
    }

    /// Set the dice (defaults to a fair die with the configured animation)
    pub fn dice(mut self, dice: impl DiceService + 'static) -> Self {
        self.dice = Some(Arc::new(dice));
        self
    }

    /// Build the runtime and spawn its worker
    pub async fn build(self) -> Result<Runtime> {
        let config = self.config;
        let oracles = self.oracles.unwrap_or_default();
        let state = self.state.unwrap_or_default();
        let sides = config.game_config.dice_sides;

        let (rng, dice) = match config.seed {
            Some(seed) => (
                StdRandom::seeded(seed),
                self.dice.unwrap_or_else(|| {
                    Arc::new(RandomDice::seeded(sides, config.dice_animation, seed))
                }),
            ),
            None => (
                StdRandom::from_entropy(),
                self.dice
                    .unwrap_or_else(|| Arc::new(RandomDice::new(sides, config.dice_animation))),
            ),
        };

        let (command_tx, command_rx) = mpsc::channel::<Command>(config.command_buffer_size);
        let event_bus = EventBus::with_capacity(config.event_buffer_size);
        let handle = RuntimeHandle::new(command_tx.clone(), event_bus.clone());

        let sim_worker = SimulationWorker::new(
            state,
            oracles,
            config.game_config,
            rng,
            dice,
            config.delays,
            command_rx,
            command_tx.downgrade(),
            event_bus,
        );

        let sim_worker_handle = tokio::spawn(async move {
            sim_worker.run().await;
        });

        tracing::info!(seed = ?config.seed, "runtime started");

        Ok(Runtime {
            handle,
            sim_worker_handle,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instant_config_has_no_delays() {
        let config = RuntimeConfig::instant();
        assert_eq!(config.delays, PacingDelays::instant());
        assert!(config.dice_animation.is_zero());
        assert_eq!(config.game_config, GameConfig::default());
    }

    #[test]
    fn default_pacing_matches_the_table() {
        let delays = PacingDelays::default();
        assert_eq!(delays.get(Pacing::EnemyPhase), Duration::from_millis(1500));
        assert_eq!(delays.get(Pacing::PhaseSwitch), Duration::from_millis(1000));
        assert_eq!(delays.get(Pacing::CombatReward), Duration::from_millis(3000));
        assert_eq!(delays.get(Pacing::DefeatReset), Duration::from_millis(2000));
        assert_eq!(delays.get(Pacing::EventResult), Duration::from_millis(1000));
        assert_eq!(delays.get(Pacing::TrapResult), Duration::from_millis(2000));
    }

    #[test]
    fn scaling_halves_every_delay() {
        let delays = PacingDelays::default().scaled(50);
        assert_eq!(delays.enemy_phase, Duration::from_millis(750));
        assert_eq!(delays.combat_reward, Duration::from_millis(1500));
    }
}
