//! Simulation worker that owns the authoritative [`game_core::RunState`].
//!
//! Receives commands from [`crate::RuntimeHandle`], applies them through
//! [`game_core::GameEngine`], publishes events to the [`EventBus`] and turns
//! scheduled work (dice rolls, pacing delays) into background tasks that
//! report back as [`Command::Resume`].
//!
//! Every scheduled task carries the store generation it was created under.
//! When a transition changes the generation (run started, discarded or
//! reset) all in-flight tasks are aborted; anything that still slips through
//! is rejected by the engine as stale.
//!
//! Continuations that arrive while the return-to-menu prompt is open come
//! back from the engine as [`Task::Hold`]; the worker keeps them and replays
//! them once the prompt closes.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use game_core::{
    Continuation, ErrorSeverity, GameConfig, GameEngine, GameError, Intent, RunState, Scheduled,
    Task, Transition,
};

use crate::api::{DiceService, Result};
use crate::events::{DiceEvent, Event, EventBus, RunEvent, StoreEvent, extract_run_events};
use crate::oracle::{OracleManager, StdRandom};
use crate::runtime::PacingDelays;

/// Commands that can be sent to the simulation worker
pub enum Command {
    /// Apply a player intent.
    Intent {
        intent: Intent,
        reply: oneshot::Sender<Result<()>>,
    },
    /// Continue work scheduled under `generation`.
    Resume {
        generation: u64,
        continuation: Continuation,
    },
    /// Query the current store (read-only).
    QueryState { reply: oneshot::Sender<RunState> },
}

/// Background task that processes gameplay commands.
pub struct SimulationWorker {
    state: RunState,
    oracles: OracleManager,
    config: GameConfig,
    rng: StdRandom,
    dice: Arc<dyn DiceService>,
    delays: PacingDelays,
    command_rx: mpsc::Receiver<Command>,
    /// Weak so the worker stops once every handle is dropped.
    resume_tx: mpsc::WeakSender<Command>,
    event_bus: EventBus,
    pending: JoinSet<()>,
    /// Continuations parked behind the return-to-menu prompt.
    held: Vec<(u64, Continuation)>,
}

impl SimulationWorker {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        state: RunState,
        oracles: OracleManager,
        config: GameConfig,
        rng: StdRandom,
        dice: Arc<dyn DiceService>,
        delays: PacingDelays,
        command_rx: mpsc::Receiver<Command>,
        resume_tx: mpsc::WeakSender<Command>,
        event_bus: EventBus,
    ) -> Self {
        info!(
            target: "runtime::worker",
            mode = %state.mode.kind(),
            generation = state.generation,
            "SimulationWorker initialized"
        );

        Self {
            state,
            oracles,
            config,
            rng,
            dice,
            delays,
            command_rx,
            resume_tx,
            event_bus,
            pending: JoinSet::new(),
            held: Vec::new(),
        }
    }

    /// Main worker loop.
    pub async fn run(mut self) {
        while let Some(cmd) = self.command_rx.recv().await {
            self.handle_command(cmd);
            self.release_held();
            while self.pending.try_join_next().is_some() {}
        }
        self.pending.abort_all();
        debug!(target: "runtime::worker", "command channel closed; worker stopped");
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Intent { intent, reply } => {
                let result = self.handle_intent(intent);
                if reply.send(result).is_err() {
                    debug!("Intent reply channel closed (caller dropped)");
                }
            }
            Command::Resume {
                generation,
                continuation,
            } => self.handle_resume(generation, continuation),
            Command::QueryState { reply } => {
                if reply.send(self.state.clone()).is_err() {
                    debug!("QueryState reply channel closed (caller dropped)");
                }
            }
        }
    }

    fn handle_intent(&mut self, intent: Intent) -> Result<()> {
        let name = intent.name();
        let generation = self.state.generation;
        let env = self.oracles.as_game_env();
        let outcome =
            GameEngine::new(&mut self.state, env, &self.config).handle(intent, &mut self.rng);

        match outcome {
            Ok(tx) => {
                debug!(target: "runtime::worker", intent = name, changes = tx.changes.len(), "intent applied");
                self.commit(Some(name), tx, generation);
                Ok(())
            }
            Err(error) => {
                match error.severity() {
                    ErrorSeverity::Recoverable => {
                        debug!(target: "runtime::worker", intent = name, code = error.error_code(), %error, "intent ignored")
                    }
                    ErrorSeverity::Validation => {
                        warn!(target: "runtime::worker", intent = name, code = error.error_code(), %error, "intent rejected")
                    }
                }
                self.event_bus.publish(Event::Store(StoreEvent::Rejected {
                    intent: name.to_owned(),
                    error: error.to_string(),
                    severity: error.severity(),
                }));
                Err(error.into())
            }
        }
    }

    fn handle_resume(&mut self, generation: u64, continuation: Continuation) {
        if generation == self.state.generation
            && !self.state.menu_prompt
            && let Continuation::Rolled { purpose, value } = &continuation
        {
            self.event_bus.publish(Event::Dice(DiceEvent::Rolled {
                purpose: *purpose,
                value: *value,
            }));
        }

        let env = self.oracles.as_game_env();
        let resumed = GameEngine::new(&mut self.state, env, &self.config).resume(
            generation,
            continuation.clone(),
            &mut self.rng,
        );

        match resumed {
            Some(tx) if self.state.menu_prompt && tx.changes.is_empty() => {
                for work in tx.scheduled {
                    self.schedule(work);
                }
            }
            Some(tx) => self.commit(None, tx, generation),
            None => debug!(
                target: "runtime::worker",
                scheduled = generation,
                current = self.state.generation,
                ?continuation,
                "ignoring stale continuation"
            ),
        }
    }

    /// Replays held continuations once the prompt is gone.
    fn release_held(&mut self) {
        if self.state.menu_prompt || self.held.is_empty() {
            return;
        }
        debug!(target: "runtime::worker", held = self.held.len(), "menu prompt closed; resuming held work");
        for (generation, continuation) in std::mem::take(&mut self.held) {
            self.handle_resume(generation, continuation);
        }
    }

    /// Publishes an applied transition and starts the work it scheduled.
    fn commit(&mut self, intent: Option<&'static str>, tx: Transition, generation_before: u64) {
        if self.state.generation != generation_before && !self.pending.is_empty() {
            debug!(
                target: "runtime::worker",
                aborted = self.pending.len(),
                generation = self.state.generation,
                "generation changed; cancelling pending work"
            );
            self.pending.abort_all();
        }
        if self.state.generation != generation_before {
            self.held.clear();
        }

        for event in extract_run_events(&tx.changes, &self.state) {
            info!(target: "runtime::worker", ?event, "run event");
            self.event_bus.publish(Event::Run(event));
        }

        let Transition { changes, scheduled } = tx;
        self.event_bus.publish(Event::Store(StoreEvent::Updated {
            intent: intent.map(str::to_owned),
            changes,
            state: Box::new(self.state.clone()),
        }));

        for work in scheduled {
            self.schedule(work);
        }
    }

    fn schedule(&mut self, Scheduled { generation, task }: Scheduled) {
        match task {
            Task::ResetDice => {
                self.dice.reset();
                self.event_bus.publish(Event::Dice(DiceEvent::Reset));
            }
            Task::Roll(purpose) => {
                self.event_bus
                    .publish(Event::Dice(DiceEvent::Rolling { purpose }));
                let dice = Arc::clone(&self.dice);
                let resume_tx = self.resume_tx.clone();
                self.pending.spawn(async move {
                    let value = dice.roll().await;
                    send_resume(
                        resume_tx,
                        generation,
                        Continuation::Rolled { purpose, value },
                    )
                    .await;
                });
            }
            Task::Delay { pacing, then } => {
                let delay = self.delays.get(pacing);
                debug!(target: "runtime::worker", %pacing, ?delay, "scheduling continuation");
                self.event_bus
                    .publish(Event::Run(RunEvent::Waiting { pacing }));
                let resume_tx = self.resume_tx.clone();
                self.pending.spawn(async move {
                    sleep(delay).await;
                    send_resume(resume_tx, generation, then).await;
                });
            }
            Task::Hold(then) => {
                debug!(target: "runtime::worker", ?then, "menu prompt open; holding continuation");
                self.held.push((generation, then));
            }
        }
    }
}

async fn sleep(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

async fn send_resume(
    resume_tx: mpsc::WeakSender<Command>,
    generation: u64,
    continuation: Continuation,
) {
    let Some(tx) = resume_tx.upgrade() else {
        return;
    };
    if tx
        .send(Command::Resume {
            generation,
            continuation,
        })
        .await
        .is_err()
    {
        warn!(target: "runtime::worker", "command channel closed; dropping continuation");
    }
}
