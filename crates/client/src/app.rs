//! Terminal loop: reads commands from stdin and prints runtime events.
use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::error::RecvError;

use game_core::{ClassDefinition, GameMode, ModeKind, RunState, TurnPhase};
use runtime::{DiceEvent, Event, RunEvent, RuntimeHandle, StoreEvent, Topic};

use crate::input::{Command, HELP, parse_command};
use crate::render::{combat_header, render};

pub struct App {
    handle: RuntimeHandle,
    classes: Vec<ClassDefinition>,
    mode: ModeKind,
    menu_prompt: bool,
    /// Combat log lines already printed for the current session.
    printed_log: usize,
}

impl App {
    pub fn new(handle: RuntimeHandle, classes: Vec<ClassDefinition>) -> Self {
        Self {
            handle,
            classes,
            mode: ModeKind::Menu,
            menu_prompt: false,
            printed_log: 0,
        }
    }

    pub async fn run(mut self) -> Result<()> {
        let mut store_rx = self.handle.subscribe(Topic::Store);
        let mut run_rx = self.handle.subscribe(Topic::Run);
        let mut dice_rx = self.handle.subscribe(Topic::Dice);
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        let state = self.handle.query_state().await?;
        self.show(&state, true);

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else { break };
                    if !self.on_line(&line).await? {
                        break;
                    }
                }
                event = store_rx.recv() => match event {
                    Ok(Event::Store(event)) => self.on_store(event),
                    Ok(_) => {}
                    Err(error) => self.resync(error).await?,
                },
                event = run_rx.recv() => match event {
                    Ok(Event::Run(event)) => on_run(&event),
                    Ok(_) => {}
                    Err(error) => log_lag(Topic::Run, error),
                },
                event = dice_rx.recv() => match event {
                    Ok(Event::Dice(event)) => on_dice(&event),
                    Ok(_) => {}
                    Err(error) => log_lag(Topic::Dice, error),
                },
            }
        }

        tracing::info!("input closed; leaving");
        Ok(())
    }

    /// Returns `false` when the player quits.
    async fn on_line(&mut self, line: &str) -> Result<bool> {
        match parse_command(line, self.mode) {
            Ok(Command::Quit) => return Ok(false),
            Ok(Command::Help) => println!("{HELP}"),
            Ok(Command::State) => {
                let state = self.handle.query_state().await?;
                println!("{}", serde_json::to_string_pretty(&state)?);
            }
            Ok(Command::Intent(intent)) => {
                if let Err(error) = self.handle.dispatch(intent).await {
                    match error.as_rejection() {
                        Some(rejection) => println!("! {rejection}"),
                        None => return Err(error.into()),
                    }
                }
            }
            Err(error) => println!("! {error}"),
        }
        Ok(true)
    }

    fn on_store(&mut self, event: StoreEvent) {
        match event {
            StoreEvent::Updated { state, .. } => self.show(&state, false),
            StoreEvent::Rejected { intent, error, .. } => {
                tracing::debug!(%intent, %error, "rejection echoed on store topic");
            }
        }
    }

    async fn resync(&mut self, error: RecvError) -> Result<()> {
        match error {
            RecvError::Lagged(skipped) => {
                tracing::warn!(skipped, "store events dropped; redrawing");
                let state = self.handle.query_state().await?;
                self.show(&state, true);
                Ok(())
            }
            RecvError::Closed => Err(anyhow::anyhow!("runtime stopped")),
        }
    }

    /// Prints what changed since the last snapshot.
    fn show(&mut self, state: &RunState, force: bool) {
        let mode = state.mode.kind();
        let changed = force || mode != self.mode || state.menu_prompt != self.menu_prompt;
        if mode != self.mode {
            self.printed_log = 0;
        }
        self.mode = mode;
        self.menu_prompt = state.menu_prompt;

        match &state.mode {
            GameMode::Combat(session) => {
                if changed {
                    println!("{}", render(state, &self.classes));
                }
                for line in session.log.iter().skip(self.printed_log) {
                    println!("{line}");
                }
                self.printed_log = session.log.len();
                if session.phase == TurnPhase::PlayerReady && !state.menu_prompt {
                    println!("{}", combat_header(session, state).join("\n"));
                }
            }
            GameMode::Event(_) => println!("{}", render(state, &self.classes)),
            _ if changed => println!("{}", render(state, &self.classes)),
            _ => {}
        }
    }
}

fn on_run(event: &RunEvent) {
    match event {
        RunEvent::RunStarted { class } => println!("* A new run begins as {class}."),
        RunEvent::CombatStarted { enemy, boss: true } => println!("* BOSS: {enemy} blocks the way!"),
        RunEvent::CombatStarted { enemy, .. } => println!("* {enemy} appears!"),
        RunEvent::CombatWon { gold } => println!("* Victory! +{gold} gold"),
        RunEvent::CombatLost => println!("* You have fallen..."),
        RunEvent::StageAdvanced { stage, layer } => println!("* Layer {layer}, stage {stage}"),
        RunEvent::LayerCleared { layer } => println!("* Layer {layer} cleared!"),
        RunEvent::CardAdded { name } => println!("* Added {name} to your skills"),
        RunEvent::ArtifactAdded { name } => println!("* Obtained {name}"),
        RunEvent::RunDiscarded => println!("* The run is over."),
        RunEvent::Waiting { pacing } => tracing::trace!(%pacing, "waiting"),
    }
}

fn on_dice(event: &DiceEvent) {
    match event {
        DiceEvent::Rolling { .. } => println!("  (rolling...)"),
        DiceEvent::Rolled { value, .. } => println!("  (rolled {value})"),
        DiceEvent::Reset => {}
    }
}

fn log_lag(topic: Topic, error: RecvError) {
    tracing::warn!(?topic, %error, "event stream interrupted");
}
