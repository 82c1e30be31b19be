//! Plain-text views of the store, one per mode.
use game_core::{
    ClassDefinition, CombatSession, Combatant, GameMode, RunState, Side, Skill, StatusEffects,
    TurnPhase,
};

/// Full screen for the current mode. The combat log is streamed separately.
pub fn render(state: &RunState, classes: &[ClassDefinition]) -> String {
    let mut lines = Vec::new();

    if let Some(run) = &state.run {
        let progress = &run.progress;
        lines.push(format!(
            "== Layer {} / Stage {} | {} {} | Gold {} | Kills {} ==",
            progress.layer,
            progress.stage,
            run.player.name,
            hp(&run.player),
            progress.gold,
            progress.kill_count,
        ));
    }

    match &state.mode {
        GameMode::Menu => {
            lines.push("DUNGEON".into());
            match state
                .selected_class
                .and_then(|id| classes.iter().find(|class| class.id == id))
            {
                Some(class) => lines.push(format!("`start` as {} or `change`", class.name)),
                None => lines.push("`start` to choose a class".into()),
            }
        }
        GameMode::CharacterSelect => {
            lines.push("Choose your class:".into());
            for class in classes {
                lines.push(format!(
                    "  {}. {} [{}] HP {} ATK {} LUK {} - {}",
                    class.id.0,
                    class.name,
                    class.element,
                    class.base_hp,
                    class.base_attack,
                    class.base_luck,
                    class.description
                ));
            }
        }
        GameMode::Exploring => {
            lines.push("The corridor stretches on. `go`, `skills`, `artifacts`, `menu`".into());
        }
        GameMode::Combat(session) => {
            lines.extend(combat_header(session, state));
        }
        GameMode::Event(encounter) => {
            lines.push(format!(
                "{} ({})",
                encounter.event.name, encounter.event.kind
            ));
            lines.push(format!("  {}", encounter.event.description));
            match (&encounter.outcome, encounter.rolling) {
                (Some(outcome), _) => lines.push(format!("  {outcome}")),
                (None, true) => lines.push("  The dice are rolling...".into()),
                (None, false) => {
                    let [first, second] = encounter.event.kind.choices();
                    lines.push(format!("  `{first}` or `{second}`"));
                }
            }
        }
        GameMode::CardReward(offer) => {
            lines.push("Choose a card (`pick <n>` or `skip`):".into());
            for (index, card) in offer.cards.iter().enumerate() {
                lines.push(format!("  {}. {}", index + 1, skill_line(card)));
            }
        }
        GameMode::ArtifactSelect(offer) => {
            lines.push(format!(
                "Choose an artifact ({}), `pick <n>` or `skip`:",
                offer.origin
            ));
            for (index, artifact) in offer.artifacts.iter().enumerate() {
                lines.push(format!(
                    "  {}. {} [{}] {}",
                    index + 1,
                    artifact.name,
                    artifact.rarity,
                    artifact.description
                ));
            }
        }
        GameMode::SkillInventory => {
            if let Some(run) = &state.run {
                lines.push("Skills (`equip <n> ...`, `close`):".into());
                let equipped = run.equipped();
                for (index, skill) in run.inventory.iter().enumerate() {
                    let mark = if equipped.iter().any(|hand| hand.id == skill.id) {
                        "*"
                    } else {
                        " "
                    };
                    lines.push(format!("  {mark}{}. {}", index + 1, skill_line(skill)));
                }
            }
        }
        GameMode::ArtifactInventory => {
            if let Some(run) = &state.run {
                lines.push("Artifacts (`close`):".into());
                if run.artifacts().is_empty() {
                    lines.push("  (none)".into());
                }
                for artifact in run.artifacts() {
                    lines.push(format!("  {} - {}", artifact.name, artifact.description));
                }
            }
        }
    }

    if state.menu_prompt {
        lines.push("Abandon this run and return to the menu? `yes` / `no`".into());
    }

    lines.join("\n")
}

/// Status line and hand shown when the player may act.
pub fn combat_header(session: &CombatSession, state: &RunState) -> Vec<String> {
    let mut lines = vec![format!(
        "-- Turn {} -- {} {}{}",
        session.turn,
        session.enemy.name,
        hp(&session.enemy),
        statuses(session.statuses.side(Side::Enemy)),
    )];

    if let Some(player) = state.player() {
        lines.push(format!(
            "   You: {}{}",
            hp(player),
            statuses(session.statuses.side(Side::Player))
        ));
    }

    if session.phase == TurnPhase::PlayerReady
        && let Some(run) = &state.run
    {
        for (slot, skill) in run.equipped().iter().enumerate() {
            lines.push(format!("  {}. {}", slot + 1, skill_line(skill)));
        }
    }

    lines
}

fn hp(combatant: &Combatant) -> String {
    format!("HP {}/{}", combatant.hp(), combatant.max_hp())
}

fn statuses(effects: &StatusEffects) -> String {
    effects
        .active()
        .map(|(kind, turns)| format!(" [{kind} {turns}]"))
        .collect()
}

fn skill_line(skill: &Skill) -> String {
    let mut line = format!("{} ({} dmg", skill.name, skill.damage);
    if skill.is_multi_hit() {
        line.push_str(&format!(" x{}", skill.hit_count()));
    }
    if let Some(element) = skill.element {
        line.push_str(&format!(", {element}"));
    }
    for kind in skill.flags.kinds() {
        line.push_str(&format!(", {kind}"));
    }
    line.push_str(&format!(") [{}]", skill.rarity));
    line
}
