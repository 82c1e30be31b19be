mod common;

use common::Harness;
use game_core::{
    Change, Continuation, GameMode, Intent, IntentError, ModeKind, Pacing, RollPurpose,
    ScriptedRandom, Side, StatusEffectKind, Task, TurnPhase,
};

#[test]
fn multi_hit_skill_with_one_dodge() {
    let mut game = Harness::new();
    game.start_combat();

    let mut rng = ScriptedRandom::default();
    let tx = game.handle(Intent::SelectSkill(0), &mut rng).unwrap();
    assert_eq!(
        tx.rolls().collect::<Vec<_>>(),
        vec![RollPurpose::Attack { slot: 0 }]
    );
    assert!(game.state.session().unwrap().is_rolling());

    // Goblin luck 0 => 10% dodge. Draw 0 dodges, 50 lands.
    let mut rng = ScriptedRandom::new([50, 0, 50]);
    let tx = game.resume_roll(&tx, 4, &mut rng);

    let session = game.state.session().unwrap();
    assert_eq!(session.enemy.hp(), 30);
    assert_eq!(session.turn, 2);
    assert_eq!(session.phase, TurnPhase::EnemyPending);

    let log = game.log();
    let tail: Vec<&str> = log.iter().rev().take(6).rev().map(String::as_str).collect();
    assert_eq!(
        tail,
        vec![
            "[Turn 1] Knight attacks!",
            "Triple Strike (3-hit combo):",
            "  └ Hit 1/3: 10 damage",
            "  └ Hit 2/3: Goblin dodged!",
            "  └ Hit 3/3: 10 damage",
            "Triple Strike: 2/3 hits, 20 total damage!",
        ]
    );

    let delayed: Vec<_> = tx.delayed().collect();
    assert_eq!(delayed, vec![(Pacing::EnemyPhase, &Continuation::EnemyPhase)]);
}

#[test]
fn skill_selection_outside_player_turn_is_rejected_without_mutation() {
    let mut game = Harness::new();
    game.start_combat();

    let mut rng = ScriptedRandom::default();
    let tx = game.handle(Intent::SelectSkill(1), &mut rng).unwrap();

    let before = game.state.clone();
    assert_eq!(
        game.handle(Intent::SelectSkill(1), &mut rng),
        Err(IntentError::RollInFlight)
    );
    assert_eq!(game.state, before);

    let mut rng = ScriptedRandom::new([50]);
    game.resume_roll(&tx, 3, &mut rng);

    let before = game.state.clone();
    assert_eq!(
        game.handle(Intent::SelectSkill(0), &mut rng),
        Err(IntentError::NotPlayerTurn)
    );
    assert_eq!(game.state, before);
}

#[test]
fn invalid_skill_slot_is_a_no_op() {
    let mut game = Harness::new();
    game.start_combat();
    let before = game.state.clone();

    let mut rng = ScriptedRandom::default();
    let result = game.handle(Intent::SelectSkill(7), &mut rng);

    assert_eq!(
        result,
        Err(IntentError::InvalidSkillSlot {
            slot: 7,
            equipped: 4
        })
    );
    assert_eq!(game.state, before);
}

#[test]
fn stunned_player_skips_without_rolling() {
    let mut game = Harness::new();
    game.start_combat();

    let mut rng = ScriptedRandom::new([50]);
    let tx = game.handle(Intent::SelectSkill(1), &mut rng).unwrap();
    let tx = game.resume_roll(&tx, 5, &mut rng);

    // Stun lands on the player during the enemy phase.
    game.state.apply(Change::InflictStatus {
        side: Side::Player,
        kind: StatusEffectKind::Stun,
        turns: 1,
    });

    // Knight luck 5 => 15% dodge; the goblin's attack is dodged.
    let mut rng = ScriptedRandom::new([0]);
    let tx = game.resume_delay(&tx, &mut rng);
    assert_eq!(
        game.state.session().unwrap().phase,
        TurnPhase::PlayerPending
    );
    assert_eq!(game.state.player().unwrap().hp(), 100);

    let tx = game.resume_delay(&tx, &mut rng);

    let session = game.state.session().unwrap();
    assert_eq!(session.phase, TurnPhase::EnemyPending);
    assert_eq!(
        session.statuses.side(Side::Player).remaining(StatusEffectKind::Stun),
        0
    );
    assert_eq!(session.turn, 4);
    assert_eq!(tx.rolls().count(), 0);
    assert_eq!(
        session.log.last().map(String::as_str),
        Some("[Turn 3] Knight cannot act!")
    );
    assert_eq!(
        tx.delayed().collect::<Vec<_>>(),
        vec![(Pacing::EnemyPhase, &Continuation::EnemyPhase)]
    );
}

#[test]
fn stun_on_enemy_blocks_exactly_one_enemy_action() {
    let mut game = Harness::new();
    game.start_combat();

    // Slot 2 is Shield Bash (stun).
    let mut rng = ScriptedRandom::new([50]);
    let tx = game.handle(Intent::SelectSkill(2), &mut rng).unwrap();
    let tx = game.resume_roll(&tx, 1, &mut rng);

    let session = game.state.session().unwrap();
    assert_eq!(session.enemy.hp(), 42);
    assert!(session.is_incapacitated(Side::Enemy));

    let tx = game.resume_delay(&tx, &mut rng);
    let session = game.state.session().unwrap();
    assert!(!session.is_incapacitated(Side::Enemy));
    assert!(
        session
            .log
            .iter()
            .any(|line| line == "[Turn 2] Goblin cannot act!")
    );
    assert_eq!(game.state.player().unwrap().hp(), 100);

    // Back to the player, who then acts normally.
    game.resume_delay(&tx, &mut rng);
    assert_eq!(game.state.session().unwrap().phase, TurnPhase::PlayerReady);
    assert!(game.handle(Intent::SelectSkill(1), &mut rng).is_ok());
}

#[test]
fn enemy_attack_uses_attack_bonus() {
    let mut game = Harness::new();
    game.start_combat();

    let mut rng = ScriptedRandom::new([50]);
    let tx = game.handle(Intent::SelectSkill(1), &mut rng).unwrap();
    let tx = game.resume_roll(&tx, 2, &mut rng);

    let mut rng = ScriptedRandom::new([50]);
    game.resume_delay(&tx, &mut rng);

    // 10 attack + 10/5 bonus, no defense.
    assert_eq!(game.state.player().unwrap().hp(), 88);
    assert_eq!(
        game.state.session().unwrap().log.last().map(String::as_str),
        Some("Attack: 12 damage!")
    );
}

#[test]
fn enemy_phase_waits_for_the_menu_prompt() {
    let mut game = Harness::new();
    game.start_combat();

    let mut rng = ScriptedRandom::new([50]);
    let tx = game.handle(Intent::SelectSkill(1), &mut rng).unwrap();
    let tx = game.resume_roll(&tx, 2, &mut rng);
    game.handle(Intent::RequestMenu, &mut rng).unwrap();

    let mut rng = ScriptedRandom::new([50]);
    let held = game.resume_delay(&tx, &mut rng);
    assert!(held.changes.is_empty());
    assert_eq!(held.scheduled.len(), 1);
    assert_eq!(held.scheduled[0].task, Task::Hold(Continuation::EnemyPhase));
    assert_eq!(game.state.player().unwrap().hp(), 100);
    assert_eq!(game.state.session().unwrap().phase, TurnPhase::EnemyPending);

    game.handle(Intent::CancelMenu, &mut rng).unwrap();
    let generation = held.scheduled[0].generation;
    game.resume(generation, Continuation::EnemyPhase, &mut rng)
        .expect("held continuation should apply");
    assert_eq!(game.state.player().unwrap().hp(), 88);
}

#[test]
fn player_defeat_resets_the_run_after_delay() {
    let mut game = Harness::new();
    game.start_combat();
    if let Some(run) = game.state.run.as_mut() {
        run.player.set_hp(5);
    }

    let mut rng = ScriptedRandom::new([50]);
    let tx = game.handle(Intent::SelectSkill(1), &mut rng).unwrap();
    let tx = game.resume_roll(&tx, 2, &mut rng);
    let mut rng = ScriptedRandom::new([50]);
    let tx = game.resume_delay(&tx, &mut rng);

    assert_eq!(game.state.player().unwrap().hp(), 0);
    assert_eq!(game.state.session().unwrap().phase, TurnPhase::Lost);
    assert_eq!(
        tx.delayed().collect::<Vec<_>>(),
        vec![(Pacing::DefeatReset, &Continuation::ResetRun)]
    );

    let generation = game.state.generation;
    game.resume_delay(&tx, &mut rng);

    assert!(game.state.run.is_none());
    assert_eq!(game.state.mode.kind(), ModeKind::Menu);
    assert_eq!(game.state.generation, generation + 1);
    assert_eq!(game.state.selected_class, Some(common::KNIGHT));
}

#[test]
fn fleeing_invalidates_the_pending_roll() {
    let mut game = Harness::new();
    game.start_combat();

    let mut rng = ScriptedRandom::default();
    let tx = game.handle(Intent::SelectSkill(0), &mut rng).unwrap();
    let stale = tx
        .scheduled
        .iter()
        .find(|scheduled| matches!(scheduled.task, Task::Roll(_)))
        .cloned()
        .unwrap();

    game.handle(Intent::RequestMenu, &mut rng).unwrap();
    assert_eq!(
        game.handle(Intent::SelectSkill(0), &mut rng),
        Err(IntentError::ConfirmationPending)
    );
    game.handle(Intent::ConfirmMenu, &mut rng).unwrap();
    assert_eq!(game.state.mode, GameMode::Menu);

    let before = game.state.clone();
    let resumed = game.resume(
        stale.generation,
        Continuation::Rolled {
            purpose: RollPurpose::Attack { slot: 0 },
            value: 6,
        },
        &mut rng,
    );
    assert!(resumed.is_none());
    assert_eq!(game.state, before);
}

#[test]
fn cancelling_the_menu_prompt_keeps_the_fight() {
    let mut game = Harness::new();
    game.start_combat();
    let mut rng = ScriptedRandom::default();

    game.handle(Intent::RequestMenu, &mut rng).unwrap();
    game.handle(Intent::CancelMenu, &mut rng).unwrap();

    assert!(!game.state.menu_prompt);
    assert_eq!(game.state.mode.kind(), ModeKind::Combat);
    assert_eq!(
        game.handle(Intent::CancelMenu, &mut rng),
        Err(IntentError::NoPendingConfirmation)
    );
}
