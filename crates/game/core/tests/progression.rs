mod common;

use common::Harness;
use game_core::{
    ArtifactOrigin, Combatant, Continuation, Element, EnemyRank, EventChoice, EventKind,
    EventTemplate, GameMode, Intent, IntentError, ModeKind, Pacing, Route, ScriptedRandom,
    TurnPhase, ValueRange,
};

/// Proceeds into an event and declines it, then resumes the conclusion.
fn complete_event(game: &mut Harness) {
    let mut rng = ScriptedRandom::default();
    game.handle(Intent::Proceed, &mut rng).unwrap();
    assert_eq!(game.state.mode.kind(), ModeKind::Event);
    let tx = game
        .handle(Intent::ChooseEvent(EventChoice::Decline), &mut rng)
        .unwrap();
    game.resume_delay(&tx, &mut rng);
}

#[test]
fn boss_kill_with_drop_defers_stage_advance() {
    let mut game = Harness::new();
    game.tables.drop_chance = 100;
    game.start_run();
    if let Some(run) = game.state.run.as_mut() {
        run.progress.stage = 10;
        run.player.set_hp(60);
    }

    let mut rng = ScriptedRandom::new([0]);
    game.handle(Intent::Proceed, &mut rng).unwrap();
    let session = game.state.session().unwrap();
    assert!(session.is_boss_fight());

    let tx = game.handle(Intent::SelectSkill(1), &mut rng).unwrap();
    let mut rng = ScriptedRandom::new([50, 0]);
    let tx = game.resume_roll(&tx, 6, &mut rng);

    let progress = *game.state.progress().unwrap();
    assert_eq!(progress.gold, 50);
    assert_eq!(progress.kill_count, 1);
    assert_eq!(progress.total_turns, 1);
    assert_eq!(progress.stage, 10);
    assert_eq!(game.state.session().unwrap().phase, TurnPhase::Won);

    let delayed: Vec<_> = tx.delayed().collect();
    assert_eq!(delayed.len(), 1);
    assert_eq!(delayed[0].0, Pacing::CombatReward);
    assert!(matches!(
        delayed[0].1,
        Continuation::ConcludeCombat(Route::ArtifactSelect(artifacts)) if artifacts.len() == 2
    ));

    game.resume_delay(&tx, &mut rng);
    match &game.state.mode {
        GameMode::ArtifactSelect(offer) => assert_eq!(offer.origin, ArtifactOrigin::CombatDrop),
        other => panic!("expected artifact select, got {other:?}"),
    }
    assert_eq!(game.state.progress().unwrap().stage, 10);

    game.handle(Intent::PickArtifact(0), &mut rng).unwrap();

    let run = game.state.run.as_ref().unwrap();
    assert_eq!(run.artifacts().len(), 1);
    assert_eq!(run.progress.layer, 2);
    assert_eq!(run.progress.stage, 1);
    assert_eq!(run.player.hp(), run.player.max_hp());
    assert_eq!(game.state.mode, GameMode::Exploring);
}

#[test]
fn normal_kill_without_drop_advances_one_stage() {
    let mut game = Harness::new();
    game.start_run();
    if let Some(run) = game.state.run.as_mut() {
        run.player.set_hp(70);
    }
    game.content.monster = Combatant::enemy("Rat", Element::Neutral, 5, 2, 0, EnemyRank::Normal);

    let mut rng = ScriptedRandom::new([0]);
    game.handle(Intent::Proceed, &mut rng).unwrap();
    let tx = game.handle(Intent::SelectSkill(1), &mut rng).unwrap();
    let mut rng = ScriptedRandom::new([50]);
    let tx = game.resume_roll(&tx, 3, &mut rng);

    assert_eq!(game.state.progress().unwrap().gold, 15);
    let log = &game.state.session().unwrap().log;
    assert!(log.iter().any(|line| line == "Rat was defeated!"));
    assert_eq!(log.last().map(String::as_str), Some("=== Combat End ==="));

    game.resume_delay(&tx, &mut rng);
    let run = game.state.run.as_ref().unwrap();
    assert_eq!(run.progress.stage, 2);
    assert_eq!(run.player.hp(), 70);
    assert_eq!(game.state.mode, GameMode::Exploring);
}

#[test]
fn card_reward_arrives_every_third_completed_action() {
    let mut game = Harness::new();
    game.tables.combat_chance = 0;
    game.start_run();

    complete_event(&mut game);
    complete_event(&mut game);
    let progress = *game.state.progress().unwrap();
    assert_eq!(progress.total_turns, 2);
    assert_eq!(progress.stage, 3);
    assert_eq!(game.state.mode, GameMode::Exploring);

    complete_event(&mut game);
    let progress = *game.state.progress().unwrap();
    assert_eq!(progress.total_turns, 3);
    assert_eq!(progress.stage, 3);

    let GameMode::CardReward(offer) = &game.state.mode else {
        panic!("expected a card reward");
    };
    assert_eq!(offer.cards.len(), 3);
    for (index, card) in offer.cards.iter().enumerate() {
        assert!(offer.cards[index + 1..].iter().all(|other| other.id != card.id));
    }
    let picked = offer.cards[0].clone();

    let mut rng = ScriptedRandom::default();
    assert_eq!(
        game.handle(Intent::PickCard(3), &mut rng),
        Err(IntentError::InvalidSelection {
            index: 3,
            available: 3
        })
    );
    game.handle(Intent::PickCard(0), &mut rng).unwrap();

    let run = game.state.run.as_ref().unwrap();
    assert_eq!(run.inventory.len(), 5);
    assert_eq!(run.inventory.last(), Some(&picked));
    assert_eq!(game.state.mode, GameMode::Exploring);

    // The fourth action is not a multiple of three.
    complete_event(&mut game);
    assert_eq!(game.state.mode, GameMode::Exploring);
    assert_eq!(game.state.progress().unwrap().stage, 4);
}

#[test]
fn skipping_a_card_reward_adds_nothing() {
    let mut game = Harness::new();
    game.tables.combat_chance = 0;
    game.start_run();
    for _ in 0..3 {
        complete_event(&mut game);
    }

    let mut rng = ScriptedRandom::default();
    game.handle(Intent::SkipCard, &mut rng).unwrap();
    assert_eq!(game.state.run.as_ref().unwrap().inventory.len(), 4);
    assert_eq!(game.state.mode, GameMode::Exploring);
}

#[test]
fn heal_event_is_clamped_to_max_hp() {
    let mut game = Harness::new();
    game.tables.combat_chance = 0;
    game.start_run();
    if let Some(run) = game.state.run.as_mut() {
        run.player.set_hp(95);
    }

    let mut rng = ScriptedRandom::default();
    game.handle(Intent::Proceed, &mut rng).unwrap();
    let tx = game
        .handle(Intent::ChooseEvent(EventChoice::Accept), &mut rng)
        .unwrap();

    assert_eq!(game.state.player().unwrap().hp(), 100);
    let encounter = game.state.event().unwrap();
    assert_eq!(encounter.outcome.as_deref(), Some("Recovered 10 HP!"));
    assert_eq!(
        tx.delayed().map(|(pacing, _)| pacing).collect::<Vec<_>>(),
        vec![Pacing::EventResult]
    );
}

#[test]
fn trap_roll_outcomes() {
    let mut game = Harness::new();
    game.tables.combat_chance = 0;
    game.content.event = EventTemplate::new(
        "Spike Pit",
        "The floor ahead looks loose.",
        EventKind::Trap(ValueRange::new(8, 8)),
    );
    game.start_run();

    let mut rng = ScriptedRandom::default();
    game.handle(Intent::Proceed, &mut rng).unwrap();
    assert_eq!(
        game.handle(Intent::ChooseEvent(EventChoice::Accept), &mut rng),
        Err(IntentError::InvalidChoice {
            choice: EventChoice::Accept
        })
    );

    let tx = game
        .handle(Intent::ChooseEvent(EventChoice::Roll), &mut rng)
        .unwrap();
    assert!(game.state.event().unwrap().rolling);
    assert_eq!(
        game.handle(Intent::ChooseEvent(EventChoice::Avoid), &mut rng),
        Err(IntentError::RollInFlight)
    );
    assert_eq!(game.state.progress().unwrap().total_turns, 0);

    let tx = game.resume_roll(&tx, 2, &mut rng);
    assert_eq!(game.state.player().unwrap().hp(), 92);
    assert_eq!(game.state.progress().unwrap().total_turns, 1);
    assert_eq!(
        tx.delayed().map(|(pacing, _)| pacing).collect::<Vec<_>>(),
        vec![Pacing::TrapResult]
    );

    game.resume_delay(&tx, &mut rng);
    assert_eq!(game.state.progress().unwrap().stage, 2);

    game.handle(Intent::Proceed, &mut rng).unwrap();
    let tx = game
        .handle(Intent::ChooseEvent(EventChoice::Roll), &mut rng)
        .unwrap();
    game.resume_roll(&tx, 6, &mut rng);
    assert_eq!(game.state.player().unwrap().hp(), 92);
    assert_eq!(
        game.state.event().unwrap().outcome.as_deref(),
        Some("Rolled 6: you dodge the trap!")
    );
}

#[test]
fn lethal_trap_resets_the_run() {
    let mut game = Harness::new();
    game.tables.combat_chance = 0;
    game.content.event = EventTemplate::new(
        "Spike Pit",
        "The floor ahead looks loose.",
        EventKind::Trap(ValueRange::new(30, 30)),
    );
    game.start_run();
    if let Some(run) = game.state.run.as_mut() {
        run.player.set_hp(20);
    }

    let mut rng = ScriptedRandom::default();
    game.handle(Intent::Proceed, &mut rng).unwrap();
    let tx = game
        .handle(Intent::ChooseEvent(EventChoice::Roll), &mut rng)
        .unwrap();
    let tx = game.resume_roll(&tx, 1, &mut rng);

    assert_eq!(game.state.player().unwrap().hp(), 0);
    assert_eq!(game.state.progress().unwrap().total_turns, 0);
    assert_eq!(
        tx.delayed().collect::<Vec<_>>(),
        vec![(Pacing::DefeatReset, &Continuation::ResetRun)]
    );

    game.resume_delay(&tx, &mut rng);
    assert!(game.state.run.is_none());
    assert_eq!(game.state.mode, GameMode::Menu);
}

#[test]
fn treasure_adds_gold_to_progress() {
    let mut game = Harness::new();
    game.tables.combat_chance = 0;
    game.content.event = EventTemplate::new(
        "Old Chest",
        "A chest sits in the corner.",
        EventKind::Treasure(ValueRange::new(20, 40)),
    );
    game.start_run();

    // 0 fails the zero combat chance, 5 picks 20 + 5 gold.
    let mut rng = ScriptedRandom::new([0, 5]);
    game.handle(Intent::Proceed, &mut rng).unwrap();
    game.handle(Intent::ChooseEvent(EventChoice::Open), &mut rng)
        .unwrap();

    assert_eq!(game.state.progress().unwrap().gold, 25);
}
