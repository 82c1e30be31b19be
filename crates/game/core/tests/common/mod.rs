#![allow(dead_code)]

use game_core::{
    Artifact, ArtifactEffect, ArtifactId, ClassDefinition, ClassId, Combatant, ContentOracle,
    Continuation, Defense, Element, EnemyRank, EventKind, EventTemplate, GameConfig, GameEngine,
    GameEnv, Intent, IntentError, RandomSource, Rarity, RollPurpose, RunState, ScriptedRandom,
    Skill, SkillFlags, SkillId, StageType, TablesOracle, Task, Transition, ValueRange,
};

pub const KNIGHT: ClassId = ClassId(1);

pub struct StubTables {
    pub combat_chance: u32,
    pub drop_chance: u32,
}

impl TablesOracle for StubTables {
    fn dodge_rate(&self, luck: u32) -> u32 {
        (10 + luck).min(60)
    }

    fn element_multiplier(&self, attacker: Element, defender: Element) -> f64 {
        match (attacker, defender) {
            (Element::Water, Element::Fire) => 1.5,
            (Element::Fire, Element::Water) => 0.75,
            _ => 1.0,
        }
    }

    fn attack_bonus(&self, attack: u32) -> u32 {
        attack / 5
    }

    fn combat_chance(&self) -> u32 {
        self.combat_chance
    }

    fn stage_type(&self, stage: u32) -> StageType {
        match stage {
            5 => StageType::MiniBoss,
            10 => StageType::Boss,
            _ => StageType::Normal,
        }
    }

    fn gold_reward(&self, kills: u32, is_boss: bool) -> u32 {
        kills * if is_boss { 50 } else { 15 }
    }

    fn artifact_drop_chance(&self, _is_boss: bool) -> u32 {
        self.drop_chance
    }

    fn default_defense(&self) -> Defense {
        Defense::none()
    }
}

pub struct StubContent {
    pub classes: Vec<ClassDefinition>,
    pub pool: Vec<Skill>,
    pub monster: Combatant,
    pub event: EventTemplate,
    pub artifacts: Vec<Artifact>,
    pub starting: Vec<Artifact>,
}

impl ContentOracle for StubContent {
    fn classes(&self) -> &[ClassDefinition] {
        &self.classes
    }

    fn card_pool(&self, _class: ClassId) -> &[Skill] {
        &self.pool
    }

    fn starting_artifacts(&self, _class: ClassId) -> Vec<Artifact> {
        self.starting.clone()
    }

    fn monster(&self, _layer: u32, _rng: &mut dyn RandomSource) -> Combatant {
        self.monster.clone()
    }

    fn boss(
        &self,
        rank: EnemyRank,
        _stage: u32,
        _layer: u32,
        _rng: &mut dyn RandomSource,
    ) -> Combatant {
        Combatant::enemy("Ogre King", Element::Earth, 10, 20, 0, rank)
    }

    fn event(&self, _rng: &mut dyn RandomSource) -> EventTemplate {
        self.event.clone()
    }

    fn artifact_drop(
        &self,
        _class: ClassId,
        owned: &[Artifact],
        _is_boss: bool,
        _rng: &mut dyn RandomSource,
    ) -> Vec<Artifact> {
        self.artifacts
            .iter()
            .filter(|artifact| owned.iter().all(|own| own.id != artifact.id))
            .take(3)
            .cloned()
            .collect()
    }
}

pub fn knight_pool() -> Vec<Skill> {
    vec![
        Skill::new(SkillId(1), "Triple Strike", 10, Rarity::Common).with_hits(3),
        Skill::new(SkillId(2), "Slash", 12, Rarity::Common),
        Skill::new(SkillId(3), "Shield Bash", 8, Rarity::Common).with_flags(SkillFlags {
            stun: true,
            ..SkillFlags::NONE
        }),
        Skill::new(SkillId(4), "Ember", 9, Rarity::Common).with_element(Element::Fire),
        Skill::new(SkillId(5), "Frost Bite", 7, Rarity::Rare).with_flags(SkillFlags {
            freeze: true,
            ..SkillFlags::NONE
        }),
        Skill::new(SkillId(6), "Venom Edge", 6, Rarity::Epic).with_flags(SkillFlags {
            poison: true,
            ..SkillFlags::NONE
        }),
    ]
}

pub fn goblin() -> Combatant {
    Combatant::enemy("Goblin", Element::Neutral, 50, 10, 0, EnemyRank::Normal)
}

pub struct Harness {
    pub state: RunState,
    pub content: StubContent,
    pub tables: StubTables,
    pub config: GameConfig,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            state: RunState::new(),
            content: StubContent {
                classes: vec![ClassDefinition {
                    id: KNIGHT,
                    name: "Knight".into(),
                    description: "Sturdy melee fighter".into(),
                    element: Element::Neutral,
                    base_hp: 100,
                    base_attack: 10,
                    base_luck: 5,
                }],
                pool: knight_pool(),
                monster: goblin(),
                event: EventTemplate::new(
                    "Quiet Spring",
                    "Clear water bubbles up between the stones.",
                    EventKind::Heal(ValueRange::new(10, 10)),
                ),
                artifacts: vec![
                    Artifact::new(
                        ArtifactId(1),
                        "Whetstone",
                        "+3 damage",
                        Rarity::Common,
                        ArtifactEffect::FlatDamage(3),
                    ),
                    Artifact::new(
                        ArtifactId(2),
                        "Buckler",
                        "Blocks 2 damage",
                        Rarity::Common,
                        ArtifactEffect::FlatBlock(2),
                    ),
                ],
                starting: Vec::new(),
            },
            tables: StubTables {
                combat_chance: 100,
                drop_chance: 0,
            },
            config: GameConfig::default(),
        }
    }

    pub fn handle(
        &mut self,
        intent: Intent,
        rng: &mut ScriptedRandom,
    ) -> Result<Transition, IntentError> {
        let env = GameEnv::new(&self.content, &self.tables);
        GameEngine::new(&mut self.state, env, &self.config).handle(intent, rng)
    }

    pub fn resume(
        &mut self,
        generation: u64,
        continuation: Continuation,
        rng: &mut ScriptedRandom,
    ) -> Option<Transition> {
        let env = GameEnv::new(&self.content, &self.tables);
        GameEngine::new(&mut self.state, env, &self.config).resume(generation, continuation, rng)
    }

    /// Resumes the single delayed continuation `tx` scheduled.
    pub fn resume_delay(&mut self, tx: &Transition, rng: &mut ScriptedRandom) -> Transition {
        let (generation, then) = tx
            .scheduled
            .iter()
            .find_map(|scheduled| match &scheduled.task {
                Task::Delay { then, .. } => Some((scheduled.generation, then.clone())),
                _ => None,
            })
            .expect("transition should schedule a delay");
        self.resume(generation, then, rng)
            .expect("continuation should apply")
    }

    /// Completes the roll `tx` requested with `value`.
    pub fn resume_roll(
        &mut self,
        tx: &Transition,
        value: u32,
        rng: &mut ScriptedRandom,
    ) -> Transition {
        let (generation, purpose): (u64, RollPurpose) = tx
            .scheduled
            .iter()
            .find_map(|scheduled| match scheduled.task {
                Task::Roll(purpose) => Some((scheduled.generation, purpose)),
                _ => None,
            })
            .expect("transition should request a roll");
        self.resume(generation, Continuation::Rolled { purpose, value }, rng)
            .expect("roll should apply")
    }

    /// Menu → character select → knight, landing in exploring mode.
    pub fn start_run(&mut self) {
        let mut rng = ScriptedRandom::default();
        self.handle(Intent::StartGame, &mut rng).expect("start game");
        self.handle(Intent::SelectClass(KNIGHT), &mut rng)
            .expect("select class");
    }

    /// Starts a run and proceeds into combat against the stub monster.
    pub fn start_combat(&mut self) {
        self.start_run();
        let mut rng = ScriptedRandom::new([0]);
        self.handle(Intent::Proceed, &mut rng).expect("proceed");
    }

    pub fn log(&self) -> &[String] {
        &self.state.session().expect("combat session").log
    }
}
