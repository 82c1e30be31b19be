//! Card pools, commons first so starting hands come from the top.

use game_core::{Element, Rarity, Skill, SkillFlags, SkillId};

const STUN: SkillFlags = SkillFlags {
    stun: true,
    ..SkillFlags::NONE
};
const POISON: SkillFlags = SkillFlags {
    poison: true,
    ..SkillFlags::NONE
};
const FREEZE: SkillFlags = SkillFlags {
    freeze: true,
    ..SkillFlags::NONE
};

fn card(id: u32, name: &str, damage: u32, rarity: Rarity) -> Skill {
    Skill::new(SkillId(id), name, damage, rarity)
}

pub(super) fn knight() -> Vec<Skill> {
    vec![
        card(101, "Slash", 12, Rarity::Common),
        card(102, "Shield Bash", 8, Rarity::Common).with_flags(STUN),
        card(103, "Heavy Blow", 16, Rarity::Common),
        card(104, "Rock Smash", 11, Rarity::Common).with_element(Element::Earth),
        card(105, "Double Cut", 7, Rarity::Rare).with_hits(2),
        card(106, "Holy Strike", 15, Rarity::Rare).with_element(Element::Light),
        card(107, "Earthshaker", 20, Rarity::Epic)
            .with_element(Element::Earth)
            .with_flags(STUN),
        card(108, "Judgment", 32, Rarity::Legendary).with_element(Element::Light),
    ]
}

pub(super) fn mage() -> Vec<Skill> {
    vec![
        card(201, "Fire Bolt", 11, Rarity::Common).with_element(Element::Fire),
        card(202, "Ice Shard", 9, Rarity::Common)
            .with_element(Element::Water)
            .with_flags(FREEZE),
        card(203, "Gust", 10, Rarity::Common).with_element(Element::Wind),
        card(204, "Spark", 8, Rarity::Common)
            .with_element(Element::Light)
            .with_hits(2),
        card(205, "Flame Burst", 6, Rarity::Rare)
            .with_element(Element::Fire)
            .with_hits(3),
        card(206, "Frost Nova", 12, Rarity::Rare)
            .with_element(Element::Water)
            .with_flags(FREEZE),
        card(207, "Meteor", 28, Rarity::Epic).with_element(Element::Fire),
        card(208, "Void Ray", 36, Rarity::Legendary).with_element(Element::Dark),
    ]
}

pub(super) fn rogue() -> Vec<Skill> {
    vec![
        card(301, "Stab", 10, Rarity::Common),
        card(302, "Poison Dart", 6, Rarity::Common).with_flags(POISON),
        card(303, "Quick Cut", 5, Rarity::Common).with_hits(2),
        card(304, "Shadow Jab", 9, Rarity::Common).with_element(Element::Dark),
        card(305, "Flurry", 4, Rarity::Rare).with_hits(4),
        card(306, "Venom Fang", 10, Rarity::Rare).with_flags(POISON),
        card(307, "Assassinate", 26, Rarity::Epic).with_element(Element::Dark),
        card(308, "Thousand Cuts", 3, Rarity::Legendary).with_hits(10),
    ]
}
