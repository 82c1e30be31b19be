use game_core::{ClassDefinition, ClassId, Element};

pub const KNIGHT: ClassId = ClassId(1);
pub const MAGE: ClassId = ClassId(2);
pub const ROGUE: ClassId = ClassId(3);

pub(super) fn classes() -> Vec<ClassDefinition> {
    vec![
        ClassDefinition {
            id: KNIGHT,
            name: "Knight".into(),
            description: "Heavy armor and steady blows. Hard to bring down.".into(),
            element: Element::Earth,
            base_hp: 120,
            base_attack: 10,
            base_luck: 5,
        },
        ClassDefinition {
            id: MAGE,
            name: "Mage".into(),
            description: "Fragile, but every spell hits hard and burns.".into(),
            element: Element::Fire,
            base_hp: 80,
            base_attack: 14,
            base_luck: 8,
        },
        ClassDefinition {
            id: ROGUE,
            name: "Rogue".into(),
            description: "Quick hands and quicker feet. Strikes many times.".into(),
            element: Element::Wind,
            base_hp: 95,
            base_attack: 11,
            base_luck: 15,
        },
    ]
}
