use game_core::{EventKind, EventTemplate, ValueRange};

pub(super) fn events() -> Vec<EventTemplate> {
    vec![
        EventTemplate::new(
            "Healing Spring",
            "A clear spring glows faintly. Resting here would mend your wounds.",
            EventKind::Heal(ValueRange::new(15, 30)),
        ),
        EventTemplate::new(
            "Abandoned Camp",
            "Someone left a bedroll and a few bandages behind.",
            EventKind::Heal(ValueRange::new(10, 20)),
        ),
        EventTemplate::new(
            "Spike Trap",
            "The corridor floor is riddled with suspicious holes.",
            EventKind::Trap(ValueRange::new(10, 20)),
        ),
        EventTemplate::new(
            "Collapsing Floor",
            "Cracks spread beneath your feet.",
            EventKind::Trap(ValueRange::new(15, 25)),
        ),
        EventTemplate::new(
            "Treasure Chest",
            "An old chest sits in the corner, its lock rusted through.",
            EventKind::Treasure(ValueRange::new(20, 50)),
        ),
        EventTemplate::new(
            "Hidden Cache",
            "A loose brick hides a small pouch.",
            EventKind::Treasure(ValueRange::new(10, 30)),
        ),
    ]
}
