//! Non-combat encounters offered between fights.

/// Inclusive value range rolled when an event pays out or hurts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValueRange {
    pub min: u32,
    pub max: u32,
}

impl ValueRange {
    pub const fn new(min: u32, max: u32) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase")]
pub enum EventKind {
    /// Restores HP when accepted.
    Heal(ValueRange),
    /// Deals damage unless avoided by a dice roll or walked around.
    Trap(ValueRange),
    /// Grants gold when opened.
    Treasure(ValueRange),
}

/// Player answers to an event prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase")]
pub enum EventChoice {
    Accept,
    Decline,
    Roll,
    Avoid,
    Open,
    Ignore,
}

impl EventKind {
    /// Choices that make sense for this kind of event.
    pub const fn choices(&self) -> [EventChoice; 2] {
        match self {
            Self::Heal(_) => [EventChoice::Accept, EventChoice::Decline],
            Self::Trap(_) => [EventChoice::Roll, EventChoice::Avoid],
            Self::Treasure(_) => [EventChoice::Open, EventChoice::Ignore],
        }
    }

    pub fn accepts(&self, choice: EventChoice) -> bool {
        self.choices().contains(&choice)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventTemplate {
    pub name: String,
    pub description: String,
    pub kind: EventKind,
}

impl EventTemplate {
    pub fn new(name: impl Into<String>, description: impl Into<String>, kind: EventKind) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            kind,
        }
    }
}

/// An event in progress.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventEncounter {
    pub event: EventTemplate,
    /// A trap roll is in flight.
    pub rolling: bool,
    /// Result text once the player's choice has been applied.
    pub outcome: Option<String>,
}

impl EventEncounter {
    pub fn new(event: EventTemplate) -> Self {
        Self {
            event,
            rolling: false,
            outcome: None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.outcome.is_some()
    }
}
