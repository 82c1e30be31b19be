//! Turns typed lines into client commands.
//!
//! Numbers typed by the player are 1-based; intents carry 0-based indices.
//! A bare number means whatever the current screen lists: a class on the
//! character screen, a hand slot in combat, an offer on reward screens.
use std::str::FromStr;

use thiserror::Error;

use game_core::{ClassId, EventChoice, Intent, ModeKind};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Intent(Intent),
    /// Dump the store as JSON.
    State,
    Help,
    Quit,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("type a command (or `help`)")]
    Empty,

    #[error("unknown command `{0}` (try `help`)")]
    Unknown(String),

    #[error("`{0}` needs a number")]
    MissingNumber(&'static str),

    #[error("`{0}` is not a number from 1 up")]
    BadNumber(String),

    #[error("nothing is numbered on the {0} screen")]
    NothingToPick(ModeKind),
}

pub const HELP: &str = "\
commands:
  start | change | class <n>        menu and character select
  go                                 next encounter
  skills | artifacts | close         inventories
  equip <n> <n> ...                  set the hand from the skill inventory
  use <n> | <n>                      use a hand slot in combat
  accept decline roll avoid open ignore
                                     answer an event
  pick <n> | skip                    take or refuse a reward
  menu | yes | no                    return to the main menu
  state | help | quit";

/// Parses one line typed while `mode` is on screen.
pub fn parse_command(line: &str, mode: ModeKind) -> Result<Command, ParseError> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Err(ParseError::Empty);
    };
    let head = head.to_ascii_lowercase();

    if let Ok(index) = parse_index(&head) {
        return numbered(index, mode).map(Command::Intent);
    }

    let intent = match head.as_str() {
        "quit" | "exit" | "q" => return Ok(Command::Quit),
        "help" | "?" => return Ok(Command::Help),
        "state" => return Ok(Command::State),

        "start" => Intent::StartGame,
        "change" => Intent::ChangeCharacter,
        "class" => Intent::SelectClass(class_id(words.next(), "class")?),

        "go" | "proceed" | "next" => Intent::Proceed,
        "skills" => Intent::OpenSkillInventory,
        "artifacts" => Intent::OpenArtifactInventory,
        "close" | "back" => Intent::CloseInventory,
        "equip" => {
            let hand = words.map(parse_index).collect::<Result<Vec<_>, _>>()?;
            if hand.is_empty() {
                return Err(ParseError::MissingNumber("equip"));
            }
            Intent::EquipSkills(hand)
        }

        "use" => Intent::SelectSkill(required_index(words.next(), "use")?),

        "pick" => {
            let index = required_index(words.next(), "pick")?;
            match mode {
                ModeKind::ArtifactSelect => Intent::PickArtifact(index),
                _ => Intent::PickCard(index),
            }
        }
        "skip" => match mode {
            ModeKind::ArtifactSelect => Intent::SkipArtifact,
            _ => Intent::SkipCard,
        },

        "menu" => Intent::RequestMenu,
        "yes" | "confirm" => Intent::ConfirmMenu,
        "no" | "cancel" => Intent::CancelMenu,

        other => match EventChoice::from_str(other) {
            Ok(choice) => Intent::ChooseEvent(choice),
            Err(_) => return Err(ParseError::Unknown(other.to_owned())),
        },
    };

    Ok(Command::Intent(intent))
}

fn numbered(index: usize, mode: ModeKind) -> Result<Intent, ParseError> {
    match mode {
        ModeKind::CharacterSelect => Ok(Intent::SelectClass(to_class_id(index + 1)?)),
        ModeKind::Combat => Ok(Intent::SelectSkill(index)),
        ModeKind::CardReward => Ok(Intent::PickCard(index)),
        ModeKind::ArtifactSelect => Ok(Intent::PickArtifact(index)),
        other => Err(ParseError::NothingToPick(other)),
    }
}

fn parse_index(word: &str) -> Result<usize, ParseError> {
    match word.parse::<usize>() {
        Ok(number) if number > 0 => Ok(number - 1),
        _ => Err(ParseError::BadNumber(word.to_owned())),
    }
}

fn required_index(word: Option<&str>, command: &'static str) -> Result<usize, ParseError> {
    word.map_or(Err(ParseError::MissingNumber(command)), parse_index)
}

fn class_id(word: Option<&str>, command: &'static str) -> Result<ClassId, ParseError> {
    to_class_id(required_index(word, command)? + 1)
}

fn to_class_id(number: usize) -> Result<ClassId, ParseError> {
    u8::try_from(number)
        .map(ClassId)
        .map_err(|_| ParseError::BadNumber(number.to_string()))
}
