//! Keyboard codes and movement bindings
//!
//! Keys are identified by their physical position, using the names of
//! `KeyboardEvent.code` (`KeyW`, `Space`, `ArrowUp`, ...), so bindings
//! stay put under non-QWERTY layouts.

use std::fmt;
use std::str::FromStr;

use atrium_physics::MoveAction;
use serde::{Deserialize, Serialize};

/// Physical key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum KeyCode {
    /// `KeyA` ..= `KeyZ`, stored upper-case
    Letter(char),
    /// `Digit0` ..= `Digit9`
    Digit(u8),
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Space,
    Enter,
    Escape,
    Tab,
    ShiftLeft,
    ShiftRight,
    ControlLeft,
    ControlRight,
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Letter(c) => write!(f, "Key{}", c),
            Self::Digit(d) => write!(f, "Digit{}", d),
            Self::ArrowUp => write!(f, "ArrowUp"),
            Self::ArrowDown => write!(f, "ArrowDown"),
            Self::ArrowLeft => write!(f, "ArrowLeft"),
            Self::ArrowRight => write!(f, "ArrowRight"),
            Self::Space => write!(f, "Space"),
            Self::Enter => write!(f, "Enter"),
            Self::Escape => write!(f, "Escape"),
            Self::Tab => write!(f, "Tab"),
            Self::ShiftLeft => write!(f, "ShiftLeft"),
            Self::ShiftRight => write!(f, "ShiftRight"),
            Self::ControlLeft => write!(f, "ControlLeft"),
            Self::ControlRight => write!(f, "ControlRight"),
        }
    }
}

impl FromStr for KeyCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(rest) = s.strip_prefix("Key") {
            let mut chars = rest.chars();
            if let (Some(c), None) = (chars.next(), chars.next()) {
                if c.is_ascii_alphabetic() {
                    return Ok(Self::Letter(c.to_ascii_uppercase()));
                }
            }
        }
        if let Some(rest) = s.strip_prefix("Digit") {
            if let Ok(d) = rest.parse::<u8>() {
                if d <= 9 && rest.len() == 1 {
                    return Ok(Self::Digit(d));
                }
            }
        }
        match s {
            "ArrowUp" => Ok(Self::ArrowUp),
            "ArrowDown" => Ok(Self::ArrowDown),
            "ArrowLeft" => Ok(Self::ArrowLeft),
            "ArrowRight" => Ok(Self::ArrowRight),
            "Space" => Ok(Self::Space),
            "Enter" | "NumpadEnter" => Ok(Self::Enter),
            "Escape" => Ok(Self::Escape),
            "Tab" => Ok(Self::Tab),
            "ShiftLeft" => Ok(Self::ShiftLeft),
            "ShiftRight" => Ok(Self::ShiftRight),
            "ControlLeft" => Ok(Self::ControlLeft),
            "ControlRight" => Ok(Self::ControlRight),
            _ => Err(format!("Unknown key code: {}", s)),
        }
    }
}

impl TryFrom<String> for KeyCode {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<KeyCode> for String {
    fn from(key: KeyCode) -> Self {
        key.to_string()
    }
}

/// Keys bound to each movement action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub forward: Vec<KeyCode>,
    pub backward: Vec<KeyCode>,
    pub left: Vec<KeyCode>,
    pub right: Vec<KeyCode>,
    pub jump: Vec<KeyCode>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            forward: vec![KeyCode::Letter('W'), KeyCode::ArrowUp],
            backward: vec![KeyCode::Letter('S'), KeyCode::ArrowDown],
            left: vec![KeyCode::Letter('A'), KeyCode::ArrowLeft],
            right: vec![KeyCode::Letter('D'), KeyCode::ArrowRight],
            jump: vec![KeyCode::Space],
        }
    }
}

impl KeyBindings {
    /// Movement action bound to a key, first binding wins
    pub fn action_for(&self, key: KeyCode) -> Option<MoveAction> {
        let table = [
            (&self.forward, MoveAction::Forward),
            (&self.backward, MoveAction::Backward),
            (&self.left, MoveAction::Left),
            (&self.right, MoveAction::Right),
            (&self.jump, MoveAction::Jump),
        ];
        table
            .into_iter()
            .find(|(keys, _)| keys.contains(&key))
            .map(|(_, action)| action)
    }

    /// Keys bound to more than one action
    pub fn conflicts(&self) -> Vec<KeyCode> {
        let all: Vec<KeyCode> = [&self.forward, &self.backward, &self.left, &self.right, &self.jump]
            .into_iter()
            .flat_map(|keys| {
                // Repeats within one action are not conflicts
                let mut unique: Vec<KeyCode> = Vec::with_capacity(keys.len());
                for key in keys {
                    if !unique.contains(key) {
                        unique.push(*key);
                    }
                }
                unique
            })
            .collect();
        let mut conflicts = Vec::new();
        for (i, key) in all.iter().enumerate() {
            if all[i + 1..].contains(key) && !conflicts.contains(key) {
                conflicts.push(*key);
            }
        }
        conflicts
    }
}
