//! Mapping from DOM `KeyboardEvent.key` values to board input.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arrow {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyInput {
    Move(Arrow),
    ToggleMode,
}

impl KeyInput {
    /// `None` for keys the board ignores.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(KeyInput::Move(Arrow::Up)),
            "ArrowDown" => Some(KeyInput::Move(Arrow::Down)),
            "ArrowLeft" => Some(KeyInput::Move(Arrow::Left)),
            "ArrowRight" => Some(KeyInput::Move(Arrow::Right)),
            "m" | "M" => Some(KeyInput::ToggleMode),
            _ => None,
        }
    }

    /// Arrow keys would otherwise scroll the page.
    pub fn suppresses_default(self) -> bool {
        matches!(self, KeyInput::Move(_))
    }
}

/// What the window listener does with one keydown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyDecision {
    pub prevent_default: bool,
    /// `None` when the key is ignored or the board is not taking keys.
    pub input: Option<KeyInput>,
}

/// Arrows keep the page still even while the board is not taking keys.
pub fn decide(key: &str, keys_enabled: bool) -> KeyDecision {
    let input = KeyInput::from_key(key);
    KeyDecision {
        prevent_default: input.is_some_and(KeyInput::suppresses_default),
        input: input.filter(|_| keys_enabled),
    }
}
