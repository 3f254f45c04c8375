use serde::{Deserialize, Serialize};

/// Physical button indices on a standard-layout controller.
/// The mapping is positional; a pad with a different layout will misread.
pub const BUTTON_JUMP: usize = 0;
pub const BUTTON_DASH: usize = 2;
pub const BUTTON_UP: usize = 12;
pub const BUTTON_DOWN: usize = 13;
pub const BUTTON_LEFT: usize = 14;
pub const BUTTON_RIGHT: usize = 15;

/// Read access to whatever controllers the host currently exposes.
pub trait GamepadSource {
    /// Pressed flags for every button on the pad in `slot`,
    /// or `None` when the slot is empty.
    fn buttons(&self, slot: usize) -> Option<Vec<bool>>;
}

/// One-shot snapshot of the buttons the game cares about.
/// Serialized field names are the wire contract with the UI component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GamepadSnapshot {
    pub gamepad_connected: bool,
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub dash: bool,
}

impl GamepadSnapshot {
    /// Snapshot for an empty slot: not connected, nothing pressed.
    pub const DISCONNECTED: Self = Self {
        gamepad_connected: false,
        up: false,
        down: false,
        left: false,
        right: false,
        jump: false,
        dash: false,
    };

    /// Map raw pressed flags through the button-index table.
    /// Indices past the end of `buttons` read as unpressed.
    pub fn from_buttons(buttons: &[bool]) -> Self {
        let pressed = |index: usize| buttons.get(index).copied().unwrap_or(false);
        Self {
            gamepad_connected: true,
            up: pressed(BUTTON_UP),
            down: pressed(BUTTON_DOWN),
            left: pressed(BUTTON_LEFT),
            right: pressed(BUTTON_RIGHT),
            jump: pressed(BUTTON_JUMP),
            dash: pressed(BUTTON_DASH),
        }
    }
}

/// Poll one slot. An empty slot is a normal disconnected state, not an error.
/// No debouncing; callers poll repeatedly to observe changes.
pub fn poll(source: &dyn GamepadSource, slot: usize) -> GamepadSnapshot {
    match source.buttons(slot) {
        Some(buttons) => GamepadSnapshot::from_buttons(&buttons),
        None => GamepadSnapshot::DISCONNECTED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct FakePads {
        pads: HashMap<usize, Vec<bool>>,
    }

    impl GamepadSource for FakePads {
        fn buttons(&self, slot: usize) -> Option<Vec<bool>> {
            self.pads.get(&slot).cloned()
        }
    }

    fn pad_with(indices: &[usize]) -> Vec<bool> {
        let mut buttons = vec![false; 17];
        for &index in indices {
            buttons[index] = true;
        }
        buttons
    }

    #[test]
    fn empty_slot_polls_disconnected() {
        let pads = FakePads {
            pads: HashMap::new(),
        };
        assert_eq!(poll(&pads, 0), GamepadSnapshot::DISCONNECTED);
    }

    #[test]
    fn mapping_reads_fixed_indices() {
        let mut pads = HashMap::new();
        pads.insert(1, pad_with(&[BUTTON_UP, BUTTON_JUMP]));
        let pads = FakePads { pads };

        let snapshot = poll(&pads, 1);
        assert!(snapshot.gamepad_connected);
        assert!(snapshot.up);
        assert!(snapshot.jump);
        assert!(!snapshot.down);
        assert!(!snapshot.left);
        assert!(!snapshot.right);
        assert!(!snapshot.dash);
    }

    #[test]
    fn every_button_maps_verbatim() {
        let buttons = pad_with(&[
            BUTTON_UP,
            BUTTON_DOWN,
            BUTTON_LEFT,
            BUTTON_RIGHT,
            BUTTON_JUMP,
            BUTTON_DASH,
        ]);
        let snapshot = GamepadSnapshot::from_buttons(&buttons);
        assert!(
            snapshot.up
                && snapshot.down
                && snapshot.left
                && snapshot.right
                && snapshot.jump
                && snapshot.dash
        );
    }

    #[test]
    fn short_button_array_reads_unpressed() {
        // A pad with only four buttons cannot press the d-pad indices.
        let snapshot = GamepadSnapshot::from_buttons(&[true, false, true, false]);
        assert!(snapshot.gamepad_connected);
        assert!(snapshot.jump);
        assert!(snapshot.dash);
        assert!(!snapshot.up && !snapshot.down && !snapshot.left && !snapshot.right);
    }

    #[test]
    fn wire_shape_uses_camel_case_flag() {
        let json = serde_json::to_value(GamepadSnapshot::DISCONNECTED).unwrap();
        assert_eq!(json["gamepadConnected"], serde_json::json!(false));
        assert_eq!(json["up"], serde_json::json!(false));
        assert_eq!(json["dash"], serde_json::json!(false));
    }
}
