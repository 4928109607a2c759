//! Named spinner operations and the explicit gesture-to-operation tables.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpinOperation {
    MinorIncrease,
    MinorDecrease,
    MajorIncrease,
    MajorDecrease,
    JumpToMax,
    JumpToMin,
    Commit,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    Up,
    Down,
    PageUp,
    PageDown,
    Enter,
    Escape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerButton {
    Primary,
    Secondary,
}

/// The interactive parts a spinner template exposes to its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpinnerPart {
    TextBox,
    IncreaseButton,
    DecreaseButton,
}

/// The integer variant commits on every keystroke, so Enter is unbound there.
pub const INTEGER_KEY_BINDINGS: &[(Key, SpinOperation)] = &[
    (Key::Up, SpinOperation::MinorIncrease),
    (Key::Down, SpinOperation::MinorDecrease),
    (Key::PageUp, SpinOperation::MajorIncrease),
    (Key::PageDown, SpinOperation::MajorDecrease),
    (Key::Escape, SpinOperation::Cancel),
];

pub const NUMERIC_KEY_BINDINGS: &[(Key, SpinOperation)] = &[
    (Key::Up, SpinOperation::MinorIncrease),
    (Key::Down, SpinOperation::MinorDecrease),
    (Key::PageUp, SpinOperation::MajorIncrease),
    (Key::PageDown, SpinOperation::MajorDecrease),
    (Key::Enter, SpinOperation::Commit),
    (Key::Escape, SpinOperation::Cancel),
];

pub fn operation_for_key(bindings: &[(Key, SpinOperation)], key: Key) -> Option<SpinOperation> {
    bindings
        .iter()
        .find(|(bound, _)| *bound == key)
        .map(|(_, op)| *op)
}

/// Pointer gestures on the step affordances. Primary presses step by the
/// minor amount (hosts supply press-repeat); secondary presses jump to the
/// nearest bound. Gestures on the text box map to no operation.
pub fn operation_for_pointer(part: SpinnerPart, button: PointerButton) -> Option<SpinOperation> {
    match (part, button) {
        (SpinnerPart::IncreaseButton, PointerButton::Primary) => Some(SpinOperation::MinorIncrease),
        (SpinnerPart::IncreaseButton, PointerButton::Secondary) => Some(SpinOperation::JumpToMax),
        (SpinnerPart::DecreaseButton, PointerButton::Primary) => Some(SpinOperation::MinorDecrease),
        (SpinnerPart::DecreaseButton, PointerButton::Secondary) => Some(SpinOperation::JumpToMin),
        (SpinnerPart::TextBox, _) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_table_has_no_enter_binding() {
        assert_eq!(operation_for_key(INTEGER_KEY_BINDINGS, Key::Enter), None);
        assert_eq!(
            operation_for_key(NUMERIC_KEY_BINDINGS, Key::Enter),
            Some(SpinOperation::Commit)
        );
    }

    #[test]
    fn arrow_keys_step_by_minor_amount() {
        for bindings in [INTEGER_KEY_BINDINGS, NUMERIC_KEY_BINDINGS] {
            assert_eq!(
                operation_for_key(bindings, Key::Up),
                Some(SpinOperation::MinorIncrease)
            );
            assert_eq!(
                operation_for_key(bindings, Key::Down),
                Some(SpinOperation::MinorDecrease)
            );
            assert_eq!(
                operation_for_key(bindings, Key::PageUp),
                Some(SpinOperation::MajorIncrease)
            );
            assert_eq!(
                operation_for_key(bindings, Key::PageDown),
                Some(SpinOperation::MajorDecrease)
            );
        }
    }

    #[test]
    fn secondary_press_jumps_to_bound() {
        assert_eq!(
            operation_for_pointer(SpinnerPart::IncreaseButton, PointerButton::Secondary),
            Some(SpinOperation::JumpToMax)
        );
        assert_eq!(
            operation_for_pointer(SpinnerPart::DecreaseButton, PointerButton::Secondary),
            Some(SpinOperation::JumpToMin)
        );
        assert_eq!(
            operation_for_pointer(SpinnerPart::TextBox, PointerButton::Primary),
            None
        );
    }
}
