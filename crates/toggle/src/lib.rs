//! Toggle switch controller: checked state, pointer state machine, and the
//! per-state color scheme the host queries when painting.

use crossbeam_channel::{unbounded, Receiver, Sender};
use serde::Deserialize;
use shared::events::ControlEvent;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
}

/// Interaction state the color scheme is queried with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonState {
    pub visible: bool,
    pub enabled: bool,
    pub checked: bool,
    pub hovered: bool,
    pub pressed: bool,
}

impl Default for ButtonState {
    fn default() -> Self {
        Self {
            visible: true,
            enabled: true,
            checked: false,
            hovered: false,
            pressed: false,
        }
    }
}

/// Per-state colors; unset entries fall back along the chains below, so
/// `query` is total with any subset configured.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    pub disabled: Option<Rgba>,
    pub unchecked: Option<Rgba>,
    pub hovered: Option<Rgba>,
    pub pressed: Option<Rgba>,
    pub checked: Option<Rgba>,
    pub checked_hovered: Option<Rgba>,
    pub checked_pressed: Option<Rgba>,
}

impl ColorScheme {
    pub fn query(&self, state: ButtonState) -> Rgba {
        if !state.visible {
            return Rgba::TRANSPARENT;
        }
        if !state.enabled {
            return self.disabled();
        }
        match (state.checked, state.hovered, state.pressed) {
            (false, false, false) => self.unchecked(),
            (false, false, true) => self.pressed(),
            (false, true, false) => self.hovered(),
            (false, true, true) => self.pressed(),
            (true, false, false) => self.checked(),
            (true, false, true) => self.checked_pressed(),
            (true, true, false) => self.checked_hovered(),
            (true, true, true) => self.checked_pressed(),
        }
    }

    pub fn disabled(&self) -> Rgba {
        self.disabled.unwrap_or_else(|| self.unchecked())
    }

    pub fn unchecked(&self) -> Rgba {
        self.unchecked.unwrap_or(Rgba::BLACK)
    }

    pub fn hovered(&self) -> Rgba {
        self.hovered.unwrap_or_else(|| self.pressed())
    }

    pub fn pressed(&self) -> Rgba {
        self.pressed.unwrap_or_else(|| self.unchecked())
    }

    pub fn checked(&self) -> Rgba {
        self.checked.unwrap_or_else(|| self.unchecked())
    }

    pub fn checked_hovered(&self) -> Rgba {
        self.checked_hovered.unwrap_or_else(|| self.checked())
    }

    pub fn checked_pressed(&self) -> Rgba {
        self.checked_pressed.unwrap_or_else(|| self.pressed())
    }
}

/// The toggle control's value model. A press and release over the control
/// flips the checked state; disabled controls ignore pointer input.
#[derive(Debug, Default)]
pub struct ToggleSwitch {
    state: ButtonState,
    scheme: ColorScheme,
    subscribers: Vec<Sender<ControlEvent>>,
}

impl ToggleSwitch {
    pub fn new(scheme: ColorScheme) -> Self {
        Self {
            state: ButtonState::default(),
            scheme,
            subscribers: Vec::new(),
        }
    }

    pub fn state(&self) -> ButtonState {
        self.state
    }

    pub fn is_checked(&self) -> bool {
        self.state.checked
    }

    /// The color the host should paint for the current state.
    pub fn color(&self) -> Rgba {
        self.scheme.query(self.state)
    }

    pub fn subscribe(&mut self) -> Receiver<ControlEvent> {
        let (tx, rx) = unbounded();
        self.subscribers.push(tx);
        rx
    }

    pub fn set_checked(&mut self, checked: bool) {
        if self.state.checked == checked {
            return;
        }
        self.state.checked = checked;
        debug!(checked, "toggle state changed");
        self.subscribers
            .retain(|tx| tx.send(ControlEvent::ValueChanged).is_ok());
    }

    pub fn toggle(&mut self) {
        self.set_checked(!self.state.checked);
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.state.enabled = enabled;
        if !enabled {
            self.state.pressed = false;
        }
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.state.visible = visible;
    }

    pub fn pointer_entered(&mut self) {
        self.state.hovered = true;
    }

    pub fn pointer_left(&mut self) {
        self.state.hovered = false;
        self.state.pressed = false;
    }

    pub fn pointer_pressed(&mut self) {
        if self.state.enabled {
            self.state.pressed = true;
        }
    }

    pub fn pointer_released(&mut self) {
        if self.state.pressed {
            self.state.pressed = false;
            self.toggle();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_and_release_over_the_control_toggles() {
        let mut toggle = ToggleSwitch::default();
        let events = toggle.subscribe();

        toggle.pointer_entered();
        toggle.pointer_pressed();
        toggle.pointer_released();
        assert!(toggle.is_checked());
        assert_eq!(events.try_recv(), Ok(ControlEvent::ValueChanged));

        toggle.pointer_pressed();
        toggle.pointer_released();
        assert!(!toggle.is_checked());
    }

    #[test]
    fn leaving_mid_press_cancels_the_click() {
        let mut toggle = ToggleSwitch::default();
        toggle.pointer_entered();
        toggle.pointer_pressed();
        toggle.pointer_left();
        toggle.pointer_released();
        assert!(!toggle.is_checked());
    }

    #[test]
    fn disabled_controls_ignore_pointer_input() {
        let mut toggle = ToggleSwitch::default();
        toggle.set_enabled(false);
        toggle.pointer_pressed();
        toggle.pointer_released();
        assert!(!toggle.is_checked());
    }

    #[test]
    fn redundant_set_checked_emits_nothing() {
        let mut toggle = ToggleSwitch::default();
        let events = toggle.subscribe();
        toggle.set_checked(false);
        assert!(events.try_recv().is_err());
    }

    #[test]
    fn invisible_controls_paint_transparent() {
        let mut toggle = ToggleSwitch::default();
        toggle.set_visible(false);
        assert_eq!(toggle.color(), Rgba::TRANSPARENT);
    }

    #[test]
    fn checked_color_falls_back_through_the_chain() {
        let scheme = ColorScheme {
            checked: Some(Rgba::new(0.0, 1.0, 0.0, 1.0)),
            ..ColorScheme::default()
        };
        let mut toggle = ToggleSwitch::new(scheme);
        assert_eq!(toggle.color(), Rgba::BLACK);

        toggle.set_checked(true);
        assert_eq!(toggle.color(), Rgba::new(0.0, 1.0, 0.0, 1.0));

        // Hovered while checked falls back to the checked color.
        toggle.pointer_entered();
        assert_eq!(toggle.color(), Rgba::new(0.0, 1.0, 0.0, 1.0));
    }

    #[test]
    fn disabled_falls_back_to_the_unchecked_color() {
        let scheme = ColorScheme {
            unchecked: Some(Rgba::new(0.5, 0.5, 0.5, 1.0)),
            ..ColorScheme::default()
        };
        let mut toggle = ToggleSwitch::new(scheme);
        toggle.set_enabled(false);
        assert_eq!(toggle.color(), Rgba::new(0.5, 0.5, 0.5, 1.0));
    }
}
