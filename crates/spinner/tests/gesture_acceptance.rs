//! End-to-end: a host-style text surface plus the explicit gesture tables
//! driving both spinner variants.

use std::{cell::RefCell, rc::Rc, str::FromStr};

use culture::Culture;
use rust_decimal::Decimal;
use shared::input::{
    operation_for_key, operation_for_pointer, Key, PointerButton, SpinnerPart,
    INTEGER_KEY_BINDINGS, NUMERIC_KEY_BINDINGS,
};
use spinner::{CaretPolicy, IntegerSpinner, NumericSpinner, SpinnerOptions, TextSurface};

/// Line-buffer surface with the single-step undo history the controllers
/// request at attach time.
#[derive(Default)]
struct BufferState {
    text: String,
    previous: Option<String>,
    undo_depth: usize,
}

#[derive(Clone, Default)]
struct BufferSurface(Rc<RefCell<BufferState>>);

impl BufferSurface {
    fn text(&self) -> String {
        self.0.borrow().text.clone()
    }
}

impl TextSurface for BufferSurface {
    fn show_text(&mut self, text: &str, _caret: CaretPolicy) {
        let mut state = self.0.borrow_mut();
        if state.undo_depth > 0 {
            state.previous = Some(state.text.clone());
        }
        state.text = text.to_string();
    }

    fn select_all(&mut self) {}

    fn set_undo_depth(&mut self, depth: usize) {
        self.0.borrow_mut().undo_depth = depth;
    }

    fn undo(&mut self) {
        let mut state = self.0.borrow_mut();
        if let Some(previous) = state.previous.take() {
            state.text = previous;
        }
    }
}

fn dec(text: &str) -> Decimal {
    Decimal::from_str(text).expect("literal decimal")
}

#[test]
fn integer_spinner_walks_to_its_maximum_under_key_gestures() {
    let options = SpinnerOptions {
        min_value: 0,
        max_value: 10,
        minor_step: 1,
        major_step: 5,
        ..SpinnerOptions::default()
    };
    let mut spinner = IntegerSpinner::with_options(options, Culture::en_us());
    let surface = BufferSurface::default();
    spinner.attach_surface(Box::new(surface.clone()));
    let events = spinner.subscribe();

    spinner.set_value(9);
    let up = operation_for_key(INTEGER_KEY_BINDINGS, Key::Up).expect("binding");
    spinner.apply(up);
    assert_eq!(spinner.value(), 10);
    assert_eq!(surface.text(), "10");

    // Held past the bound: no further addition, but the pipeline re-runs.
    spinner.apply(up);
    assert_eq!(spinner.value(), 10);
    assert!(events.try_iter().count() >= 3);
}

#[test]
fn secondary_pointer_press_jumps_to_the_bound() {
    let options = SpinnerOptions {
        min_value: -5,
        max_value: 50,
        ..SpinnerOptions::default()
    };
    let mut spinner = IntegerSpinner::with_options(options, Culture::en_us());

    let jump = operation_for_pointer(SpinnerPart::IncreaseButton, PointerButton::Secondary)
        .expect("gesture");
    spinner.apply(jump);
    assert_eq!(spinner.value(), 50);

    let jump = operation_for_pointer(SpinnerPart::DecreaseButton, PointerButton::Secondary)
        .expect("gesture");
    spinner.apply(jump);
    assert_eq!(spinner.value(), -5);
}

#[test]
fn decimal_edit_commits_on_enter_and_cancels_through_undo() {
    let mut spinner = NumericSpinner::new(Culture::en_us());
    spinner.set_decimal_places(2);
    spinner.set_can_undo(true);
    let surface = BufferSurface::default();
    spinner.attach_surface(Box::new(surface.clone()));

    spinner.set_value(dec("2.5"));
    assert_eq!(surface.text(), "2.50");

    spinner.text_edited("9.875");
    let enter = operation_for_key(NUMERIC_KEY_BINDINGS, Key::Enter).expect("binding");
    spinner.apply(enter);
    assert_eq!(spinner.value(), dec("9.87"));
    assert_eq!(surface.text(), "9.87");

    let escape = operation_for_key(NUMERIC_KEY_BINDINGS, Key::Escape).expect("binding");
    spinner.apply(escape);
    assert_eq!(surface.text(), "2.50");
}
