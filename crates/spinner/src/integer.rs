use crossbeam_channel::{unbounded, Receiver, Sender};
use culture::Culture;
use shared::{events::ControlEvent, input::SpinOperation};
use tracing::{debug, trace};

use crate::{
    bounds::Bounded,
    options::SpinnerOptions,
    surface::{CaretPolicy, TextSurface},
};

/// Integer spinner controller. Holds the bounded value, mirrors the raw text
/// of the host's edit surface, and commits on every reported keystroke.
pub struct IntegerSpinner {
    core: Bounded<i64>,
    has_thousand_separator: bool,
    can_auto_select: bool,
    can_undo: bool,
    culture: Culture,
    text: String,
    surface: Option<Box<dyn TextSurface>>,
    subscribers: Vec<Sender<ControlEvent>>,
}

impl IntegerSpinner {
    pub fn new(culture: Culture) -> Self {
        Self::with_options(SpinnerOptions::default(), culture)
    }

    /// Options go through the regular setters, so an inconsistent set is
    /// normalized exactly as live mutations would be.
    pub fn with_options(options: SpinnerOptions, culture: Culture) -> Self {
        let mut spinner = Self {
            core: Bounded::new(),
            has_thousand_separator: options.has_thousand_separator,
            can_auto_select: options.can_auto_select,
            can_undo: options.can_undo,
            culture: culture.with_fraction_digits(0),
            text: String::new(),
            surface: None,
            subscribers: Vec::new(),
        };
        spinner.set_min_value(options.min_value);
        spinner.set_max_value(options.max_value);
        spinner.set_minor_step(options.minor_step);
        spinner.set_major_step(options.major_step);
        spinner.set_value(options.value);
        spinner
    }

    pub fn value(&self) -> i64 {
        self.core.value()
    }

    pub fn min_value(&self) -> i64 {
        self.core.min_value()
    }

    pub fn max_value(&self) -> i64 {
        self.core.max_value()
    }

    pub fn minor_step(&self) -> i64 {
        self.core.minor_step()
    }

    pub fn major_step(&self) -> i64 {
        self.core.major_step()
    }

    pub fn has_thousand_separator(&self) -> bool {
        self.has_thousand_separator
    }

    /// The formatted text last pushed to the surface, or the raw text of an
    /// edit in flight.
    pub fn display_text(&self) -> &str {
        &self.text
    }

    pub fn can_increase(&self) -> bool {
        self.core.can_increase()
    }

    pub fn can_decrease(&self) -> bool {
        self.core.can_decrease()
    }

    pub fn subscribe(&mut self) -> Receiver<ControlEvent> {
        let (tx, rx) = unbounded();
        self.subscribers.push(tx);
        rx
    }

    /// Adopt the host's edit surface: fix its undo depth at one step and
    /// push the current display text.
    pub fn attach_surface(&mut self, mut surface: Box<dyn TextSurface>) {
        surface.set_undo_depth(1);
        surface.show_text(&self.text, CaretPolicy::End);
        self.surface = Some(surface);
    }

    /// Full value pipeline: clamp, store, render, push to the surface with
    /// the caret at end-of-text, notify.
    pub fn set_value(&mut self, value: i64) {
        let stored = self.core.set_value(value);
        if stored != value {
            trace!(requested = value, stored, "clamped value into bounds");
        }
        self.text = self
            .culture
            .format_integer(stored, self.has_thousand_separator);
        if let Some(surface) = self.surface.as_mut() {
            surface.show_text(&self.text, CaretPolicy::End);
        }
        self.notify();
    }

    pub fn set_min_value(&mut self, min_value: i64) {
        if self.core.set_min_value(min_value) {
            debug!(min_value, "minimum crossed the value; forcing");
            self.set_value(min_value);
        }
    }

    pub fn set_max_value(&mut self, max_value: i64) {
        if self.core.set_max_value(max_value) {
            debug!(max_value, "maximum crossed the value; forcing");
            self.set_value(max_value);
        }
    }

    pub fn set_minor_step(&mut self, step: i64) {
        self.core.set_minor_step(step);
    }

    pub fn set_major_step(&mut self, step: i64) {
        self.core.set_major_step(step);
    }

    /// Re-renders the display text through the value pipeline.
    pub fn set_has_thousand_separator(&mut self, enabled: bool) {
        self.has_thousand_separator = enabled;
        self.set_value(self.core.value());
    }

    pub fn set_can_auto_select(&mut self, enabled: bool) {
        self.can_auto_select = enabled;
    }

    pub fn set_can_undo(&mut self, enabled: bool) {
        self.can_undo = enabled;
    }

    /// The integer variant commits on every keystroke the host reports.
    pub fn text_edited(&mut self, text: &str) {
        self.text = text.to_string();
        self.commit();
    }

    pub fn commit(&mut self) {
        let parsed = self.culture.parse_integer(&self.text);
        self.set_value(parsed);
    }

    pub fn increase(&mut self, minor: bool) {
        let current = self.culture.parse_integer(&self.text);
        let next = self.core.increment_from(current, minor);
        self.set_value(next);
    }

    pub fn decrease(&mut self, minor: bool) {
        let current = self.culture.parse_integer(&self.text);
        let next = self.core.decrement_from(current, minor);
        self.set_value(next);
    }

    pub fn jump_to_max(&mut self) {
        self.set_value(self.core.max_value());
    }

    pub fn jump_to_min(&mut self) {
        self.set_value(self.core.min_value());
    }

    /// Forward a one-step undo to the surface when undo is enabled.
    pub fn cancel(&mut self) {
        if !self.can_undo {
            return;
        }
        if let Some(surface) = self.surface.as_mut() {
            surface.undo();
        }
    }

    pub fn pointer_released(&mut self) {
        if !self.can_auto_select {
            return;
        }
        if let Some(surface) = self.surface.as_mut() {
            surface.select_all();
        }
    }

    pub fn apply(&mut self, operation: SpinOperation) {
        match operation {
            SpinOperation::MinorIncrease => self.increase(true),
            SpinOperation::MinorDecrease => self.decrease(true),
            SpinOperation::MajorIncrease => self.increase(false),
            SpinOperation::MajorDecrease => self.decrease(false),
            SpinOperation::JumpToMax => self.jump_to_max(),
            SpinOperation::JumpToMin => self.jump_to_min(),
            SpinOperation::Commit => self.commit(),
            SpinOperation::Cancel => self.cancel(),
        }
    }

    fn notify(&mut self) {
        self.subscribers
            .retain(|tx| tx.send(ControlEvent::ValueChanged).is_ok());
    }
}
