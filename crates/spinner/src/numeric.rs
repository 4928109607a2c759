use crossbeam_channel::{unbounded, Receiver, Sender};
use culture::Culture;
use rust_decimal::Decimal;
use shared::{events::ControlEvent, input::SpinOperation};
use tracing::{debug, trace};

use crate::{
    bounds::Bounded,
    options::NumericOptions,
    surface::{CaretPolicy, TextSurface},
};

/// Upper limit on fraction digits; the representable scale of `Decimal`.
pub const MAX_FRACTION_DIGITS: u32 = 28;

/// Decimal spinner controller. Same contract as the integer variant, plus a
/// fraction-digit budget enforced by string-cut truncation, and deferred
/// commits: raw edits are only recorded until Enter or focus loss.
pub struct NumericSpinner {
    core: Bounded<Decimal>,
    decimal_places: u32,
    min_decimal_places: u32,
    max_decimal_places: u32,
    has_thousand_separator: bool,
    can_auto_select: bool,
    can_undo: bool,
    culture: Culture,
    text: String,
    surface: Option<Box<dyn TextSurface>>,
    subscribers: Vec<Sender<ControlEvent>>,
}

impl NumericSpinner {
    pub fn new(culture: Culture) -> Self {
        Self::with_options(NumericOptions::default(), culture)
    }

    pub fn with_options(options: NumericOptions, culture: Culture) -> Self {
        let mut spinner = Self {
            core: Bounded::new(),
            decimal_places: 0,
            min_decimal_places: 0,
            max_decimal_places: MAX_FRACTION_DIGITS,
            has_thousand_separator: options.has_thousand_separator,
            can_auto_select: options.can_auto_select,
            can_undo: options.can_undo,
            culture: culture.with_fraction_digits(0),
            text: String::new(),
            surface: None,
            subscribers: Vec::new(),
        };
        spinner.set_min_decimal_places(options.min_decimal_places);
        spinner.set_max_decimal_places(options.max_decimal_places);
        spinner.set_decimal_places(options.decimal_places);
        spinner.set_min_value(options.min_value);
        spinner.set_max_value(options.max_value);
        spinner.set_minor_step(options.minor_step);
        spinner.set_major_step(options.major_step);
        spinner.set_value(options.value);
        spinner
    }

    pub fn value(&self) -> Decimal {
        self.core.value()
    }

    pub fn min_value(&self) -> Decimal {
        self.core.min_value()
    }

    pub fn max_value(&self) -> Decimal {
        self.core.max_value()
    }

    pub fn minor_step(&self) -> Decimal {
        self.core.minor_step()
    }

    pub fn major_step(&self) -> Decimal {
        self.core.major_step()
    }

    pub fn decimal_places(&self) -> u32 {
        self.decimal_places
    }

    pub fn min_decimal_places(&self) -> u32 {
        self.min_decimal_places
    }

    pub fn max_decimal_places(&self) -> u32 {
        self.max_decimal_places
    }

    pub fn has_thousand_separator(&self) -> bool {
        self.has_thousand_separator
    }

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

    pub fn attach_surface(&mut self, mut surface: Box<dyn TextSurface>) {
        surface.set_undo_depth(1);
        surface.show_text(&self.text, CaretPolicy::Unchanged);
        self.surface = Some(surface);
    }

    /// Full value pipeline: clamp, cut overflowing fraction digits off the
    /// plain rendering (a character cut, never rounding), store whatever the
    /// cut re-parses to, render, push, notify. The caret is left alone; the
    /// decimal surface only repositions it on user edits.
    pub fn set_value(&mut self, value: Decimal) {
        let clamped = self.core.clamp(value);
        let stored = self.enforce_decimal_places(clamped);
        self.core.store(stored);
        self.text = self
            .culture
            .format_decimal(stored, self.has_thousand_separator);
        if let Some(surface) = self.surface.as_mut() {
            surface.show_text(&self.text, CaretPolicy::Unchanged);
        }
        self.notify();
    }

    fn enforce_decimal_places(&self, value: Decimal) -> Decimal {
        let plain = self.culture.render_plain(value);
        let places = self.culture.count_decimal_places(&plain);
        if places <= self.decimal_places as usize {
            return value;
        }
        let cut = self
            .culture
            .truncate_decimal_text(&plain, self.decimal_places);
        let reparsed = self.culture.parse_decimal(&cut);
        trace!(%value, %reparsed, "cut overflowing fraction digits");
        reparsed
    }

    pub fn set_min_value(&mut self, min_value: Decimal) {
        if self.core.set_min_value(min_value) {
            debug!(%min_value, "minimum crossed the value; forcing");
            self.set_value(min_value);
        }
    }

    pub fn set_max_value(&mut self, max_value: Decimal) {
        if self.core.set_max_value(max_value) {
            debug!(%max_value, "maximum crossed the value; forcing");
            self.set_value(max_value);
        }
    }

    pub fn set_minor_step(&mut self, step: Decimal) {
        self.core.set_minor_step(step);
    }

    pub fn set_major_step(&mut self, step: Decimal) {
        self.core.set_major_step(step);
    }

    /// Clamped into `[min_decimal_places, max_decimal_places]`; refreshes the
    /// culture snapshot's fraction digits and re-runs the value pipeline so
    /// the stored value and display text honor the new budget.
    pub fn set_decimal_places(&mut self, places: u32) {
        self.decimal_places = if places < self.min_decimal_places {
            self.min_decimal_places
        } else if places > self.max_decimal_places {
            self.max_decimal_places
        } else {
            places
        };
        self.culture.set_fraction_digits(self.decimal_places);
        self.set_value(self.core.value());
    }

    /// Clamped to the representable scale; dragging max below the current
    /// minimum lowers the minimum to match, then the decimal-place coercion
    /// (and through it the value coercion) reruns.
    pub fn set_max_decimal_places(&mut self, places: u32) {
        let places = places.min(MAX_FRACTION_DIGITS);
        if places < self.min_decimal_places {
            self.min_decimal_places = places;
        }
        self.max_decimal_places = places;
        self.set_decimal_places(self.decimal_places);
    }

    pub fn set_min_decimal_places(&mut self, places: u32) {
        let places = places.min(MAX_FRACTION_DIGITS);
        if places > self.max_decimal_places {
            self.max_decimal_places = places;
        }
        self.min_decimal_places = places;
        self.set_decimal_places(self.decimal_places);
    }

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

    /// Raw edits are recorded but not committed; the value updates on
    /// `commit` (Enter) or `focus_lost`.
    pub fn text_edited(&mut self, text: &str) {
        self.text = text.to_string();
    }

    pub fn focus_lost(&mut self) {
        self.commit();
    }

    pub fn commit(&mut self) {
        let parsed = self.culture.parse_decimal(&self.text);
        self.set_value(parsed);
    }

    pub fn increase(&mut self, minor: bool) {
        let current = self.culture.parse_decimal(&self.text);
        let next = self.core.increment_from(current, minor);
        self.set_value(next);
    }

    pub fn decrease(&mut self, minor: bool) {
        let current = self.culture.parse_decimal(&self.text);
        let next = self.core.decrement_from(current, minor);
        self.set_value(next);
    }

    pub fn jump_to_max(&mut self) {
        self.set_value(self.core.max_value());
    }

    pub fn jump_to_min(&mut self) {
        self.set_value(self.core.min_value());
    }

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
