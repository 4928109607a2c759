//! Bounded value core shared by both spinner variants: clamping, the
//! min/max and minor/major mutual-adjustment invariants, and step
//! arithmetic.

use rust_decimal::Decimal;

/// Value types a spinner can hold. Step arithmetic saturates at the
/// representable range.
pub trait SpinValue: Copy + PartialOrd {
    const ZERO: Self;
    const MIN_REPR: Self;
    const MAX_REPR: Self;
    const DEFAULT_MINOR_STEP: Self;
    const DEFAULT_MAJOR_STEP: Self;

    fn saturating_add(self, rhs: Self) -> Self;
    fn saturating_sub(self, rhs: Self) -> Self;
}

impl SpinValue for i64 {
    const ZERO: Self = 0;
    const MIN_REPR: Self = i64::MIN;
    const MAX_REPR: Self = i64::MAX;
    const DEFAULT_MINOR_STEP: Self = 1;
    const DEFAULT_MAJOR_STEP: Self = 10;

    fn saturating_add(self, rhs: Self) -> Self {
        i64::saturating_add(self, rhs)
    }

    fn saturating_sub(self, rhs: Self) -> Self {
        i64::saturating_sub(self, rhs)
    }
}

impl SpinValue for Decimal {
    const ZERO: Self = Decimal::ZERO;
    const MIN_REPR: Self = Decimal::MIN;
    const MAX_REPR: Self = Decimal::MAX;
    const DEFAULT_MINOR_STEP: Self = Decimal::ONE;
    const DEFAULT_MAJOR_STEP: Self = Decimal::TEN;

    fn saturating_add(self, rhs: Self) -> Self {
        self.checked_add(rhs).unwrap_or(if rhs >= Decimal::ZERO {
            Decimal::MAX
        } else {
            Decimal::MIN
        })
    }

    fn saturating_sub(self, rhs: Self) -> Self {
        self.checked_sub(rhs).unwrap_or(if rhs >= Decimal::ZERO {
            Decimal::MIN
        } else {
            Decimal::MAX
        })
    }
}

/// A value held inside an inclusive `[min_value, max_value]` interval with
/// minor/major step amounts. Setters normalize instead of rejecting:
/// a bound crossing its companion bound shifts the companion, and only then
/// is a bound crossing the value reported to the caller.
#[derive(Debug, Clone, Copy)]
pub struct Bounded<T: SpinValue> {
    value: T,
    min_value: T,
    max_value: T,
    minor_step: T,
    major_step: T,
}

impl<T: SpinValue> Default for Bounded<T> {
    fn default() -> Self {
        Self {
            value: T::ZERO,
            min_value: T::MIN_REPR,
            max_value: T::MAX_REPR,
            minor_step: T::DEFAULT_MINOR_STEP,
            major_step: T::DEFAULT_MAJOR_STEP,
        }
    }
}

impl<T: SpinValue> Bounded<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> T {
        self.value
    }

    pub fn min_value(&self) -> T {
        self.min_value
    }

    pub fn max_value(&self) -> T {
        self.max_value
    }

    pub fn minor_step(&self) -> T {
        self.minor_step
    }

    pub fn major_step(&self) -> T {
        self.major_step
    }

    pub fn clamp(&self, value: T) -> T {
        if value < self.min_value {
            self.min_value
        } else if value > self.max_value {
            self.max_value
        } else {
            value
        }
    }

    /// Clamp and store. Returns the stored value.
    pub fn set_value(&mut self, value: T) -> T {
        self.value = self.clamp(value);
        self.value
    }

    /// Store without clamping. The decimal controller uses this after its
    /// string-cut coercion, whose result is not re-clamped.
    pub(crate) fn store(&mut self, value: T) {
        self.value = value;
    }

    /// Returns true when the new bound crossed the current value, i.e. the
    /// caller must force the value to the bound through its value pipeline.
    pub fn set_min_value(&mut self, min_value: T) -> bool {
        self.min_value = min_value;
        if self.min_value > self.max_value {
            self.max_value = self.min_value;
        }
        min_value >= self.value
    }

    pub fn set_max_value(&mut self, max_value: T) -> bool {
        self.max_value = max_value;
        if self.max_value < self.min_value {
            self.min_value = self.max_value;
        }
        max_value <= self.value
    }

    pub fn set_minor_step(&mut self, step: T) {
        self.minor_step = step;
        if step > self.major_step {
            self.major_step = step;
        }
    }

    pub fn set_major_step(&mut self, step: T) {
        self.major_step = step;
        if step < self.minor_step {
            self.minor_step = step;
        }
    }

    pub fn step(&self, minor: bool) -> T {
        if minor {
            self.minor_step
        } else {
            self.major_step
        }
    }

    pub fn can_increase(&self) -> bool {
        self.value < self.max_value
    }

    pub fn can_decrease(&self) -> bool {
        self.value > self.min_value
    }

    /// Step up from an arbitrary (typically freshly parsed) value. The input
    /// is clamped first; the step is only added while the clamped value sits
    /// strictly below the upper bound, so an at-bound input comes back
    /// unchanged and merely re-clamped.
    pub fn increment_from(&self, current: T, minor: bool) -> T {
        let current = self.clamp(current);
        if current < self.max_value {
            current.saturating_add(self.step(minor))
        } else {
            current
        }
    }

    pub fn decrement_from(&self, current: T, minor: bool) -> T {
        let current = self.clamp(current);
        if current > self.min_value {
            current.saturating_sub(self.step(minor))
        } else {
            current
        }
    }
}
