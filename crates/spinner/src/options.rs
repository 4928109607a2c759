//! Deserializable construction options so hosts can load control defaults
//! from configuration. Options are applied through the regular setters, so
//! inconsistent files are normalized rather than rejected.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::bounds::SpinValue;
use crate::numeric::MAX_FRACTION_DIGITS;

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpinnerOptions {
    pub value: i64,
    pub min_value: i64,
    pub max_value: i64,
    pub minor_step: i64,
    pub major_step: i64,
    pub has_thousand_separator: bool,
    pub can_auto_select: bool,
    pub can_undo: bool,
}

impl Default for SpinnerOptions {
    fn default() -> Self {
        Self {
            value: 0,
            min_value: i64::MIN_REPR,
            max_value: i64::MAX_REPR,
            minor_step: i64::DEFAULT_MINOR_STEP,
            major_step: i64::DEFAULT_MAJOR_STEP,
            has_thousand_separator: false,
            can_auto_select: false,
            can_undo: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NumericOptions {
    pub value: Decimal,
    pub min_value: Decimal,
    pub max_value: Decimal,
    pub minor_step: Decimal,
    pub major_step: Decimal,
    pub decimal_places: u32,
    pub min_decimal_places: u32,
    pub max_decimal_places: u32,
    pub has_thousand_separator: bool,
    pub can_auto_select: bool,
    pub can_undo: bool,
}

impl Default for NumericOptions {
    fn default() -> Self {
        Self {
            value: Decimal::ZERO,
            min_value: Decimal::MIN_REPR,
            max_value: Decimal::MAX_REPR,
            minor_step: Decimal::DEFAULT_MINOR_STEP,
            major_step: Decimal::DEFAULT_MAJOR_STEP,
            decimal_places: 0,
            min_decimal_places: 0,
            max_decimal_places: MAX_FRACTION_DIGITS,
            has_thousand_separator: false,
            can_auto_select: false,
            can_undo: false,
        }
    }
}
