//! Locale snapshot ("culture") plus the culture-aware numeric formatting and
//! parsing used by the spinner controllers.
//!
//! Controllers clone a `Culture` once at construction and keep it for their
//! lifetime; nothing here re-queries live locale state.

use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("unrecognized culture tag: {0}")]
pub struct CultureError(String);

/// Immutable-ish snapshot of the number-formatting rules of one locale.
///
/// `group_sizes` runs from the least significant group upward; the last size
/// repeats for all remaining digits, and a trailing 0 stops grouping
/// entirely (the CLDR/.NET convention).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Culture {
    decimal_separator: char,
    group_separator: char,
    group_sizes: Vec<u8>,
    fraction_digits: u32,
}

impl Default for Culture {
    fn default() -> Self {
        Self::en_us()
    }
}

impl Culture {
    pub fn new(decimal_separator: char, group_separator: char, group_sizes: Vec<u8>) -> Self {
        Self {
            decimal_separator,
            group_separator,
            group_sizes,
            fraction_digits: 2,
        }
    }

    pub fn en_us() -> Self {
        Self::new('.', ',', vec![3])
    }

    pub fn de_de() -> Self {
        Self::new(',', '.', vec![3])
    }

    pub fn fr_fr() -> Self {
        Self::new(',', '\u{a0}', vec![3])
    }

    /// Indian grouping: the least significant group of three, then twos.
    pub fn hi_in() -> Self {
        Self::new('.', ',', vec![3, 2])
    }

    pub fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    pub fn group_separator(&self) -> char {
        self.group_separator
    }

    pub fn fraction_digits(&self) -> u32 {
        self.fraction_digits
    }

    pub fn set_fraction_digits(&mut self, digits: u32) {
        self.fraction_digits = digits;
    }

    pub fn with_fraction_digits(mut self, digits: u32) -> Self {
        self.fraction_digits = digits;
        self
    }

    /// Render an integer, optionally with grouping separators.
    pub fn format_integer(&self, value: i64, grouped: bool) -> String {
        if !grouped {
            return value.to_string();
        }
        let digits = value.unsigned_abs().to_string();
        let grouped_digits = self.group_digits(&digits);
        if value < 0 {
            format!("-{grouped_digits}")
        } else {
            grouped_digits
        }
    }

    /// Render a decimal with exactly `fraction_digits` digits after the
    /// separator, optionally grouping the integer part. The stored value is
    /// already coerced to at most `fraction_digits` places, so this only ever
    /// pads; an over-long fraction is cut rather than rounded.
    pub fn format_decimal(&self, value: Decimal, grouped: bool) -> String {
        let plain = value.to_string();
        let (sign, unsigned) = match plain.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", plain.as_str()),
        };
        let (int_part, frac_part) = match unsigned.split_once('.') {
            Some((int_part, frac_part)) => (int_part, frac_part),
            None => (unsigned, ""),
        };

        let int_rendered = if grouped {
            self.group_digits(int_part)
        } else {
            int_part.to_string()
        };

        let digits = self.fraction_digits as usize;
        if digits == 0 {
            return format!("{sign}{int_rendered}");
        }

        let mut frac: String = frac_part.chars().take(digits).collect();
        while frac.len() < digits {
            frac.push('0');
        }
        format!("{sign}{int_rendered}{}{frac}", self.decimal_separator)
    }

    /// Scale-preserving render with no grouping, used as the input to
    /// decimal-place counting and truncation.
    pub fn render_plain(&self, value: Decimal) -> String {
        value
            .to_string()
            .replace('.', &self.decimal_separator.to_string())
    }

    /// Number of characters after the decimal separator (0 when absent).
    pub fn count_decimal_places(&self, text: &str) -> usize {
        text.chars()
            .skip_while(|c| *c != self.decimal_separator)
            .skip(1)
            .count()
    }

    /// Cut a plainly rendered decimal down to `keep_places` digits after the
    /// separator. A straight character cut: `"1.239"` kept at 2 places is
    /// `"1.23"`, never `"1.24"`.
    pub fn truncate_decimal_text(&self, text: &str, keep_places: u32) -> String {
        let places = self.count_decimal_places(text);
        if places <= keep_places as usize {
            return text.to_string();
        }
        let keep_chars = text.chars().count() - (places - keep_places as usize);
        text.chars().take(keep_chars).collect()
    }

    /// Total integer parse: leading/trailing whitespace, an optional leading
    /// sign, and grouping separators between digits are accepted. Anything
    /// else, including overflow, yields 0.
    pub fn parse_integer(&self, text: &str) -> i64 {
        self.try_parse_integer(text).unwrap_or(0)
    }

    /// Total decimal parse: the integer-parse grammar plus a single decimal
    /// separator; grouping is only valid before it. Failure yields 0.
    pub fn parse_decimal(&self, text: &str) -> Decimal {
        self.try_parse_decimal(text).unwrap_or(Decimal::ZERO)
    }

    fn try_parse_integer(&self, text: &str) -> Option<i64> {
        let (negative, digits) = self.scan_digits(text.trim(), false)?;
        let mut normalized = String::with_capacity(digits.len() + 1);
        if negative {
            normalized.push('-');
        }
        normalized.push_str(&digits);
        i64::from_str(&normalized).ok()
    }

    fn try_parse_decimal(&self, text: &str) -> Option<Decimal> {
        let trimmed = text.trim();
        let (int_text, frac_text) = match split_once_char(trimmed, self.decimal_separator) {
            Some((int_text, frac_text)) => (int_text, Some(frac_text)),
            None => (trimmed, None),
        };

        let (negative, int_digits) = self.scan_digits(int_text, frac_text.is_some())?;
        let frac_digits = match frac_text {
            Some(frac) => {
                if !frac.chars().all(|c| c.is_ascii_digit()) {
                    return None;
                }
                frac.to_string()
            }
            None => String::new(),
        };
        if int_digits.is_empty() && frac_digits.is_empty() {
            return None;
        }

        let mut normalized = String::with_capacity(int_digits.len() + frac_digits.len() + 2);
        if negative {
            normalized.push('-');
        }
        normalized.push_str(if int_digits.is_empty() {
            "0"
        } else {
            &int_digits
        });
        if !frac_digits.is_empty() {
            normalized.push('.');
            normalized.push_str(&frac_digits);
        }
        Decimal::from_str(&normalized).ok()
    }

    /// Scan an optional sign plus digits with embedded group separators.
    /// Separators must sit directly between two digits. With
    /// `allow_empty_digits` (the integer part of `".5"`), a bare sign or
    /// nothing at all is accepted and reported as zero digits.
    fn scan_digits(&self, text: &str, allow_empty_digits: bool) -> Option<(bool, String)> {
        let mut chars = text.chars().peekable();
        let negative = match chars.peek() {
            Some('-') => {
                chars.next();
                true
            }
            Some('+') => {
                chars.next();
                false
            }
            _ => false,
        };

        let mut digits = String::new();
        let mut pending_separator = false;
        for c in chars {
            if c.is_ascii_digit() {
                digits.push(c);
                pending_separator = false;
            } else if c == self.group_separator && !digits.is_empty() && !pending_separator {
                pending_separator = true;
            } else {
                return None;
            }
        }

        if pending_separator {
            return None;
        }
        if digits.is_empty() && !allow_empty_digits {
            return None;
        }
        Some((negative, digits))
    }

    fn group_digits(&self, digits: &str) -> String {
        if self.group_sizes.is_empty() {
            return digits.to_string();
        }

        let mut groups: Vec<&str> = Vec::new();
        let mut remaining = digits;
        let mut size_index = 0;
        loop {
            let size = self.group_sizes[size_index] as usize;
            if size == 0 || remaining.len() <= size {
                groups.push(remaining);
                break;
            }
            let split = remaining.len() - size;
            groups.push(&remaining[split..]);
            remaining = &remaining[..split];
            if size_index + 1 < self.group_sizes.len() {
                size_index += 1;
            }
        }

        groups.reverse();
        groups.join(&self.group_separator.to_string())
    }
}

impl FromStr for Culture {
    type Err = CultureError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.to_ascii_lowercase().as_str() {
            "en-us" | "en" => Ok(Self::en_us()),
            "de-de" | "de" => Ok(Self::de_de()),
            "fr-fr" | "fr" => Ok(Self::fr_fr()),
            "hi-in" | "hi" => Ok(Self::hi_in()),
            _ => Err(CultureError(tag.to_string())),
        }
    }
}

fn split_once_char(text: &str, separator: char) -> Option<(&str, &str)> {
    let index = text.find(separator)?;
    Some((&text[..index], &text[index + separator.len_utf8()..]))
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
