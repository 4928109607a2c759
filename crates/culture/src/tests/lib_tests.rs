use std::str::FromStr;

use rust_decimal::Decimal;

use super::Culture;

fn dec(text: &str) -> Decimal {
    Decimal::from_str(text).expect("literal decimal")
}

#[test]
fn formats_integers_with_and_without_grouping() {
    let culture = Culture::en_us();
    assert_eq!(culture.format_integer(1234567, false), "1234567");
    assert_eq!(culture.format_integer(1234567, true), "1,234,567");
    assert_eq!(culture.format_integer(-1234567, true), "-1,234,567");
    assert_eq!(culture.format_integer(0, false), "0");
    assert_eq!(culture.format_integer(999, true), "999");
}

#[test]
fn grouping_handles_the_extreme_representable_value() {
    let culture = Culture::en_us();
    assert_eq!(
        culture.format_integer(i64::MIN, true),
        "-9,223,372,036,854,775,808"
    );
}

#[test]
fn german_grouping_swaps_separators() {
    let culture = Culture::de_de().with_fraction_digits(2);
    assert_eq!(culture.format_integer(1234567, true), "1.234.567");
    assert_eq!(culture.format_decimal(dec("1234.5"), true), "1.234,50");
}

#[test]
fn indian_grouping_repeats_the_last_size() {
    let culture = Culture::hi_in();
    assert_eq!(culture.format_integer(123456789, true), "12,34,56,789");
    assert_eq!(culture.format_integer(1234, true), "1,234");
}

#[test]
fn decimal_formatting_pads_to_fraction_digits() {
    let culture = Culture::en_us().with_fraction_digits(3);
    assert_eq!(culture.format_decimal(dec("1.2"), false), "1.200");
    assert_eq!(culture.format_decimal(dec("-1.2"), true), "-1.200");
    assert_eq!(culture.format_decimal(dec("0"), false), "0.000");
}

#[test]
fn zero_fraction_digits_renders_no_separator() {
    let culture = Culture::en_us().with_fraction_digits(0);
    assert_eq!(culture.format_decimal(dec("42"), false), "42");
    assert_eq!(culture.format_decimal(dec("1234"), true), "1,234");
}

#[test]
fn plain_render_preserves_scale_and_separator() {
    let culture = Culture::de_de();
    assert_eq!(culture.render_plain(dec("1.230")), "1,230");
    assert_eq!(culture.count_decimal_places("1,230"), 3);
    assert_eq!(culture.count_decimal_places("1230"), 0);
}

#[test]
fn truncation_is_a_character_cut_not_rounding() {
    let culture = Culture::en_us();
    assert_eq!(culture.truncate_decimal_text("1.239", 2), "1.23");
    assert_eq!(culture.truncate_decimal_text("1.239", 4), "1.239");
    assert_eq!(culture.truncate_decimal_text("-7.999", 1), "-7.9");
    assert_eq!(culture.truncate_decimal_text("1.2", 0), "1.");
}

#[test]
fn parses_integers_with_grouping_and_sign() {
    let culture = Culture::en_us();
    assert_eq!(culture.parse_integer("1,234,567"), 1234567);
    assert_eq!(culture.parse_integer("  42  "), 42);
    assert_eq!(culture.parse_integer("-1,234"), -1234);
    assert_eq!(culture.parse_integer("+7"), 7);
    assert_eq!(culture.parse_integer("1,23,4"), 1234);
}

#[test]
fn malformed_integers_parse_to_zero() {
    let culture = Culture::en_us();
    assert_eq!(culture.parse_integer("abc"), 0);
    assert_eq!(culture.parse_integer(""), 0);
    assert_eq!(culture.parse_integer("-"), 0);
    assert_eq!(culture.parse_integer(",123"), 0);
    assert_eq!(culture.parse_integer("123,"), 0);
    assert_eq!(culture.parse_integer("1,,2"), 0);
    assert_eq!(culture.parse_integer("12.5"), 0);
    assert_eq!(culture.parse_integer("99999999999999999999"), 0);
}

#[test]
fn parses_decimals_with_culture_separators() {
    let culture = Culture::en_us();
    assert_eq!(culture.parse_decimal("1,234.56"), dec("1234.56"));
    assert_eq!(culture.parse_decimal(".5"), dec("0.5"));
    assert_eq!(culture.parse_decimal("1."), dec("1"));
    assert_eq!(culture.parse_decimal("-0.25"), dec("-0.25"));

    let german = Culture::de_de();
    assert_eq!(german.parse_decimal("1.234,56"), dec("1234.56"));
}

#[test]
fn malformed_decimals_parse_to_zero() {
    let culture = Culture::en_us();
    assert_eq!(culture.parse_decimal("abc"), Decimal::ZERO);
    assert_eq!(culture.parse_decimal("."), Decimal::ZERO);
    assert_eq!(culture.parse_decimal("1.2.3"), Decimal::ZERO);
    assert_eq!(culture.parse_decimal("1.2,3"), Decimal::ZERO);
    assert_eq!(culture.parse_decimal(""), Decimal::ZERO);
}

#[test]
fn culture_tags_resolve_case_insensitively() {
    assert_eq!(Culture::from_str("DE-de").expect("tag"), Culture::de_de());
    assert_eq!(Culture::from_str("en").expect("tag"), Culture::en_us());
    assert!(Culture::from_str("xx-YY").is_err());
}
