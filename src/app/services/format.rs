//! Display formatting for the `uk-UA` locale, plus the lenient number
//! parsing used by the edit forms.

use chrono::{Datelike, NaiveDate};

/// Group separator used by the locale (no-break space)
const GROUP_SEPARATOR: char = '\u{a0}';
const DECIMAL_SEPARATOR: char = ',';

const MONTHS_GENITIVE: [&str; 12] = [
    "січня",
    "лютого",
    "березня",
    "квітня",
    "травня",
    "червня",
    "липня",
    "серпня",
    "вересня",
    "жовтня",
    "листопада",
    "грудня",
];

/// Two decimals with thousands grouping, e.g. `1 234 567,80`.
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let cents = (value.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut out = String::with_capacity(whole.len() + whole.len() / 3 + 4);
    if value < 0.0 && cents > 0 {
        out.push('-');
    }
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(digit);
    }
    out.push(DECIMAL_SEPARATOR);
    out.push_str(&format!("{:02}", fraction));
    out
}

/// `YYYY-MM-DD` rendered as day and month name, e.g. `15 березня`.
/// Anything that does not parse is returned unchanged.
pub fn format_day_month(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
        Ok(date) => format!("{} {}", date.day(), MONTHS_GENITIVE[date.month0() as usize]),
        Err(_) => raw.to_string(),
    }
}

/// Localized yes/no token for boolean values
pub fn flag_token(value: bool) -> &'static str {
    if value { "Так" } else { "Ні" }
}

/// Numeric form input. Accepts a comma as decimal separator and ignores
/// group spaces; anything unparsable becomes 0.
pub fn parse_number(raw: &str) -> f64 {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == DECIMAL_SEPARATOR { '.' } else { c })
        .collect();
    cleaned
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .unwrap_or(0.0)
}

/// Year form input; unparsable input becomes 0.
pub fn parse_year(raw: &str) -> i32 {
    raw.trim().parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_grouping() {
        assert_eq!(format_currency(0.0), "0,00");
        assert_eq!(format_currency(999.5), "999,50");
        assert_eq!(format_currency(1234.567), "1\u{a0}234,57");
        assert_eq!(format_currency(1234567.8), "1\u{a0}234\u{a0}567,80");
    }

    #[test]
    fn test_currency_negative_and_non_finite() {
        assert_eq!(format_currency(-15000.0), "-15\u{a0}000,00");
        assert_eq!(format_currency(-0.001), "0,00");
        assert_eq!(format_currency(f64::NAN), "NaN");
    }

    #[test]
    fn test_day_month() {
        assert_eq!(format_day_month("2024-03-15"), "15 березня");
        assert_eq!(format_day_month("2023-12-01"), "1 грудня");
        assert_eq!(format_day_month(" 2024-01-09 "), "9 січня");
    }

    #[test]
    fn test_malformed_date_falls_back_to_raw() {
        assert_eq!(format_day_month("кінець року"), "кінець року");
        assert_eq!(format_day_month("2024-13-40"), "2024-13-40");
        assert_eq!(format_day_month(""), "");
    }

    #[test]
    fn test_flag_token() {
        assert_eq!(flag_token(true), "Так");
        assert_eq!(flag_token(false), "Ні");
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("1500.5"), 1500.5);
        assert_eq!(parse_number(" 1\u{a0}234,57 "), 1234.57);
        assert_eq!(parse_number("12 000"), 12000.0);
        assert_eq!(parse_number("abc"), 0.0);
        assert_eq!(parse_number(""), 0.0);
        assert_eq!(parse_number("inf"), 0.0);
    }

    #[test]
    fn test_parse_year() {
        assert_eq!(parse_year("2024"), 2024);
        assert_eq!(parse_year(" 2025 "), 2025);
        assert_eq!(parse_year("двадцять"), 0);
    }
}
