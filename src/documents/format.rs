//! Display formatting helpers shared by the templates.

use chrono::NaiveDate;

/// Format an amount as US dollars, e.g. `$49,400.00` or `-$5.25`.
pub fn format_currency(value: f64) -> String {
    let cents = (value * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    let dollars = (cents / 100).to_string();

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, ch) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}${grouped}.{:02}", cents % 100)
}

/// Long US date, e.g. `October 16, 2026`.
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Lowercase ASCII alphanumerics only, everything else dropped.
pub fn compact_slug(value: &str, fallback: &str) -> String {
    let slug: String = value
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect();

    if slug.is_empty() {
        fallback.to_string()
    } else {
        slug
    }
}

/// Email local part from a person's name: lowercase words joined by dots.
pub fn email_local_part(name: &str) -> String {
    let words: Vec<String> = name
        .split_whitespace()
        .map(|w| compact_slug(w, ""))
        .filter(|w| !w.is_empty())
        .collect();

    if words.is_empty() {
        "staff".to_string()
    } else {
        words.join(".")
    }
}

/// Last four characters of an identifier, or `fallback` when it is shorter.
pub fn last_four(value: &str, fallback: &str) -> String {
    let chars: Vec<char> = value.trim().chars().collect();
    if chars.len() < 4 {
        return fallback.to_string();
    }
    chars[chars.len() - 4..].iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(49_400.0), "$49,400.00");
        assert_eq!(format_currency(1_234_567.891), "$1,234,567.89");
        assert_eq!(format_currency(-5.25), "-$5.25");
    }

    #[test]
    fn test_format_long_date() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_eq!(format_long_date(date), "March 7, 2026");
    }

    #[test]
    fn test_compact_slug() {
        assert_eq!(compact_slug("Acme Widgets, Inc.", "org"), "acmewidgetsinc");
        assert_eq!(compact_slug("!!!", "org"), "org");
    }

    #[test]
    fn test_email_local_part() {
        assert_eq!(email_local_part("Jane  Q. Doe"), "jane.q.doe");
        assert_eq!(email_local_part(""), "staff");
    }

    #[test]
    fn test_last_four() {
        assert_eq!(last_four("EMP-004821", "1234"), "4821");
        assert_eq!(last_four("42", "1234"), "1234");
    }
}
