//! Date helper functions

use chrono::{DateTime, Datelike, TimeZone};

const MONTHS_EN: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const MONTHS_PT_BR: [&str; 12] = [
    "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
];

/// Abbreviated month name in the given locale (1-based month)
pub fn month_abbrev(locale: &str, month: u32) -> &'static str {
    let table = match locale {
        "pt-BR" | "pt" => &MONTHS_PT_BR,
        _ => &MONTHS_EN,
    };
    table[(month as usize - 1).min(11)]
}

/// Format a date using DD / MM / MMM / YYYY tokens in the given locale
///
/// # Examples
/// ```ignore
/// format_date(&date, "DD MMM YYYY", "pt-BR") // -> "15 mar 2021"
/// ```
pub fn format_date<Tz: TimeZone>(date: &DateTime<Tz>, format: &str, locale: &str) -> String {
    // MMM goes first so the leftover MM token never eats its characters
    format
        .replace("YYYY", &format!("{:04}", date.year()))
        .replace("MMM", month_abbrev(locale, date.month()))
        .replace("MM", &format!("{:02}", date.month()))
        .replace("DD", &format!("{:02}", date.day()))
}

/// Format an optional publication date, blank when absent
pub fn format_optional_date<Tz: TimeZone>(
    date: Option<&DateTime<Tz>>,
    format: &str,
    locale: &str,
) -> String {
    date.map(|d| format_date(d, format, locale)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn date(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    #[test]
    fn test_format_date_pt_br() {
        let d = date("2021-03-15T19:25:28+00:00");
        assert_eq!(format_date(&d, "DD MMM YYYY", "pt-BR"), "15 mar 2021");
    }

    #[test]
    fn test_format_date_en() {
        let d = date("2021-03-15T19:25:28+00:00");
        assert_eq!(format_date(&d, "DD MMM YYYY", "en"), "15 Mar 2021");
    }

    #[test]
    fn test_format_date_numeric_tokens() {
        let d = date("2021-03-05T00:00:00+00:00");
        assert_eq!(format_date(&d, "YYYY-MM-DD", "en"), "2021-03-05");
    }

    #[test]
    fn test_format_optional_date_blank_when_absent() {
        let none: Option<&DateTime<FixedOffset>> = None;
        assert_eq!(format_optional_date(none, "DD MMM YYYY", "pt-BR"), "");
    }

    #[test]
    fn test_month_abbrev_locales() {
        assert_eq!(month_abbrev("pt-BR", 2), "fev");
        assert_eq!(month_abbrev("en", 2), "Feb");
        // unknown locales fall back to English
        assert_eq!(month_abbrev("fr", 2), "Feb");
    }
}
