use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Accepted datetime forms for the install/retrieval prompts, most specific
/// first. The `T` variants match what browser datetime-local controls emit.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

const EDIT_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Permissive date parsing for free-text date fields. A bare date reads as
/// midnight; anything unparseable comes back as None and clears the field
/// rather than raising an error.
pub fn parse_date_input(input: &str) -> Option<NaiveDateTime> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    for format in DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(parsed);
        }
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN))
}

/// Inverse of `parse_date_input` for seeding edit prompts.
pub fn format_date_input(ts: NaiveDateTime) -> String {
    ts.format(EDIT_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn parse_date_input_accepts_datetime_local_form() {
        assert_eq!(
            parse_date_input("2024-03-15T08:30"),
            Some(at(2024, 3, 15, 8, 30, 0))
        );
        assert_eq!(
            parse_date_input("2024-03-15T08:30:45"),
            Some(at(2024, 3, 15, 8, 30, 45))
        );
    }

    #[test]
    fn parse_date_input_accepts_space_separator_and_bare_date() {
        assert_eq!(
            parse_date_input("2024-03-15 08:30"),
            Some(at(2024, 3, 15, 8, 30, 0))
        );
        assert_eq!(parse_date_input("2024-03-15"), Some(at(2024, 3, 15, 0, 0, 0)));
    }

    #[test]
    fn parse_date_input_trims_whitespace() {
        assert_eq!(
            parse_date_input("  2024-03-15T08:30  "),
            Some(at(2024, 3, 15, 8, 30, 0))
        );
    }

    #[test]
    fn parse_date_input_rejects_garbage_without_error() {
        assert_eq!(parse_date_input(""), None);
        assert_eq!(parse_date_input("   "), None);
        assert_eq!(parse_date_input("not a date"), None);
        assert_eq!(parse_date_input("2024-13-40"), None);
    }

    #[test]
    fn format_date_input_round_trips() {
        let ts = at(2024, 3, 15, 8, 30, 0);
        assert_eq!(parse_date_input(&format_date_input(ts)), Some(ts));
    }
}
