//! Cross-source date normalization.
//!
//! Feed dialects disagree about timestamp formats, so parsing is a fixed
//! priority chain: RFC 822 with a numeric zone offset, RFC 2822 with a named
//! zone abbreviation, then RFC 3339 for Atom-flavored feeds. The first parser
//! that succeeds wins.
//!
//! Unparsable input (including the empty string) normalizes to the Unix
//! epoch instead of failing, which sorts such items oldest. That is a
//! deliberately coarse compatibility policy: a date in an unanticipated
//! locale format will be misordered rather than rejected.

use chrono::{DateTime, FixedOffset, Utc};

type DateParser = fn(&str) -> Option<DateTime<FixedOffset>>;

const PARSERS: &[DateParser] = &[parse_rfc822_numeric, parse_rfc2822_named, parse_rfc3339];

/// Parse a feed timestamp into a comparable instant. Never fails; anything
/// that no parser in the chain accepts becomes the epoch origin.
pub fn normalize(text: &str) -> DateTime<Utc> {
    let trimmed = text.trim();
    PARSERS
        .iter()
        .find_map(|parse| parse(trimmed))
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or(DateTime::UNIX_EPOCH)
}

/// `Wed, 02 Oct 2002 13:00:00 +0200`
fn parse_rfc822_numeric(text: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_str(text, "%a, %d %b %Y %H:%M:%S %z").ok()
}

/// `Wed, 02 Oct 2002 13:00:00 GMT` — chrono's RFC 2822 parser accepts the
/// obsolete named zone abbreviations.
fn parse_rfc2822_named(text: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc2822(text).ok()
}

/// `2002-10-02T13:00:00+02:00`
fn parse_rfc3339(text: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(text).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_numeric_zone_offset() {
        let dt = normalize("Wed, 02 Oct 2002 13:00:00 +0200");
        assert_eq!(dt, Utc.with_ymd_and_hms(2002, 10, 2, 11, 0, 0).unwrap());
    }

    #[test]
    fn parses_named_zone_abbreviation() {
        let dt = normalize("Wed, 02 Oct 2002 13:00:00 GMT");
        assert_eq!(dt, Utc.with_ymd_and_hms(2002, 10, 2, 13, 0, 0).unwrap());

        let est = normalize("Wed, 02 Oct 2002 13:00:00 EST");
        assert_eq!(est, Utc.with_ymd_and_hms(2002, 10, 2, 18, 0, 0).unwrap());
    }

    #[test]
    fn parses_iso8601_colon_offset() {
        let dt = normalize("2002-10-02T13:00:00+02:00");
        assert_eq!(dt, Utc.with_ymd_and_hms(2002, 10, 2, 11, 0, 0).unwrap());
    }

    #[test]
    fn unparsable_falls_back_to_epoch() {
        assert_eq!(normalize("not a date"), DateTime::UNIX_EPOCH);
        assert_eq!(normalize(""), DateTime::UNIX_EPOCH);
        assert_eq!(normalize("not a date"), normalize(""));
    }

    #[test]
    fn epoch_sorts_last_in_descending_order() {
        let mut dates = vec![
            normalize("garbage"),
            normalize("Wed, 02 Oct 2002 13:00:00 GMT"),
        ];
        dates.sort_by(|a, b| b.cmp(a));
        assert_eq!(dates[1], DateTime::UNIX_EPOCH);
    }
}
