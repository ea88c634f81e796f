use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Current instant as an RFC 3339 UTC string.
///
/// Timestamps live in the board document as plain strings so hand-edited
/// values survive round-trips untouched. Sub-second precision is kept:
/// repeated transitions into `done` must produce distinct `closed`
/// values.
#[must_use]
pub fn now() -> String {
    format_timestamp(OffsetDateTime::now_utc())
}

fn format_timestamp(ts: OffsetDateTime) -> String {
    ts.format(&Rfc3339)
        .unwrap_or_else(|_| ts.unix_timestamp().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn formats_rfc3339_utc() {
        let ts = datetime!(2024-01-01 00:00:00 UTC);
        assert_eq!(format_timestamp(ts), "2024-01-01T00:00:00Z");
    }

    #[test]
    fn now_is_parseable() {
        let stamp = now();
        assert!(OffsetDateTime::parse(&stamp, &Rfc3339).is_ok());
    }
}
