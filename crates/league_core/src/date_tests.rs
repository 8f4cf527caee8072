use super::*;
use chrono::Timelike;

#[test]
fn test_parse_resolves_to_midnight() {
    let date = parse_match_date("2025-05-20").unwrap();
    assert_eq!(date.to_string(), "2025-05-20 00:00:00");
    assert_eq!(date.hour(), 0);
    assert_eq!(date.minute(), 0);
}

#[test]
fn test_parse_accepts_unpadded_fields() {
    let padded = parse_match_date("2025-05-02").unwrap();
    let unpadded = parse_match_date("2025-5-2").unwrap();
    assert_eq!(padded, unpadded);
}

#[test]
fn test_parse_rejects_out_of_range() {
    let err = parse_match_date("2025-13-40").unwrap_err();
    assert!(matches!(err, LeagueError::InvalidDate(ref s) if s == "2025-13-40"));
}

#[test]
fn test_parse_rejects_other_formats() {
    for text in [
        "20/05/2025",
        "2025-02-30",
        "yesterday",
        "",
        "2025-05-20T10:00:00",
        "25-05-20",
        "0-1-1",
        "-0001-01-01",
        "+2025-05-20",
        " 2025-05-20",
        "2025-05-20 ",
        "12025-05-20",
        "2025-005-20",
        "2025-05-+2",
    ] {
        assert!(parse_match_date(text).is_err(), "{text} should be rejected");
    }
}

#[test]
fn test_parse_keeps_four_digit_year() {
    let date = parse_match_date("0999-1-9").unwrap();
    assert_eq!(date.to_string(), "0999-01-09 00:00:00");
}
