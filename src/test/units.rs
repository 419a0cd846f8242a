use crate::err::ParseError;
use crate::units::parse_file_size;

#[test]
fn parses_supported_units() {
    assert_eq!(parse_file_size("10B"), Ok(10));
    assert_eq!(parse_file_size("10KB"), Ok(10 * 1024));
    assert_eq!(parse_file_size("10MB"), Ok(10 * 1024 * 1024));
    assert_eq!(parse_file_size("1MB"), Ok(1_048_576));
}

#[test]
fn rejects_unsupported_unit_instead_of_truncating() {
    assert_eq!(
        parse_file_size("10GB"),
        Err(ParseError::UnsupportedUnit("GB".into()))
    );
    assert_eq!(
        parse_file_size("10"),
        Err(ParseError::UnsupportedUnit("".into()))
    );
}

#[test]
fn rejects_malformed_size_strings() {
    assert_eq!(parse_file_size("MB"), Err(ParseError::Malformed("MB".into())));
    assert_eq!(parse_file_size(""), Err(ParseError::Malformed("".into())));
    assert!(parse_file_size("999999999999999999999MB").is_err());
}
