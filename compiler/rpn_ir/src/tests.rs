use super::format_number;
use pretty_assertions::assert_eq;

#[test]
fn test_format_number() {
    assert_eq!(format_number(3.0), "3.0");
    assert_eq!(format_number(-0.5), "-0.5");
    assert_eq!(format_number(0.1), "0.1");
    assert_eq!(format_number(1e20), "1e20");
}

#[test]
fn test_format_number_round_trips() {
    for value in [0.1, 1.0 / 3.0, 6.02e23, -1e-7, 123_456.789] {
        let text = format_number(value);
        assert_eq!(text.parse::<f64>().ok(), Some(value), "{text}");
    }
}
