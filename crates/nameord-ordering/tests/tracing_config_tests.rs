use super::*;

#[test]
fn log_format_parses_known_names() {
    assert_eq!(LogFormat::parse("tree"), LogFormat::Tree);
    assert_eq!(LogFormat::parse("JSON"), LogFormat::Json);
    assert_eq!(LogFormat::parse(" text "), LogFormat::Text);
}

#[test]
fn log_format_defaults_to_text() {
    assert_eq!(LogFormat::parse(""), LogFormat::Text);
    assert_eq!(LogFormat::parse("yaml"), LogFormat::Text);
}

#[test]
fn init_tracing_can_be_called_repeatedly() {
    init_tracing();
    init_tracing();
}
