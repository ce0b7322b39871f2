use crate::grammar::{Grammar, MatchMode};
use pretty_assertions::assert_eq;

const LINE: &str = "[Tue Oct 10 14:22:01.123456 2023] [core:error] [pid 4321] [client 192.168.1.5:54321] File does not exist: /var/www/favicon.ico";

#[test]
fn error_line_yields_every_mandatory_field() {
    // Act
    let fields = Grammar::Error.extract(LINE).expect("line should match");

    // Assert
    assert_eq!(fields.value("time"), "Tue Oct 10 14:22:01.123456 2023");
    assert_eq!(fields.value("module"), "core");
    assert_eq!(fields.value("level"), "error");
    assert_eq!(fields.value("pid"), "4321");
    assert_eq!(fields.value("client"), "192.168.1.5:54321");
    assert_eq!(
        fields.value("message"),
        "File does not exist: /var/www/favicon.ico"
    );
    assert_eq!(fields.len(), Grammar::Error.fields().len());
    assert!(!fields.is_empty());
    let names: Vec<_> = fields.iter().map(|(name, _)| name).collect();
    assert_eq!(names, Grammar::Error.fields());
}

#[test]
fn error_grammar_trims_surrounding_whitespace() {
    // Arrange
    let line = format!("  {LINE}\r\n");

    // Act
    let fields = Grammar::Error.extract(&line).expect("line should match");

    // Assert
    assert_eq!(fields.value("pid"), "4321");
}

#[test]
fn error_grammar_is_anchored_to_the_whole_line() {
    // Arrange
    let line = format!("prefix {LINE}");

    // Act / Assert
    assert_eq!(Grammar::Error.mode(), MatchMode::FullLine);
    assert!(Grammar::Error.extract(&line).is_none());
}

#[test]
fn error_grammar_requires_every_bracketed_group() {
    // Arrange
    let missing_pid =
        "[Tue Oct 10 14:22:01 2023] [core:error] [client 10.0.0.1] File does not exist";
    let missing_level = "[Tue Oct 10 14:22:01 2023] [core] [pid 1] [client 10.0.0.1] oops";

    // Act / Assert
    assert!(Grammar::Error.extract(missing_pid).is_none());
    assert!(Grammar::Error.extract(missing_level).is_none());
}

#[test]
fn message_is_the_untrimmed_remainder_after_the_client_group() {
    // Arrange
    let line = "[Tue Oct 10 14:22:01 2023] [ssl:warn] [pid 7] [client 10.0.0.1] ";

    // Act
    let fields = Grammar::Error.extract(line);

    // Assert: trimming removes the separator before an empty message
    assert!(fields.is_none());

    // Arrange
    let line = "[Tue Oct 10 14:22:01 2023] [ssl:warn] [pid 7] [client 10.0.0.1]  x";

    // Act
    let fields = Grammar::Error.extract(line).expect("line should match");

    // Assert
    assert_eq!(fields.value("message"), " x");
}
