use super::*;

#[test]
fn test_json_output_logs_to_stderr() {
    let (target, stream) = log_target(OutputFormat::Json);
    assert!(matches!(target, env_logger::Target::Stderr));
    assert!(matches!(stream, Stream::Stderr));
}

#[test]
fn test_text_output_logs_to_stdout() {
    let (target, stream) = log_target(OutputFormat::Text);
    assert!(matches!(target, env_logger::Target::Stdout));
    assert!(matches!(stream, Stream::Stdout));
}
