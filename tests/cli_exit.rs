use segclean::cli::exit::{Outcome, OutputMode, OutputStream, exit_code, output_stream};

#[test]
fn cleaned_exits_zero_refusal_two() {
    assert_eq!(exit_code(Outcome::Cleaned), 0);
    assert_eq!(exit_code(Outcome::Refusal), 2);
}

#[test]
fn json_mode_routes_all_to_stdout() {
    for outcome in [Outcome::Cleaned, Outcome::Refusal] {
        assert_eq!(output_stream(outcome, OutputMode::Json), OutputStream::Stdout);
    }
}

#[test]
fn human_mode_refusals_to_stderr() {
    assert_eq!(
        output_stream(Outcome::Cleaned, OutputMode::Human),
        OutputStream::Stdout
    );
    assert_eq!(
        output_stream(Outcome::Refusal, OutputMode::Human),
        OutputStream::Stderr
    );
}
