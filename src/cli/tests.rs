//! Tests for argument interpretation.

use super::help::HELP_TEXT;
use super::*;

fn files(names: &[&str]) -> Mode {
    Mode::ExplicitFiles(names.iter().map(|s| s.to_string()).collect())
}

#[test]
fn empty_arguments_show_help() {
    let args: [&str; 0] = [];
    assert_eq!(parse(&args), Err(ParseOutcome::ShowHelp));
}

#[test]
fn help_token_shows_help() {
    assert_eq!(parse(&["help"]), Err(ParseOutcome::ShowHelp));
    // Only in first position.
    assert_eq!(
        parse(&["-v", "help"]),
        Err(ParseOutcome::InvalidArguments(ArgumentError::TooFewFiles(1)))
    );
}

#[test]
fn unknown_first_token_is_invalid() {
    assert_eq!(
        parse(&["-a", "-v"]),
        Err(ParseOutcome::InvalidArguments(
            ArgumentError::UnknownDirection("-a".to_string())
        ))
    );
    assert!(matches!(
        parse(&["a.png", "b.png"]),
        Err(ParseOutcome::InvalidArguments(ArgumentError::UnknownDirection(_)))
    ));
}

#[test]
fn vertical_explicit_files() {
    let request = parse(&["-v", "a.png", "b.png"]).unwrap();
    assert_eq!(
        request,
        StitchRequest {
            direction: Direction::Vertical,
            reverse_order: false,
            mode: files(&["a.png", "b.png"]),
            output_name: None,
        }
    );
}

#[test]
fn horizontal_defaults_to_reversed() {
    let request = parse(&["-h", "a.png", "b.png"]).unwrap();
    assert_eq!(request.direction, Direction::Horizontal);
    assert!(request.reverse_order);
}

#[test]
fn single_reverse_flag_flips_each_default() {
    assert!(parse(&["-v", "-r", "a.png", "b.png"]).unwrap().reverse_order);
    assert!(!parse(&["-h", "-r", "a.png", "b.png"]).unwrap().reverse_order);
}

#[test]
fn repeated_reverse_flags_cancel() {
    assert_eq!(
        parse(&["-h", "-r", "-r", "a.png", "b.png"]),
        parse(&["-h", "a.png", "b.png"])
    );
    assert_eq!(
        parse(&["-v", "-r", "-r", "-a"]),
        parse(&["-v", "-a"])
    );
}

#[test]
fn flag_order_does_not_matter() {
    let a = parse(&["-h", "-a", "-r", "-o", "out_"]).unwrap();
    let b = parse(&["-h", "-o", "out_", "-r", "-a"]).unwrap();
    assert_eq!(a, b);
    assert_eq!(
        a.mode,
        Mode::AllSubdirectories {
            output_prefix: "out_".to_string()
        }
    );
    assert!(!a.reverse_order);
}

#[test]
fn batch_without_prefix_uses_empty_prefix() {
    let request = parse(&["-v", "-a"]).unwrap();
    assert_eq!(
        request.mode,
        Mode::AllSubdirectories {
            output_prefix: String::new()
        }
    );
    assert_eq!(request.output_name, None);
}

#[test]
fn batch_with_files_is_invalid() {
    for args in [
        vec!["-v", "-a", "a.png"],
        vec!["-h", "-a", "a.png", "b.png"],
        vec!["-v", "-r", "-a", "-o", "x", "a.png", "b.png", "c.png"],
    ] {
        assert!(matches!(
            parse(&args),
            Err(ParseOutcome::InvalidArguments(ArgumentError::FilesWithBatch(_)))
        ));
    }
}

#[test]
fn fewer_than_two_files_is_invalid() {
    for args in [
        vec!["-v"],
        vec!["-h"],
        vec!["-v", "a.png"],
        vec!["-h", "-r", "a.png"],
        vec!["-v", "-o", "out.png", "a.png"],
    ] {
        assert!(
            matches!(
                parse(&args),
                Err(ParseOutcome::InvalidArguments(ArgumentError::TooFewFiles(_)))
            ),
            "expected too few files for {:?}",
            args
        );
    }
}

#[test]
fn output_name_is_kept_for_explicit_files() {
    let request = parse(&["-v", "-o", "out.png", "a.png", "b.png"]).unwrap();
    assert_eq!(request.output_name.as_deref(), Some("out.png"));
}

#[test]
fn output_flag_consumes_next_token_even_if_flag_shaped() {
    let request = parse(&["-v", "-o", "-a", "a.png", "b.png"]).unwrap();
    assert_eq!(request.output_name.as_deref(), Some("-a"));
    assert_eq!(request.mode, files(&["a.png", "b.png"]));
}

#[test]
fn output_flag_without_value_is_invalid() {
    assert_eq!(
        parse(&["-v", "-a", "-o"]),
        Err(ParseOutcome::InvalidArguments(
            ArgumentError::MissingOutputValue
        ))
    );
}

#[test]
fn unknown_flag_is_invalid() {
    assert_eq!(
        parse(&["-h", "-x", "a.png", "b.png"]),
        Err(ParseOutcome::InvalidArguments(ArgumentError::UnknownFlag(
            "-x".to_string()
        )))
    );
}

#[test]
fn scanning_stops_at_first_file() {
    // Flags after the first file are treated as file names.
    let request = parse(&["-v", "a.png", "-r", "b.png"]).unwrap();
    assert!(!request.reverse_order);
    assert_eq!(request.mode, files(&["a.png", "-r", "b.png"]));
}

#[test]
fn non_flag_shaped_dash_tokens_are_files() {
    let request = parse(&["-v", "--long", "-ab"]).unwrap();
    assert_eq!(request.mode, files(&["--long", "-ab"]));
}

#[test]
fn non_ascii_letter_flag_is_unknown() {
    assert_eq!(
        parse(&["-v", "-é", "a.png", "b.png"]),
        Err(ParseOutcome::InvalidArguments(ArgumentError::UnknownFlag(
            "-é".to_string()
        )))
    );
}

#[test]
fn dash_digit_is_a_file() {
    let request = parse(&["-v", "-1", "a.png"]).unwrap();
    assert_eq!(request.mode, files(&["-1", "a.png"]));
}

#[test]
fn decode_args_keeps_utf8_arguments() {
    let decoded = decode_args(["-v", "é.png", "b.png"]).unwrap();
    assert_eq!(decoded, vec!["-v", "é.png", "b.png"]);
}

#[cfg(unix)]
#[test]
fn decode_args_rejects_non_utf8() {
    use std::os::unix::ffi::OsStringExt;

    let raw = OsString::from_vec(b"\xff.png".to_vec());
    let err = decode_args([OsString::from("-v"), raw]).unwrap_err();
    assert_eq!(err, ArgumentError::NonUtf8("\u{FFFD}.png".to_string()));
}

#[test]
fn help_text_mentions_every_flag() {
    for flag in ["-v:", "-h:", "-a:", "-r:", "-o:", "help:"] {
        assert!(HELP_TEXT.contains(flag), "missing {flag}");
    }
}
