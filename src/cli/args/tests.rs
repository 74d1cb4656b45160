use super::*;
use clap::error::ErrorKind;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("pip-dsc").chain(args.iter().copied())).unwrap()
}

#[test]
fn no_verb_parses_to_none() {
    assert_eq!(parse(&[]).command, None);
}

#[test]
fn get_takes_json_positional() {
    let cli = parse(&["get", r#"{"name":"requests"}"#]);
    assert_eq!(
        cli.command,
        Some(Command::Get {
            input: Some(r#"{"name":"requests"}"#.to_string())
        })
    );
}

#[test]
fn set_without_json_still_parses() {
    // arity is checked by the dispatcher so the exit code stays under our control
    assert_eq!(parse(&["set"]).command, Some(Command::Set { input: None }));
}

#[test]
fn export_accepts_engine_placeholder_and_json() {
    let cli = parse(&["export", "ignored", "{}"]);
    assert_eq!(
        cli.command,
        Some(Command::Export {
            ignored: vec!["ignored".to_string(), "{}".to_string()]
        })
    );
    assert_eq!(parse(&["export"]).command.map(|c| c.verb()), Some("export"));
}

#[test]
fn global_flags_after_verb() {
    let cli = parse(&["get", "{}", "--python", "/opt/py/bin/python", "-v"]);
    assert!(cli.global.verbose);
    assert_eq!(cli.global.python, Some(PathBuf::from("/opt/py/bin/python")));
}

#[test]
fn pip_args_may_start_with_hyphen() {
    let cli = parse(&["--pip-args", "--index-url https://mirror/simple", "export"]);
    assert_eq!(
        cli.global.pip_args.as_deref(),
        Some("--index-url https://mirror/simple")
    );
}

#[test]
fn unknown_verb_is_a_parse_error() {
    let err = Cli::try_parse_from(["pip-dsc", "frobnicate", "{}"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidSubcommand);
}
