use std::ffi::{OsStr, OsString};

use super::*;

fn run_with_args<I, S>(args: I) -> (i32, String, String)
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let code = run(args, &mut stdout, &mut stderr);
    (
        code,
        String::from_utf8(stdout).expect("stdout is UTF-8"),
        String::from_utf8(stderr).expect("stderr is UTF-8"),
    )
}

#[test]
fn parse_canonicalizes() {
    let (code, stdout, stderr) = run_with_args(["fmask", "parse", " c , a{ y, x } "]);
    assert_eq!(code, EXIT_OK);
    assert_eq!(stdout, "a{x,y},c\n");
    assert!(stderr.is_empty());
}

#[test]
fn parse_invert_prints_exclusion() {
    let (code, stdout, _) = run_with_args(["fmask", "parse", "a,b", "--invert"]);
    assert_eq!(code, EXIT_OK);
    assert_eq!(stdout, "!a,b\n");
}

#[test]
fn malformed_mask_exits_with_failure() {
    let (code, stdout, stderr) = run_with_args(["fmask", "parse", "a,,b"]);
    assert_eq!(code, EXIT_FAILURE);
    assert!(stdout.is_empty());
    assert!(stderr.starts_with("fmask: invalid mask: "), "{stderr}");
}

#[test]
fn paths_apply_naming() {
    let (code, stdout, _) = run_with_args([
        "fmask",
        "paths",
        "displayName",
        "address.postCode",
        "--naming",
        "snake",
    ]);
    assert_eq!(code, EXIT_OK);
    assert_eq!(stdout, "address{post_code},display_name\n");
}

#[test]
fn paths_reject_empty_segments() {
    let (code, _, stderr) = run_with_args(["fmask", "paths", "a..b"]);
    assert_eq!(code, EXIT_FAILURE);
    assert!(stderr.contains("a..b"), "{stderr}");
}

#[test]
fn check_reports_each_path() {
    let (code, stdout, _) =
        run_with_args(["fmask", "check", "a,b{c}", "a.x", "b.c", "b.d", "z", "_id"]);
    assert_eq!(code, EXIT_OK);
    assert_eq!(
        stdout,
        "included\ta.x\nincluded\tb.c\nexcluded\tb.d\nexcluded\tz\nexcluded\t_id\n"
    );
}

#[test]
fn check_with_exclusion_mask() {
    let (code, stdout, _) = run_with_args(["fmask", "check", "!secret", "name", "secret"]);
    assert_eq!(code, EXIT_OK);
    assert_eq!(stdout, "included\tname\nexcluded\tsecret\n");
}

#[test]
fn flatten_prints_paths() {
    let (code, stdout, _) = run_with_args(["fmask", "flatten", "b{d,c},a"]);
    assert_eq!(code, EXIT_OK);
    assert_eq!(stdout, "a\nb.c\nb.d\n");
}

#[test]
fn max_depth_limits_parsing() {
    let (code, _, _) = run_with_args(["fmask", "--max-depth", "3", "parse", "a{b{c}}"]);
    assert_eq!(code, EXIT_OK);

    let (code, _, stderr) = run_with_args(["fmask", "--max-depth", "2", "parse", "a{b{c}}"]);
    assert_eq!(code, EXIT_FAILURE);
    assert!(stderr.contains('2'), "{stderr}");
}

#[test]
fn verbose_flags_accepted() {
    let (code, stdout, _) = run_with_args(["fmask", "-vvv", "parse", "a"]);
    assert_eq!(code, EXIT_OK);
    assert_eq!(stdout, "a\n");
}

#[test]
fn invalid_log_directives_are_usage_errors() {
    let (code, _, stderr) = run_with_args(["fmask", "--log", "fieldmask=loudest", "parse", "a"]);
    assert_eq!(code, EXIT_USAGE);
    assert!(stderr.contains("fieldmask=loudest"), "{stderr}");
}

#[test]
fn help_goes_to_stdout() {
    let (code, stdout, stderr) = run_with_args([OsStr::new("fmask"), OsStr::new("--help")]);
    assert_eq!(code, EXIT_OK);
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("flatten"));
    assert!(stderr.is_empty());
}

#[test]
fn version_goes_to_stdout() {
    let (code, stdout, _) = run_with_args(["fmask", "--version"]);
    assert_eq!(code, EXIT_OK);
    assert!(stdout.starts_with("fmask "));
}

#[test]
fn missing_subcommand_is_usage_error() {
    let (code, stdout, stderr) = run_with_args(["fmask"]);
    assert_eq!(code, EXIT_USAGE);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Usage:"));
}

#[test]
fn unknown_subcommand_is_usage_error() {
    let (code, _, stderr) = run_with_args(["fmask", "explode"]);
    assert_eq!(code, EXIT_USAGE);
    assert!(stderr.contains("explode"));
}

#[test]
fn exit_code_from_clamps() {
    assert_eq!(exit_code_from(0), std::process::ExitCode::SUCCESS);
    assert_eq!(exit_code_from(-4), std::process::ExitCode::SUCCESS);
    assert_eq!(exit_code_from(1), std::process::ExitCode::from(1));
    assert_eq!(exit_code_from(300), std::process::ExitCode::from(255));
}
