//! Integration tests for the sml front end and driver

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser as _;
use sml::cli::{self, Cli, ExitCode};
use sml::diagnostics::{CompileError, ErrorKind};
use sml::parser::{self, ParseOptions};

fn fixtures(kind: &str) -> Vec<PathBuf> {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(kind);
    let mut paths: Vec<PathBuf> = fs::read_dir(&dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.extension().is_some_and(|e| e == "sml"))
        .collect();
    paths.sort();
    assert!(!paths.is_empty(), "no fixtures in {}", dir.display());
    paths
}

/// Helper to run parse + reduce on a source file
fn compile_file(path: &Path) -> Result<String, CompileError> {
    let source = fs::read_to_string(path).unwrap();
    let name = path.file_stem().unwrap().to_string_lossy();
    let tree = parser::parse(&name, &source)?;
    let reduced = tree.reduce()?;
    Ok(reduced.root.to_string())
}

/// Test that all valid fixtures parse and reduce
#[test]
fn test_valid_fixtures() {
    for path in fixtures("valid") {
        let result = compile_file(&path);
        assert!(
            result.is_ok(),
            "Expected {} to parse, got: {}",
            path.display(),
            result.unwrap_err()
        );
    }
}

/// Test that invalid fixtures produce errors tagged with their document
#[test]
fn test_invalid_fixtures() {
    for path in fixtures("invalid") {
        let err = compile_file(&path).expect_err(&path.display().to_string());
        let stem = path.file_stem().unwrap().to_string_lossy();
        assert_eq!(err.document.as_deref(), Some(&*stem));
        assert!(err.pos.is_some(), "{}: {err}", path.display());
    }
}

#[test]
fn test_invalid_fixture_messages() {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/invalid");
    let cases = [
        ("unclosed_paren.sml", ErrorKind::Syntax, "unclosed left paren"),
        ("lone_plus.sml", ErrorKind::Scan, "bad number syntax: \"+\""),
        ("stray_right_paren.sml", ErrorKind::Scan, "unexpected right paren U+0029 ')'"),
        ("unclosed_comment.sml", ErrorKind::Scan, "unclosed comment"),
        ("string_operand.sml", ErrorKind::Syntax, "unexpected \"\\\"wide\\\"\""),
    ];
    for (file, kind, message) in cases {
        let err = compile_file(&dir.join(file)).unwrap_err();
        assert_eq!(err.kind, kind, "{file}: {err}");
        assert!(err.message.starts_with(message), "{file}: {}", err.message);
    }
}

#[test]
fn test_example_document() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("example.sml");
    let source = fs::read_to_string(path).unwrap();
    let out = cli::commands::drive("hello", &source, &ParseOptions::new()).unwrap();
    insta::assert_snapshot!(out.trim_end(), @r"
    rect [10 8] @ [0 0] - rect [4 4] @ [3 2] || rect [1 6] @ [4.5 -6]
    rect [10 8] @ [0 0] - rect [4 4] @ [3 2] || rect [1 6] @ [4.5 -6]
    ((rect [10 8] @ [0 0])(rect [4 4] @ [3 2]))(rect [1 6] @ [4.5 -6])
    ");
}

#[test]
fn test_nested_groups_render() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/valid/nested_groups.sml");
    let source = fs::read_to_string(path).unwrap();
    let tree = parser::parse("nested", &source).unwrap();
    insta::assert_snapshot!(tree.root.to_string(), @"rect [w [] @ [] h [] @ []] @ [0 0] || circle [r [] @ []] @ [] && square [0x10] @ [] - rect [1.5e1 2] @ [-1 -1]");
    insta::assert_snapshot!(tree.reduce().unwrap().root.to_string(), @"((rect [w [] @ [] h [] @ []] @ [0 0])(circle [r [] @ []] @ []))((square [0x10] @ [])(rect [1.5e1 2] @ [-1 -1]))");
}

#[test]
fn test_threaded_and_pull_agree_on_fixtures() {
    let threaded = ParseOptions::new().with_threaded_scanner(true);
    for path in fixtures("valid").into_iter().chain(fixtures("invalid")) {
        let source = fs::read_to_string(&path).unwrap();
        let pull = parser::parse("doc", &source);
        let thread = parser::parse_with_options("doc", &source, &threaded);
        assert_eq!(pull, thread, "{}", path.display());
    }
}

#[test]
fn test_cli_execute_valid_file() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/valid/single_object.sml");
    let path = path.to_string_lossy().into_owned();
    for flags in [&[][..], &["--lex"][..], &["--parse", "--threaded"][..]] {
        let mut args = vec!["sml"];
        args.extend_from_slice(flags);
        args.push(path.as_str());
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli::execute(cli).unwrap(), ExitCode::SUCCESS);
    }
}

#[test]
fn test_cli_execute_reports_errors() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/invalid/unclosed_paren.sml");
    let path = path.to_string_lossy().into_owned();
    let cli = Cli::try_parse_from(["sml", "--error-format", "plain", path.as_str()]).unwrap();
    let err = cli::execute(cli).unwrap_err();
    assert_eq!(err.exit_code, ExitCode::FAILURE);
    assert!(err.message.starts_with("syntax error: unclosed left paren"), "{}", err.message);
    assert!(err.message.contains("unclosed_paren.sml:1:1"), "{}", err.message);

    let cli = Cli::try_parse_from(["sml", "missing-file.sml"]).unwrap();
    let err = cli::execute(cli).unwrap_err();
    assert!(err.message.contains("missing-file.sml"), "{}", err.message);
}

#[test]
fn test_hostile_nesting_is_an_error_not_a_crash() {
    let depth = 100_000;
    let nested = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    let chain = vec!["rect 1"; 50_000].join(" && ");
    for source in [nested, chain] {
        let err = cli::commands::drive("hello", &source, &ParseOptions::new()).unwrap_err();
        assert!(err.to_string().contains("expression nested too deeply"), "{err}");
    }
}
