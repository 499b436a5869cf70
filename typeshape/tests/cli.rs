//! Runs the `typeshape` binary against scratch schema files.

use std::path::Path;
use std::process::{Command, Output};

fn typeshape(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_typeshape"))
        .args(args)
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run typeshape")
}

const ACCOUNT: &str = r#"{
    "type": "object",
    "properties": [
        { "key": "email", "type": "string" },
        { "key": "roles", "type": "array", "items": { "type": "string", "enum": ["admin", "member"] } }
    ]
}"#;

#[test]
fn test_generate_prints_document() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("account.json"), ACCOUNT).unwrap();

    let output = typeshape(&["generate", "account.json"], dir.path());

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "export interface Account {\n    email: string;\n    roles: (\"admin\" | \"member\")[];\n}\n"
    );
}

#[test]
fn test_generate_picks_up_config_in_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("account.json"), ACCOUNT).unwrap();
    std::fs::write(
        dir.path().join("typeshape.toml"),
        "[typescript]\nheader = \"// @generated\"\nindent = 2\n",
    )
    .unwrap();

    let output = typeshape(&["generate", "account.json"], dir.path());

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("// @generated\n\nexport interface Account {\n  email: string;"));
}

#[test]
fn test_invalid_root_exits_with_failure() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("flag.json"), r#"{ "type": "boolean" }"#).unwrap();

    let output = typeshape(&["check", "flag.json"], dir.path());

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("typeshape::invalid_root"));
}

#[test]
fn test_malformed_document_exits_with_failure() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("broken.json"), "{ \"type\": \"object\",\n}").unwrap();

    let output = typeshape(&["generate", "broken.json"], dir.path());

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to parse schema document"));
}

#[test]
fn test_check_lists_declarations() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("account.json"), ACCOUNT).unwrap();

    let output = typeshape(&["check", "account.json"], dir.path());

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("1 declaration:"));
    assert!(stdout.contains("Account (structure)"));
}
