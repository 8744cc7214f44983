use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn tag_attribute_is_required() {
    let ctx = TestContext::new();

    ctx.cli().assert().code(2).stderr(predicate::str::contains("--tag-attribute"));
}

#[test]
fn syntax_error_aborts_without_writing_output() {
    let ctx = TestContext::new();
    ctx.write("good.json", r#"{"tags": "A"}"#);
    ctx.write("broken.json", r#"{"tags": }"#);

    ctx.cli()
        .args(["--tag-attribute", "tags", "--out", "out.lobster"])
        .assert()
        .code(1)
        .stdout("lobster-json: aborting due to earlier errors\n")
        .stderr(predicate::str::contains("./broken.json:1:"))
        .stderr(predicate::str::contains("lobster error: expected value"));

    assert!(!ctx.work_dir().join("out.lobster").exists());
}

#[test]
fn malformed_tags_are_reported() {
    let ctx = TestContext::new();
    ctx.write("bad.json", r#"[{"tags": 17}]"#);

    ctx.cli()
        .args(["--tag-attribute", "tags"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "./bad.json: lobster error: malformed input: tags are not a string or list",
        ));
}

#[test]
fn missing_test_list_member_is_malformed() {
    let ctx = TestContext::new();
    ctx.write("a.json", r#"{"other": []}"#);

    ctx.cli()
        .args(["--tag-attribute", "tags", "--test-list", "tests"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("malformed input: object does not contain tests"));
}

#[test]
fn nonexistent_input_is_rejected() {
    let ctx = TestContext::new();
    ctx.write("lobster.yaml", "inputs:\n  - missing.json\n  - also-missing\n");

    ctx.cli()
        .args(["--tag-attribute", "tags", "--config", "lobster.yaml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "<config>: lobster error: missing.json is not a file or directory",
        ))
        .stderr(predicate::str::contains("also-missing is not a file or directory"))
        .stderr(predicate::str::contains("Error:").not());
}

#[test]
fn out_naming_a_directory_is_a_usage_error() {
    let ctx = TestContext::new();
    ctx.write("out/keep.txt", "");

    ctx.cli()
        .args(["--tag-attribute", "tags", "--out", "out"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("output out already exists and is not a file"));
}

#[test]
fn missing_inputs_file_is_a_usage_error() {
    let ctx = TestContext::new();
    ctx.write("lobster.yaml", "inputs_from_file: absent.txt\n");

    ctx.cli()
        .args(["--tag-attribute", "tags", "--config", "lobster.yaml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot open absent.txt"));
}
