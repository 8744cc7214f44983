use crate::harness::{TestContext, item_tags};
use predicates::prelude::*;

#[test]
fn inputs_file_lists_files_and_directories_with_comments() {
    let ctx = TestContext::new();
    ctx.write("suite/a.json", r#"{"tags": "A"}"#);
    ctx.write("suite/nested/b.json", r#"{"tags": "B"}"#);
    ctx.write("extra.json", r#"{"tags": "X"}"#);
    ctx.write("skipped.json", r#"{"tags": "S"}"#);
    ctx.write("inputs.txt", "# test vectors\nsuite\n\nextra.json   # standalone\n");
    ctx.write("lobster.yaml", "inputs_from_file: inputs.txt\nout: out.lobster\n");

    ctx.cli().args(["--tag-attribute", "tags", "--config", "lobster.yaml"]).assert().success();

    assert_eq!(
        item_tags(&ctx.read_document("out.lobster")),
        vec![
            "json extra.json:extra.1".to_string(),
            "json suite/a.json:suite.a.1".to_string(),
            "json suite/nested/b.json:suite.nested.b.1".to_string(),
        ]
    );
}

#[test]
fn explicit_file_with_foreign_extension_is_processed_with_warning() {
    let ctx = TestContext::new();
    ctx.write("vectors.txt", r#"{"tags": "A"}"#);
    ctx.write("inputs.txt", "\nvectors.txt\n");
    ctx.write("lobster.yaml", "inputs_from_file: inputs.txt\nout: out.lobster\n");

    ctx.cli()
        .args(["--tag-attribute", "tags", "--config", "lobster.yaml"])
        .assert()
        .success()
        .stderr(predicate::str::contains("inputs.txt:2: lobster warning: not a .json file"));

    assert_eq!(
        item_tags(&ctx.read_document("out.lobster")),
        vec!["json vectors.txt:vectors.txt.1".to_string()]
    );
}

#[test]
fn absolute_inputs_outside_the_working_directory() {
    let ctx = TestContext::new();
    let outside = ctx.outside();
    std::fs::write(outside.join("far.json"), r#"{"tags": "F"}"#).unwrap();
    ctx.write("lobster.yaml", &format!("inputs:\n  - {}\nout: out.lobster\n", outside.display()));

    ctx.cli().args(["--tag-attribute", "tags", "--config", "lobster.yaml"]).assert().success();

    let tags = item_tags(&ctx.read_document("out.lobster"));
    assert_eq!(tags.len(), 1);
    assert!(tags[0].contains("/outside/far.json:"), "{}", tags[0]);
    assert!(tags[0].ends_with("outside.far.1"), "{}", tags[0]);
}
