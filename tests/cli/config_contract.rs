use crate::harness::{TestContext, item_tags};
use predicates::prelude::*;

#[test]
fn config_inputs_and_out_are_honoured() {
    let ctx = TestContext::new();
    ctx.write("wanted/a.json", r#"{"tags": "A"}"#);
    ctx.write("ignored/b.json", r#"{"tags": "B"}"#);
    ctx.write("lobster.yaml", "inputs:\n  - wanted\nout: from-config.lobster\n");

    ctx.cli()
        .args(["--tag-attribute", "tags", "--config", "lobster.yaml"])
        .assert()
        .success()
        .stdout("lobster-json: wrote 1 items to from-config.lobster\n");

    let document = ctx.read_document("from-config.lobster");
    assert_eq!(item_tags(&document), vec!["json wanted/a.json:wanted.a.1".to_string()]);
}

#[test]
fn command_line_out_overrides_config_out() {
    let ctx = TestContext::new();
    ctx.write("a.json", r#"{"tags": "A"}"#);
    ctx.write("lobster.yaml", "out: from-config.lobster\n");

    ctx.cli()
        .args(["--tag-attribute", "tags", "--config", "lobster.yaml", "--out", "from-cli.lobster"])
        .assert()
        .success();

    assert!(ctx.work_dir().join("from-cli.lobster").is_file());
    assert!(!ctx.work_dir().join("from-config.lobster").exists());
}

#[test]
fn empty_config_file_uses_defaults() {
    let ctx = TestContext::new();
    ctx.write("a.json", r#"{"tags": "A"}"#);
    ctx.write("empty.yaml", "");

    ctx.cli()
        .args(["--tag-attribute", "tags", "--config", "empty.yaml", "--out", "out.lobster"])
        .assert()
        .success();

    assert_eq!(item_tags(&ctx.read_document("out.lobster")).len(), 1);
}

#[test]
fn missing_config_file_is_rejected() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["--tag-attribute", "tags", "--config", "nope.yaml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Config file 'nope.yaml' not found."));
}

#[test]
fn unsupported_config_keys_are_listed() {
    let ctx = TestContext::new();
    ctx.write("lobster.yaml", "inputs: [.]\nbogus: 1\nextra: true\n");

    ctx.cli()
        .args(["--tag-attribute", "tags", "--config", "lobster.yaml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unsupported config keys: bogus, extra."))
        .stderr(predicate::str::contains(
            "Supported keys are: inputs, inputs_from_file, out, single, traverse_bazel_dirs.",
        ));
}

#[test]
fn bazel_directories_are_skipped_unless_requested() {
    let ctx = TestContext::new();
    ctx.write("bazel-out/gen.json", r#"{"tags": "G"}"#);
    ctx.write("src/a.json", r#"{"tags": "A"}"#);
    ctx.write("bazel.yaml", "traverse_bazel_dirs: true\nout: all.lobster\n");

    ctx.cli().args(["--tag-attribute", "tags", "--out", "default.lobster"]).assert().success();
    assert_eq!(
        item_tags(&ctx.read_document("default.lobster")),
        vec!["json ./src/a.json:src.a.1".to_string()]
    );

    ctx.cli().args(["--tag-attribute", "tags", "--config", "bazel.yaml"]).assert().success();
    assert_eq!(item_tags(&ctx.read_document("all.lobster")).len(), 2);
}
