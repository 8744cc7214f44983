use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn help_lists_option_groups_and_epilog() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Extract tracing data from JSON files."))
        .stdout(predicate::str::contains("Common options"))
        .stdout(predicate::str::contains("Tool specific options"))
        .stdout(predicate::str::contains("--test-list"))
        .stdout(predicate::str::contains("Part of LOBSTER, licensed under the AGPLv3."));
}

#[test]
fn version_flag_prints_package_version() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("lobster-json "));
}
