//! Specs for `culprit.toml` discovery and validation.

use crate::prelude::*;

fn project_with_todo() -> Project {
    let project = Project::git();
    project.file("src/lib.rs", "// XXX: revisit\n");
    project
}

#[test]
fn discovered_config_sets_threshold() {
    let project = project_with_todo();
    project.config("severity = \"cruel\"\n");
    project.commit_as(ALICE, day(1), "feat: add lib");
    run_exits(
        culprit(&project, &["report", "src/lib.rs", "--author", ALICE]),
        1,
    )
    .stdout_has("todo-comment");
}

#[test]
fn cli_severity_overrides_config() {
    let project = project_with_todo();
    project.config("severity = \"cruel\"\n");
    project.commit_as(ALICE, day(1), "feat: add lib");
    run_exits(
        culprit(&project, &["-s", "gentle", "report", "src/lib.rs", "--author", ALICE]),
        0,
    );
}

#[test]
fn custom_rules_replace_defaults() {
    let project = project_with_todo();
    project.config(
        r#"
[[rule]]
name = "no-revisit"
pattern = "revisit"
severity = "harsh"
"#,
    );
    project.commit_as(ALICE, day(1), "feat: add lib");
    run_exits(
        culprit(&project, &["-s", "brutal", "report", "src/lib.rs", "--author", ALICE]),
        1,
    )
    .stdout_has(":1:9: no-revisit [harsh]")
    .stdout_lacks("todo-comment");
}

#[test]
fn unknown_config_key_is_rejected() {
    let project = project_with_todo();
    project.config("severty = \"cruel\"\n");
    project.commit_as(ALICE, day(1), "feat: add lib");
    run_exits(culprit(&project, &["authors", "src/lib.rs"]), 2).stderr_has("severty");
}

#[test]
fn explicit_config_must_exist() {
    let project = project_with_todo();
    project.commit_as(ALICE, day(1), "feat: add lib");
    run_exits(
        culprit(&project, &["-C", "missing.toml", "authors", "src/lib.rs"]),
        2,
    );
}

#[test]
fn config_from_environment() {
    let project = project_with_todo();
    project.file("alt.toml", "version = 1\nseverity = 2\n");
    project.commit_as(ALICE, day(1), "feat: add lib");
    let mut cmd = culprit(&project, &["report", "src/lib.rs", "--author", ALICE]);
    cmd.env("CULPRIT_CONFIG", project.path().join("alt.toml"));
    run_exits(cmd, 1);
}
