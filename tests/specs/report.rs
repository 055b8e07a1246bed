//! Specs for `report`, `diff`, and `violations`.

use crate::prelude::*;

/// Two-commit history: alice writes the file, bob rewrites line 3.
fn two_authors() -> Project {
    let project = Project::git();
    project.file(
        "src/lib.rs",
        "fn main() {\n    // TODO: tidy\n    dbg!(1);\n}\n",
    );
    project.commit_as(ALICE, day(1), "feat: add main");
    project.file(
        "src/lib.rs",
        "fn main() {\n    // TODO: tidy\n    dbg!(2);\n}\n",
    );
    project.commit_as(BOB, day(10), "fix: bump value");
    project
}

#[test]
fn report_lists_violations_on_authors_lines() {
    let project = two_authors();
    run_exits(
        culprit(&project, &["-s", "brutal", "report", "src/lib.rs", "--author", ALICE]),
        1,
    )
    .stdout_has(":2:8: todo-comment [cruel]")
    .stdout_lacks("debug-macro")
    .stdout_has("1 violation\n");
}

#[test]
fn report_for_other_author() {
    let project = two_authors();
    run_exits(
        culprit(&project, &["-s", "brutal", "report", "src/lib.rs", "--author", BOB]),
        1,
    )
    .stdout_has(":3:5: debug-macro [stern]")
    .stdout_lacks("todo-comment");
}

#[test]
fn report_unknown_author_is_clean() {
    let project = two_authors();
    run_exits(
        culprit(
            &project,
            &["-s", "brutal", "report", "src/lib.rs", "--author", "carol@example.com"],
        ),
        0,
    )
    .stdout_eq("0 violations\n");
}

#[test]
fn report_since_excludes_older_lines() {
    let project = two_authors();
    let since = day(5).to_string();
    run_exits(
        culprit(
            &project,
            &["-s", "brutal", "report", "src/lib.rs", "--author", ALICE, "--since", &since],
        ),
        0,
    );
    run_exits(
        culprit(
            &project,
            &["-s", "brutal", "report", "src/lib.rs", "--author", BOB, "--since", "1970-01-06"],
        ),
        1,
    );
}

#[test]
fn report_rejects_empty_author() {
    let project = two_authors();
    run_exits(
        culprit(&project, &["report", "src/lib.rs", "--author", ""]),
        2,
    )
    .stderr_has("author must not be empty");
}

#[test]
fn default_threshold_is_gentle() {
    let project = two_authors();
    run_exits(
        culprit(&project, &["report", "src/lib.rs", "--author", ALICE]),
        0,
    );
}

#[test]
fn diff_reports_changed_lines_only() {
    let project = two_authors();
    run_exits(
        culprit(
            &project,
            &["-s", "brutal", "diff", "src/lib.rs", "--from", "HEAD~1", "--to", "HEAD"],
        ),
        1,
    )
    .stdout_has(":3:5: debug-macro [stern]")
    .stdout_lacks("todo-comment");
}

#[test]
fn diff_of_identical_revisions_is_clean() {
    let project = two_authors();
    run_exits(
        culprit(
            &project,
            &["-s", "brutal", "diff", "src/lib.rs", "--from", "HEAD", "--to", "HEAD"],
        ),
        0,
    )
    .stdout_eq("0 violations\n");
}

#[test]
fn diff_unknown_revision_is_collaborator_error() {
    let project = two_authors();
    run_exits(
        culprit(
            &project,
            &["diff", "src/lib.rs", "--from", "no-such-rev", "--to", "HEAD"],
        ),
        3,
    );
}

#[test]
fn diff_json_output() {
    let project = two_authors();
    let json = run_exits(
        culprit(
            &project,
            &["-s", "brutal", "-o", "json", "diff", "src/lib.rs", "--from", "HEAD~1", "--to", "HEAD"],
        ),
        1,
    )
    .json();
    assert_eq!(json["count"], 1);
    assert_eq!(json["violations"][0]["line"], 3);
    assert_eq!(json["violations"][0]["policy"], "debug-macro");
    assert_eq!(json["violations"][0]["severity"], 4);
}

#[test]
fn violations_json_carries_attribution() {
    let project = two_authors();
    let json = run_exits(
        culprit(&project, &["-s", "brutal", "-o", "json", "violations", "src/lib.rs"]),
        0,
    )
    .json();
    assert_eq!(json["count"], 2);
    // Analyzer order is rule-major, so compare by line.
    let mut by_line: Vec<(u64, &str, i64)> = json["violations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| {
            (
                v["line"].as_u64().unwrap(),
                v["author"].as_str().unwrap(),
                v["authored_at"].as_i64().unwrap(),
            )
        })
        .collect();
    by_line.sort_unstable();
    assert_eq!(by_line, vec![(2, ALICE, day(1)), (3, BOB, day(10))]);
}
