//! Specs for `authors` and `blame`.

use crate::prelude::*;

fn history() -> Project {
    let project = Project::git();
    project.file("notes.txt", "one\ntwo\n");
    project.commit_as(BOB, day(2), "docs: notes");
    project.file("notes.txt", "one\ntwo\nthree\n");
    project.commit_as(ALICE, day(3), "docs: more notes");
    project
}

#[test]
fn authors_are_sorted_and_distinct() {
    let project = history();
    run_exits(culprit(&project, &["authors", "notes.txt"]), 0)
        .stdout_eq(&format!("{ALICE}\n{BOB}\n"));
}

#[test]
fn authors_include_uncommitted_marker() {
    let project = history();
    project.file("notes.txt", "one\ntwo\nthree\nfour\n");
    run_exits(culprit(&project, &["authors", "notes.txt"]), 0)
        .stdout_has("not.committed.yet");
}

#[test]
fn authors_json() {
    let project = history();
    let json = run_exits(culprit(&project, &["-o", "json", "authors", "notes.txt"]), 0).json();
    assert_eq!(json["authors"], serde_json::json!([ALICE, BOB]));
}

#[test]
fn blame_single_line() {
    let project = history();
    run_exits(
        culprit(&project, &["blame", "notes.txt", "--line", "3"]),
        0,
    )
    .stdout_has(ALICE)
    .stdout_has("1970-01-04")
    .stdout_lacks(BOB);
}

#[test]
fn blame_every_line_json() {
    let project = history();
    let json = run_exits(culprit(&project, &["-o", "json", "blame", "notes.txt"]), 0).json();
    let lines = json["lines"].as_array().unwrap();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0]["author"], BOB);
    assert_eq!(lines[2]["line_number"], 3);
}

#[test]
fn blame_line_out_of_range() {
    let project = history();
    run_exits(
        culprit(&project, &["blame", "notes.txt", "--line", "4"]),
        3,
    )
    .stderr_has("out of range");
}
