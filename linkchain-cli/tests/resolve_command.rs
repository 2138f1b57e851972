//! Integration tests for the `resolve` command.

#![cfg(unix)]

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_resolve_chain() {
    let env = TestEnv::new();
    let target = env.file("real");
    env.link("mid", "real");
    env.link("top", "mid");

    let json = env.json(&["resolve", "--format", "json", "top"]);
    assert_eq!(json[0]["start"], env.path("top").to_str().unwrap());
    assert_eq!(json[0]["status"], "resolved");
    assert_eq!(json[0]["resolved_target"], target.to_str().unwrap());
    assert_eq!(json[0]["chain"][0]["path"], env.path("mid").to_str().unwrap());
    assert_eq!(json[0]["chain"][0]["is_symlink"], true);
    assert_eq!(json[0]["chain"][1]["is_symlink"], false);
    assert!(json[0]["error_detail"].is_null());
}

#[test]
fn test_resolve_non_link_is_read_error() {
    let env = TestEnv::new();
    env.file("plain");

    let json = env.json(&["resolve", "--format", "json", "plain", "absent"]);
    for record in json.as_array().unwrap() {
        assert_eq!(record["status"], "read_error");
        assert_eq!(record["error_detail"], "not a symbolic link");
        assert!(record["chain"].as_array().unwrap().is_empty());
    }
}

#[test]
fn test_resolve_two_cycle() {
    let env = TestEnv::new();
    env.link("a", "b");
    env.link("b", "a");

    let json = env.json(&["resolve", "--format", "json", "a"]);
    assert_eq!(json[0]["status"], "loop");
    let chain: Vec<&str> = json[0]["chain"]
        .as_array()
        .unwrap()
        .iter()
        .map(|hop| hop["path"].as_str().unwrap())
        .collect();
    assert_eq!(
        chain,
        vec![env.path("b").to_str().unwrap(), env.path("a").to_str().unwrap()]
    );
}

#[test]
fn test_resolve_relative_parent_target() {
    let env = TestEnv::new();
    env.file("a/c");
    env.link("a/b/link", "../c");

    let json = env.json(&["resolve", "--format", "json", "a/b/link"]);
    assert_eq!(json[0]["resolved_target"], env.path("a/c").to_str().unwrap());
}

#[test]
fn test_resolve_tsv() {
    let env = TestEnv::new();
    env.link("dangling", "gone");

    env.command()
        .args(["resolve", "--format", "tsv", "dangling"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "{}\tbroken\t{}\t\t{}",
            env.path("dangling").display(),
            env.path("gone").display(),
            env.path("gone").display()
        )));
}

#[test]
fn test_resolve_check() {
    let env = TestEnv::new();
    env.link("dangling", "gone");

    env.command()
        .args(["resolve", "--check", "dangling"])
        .assert()
        .code(1);
}

#[test]
fn test_resolve_env_max_hops() {
    let env = TestEnv::new();
    env.file("end");
    env.link("two", "end");
    env.link("one", "two");

    let output = env
        .command()
        .env("LINKCHAIN_MAX_HOPS", "1")
        .args(["resolve", "--format", "json", "one"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["status"], "max_hops_exceeded");
}
