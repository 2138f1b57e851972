//! Integration tests for `show-config` and `completions`.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_show_config_defaults() {
    let env = TestEnv::new();

    env.command()
        .arg("show-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("max_hops: 200"))
        .stdout(predicate::str::contains("follow_dir_links: false"))
        .stdout(predicate::str::contains("output_format: table"));
}

#[test]
fn test_show_config_layers() {
    let env = TestEnv::new();
    env.write(
        &env.home.join(".linkchain/config.yaml"),
        "max_hops: 30\nfollow_dir_links: true\n",
    );
    env.write(&env.path("linkchain.yaml"), "max_hops: 40\n");
    let custom = env.path("custom.yaml");
    env.write(&custom, "output_format: json\n");

    env.command()
        .arg("--config")
        .arg(&custom)
        .arg("show-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("max_hops: 40"))
        .stdout(predicate::str::contains("follow_dir_links: true"))
        .stdout(predicate::str::contains("output_format: json"));
}

#[test]
fn test_show_config_env_wins_over_files() {
    let env = TestEnv::new();
    env.write(&env.path("linkchain.yaml"), "max_hops: 40\n");

    env.command()
        .env("LINKCHAIN_MAX_HOPS", "12")
        .arg("show-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("max_hops: 12"));
}

#[test]
fn test_completions_bash() {
    let env = TestEnv::new();

    env.command()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("linkchain"))
        .stdout(predicate::str::contains("scan"));
}

#[test]
fn test_help_lists_commands() {
    let env = TestEnv::new();

    env.command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("scan"))
        .stdout(predicate::str::contains("resolve"))
        .stdout(predicate::str::contains("show-config"));
}
