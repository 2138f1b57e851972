//! Build script for linkchain-cli.
//!
//! Generates the `linkchain.1` man page into `OUT_DIR` with clap_mangen.
//! The command structure is rebuilt here because a build script cannot
//! depend on the crate it builds.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Keep in sync with src/cli.rs.
fn build_cli() -> Command {
    Command::new("linkchain")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Follow symbolic link chains and report where they end")
        .long_about(
            "Finds symbolic links, follows each chain hop by hop, and classifies it as \
             resolved, broken, loop, max-hops exceeded or read error",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Load this configuration file on top of discovered ones")
                .value_name("PATH")
                .global(true)
                .env("LINKCHAIN_CONFIG"),
        )
        .subcommands(vec![
            Command::new("scan")
                .about("Scan a directory tree and resolve every link in it")
                .long_about(
                    "Walk PATH (default .), resolve each symbolic link found, and print one \
                     record per link with its full chain",
                ),
            Command::new("resolve")
                .about("Resolve specific links")
                .long_about("Resolve each LINK given on the command line"),
            Command::new("show-config")
                .about("Print the effective configuration")
                .long_about("Print the merged configuration as YAML"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> std::io::Result<()> {
    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR").ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "OUT_DIR not set")
    })?);
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let mut buffer = Vec::new();
    Man::new(build_cli()).render(&mut buffer)?;
    fs::write(man_dir.join("linkchain.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
