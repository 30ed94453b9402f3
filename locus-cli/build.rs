//! Build script for locus-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("locus")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve, list and manipulate files and folders")
        .long_about(
            "Command-line tool for working with files and folders through typed handles",
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
        .subcommands(vec![
            Command::new("resolve")
                .about("Print the canonical path of a file or folder")
                .long_about("Expand ~, resolve .. and print the path if the location exists"),
            Command::new("ls")
                .about("List the files and subfolders of a folder")
                .long_about("List children sorted by name, optionally recursive and with hidden entries"),
            Command::new("info")
                .about("Show information about a file or folder")
                .long_about("Display kind, name, extension, parent folder and timestamps"),
            Command::new("mkdir")
                .about("Create a folder")
                .long_about("Create a folder and any missing parent folders"),
            Command::new("touch")
                .about("Create a file if it does not exist")
                .long_about("Create an empty file, leaving an existing file untouched"),
            Command::new("rename")
                .about("Rename a file or folder in place")
                .long_about("Rename within the parent folder, keeping the extension by default"),
            Command::new("mv")
                .about("Move a file or folder into another folder")
                .long_about("Move a location into a destination folder without overwriting"),
            Command::new("cp")
                .about("Copy a file or folder into another folder")
                .long_about("Copy a location, recursively for folders, without overwriting"),
            Command::new("rm")
                .about("Delete a file or folder")
                .long_about("Delete a file, or a folder together with its contents"),
            Command::new("empty")
                .about("Delete everything inside a folder")
                .long_about("Delete every file and subfolder, optionally including hidden ones"),
            Command::new("is-empty")
                .about("Exit successfully if a folder is empty")
                .long_about("Exit with status 0 if the folder has no entries, 1 otherwise"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> std::io::Result<()> {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR").unwrap_or_default());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;

    fs::write(man_dir.join("locus.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
