//! Build script for fileselection-cli.
//!
//! This script generates a man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    let paths = || {
        Arg::new("paths")
            .value_name("PATHS")
            .num_args(1..)
            .help("Paths relative to the current directory, or absolute")
    };

    Command::new("fileselection")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Keep a persisted selection of files within a folder")
        .long_about(
            "Command-line tool for keeping a hand-editable selection of files, \
             stored as a .fileselection file inside the folder it describes",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("dir")
                .long("dir")
                .help("Folder holding the selection (defaults to the current directory)")
                .value_name("PATH")
                .global(true)
                .env("FILESELECTION_DIR"),
        )
        .arg(
            Arg::new("config-dir")
                .long("config-dir")
                .help("Override the configuration directory")
                .value_name("PATH")
                .global(true)
                .env("FILESELECTION_CONFIG_DIR"),
        )
        .subcommands(vec![
            Command::new("init")
                .about("Create a new selection in the folder")
                .arg(
                    Arg::new("description")
                        .long("description")
                        .short('d')
                        .value_name("TEXT")
                        .help("Description of the selection"),
                )
                .arg(
                    Arg::new("force")
                        .long("force")
                        .help("Replace an existing selection")
                        .action(ArgAction::SetTrue),
                )
                .arg(paths().required(false)),
            Command::new("add")
                .about("Add paths to the selection")
                .arg(paths().required(true)),
            Command::new("remove")
                .about("Remove paths from the selection")
                .arg(paths().required(true)),
            Command::new("list")
                .about("List the selected paths")
                .arg(
                    Arg::new("absolute")
                        .long("absolute")
                        .help("Print absolute paths")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .value_name("FORMAT")
                        .value_parser(["text", "json"])
                        .help("Output format"),
                ),
            Command::new("show").about("Show selection metadata"),
            Command::new("describe")
                .about("Change the selection description")
                .arg(Arg::new("text").value_name("TEXT").required(true)),
            Command::new("status")
                .about("Check whether the folder holds a selection")
                .long_about("Exit with status 0 if the folder holds a selection, 1 otherwise"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("fileselection.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
