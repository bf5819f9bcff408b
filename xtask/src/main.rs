use std::process;

use anyhow::Result;
use clap::{ArgMatches, Command};

const BIN_NAME: &str = "cookify";

fn main() -> Result<()> {
    let args = clap::command!()
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(Command::new("install").about("Install cookify binary locally"))
        .subcommand(
            Command::new("run")
                .about("Build and run cookify with arguments")
                .trailing_var_arg(true)
                .allow_hyphen_values(true)
                .arg(clap::Arg::new("args")
                    .help("Arguments to pass to cookify")
                    .action(clap::ArgAction::Append)
                    .num_args(0..))
        )
        .subcommand(
            Command::new("test")
                .about("Test Operations")
                .subcommand(Command::new("all").about("Run all tests for the entire project"))
                .subcommand(Command::new("core").about("Run tests for cookify-core"))
                .subcommand(Command::new("bin").about("Run tests for cookify-bin"))
                .subcommand(Command::new("integration").about("Run CLI smoke tests"))
        )
        .get_matches();

    match args.subcommand() {
        Some(("install", _args)) => handle_install_command(),
        Some(("run", args)) => handle_run_command(args),
        Some(("test", args)) => handle_test_commands(args),
        Some((command, _)) => anyhow::bail!("Unexpected command: {command}"),
        None => anyhow::bail!("Expected subcommand"),
    }
}

fn cargo(args: &[&str], failure: &str) -> Result<()> {
    let status = process::Command::new("cargo").args(args).status()?;

    if !status.success() {
        anyhow::bail!("{failure}");
    }
    Ok(())
}

fn handle_install_command() -> Result<()> {
    println!("Installing {BIN_NAME}...");
    cargo(&["install", "--path", "crates/cookify-bin"], "Failed to install cookify")?;
    println!("✓ {BIN_NAME} installed successfully");
    Ok(())
}

fn handle_run_command(args: &ArgMatches) -> Result<()> {
    println!("Building and running {BIN_NAME}...");

    let run_args: Vec<String> = args.get_many::<String>("args")
        .map_or(Vec::new(), |vals| vals.cloned().collect());

    let mut command: Vec<&str> = vec!["run", "--bin", BIN_NAME, "--"];
    command.extend(run_args.iter().map(String::as_str));

    cargo(&command, "Failed to run cookify")
}

fn handle_test_commands(args: &ArgMatches) -> Result<()> {
    match args.subcommand() {
        Some(("all", _args)) => test_all(),
        Some(("core", _args)) => test_core(),
        Some(("bin", _args)) => test_bin(),
        Some(("integration", _args)) => test_integration(),
        _ => {
            println!("Available test commands:");
            println!("  all          - Run all tests for the entire project");
            println!("  core         - Run tests for cookify-core");
            println!("  bin          - Run tests for cookify-bin");
            println!("  integration  - Run CLI smoke tests");
            Ok(())
        }
    }
}

fn test_all() -> Result<()> {
    println!("🧪 Running all tests for the cookify project...\n");

    let suites: [(&str, fn() -> Result<()>); 4] = [
        ("cookify-core", test_core),
        ("cookify-bin", test_bin),
        ("documentation", test_docs),
        ("integration", test_integration),
    ];

    let mut all_passed = true;
    for (name, suite) in suites {
        println!("▶ Running {name} tests...");
        match suite() {
            Ok(()) => println!("✅ {name} tests passed\n"),
            Err(error) => {
                all_passed = false;
                println!("❌ {name} tests failed: {error:?}\n");
            }
        }
    }

    if !all_passed {
        println!("💥 Some tests failed. Please check the output above.");
        anyhow::bail!("Test suite failed");
    }

    println!("🎉 All tests passed successfully!");
    Ok(())
}

fn test_core() -> Result<()> {
    cargo(&["test", "--package", "cookify-core"], "Core tests failed")
}

fn test_bin() -> Result<()> {
    cargo(&["test", "--package", "cookify-bin"], "Binary tests failed")
}

fn test_docs() -> Result<()> {
    // Only the core crate has a library target
    cargo(&["test", "--doc", "--package", "cookify-core"], "Documentation tests failed")
}

fn test_integration() -> Result<()> {
    cargo(&["build", "--bin", BIN_NAME], "Failed to build cookify binary")?;
    cargo(&["run", "--bin", BIN_NAME, "--", "--help"], "CLI help command failed")?;
    cargo(&["run", "--bin", BIN_NAME, "--", "solution", "--help"], "CLI solution help command failed")?;
    cargo(&["run", "--bin", BIN_NAME, "--", "generic", "--help"], "CLI generic help command failed")?;
    cargo(&["run", "--bin", BIN_NAME, "--", "--version"], "CLI version command failed")
}
