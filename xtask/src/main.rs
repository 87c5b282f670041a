use std::process::{Command, ExitCode};

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xtask", about = "recache dev tasks")]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Run clippy --fix then cargo +nightly fmt
    Fmt {
        /// Extra arguments passed to `cargo fmt`
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Test the recache crate under each feature combination
    FeatureMatrix,
    /// Run the recache caching benchmarks
    Bench {
        /// Extra arguments passed to the divan harness
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

const FEATURE_SETS: &[&[&str]] = &[
    &["--no-default-features"],
    &[],
    &["--features", "tracing"],
    &["--all-features"],
];

fn run(cmd: &mut Command) -> Result<(), String> {
    let status = cmd
        .status()
        .map_err(|e| format!("failed to run {:?}: {e}", cmd.get_program()))?;
    if !status.success() {
        return Err(format!("{:?} exited with {status}", cmd.get_program()));
    }
    Ok(())
}

fn cmd_fmt(args: &[String]) -> Result<(), String> {
    run(Command::new("cargo").args(["clippy", "--fix", "--allow-dirty", "--allow-staged"]))?;
    let mut cmd = Command::new("cargo");
    cmd.args(["+nightly", "fmt"]);
    cmd.args(args);
    run(&mut cmd)
}

fn cmd_feature_matrix() -> Result<(), String> {
    for features in FEATURE_SETS {
        println!("Testing recache with {features:?}...");
        run(Command::new("cargo")
            .args(["test", "-p", "recache"])
            .args(*features))?;
    }
    Ok(())
}

fn cmd_bench(args: &[String]) -> Result<(), String> {
    let mut cmd = Command::new("cargo");
    cmd.args(["bench", "-p", "recache", "--bench", "caching", "--"]);
    cmd.args(args);
    run(&mut cmd)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let result = match &cli.cmd {
        Cmd::Fmt { args } => cmd_fmt(args),
        Cmd::FeatureMatrix => cmd_feature_matrix(),
        Cmd::Bench { args } => cmd_bench(args),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            eprintln!("error: {msg}");
            ExitCode::FAILURE
        }
    }
}
