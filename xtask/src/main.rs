use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use std::process::Command;

#[derive(Parser)]
#[command(name = "xtask", about = "Workspace automation for noiseplane")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run fmt, clippy, tests and doc in sequence
    Check,
    /// Run cargo fmt --check on all crates
    Fmt,
    /// Run clippy with warnings denied
    Clippy,
    /// Run all tests
    Test,
    /// Build rustdoc for the workspace
    Doc,
    /// Run the math micro-benchmarks in release mode
    Bench,
    /// Generate a noise texture through the CLI as a smoke test
    Smoke {
        /// Where to write the PGM file
        #[arg(long, default_value = "target/noise.pgm")]
        out: String,
    },
}

/// A cargo invocation with the label printed before it runs.
struct Step {
    label: &'static str,
    args: Vec<String>,
}

impl Step {
    fn new(label: &'static str, args: &[&str]) -> Self {
        Self {
            label,
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    fn run(&self) -> Result<()> {
        println!("==> {}", self.label);
        let status = Command::new("cargo").args(&self.args).status()?;
        if !status.success() {
            bail!("{} failed ({status})", self.label);
        }
        Ok(())
    }
}

fn fmt() -> Step {
    Step::new("cargo fmt --check", &["fmt", "--all", "--", "--check"])
}

fn clippy() -> Step {
    Step::new(
        "cargo clippy",
        &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"],
    )
}

fn test() -> Step {
    Step::new("cargo test", &["test", "--workspace"])
}

fn doc() -> Step {
    Step::new("cargo doc", &["doc", "--workspace", "--no-deps"])
}

fn bench() -> Step {
    Step::new(
        "math benchmarks",
        &["bench", "-p", "noiseplane-math", "--bench", "bench_transforms"],
    )
}

fn smoke(out: &str) -> Step {
    Step::new(
        "noise smoke test",
        &["run", "-p", "noiseplane-cli", "--", "noise", "--out", out],
    )
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let steps = match cli.command {
        Commands::Check => vec![fmt(), clippy(), test(), doc()],
        Commands::Fmt => vec![fmt()],
        Commands::Clippy => vec![clippy()],
        Commands::Test => vec![test()],
        Commands::Doc => vec![doc()],
        Commands::Bench => vec![bench()],
        Commands::Smoke { out } => vec![smoke(&out)],
    };

    for step in &steps {
        step.run()?;
    }
    Ok(())
}
