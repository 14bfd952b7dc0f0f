// ==============================================================================
// CLI for the safeinstall Typo-Squatting Guard
// ==============================================================================
//
// Two subcommands:
//   - `safeinstall install <PACKAGE>` -- classify, confirm if suspicious, then
//     hand off to the real package manager
//   - `safeinstall check <PACKAGE>`   -- classify and report, never install

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use miette::Context;

use safeinstall::error::SafeinstallError;
use safeinstall::install::{install_package, package_manager};
use safeinstall::prompt::select_package;
use safeinstall::{Classification, Corpus};

// ==============================================================================
// CLI Argument Definitions
// ==============================================================================

#[derive(Parser)]
#[command(name = "safeinstall", about = "npm install wrapper that catches typo-squatted names")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Install a package, prompting first if its name looks like a typo of a
    /// trusted package.
    Install {
        /// Package name, exactly as it would be passed to the installer.
        package: String,
        /// Newline-delimited file of trusted package names.
        #[arg(long, default_value = "trusted-packages.txt")]
        corpus: PathBuf,
        /// Maximum edit distance still treated as "suspiciously close".
        #[arg(long, default_value_t = 2)]
        threshold: usize,
        /// Skip the confirmation prompt and install the name as typed.
        #[arg(long, short = 'y')]
        yes: bool,
    },
    /// Classify a package name against the trusted corpus without installing.
    ///
    /// Exits 0 for trusted or unrecognized names, 2 for a suspected typo.
    Check {
        /// Package name to classify.
        package: String,
        /// Newline-delimited file of trusted package names.
        #[arg(long, default_value = "trusted-packages.txt")]
        corpus: PathBuf,
        /// Maximum edit distance still treated as "suspiciously close".
        #[arg(long, default_value_t = 2)]
        threshold: usize,
        /// Emit a machine-readable JSON report instead of prose.
        #[arg(long)]
        json: bool,
    },
}

// ==============================================================================
// Entry Point
// ==============================================================================

fn main() -> miette::Result<ExitCode> {
    miette::set_hook(Box::new(|_| {
        Box::new(miette::MietteHandlerOpts::new().build())
    }))?;

    let cli = Cli::parse();

    match cli.command {
        Command::Install {
            package,
            corpus,
            threshold,
            yes,
        } => run_install(&package, &corpus, threshold, yes),
        Command::Check {
            package,
            corpus,
            threshold,
            json,
        } => run_check(&package, &corpus, threshold, json),
    }
}

// ==============================================================================
// `install` Subcommand
// ==============================================================================

fn run_install(
    package: &str,
    corpus_path: &Path,
    threshold: usize,
    yes: bool,
) -> miette::Result<ExitCode> {
    let corpus = Corpus::load(corpus_path)
        .map_err(miette::Report::new)
        .wrap_err("load trusted corpus")?;

    let chosen = match corpus.classify(package, threshold) {
        // Exact match or a genuinely novel name: proceed without ceremony.
        // This tool only blocks names suspiciously close to trusted ones.
        Classification::Trusted | Classification::Unrecognized => package.to_string(),
        Classification::SuspectedTypo(candidates) => {
            if yes {
                package.to_string()
            } else {
                let stdin = io::stdin();
                let selection = select_package(package, &candidates, stdin.lock(), io::stderr())
                    .map_err(miette::Report::new)?;
                match selection {
                    Some(name) => name,
                    None => {
                        eprintln!("Installation aborted.");
                        return Ok(ExitCode::FAILURE);
                    }
                }
            }
        }
    };

    dispatch_install(&chosen)
}

/// Hand the final chosen name to the package manager. The child's exit status
/// becomes this process's exit status.
fn dispatch_install(package: &str) -> miette::Result<ExitCode> {
    let program = package_manager();
    let status = install_package(&program, package).map_err(miette::Report::new)?;

    if status.success() {
        Ok(ExitCode::SUCCESS)
    } else {
        // Mirror the installer's exit code where the platform exposes one
        // (a signal-terminated child on Unix has no code).
        let code = status
            .code()
            .and_then(|c| u8::try_from(c).ok())
            .unwrap_or(1);
        eprintln!(
            "{}",
            SafeinstallError::InstallFailed {
                package: package.to_string(),
                status,
            }
        );
        Ok(ExitCode::from(code))
    }
}

// ==============================================================================
// `check` Subcommand
// ==============================================================================

fn run_check(
    package: &str,
    corpus_path: &Path,
    threshold: usize,
    json: bool,
) -> miette::Result<ExitCode> {
    let corpus = Corpus::load(corpus_path)
        .map_err(miette::Report::new)
        .wrap_err("load trusted corpus")?;

    let classification = corpus.classify(package, threshold);

    if json {
        println!("{}", render_json(package, &classification));
    } else {
        match &classification {
            Classification::Trusted => println!("'{package}' is a trusted package."),
            Classification::SuspectedTypo(candidates) => {
                println!("'{package}' looks like a typo of:");
                for candidate in candidates {
                    println!("  {candidate}");
                }
            }
            Classification::Unrecognized => {
                println!("'{package}' is not close to any trusted package.");
            }
        }
    }

    // Exit 2 on a suspected typo so scripts can gate on the result.
    match classification {
        Classification::SuspectedTypo(_) => Ok(ExitCode::from(2)),
        Classification::Trusted | Classification::Unrecognized => Ok(ExitCode::SUCCESS),
    }
}

/// Render the classification as a single-line JSON report.
fn render_json(package: &str, classification: &Classification) -> String {
    let report = match classification {
        Classification::Trusted => serde_json::json!({
            "package": package,
            "classification": "trusted",
        }),
        Classification::SuspectedTypo(candidates) => serde_json::json!({
            "package": package,
            "classification": "suspected-typo",
            "candidates": candidates,
        }),
        Classification::Unrecognized => serde_json::json!({
            "package": package,
            "classification": "unrecognized",
        }),
    };
    report.to_string()
}
