//! Ed25519 SSH key extractor CLI
//!
//! Reads an X.509 certificate (PEM or DER), extracts its Ed25519 public key
//! and writes it as a one-line OpenSSH public key file.

use clap::Parser;
use miette::{Context, Result};
use ed25519_ssh_extract::{
    ConfigManager, ConvertWorkflow, ExtractConfiguration, ExtractError, ExtractResult,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ed25519-ssh-extract")]
#[command(about = "Extract the Ed25519 public key from an X.509 certificate as an OpenSSH key")]
#[command(long_about = "
Ed25519 SSH Key Extractor - turns a certificate into an authorized_keys line

EXAMPLES:
    # PEM or DER input, default output file
    ed25519-ssh-extract device_cert.pem

    # Explicit output file and comment
    ed25519-ssh-extract device_cert.der device.pub --comment \"device-42\"

    # Show the key without writing anything
    ed25519-ssh-extract device_cert.pem --dry-run

CONFIGURATION:
    Defaults for the comment, output file and fallback scan window are read
    from <config dir>/ed25519-ssh-extract/config.toml when present.

ENVIRONMENT VARIABLES:
    RUST_LOG        Logging level (debug, info, warn, error)
")]
#[command(version)]
struct Cli {
    /// Certificate file (PEM or DER)
    #[arg(value_name = "INPUT_FILE")]
    input_file: Option<PathBuf>,

    /// Output file (defaults to the configured output, primary_ed_94_ssh.pub)
    #[arg(value_name = "OUTPUT_FILE")]
    output_file: Option<PathBuf>,

    /// Comment placed after the key (overrides config)
    #[arg(short, long, value_name = "TEXT")]
    comment: Option<String>,

    /// Configuration file to use instead of the per-user default
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write the effective configuration file and exit
    #[arg(long)]
    write_config: bool,

    /// Extract and print the key without writing the output file
    #[arg(long)]
    dry_run: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match run(cli) {
        Err(e) if e.exit_code() != 1 => {
            let code = e.exit_code();
            eprintln!("{:?}", miette::Report::new(e));
            std::process::exit(code);
        }
        result => result.context("certificate conversion failed"),
    }
}

fn run(cli: Cli) -> ExtractResult<()> {
    // Usage problems take precedence over anything the config file could report
    if cli.input_file.is_none() && !cli.write_config {
        return Err(ExtractError::Usage(
            "missing required <INPUT_FILE> argument".to_string(),
        ));
    }

    let manager = match &cli.config {
        Some(path) => ConfigManager::with_path(path),
        None => ConfigManager::new(),
    };
    let mut config = if cli.write_config && !manager.config_path().exists() {
        ExtractConfiguration::default()
    } else {
        manager.load_or_default()?
    };
    if let Some(comment) = cli.comment {
        config.comment = comment;
    }
    config.validate()?;

    if cli.write_config {
        manager.save(&config)?;
        println!("WROTE {}", manager.config_path().display());
        return Ok(());
    }

    let Some(input) = cli.input_file else {
        return Err(ExtractError::Usage(
            "missing required <INPUT_FILE> argument".to_string(),
        ));
    };
    let output = cli
        .output_file
        .unwrap_or_else(|| config.default_output.clone());

    let outcome = ConvertWorkflow::from_config(&config).run(&input, &output, cli.dry_run)?;

    match &outcome.written_to {
        Some(path) => println!("WROTE {}", path.display()),
        None => println!("DRY RUN (would write {})", output.display()),
    }
    println!("{}", outcome.line);
    println!("{}", outcome.fingerprint);
    Ok(())
}
