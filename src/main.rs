use clap::Parser;
use colored::Colorize;
use secrecy::SecretString;
use std::io::IsTerminal;
use std::process::ExitCode;

use credential_demo::cli;
use credential_demo::config::{
    DemoConfig, DEFAULT_PASSWORD, DEFAULT_USERNAME, DEFAULT_WRONG_PASSWORD,
};
use credential_demo::crypto::BCRYPT_DEFAULT_COST;
use credential_demo::Result;

#[derive(Parser)]
#[command(name = "credential-demo")]
#[command(version)]
#[command(args_override_self = true)]
#[command(about = "Hash a password with Argon2id and bcrypt, verify it, and print the public half of $SSH_PRIVATE_KEY", long_about = None)]
struct Cli {
    /// Name stored in the in-memory user record
    #[arg(long, default_value = DEFAULT_USERNAME)]
    username: String,

    /// Password to hash and verify
    #[arg(long, default_value = DEFAULT_PASSWORD)]
    password: String,

    /// Password that must fail bcrypt verification
    #[arg(long, default_value = DEFAULT_WRONG_PASSWORD)]
    wrong_password: String,

    /// bcrypt work factor (4-31)
    #[arg(long, default_value_t = BCRYPT_DEFAULT_COST)]
    bcrypt_cost: u32,

    /// Skip the SSH step even if SSH_PRIVATE_KEY is set
    #[arg(long)]
    no_ssh: bool,

    /// Log every step to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl From<Cli> for DemoConfig {
    fn from(cli: Cli) -> Self {
        Self {
            username: cli.username,
            password: SecretString::new(cli.password),
            wrong_password: SecretString::new(cli.wrong_password),
            bcrypt_cost: cli.bcrypt_cost,
            ssh_from_env: !cli.no_ssh,
            ..DemoConfig::default()
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr so stdout only carries results.
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = DemoConfig::from(cli);
    let mut stdout = std::io::stdout().lock();
    cli::demo::run(&config, &mut stdout)?;
    Ok(())
}
