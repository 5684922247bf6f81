use clap::Parser;

mod bootstrap;
mod cli;
mod commands;
mod context;
mod error;
mod output;

use error::{EXIT_OK, EXIT_USAGE, exit_code_for};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = match cli::Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => {
            let code = if error.use_stderr() { EXIT_USAGE } else { EXIT_OK };
            let _ = error.print();
            std::process::exit(code);
        }
    };

    let code = match run(cli).await {
        Ok(()) => EXIT_OK,
        Err(error) => report(&error),
    };
    std::process::exit(code);
}

async fn run(cli: cli::Cli) -> anyhow::Result<()> {
    init_tracing(cli.quiet, cli.verbose)?;

    let config = bootstrap::load_config(&cli)?;
    let flags = cli.global_flags(&config);
    let mut ctx = context::AppContext::open(&config.storage).await?;

    commands::dispatch::dispatch(cli.command, &mut ctx, &flags).await
}

/// Print a failure to stderr and pick the exit code.
fn report(error: &anyhow::Error) -> i32 {
    if error.downcast_ref::<error::CommandError>().is_some() {
        eprintln!("{error}");
    } else {
        eprintln!("task-cli error: {error:#}");
    }
    exit_code_for(error)
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("TASK_CLI_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
