use anyhow::Context;
use task_config::TaskCliConfig;

use crate::cli::Cli;

/// Load `.env`, layered configuration and command-line storage overrides.
pub fn load_config(cli: &Cli) -> anyhow::Result<TaskCliConfig> {
    load_dotenv()?;

    let mut config = TaskCliConfig::load().context("failed to load task-cli configuration")?;
    cli.apply_storage_overrides(&mut config);

    tracing::debug!(
        backend = %config.storage.backend,
        path = %config.storage.resolved_path().display(),
        "configuration loaded"
    );
    Ok(config)
}

/// Load `.env` from the working directory when present.
fn load_dotenv() -> anyhow::Result<()> {
    let env_path = std::env::current_dir()
        .context("failed to determine current directory")?
        .join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    }
    Ok(())
}
