use anyhow::Result;

pub const DEFAULT_FILTER: &str = "softsell=info";

/// Installs the global `tracing` subscriber. Fails on a malformed directive or
/// when a subscriber is already installed.
#[cfg(not(target_arch = "wasm32"))]
pub fn init(directive: &str) -> Result<()> {
    use anyhow::Context;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(directive)
        .with_context(|| format!("invalid log filter '{directive}'"))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to install tracing subscriber: {err}"))
}

#[cfg(target_arch = "wasm32")]
pub fn init(_directive: &str) -> Result<()> {
    Ok(())
}
