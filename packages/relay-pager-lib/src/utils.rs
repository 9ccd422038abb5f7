use crate::config::PagerConfig;
use anyhow::Result;
use std::{env, str::FromStr};
use tracing_subscriber::filter::EnvFilter;

const RUST_LOG: &str = "RUST_LOG";
const HUMAN_LOGGING: &str = "HUMAN_LOGGING";

/// Initialize the logging context for the relay pager.
pub fn init_logging(config: &PagerConfig) -> Result<()> {
    let level = env::var_os(RUST_LOG)
        .and_then(|x| x.into_string().ok())
        .unwrap_or_else(|| config.log_level.clone());

    // Keep the execution engine quiet unless asked otherwise.
    if !config.verbose {
        env::set_var(RUST_LOG, format!("{level},async_graphql=warn"));
    } else {
        env::set_var(RUST_LOG, level);
    }

    let filter = EnvFilter::try_from_default_env()
        .map_err(|e| anyhow::anyhow!("Invalid `RUST_LOG` provided: {e}"))?;

    let human_logging = match env::var_os(HUMAN_LOGGING) {
        Some(s) => bool::from_str(&s.to_string_lossy()).map_err(|_| {
            anyhow::anyhow!(
                "Expected `true` or `false` to be provided for `HUMAN_LOGGING`"
            )
        })?,
        None => true,
    };

    let sub = tracing_subscriber::fmt::Subscriber::builder()
        .with_writer(std::io::stderr)
        .with_env_filter(filter);

    if human_logging {
        sub.with_ansi(true)
            .with_level(true)
            .with_line_number(true)
            .try_init()
            .map_err(|e| anyhow::anyhow!(e))?;
    } else {
        sub.with_ansi(false)
            .with_level(true)
            .with_line_number(true)
            .json()
            .try_init()
            .map_err(|e| anyhow::anyhow!(e))?;
    }
    Ok(())
}
