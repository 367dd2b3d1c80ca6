use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt};

/// Уровень логов, если ни `LOG_LEVEL`, ни `RUST_LOG` не заданы.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Логи пишутся в stderr, чтобы не смешиваться с выводом команд.
pub fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| level_filter(level));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|e| anyhow!("failed to init logging: {e}"))?;

    Ok(())
}

/// Некорректная строка уровня заменяется на [`DEFAULT_LOG_LEVEL`].
fn level_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

#[cfg(test)]
mod tests {
    use tracing_subscriber::filter::LevelFilter;

    use super::*;

    #[test]
    fn configured_level_is_used() {
        assert_eq!(level_filter("debug").max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn invalid_level_falls_back_to_info() {
        assert_eq!(level_filter("foo=bar").max_level_hint(), Some(LevelFilter::INFO));
    }
}
