use crate::error::SimError;
use tracing_subscriber::EnvFilter;

/// Level chosen from the command line, or `None` to defer to config.
pub fn cli_level(verbose: u8, quiet: bool) -> Option<&'static str> {
    if quiet {
        return Some("error");
    }
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

/// `RUST_LOG` wins over flags, flags win over the configured level.
pub fn init(verbose: u8, quiet: bool, configured_level: &str) -> Result<(), SimError> {
    let level = cli_level(verbose, quiet).unwrap_or(configured_level);
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level).map_err(|source| {
            SimError::Telemetry(format!("invalid log level/filter '{level}': {source}"))
        })?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(|err| SimError::Telemetry(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_overrides_verbosity() {
        assert_eq!(cli_level(0, true), Some("error"));
    }

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(cli_level(0, false), None);
        assert_eq!(cli_level(1, false), Some("info"));
        assert_eq!(cli_level(2, false), Some("debug"));
        assert_eq!(cli_level(5, false), Some("trace"));
    }
}
