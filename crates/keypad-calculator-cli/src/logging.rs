//! Log subscriber setup

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::config::Verbosity;

/// Default level for a verbosity; `RUST_LOG` directives are layered on top
#[must_use]
pub const fn level_for(verbosity: Verbosity) -> LevelFilter {
    match verbosity {
        Verbosity::Quiet => LevelFilter::OFF,
        Verbosity::Normal => LevelFilter::ERROR,
        Verbosity::Verbose => LevelFilter::DEBUG,
        Verbosity::Debug => LevelFilter::TRACE,
    }
}

/// Installs the global subscriber, writing to stderr.
///
/// A second call is a no-op.
pub fn init(verbosity: Verbosity) {
    let filter = EnvFilter::from_default_env().add_directive(level_for(verbosity).into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for() {
        assert_eq!(level_for(Verbosity::Quiet), LevelFilter::OFF);
        assert_eq!(level_for(Verbosity::Normal), LevelFilter::ERROR);
        assert_eq!(level_for(Verbosity::Verbose), LevelFilter::DEBUG);
        assert_eq!(level_for(Verbosity::Debug), LevelFilter::TRACE);
    }

    #[test]
    fn test_init_twice() {
        init(Verbosity::Quiet);
        init(Verbosity::Debug);
    }
}
