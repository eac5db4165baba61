//! Diagnostic logging to stderr.
//!
//! Game output goes to stdout; anything from `tracing` goes to stderr so the
//! two never interleave in a pipe. `RUST_LOG` wins over the default level.

use tracing_subscriber::EnvFilter;

/// Default filter directive: `debug` for this crate when verbose, else `warn`.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose { "trivia=debug" } else { "warn" }
}

/// Install the global subscriber. Call once, from `main`.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_enables_debug_for_crate() {
        assert_eq!(default_directive(true), "trivia=debug");
        assert_eq!(default_directive(false), "warn");
    }

    #[test]
    fn directives_parse() {
        assert!(EnvFilter::try_new(default_directive(true)).is_ok());
        assert!(EnvFilter::try_new(default_directive(false)).is_ok());
    }
}
