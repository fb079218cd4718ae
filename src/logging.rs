//! Default log subscriber.
//!
//! The library only emits through the `log` facade. Applications that have no
//! logger of their own can call [`init`].

use env_logger::{Builder, Env};

/// Environment variable holding the log filter (`error`, `warn`, `info`,
/// `debug`, `trace`, or an `env_logger` directive list).
pub const LOG_ENV: &str = "LOGLEVEL";

/// Filter used when [`LOG_ENV`] is unset.
pub const DEFAULT_LEVEL: &str = "info";

/// Install `env_logger`, filtered by the `LOGLEVEL` environment variable.
///
/// Returns `false` if a logger was already installed, in which case nothing
/// changes. Safe to call any number of times.
pub fn init() -> bool {
    builder().try_init().is_ok()
}

fn builder() -> Builder {
    let mut builder = Builder::from_env(Env::default().filter_or(LOG_ENV, DEFAULT_LEVEL));
    builder.format_module_path(false).format_timestamp_millis();
    builder
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init();
        assert!(!init());
        log::debug!("logger installed");
    }
}
