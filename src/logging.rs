//! Logger setup
//!
//! `RUST_LOG` wins when set; otherwise the configured level applies.

use env_logger::{Builder, Env};

/// Install the global logger; later calls are ignored
pub fn init(default_level: &str) {
    let level = match default_level.trim() {
        "" => "warn",
        other => other,
    };

    let result = Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp(None)
        .try_init();

    if result.is_err() {
        log::debug!("logger already initialised");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_does_not_panic() {
        init("warn");
        init("");
    }
}
