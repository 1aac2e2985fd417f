//! Logging setup for board-building programs
//!
//! The library itself only emits through the `log` facade. Binaries call
//! [`init`] once; `RUST_LOG` still overrides the default level.

pub use log::LevelFilter;

/// Initialize `env_logger` with `default_level` unless `RUST_LOG` says otherwise.
///
/// Calling it a second time is a no-op.
pub fn init(default_level: LevelFilter) {
    let result = env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .format_timestamp(None)
        .try_init();

    if result.is_ok() {
        log::debug!("Logging initialized at {}", default_level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_is_harmless() {
        init(LevelFilter::Warn);
        init(LevelFilter::Debug);
        log::info!("still logging");
    }
}
