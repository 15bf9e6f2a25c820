use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;

static INIT: Once = Once::new();

/// Logs go to stderr; `RUST_LOG` overrides the default levels.
pub fn initialize_logger() {
    INIT.call_once_force(|_| {
        let mut builder = Builder::new();

        builder
            .filter_level(LevelFilter::Warn)
            .filter_module("phone_book", LevelFilter::Info)
            .format_timestamp_millis()
            .parse_default_env();

        // Tests may already have installed a logger.
        let _ = builder.try_init();
    });
}
