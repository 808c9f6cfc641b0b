// SPDX-License-Identifier: MPL-2.0
use kutu_landing::app::{self, paths, Flags};
use kutu_landing::config;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        data_dir: args.opt_value_from_str("--data-dir").unwrap_or(None),
        config_dir: args.opt_value_from_str("--config-dir").unwrap_or(None),
        log_level: args.opt_value_from_str("--log-level").unwrap_or(None),
    };

    paths::init_cli_overrides(flags.data_dir, flags.config_dir);

    let (config, warning) = config::load();
    let level = flags
        .log_level
        .unwrap_or_else(|| config.log_level().to_string());
    setup_tracing(&level);

    if let Some(key) = warning {
        tracing::warn!(warning = %key, "using default settings");
    }

    app::run(config)
}

/// `RUST_LOG` wins; otherwise the CLI or config filter applies.
fn setup_tracing(level: &str) {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_LEVEL));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}
