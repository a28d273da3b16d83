//! Logging setup for the command-line tool.
//!
//! All log output goes to stderr so stdout carries nothing but the box.
//!
//! ## Environment Variables
//!
//! * `BOXOUT_LOG` - Filter directives (e.g. `boxout_render=trace`)
//! * `RUST_LOG` - Used when `BOXOUT_LOG` is unset
//! * `BOXOUT_LOG_FORMAT` - `json` for JSON lines, anything else for text

use std::io;
use std::sync::Once;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

/// Installs the global subscriber. Later calls are no-ops.
///
/// `verbosity` is the number of `-v` flags: 0 logs warnings, 1 debug, 2+ trace.
/// An explicit `BOXOUT_LOG` filter always wins over the flag.
pub fn init(verbosity: u8) {
    INIT.call_once(|| {
        let filter = create_env_filter(verbosity);
        let format = std::env::var("BOXOUT_LOG_FORMAT").unwrap_or_default();

        let result = match format.as_str() {
            "json" => tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_writer(io::stderr),
                )
                .with(filter)
                .try_init(),
            _ => tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_writer(io::stderr))
                .with(filter)
                .try_init(),
        };

        if result.is_ok() {
            tracing::debug!(verbosity, format = %format, "logging initialized");
        }
    });
}

fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

fn create_env_filter(verbosity: u8) -> EnvFilter {
    if let Ok(spec) = std::env::var("BOXOUT_LOG") {
        return EnvFilter::try_new(&spec).unwrap_or_else(|_| {
            eprintln!(
                "Invalid BOXOUT_LOG specification '{}', using '{}'",
                spec,
                level_for(verbosity)
            );
            EnvFilter::new(level_for(verbosity))
        });
    }
    if verbosity > 0 {
        return EnvFilter::new(level_for(verbosity));
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_for(0)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for(0), "warn");
        assert_eq!(level_for(1), "debug");
        assert_eq!(level_for(2), "trace");
        assert_eq!(level_for(9), "trace");
    }

    #[test]
    fn init_is_idempotent() {
        init(0);
        init(2);
    }
}
