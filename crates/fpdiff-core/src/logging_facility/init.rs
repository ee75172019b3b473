//! Subscriber setup. Output goes to stderr in every profile.

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable lines, `fpdiff=debug`.
    Development,
    /// One JSON object per event, `fpdiff=info`.
    Production,
    /// Bare registry; tests install their own capture layer.
    Test,
}

static INIT_ONCE: Once = Once::new();

/// Install the global subscriber for `profile`. Only the first call has an effect.
///
/// `RUST_LOG` replaces the profile's default filter.
///
/// ```
/// use fpdiff_core::logging_facility::{init, Profile};
///
/// init(Profile::Development);
/// ```
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| match profile {
        Profile::Development => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new("fpdiff=debug")),
                )
                .init();
        }
        Profile::Production => {
            tracing_subscriber::fmt()
                .json()
                .with_writer(std::io::stderr)
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new("fpdiff=info")),
                )
                .init();
        }
        Profile::Test => {
            let _ = tracing_subscriber::registry().try_init();
        }
    });
}
