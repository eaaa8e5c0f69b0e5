//! Utilities for logging.
use std::sync::Once;

use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    HumanReadable,
}

/// Configure the global subscriber.
///
/// `default_level` is used unless overridden through `RUST_LOG`. Calling this
/// more than once is a no-op after the first successful install.
pub fn configure_global_logger<W>(default_level: Level, format: LogFormat, writer: W)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(writer)
        .with_file(true)
        .with_line_number(true);

    // Ignore errors from an already installed global subscriber.
    let _ = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::HumanReadable => builder.try_init(),
    };
}

static TEST_INIT: Once = Once::new();

/// Install a subscriber that writes through the test harness's captured
/// output.
///
/// Safe to call at the start of every test.
pub fn init_test() {
    TEST_INIT.call_once(|| {
        let env_filter = EnvFilter::builder()
            .with_default_directive(Level::DEBUG.into())
            .from_env_lossy();

        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter(env_filter)
            .with_file(true)
            .with_line_number(true)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_test_is_reentrant() {
        init_test();
        init_test();
        tracing::debug!("logger installed");
    }
}
