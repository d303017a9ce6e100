use crate::config::ConsoleConfig;
use crate::error::StackTrace;
use crate::handler::Handler;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

mod config;
mod error;
mod handler;
mod report;

fn main() -> Result<(), StackTrace> {
    let config = ConsoleConfig::from_env()?;

    let appender = tracing_appender::rolling::daily(config.log_dir(), config.log_file());
    let (non_blocking_appender, _guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_filter(tracing_subscriber::EnvFilter::new(config.log_filter()))
                .with_filter(tracing_subscriber::filter::LevelFilter::DEBUG),
        )
        .with(
            tracing_subscriber::fmt::Layer::default()
                .with_writer(non_blocking_appender)
                .with_ansi(false)
                .with_filter(tracing_subscriber::filter::LevelFilter::DEBUG),
        )
        .init();

    let handler = Handler::init()?;
    report::report(&handler)?;

    Ok(())
}
