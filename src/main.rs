use clap::Parser;
use gss::cli::args::Cli;
use gss::cli::commands::execute_command;
use gss::cli::output;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

fn main() {
    let cli = Cli::parse();

    init_logging(log_level(cli.debug));

    if let Err(e) = execute_command(&cli) {
        output::error(&e);
        std::process::exit(e.exit_code());
    }
}

/// `-d` count to log level; warnings only by default.
fn log_level(debug: u8) -> LevelFilter {
    match debug {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn init_logging(level: LevelFilter) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(level))
        .init();

    tracing::debug!(%level, "logging initialised");
}

#[cfg(test)]
mod tests {
    use super::*;
    use gss::util::testing;

    #[test]
    fn verify_cli() {
        testing::init_test_setup();
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn given_debug_count_when_mapping_then_saturates_at_trace() {
        assert_eq!(log_level(0), LevelFilter::WARN);
        assert_eq!(log_level(2), LevelFilter::DEBUG);
        assert_eq!(log_level(7), LevelFilter::TRACE);
    }
}
