use clap::ValueEnum;
use meshcfg_frame::DebugSink;
use tracing::level_filters::LevelFilter;

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_filter(self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

/// Install the stderr subscriber. Stdout is reserved for command output.
pub fn init_logging(format: LogFormat, level: LogLevel) {
    let builder = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level.as_filter())
        .with_ansi(false)
        .with_target(false);

    match format {
        LogFormat::Text => {
            let _ = builder.try_init();
        }
        LogFormat::Json => {
            let _ = builder.json().try_init();
        }
    }
}

/// Where the radio's own console output goes.
///
/// With `echo` set, lines are written to stderr as they arrive; otherwise
/// they only show up in the log at debug level.
#[derive(Debug, Clone, Copy)]
pub struct DeviceConsole {
    echo: bool,
}

impl DeviceConsole {
    pub fn new(echo: bool) -> Self {
        Self { echo }
    }
}

impl DebugSink for DeviceConsole {
    fn offer(&mut self, line: String) -> bool {
        if self.echo {
            eprintln!("device: {line}");
        } else {
            tracing::debug!(device = %line, "device output");
        }
        true
    }
}
