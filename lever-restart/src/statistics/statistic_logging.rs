//! The process-wide sink of the statistics; every statistic is written as a single line of the
//! form `{prefix} {name}={value}`.

use std::fmt::Debug;
use std::fmt::Display;
use std::io::stdout;
use std::io::Write;
use std::sync::Mutex;
use std::sync::OnceLock;

use convert_case::Case;
use convert_case::Casing;

/// Where and how the statistics are written.
struct StatisticSink {
    prefix: &'static str,
    /// When set, the names of the statistics are converted to this casing before being written.
    casing: Option<Case>,
    writer: Box<dyn Write + Send>,
}

impl Debug for StatisticSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatisticSink")
            .field("prefix", &self.prefix)
            .field("casing", &self.casing)
            .finish_non_exhaustive()
    }
}

impl StatisticSink {
    fn write(&mut self, name: impl Display, value: impl Display) {
        let name = match self.casing {
            Some(casing) => name.to_string().to_case(casing),
            None => name.to_string(),
        };
        let _ = writeln!(self.writer, "{} {name}={value}", self.prefix);
    }
}

static STATISTIC_SINK: OnceLock<Mutex<StatisticSink>> = OnceLock::new();

/// Enables the logging of statistics.
///
/// Every statistic is written on its own line, starting with `prefix`, to `writer` (or stdout if
/// none is given). Only the first call has an effect; until it is made, statistics are discarded.
pub fn configure_statistic_logging(
    prefix: &'static str,
    casing: Option<Case>,
    writer: Option<Box<dyn Write + Send>>,
) {
    let _ = STATISTIC_SINK.get_or_init(|| {
        Mutex::new(StatisticSink {
            prefix,
            casing,
            writer: writer.unwrap_or_else(|| Box::new(stdout())),
        })
    });
}

/// Writes the statistic `name` with `value`, if the logging of statistics has been configured.
pub fn log_statistic(name: impl Display, value: impl Display) {
    let Some(sink) = STATISTIC_SINK.get() else {
        return;
    };
    if let Ok(mut sink) = sink.lock() {
        sink.write(name, value);
    }
}
