//! Record layout: `timestamp - name - LEVEL - message`

use std::fmt;

use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// Level name as written in a record
///
/// WARN is spelled out as `WARNING`.
pub fn level_name(level: &Level) -> &'static str {
    if *level == Level::ERROR {
        "ERROR"
    } else if *level == Level::WARN {
        "WARNING"
    } else if *level == Level::INFO {
        "INFO"
    } else if *level == Level::DEBUG {
        "DEBUG"
    } else {
        "TRACE"
    }
}

/// Event formatter bound to one logger name
#[derive(Debug, Clone)]
pub struct RecordFormat {
    logger_name: String,
    timestamp_format: String,
}

impl RecordFormat {
    pub fn new(logger_name: impl Into<String>, timestamp_format: impl Into<String>) -> Self {
        Self {
            logger_name: logger_name.into(),
            timestamp_format: timestamp_format.into(),
        }
    }
}

impl<S, N> FormatEvent<S, N> for RecordFormat
where
    S: Subscriber + for<'lookup> LookupSpan<'lookup>,
    N: for<'writer> FormatFields<'writer> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        write!(
            writer,
            "{} - {} - {} - ",
            chrono::Local::now().format(&self.timestamp_format),
            self.logger_name,
            level_name(event.metadata().level()),
        )?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}
