//! The batch run log.
//!
//! A [`RunLog`] owns its own `tracing` dispatcher instead of installing a
//! process-wide subscriber. Code run inside [`RunLog::in_scope`] logs through
//! it with the usual `tracing` macros; lines look like
//! `2024-05-01 10:00:00,123 - INFO - Moving: a -> b`.

use crate::error::Result;
use chrono::Local;
use std::fmt;
use std::io;
use std::path::Path;
use tracing::dispatcher::{self, Dispatch};
use tracing::{Event, Subscriber};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields, MakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Registry;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Formats events as `<timestamp> - <LEVEL> - <message>`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RunLogFormat;

impl<S, N> FormatEvent<S, N> for RunLogFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        write!(
            writer,
            "{} - {} - ",
            Local::now().format(TIMESTAMP_FORMAT),
            event.metadata().level()
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Logger scoped to a single batch run.
///
/// Always writes to the console sink and, when a log file is given, appends
/// to that file as well. The file handle is released when the value drops.
pub struct RunLog {
    dispatch: Dispatch,
}

impl RunLog {
    /// Console on stderr plus the optional file sink.
    pub fn new(log_file: Option<&Path>) -> Result<Self> {
        Self::with_console(io::stderr, log_file)
    }

    /// Same as [`RunLog::new`] with a caller-supplied console writer.
    pub fn with_console<W>(console: W, log_file: Option<&Path>) -> Result<Self>
    where
        W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
    {
        let console_layer = tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .event_format(RunLogFormat)
            .with_writer(console);

        let file_layer = match log_file {
            Some(path) => Some(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .event_format(RunLogFormat)
                    .with_writer(file_appender(path)?),
            ),
            None => None,
        };

        let subscriber = Registry::default()
            .with(LevelFilter::INFO)
            .with(console_layer)
            .with(file_layer);

        Ok(Self {
            dispatch: Dispatch::new(subscriber),
        })
    }

    /// Runs `f` with this log as the current `tracing` dispatcher.
    pub fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        dispatcher::with_default(&self.dispatch, f)
    }
}

/// Appending, never-rotating writer for `path`. The parent directory is created.
fn file_appender(path: &Path) -> Result<RollingFileAppender> {
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, format!("Not a file path: {}", path.display())))?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(directory)?;
    Ok(appender)
}
