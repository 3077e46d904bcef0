//! Logging setup.
//!
//! Everything goes through `tracing`; records from crates that still use
//! `log` are forwarded by `LogTracer`.
//!
//! - stdout: human-readable lines, always on
//! - file (optional): one-line JSON per event, rotated daily
//!
//! Each JSON line carries timestamp (ISO 8601, ms, local offset), level,
//! target, pid, thread id, file + line, message and structured fields.

use log::LevelFilter;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::{Event, Subscriber};
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_log::LogTracer;
use tracing_subscriber::fmt::{format::Writer, FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Layer, Registry};

pub const LOG_FILE_NAME: &str = "sskeeper.log";

static LOGGER_READY: OnceLock<()> = OnceLock::new();
static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Install the global subscriber. Calling it again is a no-op.
pub fn init_logger(log_dir: Option<&Path>) -> anyhow::Result<()> {
    if LOGGER_READY.get().is_some() {
        return Ok(());
    }

    let _ = LogTracer::builder()
        .with_max_level(LevelFilter::Trace)
        .init();

    let stdout_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .with_timer(fmt::time::ChronoLocal::new(
            "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        ))
        .with_filter(default_filter());

    let file_layer = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;

            let (writer, guard) = tracing_appender::non_blocking(rolling::daily(dir, LOG_FILE_NAME));
            let _ = FILE_GUARD.set(guard);

            Some(
                fmt::layer()
                    .with_writer(writer)
                    .event_format(JsonFormatter::new())
                    .with_filter(default_filter()),
            )
        }
        None => None,
    };

    let subscriber = Registry::default().with(stdout_layer).with(file_layer);

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    let _ = LOGGER_READY.set(());

    tracing::info!(
        target: "sskeeper::logging",
        log_dir = %log_dir.map(|d| d.display().to_string()).unwrap_or_else(|| "-".into()),
        version = env!("CARGO_PKG_VERSION"),
        "Logger initialized"
    );

    Ok(())
}

/// `RUST_LOG` if set, otherwise info
fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Resolve the log file written today, for diagnostics output
pub fn current_log_file(log_dir: &Path) -> PathBuf {
    let date = chrono::Local::now().format("%Y-%m-%d");
    log_dir.join(format!("{LOG_FILE_NAME}.{date}"))
}

/// One-line JSON event formatter
struct JsonFormatter {
    pid: u32,
    version: &'static str,
}

impl JsonFormatter {
    fn new() -> Self {
        Self {
            pid: std::process::id(),
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

impl<S, N> FormatEvent<S, N> for JsonFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let metadata = event.metadata();
        let timestamp = chrono::Local::now()
            .format("%Y-%m-%dT%H:%M:%S%.3f%:z")
            .to_string();

        let mut visitor = JsonVisitor::default();
        event.record(&mut visitor);
        let message = visitor.fields.remove("message");

        let mut json = serde_json::json!({
            "timestamp": timestamp,
            "level": metadata.level().to_string(),
            "target": metadata.target(),
            "pid": self.pid,
            "tid": format!("{:?}", std::thread::current().id()),
            "version": self.version,
        });

        if let Some(file) = metadata.file() {
            json["file"] = serde_json::json!(file);
        }
        if let Some(line) = metadata.line() {
            json["line"] = serde_json::json!(line);
        }
        if let Some(message) = message {
            json["message"] = message;
        }
        if !visitor.fields.is_empty() {
            json["fields"] = serde_json::Value::Object(visitor.fields);
        }

        writeln!(
            writer,
            "{}",
            serde_json::to_string(&json).unwrap_or_default()
        )
    }
}

/// Collects event fields as JSON values
#[derive(Default)]
struct JsonVisitor {
    fields: serde_json::Map<String, serde_json::Value>,
}

impl tracing::field::Visit for JsonVisitor {
    fn record_i64(&mut self, field: &tracing::field::Field, value: i64) {
        self.fields
            .insert(field.name().to_string(), serde_json::json!(value));
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.fields
            .insert(field.name().to_string(), serde_json::json!(value));
    }

    fn record_bool(&mut self, field: &tracing::field::Field, value: bool) {
        self.fields
            .insert(field.name().to_string(), serde_json::json!(value));
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.fields
            .insert(field.name().to_string(), serde_json::json!(value));
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.fields.insert(
            field.name().to_string(),
            serde_json::json!(format!("{:?}", value)),
        );
    }
}
