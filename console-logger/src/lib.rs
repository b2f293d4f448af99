use std::sync::Arc;
use tracing::{
    field::{Field, Visit},
    Event, Level, Subscriber,
};
use tracing_subscriber::{
    filter::EnvFilter,
    layer::{Context, Layer},
    prelude::*,
    registry::LookupSpan,
};

/// Filter used when the configured directive does not parse
const FALLBACK_FILTER: &str = "warn";

/// Destination for formatted log lines
pub trait ConsoleSink: Send + Sync + 'static {
    fn write(&self, level: &Level, line: &str);
}

/// Browser devtools console on wasm32, stderr elsewhere
#[derive(Clone, Copy, Default)]
pub struct BrowserConsole;

impl ConsoleSink for BrowserConsole {
    #[cfg(target_arch = "wasm32")]
    fn write(&self, level: &Level, line: &str) {
        use wasm_bindgen::JsValue;
        use web_sys::console;

        let line = JsValue::from_str(line);
        match *level {
            Level::ERROR => console::error_1(&line),
            Level::WARN => console::warn_1(&line),
            Level::INFO => console::info_1(&line),
            Level::DEBUG => console::debug_1(&line),
            Level::TRACE => console::log_1(&line),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn write(&self, _level: &Level, line: &str) {
        eprintln!("{}", line);
    }
}

/// Tracing Layer that writes to the console
pub struct ConsoleLayer {
    sink: Arc<dyn ConsoleSink>,
}

impl ConsoleLayer {
    pub fn new() -> Self {
        Self::with_sink(BrowserConsole)
    }

    pub fn with_sink<S: ConsoleSink>(sink: S) -> Self {
        ConsoleLayer {
            sink: Arc::new(sink),
        }
    }

    /// Format a log event as one console line
    fn format_event<S>(&self, event: &Event, ctx: Context<'_, S>) -> String
    where
        S: Subscriber + for<'a> LookupSpan<'a>,
    {
        let level = event.metadata().level();
        let target = event.metadata().target();

        let mut visitor = FieldCollector::new();
        event.record(&mut visitor);

        // Get span context if available
        let span_info = if let Some(scope) = ctx.event_span(event) {
            format!(" [{}]", scope.metadata().name())
        } else {
            String::new()
        };

        let mut line = format!("{} {}{} - {}", level, target, span_info, visitor.message);
        if !visitor.fields.is_empty() {
            if !visitor.message.is_empty() {
                line.push(' ');
            }
            line.push_str(&visitor.fields.join(" "));
        }
        line
    }
}

impl Default for ConsoleLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Layer<S> for ConsoleLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event, ctx: Context<'_, S>) {
        let formatted = self.format_event(event, ctx);
        self.sink.write(event.metadata().level(), &formatted);
    }
}

/// Helper struct to collect event fields
struct FieldCollector {
    message: String,
    fields: Vec<String>,
}

impl FieldCollector {
    fn new() -> Self {
        FieldCollector {
            message: String::new(),
            fields: Vec::new(),
        }
    }
}

impl Visit for FieldCollector {
    fn record_i64(&mut self, field: &Field, value: i64) {
        self.fields.push(format!("{}={}", field.name(), value));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.fields.push(format!("{}={}", field.name(), value));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.fields.push(format!("{}={}", field.name(), value));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields.push(format!("{}=\"{}\"", field.name(), value));
        }
    }

    fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
        self.fields.push(format!("{}=\"{}\"", field.name(), value));
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            self.fields.push(format!("{}={:?}", field.name(), value));
        }
    }
}

/// Build the level filter, falling back to `warn` on a bad directive
pub fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(FALLBACK_FILTER))
}

/// Install the console layer as the global subscriber.
///
/// Returns `false` if a subscriber was already installed (e.g. a second call).
pub fn init_logger(app_name: &str, directive: &str) -> bool {
    let installed = tracing_subscriber::registry()
        .with(ConsoleLayer::new())
        .with(build_filter(directive))
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(filter = directive, "console logger initialized for {}", app_name);
    }
    installed
}
