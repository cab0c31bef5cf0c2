//! OpenTelemetry span exporter that writes JSON lines to a rotating file.
//!
//! Each finished span becomes one compact JSON object:
//!
//! ```json
//! {"ts":"2026-01-02T03:04:05.678Z","service":"tablescout","name":"worker_message",
//!  "trace_id":"…","span_id":"…","parent_span_id":"…","duration_us":1234,
//!  "attributes":{"message_type":"fetch_page"},"events":[…],"status":"unset"}
//! ```

use std::borrow::Cow;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::SystemTime;

use chrono::{DateTime, SecondsFormat, Utc};
use futures_util::future::BoxFuture;
use opentelemetry::trace::{SpanId, Status, TraceError};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use serde_json::{json, Map, Value as JsonValue};

use super::file_writer::RotatingFile;

pub const SERVICE_NAME: &str = "tablescout";

/// Writes each exported span as one JSON line.
pub struct JsonLinesExporter {
    writer: RotatingFile,
    is_shutdown: AtomicBool,
}

impl JsonLinesExporter {
    #[must_use]
    pub const fn new(writer: RotatingFile) -> Self {
        Self {
            writer,
            is_shutdown: AtomicBool::new(false),
        }
    }

    fn write_batch(&self, batch: &[SpanData]) -> std::io::Result<()> {
        for span in batch {
            self.writer.write_line(&span_to_json(span).to_string())?;
        }
        Ok(())
    }
}

impl SpanExporter for JsonLinesExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = if self.is_shutdown.load(Ordering::SeqCst) {
            Err(TraceError::from("exporter is shut down"))
        } else {
            self.write_batch(&batch)
                .map_err(|e| TraceError::from(e.to_string()))
        };
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.is_shutdown.store(true, Ordering::SeqCst);
    }
}

impl std::fmt::Debug for JsonLinesExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonLinesExporter")
            .field("writer", &self.writer)
            .field("is_shutdown", &self.is_shutdown)
            .finish()
    }
}

/// Builds a tracer provider that exports every span synchronously to `file_path`.
#[must_use]
pub fn create_tracer_provider(file_path: PathBuf) -> TracerProvider {
    let resource = Resource::new(vec![KeyValue::new("service.name", SERVICE_NAME)]);
    let exporter = JsonLinesExporter::new(RotatingFile::new(file_path));

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}

fn timestamp(time: SystemTime) -> String {
    DateTime::<Utc>::from(time).to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn attributes_to_json(attributes: &[KeyValue]) -> JsonValue {
    let map: Map<String, JsonValue> = attributes
        .iter()
        .map(|kv| (kv.key.to_string(), value_to_json(&kv.value)))
        .collect();
    JsonValue::Object(map)
}

fn value_to_json(value: &Value) -> JsonValue {
    match value {
        Value::Bool(b) => json!(b),
        Value::I64(i) => json!(i),
        Value::F64(f) => json!(f),
        Value::String(s) => json!(s.as_str()),
        other => json!(other.to_string()),
    }
}

fn status_to_json(status: &Status) -> JsonValue {
    match status {
        Status::Unset => json!("unset"),
        Status::Ok => json!("ok"),
        Status::Error { description } => json!({ "error": description.to_string() }),
    }
}

fn span_to_json(span: &SpanData) -> JsonValue {
    let duration_us = span
        .end_time
        .duration_since(span.start_time)
        .map_or(0, |d| u64::try_from(d.as_micros()).unwrap_or(u64::MAX));

    let parent: Cow<'_, str> = if span.parent_span_id == SpanId::INVALID {
        Cow::Borrowed("")
    } else {
        Cow::Owned(format!("{:016x}", span.parent_span_id))
    };

    let events: Vec<JsonValue> = span
        .events
        .iter()
        .map(|event| {
            json!({
                "ts": timestamp(event.timestamp),
                "name": event.name,
                "attributes": attributes_to_json(&event.attributes),
            })
        })
        .collect();

    json!({
        "ts": timestamp(span.start_time),
        "service": SERVICE_NAME,
        "name": span.name,
        "trace_id": format!("{:032x}", span.span_context.trace_id()),
        "span_id": format!("{:016x}", span.span_context.span_id()),
        "parent_span_id": parent,
        "duration_us": duration_us,
        "attributes": attributes_to_json(&span.attributes),
        "events": events,
        "status": status_to_json(&span.status),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_keep_their_json_types() {
        let attrs = vec![
            KeyValue::new("offset", 40_i64),
            KeyValue::new("loading", true),
            KeyValue::new("kind", "fetch_page"),
        ];
        assert_eq!(
            attributes_to_json(&attrs),
            json!({ "offset": 40, "loading": true, "kind": "fetch_page" })
        );
    }

    #[test]
    fn status_is_compact() {
        assert_eq!(status_to_json(&Status::Unset), json!("unset"));
        assert_eq!(
            status_to_json(&Status::error("boom")),
            json!({ "error": "boom" })
        );
    }

    #[test]
    fn timestamps_are_rfc3339_utc() {
        assert_eq!(timestamp(SystemTime::UNIX_EPOCH), "1970-01-01T00:00:00.000Z");
    }
}
