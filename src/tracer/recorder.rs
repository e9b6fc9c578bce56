//! Tracer for recording and exporting execution events
//!
//! This module provides the central type for recording, querying, and exporting
//! trace events. It coordinates with the event buffer and provides the
//! enable/disable gate that makes tracing free to leave in host code.

use super::event_buffer::EventBuffer;
use super::trace_event::{current_timestamp, EventFilterFn, TraceEvent};
use crate::error::Result;
use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};
use tracing::debug;

/// Version string written into every exported trace document
const TRACE_FORMAT_VERSION: &str = "1.0";

/// Top-level shape of an exported trace document
#[derive(Serialize)]
struct TraceDocument<'a> {
    version: &'a str,
    traces: &'a [TraceEvent],
}

/// Central recorder for execution trace events
///
/// The Tracer gates every record call on an enabled flag, so hosts can leave
/// trace calls in place permanently and pay nothing while tracing is off.
/// Recorded events accumulate in an event buffer until exported or cleared.
pub struct Tracer {
    buffer: Arc<EventBuffer>,
    enabled: Arc<AtomicBool>,
}

impl Tracer {
    /// Create a new tracer
    ///
    /// # Arguments
    ///
    /// * `buffer` - Optional event buffer to use. If None, a new one will be created.
    /// * `enabled` - Whether the tracer starts enabled (default: false)
    pub fn new(buffer: Option<Arc<EventBuffer>>, enabled: bool) -> Self {
        Self {
            buffer: buffer.unwrap_or_else(|| Arc::new(EventBuffer::default())),
            enabled: Arc::new(AtomicBool::new(enabled)),
        }
    }

    /// Get the process-wide tracer instance
    ///
    /// Lazily initialized on first access, disabled until the host calls
    /// [`enable`](Tracer::enable). Prefer constructing and sharing your own
    /// instance; this accessor exists for hosts that want the convenience of
    /// a single ambient tracer.
    pub fn global() -> &'static Tracer {
        static GLOBAL: OnceLock<Tracer> = OnceLock::new();
        GLOBAL.get_or_init(Tracer::default)
    }

    /// Check if the tracer is enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    /// Enable the tracer and discard all previously recorded events
    ///
    /// Enabling is also a reset: each enable starts a fresh trace, even when
    /// the tracer was already enabled.
    pub fn enable(&self) {
        self.enabled.store(true, Ordering::SeqCst);
        self.buffer.clear();
        debug!("Tracer enabled, buffer reset");
    }

    /// Disable the tracer
    ///
    /// Recorded events are preserved and remain available for query and export.
    pub fn disable(&self) {
        self.enabled.store(false, Ordering::SeqCst);
        debug!("Tracer disabled");
    }

    /// Record an event with an empty payload
    ///
    /// No-op while the tracer is disabled.
    ///
    /// # Arguments
    ///
    /// * `event` - Name of the occurrence
    pub fn record(&self, event: impl Into<String>) {
        self.record_with(event, Map::new());
    }

    /// Record an event with a structured payload
    ///
    /// No-op while the tracer is disabled. The payload is opaque to the
    /// tracer and stored as given; this call never fails.
    ///
    /// # Arguments
    ///
    /// * `event` - Name of the occurrence
    /// * `data` - Structured payload (string keys to arbitrary JSON values)
    pub fn record_with(&self, event: impl Into<String>, data: Map<String, Value>) {
        if !self.is_enabled() {
            return;
        }

        self.buffer.push(TraceEvent {
            event: event.into(),
            timestamp: current_timestamp(),
            data,
        });
    }

    /// Record a pre-built trace event
    ///
    /// No-op while the tracer is disabled.
    ///
    /// # Arguments
    ///
    /// * `event` - The trace event to record
    pub fn record_event(&self, event: TraceEvent) {
        if !self.is_enabled() {
            return;
        }
        self.buffer.push(event);
    }

    /// Get a copy of all recorded events in insertion order
    pub fn events(&self) -> Vec<TraceEvent> {
        self.buffer.snapshot()
    }

    /// Serialize the trace buffer to a pretty-printed JSON document
    ///
    /// The document has exactly two top-level fields: `version` (the literal
    /// string "1.0") and `traces` (every recorded event, in order). Succeeds
    /// on an empty buffer, producing `"traces": []`.
    ///
    /// # Errors
    ///
    /// Returns [`ExectraceError::SerializationError`](crate::ExectraceError::SerializationError)
    /// if a payload value cannot be represented in JSON (e.g. a non-finite
    /// float). The underlying error is propagated unchanged.
    pub fn export_json(&self) -> Result<String> {
        let events = self.buffer.snapshot();
        debug!(event_count = events.len(), "Exporting trace document");
        render_document(&events)
    }

    /// Get event summaries from the buffer, optionally filtered
    ///
    /// # Arguments
    ///
    /// * `start_time` - Include events with timestamp >= start_time
    /// * `end_time` - Include events with timestamp <= end_time
    /// * `filter_func` - Custom filter function to apply to events
    ///
    /// # Returns
    ///
    /// Vector of event summaries matching the filter criteria
    pub fn get_event_summaries(
        &self,
        start_time: Option<f64>,
        end_time: Option<f64>,
        filter_func: Option<&dyn EventFilterFn>,
    ) -> Vec<String> {
        self.buffer.get_event_summaries(start_time, end_time, filter_func)
    }

    /// Get the last N event summaries, optionally filtered
    ///
    /// # Arguments
    ///
    /// * `n` - Number of events to return
    /// * `filter_func` - Optional custom filter function
    ///
    /// # Returns
    ///
    /// Vector of the last N event summaries matching the filter criteria
    pub fn get_last_n_summaries(
        &self,
        n: usize,
        filter_func: Option<&dyn EventFilterFn>,
    ) -> Vec<String> {
        self.buffer.get_last_n_summaries(n, filter_func)
    }

    /// Count events matching filters
    ///
    /// # Arguments
    ///
    /// * `start_time` - Include events with timestamp >= start_time
    /// * `end_time` - Include events with timestamp <= end_time
    /// * `filter_func` - Custom filter function to apply to events
    ///
    /// # Returns
    ///
    /// Number of events matching the filter criteria
    pub fn count_events(
        &self,
        start_time: Option<f64>,
        end_time: Option<f64>,
        filter_func: Option<&dyn EventFilterFn>,
    ) -> usize {
        self.buffer.count_events(start_time, end_time, filter_func)
    }

    /// Clear all events from the buffer without touching the enabled flag
    pub fn clear(&self) {
        self.buffer.clear();
        debug!("Trace buffer cleared");
    }

    /// Get the total number of recorded events
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Check if the trace buffer is empty
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

impl Default for Tracer {
    fn default() -> Self {
        Self::new(None, false)
    }
}

/// Render a trace document for the given events
pub(crate) fn render_document(events: &[TraceEvent]) -> Result<String> {
    let document = TraceDocument {
        version: TRACE_FORMAT_VERSION,
        traces: events,
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_tracer_is_disabled_and_empty() {
        let tracer = Tracer::default();
        assert!(!tracer.is_enabled());
        assert!(tracer.events().is_empty());
        assert_eq!(tracer.len(), 0);
    }

    #[test]
    fn test_enable_disable() {
        let tracer = Tracer::default();

        tracer.enable();
        assert!(tracer.is_enabled());

        tracer.disable();
        assert!(!tracer.is_enabled());
    }

    #[test]
    fn test_enable_resets_buffer() {
        let tracer = Tracer::default();

        tracer.enable();
        tracer.record("a");
        assert_eq!(tracer.len(), 1);

        tracer.enable();
        assert!(tracer.events().is_empty());
        assert!(tracer.is_enabled());
    }

    #[test]
    fn test_disabled_tracer_doesnt_record() {
        let tracer = Tracer::default();

        let mut data = Map::new();
        data.insert("k".to_string(), json!(1));

        tracer.record("x");
        tracer.record_with("x", data);
        tracer.record_event(TraceEvent::new("x", Map::new()));

        assert!(tracer.events().is_empty());
    }

    #[test]
    fn test_record_appends_in_order() {
        let tracer = Tracer::default();
        tracer.enable();

        tracer.record("a");
        tracer.record("b");

        let events = tracer.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].event, "a");
        assert_eq!(events[1].event, "b");
    }

    #[test]
    fn test_record_default_payload_is_empty() {
        let tracer = Tracer::default();
        tracer.enable();

        tracer.record("evt");

        let events = tracer.events();
        assert!(events[0].data.is_empty());
    }

    #[test]
    fn test_record_with_payload() {
        let tracer = Tracer::default();
        tracer.enable();

        let mut data = Map::new();
        data.insert("depth".to_string(), json!(2));

        tracer.record_with("visit", data);

        let events = tracer.events();
        assert_eq!(events[0].data.get("depth"), Some(&json!(2)));
    }

    #[test]
    fn test_disable_preserves_buffer() {
        let tracer = Tracer::default();

        tracer.enable();
        tracer.record("a");
        tracer.disable();

        assert!(!tracer.is_enabled());
        assert_eq!(tracer.events().len(), 1);
        assert_eq!(tracer.events()[0].event, "a");
    }

    #[test]
    fn test_clear_leaves_flag_untouched() {
        let tracer = Tracer::default();

        tracer.enable();
        tracer.record("a");
        tracer.clear();

        assert!(tracer.events().is_empty());
        assert!(tracer.is_enabled());
    }

    #[test]
    fn test_export_round_trip() {
        let tracer = Tracer::default();
        tracer.enable();

        let mut data = Map::new();
        data.insert("n".to_string(), json!(1));
        tracer.record_with("tick", data);

        let json = tracer.export_json().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["version"], "1.0");
        let traces = parsed["traces"].as_array().unwrap();
        assert_eq!(traces.len(), 1);
        assert_eq!(traces[0]["event"], "tick");
        assert_eq!(traces[0]["data"]["n"], 1);
        assert!(traces[0]["timestamp"].is_f64());
    }

    #[test]
    fn test_export_empty_buffer() {
        let tracer = Tracer::default();

        let json = tracer.export_json().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["version"], "1.0");
        assert_eq!(parsed["traces"], json!([]));
    }

    #[test]
    fn test_export_is_pretty_printed() {
        let tracer = Tracer::default();
        tracer.enable();
        tracer.record("tick");

        let json = tracer.export_json().unwrap();
        assert!(json.contains('\n'));
        assert!(json.contains("  \"version\": \"1.0\""));
    }

    #[test]
    fn test_shared_buffer_between_tracers() {
        let buffer = Arc::new(EventBuffer::default());
        let writer = Tracer::new(Some(Arc::clone(&buffer)), true);
        let reader = Tracer::new(Some(buffer), false);

        writer.record("shared");

        assert_eq!(reader.events().len(), 1);
        assert_eq!(reader.events()[0].event, "shared");
    }

    #[test]
    fn test_query_passthroughs() {
        let tracer = Tracer::default();
        tracer.enable();

        tracer.record("keep");
        tracer.record("drop");
        tracer.record("keep");

        let filter = |e: &TraceEvent| e.event == "keep";
        assert_eq!(tracer.count_events(None, None, Some(&filter)), 2);

        let summaries = tracer.get_event_summaries(None, None, None);
        assert_eq!(summaries.len(), 3);

        let last = tracer.get_last_n_summaries(1, None);
        assert_eq!(last.len(), 1);
        assert!(last[0].contains("keep"));
    }

    #[test]
    fn test_global_tracer_is_disabled_by_default() {
        // Keep this the only test that touches the process-wide instance.
        let tracer = Tracer::global();
        assert!(!tracer.is_enabled());

        tracer.record("ignored");
        assert!(tracer.is_empty());
    }

    #[test]
    fn test_exported_document_survives_disk_round_trip() {
        let tracer = Tracer::default();
        tracer.enable();
        tracer.record("persisted");

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        std::fs::write(&path, tracer.export_json().unwrap()).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed["version"], "1.0");
        assert_eq!(parsed["traces"][0]["event"], "persisted");
    }

    #[test]
    fn test_multiple_events() {
        let tracer = Tracer::default();
        tracer.enable();

        for i in 0..5 {
            tracer.record(format!("step-{}", i));
        }

        assert_eq!(tracer.len(), 5);
    }
}
