//! Trace event type recorded by the tracer
//!
//! This module defines [`TraceEvent`], the single record type the tracer appends
//! to its buffer: a caller-supplied name, a capture timestamp, and an arbitrary
//! JSON-compatible payload. It also defines the [`EventFilterFn`] trait used by
//! the query methods to filter events with custom predicates.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::time::{SystemTime, UNIX_EPOCH};

/// Trait for filtering trace events
///
/// Implement this trait to create custom event filters. This trait is used
/// instead of raw closure types to avoid type complexity warnings.
pub trait EventFilterFn: Send + Sync {
    /// Test whether an event passes the filter
    fn matches(&self, event: &TraceEvent) -> bool;
}

/// Implement EventFilterFn for any function that matches the signature
impl<F> EventFilterFn for F
where
    F: Fn(&TraceEvent) -> bool + Send + Sync,
{
    fn matches(&self, event: &TraceEvent) -> bool {
        self(event)
    }
}

/// A single recorded occurrence
///
/// Trace events carry a name identifying what happened, the wall-clock time at
/// which it was recorded, and whatever structured payload the caller supplied.
/// The payload is opaque to the tracer: it is stored and serialized as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceEvent {
    /// Name of the occurrence, supplied by the caller
    pub event: String,
    /// Timestamp when the event was recorded (Unix timestamp, fractional seconds)
    pub timestamp: f64,
    /// Caller-supplied structured payload (string keys to arbitrary JSON values)
    #[serde(default)]
    pub data: Map<String, Value>,
}

impl TraceEvent {
    /// Create a new trace event stamped with the current wall-clock time
    pub fn new(event: impl Into<String>, data: Map<String, Value>) -> Self {
        Self {
            event: event.into(),
            timestamp: current_timestamp(),
            data,
        }
    }

    /// Get a formatted string summary of the event
    pub fn printable_summary(&self) -> String {
        let dt = DateTime::from_timestamp(self.timestamp as i64, 0)
            .unwrap_or_else(|| DateTime::from_timestamp(0, 0).unwrap())
            .with_timezone(&Local);
        let time_str = dt.format("%H:%M:%S%.3f").to_string();

        let mut summary = format!("[{}] {}", time_str, self.event);

        if !self.data.is_empty() {
            let keys: Vec<&str> = self.data.keys().map(|k| k.as_str()).collect();
            summary.push_str(&format!("\n   Data: {}", keys.join(", ")));
        }

        summary
    }
}

/// Get current timestamp as Unix timestamp (seconds since epoch)
pub(crate) fn current_timestamp() -> f64 {
    SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_secs_f64()
}
