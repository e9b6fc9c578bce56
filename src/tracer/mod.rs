//! Execution tracer for visualization generation
//!
//! The tracer records named, timestamped events with arbitrary structured
//! payloads into an in-memory buffer, and serializes the buffer to a JSON
//! document for consumption by external visualization or debugging tooling.
//!
//! # Architecture
//!
//! The tracer consists of a few small pieces:
//!
//! - **TraceEvent**: a single recorded occurrence (name, timestamp, payload)
//! - **EventBuffer**: thread-safe ordered storage with callbacks and filtering
//! - **Tracer**: the recorder itself, gated on an enabled flag
//! - **NullTracer**: null object pattern for when tracing is disabled
//!
//! # Usage Example
//!
//! ```rust
//! use exectrace::tracer::Tracer;
//! use serde_json::{json, Map};
//!
//! let tracer = Tracer::default();
//!
//! // Tracing is off by default; enable() also starts a fresh trace
//! tracer.enable();
//!
//! let mut data = Map::new();
//! data.insert("depth".to_string(), json!(1));
//! tracer.record_with("visit_node", data);
//!
//! let document = tracer.export_json().unwrap();
//! assert!(document.contains("\"version\": \"1.0\""));
//! ```
//!
//! # Enable semantics
//!
//! Enabling the tracer discards everything recorded before, so each enable
//! starts a fresh trace. Disabling preserves the buffer, which stays
//! available for query and export until the next enable or clear.

pub mod event_buffer;
pub mod null_tracer;
pub mod recorder;
pub mod trace_event;

// Re-export main types
pub use event_buffer::{EventBuffer, EventCallback};
pub use null_tracer::NullTracer;
pub use recorder::Tracer;
pub use trace_event::{EventFilterFn, TraceEvent};
