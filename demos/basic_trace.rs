//! Basic tracing example.
//!
//! This example shows the core tracer lifecycle: enable, record a few events
//! with and without payloads, query summaries, and inspect the buffer.
//!
//! Run with `RUST_LOG=debug` to see the tracer's own log output.

use exectrace::tracer::{TraceEvent, Tracer};
use serde_json::{json, Map};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let tracer = Tracer::default();

    // Nothing is recorded until the tracer is enabled
    tracer.record("ignored");
    assert!(tracer.is_empty());

    tracer.enable();

    tracer.record("search_start");

    let mut data = Map::new();
    data.insert("node".to_string(), json!("root"));
    data.insert("depth".to_string(), json!(0));
    tracer.record_with("visit", data);

    let mut data = Map::new();
    data.insert("node".to_string(), json!("left"));
    data.insert("depth".to_string(), json!(1));
    tracer.record_with("visit", data);

    tracer.record("search_done");

    println!("Recorded {} events:\n", tracer.len());
    for summary in tracer.get_event_summaries(None, None, None) {
        println!("{}", summary);
    }

    // Filter to just the visits
    let visits = |e: &TraceEvent| e.event == "visit";
    println!("\nVisits: {}", tracer.count_events(None, None, Some(&visits)));

    // Disabling keeps the buffer around for later inspection
    tracer.disable();
    assert_eq!(tracer.events().len(), 4);
}
