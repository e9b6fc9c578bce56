//! Trace export example.
//!
//! Records a handful of events and writes the exported JSON document to a
//! file, the way a host application would hand a trace to visualization
//! tooling.

use exectrace::tracer::Tracer;
use exectrace::Result;
use serde_json::{json, Map};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let tracer = Tracer::default();
    tracer.enable();

    for i in 0..3 {
        let mut data = Map::new();
        data.insert("iteration".to_string(), json!(i));
        tracer.record_with("loop_tick", data);
    }

    let document = tracer.export_json()?;
    println!("{}", document);

    let path = std::env::temp_dir().join("exectrace_demo.json");
    std::fs::write(&path, &document)?;
    println!("\nTrace written to {}", path.display());

    Ok(())
}
