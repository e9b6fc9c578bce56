pub mod error;
pub mod tracer;

pub use error::{ExectraceError, Result};
pub use tracer::{EventBuffer, NullTracer, TraceEvent, Tracer};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{ExectraceError, Result};
    pub use crate::tracer::{EventBuffer, EventFilterFn, NullTracer, TraceEvent, Tracer};
}
