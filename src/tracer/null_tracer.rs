//! Null tracer implementation following the Null Object Pattern
//!
//! This module provides a NullTracer that implements the same interface as Tracer
//! but performs no operations. This eliminates the need for conditional checks in client code.

use super::trace_event::{EventFilterFn, TraceEvent};
use super::recorder::render_document;
use crate::error::Result;
use serde_json::{Map, Value};

/// A no-op implementation of Tracer that silently discards all tracing operations
///
/// This type follows the Null Object Pattern to eliminate conditional checks in client code.
/// All record methods do nothing, all query methods return empty results, and
/// export produces the empty trace document.
pub struct NullTracer;

impl NullTracer {
    /// Create a new null tracer
    pub fn new() -> Self {
        Self
    }

    /// Always returns false for null tracer
    pub fn is_enabled(&self) -> bool {
        false
    }

    /// No-op method for interface compatibility
    pub fn enable(&self) {
        // Do nothing
    }

    /// No-op method for interface compatibility
    pub fn disable(&self) {
        // Do nothing
    }

    /// Do nothing implementation of record
    pub fn record(&self, _event: impl Into<String>) {
        // Do nothing
    }

    /// Do nothing implementation of record_with
    pub fn record_with(&self, _event: impl Into<String>, _data: Map<String, Value>) {
        // Do nothing
    }

    /// Do nothing implementation of record_event
    pub fn record_event(&self, _event: TraceEvent) {
        // Do nothing
    }

    /// Always returns an empty vector for null tracer
    pub fn events(&self) -> Vec<TraceEvent> {
        Vec::new()
    }

    /// Produce the empty trace document
    pub fn export_json(&self) -> Result<String> {
        render_document(&[])
    }

    /// Return an empty vector for any get_event_summaries request
    pub fn get_event_summaries(
        &self,
        _start_time: Option<f64>,
        _end_time: Option<f64>,
        _filter_func: Option<&dyn EventFilterFn>,
    ) -> Vec<String> {
        Vec::new()
    }

    /// Return an empty vector for any get_last_n_summaries request
    pub fn get_last_n_summaries(
        &self,
        _n: usize,
        _filter_func: Option<&dyn EventFilterFn>,
    ) -> Vec<String> {
        Vec::new()
    }

    /// Return 0 for any count_events request
    pub fn count_events(
        &self,
        _start_time: Option<f64>,
        _end_time: Option<f64>,
        _filter_func: Option<&dyn EventFilterFn>,
    ) -> usize {
        0
    }

    /// Do nothing implementation of clear method
    pub fn clear(&self) {
        // Do nothing
    }

    /// Always returns 0 for null tracer
    pub fn len(&self) -> usize {
        0
    }

    /// Always returns true for null tracer
    pub fn is_empty(&self) -> bool {
        true
    }
}

impl Default for NullTracer {
    fn default() -> Self {
        Self::new()
    }
}
