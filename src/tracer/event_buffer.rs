//! Event storage with callbacks and filtering
//!
//! This module provides thread-safe ordered storage for trace events with
//! support for callbacks, filtering by time range, and custom predicates.

use super::trace_event::{EventFilterFn, TraceEvent};
use std::sync::{Arc, Mutex};

/// Type alias for event callback functions
pub type EventCallback = Arc<dyn Fn(&TraceEvent) + Send + Sync>;

/// Buffer for capturing and querying trace events
///
/// EventBuffer provides thread-safe, insertion-ordered storage for trace events
/// with support for:
/// - Callbacks triggered on each stored event
/// - Filtering by time range
/// - Custom filter predicates
/// - Query for last N events
pub struct EventBuffer {
    events: Mutex<Vec<TraceEvent>>,
    on_store_callback: Option<EventCallback>,
}

impl EventBuffer {
    /// Create a new event buffer
    ///
    /// # Arguments
    ///
    /// * `on_store_callback` - Optional callback function called whenever an event is stored
    pub fn new(on_store_callback: Option<EventCallback>) -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            on_store_callback,
        }
    }

    /// Append an event to the buffer
    ///
    /// If a callback is configured, it will be called with the stored event.
    ///
    /// # Arguments
    ///
    /// * `event` - The event to store
    pub fn push(&self, event: TraceEvent) {
        // Trigger callback before storing (if exists)
        if let Some(callback) = &self.on_store_callback {
            callback(&event);
        }

        let mut events = self.events.lock().unwrap();
        events.push(event);
    }

    /// Get a copy of all events in insertion order
    pub fn snapshot(&self) -> Vec<TraceEvent> {
        let events = self.events.lock().unwrap();
        events.clone()
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
        let events = self.events.lock().unwrap();
        let mut count = 0;

        for event in events.iter() {
            if !in_time_range(event, start_time, end_time) {
                continue;
            }

            if let Some(filter) = filter_func {
                if !filter.matches(event) {
                    continue;
                }
            }

            count += 1;
        }

        count
    }

    /// Get summaries of events matching filters
    ///
    /// Returns printable summaries instead of cloning events
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
        let events = self.events.lock().unwrap();
        let mut result = Vec::new();

        for event in events.iter() {
            if !in_time_range(event, start_time, end_time) {
                continue;
            }

            if let Some(filter) = filter_func {
                if !filter.matches(event) {
                    continue;
                }
            }

            result.push(event.printable_summary());
        }

        result
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
        let events = self.events.lock().unwrap();

        let filtered: Vec<_> = if let Some(filter) = filter_func {
            events.iter().filter(|e| filter.matches(e)).collect()
        } else {
            events.iter().collect()
        };

        let start_idx = if n < filtered.len() {
            filtered.len() - n
        } else {
            0
        };

        filtered[start_idx..].iter().map(|e| e.printable_summary()).collect()
    }

    /// Clear all events from the buffer
    pub fn clear(&self) {
        let mut events = self.events.lock().unwrap();
        events.clear();
    }

    /// Get the total number of events in the buffer
    pub fn len(&self) -> usize {
        let events = self.events.lock().unwrap();
        events.len()
    }

    /// Check if the buffer is empty
    pub fn is_empty(&self) -> bool {
        let events = self.events.lock().unwrap();
        events.is_empty()
    }
}

impl Default for EventBuffer {
    fn default() -> Self {
        Self::new(None)
    }
}

fn in_time_range(event: &TraceEvent, start_time: Option<f64>, end_time: Option<f64>) -> bool {
    if let Some(start) = start_time {
        if event.timestamp < start {
            return false;
        }
    }

    if let Some(end) = end_time {
        if event.timestamp > end {
            return false;
        }
    }

    true
}
