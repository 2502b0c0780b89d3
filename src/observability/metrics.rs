//! Metrics collection for client usage tracking.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics collector for tracking client activity.
///
/// The reply stream records `reply_stream_completed`, `reply_stream_errors`
/// and `reply_stream_cancelled` counters; services record request counters
/// and latency histograms.
pub trait MetricsCollector: Send + Sync {
    /// Increments a counter by the given value.
    fn increment_counter(&self, name: &str, value: u64, labels: &[(&str, &str)]);

    /// Records a value in a histogram.
    fn record_histogram(&self, name: &str, value: f64, labels: &[(&str, &str)]);

    /// Sets a gauge to the given value.
    fn set_gauge(&self, name: &str, value: f64, labels: &[(&str, &str)]);
}

/// Collector that discards all metrics. The default when none is attached.
pub struct NoopMetricsCollector;

impl MetricsCollector for NoopMetricsCollector {
    fn increment_counter(&self, _name: &str, _value: u64, _labels: &[(&str, &str)]) {}
    fn record_histogram(&self, _name: &str, _value: f64, _labels: &[(&str, &str)]) {}
    fn set_gauge(&self, _name: &str, _value: f64, _labels: &[(&str, &str)]) {}
}

/// In-memory metrics collector for testing and simple use cases.
#[derive(Default)]
pub struct InMemoryMetricsCollector {
    counters: RwLock<HashMap<String, AtomicU64>>,
    histograms: RwLock<HashMap<String, Vec<f64>>>,
    gauges: RwLock<HashMap<String, f64>>,
}

impl InMemoryMetricsCollector {
    /// Creates a new in-memory metrics collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the current value of a counter, or 0 if it doesn't exist.
    pub fn get_counter(&self, name: &str) -> u64 {
        self.counters
            .read()
            .get(name)
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// Gets all recorded values for a histogram.
    pub fn get_histogram(&self, name: &str) -> Vec<f64> {
        self.histograms
            .read()
            .get(name)
            .cloned()
            .unwrap_or_default()
    }

    /// Gets the current value of a gauge.
    pub fn get_gauge(&self, name: &str) -> Option<f64> {
        self.gauges.read().get(name).copied()
    }

    /// Resets all metrics.
    pub fn reset(&self) {
        self.counters.write().clear();
        self.histograms.write().clear();
        self.gauges.write().clear();
    }

    fn make_key(name: &str, labels: &[(&str, &str)]) -> String {
        if labels.is_empty() {
            name.to_string()
        } else {
            let label_str: Vec<String> = labels
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect();
            format!("{}:{}", name, label_str.join(","))
        }
    }
}

impl MetricsCollector for InMemoryMetricsCollector {
    fn increment_counter(&self, name: &str, value: u64, labels: &[(&str, &str)]) {
        let key = Self::make_key(name, labels);
        let mut counters = self.counters.write();
        counters
            .entry(key)
            .or_insert_with(|| AtomicU64::new(0))
            .fetch_add(value, Ordering::Relaxed);
    }

    fn record_histogram(&self, name: &str, value: f64, labels: &[(&str, &str)]) {
        let key = Self::make_key(name, labels);
        let mut histograms = self.histograms.write();
        histograms.entry(key).or_default().push(value);
    }

    fn set_gauge(&self, name: &str, value: f64, labels: &[(&str, &str)]) {
        let key = Self::make_key(name, labels);
        let mut gauges = self.gauges.write();
        gauges.insert(key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_accumulates() {
        let collector = InMemoryMetricsCollector::new();
        collector.increment_counter("requests", 1, &[]);
        collector.increment_counter("requests", 4, &[]);
        assert_eq!(collector.get_counter("requests"), 5);
    }

    #[test]
    fn test_labeled_counters_are_distinct() {
        let collector = InMemoryMetricsCollector::new();
        collector.increment_counter("requests", 1, &[("service", "help")]);
        collector.increment_counter("requests", 2, &[("service", "coauthor")]);

        assert_eq!(collector.get_counter("requests:service=help"), 1);
        assert_eq!(collector.get_counter("requests:service=coauthor"), 2);
        assert_eq!(collector.get_counter("requests"), 0);
    }

    #[test]
    fn test_histogram_and_gauge() {
        let collector = InMemoryMetricsCollector::new();
        collector.record_histogram("latency_ms", 120.0, &[]);
        collector.record_histogram("latency_ms", 80.0, &[]);
        collector.set_gauge("active_streams", 2.0, &[]);

        assert_eq!(collector.get_histogram("latency_ms"), vec![120.0, 80.0]);
        assert_eq!(collector.get_gauge("active_streams"), Some(2.0));
    }

    #[test]
    fn test_reset() {
        let collector = InMemoryMetricsCollector::new();
        collector.increment_counter("requests", 5, &[]);
        collector.reset();
        assert_eq!(collector.get_counter("requests"), 0);
    }
}
