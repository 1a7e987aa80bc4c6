//! Basic metrics instrumentation for contact submissions.
//!
//! Provides counters for submission outcomes and duration tracking for relay requests.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Metrics collector shared by the relay client and the submission service.
#[derive(Debug, Clone)]
pub struct Metrics {
    /// Submissions that passed validation and were handed to the relay
    submissions_total: Arc<AtomicU64>,

    /// Submissions the relay accepted
    submissions_sent: Arc<AtomicU64>,

    /// Submissions that ended in a transport error or rejection
    submissions_failed: Arc<AtomicU64>,

    /// Attempts stopped by field validation
    validation_rejections: Arc<AtomicU64>,

    /// Total number of HTTP requests made
    http_requests_total: Arc<AtomicU64>,

    /// Total number of HTTP errors
    http_errors_total: Arc<AtomicU64>,

    /// Total duration of all HTTP requests in milliseconds
    http_duration_total_ms: Arc<AtomicU64>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            submissions_total: Arc::new(AtomicU64::new(0)),
            submissions_sent: Arc::new(AtomicU64::new(0)),
            submissions_failed: Arc::new(AtomicU64::new(0)),
            validation_rejections: Arc::new(AtomicU64::new(0)),
            http_requests_total: Arc::new(AtomicU64::new(0)),
            http_errors_total: Arc::new(AtomicU64::new(0)),
            http_duration_total_ms: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Record an HTTP request with duration.
    pub fn record_http_request(&self, duration: Duration) {
        self.http_requests_total.fetch_add(1, Ordering::Relaxed);
        self.http_duration_total_ms
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    /// Record an HTTP error.
    pub fn record_http_error(&self) {
        self.http_errors_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_submission(&self) {
        self.submissions_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_sent(&self) {
        self.submissions_sent.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_failed(&self) {
        self.submissions_failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_validation_rejection(&self) {
        self.validation_rejections.fetch_add(1, Ordering::Relaxed);
    }

    pub fn submissions_total(&self) -> u64 {
        self.submissions_total.load(Ordering::Relaxed)
    }

    pub fn submissions_sent(&self) -> u64 {
        self.submissions_sent.load(Ordering::Relaxed)
    }

    pub fn submissions_failed(&self) -> u64 {
        self.submissions_failed.load(Ordering::Relaxed)
    }

    pub fn validation_rejections(&self) -> u64 {
        self.validation_rejections.load(Ordering::Relaxed)
    }

    /// Get total HTTP requests.
    pub fn http_requests_total(&self) -> u64 {
        self.http_requests_total.load(Ordering::Relaxed)
    }

    /// Get total HTTP errors.
    pub fn http_errors_total(&self) -> u64 {
        self.http_errors_total.load(Ordering::Relaxed)
    }

    /// Get total HTTP duration in milliseconds.
    pub fn http_duration_total_ms(&self) -> u64 {
        self.http_duration_total_ms.load(Ordering::Relaxed)
    }

    /// Get average HTTP request duration in milliseconds.
    pub fn http_duration_avg_ms(&self) -> f64 {
        let total = self.http_duration_total_ms.load(Ordering::Relaxed);
        let count = self.http_requests_total.load(Ordering::Relaxed);
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            submissions_total: self.submissions_total(),
            submissions_sent: self.submissions_sent(),
            submissions_failed: self.submissions_failed(),
            validation_rejections: self.validation_rejections(),
            http_requests_total: self.http_requests_total(),
            http_errors_total: self.http_errors_total(),
            http_duration_avg_ms: self.http_duration_avg_ms(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone)]
pub struct MetricsSummary {
    pub submissions_total: u64,
    pub submissions_sent: u64,
    pub submissions_failed: u64,
    pub validation_rejections: u64,
    pub http_requests_total: u64,
    pub http_errors_total: u64,
    pub http_duration_avg_ms: f64,
}

/// Helper for timing HTTP requests.
pub struct HttpTimer {
    start: Instant,
    metrics: Metrics,
}

impl HttpTimer {
    /// Start timing an HTTP request.
    pub fn new(metrics: Metrics) -> Self {
        Self {
            start: Instant::now(),
            metrics,
        }
    }

    /// Complete the timing and record the duration.
    pub fn complete(self) {
        let duration = self.start.elapsed();
        self.metrics.record_http_request(duration);
    }

    /// Complete the timing and record as an error.
    pub fn complete_with_error(self) {
        let duration = self.start.elapsed();
        self.metrics.record_http_request(duration);
        self.metrics.record_http_error();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_metrics_creation() {
        let metrics = Metrics::new();
        assert_eq!(metrics.submissions_total(), 0);
        assert_eq!(metrics.http_requests_total(), 0);
        assert_eq!(metrics.http_duration_avg_ms(), 0.0);
    }

    #[test]
    fn test_average_duration() {
        let metrics = Metrics::new();
        metrics.record_http_request(Duration::from_millis(100));
        metrics.record_http_request(Duration::from_millis(200));
        assert_eq!(metrics.http_requests_total(), 2);
        assert_eq!(metrics.http_duration_total_ms(), 300);
        assert_eq!(metrics.http_duration_avg_ms(), 150.0);
    }

    #[test]
    fn test_summary() {
        let metrics = Metrics::new();
        metrics.record_validation_rejection();
        metrics.record_submission();
        metrics.record_failed();
        metrics.record_submission();
        metrics.record_sent();

        let summary = metrics.summary();
        assert_eq!(summary.validation_rejections, 1);
        assert_eq!(summary.submissions_total, 2);
        assert_eq!(summary.submissions_sent, 1);
        assert_eq!(summary.submissions_failed, 1);
    }

    #[test]
    fn test_http_timer() {
        let metrics = Metrics::new();
        let timer = HttpTimer::new(metrics.clone());
        thread::sleep(Duration::from_millis(10));
        timer.complete();

        assert_eq!(metrics.http_requests_total(), 1);
        assert!(metrics.http_duration_total_ms() >= 10);
    }

    #[test]
    fn test_http_timer_with_error() {
        let metrics = Metrics::new();
        let timer = HttpTimer::new(metrics.clone());
        timer.complete_with_error();

        assert_eq!(metrics.http_requests_total(), 1);
        assert_eq!(metrics.http_errors_total(), 1);
    }

    #[test]
    fn test_clones_share_counters() {
        let metrics = Metrics::new();
        let other = metrics.clone();

        let handle = thread::spawn(move || {
            for _ in 0..100 {
                other.record_http_request(Duration::from_millis(1));
            }
        });
        for _ in 0..100 {
            metrics.record_http_request(Duration::from_millis(1));
        }
        handle.join().unwrap();

        assert_eq!(metrics.http_requests_total(), 200);
    }
}
