//! Request counters and latency histogram.
//!
//! Each [`Metrics`] owns its own Prometheus registry, so every `AppState`
//! (and every test) gets an isolated set of series.

use prometheus::{
    Encoder, HistogramOpts, HistogramTimer, HistogramVec, IntCounter, Registry, TextEncoder,
};

use crate::error::AppError;

/// Histogram labels of the shorten operation.
pub const SHORTEN_LABELS: (&str, &str) = ("POST", "/shorten");

/// Histogram labels of the redirect operation.
pub const REDIRECT_LABELS: (&str, &str) = ("GET", "/{short_code}");

/// Lifetime totals shown on the stats endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub total_created: u64,
    pub total_redirects: u64,
}

/// Application metrics container.
pub struct Metrics {
    registry: Registry,
    /// Links created since process start
    urls_created: IntCounter,
    /// Successful redirects since process start
    redirects: IntCounter,
    /// Operation wall-clock time, by method and endpoint
    request_duration: HistogramVec,
}

impl Metrics {
    /// Creates and registers all series.
    ///
    /// # Errors
    ///
    /// Returns a Prometheus error if a series fails to build or register.
    pub fn new() -> prometheus::Result<Self> {
        let registry = Registry::new();

        let urls_created = IntCounter::new("urls_created_total", "Total number of URLs created")?;

        let redirects = IntCounter::new("redirects_total", "Total number of redirects performed")?;

        let request_duration = HistogramVec::new(
            HistogramOpts::new("request_duration_seconds", "Request duration in seconds"),
            &["method", "endpoint"],
        )?;

        registry.register(Box::new(urls_created.clone()))?;
        registry.register(Box::new(redirects.clone()))?;
        registry.register(Box::new(request_duration.clone()))?;

        Ok(Self {
            registry,
            urls_created,
            redirects,
            request_duration,
        })
    }

    pub fn increment_created(&self) {
        self.urls_created.inc();
    }

    pub fn increment_redirects(&self) {
        self.redirects.inc();
    }

    /// Records one observation of `seconds` under `(method, endpoint)`.
    pub fn observe_duration(&self, method: &str, endpoint: &str, seconds: f64) {
        self.request_duration
            .with_label_values(&[method, endpoint])
            .observe(seconds);
    }

    /// Starts a timer that records into the histogram when dropped, on every
    /// exit path of the caller.
    pub fn start_timer(&self, (method, endpoint): (&str, &str)) -> HistogramTimer {
        self.request_duration
            .with_label_values(&[method, endpoint])
            .start_timer()
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            total_created: self.urls_created.get(),
            total_redirects: self.redirects.get(),
        }
    }

    /// Export metrics in Prometheus text format.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if encoding fails.
    pub fn render(&self) -> Result<String, AppError> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();

        encoder
            .encode(&metric_families, &mut buffer)
            .map_err(|e| AppError::internal(format!("Failed to encode metrics: {}", e)))?;

        String::from_utf8(buffer)
            .map_err(|_| AppError::internal("Metrics output is not valid UTF-8"))
    }

    /// Content type of [`Self::render`] output.
    pub fn content_type(&self) -> &'static str {
        prometheus::TEXT_FORMAT
    }
}
