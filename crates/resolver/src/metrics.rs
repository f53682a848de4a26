use metrics::Histogram;
use metrics_derive::Metrics;

/// The metrics for the [`super::BatchResolver`].
#[derive(Metrics, Clone)]
#[metrics(scope = "resolver")]
pub(crate) struct ResolverMetrics {
    /// Time (ms) to resolve a withdraw root by batch index.
    #[metric(describe = "Time to resolve a withdraw root by batch index (ms)")]
    pub resolve_duration: Histogram,
}
