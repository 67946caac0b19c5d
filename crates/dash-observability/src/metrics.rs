//! Report recompute timings.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::run::RunId;

/// Label used for the unfiltered report.
pub const ALL_FILTER: &str = "all";

/// Aggregated timings for one filter value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterTiming {
    pub count: u64,
    pub total_us: u64,
    pub max_us: u64,
}

impl FilterTiming {
    fn add(&mut self, duration_us: u64) {
        self.count += 1;
        self.total_us += duration_us;
        self.max_us = self.max_us.max(duration_us);
    }

    /// Mean duration in microseconds.
    pub fn mean_us(&self) -> u64 {
        if self.count == 0 {
            0
        } else {
            self.total_us / self.count
        }
    }
}

/// Summary of every recompute in a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputeSummary {
    pub run_id: String,
    pub count: u64,
    pub total_us: u64,
    pub max_us: u64,
    /// Timings per filter label, `"all"` for the unfiltered report.
    pub filters: BTreeMap<String, FilterTiming>,
    /// Wall time since the collector was created (microseconds).
    pub elapsed_us: u64,
}

/// Collector for report recompute timings.
#[derive(Debug)]
pub struct ComputeMetrics {
    run_id: RunId,
    start: Instant,
    overall: FilterTiming,
    filters: BTreeMap<String, FilterTiming>,
}

impl ComputeMetrics {
    pub fn new(run_id: RunId) -> Self {
        Self {
            run_id,
            start: Instant::now(),
            overall: FilterTiming::default(),
            filters: BTreeMap::new(),
        }
    }

    /// Record one recompute.
    pub fn record(&mut self, filter: Option<&str>, duration: Duration) {
        let us = duration.as_micros() as u64;
        self.overall.add(us);
        self.filters
            .entry(filter.unwrap_or(ALL_FILTER).to_string())
            .or_default()
            .add(us);
    }

    /// Run `f`, recording its duration against `filter`.
    pub fn time<T>(&mut self, filter: Option<&str>, f: impl FnOnce() -> T) -> T {
        let started = Instant::now();
        let out = f();
        self.record(filter, started.elapsed());
        out
    }

    pub fn count(&self) -> u64 {
        self.overall.count
    }

    pub fn summary(&self) -> ComputeSummary {
        ComputeSummary {
            run_id: self.run_id.to_string(),
            count: self.overall.count,
            total_us: self.overall.total_us,
            max_us: self.overall.max_us,
            filters: self.filters.clone(),
            elapsed_us: self.start.elapsed().as_micros() as u64,
        }
    }
}

impl ComputeSummary {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Format as human-readable summary.
    pub fn to_summary(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!("Run: {}", self.run_id));
        lines.push(format!(
            "  Recomputes: {} in {}us ({:.2}ms), slowest {}us",
            self.count,
            self.total_us,
            self.total_us as f64 / 1000.0,
            self.max_us
        ));

        for (filter, timing) in &self.filters {
            lines.push(format!(
                "    {}: {}x, mean {}us, max {}us",
                filter,
                timing.count,
                timing.mean_us(),
                timing.max_us
            ));
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_aggregates() {
        let mut metrics = ComputeMetrics::new(RunId::from_string("run-1"));
        metrics.record(None, Duration::from_micros(100));
        metrics.record(Some("Subwoofers"), Duration::from_micros(40));
        metrics.record(Some("Subwoofers"), Duration::from_micros(60));

        let summary = metrics.summary();
        assert_eq!(summary.count, 3);
        assert_eq!(summary.total_us, 200);
        assert_eq!(summary.max_us, 100);
        assert_eq!(summary.filters[ALL_FILTER].count, 1);

        let subs = &summary.filters["Subwoofers"];
        assert_eq!(subs.count, 2);
        assert_eq!(subs.mean_us(), 50);
        assert_eq!(subs.max_us, 60);
    }

    #[test]
    fn test_time_returns_value() {
        let mut metrics = ComputeMetrics::new(RunId::generate());
        let value = metrics.time(Some("Soundbars"), || 42);
        assert_eq!(value, 42);
        assert_eq!(metrics.count(), 1);
    }

    #[test]
    fn test_empty_summary() {
        let summary = ComputeMetrics::new(RunId::from_string("run-2")).summary();
        assert_eq!(summary.count, 0);
        assert!(summary.filters.is_empty());
        assert!(summary.to_summary().starts_with("Run: run-2"));
    }

    #[test]
    fn test_summary_json() {
        let mut metrics = ComputeMetrics::new(RunId::from_string("run-3"));
        metrics.record(None, Duration::from_micros(7));
        let json: serde_json::Value = serde_json::from_str(&metrics.summary().to_json()).unwrap();
        assert_eq!(json["run_id"], "run-3");
        assert_eq!(json["filters"]["all"]["total_us"], 7);
    }
}
