//! Page interaction metrics.
//!
//! Counters belong to one `Page` and are reported when the page is torn down.

use serde::Serialize;

/// Interaction counters for one page.
#[derive(Debug, Clone, Default)]
pub struct PageMetrics {
    /// Submissions that passed validation
    accepted: usize,

    /// Submissions rejected with at least one field error
    rejected: usize,

    /// Locale switches handed to the navigator
    locale_switches: usize,

    /// Locale switches whose requested code was not configured
    locale_fallbacks: usize,

    /// Success messages hidden by their revert timer
    success_reverts: usize,
}

impl PageMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_accepted(&mut self) {
        self.accepted += 1;
    }

    pub fn record_rejected(&mut self) {
        self.rejected += 1;
    }

    /// Record a locale switch; `fell_back` marks an unknown requested locale.
    pub fn record_locale_switch(&mut self, fell_back: bool) {
        self.locale_switches += 1;
        if fell_back {
            self.locale_fallbacks += 1;
        }
    }

    pub fn record_success_revert(&mut self) {
        self.success_reverts += 1;
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let submissions = self.accepted + self.rejected;
        let acceptance_rate = if submissions > 0 {
            (self.accepted as f64 / submissions as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            submissions,
            accepted: self.accepted,
            rejected: self.rejected,
            acceptance_rate,
            locale_switches: self.locale_switches,
            locale_fallbacks: self.locale_fallbacks,
            success_reverts: self.success_reverts,
        }
    }
}

/// Snapshot of a page's metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsReport {
    pub submissions: usize,
    pub accepted: usize,
    pub rejected: usize,
    /// Percentage of submissions accepted (0.0 with no submissions)
    pub acceptance_rate: f64,
    pub locale_switches: usize,
    pub locale_fallbacks: usize,
    pub success_reverts: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_empty() {
        let report = PageMetrics::new().report();
        assert_eq!(report.submissions, 0);
        assert_eq!(report.acceptance_rate, 0.0);
        assert_eq!(report.locale_switches, 0);
    }

    #[test]
    fn test_report_acceptance_rate() {
        let mut metrics = PageMetrics::new();

        // 3 accepted, 1 rejected = 75%
        metrics.record_accepted();
        metrics.record_accepted();
        metrics.record_accepted();
        metrics.record_rejected();

        let report = metrics.report();
        assert_eq!(report.submissions, 4);
        assert_eq!(report.acceptance_rate, 75.0);
    }

    #[test]
    fn test_report_all_rejected() {
        let mut metrics = PageMetrics::new();
        metrics.record_rejected();
        metrics.record_rejected();
        assert_eq!(metrics.report().acceptance_rate, 0.0);
    }

    #[test]
    fn test_locale_fallbacks_counted_separately() {
        let mut metrics = PageMetrics::new();
        metrics.record_locale_switch(false);
        metrics.record_locale_switch(true);

        let report = metrics.report();
        assert_eq!(report.locale_switches, 2);
        assert_eq!(report.locale_fallbacks, 1);
    }

    #[test]
    fn test_report_serializes() {
        let mut metrics = PageMetrics::new();
        metrics.record_success_revert();
        let json = serde_json::to_value(metrics.report()).unwrap();
        assert_eq!(json["success_reverts"], 1);
        assert_eq!(json["acceptance_rate"], 0.0);
    }
}
