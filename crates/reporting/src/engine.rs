//! Pluggable metrics strategy handed to presentation layers.

use k2motor_core::config::AlertThresholds;
use k2motor_core::types::{Alert, DashboardKpis};

use crate::alerts::compute_scenario_alerts_with;
use crate::dashboard::compute_dashboard_kpis;
use crate::dataset::Dataset;

/// Computes the derived figures a dashboard displays. Renderers take this as
/// an optional collaborator instead of probing for a global calculator.
pub trait DashboardMetrics: Send + Sync {
    fn kpis(&self, data: &Dataset) -> DashboardKpis;

    fn alerts(&self, data: &Dataset) -> Vec<Alert>;
}

/// Default strategy backed by the scenario rules and KPI rollup.
#[derive(Debug, Clone, Default)]
pub struct MetricsEngine {
    thresholds: AlertThresholds,
}

impl MetricsEngine {
    pub fn new(thresholds: AlertThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &AlertThresholds {
        &self.thresholds
    }
}

impl DashboardMetrics for MetricsEngine {
    fn kpis(&self, data: &Dataset) -> DashboardKpis {
        compute_dashboard_kpis(data.campaigns(), data.attribution(), data.products())
    }

    fn alerts(&self, data: &Dataset) -> Vec<Alert> {
        compute_scenario_alerts_with(
            data.campaigns(),
            data.attribution(),
            data.products(),
            &self.thresholds,
        )
    }
}
