//! Advertising performance analytics: profit on ad spend, incremental lift
//! attribution, scenario alerting, and dashboard KPI rollups.

pub mod alerts;
pub mod attribution;
pub mod calculations;
pub mod dashboard;
pub mod dataset;
pub mod engine;
pub mod index;

pub use alerts::{compute_scenario_alerts, compute_scenario_alerts_with};
pub use attribution::{compute_attribution_metrics, resolve_attribution};
pub use calculations::{
    compute_incremental_lift, compute_profit_on_ad_spend, compute_true_roas,
};
pub use dashboard::compute_dashboard_kpis;
pub use dataset::Dataset;
pub use engine::{DashboardMetrics, MetricsEngine};
pub use index::RecordIndex;
