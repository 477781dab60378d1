pub mod config;
pub mod error;
pub mod types;

pub use config::{AlertThresholds, AppConfig};
pub use error::{K2Error, K2Result, RecordKind};
pub use types::{
    Alert, AlertType, AttributionMetrics, AttributionRecord, CampaignRecord, ControlProduct,
    DashboardKpis, ProductRecord, TestProduct, Trend,
};
