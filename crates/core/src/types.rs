use serde::{Deserialize, Serialize};

/// Status string that marks a campaign as live on the dashboard.
pub const ACTIVE_STATUS: &str = "Active";

/// Direction of a campaign's recent performance.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    #[default]
    Flat,
}

/// An advertising campaign as exported by the marketplace feeds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CampaignRecord {
    pub campaign_id: String,
    pub campaign_name: String,
    pub spend: f64,
    pub revenue: f64,
    pub orders: u64,
    /// Reported revenue / spend, as computed by the ad platform.
    pub roas: f64,
    pub status: String,
    pub scenario: u32,
    #[serde(default)]
    pub ad_frequency: Option<f64>,
    #[serde(default)]
    pub trend: Trend,
    #[serde(default)]
    pub trend_percent: f64,
    /// Landing-page bounce rate, 0–100.
    #[serde(default)]
    pub bounce_rate: f64,
    /// SKU of the advertised product in the product catalog.
    #[serde(default)]
    pub product_sku: Option<String>,
    /// Id of the lift-test cohort this campaign is measured against.
    #[serde(default)]
    pub attribution_id: Option<String>,
}

impl CampaignRecord {
    pub fn is_active(&self) -> bool {
        self.status == ACTIVE_STATUS
    }
}

/// Catalog entry carrying per-unit cost.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub sku: String,
    pub asin: String,
    pub cost: f64,
}

/// The advertised side of a lift test.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TestProduct {
    pub sku: String,
    pub revenue: f64,
    pub sales_volume: f64,
    pub ad_spend: f64,
}

/// The organic-only side of a lift test.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ControlProduct {
    pub revenue: f64,
    pub sales_volume: f64,
}

/// A test/control cohort pair used to estimate incremental revenue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AttributionRecord {
    pub id: String,
    pub test_product: TestProduct,
    pub control_product: ControlProduct,
    /// Precomputed results shipped with the record. Derived on demand when absent.
    #[serde(default)]
    pub attribution_results: Option<AttributionMetrics>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AttributionMetrics {
    pub incremental_lift: f64,
    pub lift_percentage: f64,
    pub true_ad_revenue: f64,
    pub organic_boost: f64,
    #[serde(rename = "trueROAS")]
    pub true_roas: f64,
    #[serde(rename = "apparentROAS")]
    pub apparent_roas: f64,
    pub attribution_accuracy: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AlertType {
    Critical,
    Warning,
    Opportunity,
}

impl AlertType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Warning => "warning",
            Self::Opportunity => "opportunity",
        }
    }
}

/// A rule-based finding about a single campaign.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Alert {
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    pub scenario: u32,
    pub campaign: String,
    pub message: String,
    pub recommendation: String,
}

/// Dashboard-wide rollup across all campaigns.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardKpis {
    pub total_spend: f64,
    pub total_revenue: f64,
    pub total_orders: u64,
    #[serde(rename = "overallROAS")]
    pub overall_roas: f64,
    #[serde(rename = "overallPOAS")]
    pub overall_poas: f64,
    #[serde(rename = "trueROAS")]
    pub true_roas: f64,
    pub avg_order_value: f64,
    pub active_campaigns: u64,
    pub profitable_campaigns: u64,
}
