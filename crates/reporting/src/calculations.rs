//! Core ratio formulas. Every division is guarded: a zero denominator
//! yields 0 rather than NaN or infinity.

use k2motor_core::types::{CampaignRecord, ControlProduct, ProductRecord, TestProduct};

pub(crate) fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// POAS = (revenue - product cost) / ad spend. May be negative.
pub fn compute_profit_on_ad_spend(revenue: f64, ad_spend: f64, product_cost: f64) -> f64 {
    ratio(revenue - product_cost, ad_spend)
}

/// Relative per-unit revenue gain of the advertised product over its control,
/// floored at 0.
pub fn compute_incremental_lift(test: &TestProduct, control: &ControlProduct) -> f64 {
    let test_performance = ratio(test.revenue, test.sales_volume);
    let control_performance = ratio(control.revenue, control.sales_volume);
    if control_performance == 0.0 {
        return 0.0;
    }
    ((test_performance - control_performance) / control_performance).max(0.0)
}

/// ROAS counting only revenue above the organic baseline.
pub fn compute_true_roas(apparent_revenue: f64, ad_spend: f64, organic_revenue: f64) -> f64 {
    if ad_spend == 0.0 {
        return 0.0;
    }
    (apparent_revenue - organic_revenue).max(0.0) / ad_spend
}

/// POAS for a campaign, costing every order at the product's unit cost.
pub fn campaign_poas(campaign: &CampaignRecord, product: &ProductRecord) -> f64 {
    let product_cost = product.cost * campaign.orders as f64;
    compute_profit_on_ad_spend(campaign.revenue, campaign.spend, product_cost)
}
