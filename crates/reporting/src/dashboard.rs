//! Dashboard KPI rollup across all campaigns and lift tests.

use k2motor_core::types::{AttributionRecord, CampaignRecord, DashboardKpis, ProductRecord};
use tracing::debug;

use crate::attribution::resolve_attribution;
use crate::calculations::{campaign_poas, ratio};
use crate::index::RecordIndex;

/// POAS above which a campaign counts as profitable.
const PROFITABLE_POAS: f64 = 1.0;

pub fn compute_dashboard_kpis(
    campaigns: &[CampaignRecord],
    attribution: &[AttributionRecord],
    products: &[ProductRecord],
) -> DashboardKpis {
    let index = RecordIndex::new(products, attribution);

    let total_spend: f64 = campaigns.iter().map(|c| c.spend).sum();
    let total_revenue: f64 = campaigns.iter().map(|c| c.revenue).sum();
    let total_orders = campaigns
        .iter()
        .fold(0u64, |acc, c| acc.saturating_add(c.orders));
    let active_campaigns = campaigns.iter().filter(|c| c.is_active()).count() as u64;

    // Spend-weighted POAS over campaigns whose product cost is known.
    let mut weighted_poas = 0.0;
    let mut poas_weight = 0.0;
    let mut profitable_campaigns = 0u64;
    for campaign in campaigns {
        let Some(product) = index.product_for(campaign) else {
            continue;
        };
        let poas = campaign_poas(campaign, product);
        if poas > PROFITABLE_POAS {
            profitable_campaigns += 1;
        }
        if campaign.spend > 0.0 {
            weighted_poas += poas * campaign.spend;
            poas_weight += campaign.spend;
        }
    }

    let true_ad_revenue: f64 = attribution
        .iter()
        .map(|r| resolve_attribution(r).true_ad_revenue)
        .sum();
    let test_ad_spend: f64 = attribution.iter().map(|r| r.test_product.ad_spend).sum();

    let kpis = DashboardKpis {
        total_spend,
        total_revenue,
        total_orders,
        overall_roas: ratio(total_revenue, total_spend),
        overall_poas: ratio(weighted_poas, poas_weight),
        true_roas: ratio(true_ad_revenue, test_ad_spend),
        avg_order_value: ratio(total_revenue, total_orders as f64),
        active_campaigns,
        profitable_campaigns,
    };
    debug!(
        campaigns = campaigns.len(),
        attribution = attribution.len(),
        products = products.len(),
        overall_roas = kpis.overall_roas,
        "Dashboard KPIs computed"
    );
    kpis
}
