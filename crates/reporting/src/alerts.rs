//! Scenario alerting: four independent rules evaluated per campaign.
//!
//! 1. Critical: reported ROAS looks healthy but POAS shows a loss.
//! 2. Warning: ad fatigue (high frequency with a downward trend).
//! 3. Warning: ad/landing-page message mismatch (high bounce rate).
//! 4. Opportunity: true ROAS falls well short of apparent ROAS.

use k2motor_core::config::AlertThresholds;
use k2motor_core::types::{
    Alert, AlertType, AttributionRecord, CampaignRecord, ProductRecord, Trend,
};
use tracing::debug;

use crate::attribution::resolve_attribution;
use crate::calculations::campaign_poas;
use crate::index::RecordIndex;

const HIDDEN_LOSS_RECOMMENDATION: &str =
    "Pause or re-price this campaign: product costs exceed the margin its ad spend generates";
const AD_FATIGUE_RECOMMENDATION: &str =
    "Rotate in fresh creatives and widen the audience to lower repeat exposure";
const MESSAGE_MISMATCH_RECOMMENDATION: &str =
    "Align ad copy with the landing page offer, fitment details and pricing";
const ATTRIBUTION_GAP_RECOMMENDATION: &str =
    "Shift budget toward campaigns with proven incremental lift and trim spend on organic sellers";

/// Evaluate all scenario rules with the default thresholds.
pub fn compute_scenario_alerts(
    campaigns: &[CampaignRecord],
    attribution: &[AttributionRecord],
    products: &[ProductRecord],
) -> Vec<Alert> {
    compute_scenario_alerts_with(campaigns, attribution, products, &AlertThresholds::default())
}

/// Evaluate all scenario rules. Alerts come out in campaign order, and in
/// scenario order within a campaign.
pub fn compute_scenario_alerts_with(
    campaigns: &[CampaignRecord],
    attribution: &[AttributionRecord],
    products: &[ProductRecord],
    thresholds: &AlertThresholds,
) -> Vec<Alert> {
    let index = RecordIndex::new(products, attribution);
    let mut alerts = Vec::new();

    for campaign in campaigns {
        let fired = [
            hidden_loss(campaign, &index, thresholds),
            ad_fatigue(campaign, thresholds),
            message_mismatch(campaign, thresholds),
            attribution_gap(campaign, &index, thresholds),
        ];
        for alert in fired.into_iter().flatten() {
            debug!(
                campaign_id = %campaign.campaign_id,
                scenario = alert.scenario,
                alert_type = alert.alert_type.as_str(),
                "Scenario alert raised"
            );
            alerts.push(alert);
        }
    }

    alerts
}

fn hidden_loss(
    campaign: &CampaignRecord,
    index: &RecordIndex<'_>,
    thresholds: &AlertThresholds,
) -> Option<Alert> {
    // Predicates stay in their firing form so NaN inputs never raise alerts.
    let looks_profitable = campaign.roas > thresholds.high_roas;
    if campaign.scenario != 1 || !looks_profitable {
        return None;
    }
    let product = index.product_for(campaign)?;
    let poas = campaign_poas(campaign, product);
    let losing_money = poas < thresholds.break_even_poas;
    if !losing_money {
        return None;
    }
    Some(Alert {
        alert_type: AlertType::Critical,
        scenario: 1,
        campaign: campaign.campaign_name.clone(),
        message: format!(
            "ROAS of {:.2}x looks profitable, but POAS is only {:.2}x after product costs",
            campaign.roas, poas
        ),
        recommendation: HIDDEN_LOSS_RECOMMENDATION.to_string(),
    })
}

fn ad_fatigue(campaign: &CampaignRecord, thresholds: &AlertThresholds) -> Option<Alert> {
    let frequency = campaign.ad_frequency?;
    let fatigued = frequency > thresholds.max_ad_frequency && campaign.trend == Trend::Down;
    if !fatigued {
        return None;
    }
    Some(Alert {
        alert_type: AlertType::Warning,
        scenario: 2,
        campaign: campaign.campaign_name.clone(),
        message: format!(
            "Ad frequency of {} with performance down {}%, audience is fatigued",
            frequency,
            campaign.trend_percent.abs()
        ),
        recommendation: AD_FATIGUE_RECOMMENDATION.to_string(),
    })
}

fn message_mismatch(campaign: &CampaignRecord, thresholds: &AlertThresholds) -> Option<Alert> {
    let mismatched = campaign.bounce_rate > thresholds.max_bounce_rate;
    if !mismatched {
        return None;
    }
    Some(Alert {
        alert_type: AlertType::Warning,
        scenario: 3,
        campaign: campaign.campaign_name.clone(),
        message: format!(
            "Bounce rate of {}% suggests the ad message does not match the landing page",
            campaign.bounce_rate
        ),
        recommendation: MESSAGE_MISMATCH_RECOMMENDATION.to_string(),
    })
}

fn attribution_gap(
    campaign: &CampaignRecord,
    index: &RecordIndex<'_>,
    thresholds: &AlertThresholds,
) -> Option<Alert> {
    let record = index.attribution_for(campaign)?;
    let metrics = resolve_attribution(record);
    let understated = metrics.true_roas < metrics.apparent_roas * thresholds.attribution_gap_ratio;
    if !understated {
        return None;
    }
    Some(Alert {
        alert_type: AlertType::Opportunity,
        scenario: 4,
        campaign: campaign.campaign_name.clone(),
        message: format!(
            "True ROAS of {:.2}x is well below apparent ROAS of {:.2}x",
            metrics.true_roas, metrics.apparent_roas
        ),
        recommendation: ATTRIBUTION_GAP_RECOMMENDATION.to_string(),
    })
}
