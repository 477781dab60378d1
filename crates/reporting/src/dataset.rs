//! Validated record sets. Shape and referential checks happen once here so
//! the metric functions can stay total over their inputs.

use std::collections::HashSet;

use k2motor_core::error::{K2Error, K2Result, RecordKind};
use k2motor_core::types::{AttributionRecord, CampaignRecord, ProductRecord};
use tracing::info;

#[derive(Debug, Clone, Default)]
pub struct Dataset {
    campaigns: Vec<CampaignRecord>,
    attribution: Vec<AttributionRecord>,
    products: Vec<ProductRecord>,
}

impl Dataset {
    pub fn new(
        campaigns: Vec<CampaignRecord>,
        attribution: Vec<AttributionRecord>,
        products: Vec<ProductRecord>,
    ) -> K2Result<Self> {
        let product_skus =
            unique_ids(RecordKind::Product, products.iter().map(|p| p.sku.as_str()))?;
        let attribution_ids =
            unique_ids(RecordKind::Attribution, attribution.iter().map(|r| r.id.as_str()))?;
        unique_ids(
            RecordKind::Campaign,
            campaigns.iter().map(|c| c.campaign_id.as_str()),
        )?;

        for product in &products {
            validate_product(product)?;
        }
        for record in &attribution {
            validate_attribution(record)?;
        }
        for campaign in &campaigns {
            validate_campaign(campaign, &product_skus, &attribution_ids)?;
        }

        info!(
            campaigns = campaigns.len(),
            attribution = attribution.len(),
            products = products.len(),
            "Dataset validated"
        );
        Ok(Self {
            campaigns,
            attribution,
            products,
        })
    }

    /// Parse the three JSON arrays and validate them together.
    pub fn from_json(campaigns: &str, attribution: &str, products: &str) -> K2Result<Self> {
        Self::new(
            serde_json::from_str(campaigns)?,
            serde_json::from_str(attribution)?,
            serde_json::from_str(products)?,
        )
    }

    pub fn campaigns(&self) -> &[CampaignRecord] {
        &self.campaigns
    }

    pub fn attribution(&self) -> &[AttributionRecord] {
        &self.attribution
    }

    pub fn products(&self) -> &[ProductRecord] {
        &self.products
    }

    pub fn is_empty(&self) -> bool {
        self.campaigns.is_empty() && self.attribution.is_empty() && self.products.is_empty()
    }
}

fn unique_ids<'a>(
    kind: RecordKind,
    ids: impl Iterator<Item = &'a str>,
) -> K2Result<HashSet<&'a str>> {
    let mut seen = HashSet::new();
    for id in ids {
        if id.trim().is_empty() {
            return Err(K2Error::validation(kind, id, "id must not be empty"));
        }
        if !seen.insert(id) {
            return Err(K2Error::validation(kind, id, "duplicate id"));
        }
    }
    Ok(seen)
}

fn non_negative(kind: RecordKind, id: &str, field: &str, value: f64) -> K2Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(K2Error::validation(
            kind,
            id,
            format!("{field} must be a finite non-negative number, got {value}"),
        ));
    }
    Ok(())
}

fn finite(kind: RecordKind, id: &str, field: &str, value: f64) -> K2Result<()> {
    if !value.is_finite() {
        return Err(K2Error::validation(kind, id, format!("{field} must be finite")));
    }
    Ok(())
}

fn validate_product(product: &ProductRecord) -> K2Result<()> {
    non_negative(RecordKind::Product, &product.sku, "cost", product.cost)
}

fn validate_attribution(record: &AttributionRecord) -> K2Result<()> {
    let kind = RecordKind::Attribution;
    let id = record.id.as_str();
    let test = &record.test_product;
    non_negative(kind, id, "testProduct.revenue", test.revenue)?;
    non_negative(kind, id, "testProduct.salesVolume", test.sales_volume)?;
    non_negative(kind, id, "testProduct.adSpend", test.ad_spend)?;
    non_negative(kind, id, "controlProduct.revenue", record.control_product.revenue)?;
    non_negative(kind, id, "controlProduct.salesVolume", record.control_product.sales_volume)?;
    if let Some(results) = &record.attribution_results {
        non_negative(kind, id, "attributionResults.trueAdRevenue", results.true_ad_revenue)?;
        finite(kind, id, "attributionResults.trueROAS", results.true_roas)?;
        finite(kind, id, "attributionResults.apparentROAS", results.apparent_roas)?;
    }
    Ok(())
}

fn validate_campaign(
    campaign: &CampaignRecord,
    product_skus: &HashSet<&str>,
    attribution_ids: &HashSet<&str>,
) -> K2Result<()> {
    let kind = RecordKind::Campaign;
    let id = campaign.campaign_id.as_str();
    non_negative(kind, id, "spend", campaign.spend)?;
    non_negative(kind, id, "revenue", campaign.revenue)?;
    finite(kind, id, "roas", campaign.roas)?;
    finite(kind, id, "trendPercent", campaign.trend_percent)?;
    if let Some(frequency) = campaign.ad_frequency {
        non_negative(kind, id, "adFrequency", frequency)?;
    }
    if !(0.0..=100.0).contains(&campaign.bounce_rate) {
        return Err(K2Error::validation(
            kind,
            id,
            format!("bounceRate must be within 0-100, got {}", campaign.bounce_rate),
        ));
    }
    if let Some(sku) = campaign.product_sku.as_deref() {
        if !product_skus.contains(sku) {
            return Err(K2Error::validation(kind, id, format!("unknown productSku '{sku}'")));
        }
    }
    if let Some(attribution_id) = campaign.attribution_id.as_deref() {
        if !attribution_ids.contains(attribution_id) {
            return Err(K2Error::validation(
                kind,
                id,
                format!("unknown attributionId '{attribution_id}'"),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRODUCTS: &str = r#"[{"sku": "BRK001", "asin": "B00BRK001", "cost": 80.0}]"#;
    const ATTRIBUTION: &str = r#"[{
        "id": "attr-brk",
        "testProduct": {"sku": "BRK001", "revenue": 1000, "salesVolume": 10, "adSpend": 200},
        "controlProduct": {"revenue": 800, "salesVolume": 10}
    }]"#;

    fn campaigns_json(extra: &str) -> String {
        format!(
            r#"[{{
                "campaignId": "EB-BRK-001",
                "campaignName": "Brake Pads",
                "spend": 500, "revenue": 2000, "orders": 20, "roas": 4.0,
                "status": "Active", "scenario": 1{extra}
            }}]"#
        )
    }

    #[test]
    fn test_valid_dataset_loads() {
        let json = campaigns_json(r#", "productSku": "BRK001", "attributionId": "attr-brk""#);
        let data = Dataset::from_json(&json, ATTRIBUTION, PRODUCTS).unwrap();
        assert_eq!(data.campaigns().len(), 1);
        assert_eq!(data.attribution().len(), 1);
        assert_eq!(data.products().len(), 1);
        assert!(!data.is_empty());
    }

    #[test]
    fn test_dangling_product_sku_rejected() {
        let json = campaigns_json(r#", "productSku": "OIL-5W30""#);
        let err = Dataset::from_json(&json, ATTRIBUTION, PRODUCTS).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("OIL-5W30"));
    }

    #[test]
    fn test_dangling_attribution_id_rejected() {
        let json = campaigns_json(r#", "attributionId": "attr-missing""#);
        let err = Dataset::from_json(&json, ATTRIBUTION, PRODUCTS).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_bounce_rate_out_of_range_rejected() {
        let json = campaigns_json(r#", "bounceRate": 140"#);
        assert!(Dataset::from_json(&json, "[]", "[]").unwrap_err().is_validation());
    }

    #[test]
    fn test_negative_cost_rejected() {
        let products = r#"[{"sku": "BRK001", "asin": "B00BRK001", "cost": -1}]"#;
        let err = Dataset::from_json("[]", "[]", products).unwrap_err();
        assert!(matches!(
            err,
            K2Error::Validation {
                kind: RecordKind::Product,
                ..
            }
        ));
    }

    #[test]
    fn test_duplicate_campaign_rejected() {
        let mut campaigns: Vec<CampaignRecord> =
            serde_json::from_str(&campaigns_json("")).unwrap();
        campaigns.push(campaigns[0].clone());
        let err = Dataset::new(campaigns, vec![], vec![]).unwrap_err();
        assert!(err.to_string().contains("duplicate id"));
    }

    #[test]
    fn test_missing_field_is_serialization_error() {
        let err = Dataset::from_json(r#"[{"campaignId": "x"}]"#, "[]", "[]").unwrap_err();
        assert!(matches!(err, K2Error::Serialization(_)));
    }
}
