//! Join helpers resolving a campaign's explicit product and attribution keys.

use std::collections::HashMap;

use k2motor_core::types::{AttributionRecord, CampaignRecord, ProductRecord};

/// Borrowed lookup tables over one call's input slices. When ids repeat,
/// the first record wins.
pub struct RecordIndex<'a> {
    products: HashMap<&'a str, &'a ProductRecord>,
    attribution: HashMap<&'a str, &'a AttributionRecord>,
}

impl<'a> RecordIndex<'a> {
    pub fn new(products: &'a [ProductRecord], attribution: &'a [AttributionRecord]) -> Self {
        let mut product_map = HashMap::with_capacity(products.len());
        for product in products {
            product_map.entry(product.sku.as_str()).or_insert(product);
        }
        let mut attribution_map = HashMap::with_capacity(attribution.len());
        for record in attribution {
            attribution_map.entry(record.id.as_str()).or_insert(record);
        }
        Self {
            products: product_map,
            attribution: attribution_map,
        }
    }

    pub fn product(&self, sku: &str) -> Option<&'a ProductRecord> {
        self.products.get(sku).copied()
    }

    pub fn product_for(&self, campaign: &CampaignRecord) -> Option<&'a ProductRecord> {
        campaign.product_sku.as_deref().and_then(|sku| self.product(sku))
    }

    pub fn attribution(&self, id: &str) -> Option<&'a AttributionRecord> {
        self.attribution.get(id).copied()
    }

    pub fn attribution_for(&self, campaign: &CampaignRecord) -> Option<&'a AttributionRecord> {
        campaign
            .attribution_id
            .as_deref()
            .and_then(|id| self.attribution(id))
    }
}
