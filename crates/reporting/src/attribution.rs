//! Incremental lift attribution: splits a test product's revenue into the
//! share caused by advertising and the organic baseline.

use k2motor_core::types::{AttributionMetrics, AttributionRecord, ControlProduct, TestProduct};

use crate::calculations::{compute_incremental_lift, compute_true_roas, ratio};

/// Confidence floor for an attribution estimate with no measured lift.
const BASE_ACCURACY: f64 = 0.7;
/// Confidence gained per unit of lift.
const ACCURACY_PER_LIFT: f64 = 0.5;
const MAX_ACCURACY: f64 = 0.95;

pub fn compute_attribution_metrics(
    test: &TestProduct,
    control: &ControlProduct,
) -> AttributionMetrics {
    let lift = compute_incremental_lift(test, control);
    let true_ad_revenue = test.revenue * lift;
    let organic_boost = test.revenue - true_ad_revenue;

    AttributionMetrics {
        incremental_lift: lift,
        lift_percentage: lift * 100.0,
        true_ad_revenue,
        organic_boost,
        true_roas: compute_true_roas(test.revenue, test.ad_spend, organic_boost),
        // Guarded like every other ratio; zero ad spend reports 0, not infinity.
        apparent_roas: ratio(test.revenue, test.ad_spend),
        attribution_accuracy: (BASE_ACCURACY + lift * ACCURACY_PER_LIFT).min(MAX_ACCURACY),
    }
}

/// Metrics shipped with the record, or derived from its cohorts when absent.
pub fn resolve_attribution(record: &AttributionRecord) -> AttributionMetrics {
    record.attribution_results.unwrap_or_else(|| {
        compute_attribution_metrics(&record.test_product, &record.control_product)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn cohort(
        test_revenue: f64,
        ad_spend: f64,
        control_revenue: f64,
    ) -> (TestProduct, ControlProduct) {
        (
            TestProduct {
                sku: "FLT-220".to_string(),
                revenue: test_revenue,
                sales_volume: 10.0,
                ad_spend,
            },
            ControlProduct {
                revenue: control_revenue,
                sales_volume: 10.0,
            },
        )
    }

    #[test]
    fn test_metrics_for_positive_lift() {
        let (test, control) = cohort(1000.0, 200.0, 800.0);
        let m = compute_attribution_metrics(&test, &control);

        assert!((m.incremental_lift - 0.25).abs() < EPS);
        assert!((m.lift_percentage - 25.0).abs() < EPS);
        assert!((m.true_ad_revenue - 250.0).abs() < EPS);
        assert!((m.organic_boost - 750.0).abs() < EPS);
        // max(0, 1000 - 750) / 200
        assert!((m.true_roas - 1.25).abs() < EPS);
        assert!((m.apparent_roas - 5.0).abs() < EPS);
        assert!((m.attribution_accuracy - 0.825).abs() < EPS);
    }

    #[test]
    fn test_no_lift_means_all_organic() {
        let (test, control) = cohort(500.0, 100.0, 800.0);
        let m = compute_attribution_metrics(&test, &control);

        assert_eq!(m.incremental_lift, 0.0);
        assert_eq!(m.true_ad_revenue, 0.0);
        assert!((m.organic_boost - 500.0).abs() < EPS);
        assert_eq!(m.true_roas, 0.0);
        assert!((m.attribution_accuracy - 0.7).abs() < EPS);
    }

    #[test]
    fn test_zero_ad_spend_is_guarded() {
        let (test, control) = cohort(1000.0, 0.0, 800.0);
        let m = compute_attribution_metrics(&test, &control);
        assert_eq!(m.apparent_roas, 0.0);
        assert_eq!(m.true_roas, 0.0);
    }

    #[test]
    fn test_accuracy_bounded_and_monotonic() {
        let mut previous = 0.0;
        for test_revenue in (800..=4000).step_by(50) {
            let (test, control) = cohort(test_revenue as f64, 100.0, 800.0);
            let accuracy = compute_attribution_metrics(&test, &control).attribution_accuracy;
            assert!((0.7..=0.95).contains(&accuracy));
            assert!(accuracy >= previous);
            previous = accuracy;
        }
        assert!((previous - 0.95).abs() < EPS);
    }

    #[test]
    fn test_resolve_prefers_shipped_results() {
        let (test, control) = cohort(1000.0, 200.0, 800.0);
        let shipped = AttributionMetrics {
            true_ad_revenue: 42.0,
            ..Default::default()
        };
        let mut record = AttributionRecord {
            id: "attr-1".to_string(),
            test_product: test,
            control_product: control,
            attribution_results: Some(shipped),
        };
        assert_eq!(resolve_attribution(&record).true_ad_revenue, 42.0);

        record.attribution_results = None;
        assert!((resolve_attribution(&record).true_ad_revenue - 250.0).abs() < EPS);
    }
}
