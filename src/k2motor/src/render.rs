//! Text dashboard. Number formatting lives here, not in the metrics engine.

use k2motor_core::types::{Alert, DashboardKpis};
use k2motor_reporting::{DashboardMetrics, Dataset};

const UNAVAILABLE: &str = "n/a";

/// Renders dashboard panels using whichever metrics strategy it was given.
/// Without one, panels show placeholders instead of figures.
pub struct DashboardRenderer<'a> {
    metrics: Option<&'a dyn DashboardMetrics>,
}

impl<'a> DashboardRenderer<'a> {
    pub fn new(metrics: Option<&'a dyn DashboardMetrics>) -> Self {
        Self { metrics }
    }

    pub fn render(&self, data: &Dataset) -> String {
        format!("{}\n{}", self.render_kpis(data), self.render_alerts(data))
    }

    pub fn render_kpis(&self, data: &Dataset) -> String {
        let kpis = self.metrics.map(|m| m.kpis(data));
        let mut out = String::from("K2Motor Dashboard\n");
        for (label, value) in kpi_rows(kpis.as_ref()) {
            out.push_str(&format!("  {label:<22}{value:>12}\n"));
        }
        out
    }

    pub fn render_alerts(&self, data: &Dataset) -> String {
        let Some(metrics) = self.metrics else {
            return format!("Alerts: {UNAVAILABLE}\n");
        };
        let alerts = metrics.alerts(data);
        let mut out = format!("Alerts ({})\n", alerts.len());
        for alert in &alerts {
            write_alert(&mut out, alert);
        }
        out
    }
}

fn kpi_rows(kpis: Option<&DashboardKpis>) -> Vec<(&'static str, String)> {
    let money = |f: fn(&DashboardKpis) -> f64| {
        kpis.map_or_else(|| UNAVAILABLE.to_string(), |k| format_currency(f(k)))
    };
    let multiple = |f: fn(&DashboardKpis) -> f64| {
        kpis.map_or_else(|| UNAVAILABLE.to_string(), |k| format_ratio(f(k)))
    };
    let count = |f: fn(&DashboardKpis) -> u64| {
        kpis.map_or_else(|| UNAVAILABLE.to_string(), |k| format_count(f(k)))
    };

    vec![
        ("Total spend", money(|k| k.total_spend)),
        ("Total revenue", money(|k| k.total_revenue)),
        ("Total orders", count(|k| k.total_orders)),
        ("Overall ROAS", multiple(|k| k.overall_roas)),
        ("Overall POAS", multiple(|k| k.overall_poas)),
        ("True ROAS", multiple(|k| k.true_roas)),
        ("Avg order value", money(|k| k.avg_order_value)),
        ("Active campaigns", count(|k| k.active_campaigns)),
        ("Profitable campaigns", count(|k| k.profitable_campaigns)),
    ]
}

fn write_alert(out: &mut String, alert: &Alert) {
    out.push_str(&format!(
        "  [{}] scenario {}: {}\n",
        alert.alert_type.as_str().to_uppercase(),
        alert.scenario,
        alert.campaign
    ));
    out.push_str(&format!("      {}\n", alert.message));
    out.push_str(&format!("      -> {}\n", alert.recommendation));
}

/// Whole-dollar amount with thousands separators, e.g. `$1,234`.
pub fn format_currency(value: f64) -> String {
    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}${}", group_thousands(rounded.abs() as u64))
}

/// Multiple with two decimals, e.g. `3.21x`.
pub fn format_ratio(value: f64) -> String {
    format!("{value:.2}x")
}

fn format_count(value: u64) -> String {
    group_thousands(value)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
