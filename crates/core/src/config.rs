use serde::Deserialize;

/// Root application configuration. Loaded from an optional TOML file and
/// environment variables with the prefix `K2MOTOR__`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub alerts: AlertThresholds,
    #[serde(default)]
    pub data: DataConfig,
}

/// Trigger levels for the scenario alert rules.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct AlertThresholds {
    /// Scenario 1: reported ROAS above which a campaign "looks" profitable.
    #[serde(default = "default_high_roas")]
    pub high_roas: f64,
    /// Scenario 1: POAS below which the campaign is losing money.
    #[serde(default = "default_break_even_poas")]
    pub break_even_poas: f64,
    /// Scenario 2: impressions per user above which creatives are fatigued.
    #[serde(default = "default_max_ad_frequency")]
    pub max_ad_frequency: f64,
    /// Scenario 3: landing-page bounce rate (percent) signalling a mismatch.
    #[serde(default = "default_max_bounce_rate")]
    pub max_bounce_rate: f64,
    /// Scenario 4: fraction of apparent ROAS that true ROAS must reach.
    #[serde(default = "default_attribution_gap_ratio")]
    pub attribution_gap_ratio: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_dir")]
    pub dir: String,
    #[serde(default = "default_campaigns_file")]
    pub campaigns_file: String,
    #[serde(default = "default_attribution_file")]
    pub attribution_file: String,
    #[serde(default = "default_products_file")]
    pub products_file: String,
}

// Default functions
fn default_high_roas() -> f64 {
    3.5
}
fn default_break_even_poas() -> f64 {
    1.0
}
fn default_max_ad_frequency() -> f64 {
    6.0
}
fn default_max_bounce_rate() -> f64 {
    70.0
}
fn default_attribution_gap_ratio() -> f64 {
    0.7
}
fn default_data_dir() -> String {
    "data".to_string()
}
fn default_campaigns_file() -> String {
    "campaigns.json".to_string()
}
fn default_attribution_file() -> String {
    "attribution.json".to_string()
}
fn default_products_file() -> String {
    "products.json".to_string()
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            high_roas: default_high_roas(),
            break_even_poas: default_break_even_poas(),
            max_ad_frequency: default_max_ad_frequency(),
            max_bounce_rate: default_max_bounce_rate(),
            attribution_gap_ratio: default_attribution_gap_ratio(),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
            campaigns_file: default_campaigns_file(),
            attribution_file: default_attribution_file(),
            products_file: default_products_file(),
        }
    }
}

impl AppConfig {
    /// Load configuration. The file, when given, is optional on disk;
    /// environment variables take precedence over it.
    pub fn load(file: Option<&str>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();
        if let Some(path) = file {
            builder = builder.add_source(config::File::with_name(path).required(false));
        }
        let config = builder
            .add_source(
                config::Environment::with_prefix("K2MOTOR")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        config.try_deserialize()
    }

    /// Parse configuration from TOML text without consulting the environment.
    pub fn from_toml(text: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(text, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let t = AlertThresholds::default();
        assert!((t.high_roas - 3.5).abs() < f64::EPSILON);
        assert!((t.break_even_poas - 1.0).abs() < f64::EPSILON);
        assert!((t.max_ad_frequency - 6.0).abs() < f64::EPSILON);
        assert!((t.max_bounce_rate - 70.0).abs() < f64::EPSILON);
        assert!((t.attribution_gap_ratio - 0.7).abs() < f64::EPSILON);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let cfg = AppConfig::from_toml(
            r#"
            [alerts]
            max_bounce_rate = 55.0

            [data]
            dir = "/srv/k2motor"
            "#,
        )
        .unwrap();
        assert!((cfg.alerts.max_bounce_rate - 55.0).abs() < f64::EPSILON);
        assert!((cfg.alerts.high_roas - 3.5).abs() < f64::EPSILON);
        assert_eq!(cfg.data.dir, "/srv/k2motor");
        assert_eq!(cfg.data.products_file, "products.json");
    }

    #[test]
    fn test_empty_toml_is_default() {
        let cfg = AppConfig::from_toml("").unwrap();
        assert_eq!(cfg.alerts, AlertThresholds::default());
        assert_eq!(cfg.data.campaigns_file, "campaigns.json");
    }
}
