use crate::error::AnalysisError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    #[default]
    Mobile,
    Desktop,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Mobile => "mobile",
            Strategy::Desktop => "desktop",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mobile" => Ok(Strategy::Mobile),
            "desktop" => Ok(Strategy::Desktop),
            other => Err(AnalysisError::InvalidInput(format!(
                "strategy must be 'mobile' or 'desktop', got '{}'",
                other
            ))),
        }
    }
}

/// Metrics the classifier has thresholds for.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MetricName {
    #[serde(rename = "FCP")]
    Fcp,
    #[serde(rename = "LCP")]
    Lcp,
    #[serde(rename = "CLS")]
    Cls,
    #[serde(rename = "TBT")]
    Tbt,
    #[serde(rename = "SI")]
    Si,
    #[serde(rename = "TTI")]
    Tti,
    #[serde(rename = "responseTimeMs")]
    ResponseTimeMs,
}

impl MetricName {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricName::Fcp => "FCP",
            MetricName::Lcp => "LCP",
            MetricName::Cls => "CLS",
            MetricName::Tbt => "TBT",
            MetricName::Si => "SI",
            MetricName::Tti => "TTI",
            MetricName::ResponseTimeMs => "responseTimeMs",
        }
    }
}

impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MetricTier {
    Good,
    Warning,
    Missing,
}

/// One reported value. `numeric_value` is derived from `display_value` and is
/// `None` whenever the display text is absent or has no number in it.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MetricSample {
    pub display_value: Option<String>,
    pub numeric_value: Option<f64>,
}

impl MetricSample {
    pub fn from_display(display_value: Option<String>) -> Self {
        let numeric_value = display_value.as_deref().and_then(parse_metric_value);
        Self {
            display_value,
            numeric_value,
        }
    }

    pub fn missing() -> Self {
        Self::default()
    }
}

/// Reads the number out of a display string such as `"1.8 s"` or
/// `"1,230 ms"` by dropping everything except digits and the decimal point.
pub fn parse_metric_value(display: &str) -> Option<f64> {
    let digits: String = display
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse::<f64>().ok().filter(|v| v.is_finite())
}
