use crate::models::speed::metric::{MetricName, MetricSample, MetricTier, Strategy};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct PageSpeedMetrics {
    #[serde(rename = "FCP")]
    pub fcp: MetricSample,
    #[serde(rename = "LCP")]
    pub lcp: MetricSample,
    #[serde(rename = "TBT")]
    pub tbt: MetricSample,
    #[serde(rename = "CLS")]
    pub cls: MetricSample,
    #[serde(rename = "SI")]
    pub si: MetricSample,
    #[serde(rename = "TTI")]
    pub tti: MetricSample,
    #[serde(rename = "FMP")]
    pub fmp: MetricSample,
    #[serde(rename = "DCL")]
    pub dcl: MetricSample,
    #[serde(rename = "Load")]
    pub load: MetricSample,
}

impl PageSpeedMetrics {
    /// The samples that have classifier thresholds, paired with their names.
    pub fn classifiable(&self) -> [(MetricName, &MetricSample); 6] {
        [
            (MetricName::Fcp, &self.fcp),
            (MetricName::Lcp, &self.lcp),
            (MetricName::Cls, &self.cls),
            (MetricName::Tbt, &self.tbt),
            (MetricName::Si, &self.si),
            (MetricName::Tti, &self.tti),
        ]
    }
}

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct Opportunities {
    #[serde(rename = "unusedJS")]
    pub unused_js: Option<String>,
    pub images: Option<String>,
    #[serde(rename = "renderBlocking")]
    pub render_blocking: Option<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageSpeedReport {
    pub url: String,
    pub strategy: Strategy,
    pub performance_score: Option<u8>,
    pub metrics: PageSpeedMetrics,
    pub opportunities: Opportunities,
    pub tiers: BTreeMap<MetricName, MetricTier>,
    pub timestamp: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BasicTiming {
    pub status: u16,
    pub time_ms: u64,
    pub bytes: usize,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BasicReport {
    pub url: String,
    pub strategy: Strategy,
    pub basic: BasicTiming,
    pub tiers: BTreeMap<MetricName, MetricTier>,
    pub timestamp: String,
}

/// Result of the speed path. The basic timing fallback cannot produce paint
/// metrics, so the two shapes stay separate and serialize with a
/// `usingPageSpeedAPI` discriminator.
#[derive(Debug, Clone, PartialEq)]
pub enum SpeedReport {
    PageSpeed(PageSpeedReport),
    Basic(BasicReport),
}

impl SpeedReport {
    pub fn using_pagespeed_api(&self) -> bool {
        matches!(self, SpeedReport::PageSpeed(_))
    }

    pub fn tiers(&self) -> &BTreeMap<MetricName, MetricTier> {
        match self {
            SpeedReport::PageSpeed(report) => &report.tiers,
            SpeedReport::Basic(report) => &report.tiers,
        }
    }
}

#[derive(Serialize)]
struct Tagged<'a, T> {
    #[serde(rename = "usingPageSpeedAPI")]
    using_pagespeed_api: bool,
    #[serde(flatten)]
    report: &'a T,
}

impl Serialize for SpeedReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SpeedReport::PageSpeed(report) => Tagged {
                using_pagespeed_api: true,
                report,
            }
            .serialize(serializer),
            SpeedReport::Basic(report) => Tagged {
                using_pagespeed_api: false,
                report,
            }
            .serialize(serializer),
        }
    }
}
