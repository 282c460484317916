use crate::models::{MetricName, MetricTier};

/// Upper bounds (inclusive) for `good` and `warning`. Paint and timing
/// metrics are in seconds, TBT and response time in milliseconds, CLS is
/// unitless. These follow published page-experience guidance and are not
/// configurable.
pub const fn thresholds(name: MetricName) -> (f64, f64) {
    match name {
        MetricName::Fcp => (1.8, 3.0),
        MetricName::Lcp => (2.5, 4.0),
        MetricName::Cls => (0.1, 0.25),
        MetricName::Tbt => (200.0, 600.0),
        MetricName::Si => (3.4, 5.8),
        MetricName::Tti => (3.8, 7.3),
        MetricName::ResponseTimeMs => (200.0, 1000.0),
    }
}

/// A missing or non-finite value is `Missing` before any threshold is
/// looked at; so is a value past the warning bound.
pub fn classify(name: MetricName, value: Option<f64>) -> MetricTier {
    let Some(value) = value.filter(|v| v.is_finite()) else {
        return MetricTier::Missing;
    };

    let (good, warning) = thresholds(name);
    if value <= good {
        MetricTier::Good
    } else if value <= warning {
        MetricTier::Warning
    } else {
        MetricTier::Missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::speed::metric::parse_metric_value;

    fn classify_display(name: MetricName, display: Option<&str>) -> MetricTier {
        classify(name, display.and_then(parse_metric_value))
    }

    #[test]
    fn lcp_tiers() {
        assert_eq!(classify(MetricName::Lcp, Some(2.5)), MetricTier::Good);
        assert_eq!(classify(MetricName::Lcp, Some(2.6)), MetricTier::Warning);
        assert_eq!(classify(MetricName::Lcp, Some(4.0)), MetricTier::Warning);
        assert_eq!(classify(MetricName::Lcp, Some(4.1)), MetricTier::Missing);
        assert_eq!(classify(MetricName::Lcp, None), MetricTier::Missing);
    }

    #[test]
    fn every_metric_has_good_and_warning_bands() {
        let names = [
            MetricName::Fcp,
            MetricName::Lcp,
            MetricName::Cls,
            MetricName::Tbt,
            MetricName::Si,
            MetricName::Tti,
            MetricName::ResponseTimeMs,
        ];
        for name in names {
            let (good, warning) = thresholds(name);
            assert!(good < warning, "{}", name);
            assert_eq!(classify(name, Some(good)), MetricTier::Good, "{}", name);
            assert_eq!(classify(name, Some(warning)), MetricTier::Warning, "{}", name);
            assert_eq!(
                classify(name, Some(warning * 2.0)),
                MetricTier::Missing,
                "{}",
                name
            );
        }
    }

    #[test]
    fn response_time() {
        assert_eq!(
            classify(MetricName::ResponseTimeMs, Some(150.0)),
            MetricTier::Good
        );
        assert_eq!(
            classify(MetricName::ResponseTimeMs, Some(800.0)),
            MetricTier::Warning
        );
        assert_eq!(
            classify(MetricName::ResponseTimeMs, Some(1500.0)),
            MetricTier::Missing
        );
    }

    #[test]
    fn display_strings_are_parsed_first() {
        assert_eq!(
            classify_display(MetricName::Fcp, Some("1.8 s")),
            MetricTier::Good
        );
        assert_eq!(
            classify_display(MetricName::Tbt, Some("350 ms")),
            MetricTier::Warning
        );
        assert_eq!(classify_display(MetricName::Cls, Some("")), MetricTier::Missing);
        assert_eq!(
            classify_display(MetricName::Cls, Some("unknown")),
            MetricTier::Missing
        );
        assert_eq!(classify_display(MetricName::Si, None), MetricTier::Missing);
        assert_eq!(classify(MetricName::Si, Some(f64::NAN)), MetricTier::Missing);
    }
}
