pub mod metric;
pub mod report;

pub use metric::{MetricName, MetricSample, MetricTier, Strategy};
pub use report::{BasicReport, BasicTiming, Opportunities, PageSpeedMetrics, PageSpeedReport, SpeedReport};
