pub mod alert;
pub mod report;
pub mod seo;
pub mod snapshot;
pub mod vitals;

pub use alert::Alert;
pub use report::{PerformanceReport, ReportSummary, ReportTrends};
pub use seo::SeoMetrics;
pub use snapshot::MonitoringSnapshot;
pub use vitals::CoreWebVitals;
