pub mod alert_type;
pub mod score;
pub mod thresholds;

pub use alert_type::AlertType;
pub use score::{performance_score, seo_score};
pub use thresholds::ThresholdSet;
