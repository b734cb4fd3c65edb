pub mod alert_fmt;
pub mod report_fmt;
pub mod status_fmt;
pub mod table_fmt;
