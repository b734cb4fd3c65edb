pub mod monitor;
pub mod page_signals;
pub mod report;
pub mod vitals;
