pub mod document;
pub mod instrumentation;
pub mod store;

pub use document::{ImageElement, PageDocument};
pub use instrumentation::{EntryKind, NavigationTiming, PerformanceEntry, PerformanceSource};
pub use store::{AlertStore, SnapshotStore, StoreError};
