pub mod capture;
pub mod document;
pub mod instrumentation;
pub mod persistence;
