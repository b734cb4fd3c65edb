pub mod scan;
pub mod signals;
pub mod watch;
