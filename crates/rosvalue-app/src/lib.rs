// Library root: configuration, data supplies, CSV export and the run driver.
// The binary in main.rs is a thin wrapper so integration tests can drive the
// same code.

pub mod config;
pub mod export;
pub mod run;
pub mod sources;
