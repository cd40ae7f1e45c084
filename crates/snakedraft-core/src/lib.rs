// Library root: re-exports all modules so integration tests and the CLI
// can access the engine's public API.

pub mod config;
pub mod draft;
pub mod valuation;
