//! Terminal and NDJSON rendering for the `rld` binary

pub mod context;
pub mod error;
pub mod json;
pub mod output;
pub mod terminal;
pub mod theme;
pub mod views;
