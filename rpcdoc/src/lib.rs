//! Expose rpcdoc's internal API for use in integration tests and the xtask
//! crate. The stable surface for other programs is `rpcdoc-markdown`.
pub mod cli;
pub mod config;
pub mod error;
pub mod generate;
pub mod template;
