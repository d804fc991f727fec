//! Library components of the berichtwerk CLI.

pub mod config;
pub mod logging;
pub mod pipeline;
