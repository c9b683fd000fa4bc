//! Uniq command line library.
//!
//! The `uniq` binary is a thin argument dispatcher over [`commands`]. Every
//! command returns a `Result` instead of exiting so the same entry points
//! can be driven from tests.

pub mod commands;
mod tracing_setup;

pub use tracing_setup::init_tracing;
