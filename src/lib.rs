//! lesscolors - reduce an image to the colors of a reference palette
//!
//! Command-line front end for the `less-colors` crate.
//! This library exposes modules for integration testing.

pub mod cli;
pub mod codec;
pub mod config;
pub mod error;
pub mod pipeline;
