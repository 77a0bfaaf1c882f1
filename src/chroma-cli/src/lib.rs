//! Command-line front end for `chroma_core`.
//!
//! The binary is a thin wrapper: it parses [`cli::Cli`], loads the config
//! file, installs logging and prints the rendered [`report::ColorReport`].

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod cli;
pub mod config;
pub mod logging;
pub mod report;
