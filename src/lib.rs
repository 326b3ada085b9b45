//! DNA Sequence Analysis - desktop front-end
//!
//! Collects a FASTA input and a CSV output path, runs the external analysis
//! executable on them in the background and reports how it went.

pub mod background;
pub mod config;
pub mod error;
pub mod runner;
pub mod session;
