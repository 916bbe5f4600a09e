//! Interactive labeling of line-delimited JSON records.
//!
//! A reviewer is shown one record at a time from a pool filtered by
//! include / exclude terms and picks a label from a fixed menu. Labels
//! are appended to an output file that doubles as the resume point.
//!
//! Layers, outermost first: [`cli`] → [`application`] → [`domain`],
//! with [`data`] and [`infra`] underneath.

pub mod application;
pub mod cli;
pub mod data;
pub mod domain;
pub mod infra;
