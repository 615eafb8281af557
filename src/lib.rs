//! Stratified train/test splitting of CSV files.
//!
//! The source is read twice: once to count the values of the
//! stratify column, once to route every row to train or test so
//! that each category keeps the requested test ratio exactly.

pub mod application;
pub mod cli;
pub mod data;
pub mod domain;
pub mod infra;
