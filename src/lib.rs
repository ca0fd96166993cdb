//! Core library functions for the genome family analyzer

pub mod config;
pub mod data;
pub mod compare;
pub mod graph;
pub mod cluster;
pub mod error;
pub mod report;

pub use anyhow::{Result, anyhow};
