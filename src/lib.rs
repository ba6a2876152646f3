// src/lib.rs

#[macro_use]
pub mod macros;

pub mod config;
pub mod core;
pub mod specs;

pub mod catalog;
pub mod cli;
pub mod csv;
pub mod data;
pub mod driver;
pub mod edges;
pub mod error;
pub mod file;
pub mod harvest;
pub mod logger;
pub mod progress;
pub mod store;

pub use error::HarvestError;
