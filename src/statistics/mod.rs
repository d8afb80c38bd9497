//! Per-operator statistics of a drill session

mod core;
mod report;

pub use self::core::{OperatorTally, Statistics};
