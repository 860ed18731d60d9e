//! Typed datasets loaded from CSV.

pub mod cell;
pub mod dataset;

pub use cell::Cell;
pub use dataset::{Column, Dataset};
