pub mod config;
pub mod dataset;
pub mod editor;
pub mod error;
pub mod fixture;
pub mod geometry;
pub mod mapping;
pub mod math;
pub mod operations;

pub use error::{RegionsplitError, Result};
