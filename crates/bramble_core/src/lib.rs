//! Value types shared across the bramble asset pipeline

pub mod hash;
pub mod types;
