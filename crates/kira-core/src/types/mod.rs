//! Domain types shared across calculators.

mod frequency;

pub use frequency::CompoundingFrequency;
