//! Ready-made string parsers built from the primitives.
pub mod parsers;
