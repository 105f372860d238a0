//! API schema types for request definitions.

pub mod contacts;
