//! Internal utilities for the chat shapes.

pub mod validation;

pub use validation::Validator;
