//! Browser-facing helpers.

pub mod runtime;
