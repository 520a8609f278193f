//! Explanation Object Model
//!
//! The record produced by an exception analyzer and consumed here.
//! This crate reads explanations to enrich diagnostic logs; it never
//! computes, mutates, or persists them.

pub mod model;

pub use model::{Explanation, ExplanationBuilder, ErrorCategory, SourceLocation};
