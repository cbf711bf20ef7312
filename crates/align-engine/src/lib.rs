//! # align-engine
//!
//! The façade every front end talks to. [`AlignmentEngine::analyze`] rejects
//! invalid input with an error and turns any internal failure into a failure
//! result, so a single bad pair never takes the caller down.

pub mod engine;
pub mod health;
pub mod matrix;
pub mod validation;

pub use engine::AlignmentEngine;
