//! Core types shared by every Gluon crate.
//!
//! This crate provides:
//! - Block identifiers and the closed set of block kinds
//! - Option maps and typed option resolution
//! - Error types

pub mod errors;
pub mod options;
pub mod types;

pub use errors::*;
pub use options::*;
pub use types::*;
