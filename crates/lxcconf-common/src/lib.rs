//! # lxcconf-common
//!
//! Shared value types, error definitions, and default constants used
//! across the lxcconf workspace.
//!
//! This crate is the leaf of the dependency graph. It depends on no other
//! internal crate and provides the typed values that the configuration
//! model in `lxcconf-core` is built from.

pub mod constants;
pub mod error;
pub mod types;
