//! Test utilities for the romkit crates.
//!
//! This crate provides:
//! - [`model::ModelSet`], a deliberately naive reference implementation of a
//!   position selection, used to cross-check the real data structure
//! - [`data_gen`], seeded generators of edit scripts and element buffers
//!
//! It is only meant to be used as a dev-dependency.

pub mod data_gen;
pub mod model;

pub use data_gen::{Edit, EditGenerator};
pub use model::ModelSet;
