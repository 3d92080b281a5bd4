//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! This crate defines traits that abstract external concerns:
//!
//! - [`filesystem`]: directory scanning and file-owner lookup
//! - [`extraction`]: per-format content extractors and the total document reader
//! - [`notify`]: chat notification delivery
//! - [`analysis`]: LLM summarization
//!
//! These ports allow the domain and application layers to remain
//! independent of specific implementations.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod analysis;
pub mod extraction;
pub mod filesystem;
pub mod notify;
