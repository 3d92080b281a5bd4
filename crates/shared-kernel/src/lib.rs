// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    ApplicationError, ApplicationResult, DomainError, DomainResult, ErrorContext, ExtractionError,
    ExtractionResult, InfraResult, InfrastructureError, RadarError, Result,
};

pub mod error;
pub mod value_objects;

pub use value_objects::{FileExtension, ModificationTime};
