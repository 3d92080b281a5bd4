// crates/shared-kernel/src/value_objects/mod.rs
pub mod file_extension;
pub mod modification_time;

pub use file_extension::FileExtension;
pub use modification_time::{DISPLAY_FORMAT, ModificationTime};
