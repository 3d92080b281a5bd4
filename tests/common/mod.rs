// tests/common/mod.rs
//! 共通テストユーティリティ

pub mod workspace;

#[allow(unused_imports)]
pub use workspace::{TempWorkspace, closed_url};
