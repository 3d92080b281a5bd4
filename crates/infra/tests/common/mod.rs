// crates/infra/tests/common/mod.rs
//! 共通テストユーティリティ

pub mod documents;
pub mod http;

#[allow(unused_imports)]
pub use documents::*;
#[allow(unused_imports)]
pub use http::*;
