//! Shared helpers for integration tests
#![allow(dead_code, unused_imports)]

pub mod assist;
pub mod lsp;
pub mod sdk;

pub use assist::CountingProvider;
pub use lsp::*;
pub use sdk::*;
