//! assist-lsp: a Language Server that memoizes analysis assists and drives
//! the `pub` package manager for Dart packages.
//!
//! # Modules
//!
//! - [`assist`]: single-slot assist cache and the analysis backend interface
//! - [`pub_tool`]: SDK resolution and `pub` invocation with notifications
//! - [`lsp`]: tower-lsp backend wiring both into editor requests
//! - [`config`]: configuration and data directory paths

pub mod assist;
pub mod config;
pub mod lsp;
pub mod pub_tool;
