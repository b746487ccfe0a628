//! LSP (Language Server Protocol) implementation layer
//!
//! This module handles communication with editors via LSP: assist code
//! actions backed by the assist cache, and pub commands on `pubspec.yaml`.
//!
//! # Modules
//!
//! - [`backend`]: Main LSP backend implementing `LanguageServer` trait
//! - [`code_action`]: Builds code actions from assists and pub commands
//! - [`documents`]: Open document text and versions
//! - [`notifier`]: Forwards pub notifications to the client
//! - [`position`]: LSP position / byte offset conversion
//! - [`server`]: LSP server initialization and logging

pub mod backend;
pub mod code_action;
pub mod documents;
pub mod notifier;
pub mod position;
pub mod server;
