//! Quick assist layer
//!
//! Assists are expensive to compute, and editors ask for them repeatedly at
//! the same caret position. The cache remembers the single most recent answer.
//!
//! ```text
//! ┌─────────────┐  miss   ┌─────────────┐
//! │ AssistCache │────────▶│  Provider   │
//! │ (one slot)  │◀────────│  (backend)  │
//! └─────────────┘         └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`cache`]: single-slot memoization keyed by [`key::QueryKey`]
//! - [`key`]: query key and document identity
//! - [`provider`]: backend trait and the external command implementation
//! - [`types`]: `SourceChange` payload returned by the backend
//! - [`error`]: error types for backend queries

pub mod cache;
pub mod error;
pub mod key;
pub mod provider;
pub mod types;

pub use cache::AssistCache;
pub use error::AssistError;
pub use key::{DocumentId, QueryKey};
pub use provider::{AssistProvider, AssistRequest, CommandAssistProvider};
pub use types::{SourceChange, SourceEdit};
