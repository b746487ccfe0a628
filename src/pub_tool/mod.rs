//! pub package manager integration
//!
//! # Modules
//!
//! - [`command`]: the pub commands offered on `pubspec.yaml`
//! - [`sdk`]: SDK validation and package root lookup
//! - [`runner`]: runs pub and reports the outcome
//! - [`notifier`]: notification sink trait
//! - [`error`]: configuration and execution errors

pub mod command;
pub mod error;
pub mod notifier;
pub mod runner;
pub mod sdk;

pub use command::PubCommand;
pub use error::{PubError, PubErrorKind};
pub use notifier::{Notification, NotificationKind, Notifier};
pub use runner::{PubOutput, PubRunner};
pub use sdk::{Sdk, module_root};
