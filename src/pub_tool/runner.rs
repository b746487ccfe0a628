//! Runs pub in a package root and reports the outcome

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, error, info};

use crate::pub_tool::command::PubCommand;
use crate::pub_tool::error::PubError;
use crate::pub_tool::notifier::{Notification, Notifier};
use crate::pub_tool::sdk::Sdk;

/// Environment variable pointing pub at its SDK
const DART_SDK_ENV: &str = "DART_SDK";

/// Captured output of a successful pub run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PubOutput {
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

pub struct PubRunner {
    sdk_path: Option<PathBuf>,
}

impl PubRunner {
    pub fn new(sdk_path: Option<PathBuf>) -> Self {
        Self { sdk_path }
    }

    /// Run `command` in `module_root`, blocking until pub exits.
    ///
    /// Every outcome is reported to `notifier` exactly once. The same outcome is
    /// returned so callers can react to it (e.g. refresh the package directory).
    pub fn run(
        &self,
        command: PubCommand,
        module_root: &Path,
        notifier: &dyn Notifier,
    ) -> Result<PubOutput, PubError> {
        let result = self.execute(command, module_root);

        let notification = match &result {
            Ok(_) => Notification::information(
                command.title(),
                command.success_marker().replace('!', "."),
            ),
            Err(e) => {
                error!("pub {} failed ({:?}): {}", command.argument(), e.kind(), e);
                Notification::error(command.title(), e.to_string())
            }
        };
        notifier.notify(notification);

        result
    }

    fn execute(&self, command: PubCommand, module_root: &Path) -> Result<PubOutput, PubError> {
        let sdk = Sdk::resolve(self.sdk_path.as_deref())?;

        info!("Running pub {} in {:?}", command.argument(), module_root);

        let output = Command::new(sdk.pub_executable())
            .arg(command.argument())
            .current_dir(module_root)
            .env(DART_SDK_ENV, sdk.root())
            .output()
            .map_err(|source| PubError::Launch {
                path: sdk.pub_executable().to_path_buf(),
                source,
            })?;

        let exit_code = output.status.code();
        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        debug!("pub terminated with exit code: {:?}", exit_code);
        debug!("{}", stdout);
        debug!("{}", stderr);

        if stdout.contains(command.success_marker()) {
            Ok(PubOutput {
                exit_code,
                stdout,
                stderr,
            })
        } else {
            Err(PubError::Execution {
                exit_code,
                stdout,
                stderr,
            })
        }
    }
}
