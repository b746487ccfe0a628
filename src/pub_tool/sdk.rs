//! Dart SDK and package root resolution

use std::path::{Path, PathBuf};

use crate::pub_tool::error::PubError;

const PUBSPEC_FILE_NAME: &str = "pubspec.yaml";

#[cfg(windows)]
const PUB_EXECUTABLE: &str = "bin/pub.bat";
#[cfg(not(windows))]
const PUB_EXECUTABLE: &str = "bin/pub";

/// A Dart SDK with a usable pub executable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sdk {
    root: PathBuf,
    pub_executable: PathBuf,
}

impl Sdk {
    /// Validate the configured SDK path and locate `pub` inside it
    pub fn resolve(sdk_path: Option<&Path>) -> Result<Self, PubError> {
        let root = sdk_path
            .filter(|path| !path.as_os_str().to_string_lossy().trim().is_empty())
            .ok_or(PubError::SdkNotConfigured)?;

        if !root.is_dir() {
            return Err(PubError::SdkNotFound(root.to_path_buf()));
        }

        let pub_executable = root.join(PUB_EXECUTABLE);
        if !pub_executable.is_file() {
            return Err(PubError::ExecutableNotFound(pub_executable));
        }

        Ok(Self {
            root: root.to_path_buf(),
            pub_executable,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn pub_executable(&self) -> &Path {
        &self.pub_executable
    }
}

/// Returns the package root for a `pubspec.yaml` file, or `None` for any other file
pub fn module_root(pubspec: &Path) -> Option<PathBuf> {
    let file_name = pubspec.file_name()?.to_str()?;
    if !file_name.eq_ignore_ascii_case(PUBSPEC_FILE_NAME) {
        return None;
    }
    pubspec.parent().map(Path::to_path_buf)
}
