//! Fake Dart SDK for pub tests

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::thread;
use std::time::Duration;

use tempfile::TempDir;

/// Argument that makes the fake `pub` exit before running its script
const READY_ARG: &str = "--fake-sdk-ready";

/// errno for "Text file busy"
const ETXTBSY: i32 = 26;

/// Create an SDK directory whose `bin/pub` runs `script` with `sh`
#[cfg(unix)]
pub fn create_fake_sdk(script: &str) -> TempDir {
    use std::os::unix::fs::PermissionsExt;

    let sdk = TempDir::new().unwrap();
    let bin = sdk.path().join("bin");
    fs::create_dir_all(&bin).unwrap();

    // Written under a temporary name so `bin/pub` only ever names a complete,
    // executable file
    let staging = bin.join("pub.tmp");
    fs::write(
        &staging,
        format!("#!/bin/sh\n[ \"$1\" = \"{READY_ARG}\" ] && exit 0\n{script}\n"),
    )
    .unwrap();
    fs::set_permissions(&staging, fs::Permissions::from_mode(0o755)).unwrap();
    let pub_path = bin.join("pub");
    fs::rename(&staging, &pub_path).unwrap();

    wait_until_executable(&pub_path);
    sdk
}

/// Block until `path` can be exec'd.
///
/// A child forked by another test thread while the script was open for
/// writing keeps that descriptor until it execs, and the kernel refuses to run
/// the script with ETXTBSY in the meantime.
#[cfg(unix)]
fn wait_until_executable(path: &Path) {
    for _ in 0..100 {
        match Command::new(path).arg(READY_ARG).status() {
            Ok(status) => {
                assert!(status.success(), "fake pub failed its readiness check");
                return;
            }
            Err(e) if e.raw_os_error() == Some(ETXTBSY) => {
                thread::sleep(Duration::from_millis(10));
            }
            Err(e) => panic!("failed to run fake pub: {e}"),
        }
    }
    panic!("fake pub at {} stayed busy", path.display());
}

/// Create a package directory containing a `pubspec.yaml`
#[allow(dead_code)]
pub fn create_package() -> (TempDir, PathBuf) {
    let package = TempDir::new().unwrap();
    let pubspec = package.path().join("pubspec.yaml");
    fs::write(&pubspec, "name: sample\n").unwrap();
    (package, pubspec)
}

#[allow(dead_code)]
pub fn canonical(path: &Path) -> PathBuf {
    path.canonicalize().unwrap()
}
