// ==============================================================================
// Install Dispatch
// ==============================================================================
//
// Hands the final chosen name to the real package manager. The wrapped
// installer's stdio is inherited so its progress output and prompts reach the
// user directly, and its exit status becomes this tool's exit status.

use std::env;
use std::process::{Command, ExitStatus};

use crate::error::{Result, SafeinstallError};

/// Resolve the package-manager executable to invoke.
///
/// npm sets `npm_execpath` in the environment of lifecycle scripts, so a
/// wrapper running under npm dispatches back to the same npm that invoked it.
/// Outside that, fall back to `npm` on `PATH`.
#[must_use]
pub fn package_manager() -> String {
    env::var("npm_execpath").unwrap_or_else(|_| "npm".to_string())
}

/// Run `<program> install <package>` with inherited stdio.
///
/// The package name is passed as a single argument, never through a shell, so
/// names containing shell metacharacters cannot inject commands. Returns the
/// child's exit status; the caller decides whether a non-zero status is
/// fatal.
pub fn install_package(program: &str, package: &str) -> Result<ExitStatus> {
    Command::new(program)
        .arg("install")
        .arg(package)
        .status()
        .map_err(|source| SafeinstallError::Spawn {
            program: program.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_program_is_a_spawn_error() {
        let err = install_package("this-program-does-not-exist-anywhere", "react").unwrap_err();
        assert!(matches!(err, SafeinstallError::Spawn { .. }));
        assert!(err.to_string().contains("this-program-does-not-exist-anywhere"));
    }

    #[cfg(unix)]
    #[test]
    fn dispatches_install_subcommand_with_package_name() {
        use std::fs;
        use std::os::unix::fs::PermissionsExt;

        // A fake package manager that records its arguments and exits 0.
        let dir = tempfile::tempdir().expect("create temp dir");
        let log = dir.path().join("args.log");
        let fake = dir.path().join("fake-npm");
        fs::write(&fake, format!("#!/bin/sh\necho \"$@\" > {}\n", log.display()))
            .expect("write fake npm");
        fs::set_permissions(&fake, fs::Permissions::from_mode(0o755))
            .expect("mark fake npm executable");

        let status = install_package(fake.to_str().expect("utf-8 path"), "axios")
            .expect("fake npm should run");
        assert!(status.success());
        let recorded = fs::read_to_string(&log).expect("read recorded args");
        assert_eq!(recorded.trim(), "install axios");
    }

    #[cfg(unix)]
    #[test]
    fn propagates_nonzero_exit_status() {
        use std::fs;
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().expect("create temp dir");
        let fake = dir.path().join("fake-npm");
        fs::write(&fake, "#!/bin/sh\nexit 7\n").expect("write fake npm");
        fs::set_permissions(&fake, fs::Permissions::from_mode(0o755))
            .expect("mark fake npm executable");

        let status = install_package(fake.to_str().expect("utf-8 path"), "axios")
            .expect("fake npm should run");
        assert_eq!(status.code(), Some(7));
    }
}
