use std::path::PathBuf;
use std::process::ExitStatus;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SafeinstallError>;

/// Errors from the boundaries around the classifier: corpus loading, the
/// selection prompt, and install dispatch. The classifier itself raises no
/// errors; every input it can be handed has a well-defined classification.
#[derive(Debug)]
pub enum SafeinstallError {
    /// The trusted-corpus file could not be read.
    Corpus {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The user's selection at the typo prompt was not a listed option.
    InvalidSelection(String),
    /// The package manager could not be spawned.
    Spawn {
        program: String,
        source: std::io::Error,
    },
    /// The package manager ran but exited unsuccessfully.
    InstallFailed { package: String, status: ExitStatus },
    /// Terminal I/O failed while prompting.
    Io { source: std::io::Error },
}

impl std::fmt::Display for SafeinstallError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SafeinstallError::Corpus { path, source } => {
                write!(f, "read trusted corpus {}: {source}", path.display())
            }
            SafeinstallError::InvalidSelection(input) => {
                write!(f, "'{input}' is not one of the listed options")
            }
            SafeinstallError::Spawn { program, source } => {
                write!(f, "run package manager '{program}': {source}")
            }
            SafeinstallError::InstallFailed { package, status } => {
                write!(f, "install of '{package}' failed: {status}")
            }
            SafeinstallError::Io { source } => write!(f, "terminal I/O: {source}"),
        }
    }
}

impl std::error::Error for SafeinstallError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SafeinstallError::Corpus { source, .. }
            | SafeinstallError::Spawn { source, .. }
            | SafeinstallError::Io { source } => Some(source),
            SafeinstallError::InvalidSelection(_) | SafeinstallError::InstallFailed { .. } => None,
        }
    }
}

impl miette::Diagnostic for SafeinstallError {}

impl From<std::io::Error> for SafeinstallError {
    fn from(source: std::io::Error) -> Self {
        SafeinstallError::Io { source }
    }
}
