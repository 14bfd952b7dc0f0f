// ==============================================================================
// Trusted Corpus
// ==============================================================================
//
// The reference list of known-good package names that candidate installs are
// checked against. On disk this is a newline-delimited text file, one package
// name per line (the format of the published top-N npm package dumps).

use std::fs;
use std::path::Path;

use crate::error::{Result, SafeinstallError};

/// An ordered list of trusted package names.
///
/// Order matters: it determines the order in which near-matches are reported.
/// The list is not assumed sorted or deduplicated; duplicate entries simply
/// produce duplicate candidates. Names are stored exactly as given, with no
/// case or whitespace normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    names: Vec<String>,
}

impl Corpus {
    /// Build a corpus from an iterator of names, preserving order.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Corpus {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Load a corpus from a newline-delimited text file.
    ///
    /// Empty lines are dropped, so the trailing newline most corpus files end
    /// with does not turn into an empty-string entry (which would otherwise
    /// match any candidate no longer than the tolerance threshold). Lines are
    /// otherwise taken verbatim.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| SafeinstallError::Corpus {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Corpus::from_names(
            contents.lines().filter(|line| !line.is_empty()),
        ))
    }

    /// The trusted names, in corpus order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of entries in the corpus.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the corpus has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
