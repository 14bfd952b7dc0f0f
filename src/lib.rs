//! Typo-squatting guard for package installs — classify a package name
//! against a corpus of trusted names before letting it anywhere near an
//! installer.
//!
//! Typosquatters publish malicious packages under names one or two
//! keystrokes away from popular ones (`axois` for `axios`, `lodahs` for
//! `lodash`). This crate provides the classification core behind the
//! `safeinstall` CLI:
//!
//! - [`levenshtein`] — the edit-distance metric.
//! - [`Corpus`] — an ordered list of trusted names, loadable from a
//!   newline-delimited file.
//! - [`Corpus::classify`] — turn a candidate name into a [`Classification`]:
//!   trusted, suspected typo (with the near-matching trusted names), or
//!   simply unrecognized.
//!
//! # Classifying a name
//!
//! ```
//! use safeinstall::{Classification, Corpus};
//!
//! let corpus = Corpus::from_names(["react", "axios", "express"]);
//! match corpus.classify("axois", 2) {
//!     Classification::Trusted => { /* exact match, install away */ }
//!     Classification::SuspectedTypo(candidates) => {
//!         assert_eq!(candidates, ["axios"]);
//!     }
//!     Classification::Unrecognized => { /* novel name, not our problem */ }
//! }
//! ```
//!
//! The classifier is pure and stateless: no I/O, no retained state between
//! calls, and a loaded [`Corpus`] can be shared freely across threads.
//!
//! # Error handling
//!
//! The classification core never fails; fallible operations (corpus loading,
//! prompting, install dispatch) return [`error::Result`], which the CLI
//! converts to [`miette::Report`] for diagnostic output.

pub mod classify;
pub mod corpus;
pub mod distance;
pub mod error;
pub mod install;
pub mod prompt;

// Re-export the small public API at the crate root.
pub use classify::Classification;
pub use corpus::Corpus;
pub use distance::levenshtein;
