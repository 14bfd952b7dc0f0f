// ==============================================================================
// Typo Classifier
// ==============================================================================
//
// Turns a raw edit distance into an install/warn decision: a candidate name is
// either a trusted name typed verbatim, a suspected typo of one or more
// trusted names, or something the corpus has never heard of.

use crate::corpus::Corpus;
use crate::distance::levenshtein;

/// The outcome of checking a candidate package name against the trusted
/// corpus.
///
/// Exactly one variant is produced per call. `Trusted` and `SuspectedTypo`
/// are mutually exclusive: an exact match proves the user meant this name,
/// regardless of how close other corpus entries happen to be, so it
/// suppresses any near-match reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// The candidate is exactly equal to some corpus entry.
    Trusted,
    /// The candidate matches no corpus entry exactly, but is within the
    /// tolerance threshold of the listed entries. Candidates appear in corpus
    /// order and may contain duplicates if the corpus does.
    SuspectedTypo(Vec<String>),
    /// The candidate matches nothing in the corpus, exactly or approximately.
    Unrecognized,
}

impl Corpus {
    /// Classify `candidate` against this corpus.
    ///
    /// Scans entries in order, computing the edit distance to each. The first
    /// exact match (distance 0) short-circuits to [`Classification::Trusted`]
    /// immediately. Otherwise every entry with distance in `(0, threshold]`
    /// is collected; a non-empty collection becomes
    /// [`Classification::SuspectedTypo`], an empty one
    /// [`Classification::Unrecognized`].
    ///
    /// A `threshold` of 0 degenerates to pure membership testing: the
    /// qualifying range is empty, so the result is always `Trusted` or
    /// `Unrecognized`. The classifier is stateless; calling it repeatedly
    /// with different thresholds against the same corpus is fine.
    #[must_use]
    pub fn classify(&self, candidate: &str, threshold: usize) -> Classification {
        let mut near_misses = Vec::new();

        for name in self.names() {
            let distance = levenshtein(candidate, name);
            if distance == 0 {
                // Exact match is proof of intent; stop scanning and report
                // nothing else, even if near-matches were already collected.
                return Classification::Trusted;
            }
            if distance <= threshold {
                near_misses.push(name.clone());
            }
        }

        if near_misses.is_empty() {
            Classification::Unrecognized
        } else {
            Classification::SuspectedTypo(near_misses)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn small_corpus() -> Corpus {
        Corpus::from_names(["react", "axios", "express", "lodash", "vue"])
    }

    #[test]
    fn exact_match_is_trusted() {
        assert_eq!(small_corpus().classify("react", 2), Classification::Trusted);
    }

    #[test]
    fn near_miss_is_suspected_typo() {
        assert_eq!(
            small_corpus().classify("axois", 2),
            Classification::SuspectedTypo(vec!["axios".into()])
        );
    }

    #[test]
    fn unrelated_name_is_unrecognized() {
        assert_eq!(
            small_corpus().classify("zzzzz-totally-unrelated-9999", 2),
            Classification::Unrecognized
        );
    }

    #[test]
    fn exact_match_suppresses_earlier_near_misses() {
        // "reacts" is distance 1 from "react" (listed first) but also present
        // verbatim later; the exact match wins even though a near-miss was
        // already collected when it is reached.
        let corpus = Corpus::from_names(["react", "reacts"]);
        assert_eq!(corpus.classify("reacts", 2), Classification::Trusted);
    }

    #[test]
    fn candidates_preserve_corpus_order_and_duplicates() {
        let corpus = Corpus::from_names(["vue", "axios", "axios", "axis"]);
        assert_eq!(
            corpus.classify("axois", 2),
            Classification::SuspectedTypo(vec!["axios".into(), "axios".into(), "axis".into()])
        );
    }

    #[test]
    fn reordering_corpus_reorders_candidates() {
        let forward = Corpus::from_names(["axios", "axis"]).classify("axois", 2);
        let backward = Corpus::from_names(["axis", "axios"]).classify("axois", 2);
        assert_eq!(
            forward,
            Classification::SuspectedTypo(vec!["axios".into(), "axis".into()])
        );
        assert_eq!(
            backward,
            Classification::SuspectedTypo(vec!["axis".into(), "axios".into()])
        );
    }

    #[test]
    fn threshold_zero_is_membership_testing() {
        let corpus = small_corpus();
        assert_eq!(corpus.classify("react", 0), Classification::Trusted);
        // Distance-1 neighbor, but the qualifying range (0, 0] is empty.
        assert_eq!(corpus.classify("reactt", 0), Classification::Unrecognized);
    }

    #[test]
    fn threshold_boundary_is_inclusive() {
        let corpus = Corpus::from_names(["express"]);
        // "expres" is at distance exactly 1.
        assert_eq!(
            corpus.classify("expres", 1),
            Classification::SuspectedTypo(vec!["express".into()])
        );
        assert_eq!(corpus.classify("expres", 0), Classification::Unrecognized);
    }

    #[test]
    fn empty_corpus_is_always_unrecognized() {
        let corpus = Corpus::from_names(Vec::<String>::new());
        assert_eq!(corpus.classify("react", 2), Classification::Unrecognized);
        assert_eq!(corpus.classify("", 2), Classification::Unrecognized);
    }

    #[test]
    fn empty_candidate_matches_by_length() {
        // Distance from "" to each entry is that entry's length.
        let corpus = Corpus::from_names(["ms", "qs", "react"]);
        assert_eq!(
            corpus.classify("", 2),
            Classification::SuspectedTypo(vec!["ms".into(), "qs".into()])
        );
    }

    #[test]
    fn empty_candidate_can_be_trusted() {
        let corpus = Corpus::from_names(["react", ""]);
        assert_eq!(corpus.classify("", 2), Classification::Trusted);
    }

    #[test]
    fn classification_is_idempotent() {
        let corpus = small_corpus();
        assert_eq!(corpus.classify("axois", 2), corpus.classify("axois", 2));
    }
}
