// ==============================================================================
// Edit Distance
// ==============================================================================
//
// The metric underneath typo detection: how many single-character edits
// separate the name the user typed from a name in the trusted corpus.

/// Compute the Levenshtein edit distance between two strings: the minimum
/// number of single-character insertions, deletions, or substitutions needed
/// to transform `a` into `b`.
///
/// Uses the standard dynamic programming algorithm with a two-row buffer
/// (O(min-side) space instead of the full table). Package names are short, so
/// the O(len(a) * len(b)) time bound is never a concern in practice.
///
/// Comparison is char-wise with no normalization; callers that want
/// case-insensitive matching must fold case before calling.
#[must_use]
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    if a_chars.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a_chars.len();
    }

    // Two rows of the DP table, swapped after each character of `a`.
    // prev_row[j] holds the distance between a[..i] and b[..j].
    let mut prev_row: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr_row = vec![0; b_chars.len() + 1];

    for (i, &ca) in a_chars.iter().enumerate() {
        curr_row[0] = i + 1;
        for (j, &cb) in b_chars.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            curr_row[j + 1] = (prev_row[j] + cost) // substitution
                .min(prev_row[j + 1] + 1) // deletion
                .min(curr_row[j] + 1); // insertion
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }
    prev_row[b_chars.len()]
}
